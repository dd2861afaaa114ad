use std::fmt::{Debug, Display};

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was outside of its valid domain, for example a grid with
    /// side length zero.
    InvalidArgument(&'static str),
    /// A 1-based row or column index was outside `[1, n]`. Holds the offending
    /// index and `n`.
    IndexOutOfRange(usize, usize),
    /// Tried to remove or sample an item from an empty collection.
    EmptyCollection,
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidArgument(msg) => f.debug_tuple("InvalidArgument").field(msg).finish(),
            IndexOutOfRange(index, bound) => f
                .debug_tuple("IndexOutOfRange")
                .field(index)
                .field(bound)
                .finish(),
            EmptyCollection => write!(f, "EmptyCollection"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidArgument(msg) => write!(f, "invalid argument: {msg}"),
            IndexOutOfRange(index, bound) => {
                write!(f, "index {index} is not between 1 and {bound}")
            }
            EmptyCollection => write!(f, "the collection is empty"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod test {
    use super::Error;

    #[test]
    fn t_display() {
        assert_eq!(
            Error::IndexOutOfRange(0, 5).to_string(),
            "index 0 is not between 1 and 5"
        );
        assert_eq!(
            Error::InvalidArgument("grid side length must be positive").to_string(),
            "invalid argument: grid side length must be positive"
        );
        assert_eq!(Error::EmptyCollection.to_string(), "the collection is empty");
    }

    #[test]
    fn t_debug() {
        assert_eq!(
            format!("{:?}", Error::IndexOutOfRange(7, 3)),
            "IndexOutOfRange(7, 3)"
        );
        assert_eq!(format!("{:?}", Error::EmptyCollection), "EmptyCollection");
    }
}
