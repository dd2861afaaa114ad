use crate::error::Error;

/*
Weighted union-find with path compression. When two roots are united, the
root of the smaller tree is made a child of the root of the larger tree, so no
tree grows deeper than log2 of its size. That bound is what lets `root` and
`connected` walk to the root without compressing, which keeps queries on
`&self`. `find` compresses the path it walks and is used on the mutating side.
 */
#[derive(Debug, Clone)]
pub struct UnionFind {
    parents: Vec<usize>,
    sizes: Vec<usize>,
    count: usize,
}

impl UnionFind {
    /// Create `size` singleton components, one for each id in `0..size`.
    pub fn new(size: usize) -> UnionFind {
        UnionFind {
            parents: (0..size).collect(),
            sizes: vec![1; size],
            count: size,
        }
    }

    /// Same as `new`, but reports an allocation failure as an error instead
    /// of aborting.
    pub fn try_new(size: usize) -> Result<UnionFind, Error> {
        let mut parents: Vec<usize> = Vec::new();
        let mut sizes: Vec<usize> = Vec::new();
        if parents.try_reserve_exact(size).is_err() || sizes.try_reserve_exact(size).is_err() {
            return Err(Error::InvalidArgument("too many elements to allocate"));
        }
        parents.extend(0..size);
        sizes.resize(size, 1);
        Ok(UnionFind {
            parents,
            sizes,
            count: size,
        })
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }

    /// Number of components.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn unite(&mut self, x: usize, y: usize) {
        let xroot = self.find(x);
        let yroot = self.find(y);
        if xroot == yroot {
            return;
        }
        let (small, large) = if self.sizes[xroot] < self.sizes[yroot] {
            (xroot, yroot)
        } else {
            (yroot, xroot)
        };
        self.parents[small] = large;
        self.sizes[large] += self.sizes[small];
        self.count -= 1;
    }

    pub fn find(&mut self, id: usize) -> usize {
        let root = self.root(id);
        let mut current = id;
        while self.parents[current] != root {
            let next = self.parents[current];
            self.parents[current] = root;
            current = next;
        }
        return root;
    }

    /// Same as `find` but leaves the path as it is.
    pub fn root(&self, mut id: usize) -> usize {
        while self.parents[id] != id {
            id = self.parents[id];
        }
        return id;
    }

    pub fn connected(&self, x: usize, y: usize) -> bool {
        self.root(x) == self.root(y)
    }
}
