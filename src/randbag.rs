use crate::error::Error;
use rand::{Rng, SeedableRng, rngs::StdRng, seq::SliceRandom};

/// Bag of items that are removed in uniformly random order.
///
/// Items live in a vector whose capacity is managed explicitly: it doubles
/// when the bag fills up and halves when the bag drops to a quarter of its
/// capacity. That keeps the wasted space within a constant factor of the
/// number of items while `enqueue` stays amortized O(1). Removal swaps the
/// chosen item with the last one, so `dequeue` and `sample` are O(1).
#[derive(Debug, Clone)]
pub struct RandomizedBag<T, R = StdRng> {
    items: Vec<T>,
    capacity: usize,
    rng: R,
}

impl<T> RandomizedBag<T, StdRng> {
    /// Create an empty bag with a random source seeded by the operating
    /// system.
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Create an empty bag whose removals and samples are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<T> Default for RandomizedBag<T, StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, R: Rng> RandomizedBag<T, R> {
    pub fn with_rng(rng: R) -> Self {
        RandomizedBag {
            items: Vec::with_capacity(1),
            capacity: 1,
            rng,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The number of items the bag has room for before it grows again.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    fn resize(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.items.len());
        if capacity > self.items.capacity() {
            self.items.reserve_exact(capacity - self.items.len());
        } else {
            self.items.shrink_to(capacity);
        }
        self.capacity = capacity;
    }

    pub fn enqueue(&mut self, item: T) {
        self.items.push(item);
        if self.items.len() == self.capacity {
            self.resize(2 * self.capacity);
        }
    }

    /// Remove and return an item chosen uniformly at random.
    pub fn dequeue(&mut self) -> Result<T, Error> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let index = self.rng.random_range(0..self.items.len());
        let item = self.items.swap_remove(index);
        let len = self.items.len();
        if len > 0 && len == self.capacity / 4 {
            self.resize(self.capacity / 2);
        }
        Ok(item)
    }

    /// Return an item chosen uniformly at random without removing it.
    pub fn sample(&mut self) -> Result<&T, Error> {
        if self.items.is_empty() {
            return Err(Error::EmptyCollection);
        }
        let index = self.rng.random_range(0..self.items.len());
        Ok(&self.items[index])
    }

    /// Iterate over all items in a uniformly random order. Each call shuffles
    /// its own order, so iterators are independent of each other.
    pub fn iter(&self) -> Iter<'_, T> {
        self.iter_with(&mut rand::rng())
    }

    /// Same as `iter`, but draws the order from `rng`.
    pub fn iter_with<G: Rng + ?Sized>(&self, rng: &mut G) -> Iter<'_, T> {
        let mut order: Vec<usize> = (0..self.items.len()).collect();
        order.shuffle(rng);
        Iter {
            items: &self.items,
            order,
        }
    }
}

pub struct Iter<'a, T> {
    items: &'a [T],
    order: Vec<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let items = self.items;
        self.order.pop().map(|i| &items[i])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.order.len(), Some(self.order.len()))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T, R: Rng> IntoIterator for RandomizedBag<T, R> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    /// Consume the bag, yielding the items in a uniformly random order.
    fn into_iter(mut self) -> Self::IntoIter {
        self.items.shuffle(&mut self.rng);
        self.items.into_iter()
    }
}

impl<T, R: Rng> Extend<T> for RandomizedBag<T, R> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::test::assert_uniform;
    use std::collections::HashMap;

    #[test]
    fn t_empty() {
        let mut bag: RandomizedBag<u32> = RandomizedBag::with_seed(1);
        assert!(bag.is_empty());
        assert_eq!(bag.len(), 0);
        assert_eq!(bag.capacity(), 1);
        assert_eq!(bag.dequeue(), Err(Error::EmptyCollection));
        assert_eq!(bag.sample(), Err(Error::EmptyCollection));
        assert_eq!(bag.iter().next(), None);
    }

    #[test]
    fn t_dequeue_drains_everything_once() {
        let mut bag = RandomizedBag::with_seed(42);
        bag.extend(0..100);
        assert_eq!(bag.len(), 100);
        let mut drained: Vec<i32> = Vec::new();
        while !bag.is_empty() {
            drained.push(bag.dequeue().unwrap());
        }
        assert_eq!(bag.dequeue(), Err(Error::EmptyCollection));
        assert_ne!(drained, (0..100).collect::<Vec<_>>());
        drained.sort();
        assert_eq!(drained, (0..100).collect::<Vec<_>>());
    }

    #[test]
    fn t_capacity_doubles_and_halves() {
        let mut bag = RandomizedBag::with_seed(0);
        let mut expected = Vec::new();
        for i in 0..8 {
            bag.enqueue(i);
            expected.push(bag.capacity());
        }
        assert_eq!(expected, vec![2, 4, 4, 8, 8, 8, 8, 16]);
        let mut shrinking = Vec::new();
        while !bag.is_empty() {
            bag.dequeue().unwrap();
            shrinking.push(bag.capacity());
        }
        // Halves when the length hits a quarter: at 4, 2 and 1 items.
        assert_eq!(shrinking, vec![16, 16, 16, 8, 8, 4, 2, 2]);
        bag.enqueue(1);
        assert_eq!(bag.capacity(), 2);
    }

    #[test]
    fn t_capacity_stays_within_bounds() {
        let mut bag = RandomizedBag::with_seed(9);
        let mut rng = StdRng::seed_from_u64(10);
        for i in 0..5000 {
            if rng.random_bool(0.55) || bag.is_empty() {
                bag.enqueue(i);
            } else {
                bag.dequeue().unwrap();
            }
            assert!(bag.capacity() > bag.len());
            assert!(bag.is_empty() || bag.capacity() <= 4 * bag.len());
        }
    }

    #[test]
    fn t_sample_does_not_remove() {
        let mut bag = RandomizedBag::with_seed(5);
        bag.enqueue("only");
        for _ in 0..10 {
            assert_eq!(bag.sample(), Ok(&"only"));
        }
        assert_eq!(bag.len(), 1);
        assert_eq!(bag.dequeue(), Ok("only"));
        assert!(bag.is_empty());
    }

    #[test]
    fn t_sample_is_uniform() {
        const NUM: usize = 5;
        const TRIALS: usize = 50_000;
        let mut bag = RandomizedBag::with_seed(42);
        bag.extend(0..NUM);
        let mut counts = [0usize; NUM];
        for _ in 0..TRIALS {
            counts[*bag.sample().unwrap()] += 1;
        }
        assert_uniform(&counts, 0.05);
    }

    #[test]
    fn t_dequeue_is_uniform() {
        const NUM: usize = 4;
        const TRIALS: usize = 40_000;
        let mut bag = RandomizedBag::with_seed(7);
        let mut counts = [0usize; NUM];
        for _ in 0..TRIALS {
            bag.extend(0..NUM);
            counts[bag.dequeue().unwrap()] += 1;
            while bag.dequeue().is_ok() {}
        }
        assert_uniform(&counts, 0.05);
    }

    #[test]
    fn t_iter_visits_each_item_once() {
        let mut bag = RandomizedBag::with_seed(3);
        bag.extend(0..50);
        let mut rng = StdRng::seed_from_u64(11);
        let mut first: Vec<_> = bag.iter_with(&mut rng).copied().collect();
        let mut second: Vec<_> = bag.iter_with(&mut rng).copied().collect();
        assert_ne!(first, second);
        first.sort();
        second.sort();
        assert_eq!(first, (0..50).collect::<Vec<_>>());
        assert_eq!(second, first);
        assert_eq!(bag.iter().len(), 50);
        assert_eq!(bag.len(), 50);
    }

    #[test]
    fn t_nested_iterators() {
        let mut bag = RandomizedBag::with_seed(3);
        bag.extend(0..6);
        let mut pairs = 0;
        for a in bag.iter() {
            for b in bag.iter() {
                if a != b {
                    pairs += 1;
                }
            }
        }
        assert_eq!(pairs, 30);
    }

    #[test]
    fn t_iter_permutations_are_uniform() {
        const TRIALS: usize = 60_000;
        let mut bag = RandomizedBag::with_seed(0);
        bag.extend(['a', 'b', 'c']);
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts: HashMap<String, usize> = HashMap::new();
        for _ in 0..TRIALS {
            let order: String = bag.iter_with(&mut rng).collect();
            *counts.entry(order).or_default() += 1;
        }
        assert_eq!(counts.len(), 6);
        let counts: Vec<usize> = counts.into_values().collect();
        assert_uniform(&counts, 0.05);
    }

    #[test]
    fn t_into_iter() {
        let mut bag = RandomizedBag::with_seed(8);
        for word in ["to", "be", "or", "not"] {
            bag.enqueue(String::from(word));
        }
        let mut words: Vec<String> = bag.into_iter().collect();
        words.sort();
        assert_eq!(words, vec!["be", "not", "or", "to"]);
    }
}
