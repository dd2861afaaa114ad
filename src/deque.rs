use crate::error::Error;

#[derive(Debug, Clone)]
struct Node<T> {
    item: Option<T>,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Double ended queue backed by a doubly linked list.
///
/// The links are indices into a vector of nodes owned by the deque. Slots of
/// removed nodes are recycled through a free list, so a steady mix of pushes
/// and pops does not grow the allocation. Every push and pop is O(1).
#[derive(Debug, Clone)]
pub struct LinearDeque<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> Default for LinearDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LinearDeque<T> {
    pub fn new() -> LinearDeque<T> {
        LinearDeque {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    fn alloc(&mut self, item: T, prev: Option<usize>, next: Option<usize>) -> usize {
        let node = Node {
            item: Some(item),
            prev,
            next,
        };
        self.len += 1;
        match self.free.pop() {
            Some(index) => {
                self.nodes[index] = node;
                index
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        }
    }

    /// Take the item out of the node at `index` and return the slot to the
    /// free list. The caller is responsible for fixing up the links.
    fn release(&mut self, index: usize) -> (T, Option<usize>, Option<usize>) {
        let node = &mut self.nodes[index];
        let item = node
            .item
            .take()
            .expect("Released a node with no item. This should never happen.");
        let links = (node.prev.take(), node.next.take());
        self.free.push(index);
        self.len -= 1;
        (item, links.0, links.1)
    }

    pub fn push_front(&mut self, item: T) {
        let old = self.head;
        let index = self.alloc(item, None, old);
        match old {
            Some(old) => self.nodes[old].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.head = Some(index);
    }

    pub fn push_back(&mut self, item: T) {
        let old = self.tail;
        let index = self.alloc(item, old, None);
        match old {
            Some(old) => self.nodes[old].next = Some(index),
            None => self.head = Some(index),
        }
        self.tail = Some(index);
    }

    pub fn pop_front(&mut self) -> Result<T, Error> {
        let index = self.head.ok_or(Error::EmptyCollection)?;
        let (item, _, next) = self.release(index);
        self.head = next;
        match next {
            Some(next) => self.nodes[next].prev = None,
            None => self.tail = None,
        }
        Ok(item)
    }

    pub fn pop_back(&mut self) -> Result<T, Error> {
        let index = self.tail.ok_or(Error::EmptyCollection)?;
        let (item, prev, _) = self.release(index);
        self.tail = prev;
        match prev {
            Some(prev) => self.nodes[prev].next = None,
            None => self.head = None,
        }
        Ok(item)
    }

    fn item_at(&self, index: Option<usize>) -> Result<&T, Error> {
        index
            .and_then(|i| self.nodes[i].item.as_ref())
            .ok_or(Error::EmptyCollection)
    }

    pub fn peek_front(&self) -> Result<&T, Error> {
        self.item_at(self.head)
    }

    pub fn peek_back(&self) -> Result<&T, Error> {
        self.item_at(self.tail)
    }

    /// Iterate over the items from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            remaining: self.len,
        }
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    current: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next;
        self.remaining -= 1;
        node.item.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

pub struct IntoIter<T> {
    deque: LinearDeque<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        self.deque.pop_back().ok()
    }
}

impl<'a, T> IntoIterator for &'a LinearDeque<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for LinearDeque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { deque: self }
    }
}

impl<T> Extend<T> for LinearDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for LinearDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = LinearDeque::new();
        deque.extend(iter);
        deque
    }
}
