use smallvec::SmallVec;

pub type Sequence<T> = SmallVec<[T; 4]>;

/// Yields every ordering of a sequence, using the iterative form of Heap's algorithm.
///
/// The first item is the input order itself. An empty input yields exactly one empty
/// sequence. The number of items is `n!`, there is no pruning.
pub struct Permutations<T> {
    items: Sequence<T>,
    counters: SmallVec<[usize; 4]>,
    index: usize,
    started: bool,
    remaining: usize,
}

impl<T: Clone> Permutations<T> {
    pub fn new(items: impl IntoIterator<Item = T>) -> Self {
        let items: Sequence<T> = items.into_iter().collect();
        let len = items.len();

        Permutations {
            counters: SmallVec::from_elem(0, len),
            remaining: factorial(len),
            items,
            index: 1,
            started: false,
        }
    }
}

fn factorial(n: usize) -> usize {
    (1..=n).fold(1usize, |acc, k| acc.saturating_mul(k))
}

impl<T: Clone> Iterator for Permutations<T> {
    type Item = Sequence<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            self.remaining = self.remaining.saturating_sub(1);
            return Some(self.items.clone());
        }

        while self.index < self.items.len() {
            let i = self.index;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }

                self.counters[i] += 1;
                self.index = 1;
                self.remaining = self.remaining.saturating_sub(1);
                return Some(self.items.clone());
            }

            self.counters[i] = 0;
            self.index += 1;
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use fxhash::FxHashSet;

    use super::*;

    #[test]
    fn test_empty_yields_single_empty_sequence() {
        let permutations: Vec<Sequence<u8>> = Permutations::new(Vec::<u8>::new()).collect();
        assert_eq!(permutations.len(), 1);
        assert!(permutations[0].is_empty());
    }

    #[test]
    fn test_single_item() {
        let permutations: Vec<Sequence<u8>> = Permutations::new([7]).collect();
        assert_eq!(permutations, vec![SmallVec::<[u8; 4]>::from_slice(&[7])]);
    }

    #[test]
    fn test_yields_every_distinct_ordering() {
        for n in 1..=5usize {
            let permutations: Vec<Sequence<usize>> = Permutations::new(0..n).collect();
            let distinct: FxHashSet<Vec<usize>> =
                permutations.iter().map(|p| p.to_vec()).collect();

            assert_eq!(permutations.len(), factorial(n));
            assert_eq!(distinct.len(), factorial(n));
            for permutation in &permutations {
                let mut sorted = permutation.to_vec();
                sorted.sort();
                assert_eq!(sorted, (0..n).collect::<Vec<_>>());
            }
        }
    }

    #[test]
    fn test_first_is_input_order() {
        let mut permutations = Permutations::new(['a', 'b', 'c']);
        assert_eq!(permutations.next().unwrap().as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_size_hint_counts_down() {
        let mut permutations = Permutations::new([1, 2, 3]);
        assert_eq!(permutations.size_hint(), (6, Some(6)));
        permutations.next();
        permutations.next();
        assert_eq!(permutations.size_hint(), (4, Some(4)));
        assert_eq!(permutations.count(), 4);
    }
}
