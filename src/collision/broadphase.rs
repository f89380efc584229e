//! Exhaustive pair enumeration. Every unordered pair is visited once per
//! frame, so the cost is O(n²).

/// Iterator over every index pair `(i, j)` with `i < j < len`, row-major.
#[derive(Debug, Clone)]
pub struct PairIter {
    len: usize,
    i: usize,
    j: usize,
}

impl Iterator for PairIter {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        if self.j >= self.len {
            self.i += 1;
            self.j = self.i + 1;
            if self.j >= self.len {
                return None;
            }
        }
        let pair = (self.i, self.j);
        self.j += 1;
        Some(pair)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let mut remaining = self.len.saturating_sub(self.j);
        let rows_after = self.len.saturating_sub(self.i + 1);
        // Full rows below the current one: (rows_after - 1) + ... + 1
        if rows_after > 0 {
            remaining += rows_after * (rows_after - 1) / 2;
        }
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for PairIter {}

pub fn all_pairs(len: usize) -> PairIter {
    PairIter { len, i: 0, j: 1 }
}

/// Two disjoint mutable borrows out of one slice. Returns `None` when the
/// indices are equal or out of range.
pub fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }

    if a < b {
        let (left, right) = items.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = items.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_each_unordered_pair_once() {
        let pairs: Vec<_> = all_pairs(4).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn small_collections_have_no_pairs() {
        assert_eq!(all_pairs(0).count(), 0);
        assert_eq!(all_pairs(1).count(), 0);
        assert_eq!(all_pairs(2).len(), 1);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut pairs = all_pairs(6);
        assert_eq!(pairs.len(), 15);
        for _ in 0..7 {
            pairs.next();
        }
        assert_eq!(pairs.len(), 8);
        assert_eq!(pairs.count(), 8);
    }

    #[test]
    fn pair_mut_preserves_argument_order() {
        let mut values = [1, 2, 3, 4];
        let (a, b) = pair_mut(&mut values, 3, 1).expect("distinct indices");
        assert_eq!((*a, *b), (4, 2));
        *a = 40;
        *b = 20;
        assert_eq!(values, [1, 20, 3, 40]);

        assert!(pair_mut(&mut values, 2, 2).is_none());
        assert!(pair_mut(&mut values, 0, 4).is_none());
    }
}
