//! K-way merge of sorted sequences through a cursor heap.

use std::cmp::Ordering;

use crate::heap::BinaryHeap;

/// Position marker into one input sequence: the next unconsumed value plus
/// the iterator holding the remainder. At most one cursor per source is
/// resident in the heap at any time.
struct Cursor<T, I> {
    source: usize,
    value: T,
    rest: I,
}

/// Comparator for the cursor min-heap: smaller values win, and equal values
/// drain in source order, so the merge is deterministic across sources.
fn cursor_priority<T: Ord, I>(a: &Cursor<T, I>, b: &Cursor<T, I>) -> Ordering {
    b.value
        .cmp(&a.value)
        .then_with(|| b.source.cmp(&a.source))
}

/// Merge `k` independently sorted sequences into one sorted vector.
///
/// Each input must already be sorted ascending. The precondition is not
/// validated: an unsorted input produces an unspecified (but non-panicking)
/// output, never an error.
///
/// Runs in O(N log k) for N total elements: every element passes through
/// exactly one push and one pop against a heap never larger than k. Equal
/// values from different sources come out in source order. Sources only
/// need forward iteration; no random access is required.
pub fn merge_sorted<T, I>(sources: Vec<I>) -> Vec<T>
where
    T: Ord,
    I: IntoIterator<Item = T>,
{
    if sources.is_empty() {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(sources.len(), cursor_priority);
    for (source, items) in sources.into_iter().enumerate() {
        let mut rest = items.into_iter();
        // An empty source never contributes a cursor.
        if let Some(value) = rest.next() {
            heap.push(Cursor {
                source,
                value,
                rest,
            });
        }
    }

    let mut merged = Vec::new();
    // Empty heap means every source is drained.
    while let Ok(cursor) = heap.pop() {
        let Cursor {
            source,
            value,
            mut rest,
        } = cursor;
        merged.push(value);
        // The successor cursor enters only after its predecessor left.
        if let Some(next) = rest.next() {
            heap.push(Cursor {
                source,
                value: next,
                rest,
            });
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_three_sorted_sources() {
        let merged = merge_sorted(vec![vec![1, 4, 5], vec![1, 3, 4], vec![2, 6]]);
        assert_eq!(merged, vec![1, 1, 2, 3, 4, 4, 5, 6]);
    }

    #[test]
    fn test_merge_no_sources() {
        let merged: Vec<i32> = merge_sorted(Vec::<Vec<i32>>::new());
        assert_eq!(merged, Vec::<i32>::new());
    }

    #[test]
    fn test_merge_all_sources_empty() {
        let merged: Vec<i32> = merge_sorted(vec![vec![], vec![], vec![]]);
        assert_eq!(merged, Vec::<i32>::new());
    }

    #[test]
    fn test_merge_single_source_is_a_copy() {
        let merged = merge_sorted(vec![vec![5]]);
        assert_eq!(merged, vec![5]);

        let merged = merge_sorted(vec![vec![1, 2, 3]]);
        assert_eq!(merged, vec![1, 2, 3]);
    }

    #[test]
    fn test_merge_mixed_empty_and_nonempty() {
        let merged = merge_sorted(vec![vec![], vec![2, 4], vec![], vec![1, 3]]);
        assert_eq!(merged, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_merge_is_permutation_and_sorted() {
        let inputs = vec![vec![0, 3, 6, 9], vec![1, 1, 8], vec![2, 5, 7, 10, 11]];
        let mut expected: Vec<i32> = inputs.iter().flatten().copied().collect();
        expected.sort();

        let merged = merge_sorted(inputs);
        assert_eq!(merged, expected);
    }

    #[test]
    fn test_merge_strings() {
        let merged = merge_sorted(vec![
            vec!["apple".to_string(), "pear".to_string()],
            vec!["banana".to_string()],
        ]);
        assert_eq!(merged, vec!["apple", "banana", "pear"]);
    }

    /// Value whose order ignores its provenance tag, so tie-breaks are
    /// observable.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Tagged {
        key: i32,
        tag: char,
    }

    impl Ord for Tagged {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Tagged {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    fn tagged(key: i32, tag: char) -> Tagged {
        Tagged { key, tag }
    }

    #[test]
    fn test_equal_values_drain_in_source_order() {
        let merged = merge_sorted(vec![
            vec![tagged(1, 'a'), tagged(2, 'a')],
            vec![tagged(1, 'b')],
            vec![tagged(1, 'c'), tagged(2, 'c')],
        ]);
        let tags: Vec<char> = merged.iter().map(|t| t.tag).collect();
        assert_eq!(
            merged.iter().map(|t| t.key).collect::<Vec<_>>(),
            vec![1, 1, 1, 2, 2]
        );
        assert_eq!(tags, vec!['a', 'b', 'c', 'a', 'c']);
    }

    #[test]
    fn test_unsorted_input_does_not_panic() {
        // Documented precondition violation: output is unspecified but the
        // merge still terminates with all elements present.
        let merged = merge_sorted(vec![vec![3, 1, 2], vec![5, 4]]);
        assert_eq!(merged.len(), 5);
        let mut sorted = merged;
        sorted.sort();
        assert_eq!(sorted, vec![1, 2, 3, 4, 5]);
    }
}
