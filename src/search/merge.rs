/// Two-pointer merges over ascending slices.
///
/// Each runs in O(a + b). Inputs with repeated elements are handled pairwise:
/// one occurrence on each side cancels or matches one on the other.
pub struct SortedMerge;

impl SortedMerge {
    /// Elements present in both
    pub fn intersect<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut result = Vec::new();
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] == b[j] {
                result.push(a[i].clone());
                i += 1;
                j += 1;
            } else if a[i] < b[j] {
                i += 1;
            } else {
                j += 1;
            }
        }

        result
    }

    /// Merges two sorted slices; equal elements are emitted once
    pub fn union<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut result = Vec::with_capacity(a.len() + b.len());
        let mut i = 0;
        let mut j = 0;

        while i < a.len() && j < b.len() {
            if a[i] < b[j] {
                result.push(a[i].clone());
                i += 1;
            } else if a[i] > b[j] {
                result.push(b[j].clone());
                j += 1;
            } else {
                result.push(a[i].clone());
                i += 1;
                j += 1;
            }
        }

        result.extend_from_slice(&a[i..]);
        result.extend_from_slice(&b[j..]);

        result
    }

    /// Elements of `a` not in `b`
    pub fn difference<T: Ord + Clone>(a: &[T], b: &[T]) -> Vec<T> {
        let mut result = Vec::with_capacity(a.len());
        let mut i = 0;
        let mut j = 0;

        while i < a.len() {
            if j >= b.len() || a[i] < b[j] {
                result.push(a[i].clone());
                i += 1;
            } else if a[i] == b[j] {
                i += 1;
                j += 1;
            } else {
                j += 1;
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intersect() {
        assert_eq!(SortedMerge::intersect(&[1, 3, 5, 7], &[2, 3, 7, 9]), vec![3, 7]);
        assert!(SortedMerge::intersect::<i32>(&[], &[1]).is_empty());
    }

    #[test]
    fn union() {
        assert_eq!(SortedMerge::union(&[1, 4, 6], &[2, 4, 8, 9]), vec![1, 2, 4, 6, 8, 9]);
        assert_eq!(SortedMerge::union(&[], &[2, 3]), vec![2, 3]);
    }

    #[test]
    fn difference() {
        assert_eq!(SortedMerge::difference(&[1, 2, 3, 4], &[0, 2, 4, 5]), vec![1, 3]);
        assert_eq!(SortedMerge::difference(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn repeated_elements_pair_off() {
        assert_eq!(SortedMerge::intersect(&[1, 1, 2], &[1, 2]), vec![1, 2]);
        assert_eq!(SortedMerge::difference(&[1, 1, 2], &[1]), vec![1, 2]);
        assert_eq!(SortedMerge::union(&[1, 1], &[1]), vec![1, 1]);
    }

    #[test]
    fn works_on_strings() {
        let a = vec!["a".to_string(), "c".to_string()];
        let b = vec!["b".to_string(), "c".to_string()];
        assert_eq!(SortedMerge::union(&a, &b), vec!["a", "b", "c"]);
    }
}
