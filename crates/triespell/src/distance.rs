// Levenshtein edit distance
//
// Insertion, deletion and substitution each cost 1. Both variants keep two
// rolling rows of length n + 1, so a comparison costs O(m * n) time and
// O(n) space.

use std::mem;

/// Edit distance between two strings, compared character by character.
///
/// ```
/// use triespell::distance::levenshtein;
///
/// assert_eq!(levenshtein("kitten", "sitting"), 3);
/// assert_eq!(levenshtein("", "abc"), 3);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    levenshtein_slices(&a, &b)
}

/// Edit distance between two sequences of comparable symbols.
pub fn levenshtein_slices<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    let n = b.len();
    if a.is_empty() {
        return n;
    }
    if n == 0 {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
        }
        mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Edit distance between two strings if it does not exceed `max`.
///
/// Returns `None` as soon as the distance is known to be larger than `max`,
/// without finishing the table. Whenever the full distance is `<= max` the
/// result equals `Some(levenshtein(a, b))`.
pub fn bounded_distance(a: &str, b: &str, max: usize) -> Option<usize> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    bounded_distance_slices(&a, &b, max)
}

/// Slice form of [`bounded_distance`].
pub fn bounded_distance_slices<T: PartialEq>(a: &[T], b: &[T], max: usize) -> Option<usize> {
    let (m, n) = (a.len(), b.len());
    if m.abs_diff(n) > max {
        return None;
    }
    if m == 0 || n == 0 {
        // The length check above already bounds max(m, n) by max.
        return Some(m.max(n));
    }

    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0; n + 1];
    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        let mut row_min = curr[0];
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(prev[j + 1]).min(curr[j])
            };
            row_min = row_min.min(curr[j + 1]);
        }
        // Row minima never decrease, so the final cell cannot recover.
        if row_min > max {
            return None;
        }
        mem::swap(&mut prev, &mut curr);
    }
    let distance = prev[n];
    (distance <= max).then_some(distance)
}
