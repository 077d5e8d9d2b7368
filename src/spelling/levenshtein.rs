//! Edit distance between words.

/// Number of single-character insertions, deletions and substitutions needed
/// to turn `s` into `t`.
///
/// Rows of the distance matrix are computed one at a time against `t`, so
/// memory grows with `t.len()` only and word length is unbounded.
///
/// ```
/// use spellmap::spelling::levenshtein_distance;
///
/// assert_eq!(levenshtein_distance("helo", "hello"), 1);
/// assert_eq!(levenshtein_distance("kitten", "sitting"), 3);
/// ```
pub fn levenshtein_distance(s: &str, t: &str) -> usize {
    let target: Vec<char> = t.chars().collect();

    // previous[j] is the distance from the consumed prefix of `s` to target[..j].
    let mut previous: Vec<usize> = (0..=target.len()).collect();
    let mut current = vec![0; target.len() + 1];

    for (i, source_char) in s.chars().enumerate() {
        current[0] = i + 1;
        for (j, &target_char) in target.iter().enumerate() {
            let replace = previous[j] + usize::from(source_char != target_char);
            let drop_source = previous[j + 1] + 1;
            let add_target = current[j] + 1;
            current[j + 1] = replace.min(drop_source).min(add_target);
        }
        std::mem::swap(&mut previous, &mut current);
    }

    previous[target.len()]
}
