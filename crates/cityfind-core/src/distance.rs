// crates/cityfind-core/src/distance.rs
//! Levenshtein edit distance.

/// Classic Levenshtein distance with unit cost for insertion, deletion and
/// substitution (no transposition discount), counted in Unicode scalar values.
///
/// Uses a single rolling row sized to the shorter input.
///
/// # Examples
///
/// ```rust
/// use cityfind_core::distance::levenshtein;
///
/// assert_eq!(levenshtein("phonix", "phoenix"), 1);
/// assert_eq!(levenshtein("pheonix", "phoenix"), 2);
/// assert_eq!(levenshtein("kyiv", "kyiv"), 0);
/// ```
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        // row[j] still holds the previous row; `diag` is prev[j - 1]
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            let cost = usize::from(lc != sc);
            row[j + 1] = (above + 1) // deletion
                .min(row[j] + 1) // insertion
                .min(diag + cost); // substitution
            diag = above;
        }
    }
    row[short.len()]
}

/// [`levenshtein`] if it is at most `max`, else `None`. Pairs whose length
/// difference already exceeds `max` are rejected without running the DP.
pub fn levenshtein_within(a: &str, b: &str, max: usize) -> Option<usize> {
    let (la, lb) = (a.chars().count(), b.chars().count());
    if la.abs_diff(lb) > max {
        return None;
    }
    let d = levenshtein(a, b);
    (d <= max).then_some(d)
}
