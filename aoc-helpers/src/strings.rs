//! String helpers for picking puzzle input apart.

/// Characters of `s` in reverse order
pub fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

/// Every integer embedded in `s`, in order of appearance.
///
/// A `-` immediately before a digit run makes it negative, unless the `-`
/// itself follows a digit: `2-4` is a range, not `2` and `-4`. Any other
/// character is a separator. Runs that do not fit in an `i64` are skipped.
///
/// ```rust
/// use aoc_helpers::strings::extract_ints;
///
/// assert_eq!(extract_ints("p=3,-14 v=-2,7"), vec![3, -14, -2, 7]);
/// assert_eq!(extract_ints("2-4,6-8"), vec![2, 4, 6, 8]);
/// ```
pub fn extract_ints(s: &str) -> Vec<i64> {
    let bytes = s.as_bytes();
    let mut out = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if !bytes[i].is_ascii_digit() {
            i += 1;
            continue;
        }

        let signed = i > 0 && bytes[i - 1] == b'-' && (i < 2 || !bytes[i - 2].is_ascii_digit());
        let start = if signed { i - 1 } else { i };
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        if let Ok(n) = s[start..i].parse::<i64>() {
            out.push(n);
        }
    }

    out
}

/// `s` with every occurrence of `sub` removed
pub fn remove_all(s: &str, sub: &str) -> String {
    if sub.is_empty() {
        return s.to_string();
    }
    s.replace(sub, "")
}

/// Split into chunks of `n` characters; the last chunk may be shorter.
/// `n == 0` returns the whole string as a single chunk.
pub fn split_by_length(s: &str, n: usize) -> Vec<String> {
    if n == 0 {
        return vec![s.to_string()];
    }
    let chars: Vec<char> = s.chars().collect();
    chars.chunks(n).map(String::from_iter).collect()
}

/// Non-empty and made only of ASCII digits
pub fn is_numeric(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Group lines into blocks separated by blank lines. Empty blocks are dropped.
pub fn split_by_empty_line<S: AsRef<str>>(lines: &[S]) -> Vec<Vec<String>> {
    lines
        .split(|line| line.as_ref().is_empty())
        .filter(|group| !group.is_empty())
        .map(|group| group.iter().map(|l| l.as_ref().to_string()).collect())
        .collect()
}
