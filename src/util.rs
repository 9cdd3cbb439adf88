/// Truncates a string for log lines, respecting char boundaries.
pub(crate) fn snippet(s: &str) -> &str {
    const MAX: usize = 300;
    if s.len() <= MAX {
        return s;
    }
    let mut end = MAX;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
