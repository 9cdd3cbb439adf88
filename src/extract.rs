//! Best-effort recovery of a JSON payload from model output.
//!
//! The model is asked for raw JSON but routinely wraps it in markdown fences
//! or surrounds it with prose. These are string heuristics, not a parser;
//! callers decide what happens when the recovered span still fails to parse.

/// Removes a leading ```` ```json ```` (or bare ```` ``` ````) fence and a
/// trailing ```` ``` ```` fence, trimming surrounding whitespace. Text
/// between the fences is returned untouched.
pub fn strip_code_fences(text: &str) -> &str {
    let mut s = text.trim();
    if let Some(rest) = s.strip_prefix("```json") {
        s = rest;
    } else if let Some(rest) = s.strip_prefix("```") {
        s = rest;
    }
    s = s.trim_end();
    if let Some(rest) = s.strip_suffix("```") {
        s = rest;
    }
    s.trim()
}

/// The greedy object heuristic: the span from the first `{` to the last `}`.
///
/// Returns `None` when the text has no such span (no braces, or the only
/// `}` precedes the only `{`). The span is not guaranteed to be valid JSON.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}
