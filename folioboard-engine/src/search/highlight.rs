/// Match highlighting
///
/// Splits a field's text into matched and unmatched runs for display,
/// without mutating the original string. Spans are byte ranges into the
/// input; concatenating the spans in order reconstructs it exactly.

use serde::Serialize;

/// One run of a highlighted string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span {
    /// Byte offset where the run starts (inclusive)
    pub start: usize,

    /// Byte offset where the run ends (exclusive)
    pub end: usize,

    /// Whether this run equals the query, ignoring case
    pub matched: bool,
}

impl Span {
    /// Slices the run out of its source text
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        &source[self.start..self.end]
    }
}

/// Lowercases a char to its primary mapping for case-insensitive compare
fn fold(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Checks whether the query chars occur at position `at` of `chars`
fn matches_at(chars: &[(usize, char)], query: &[char], at: usize) -> bool {
    query
        .iter()
        .enumerate()
        .all(|(offset, qc)| fold(chars[at + offset].1) == *qc)
}

/// Finds all non-overlapping case-insensitive occurrences of `query`
///
/// Returns byte ranges into `text`. After a match the scan resumes past
/// it, so occurrences never overlap.
fn occurrences(text: &str, query: &str) -> Vec<(usize, usize)> {
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() {
        return Vec::new();
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let mut found = Vec::new();
    let mut i = 0;
    while i + query.len() <= chars.len() {
        if matches_at(&chars, &query, i) {
            let start = chars[i].0;
            let end = chars
                .get(i + query.len())
                .map(|(byte, _)| *byte)
                .unwrap_or(text.len());
            found.push((start, end));
            i += query.len();
        } else {
            i += 1;
        }
    }
    found
}

/// Checks whether `text` contains `query`, ignoring case
///
/// An empty query never matches.
pub fn contains_ci(text: &str, query: &str) -> bool {
    let query: Vec<char> = query.chars().map(fold).collect();
    if query.is_empty() {
        return false;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    if query.len() > chars.len() {
        return false;
    }
    (0..=chars.len() - query.len()).any(|i| matches_at(&chars, &query, i))
}

/// Splits `text` into matched/unmatched spans for the query
///
/// Every occurrence is marked; the spans cover the whole input in order.
/// With no occurrences the result is a single unmatched span (or nothing
/// for empty text).
///
/// # Example
///
/// ```
/// use folioboard_engine::search::highlight::spans;
///
/// let text = "React and react-native";
/// let runs = spans(text, "react");
/// let matched: Vec<&str> = runs
///     .iter()
///     .filter(|s| s.matched)
///     .map(|s| s.text(text))
///     .collect();
/// assert_eq!(matched, vec!["React", "react"]);
/// ```
pub fn spans(text: &str, query: &str) -> Vec<Span> {
    let mut out = Vec::new();
    let mut cursor = 0;

    for (start, end) in occurrences(text, query) {
        if start > cursor {
            out.push(Span { start: cursor, end: start, matched: false });
        }
        out.push(Span { start, end, matched: true });
        cursor = end;
    }

    if cursor < text.len() {
        out.push(Span { start: cursor, end: text.len(), matched: false });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reconstruct(text: &str, runs: &[Span]) -> String {
        runs.iter().map(|s| s.text(text)).collect()
    }

    #[test]
    fn test_contains_ci_basic() {
        assert!(contains_ci("React Native", "react"));
        assert!(contains_ci("react-native", "React"));
        assert!(!contains_ci("Vue", "React"));
        assert!(!contains_ci("anything", ""));
        assert!(!contains_ci("", "x"));
    }

    #[test]
    fn test_single_occurrence() {
        let text = "Portfolio Dashboard";
        let runs = spans(text, "folio");
        assert_eq!(reconstruct(text, &runs), text);
        assert_eq!(
            runs,
            vec![
                Span { start: 0, end: 4, matched: false },
                Span { start: 4, end: 9, matched: true },
                Span { start: 9, end: text.len(), matched: false },
            ]
        );
    }

    #[test]
    fn test_multiple_occurrences_each_marked() {
        let text = "demo data for the demo user";
        let runs = spans(text, "demo");
        let matched: Vec<&str> = runs.iter().filter(|s| s.matched).map(|s| s.text(text)).collect();
        assert_eq!(matched, vec!["demo", "demo"]);
        assert_eq!(reconstruct(text, &runs), text);
    }

    #[test]
    fn test_occurrences_do_not_overlap() {
        // "aaa" contains "aa" once under non-overlapping scanning.
        let runs = spans("aaa", "aa");
        let matched = runs.iter().filter(|s| s.matched).count();
        assert_eq!(matched, 1);
    }

    #[test]
    fn test_match_at_string_edges() {
        let text = "rustrust";
        let runs = spans(text, "rust");
        assert_eq!(
            runs,
            vec![
                Span { start: 0, end: 4, matched: true },
                Span { start: 4, end: 8, matched: true },
            ]
        );
    }

    #[test]
    fn test_no_match_yields_single_unmatched_span() {
        let text = "GraphQL";
        let runs = spans(text, "redis");
        assert_eq!(runs, vec![Span { start: 0, end: text.len(), matched: false }]);
    }

    #[test]
    fn test_empty_text() {
        assert!(spans("", "query").is_empty());
    }

    #[test]
    fn test_multibyte_text_keeps_valid_offsets() {
        let text = "café Vue café";
        let runs = spans(text, "CAFÉ");
        assert_eq!(reconstruct(text, &runs), text);
        let matched: Vec<&str> = runs.iter().filter(|s| s.matched).map(|s| s.text(text)).collect();
        assert_eq!(matched, vec!["café", "café"]);
    }
}
