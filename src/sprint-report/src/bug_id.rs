//! Extraction of external bug identifiers embedded in issue titles.
//!
//! Issue titles frequently reference a Launchpad bug as `LP#<digits>`. These
//! helpers locate such references without ever failing: a missing marker or a
//! marker followed by no digits simply yields an empty identifier.

/// Marker preceding an embedded bug identifier.
pub const DEFAULT_BUG_MARKER: &str = "LP#";

/// A single marker occurrence found inside a piece of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BugReference<'a> {
    /// Byte offset of the marker within the scanned text.
    pub start: usize,

    /// Byte offset just past the last digit (or past the marker when there are none).
    pub end: usize,

    /// Digits following the marker; empty for a bare marker.
    pub id: &'a str,
}

/// Returns the digits immediately following the first `marker` in `text`.
///
/// Scanning stops at the first non-digit. Returns `""` when the marker is
/// absent or is not followed by a digit.
///
/// # Examples
///
/// ```
/// use sprint_report::extract_bug_id;
///
/// assert_eq!(extract_bug_id("LP#12345 fix crash", "LP#"), "12345");
/// assert_eq!(extract_bug_id("no marker here", "LP#"), "");
/// ```
#[must_use]
pub fn extract_bug_id<'t>(text: &'t str, marker: &str) -> &'t str {
    reference_from(text, 0, marker).map_or("", |reference| reference.id)
}

/// Iterates over every `marker` occurrence in `text`, left to right.
///
/// Occurrences never overlap. An empty marker yields nothing.
pub fn find_bug_references<'a>(
    text: &'a str,
    marker: &'a str,
) -> impl Iterator<Item = BugReference<'a>> + 'a {
    let mut cursor = 0;

    std::iter::from_fn(move || {
        let reference = reference_from(text, cursor, marker)?;
        cursor = reference.end;
        Some(reference)
    })
}

/// Finds the first `marker` at or after byte offset `from`.
fn reference_from<'t>(text: &'t str, from: usize, marker: &str) -> Option<BugReference<'t>> {
    if marker.is_empty() {
        return None;
    }

    let start = from + text.get(from..)?.find(marker)?;
    let digits_start = start + marker.len();
    let digits_len = text[digits_start..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    let end = digits_start + digits_len;

    Some(BugReference {
        start,
        end,
        id: &text[digits_start..end],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_digits_after_marker() {
        assert_eq!(extract_bug_id("LP#12345 fix crash", DEFAULT_BUG_MARKER), "12345");
        assert_eq!(
            extract_bug_id("[SRU] LP#2034567: kernel panic", DEFAULT_BUG_MARKER),
            "2034567"
        );
    }

    #[test]
    fn missing_marker_yields_empty() {
        assert_eq!(extract_bug_id("no marker here", DEFAULT_BUG_MARKER), "");
        assert_eq!(extract_bug_id("", DEFAULT_BUG_MARKER), "");
    }

    #[test]
    fn marker_without_digits_yields_empty() {
        assert_eq!(extract_bug_id("LP#abc", DEFAULT_BUG_MARKER), "");
        assert_eq!(extract_bug_id("trailing LP#", DEFAULT_BUG_MARKER), "");
    }

    #[test]
    fn marker_is_case_sensitive() {
        assert_eq!(extract_bug_id("lp#123", DEFAULT_BUG_MARKER), "");
    }

    #[test]
    fn only_first_occurrence_is_extracted() {
        assert_eq!(extract_bug_id("LP#1 and LP#22", DEFAULT_BUG_MARKER), "1");
    }

    #[test]
    fn result_is_always_digits() {
        let samples = [
            "LP#12a34",
            "LP#٣٤",
            "xLP#LP#9",
            "LP#",
            "LP#0007 LP#8",
            "emoji 🐛 LP#42🐛",
        ];

        for sample in samples {
            let id = extract_bug_id(sample, DEFAULT_BUG_MARKER);
            assert!(id.bytes().all(|b| b.is_ascii_digit()), "{sample} -> {id}");
            if !sample.contains(DEFAULT_BUG_MARKER) {
                assert!(id.is_empty());
            }
        }
        assert_eq!(extract_bug_id("emoji 🐛 LP#42🐛", DEFAULT_BUG_MARKER), "42");
    }

    #[test]
    fn finds_every_reference() {
        let text = "LP#1 dup of LP#22, see LP#";
        let refs: Vec<_> = find_bug_references(text, DEFAULT_BUG_MARKER).collect();

        assert_eq!(refs.len(), 3);
        assert_eq!(refs[0].id, "1");
        assert_eq!(&text[refs[0].start..refs[0].end], "LP#1");
        assert_eq!(refs[1].id, "22");
        assert_eq!(&text[refs[1].start..refs[1].end], "LP#22");
        assert_eq!(refs[2].id, "");
        assert_eq!(&text[refs[2].start..refs[2].end], "LP#");
    }

    #[test]
    fn marker_can_be_shorter_lived_than_text() {
        let text = String::from("see LP#31337 for details");
        let id = {
            let marker = String::from("LP#");
            extract_bug_id(&text, &marker)
        };
        assert_eq!(id, "31337");
    }

    #[test]
    fn empty_marker_finds_nothing() {
        assert_eq!(find_bug_references("LP#1", "").count(), 0);
        assert_eq!(extract_bug_id("LP#1", ""), "");
    }
}
