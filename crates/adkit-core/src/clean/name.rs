use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::batch::process_lines;
use crate::clean::prefixes::sorted_prefixes;

/// Placeholder first name for lines that fail the character-set check,
/// literally "please ask for the name again". The last name is left empty.
pub const INVALID_NAME: &str = "สอบถามชื่อใหม่";

// Thai letters, Latin letters, whitespace, period, apostrophe, dash. The
// Thai span is the full ก..๙ code-point range, which also admits Thai
// digits and signs found in real lead data.
static ALLOWED: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-zก-๙\s.'-]+$").unwrap());

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    pub first: String,
    pub last: String,
}

impl ParsedName {
    fn empty() -> Self {
        Self {
            first: String::new(),
            last: String::new(),
        }
    }

    fn invalid() -> Self {
        Self {
            first: INVALID_NAME.to_string(),
            last: String::new(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }
}

/// First/last name columns collected from a batch, each newline-joined in
/// input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameBatch {
    pub first_names: String,
    pub last_names: String,
}

/// Strips leading honorifics from one line and splits the remainder into
/// first and last name. Lines with characters outside the permitted set
/// degrade to [`INVALID_NAME`] instead of failing.
pub fn parse_name_line(line: &str) -> ParsedName {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return ParsedName::empty();
    }

    if !ALLOWED.is_match(trimmed) {
        return ParsedName::invalid();
    }

    // Fixed point: strip one prefix, then rescan the whole table, so
    // stacked titles (a rank followed by an honorific) all come off.
    let mut name = trimmed;
    loop {
        let matched = sorted_prefixes()
            .iter()
            .copied()
            .find(|&prefix| starts_with_title(name, prefix));
        match matched {
            Some(prefix) => name = name[prefix.len()..].trim_start(),
            None => break,
        }
    }

    // Periods become separators, apostrophes vanish.
    let cleaned: String = name
        .chars()
        .filter(|c| *c != '\'')
        .map(|c| if c == '.' { ' ' } else { c })
        .collect();

    let mut tokens = cleaned.split_whitespace();
    let first = tokens.next().unwrap_or_default().to_string();
    let last = tokens.collect::<Vec<_>>().join(" ");
    ParsedName { first, last }
}

/// Anchored, ASCII-case-insensitive prefix test. Latin titles match in any
/// case; Thai compares byte-for-byte (Thai has no case). ASCII folding
/// never changes byte length, so the boundary check stays valid.
fn starts_with_title(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Batch entry point: parses up to the line cap, drops lines where both
/// fields came back empty, and joins each column with newlines. A kept line
/// with only a first name still contributes an empty line to `last_names`.
pub fn parse_names(text: &str) -> NameBatch {
    let kept: Vec<ParsedName> = process_lines(text, parse_name_line)
        .into_iter()
        .filter(|parsed| !parsed.is_blank())
        .collect();

    let first_names = kept
        .iter()
        .map(|parsed| parsed.first.as_str())
        .collect::<Vec<_>>()
        .join("\n");
    let last_names = kept
        .iter()
        .map(|parsed| parsed.last.as_str())
        .collect::<Vec<_>>()
        .join("\n");

    NameBatch {
        first_names,
        last_names,
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_name_line, parse_names, INVALID_NAME};
    use crate::batch::MAX_LINES;

    #[test]
    fn thai_title_stripped_and_split() {
        let parsed = parse_name_line("นาย สมชาย ใจดี");
        assert_eq!(parsed.first, "สมชาย");
        assert_eq!(parsed.last, "ใจดี");
    }

    #[test]
    fn compound_rank_stripped_whole() {
        // The police rank must come off as one unit, not as the shorter
        // army rank that happens to share its first characters.
        let parsed = parse_name_line("พล.ต.อ.สมชาย ใจดี");
        assert_eq!(parsed.first, "สมชาย");
        assert_eq!(parsed.last, "ใจดี");
    }

    #[test]
    fn stacked_titles_all_removed() {
        let parsed = parse_name_line("ว่าที่ ร.ต. ดร. สมชาย ใจดี");
        assert_eq!(parsed.first, "สมชาย");
        assert_eq!(parsed.last, "ใจดี");
    }

    #[test]
    fn latin_titles_match_any_case() {
        for line in ["Mr. John Smith", "MR. John Smith", "mr John Smith"] {
            let parsed = parse_name_line(line);
            assert_eq!(parsed.first, "John", "line: {}", line);
            assert_eq!(parsed.last, "Smith", "line: {}", line);
        }
    }

    #[test]
    fn letters_are_not_recased() {
        let parsed = parse_name_line("MR. JOHN SMITH");
        assert_eq!(parsed.first, "JOHN");
        assert_eq!(parsed.last, "SMITH");
    }

    #[test]
    fn trailing_space_variant_matches() {
        let parsed = parse_name_line("น.ส สวย มาก");
        assert_eq!(parsed.first, "สวย");
        assert_eq!(parsed.last, "มาก");
    }

    #[test]
    fn digits_degrade_to_placeholder() {
        let parsed = parse_name_line("สมชาย 0812345678");
        assert_eq!(parsed.first, INVALID_NAME);
        assert_eq!(parsed.last, "");
    }

    #[test]
    fn permitted_punctuation_never_degrades() {
        for line in ["O'Brien", "Anne-Marie Smith", "สมชาย ใจ-ดี"] {
            let parsed = parse_name_line(line);
            assert_ne!(parsed.first, INVALID_NAME, "line: {}", line);
        }
    }

    #[test]
    fn periods_split_and_apostrophes_vanish() {
        let parsed = parse_name_line("John A.Smith O'Brien");
        assert_eq!(parsed.first, "John");
        assert_eq!(parsed.last, "A Smith OBrien");
    }

    #[test]
    fn title_only_line_becomes_blank() {
        let parsed = parse_name_line("นาย");
        assert!(parsed.is_blank());
    }

    #[test]
    fn batch_drops_blank_lines_but_keeps_empty_last_names() {
        let batch = parse_names("นาย สมชาย ใจดี\nนางสาว สวย มาก\nMr. John\n");
        assert_eq!(batch.first_names, "สมชาย\nสวย\nJohn");
        assert_eq!(batch.last_names, "ใจดี\nมาก\n");
    }

    #[test]
    fn batch_caps_at_line_limit() {
        let input = vec!["นาย สมชาย ใจดี"; MAX_LINES + 50].join("\n");
        let batch = parse_names(&input);
        assert_eq!(batch.first_names.split('\n').count(), MAX_LINES);
    }
}
