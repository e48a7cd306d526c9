//! Content text cleanup.
//!
//! Authored files hard-wrap paragraphs. Cleanup joins soft line breaks into
//! spaces, keeps breaks around markdown-like lines (headings, bullets,
//! indented text) and turns bare URLs into markdown links.

use once_cell::sync::Lazy;
use regex::Regex;

// Private-use code point; never present in authored content.
const NEWLINE_MARKER: &str = "\u{E000}";

static TRAILING_SPACE_BEFORE_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[ \t\r]+\n").expect("valid regex"));
static LINE_STARTING_WITH_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\n[#*+\-\t ][^\n]+)\n").expect("valid regex"));
static FIRST_LINE_WITH_MARKUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([#*+\-\t ][^\n]+)\n").expect("valid regex"));
static SOFT_LINE_BREAK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([^\n])\n([^\n#*+\-\s])").expect("valid regex"));
static BARE_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(https?://([a-zA-Z0-9.:]+)(/\S*)?)").expect("valid regex"));

/// Applies newline and link cleanup.
pub fn clean_text(text: &str) -> String {
    clean_up_links(&clean_up_newlines(text))
}

/// Joins soft line breaks and keeps breaks after markdown-like lines.
pub fn clean_up_newlines(text: &str) -> String {
    let text = text.replace('\r', "");
    let text = TRAILING_SPACE_BEFORE_NEWLINE.replace_all(&text, "\n");
    let marked = format!("${{1}}{NEWLINE_MARKER}");
    let text = LINE_STARTING_WITH_MARKUP.replace_all(&text, marked.as_str());
    let text = FIRST_LINE_WITH_MARKUP.replace(&text, marked.as_str());
    let text = SOFT_LINE_BREAK.replace_all(&text, "${1} ${2}");
    text.replace(NEWLINE_MARKER, "\n")
}

/// Rewrites bare `http(s)://host/path` URLs as `[host](url)`.
pub fn clean_up_links(text: &str) -> String {
    BARE_URL.replace_all(text, "[${2}](${1})").into_owned()
}

#[cfg(test)]
mod tests {
    use super::{clean_text, clean_up_links, clean_up_newlines};

    #[test]
    fn joins_soft_line_breaks() {
        assert_eq!(
            clean_up_newlines("First line\nsecond line.\r\n\r\nNext paragraph"),
            "First line second line.\n\nNext paragraph"
        );
    }

    #[test]
    fn strips_trailing_whitespace_before_newline() {
        assert_eq!(clean_up_newlines("One \t\nTwo"), "One Two");
    }

    #[test]
    fn keeps_breaks_after_markup_lines() {
        assert_eq!(
            clean_up_newlines("* item\n* item two\nmore text"),
            "* item\n* item two\nmore text"
        );
        assert_eq!(
            clean_up_newlines("Intro\n# Heading\nBody"),
            "Intro\n# Heading\nBody"
        );
    }

    #[test]
    fn rewrites_bare_urls_as_markdown_links() {
        assert_eq!(
            clean_up_links("See http://www.lss.bc.ca for help"),
            "See [www.lss.bc.ca](http://www.lss.bc.ca) for help"
        );
        assert_eq!(
            clean_up_links("https://studentaidbc.ca/explore/grants"),
            "[studentaidbc.ca](https://studentaidbc.ca/explore/grants)"
        );
    }

    #[test]
    fn clean_text_applies_both_passes() {
        assert_eq!(
            clean_text("Visit\nhttp://bcteal.org/esldirectory"),
            "Visit [bcteal.org](http://bcteal.org/esldirectory)"
        );
    }
}
