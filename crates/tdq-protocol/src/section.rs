//! Section boundaries and criteria splitting.

use std::sync::LazyLock;

use regex::Regex;

/// Line-leading enumeration marker: `1.`, `12.` or `-`, optionally indented,
/// followed by whitespace or the end of the line. `18.5` at the start of a
/// wrapped line is not a marker.
static ITEM_MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)^[ \t]*(?:\d+\.|-)(?:[ \t\r]+|$)").expect("Invalid item marker regex")
});

/// Where a section starts and where it stops.
///
/// The section body begins right after the first `start` match and runs up
/// to the first `end` match that follows it, or to the end of the text.
#[derive(Debug, Clone)]
pub struct SectionBounds {
    start: Regex,
    end: Regex,
}

impl SectionBounds {
    pub fn new(start: Regex, end: Regex) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> &Regex {
        &self.start
    }

    pub fn end(&self) -> &Regex {
        &self.end
    }

    /// Body of the section, or `None` when the start heading is absent.
    pub fn find<'t>(&self, text: &'t str) -> Option<&'t str> {
        let heading = self.start.find(text)?;
        let rest = &text[heading.end()..];
        let stop = self.end.find(rest).map_or(rest.len(), |m| m.start());
        Some(&rest[..stop])
    }
}

/// Split a section body on line-leading enumeration markers.
///
/// Pieces are trimmed and empty pieces dropped; source order is kept.
/// Text before the first marker counts as an item of its own.
pub fn split_criteria(body: &str) -> Vec<String> {
    ITEM_MARKER_REGEX
        .split(body)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
