//! Status lines written back toward the remote's display.

use std::fmt;

/// Widest line the remote's display can show, excluding the newline.
pub const MAX_VISIBLE_CHARS: usize = 16;

const TRUNCATED_CHARS: usize = 15;

/// One short text line for the remote display, newline-terminated.
///
/// Labels wider than [`MAX_VISIBLE_CHARS`] are cut to fifteen characters
/// before the newline is appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine(String);

impl StatusLine {
    /// Build a label line, applying the display-width cut.
    pub fn label(text: &str) -> Self {
        let mut line: String = if text.chars().count() > MAX_VISIBLE_CHARS {
            text.chars().take(TRUNCATED_CHARS).collect()
        } else {
            text.to_string()
        };
        line.push('\n');
        StatusLine(line)
    }

    /// Build a `Vol:` line for a level in [0.0, 1.0].
    pub fn volume(level: f32) -> Self {
        StatusLine(format!("Vol: {level:.6}\n"))
    }

    /// The full line, including the trailing newline.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.trim_end_matches('\n'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_label_is_kept_verbatim() {
        assert_eq!(StatusLine::label("chrome.exe").as_str(), "chrome.exe\n");
    }

    #[test]
    fn sixteen_char_label_fits() {
        let label = "sixteen-chars-ok";
        assert_eq!(label.len(), 16);
        assert_eq!(StatusLine::label(label).as_str(), "sixteen-chars-ok\n");
    }

    #[test]
    fn long_label_is_cut_to_fifteen_chars() {
        let label = "abcdefghijklmnopqrst";
        assert_eq!(label.len(), 20);
        let line = StatusLine::label(label);
        assert_eq!(line.as_str(), "abcdefghijklmno\n");
        assert_eq!(line.as_str().trim_end().chars().count(), 15);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let label = "ääääääääääääääääää";
        let line = StatusLine::label(label);
        assert_eq!(line.as_str().trim_end().chars().count(), 15);
    }

    #[test]
    fn volume_line_format() {
        assert_eq!(StatusLine::volume(0.2).as_str(), "Vol: 0.200000\n");
        assert_eq!(StatusLine::volume(1.0).as_str(), "Vol: 1.000000\n");
    }

    #[test]
    fn display_drops_trailing_newline() {
        assert_eq!(StatusLine::label("spotify").to_string(), "spotify");
    }
}
