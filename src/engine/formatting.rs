use super::orp::orp_offset;
use std::borrow::Cow;

/// Longest word shown verbatim.
pub const MAX_WORD_CHARS: usize = 32;
const KEPT_CHARS: usize = 31;
pub const ELLIPSIS: &str = "...";

pub fn truncate_word(word: &str) -> Cow<'_, str> {
    if word.chars().count() <= MAX_WORD_CHARS {
        return Cow::Borrowed(word);
    }
    let mut shortened: String = word.chars().take(KEPT_CHARS).collect();
    shortened.push_str(ELLIPSIS);
    Cow::Owned(shortened)
}

/// A word as it appears on screen: truncated, with its ORP computed on the
/// truncated form so the highlight always lands on a visible glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayWord {
    chars: Vec<char>,
    orp: usize,
}

impl DisplayWord {
    pub fn new(word: &str) -> Self {
        let shown = truncate_word(word);
        Self {
            orp: orp_offset(&shown),
            chars: shown.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn orp(&self) -> usize {
        self.orp
    }

    /// Each glyph paired with whether it is the highlighted one.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, bool)> + '_ {
        self.chars
            .iter()
            .enumerate()
            .map(move |(i, &c)| (c, i == self.orp))
    }

    #[cfg(test)]
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn short_words_are_borrowed_unchanged() {
        assert!(matches!(truncate_word("extraordinarily"), Cow::Borrowed("extraordinarily")));
        let exact = "a".repeat(MAX_WORD_CHARS);
        assert_eq!(truncate_word(&exact), exact.as_str());
    }

    #[test]
    fn long_words_keep_31_codepoints_and_an_ellipsis() {
        let word = "é".repeat(40);
        let shown = truncate_word(&word);
        assert_eq!(shown.chars().count(), 34);
        assert!(shown.ends_with(ELLIPSIS));
        assert_eq!(shown.chars().take(31).collect::<String>(), "é".repeat(31));
    }

    #[test]
    fn display_word_highlights_exactly_one_glyph() {
        let word = DisplayWord::new("extraordinarily");
        assert_eq!(word.len(), 15);
        assert_eq!(word.orp(), 4);
        let highlighted: Vec<char> = word.glyphs().filter(|(_, hl)| *hl).map(|(c, _)| c).collect();
        assert_eq!(highlighted, vec!['a']);
    }

    #[test]
    fn orp_is_computed_on_the_truncated_form() {
        let word = DisplayWord::new(&"z".repeat(40));
        assert_eq!(word.len(), 34);
        assert_eq!(word.orp(), 4);
        assert_eq!(word.text(), format!("{}...", "z".repeat(31)));
    }
}
