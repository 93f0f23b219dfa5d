//! The word line: current word with its ORP pinned to the focus column,
//! flanked by the neighbouring words as dimmed context.

use super::formatting::DisplayWord;
use super::tokenizer::WordSequence;

/// Columns reserved on each side of the ORP.
pub const HALF_WIDTH: usize = 30;
/// Extra characters gathered past the right budget before the scan stops.
const OVERSCAN: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordLine {
    /// Blank columns before the left context.
    pub padding: usize,
    pub before: String,
    pub word: DisplayWord,
    pub after: String,
}

impl WordLine {
    #[cfg(test)]
    pub fn width(&self) -> usize {
        self.padding + self.before.chars().count() + self.word.len() + self.after.chars().count()
    }

    /// Screen column the highlighted glyph lands on.
    #[cfg(test)]
    pub fn orp_column(&self) -> usize {
        self.padding + self.before.chars().count() + self.word.orp()
    }
}

/// Lays out the word at `index`. Returns `None` if the index is out of range.
pub fn word_line(
    words: &WordSequence,
    index: usize,
    focus_column: usize,
    half_width: usize,
) -> Option<WordLine> {
    let word = DisplayWord::new(words.get(index)?);
    let all = words.as_slice();

    let chars_before = word.orp();
    let chars_after = word.len() - word.orp();
    let before_budget = half_width.saturating_sub(chars_before);
    let after_budget = half_width.saturating_sub(chars_after);

    Some(WordLine {
        padding: focus_column.saturating_sub(half_width),
        before: left_context(&all[..index], before_budget),
        after: right_context(&all[index + 1..], after_budget),
        word,
    })
}

/// Trailing `budget` characters of the preceding words (each followed by a
/// space), left-padded to exactly `budget` columns.
fn left_context(prior: &[String], budget: usize) -> String {
    // built back to front so the walk stops once the budget is covered
    let mut reversed: Vec<char> = Vec::with_capacity(budget + OVERSCAN);
    for word in prior.iter().rev() {
        if reversed.len() >= budget {
            break;
        }
        reversed.push(' ');
        reversed.extend(word.chars().rev());
    }
    reversed.truncate(budget);

    let mut out = " ".repeat(budget - reversed.len());
    out.extend(reversed.iter().rev());
    out
}

/// Leading `budget` characters of the following words (each preceded by a
/// space), right-padded to exactly `budget` columns.
fn right_context(following: &[String], budget: usize) -> String {
    let limit = budget + OVERSCAN;
    let mut gathered = String::new();
    let mut count = 0;
    for word in following {
        if count >= limit {
            break;
        }
        gathered.push(' ');
        gathered.push_str(word);
        count += 1 + word.chars().count();
    }

    let mut out: String = gathered.chars().take(budget).collect();
    let shown = count.min(budget);
    out.push_str(&" ".repeat(budget - shown));
    out
}
