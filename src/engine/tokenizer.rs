/// Ordered list of display words. Never empty: an empty tokenization is
/// represented by the absence of a sequence, not by a sequence of nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSequence(Vec<String>);

impl WordSequence {
    pub fn new(words: Vec<String>) -> Option<Self> {
        if words.is_empty() {
            None
        } else {
            Some(Self(words))
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn last_index(&self) -> usize {
        self.0.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// Splits on Unicode whitespace. Case, punctuation and normalization are left
/// untouched. Returns `None` when the text holds no words at all.
pub fn tokenize(text: &str) -> Option<WordSequence> {
    WordSequence::new(text.split_whitespace().map(str::to_owned).collect())
}
