/// Zero-based index of the letter the eye should fixate on, measured in
/// Unicode scalar values.
pub fn orp_offset(word: &str) -> usize {
    match word.chars().count() {
        0..=1 => 0,
        2..=5 => 1,
        6..=9 => 2,
        10..=13 => 3,
        _ => 4,
    }
}
