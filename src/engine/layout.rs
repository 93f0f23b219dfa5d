//! Vertical placement of the reader screen rows.

/// Rows taken by the progress bar, status line, help legend and the gaps
/// between them.
pub const BOTTOM_SECTION_HEIGHT: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReaderRows {
    /// Blank rows above the focus marker.
    pub leading: usize,
    /// Blank rows between the word line and the progress bar.
    pub gap: usize,
}

impl ReaderRows {
    pub fn focus_row(&self) -> usize {
        self.leading
    }

    pub fn word_row(&self) -> usize {
        self.leading + 1
    }

    #[cfg(test)]
    pub fn progress_row(&self) -> usize {
        self.word_row() + 1 + self.gap
    }
}

/// The word line sits at `height / 2 - 1`; every count saturates at zero so a
/// tiny terminal never produces a negative repeat.
pub fn reader_rows(height: u16) -> ReaderRows {
    let height = usize::from(height);
    let word_row = (height / 2).saturating_sub(1);
    ReaderRows {
        leading: word_row.saturating_sub(1),
        gap: height.saturating_sub(word_row + 2 + BOTTOM_SECTION_HEIGHT),
    }
}

/// Columns of padding that center `content` within `total`.
pub fn center_offset(content: usize, total: usize) -> usize {
    total.saturating_sub(content) / 2
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn word_line_sits_just_above_the_middle() {
        let rows = reader_rows(40);
        assert_eq!(rows.word_row(), 19);
        assert_eq!(rows.focus_row(), 18);
        assert_eq!(rows.gap, 40 - 19 - 2 - BOTTOM_SECTION_HEIGHT);
        assert_eq!(rows.progress_row(), 40 - BOTTOM_SECTION_HEIGHT - 1);
    }

    #[test]
    fn small_heights_clamp_to_zero() {
        for height in 0..=4 {
            let rows = reader_rows(height);
            assert_eq!(rows.leading, 0, "height {height}");
            assert_eq!(rows.gap, 0, "height {height}");
        }
        assert_eq!(reader_rows(12).gap, 0);
    }

    #[test]
    fn centering_never_goes_negative() {
        assert_eq!(center_offset(10, 30), 10);
        assert_eq!(center_offset(11, 30), 9);
        assert_eq!(center_offset(50, 30), 0);
    }
}
