use crate::models::Wpm;
use std::time::Duration;

/// Time left to read the words after `index` at the given rate.
pub fn remaining_time(total_words: usize, index: usize, wpm: Wpm) -> Duration {
    let remaining = total_words.saturating_sub(index + 1) as u64;
    Duration::from_millis(remaining * 60_000 / u64::from(wpm.get()))
}

pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        format!("{}s", secs)
    } else if secs < 3600 {
        format!("{}m {}s", secs / 60, secs % 60)
    } else {
        format!("{}h {}m", secs / 3600, (secs / 60) % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn counts_only_words_after_the_current_one() {
        let wpm = Wpm::new(500);
        assert_eq!(remaining_time(4, 3, wpm), Duration::ZERO);
        assert_eq!(remaining_time(4, 0, wpm), Duration::from_millis(360));
        assert_eq!(remaining_time(1001, 0, wpm), Duration::from_secs(120));
    }

    #[test]
    fn formats_by_magnitude() {
        assert_eq!(format_duration(Duration::ZERO), "0s");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "59s");
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(3599)), "59m 59s");
        assert_eq!(format_duration(Duration::from_secs(3600)), "1h 0m");
        assert_eq!(format_duration(Duration::from_secs(7 * 3600 + 25 * 60 + 9)), "7h 25m");
    }

    #[test]
    fn slower_rates_take_longer() {
        let fast = remaining_time(10_000, 0, Wpm::new(1000));
        let slow = remaining_time(10_000, 0, Wpm::new(50));
        assert_eq!(format_duration(fast), "9m 59s");
        assert_eq!(format_duration(slow), "3h 19m");
    }
}
