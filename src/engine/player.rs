use super::tokenizer::WordSequence;
use crate::models::{Direction, Wpm};

/// Words moved by a single jump command.
pub const JUMP_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    /// No words loaded.
    Idle,
    Paused,
    Playing,
}

/// What the pacing clock should do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum ClockRequest {
    Arm,
    Idle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    pub current_index: usize,
    pub wpm: Wpm,
    pub paused: bool,
}

/// Owns the loaded words and the playback position. Every index change is
/// clamped to the sequence bounds.
#[derive(Debug)]
pub struct Player {
    words: Option<WordSequence>,
    playback: PlaybackState,
}

impl Player {
    pub fn new(words: Option<WordSequence>, wpm: Wpm) -> Self {
        let mut player = Self {
            words: None,
            playback: PlaybackState {
                current_index: 0,
                wpm,
                paused: true,
            },
        };
        player.load(words);
        player
    }

    /// Replaces the document. The rate carries over; position and play state
    /// do not.
    pub fn load(&mut self, words: Option<WordSequence>) {
        tracing::info!(
            target: "player",
            words = words.as_ref().map_or(0, WordSequence::len),
            "document loaded"
        );
        self.words = words;
        self.playback.current_index = 0;
        self.playback.paused = true;
    }

    pub fn state(&self) -> PlayerState {
        match (&self.words, self.playback.paused) {
            (None, _) => PlayerState::Idle,
            (Some(_), true) => PlayerState::Paused,
            (Some(_), false) => PlayerState::Playing,
        }
    }

    pub fn snapshot(&self) -> PlaybackState {
        self.playback
    }

    pub fn words(&self) -> Option<&WordSequence> {
        self.words.as_ref()
    }

    pub fn wpm(&self) -> Wpm {
        self.playback.wpm
    }

    pub fn current_word(&self) -> Option<&str> {
        self.words
            .as_ref()
            .and_then(|words| words.get(self.playback.current_index))
    }

    /// Playing pauses. Paused starts playing unless the last word is already
    /// showing, in which case nothing happens.
    pub fn toggle_play(&mut self) -> ClockRequest {
        let Some(words) = &self.words else {
            return ClockRequest::Idle;
        };
        if !self.playback.paused {
            self.playback.paused = true;
            tracing::debug!(target: "player", index = self.playback.current_index, "paused");
            return ClockRequest::Idle;
        }
        if self.playback.current_index >= words.last_index() {
            return ClockRequest::Idle;
        }
        self.playback.paused = false;
        tracing::debug!(target: "player", index = self.playback.current_index, "playing");
        ClockRequest::Arm
    }

    pub fn pause(&mut self) {
        self.playback.paused = true;
    }

    /// Handles one clock wake-up. Ticks that arrive while not playing are
    /// ignored.
    pub fn tick(&mut self) -> ClockRequest {
        if self.state() != PlayerState::Playing {
            return ClockRequest::Idle;
        }
        let last = self.words.as_ref().map_or(0, WordSequence::last_index);
        if self.playback.current_index < last {
            self.playback.current_index += 1;
            ClockRequest::Arm
        } else {
            self.playback.paused = true;
            tracing::info!(target: "player", "reached the end of the document");
            ClockRequest::Idle
        }
    }

    pub fn step(&mut self, direction: Direction) {
        self.seek(direction, 1);
    }

    pub fn jump(&mut self, direction: Direction) {
        self.seek(direction, JUMP_SIZE);
    }

    pub fn set_speed(&mut self, delta: i32) {
        self.playback.wpm = self.playback.wpm.adjusted(delta);
    }

    pub fn restart(&mut self) {
        self.playback.current_index = 0;
        self.playback.paused = true;
    }

    fn seek(&mut self, direction: Direction, amount: usize) {
        let Some(words) = &self.words else {
            return;
        };
        let index = self.playback.current_index;
        self.playback.current_index = match direction {
            Direction::Back => index.saturating_sub(amount),
            Direction::Forward => index.saturating_add(amount).min(words.last_index()),
        };
    }
}
