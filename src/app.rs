use crate::config::Theme;
use crate::engine::{ClockRequest, PacingClock, Player, WordSequence};
use crate::keys;
use crate::models::{Command, Direction, PickerCommand, Viewport, Wpm, SPEED_STEP};
use crate::picker::{self, FilePicker, PickerOutcome};
use crate::source;
use crossterm::event::KeyEvent;
use std::path::Path;
use std::time::Instant;

/// Rows the reader chrome needs around the picker list.
const PICKER_CHROME_ROWS: u16 = 15;

pub struct App {
    pub should_quit: bool,
    pub player: Player,
    pub clock: PacingClock,
    pub viewport: Viewport,
    /// Present while the file picker is on screen.
    pub picker: Option<FilePicker>,
    /// Reason the last load attempt failed, shown when nothing is loaded.
    pub load_error: Option<String>,
    pub theme: Theme,
}

impl App {
    /// With no words the picker opens straight away.
    pub fn new(words: Option<WordSequence>, wpm: Wpm, theme: Theme) -> Self {
        let picker = words
            .is_none()
            .then(|| FilePicker::in_current_dir(picker_height(0)));
        Self {
            should_quit: false,
            player: Player::new(words, wpm),
            clock: PacingClock::default(),
            viewport: Viewport::default(),
            picker,
            load_error: None,
            theme,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.viewport = Viewport::new(width, height);
        if let Some(picker) = self.picker.as_mut() {
            picker.set_height(picker_height(height));
        }
    }

    pub fn on_key(&mut self, key: KeyEvent, now: Instant) {
        if self.picker.is_some() {
            match keys::picker_command(key) {
                Some(command) => self.on_picker_command(command),
                // ctrl+c still quits from the picker
                None if keys::reader_command(key) == Some(Command::Quit) => self.quit(),
                None => {}
            }
        } else if let Some(command) = keys::reader_command(key) {
            self.on_command(command, now);
        }
    }

    pub fn on_command(&mut self, command: Command, now: Instant) {
        tracing::debug!(target: "player", ?command, "command");
        match command {
            Command::Quit => self.quit(),
            Command::OpenFile => self.open_picker(),
            Command::PlayPause => {
                let request = self.player.toggle_play();
                self.schedule(request, now);
            }
            Command::PrevWord => self.player.step(Direction::Back),
            Command::NextWord => self.player.step(Direction::Forward),
            Command::Faster => self.player.set_speed(SPEED_STEP),
            Command::Slower => self.player.set_speed(-SPEED_STEP),
            Command::JumpBack => self.player.jump(Direction::Back),
            Command::JumpForward => self.player.jump(Direction::Forward),
            Command::Restart => self.player.restart(),
        }
    }

    pub fn on_picker_command(&mut self, command: PickerCommand) {
        let Some(picker) = self.picker.as_mut() else {
            return;
        };
        match picker.handle(command) {
            PickerOutcome::Pending => {}
            PickerOutcome::Cancelled => self.picker = None,
            PickerOutcome::Selected(path) => {
                self.picker = None;
                self.load_file(&path);
            }
        }
    }

    /// Clock wake-up. The clock is re-armed only if playback continues.
    pub fn on_tick(&mut self, now: Instant) {
        let request = self.player.tick();
        self.schedule(request, now);
    }

    pub fn open_picker(&mut self) {
        self.player.pause();
        self.picker = Some(FilePicker::in_current_dir(picker_height(
            self.viewport.height,
        )));
    }

    /// A failed load keeps the current document and records the reason.
    pub fn load_file(&mut self, path: &Path) {
        match source::read_file(path) {
            Ok(words) => {
                self.player.load(Some(words));
                self.load_error = None;
            }
            Err(err) => {
                tracing::warn!(target: "source", path = %path.display(), %err, "load failed");
                self.load_error = Some(err.to_string());
            }
        }
    }

    fn schedule(&mut self, request: ClockRequest, now: Instant) {
        if request == ClockRequest::Arm {
            self.clock.arm(now, self.player.wpm());
        }
    }
}

fn picker_height(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(PICKER_CHROME_ROWS))
        .clamp(1, picker::MAX_HEIGHT)
}
