use crate::models::{Command, PickerCommand};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Something that can appear in a help legend as `key description`.
pub trait HelpEntry: Copy {
    fn help(self) -> (&'static str, &'static str);
}

/// Reader legend, one array per column.
pub const READER_HELP: [[Command; 3]; 3] = [
    [Command::PlayPause, Command::PrevWord, Command::NextWord],
    [Command::Faster, Command::Slower, Command::Restart],
    [Command::JumpBack, Command::JumpForward, Command::OpenFile],
];

pub const PICKER_HELP: [[PickerCommand; 3]; 2] = [
    [PickerCommand::Up, PickerCommand::Down, PickerCommand::Open],
    [PickerCommand::Back, PickerCommand::Select, PickerCommand::Cancel],
];

pub fn reader_command(key: KeyEvent) -> Option<Command> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Command::Quit),
            _ => None,
        };
    }
    let command = match key.code {
        KeyCode::Char(' ') => Command::PlayPause,
        KeyCode::Left | KeyCode::Char('h') => Command::PrevWord,
        KeyCode::Right | KeyCode::Char('l') => Command::NextWord,
        KeyCode::Up | KeyCode::Char('k' | '+' | '=') => Command::Faster,
        KeyCode::Down | KeyCode::Char('j' | '-' | '_') => Command::Slower,
        KeyCode::Char('[') => Command::JumpBack,
        KeyCode::Char(']') => Command::JumpForward,
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('o') => Command::OpenFile,
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

pub fn picker_command(key: KeyEvent) -> Option<PickerCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return None;
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('k') => PickerCommand::Up,
        KeyCode::Down | KeyCode::Char('j') => PickerCommand::Down,
        KeyCode::Right | KeyCode::Char('l') => PickerCommand::Open,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Backspace => PickerCommand::Back,
        KeyCode::Enter => PickerCommand::Select,
        KeyCode::Esc | KeyCode::Char('q') => PickerCommand::Cancel,
        _ => return None,
    };
    Some(command)
}

impl HelpEntry for Command {
    fn help(self) -> (&'static str, &'static str) {
        match self {
            Command::PlayPause => ("space", "play/pause"),
            Command::PrevWord => ("←/h", "prev word"),
            Command::NextWord => ("→/l", "next word"),
            Command::Faster => ("↑/k", "faster"),
            Command::Slower => ("↓/j", "slower"),
            Command::JumpBack => ("[", "-10 words"),
            Command::JumpForward => ("]", "+10 words"),
            Command::Restart => ("r", "restart"),
            Command::OpenFile => ("o", "open file"),
            Command::Quit => ("q", "quit"),
        }
    }
}

impl HelpEntry for PickerCommand {
    fn help(self) -> (&'static str, &'static str) {
        match self {
            PickerCommand::Up => ("↑/k", "up"),
            PickerCommand::Down => ("↓/j", "down"),
            PickerCommand::Open => ("→/l", "open dir"),
            PickerCommand::Back => ("←/h", "back"),
            PickerCommand::Select => ("enter", "select"),
            PickerCommand::Cancel => ("esc", "cancel"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn every_reader_command_has_a_key() {
        let bound = [
            (press(KeyCode::Char(' ')), Command::PlayPause),
            (press(KeyCode::Left), Command::PrevWord),
            (press(KeyCode::Char('l')), Command::NextWord),
            (press(KeyCode::Char('=')), Command::Faster),
            (press(KeyCode::Char('_')), Command::Slower),
            (press(KeyCode::Char('[')), Command::JumpBack),
            (press(KeyCode::Char(']')), Command::JumpForward),
            (press(KeyCode::Char('r')), Command::Restart),
            (press(KeyCode::Char('o')), Command::OpenFile),
            (press(KeyCode::Esc), Command::Quit),
            (KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), Command::Quit),
        ];
        for (key, command) in bound {
            assert_eq!(reader_command(key), Some(command), "{key:?}");
        }
        assert_eq!(reader_command(press(KeyCode::Char('x'))), None);
        assert_eq!(reader_command(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn picker_keys_do_not_leak_reader_commands() {
        assert_eq!(picker_command(press(KeyCode::Char('q'))), Some(PickerCommand::Cancel));
        assert_eq!(picker_command(press(KeyCode::Enter)), Some(PickerCommand::Select));
        assert_eq!(picker_command(press(KeyCode::Char(' '))), None);
    }

    #[test]
    fn help_entries_are_distinct_per_column() {
        for column in READER_HELP {
            let keys: Vec<&str> = column.iter().map(|c| c.help().0).collect();
            let mut deduped = keys.clone();
            deduped.dedup();
            assert_eq!(keys, deduped);
        }
    }
}
