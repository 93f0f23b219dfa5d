pub mod help;
pub mod picker;
pub mod reader;
pub mod utils;

use crate::app::App;
use crate::ui::utils::hex_to_rgb;
use ratatui::{
    style::Style,
    text::Line,
    widgets::{Block, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, app: &App) {
    let bg_color = hex_to_rgb(&app.theme.bg);
    f.render_widget(
        Block::default().style(Style::default().bg(bg_color)),
        f.area(),
    );

    let viewport = app.viewport;
    let lines = if !viewport.is_known() {
        vec![Line::from("Loading...")]
    } else if let Some(file_picker) = &app.picker {
        picker::compose(file_picker, &app.theme, viewport.width, viewport.height)
    } else {
        reader::compose(app)
    };

    f.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg_color)),
        f.area(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Theme;
    use crate::engine::layout::reader_rows;
    use crate::engine::tokenize;
    use crate::models::{Command, Wpm};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::Instant;

    fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        let buf = terminal.backend().buffer().clone();
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol().chars().next().unwrap_or(' '))
                    .collect()
            })
            .collect()
    }

    fn reader(text: &str, width: u16, height: u16) -> App {
        let mut app = App::new(tokenize(text), Wpm::new(300), Theme::default());
        app.resize(width, height);
        app
    }

    #[test]
    fn orp_lands_under_the_focus_marker() {
        let mut app = reader("a tremendously interesting sentence", 81, 30);
        let rows = reader_rows(30);
        let focus = 40;

        for expected in ['a', 'm', 'e', 'n'] {
            let screen = render_rows(&app, 81, 30);
            assert_eq!(screen[rows.focus_row()].chars().nth(focus), Some('│'));
            assert_eq!(screen[rows.word_row()].chars().nth(focus), Some(expected));
            app.on_command(Command::NextWord, Instant::now());
        }
    }

    #[test]
    fn status_and_legend_are_drawn() {
        let app = reader("one two three", 100, 30);
        let screen = render_rows(&app, 100, 30).join("\n");
        assert!(screen.contains("300 WPM │ ~0s remaining"), "{screen}");
        assert!(screen.contains("space play/pause"), "{screen}");
    }

    #[test]
    fn unknown_size_shows_loading() {
        let app = App::new(tokenize("words"), Wpm::default(), Theme::default());
        let screen = render_rows(&app, 40, 5);
        assert!(screen[0].starts_with("Loading..."));
    }

    #[test]
    fn picker_replaces_the_reader() {
        let mut app = reader("one two three", 80, 30);
        app.on_command(Command::OpenFile, Instant::now());
        let screen = render_rows(&app, 80, 30);
        assert_eq!(screen[0].trim(), "Select a file to open");
    }

    #[test]
    fn survives_a_tiny_terminal() {
        let app = reader("The quick brown fox", 3, 2);
        let screen = render_rows(&app, 3, 2);
        assert_eq!(screen.len(), 2);
    }
}
