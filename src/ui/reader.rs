use crate::app::App;
use crate::config::Theme;
use crate::engine::context::{word_line, WordLine, HALF_WIDTH};
use crate::engine::eta::{format_duration, remaining_time};
use crate::engine::layout::reader_rows;
use crate::keys::READER_HELP;
use crate::ui::help::help_lines;
use crate::ui::utils::{blank_lines, centered, hex_to_rgb, progress_bar};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const NO_CONTENT_HINT: &str = "Press 'o' to open a text file or provide a URL as an argument.";
const FOCUS_MARKER: &str = "│";

/// The reader screen, top to bottom. Rows past the terminal height are
/// clipped by the caller.
pub fn compose(app: &App) -> Vec<Line<'static>> {
    let Some(words) = app.player.words() else {
        return compose_idle(app);
    };
    let theme = &app.theme;
    let viewport = app.viewport;
    let playback = app.player.snapshot();
    let rows = reader_rows(viewport.height);

    let mut lines: Vec<Line<'static>> = blank_lines(rows.leading).collect();
    lines.push(focus_marker(usize::from(viewport.focus_column), theme));
    lines.push(
        word_line(words, playback.current_index, usize::from(viewport.focus_column), HALF_WIDTH)
            .map(|line| styled_word_line(line, theme))
            .unwrap_or_default(),
    );
    lines.extend(blank_lines(rows.gap));

    let fraction = (playback.current_index + 1) as f64 / words.len() as f64;
    lines.push(centered(progress_bar(fraction, theme), viewport.width));
    lines.push(Line::default());

    let remaining = remaining_time(words.len(), playback.current_index, playback.wpm);
    let status = Line::styled(
        format!("{} WPM │ ~{} remaining", playback.wpm, format_duration(remaining)),
        Style::default().fg(hex_to_rgb(&theme.status)),
    );
    lines.push(centered(status, viewport.width));
    lines.push(Line::default());

    lines.extend(
        help_lines(&READER_HELP, theme)
            .into_iter()
            .map(|line| centered(line, viewport.width)),
    );
    lines
}

/// Nothing loaded: a hint, prefixed with the last load failure if any.
fn compose_idle(app: &App) -> Vec<Line<'static>> {
    let message = match &app.load_error {
        Some(reason) => format!("{}. {}", reason, NO_CONTENT_HINT),
        None => format!("No words to display. {}", NO_CONTENT_HINT),
    };
    let style = Style::default().fg(hex_to_rgb(&app.theme.status));
    let width = usize::from(app.viewport.width).max(1);
    textwrap::wrap(&message, width)
        .into_iter()
        .map(|part| Line::styled(part.into_owned(), style))
        .collect()
}

fn focus_marker(column: usize, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(column)),
        Span::styled(FOCUS_MARKER, Style::default().fg(hex_to_rgb(&theme.marker))),
    ])
}

/// One span per glyph of the word so the ORP letter keeps its own style.
fn styled_word_line(line: WordLine, theme: &Theme) -> Line<'static> {
    let normal = Style::default().fg(hex_to_rgb(&theme.text));
    let highlight = Style::default()
        .fg(hex_to_rgb(&theme.highlight))
        .add_modifier(Modifier::BOLD);
    let context = Style::default().fg(hex_to_rgb(&theme.context));

    let mut spans = Vec::with_capacity(line.word.len() + 3);
    spans.push(Span::raw(" ".repeat(line.padding)));
    spans.push(Span::styled(line.before, context));
    spans.extend(line.word.glyphs().map(|(glyph, is_orp)| {
        Span::styled(glyph.to_string(), if is_orp { highlight } else { normal })
    }));
    spans.push(Span::styled(line.after, context));
    Line::from(spans)
}
