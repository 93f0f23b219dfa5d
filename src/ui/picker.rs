use crate::config::Theme;
use crate::keys::PICKER_HELP;
use crate::picker::FilePicker;
use crate::ui::help::help_lines;
use crate::ui::utils::{blank_lines, centered, hex_to_rgb};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

const TITLE: &str = "Select a file to open";
/// Title, directory line and their spacing above the list.
const HEADER_ROWS: usize = 3;
/// Spacing and legend below the list.
const FOOTER_ROWS: usize = 7;

pub fn compose(picker: &FilePicker, theme: &Theme, width: u16, height: u16) -> Vec<Line<'static>> {
    let accent = Style::default().fg(hex_to_rgb(&theme.accent));
    let dim = Style::default().fg(hex_to_rgb(&theme.sub_alt));

    let mut lines = vec![
        centered(
            Line::styled(TITLE, accent.add_modifier(Modifier::BOLD)),
            width,
        ),
        centered(
            Line::styled(picker.dir().display().to_string(), dim),
            width,
        ),
        Line::default(),
    ];

    let list_rows = usize::from(height).saturating_sub(HEADER_ROWS + FOOTER_ROWS);
    let mut shown = 0;
    for (index, entry) in picker.visible() {
        let marker = if index == picker.cursor() {
            Span::styled("> ", accent)
        } else {
            Span::raw("  ")
        };
        let name = if entry.is_dir {
            format!("{}/", entry.name)
        } else {
            entry.name.clone()
        };
        let style = match (index == picker.cursor(), entry.is_dir || entry.selectable) {
            (_, false) => dim,
            (true, true) => accent,
            (false, true) => Style::default().fg(hex_to_rgb(&theme.text)),
        };
        lines.push(Line::from(vec![marker, Span::styled(name, style)]));
        shown += 1;
    }
    if picker.entries().is_empty() {
        lines.push(Line::styled("  (empty)", dim));
        shown += 1;
    }
    lines.extend(blank_lines(list_rows.saturating_sub(shown)));

    lines.extend(blank_lines(3));
    lines.extend(
        help_lines(&PICKER_HELP, theme)
            .into_iter()
            .map(|line| centered(line, width)),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::utils::line_text;
    use pretty_assertions::assert_eq;
    use std::fs;

    #[test]
    fn lists_entries_with_cursor_and_directory_suffix() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("docs")).unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();
        let picker = FilePicker::new(dir.path().to_path_buf(), 10);

        let text: Vec<String> = compose(&picker, &Theme::default(), 60, 24)
            .iter()
            .map(line_text)
            .collect();
        assert_eq!(text[0].trim(), TITLE);
        assert_eq!(text[1].trim(), dir.path().display().to_string());
        assert_eq!(text[3], "> docs/");
        assert_eq!(text[4], "  a.txt");
    }

    #[test]
    fn legend_stays_at_the_bottom() {
        let dir = tempfile::tempdir().unwrap();
        let picker = FilePicker::new(dir.path().to_path_buf(), 10);
        let lines = compose(&picker, &Theme::default(), 60, 24);
        assert_eq!(lines.len(), 24 - 1);
        assert!(line_text(&lines[3]).contains("(empty)"));
        assert!(line_text(&lines[22]).contains("cancel"));
    }
}
