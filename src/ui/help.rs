use crate::config::Theme;
use crate::keys::HelpEntry;
use crate::ui::utils::hex_to_rgb;
use ratatui::style::Style;
use ratatui::text::{Line, Span};

const COLUMN_SEPARATOR: &str = "    ";

/// Lays out columns of `key description` pairs side by side, keys and
/// descriptions aligned within each column.
pub fn help_lines<T: HelpEntry, const ROWS: usize>(
    columns: &[[T; ROWS]],
    theme: &Theme,
) -> Vec<Line<'static>> {
    let key_style = Style::default().fg(hex_to_rgb(&theme.sub));
    let desc_style = Style::default().fg(hex_to_rgb(&theme.sub_alt));

    let widths: Vec<(usize, usize)> = columns
        .iter()
        .map(|column| {
            column.iter().fold((0, 0), |(kw, dw), entry| {
                let (key, desc) = entry.help();
                (kw.max(key.chars().count()), dw.max(desc.chars().count()))
            })
        })
        .collect();

    (0..ROWS)
        .map(|row| {
            let mut spans = Vec::with_capacity(columns.len() * 4);
            for (i, (column, &(key_width, desc_width))) in columns.iter().zip(&widths).enumerate() {
                let (key, desc) = column[row].help();
                if i > 0 {
                    spans.push(Span::raw(COLUMN_SEPARATOR));
                }
                spans.push(Span::styled(format!("{:<width$}", key, width = key_width), key_style));
                spans.push(Span::raw(" "));
                let desc = if i + 1 == columns.len() {
                    desc.to_string()
                } else {
                    format!("{:<width$}", desc, width = desc_width)
                };
                spans.push(Span::styled(desc, desc_style));
            }
            Line::from(spans)
        })
        .collect()
}
