use crate::config::Theme;
use crate::engine::layout::center_offset;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

/// Cells in the progress bar.
pub const PROGRESS_WIDTH: usize = 40;

pub fn hex_to_rgb(hex: &str) -> Color {
    match parse_hex(hex) {
        Some((r, g, b)) => Color::Rgb(r, g, b),
        None => Color::White,
    }
}

fn parse_hex(hex: &str) -> Option<(u8, u8, u8)> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
    Some((r, g, b))
}

/// Linear mix of two hex colors, `t` from 0.0 (all `from`) to 1.0.
pub fn blend(from: &str, to: &str, t: f64) -> Color {
    let (Some(a), Some(b)) = (parse_hex(from), parse_hex(to)) else {
        return hex_to_rgb(from);
    };
    let t = t.clamp(0.0, 1.0);
    let mix = |x: u8, y: u8| (f64::from(x) + (f64::from(y) - f64::from(x)) * t).round() as u8;
    Color::Rgb(mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Prefixes `line` with enough spaces to center it in `width` columns.
pub fn centered(line: Line<'static>, width: u16) -> Line<'static> {
    let pad = center_offset(line.width(), usize::from(width));
    if pad == 0 {
        return line;
    }
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::raw(" ".repeat(pad)));
    spans.extend(line.spans);
    Line::from(spans)
}

pub fn blank_lines(count: usize) -> impl Iterator<Item = Line<'static>> {
    std::iter::repeat_with(Line::default).take(count)
}

/// Filled cells shade from `progress_start` to `progress_end`.
pub fn progress_bar(fraction: f64, theme: &Theme) -> Line<'static> {
    let fraction = fraction.clamp(0.0, 1.0);
    let filled = ((PROGRESS_WIDTH as f64) * fraction).round() as usize;

    let mut spans: Vec<Span<'static>> = (0..filled)
        .map(|i| {
            let t = if filled > 1 {
                i as f64 / (filled - 1) as f64
            } else {
                0.0
            };
            let color = blend(&theme.progress_start, &theme.progress_end, t);
            Span::styled("█", Style::default().fg(color))
        })
        .collect();
    if filled < PROGRESS_WIDTH {
        spans.push(Span::styled(
            "░".repeat(PROGRESS_WIDTH - filled),
            Style::default().fg(hex_to_rgb(&theme.sub_alt)),
        ));
    }
    Line::from(spans)
}

#[cfg(test)]
pub(crate) fn line_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}
