use std::io::{self, Write};

use crossterm::{
    queue,
    style::{self as ct, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
};
use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use super::ThemePreview;
use crate::theme::Theme;

/// Draw the preview once to stdout
///
/// The widget is rendered off-screen and printed line by line, so the preview
/// stays in the scrollback like normal command output.
pub fn print(theme: &Theme, width: u16) -> io::Result<()> {
    let preview = ThemePreview::new(theme);
    let area = Rect::new(0, 0, width, preview.height());
    let mut buf = Buffer::empty(area);
    preview.render(area, &mut buf);

    let mut stdout = io::stdout().lock();
    write_buffer(&mut stdout, &buf)
}

/// Write a rendered buffer with ANSI colors, one terminal line per row
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer) -> io::Result<()> {
    let area = buf.area;

    for y in area.top()..area.bottom() {
        let mut current: Option<(Color, Color)> = None;

        for x in area.left()..area.right() {
            let cell = &buf[(x, y)];
            if current != Some((cell.fg, cell.bg)) {
                queue!(
                    out,
                    SetForegroundColor(to_crossterm(cell.fg)),
                    SetBackgroundColor(to_crossterm(cell.bg))
                )?;
                current = Some((cell.fg, cell.bg));
            }
            queue!(out, Print(cell.symbol()))?;
        }

        queue!(out, ResetColor, Print("\n"))?;
    }

    out.flush()
}

fn to_crossterm(color: Color) -> ct::Color {
    match color {
        Color::Rgb(r, g, b) => ct::Color::Rgb { r, g, b },
        Color::Indexed(i) => ct::Color::AnsiValue(i),
        _ => ct::Color::Reset,
    }
}
