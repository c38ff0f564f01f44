//! Terminal preview of the theme
//!
//! [`ThemePreview`] is a ratatui widget showing every token: color swatches
//! labelled with their hex value, font families, and spacing bars.

mod terminal;

pub use terminal::{print, write_buffer};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget},
};

use crate::color::HexColor;
use crate::theme::Theme;

const NAME_WIDTH: usize = 20;

/// Widget rendering all tokens of a [`Theme`]
#[derive(Debug, Clone, Copy)]
pub struct ThemePreview<'a> {
    theme: &'a Theme,
}

impl<'a> ThemePreview<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }

    /// Rows needed to draw the widget, borders included
    pub fn height(&self) -> u16 {
        self.lines().len() as u16 + 2
    }

    /// Pick whichever text color reads better on `swatch`
    fn label_color(&self, swatch: HexColor) -> HexColor {
        let colors = &self.theme.colors;
        let on_dark = colors.text_primary.contrast_ratio(swatch);
        let on_light = colors.text_on_light.contrast_ratio(swatch);
        if on_dark >= on_light {
            colors.text_primary
        } else {
            colors.text_on_light
        }
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::from(self.theme.colors.text_muted))
                .add_modifier(Modifier::BOLD),
        ))
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        let mut lines = vec![self.section("Colors")];

        for (role, color) in theme.colors.iter() {
            let swatch = Style::default()
                .bg(Color::from(color))
                .fg(Color::from(self.label_color(color)));
            lines.push(Line::from(vec![
                Span::styled(format!(" {color} "), swatch),
                Span::raw("  "),
                Span::raw(role.name()),
            ]));
        }

        lines.push(Line::default());
        lines.push(self.section("Fonts"));
        for (role, family) in theme.fonts.iter() {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<width$}", role.name(), width = NAME_WIDTH)),
                Span::raw(family),
            ]));
        }

        lines.push(Line::default());
        lines.push(self.section("Spacing"));
        let bar = Style::default().fg(Color::from(theme.colors.layer_active_border));
        for (role, px) in theme.spacing.iter() {
            lines.push(Line::from(vec![
                Span::raw(format!("{:<4}{:>4}px  ", role.name(), px)),
                Span::styled("█".repeat((px / 2) as usize), bar),
            ]));
        }

        lines
    }
}

impl Widget for ThemePreview<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(" MSP theme ")
            .border_style(Style::default().fg(Color::from(colors.panel_border_strong)));
        let base = Style::default()
            .bg(Color::from(colors.panel))
            .fg(Color::from(colors.text_primary));

        Paragraph::new(self.lines())
            .block(block)
            .style(base)
            .render(area, buf);
    }
}
