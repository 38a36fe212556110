use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::mixer::MixerState;
use crate::ui::theme::{GLOBAL_BORDER, HEADER_SEPARATOR, LABEL_TEXT};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, state: &MixerState) -> Paragraph<'static> {
        let text_style = Style::default().fg(LABEL_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let swatch_style =
            Style::default().fg(Color::Rgb(state.rgb.r, state.rgb.g, state.rgb.b));

        let line = Line::from(vec![
            Span::styled("  huemix", text_style.add_modifier(Modifier::BOLD)),
            Span::styled("  │  ", separator_style),
            Span::styled("██", swatch_style),
            Span::styled(format!("  {}", state.rgb.hex()), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!(
                    "R {:>3}  G {:>3}  B {:>3}",
                    state.rgb.r, state.rgb.g, state.rgb.b
                ),
                text_style,
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("saves: {}", state.saves.len()), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
