//! Read-only list of saved mixes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::app::ComponentId;
use crate::ui::mixer::Rgb;
use crate::ui::theme::{GLOBAL_BORDER, HINT_TEXT, LABEL_TEXT};

/// Display component for `state.saves`.
///
/// Purely reactive: rebuilt from the latest state on every frame, with
/// no output channel of its own.
pub struct SavedList {
    id: ComponentId,
}

impl SavedList {
    pub fn new(id: ComponentId) -> Self {
        Self { id }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    pub fn widget(&self, saves: &[Rgb], show_hex: bool) -> Paragraph<'static> {
        let mut lines = Vec::new();

        if saves.is_empty() {
            lines.push(Line::from(Span::styled(
                "No saved mixes yet.",
                Style::default().fg(HINT_TEXT).add_modifier(Modifier::DIM),
            )));
        } else {
            for (idx, mix) in saves.iter().enumerate() {
                let mut spans = vec![
                    Span::styled(format!("{:>3}. ", idx + 1), Style::default().fg(HINT_TEXT)),
                    Span::styled(
                        "██ ",
                        Style::default().fg(Color::Rgb(mix.r, mix.g, mix.b)),
                    ),
                    Span::styled(
                        format!("rgb({:>3}, {:>3}, {:>3})", mix.r, mix.g, mix.b),
                        Style::default().fg(LABEL_TEXT),
                    ),
                ];
                if show_hex {
                    spans.push(Span::raw("  "));
                    spans.push(Span::styled(mix.hex(), Style::default().fg(HINT_TEXT)));
                }
                lines.push(Line::from(spans));
            }
        }

        Paragraph::new(lines).block(
            Block::default()
                .title(Span::styled("Saved", Style::default().fg(LABEL_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
