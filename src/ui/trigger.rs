//! Generic action trigger.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::action_loop::ActionSender;
use crate::ui::app::ComponentId;
use crate::ui::mvi::Intent;
use crate::ui::theme::{DISABLED_TEXT, FOCUS_BORDER, GLOBAL_BORDER, LABEL_TEXT};

/// Static configuration for one trigger instance. `set` builds the
/// intent emitted on activation; it takes no payload.
pub struct TriggerConfig<I: Intent> {
    pub id: ComponentId,
    pub caption: &'static str,
    pub set: fn() -> I,
}

/// Enabled/disabled action trigger.
///
/// Eligibility (`can_act`) is computed externally from the latest state
/// and passed in per call. While it is false no intent can leave this
/// component, no matter how many activation events arrive — the gate is
/// behavioral, not just visual.
pub struct TriggerButton<I: Intent> {
    id: ComponentId,
    caption: &'static str,
    set: fn() -> I,
    actions: ActionSender<I>,
}

impl<I: Intent> TriggerButton<I> {
    pub fn new(config: TriggerConfig<I>, actions: ActionSender<I>) -> Self {
        Self {
            id: config.id,
            caption: config.caption,
            set: config.set,
            actions,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Handle a key while focused. Enter and Space activate.
    pub fn handle_key(&self, key: KeyEvent, can_act: bool) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }
        self.activate(can_act);
    }

    /// Emit the configured intent, if currently allowed.
    pub fn activate(&self, can_act: bool) {
        if !can_act {
            return;
        }
        self.actions.emit((self.set)());
    }

    pub fn widget(&self, can_act: bool, focused: bool) -> Paragraph<'static> {
        let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };

        let line = if can_act {
            let mut style = Style::default().fg(LABEL_TEXT);
            if focused {
                style = style.add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(self.caption, style))
        } else {
            Line::from(Span::styled(
                format!("{} (blocked)", self.caption),
                Style::default().fg(DISABLED_TEXT).add_modifier(Modifier::DIM),
            ))
        };

        Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
    }
}
