//! Generic labeled channel slider.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::ui::action_loop::ActionSender;
use crate::ui::app::ComponentId;
use crate::ui::mvi::Intent;
use crate::ui::theme::{BAR_EMPTY, FOCUS_BORDER, GLOBAL_BORDER, LABEL_TEXT};

/// Static configuration for one slider instance.
///
/// `set` turns a committed value into the intent this instance emits;
/// `id` is the scope key that keeps structurally identical instances
/// from ever observing each other's key events.
pub struct SliderConfig<I: Intent> {
    pub id: ComponentId,
    pub label: &'static str,
    pub min: u8,
    pub max: u8,
    pub tint: ratatui::style::Color,
    pub set: fn(u8) -> I,
}

/// Labeled bounded input bound to one field of the shared state.
///
/// Holds no value of its own: the orchestrator passes the current value
/// in from the latest state on every call, and the only way back out is
/// the intent built by `set`.
pub struct Slider<I: Intent> {
    id: ComponentId,
    label: &'static str,
    min: u8,
    max: u8,
    tint: ratatui::style::Color,
    set: fn(u8) -> I,
    actions: ActionSender<I>,
}

impl<I: Intent> Slider<I> {
    pub fn new(config: SliderConfig<I>, actions: ActionSender<I>) -> Self {
        Self {
            id: config.id,
            label: config.label,
            min: config.min,
            max: config.max,
            tint: config.tint,
            set: config.set,
            actions,
        }
    }

    pub fn id(&self) -> ComponentId {
        self.id
    }

    /// Handle a key while focused. `current` is this slider's value from
    /// the latest state.
    pub fn handle_key(&self, key: KeyEvent, current: u8) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        let step: i16 = if key.modifiers.contains(KeyModifiers::SHIFT) {
            10
        } else {
            1
        };
        let target = match key.code {
            KeyCode::Left => i16::from(current) - step,
            KeyCode::Right => i16::from(current) + step,
            KeyCode::Home => i16::from(self.min),
            KeyCode::End => i16::from(self.max),
            _ => return,
        };
        self.commit(target, current);
    }

    /// Clamp a raw value into bounds and emit if it changes the channel.
    ///
    /// Out-of-range input stops here; the reducer only ever sees values
    /// in `[min, max]`. A no-op change emits nothing, so exactly one
    /// intent leaves per committed change.
    pub fn commit(&self, raw: i16, current: u8) {
        let clamped = raw.clamp(i16::from(self.min), i16::from(self.max)) as u8;
        if clamped != current {
            self.actions.emit((self.set)(clamped));
        }
    }

    pub fn widget(
        &self,
        current: u8,
        focused: bool,
        area: Rect,
        unicode_bars: bool,
    ) -> Paragraph<'static> {
        let border_color = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
        let (full_glyph, empty_glyph) = if unicode_bars { ('█', '░') } else { ('#', '-') };

        // Inner width minus the value column (" 255") and one gap.
        let inner = area.width.saturating_sub(2) as usize;
        let bar_width = inner.saturating_sub(5);

        let range = u32::from(self.max - self.min).max(1);
        let filled =
            (u32::from(current.saturating_sub(self.min)) * bar_width as u32 / range) as usize;
        let empty = bar_width.saturating_sub(filled);

        let mut value_style = Style::default().fg(LABEL_TEXT);
        if focused {
            value_style = value_style.add_modifier(Modifier::BOLD);
        }

        let line = Line::from(vec![
            Span::styled(
                full_glyph.to_string().repeat(filled),
                Style::default().fg(self.tint),
            ),
            Span::styled(
                empty_glyph.to_string().repeat(empty),
                Style::default().fg(BAR_EMPTY),
            ),
            Span::raw(" "),
            Span::styled(format!("{:>4}", current), value_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(self.label, Style::default().fg(LABEL_TEXT)))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
    }
}
