use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Body regions in fixed on-screen order: red, green, blue, save
/// trigger, saved list.
pub struct BodyRegions {
    pub red: Rect,
    pub green: Rect,
    pub blue: Rect,
    pub trigger: Rect,
    pub saves: Rect,
}

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

pub fn body_regions(body: Rect) -> BodyRegions {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(body);

    BodyRegions {
        red: rows[0],
        green: rows[1],
        blue: rows[2],
        trigger: rows[3],
        saves: rows[4],
    }
}
