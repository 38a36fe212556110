use ratatui::Frame;

use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};

/// Compose one frame from the latest state only.
pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let options = app.ui_options();
    let state = app.state();
    let focus = app.focus();

    frame.render_widget(Header::new().widget(state), header);

    let regions = body_regions(body);
    frame.render_widget(
        app.red_slider().widget(
            state.rgb.r,
            focus == app.red_slider().id(),
            regions.red,
            options.unicode_bars,
        ),
        regions.red,
    );
    frame.render_widget(
        app.green_slider().widget(
            state.rgb.g,
            focus == app.green_slider().id(),
            regions.green,
            options.unicode_bars,
        ),
        regions.green,
    );
    frame.render_widget(
        app.blue_slider().widget(
            state.rgb.b,
            focus == app.blue_slider().id(),
            regions.blue,
            options.unicode_bars,
        ),
        regions.blue,
    );
    frame.render_widget(
        app.save_button()
            .widget(state.can_save(), focus == app.save_button().id()),
        regions.trigger,
    );
    frame.render_widget(
        app.saved_list().widget(&state.saves, options.show_hex),
        regions.saves,
    );

    frame.render_widget(Footer::new().widget(footer), footer);
}
