use crate::core::state::{App, Status};
use crate::rates::ExchangeRate;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{ErrorView, ItemList, LoadingView, PageSizeSelector, TitleBar};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const HELP_TEXT: &str = " ←/→ page size  1-4 pick  ↑/↓ scroll  q quit ";

/// Draws one frame as a pure function of `App` (plus list selection).
///
/// Exactly one of loading, error or the rate list is shown, in that
/// priority order.
pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.base.clone(), app.date.clone(), app.status_message.clone())
        .updated_at(app.updated_at)
        .render(frame, title_area);

    match &app.status {
        Status::Loading => LoadingView::new(spinner_frame).render(frame, main_area),
        Status::Error(message) => ErrorView::new(message).render(frame, main_area),
        Status::Ready => draw_rates(frame, main_area, app, tui),
    }

    frame.render_widget(
        Span::styled(HELP_TEXT, Style::default().fg(Color::DarkGray)),
        help_area,
    );
}

fn draw_rates(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let [selector_area, list_area] = Layout::vertical([Length(1), Min(0)]).areas(area);

    PageSizeSelector::new(app.page_size).render(frame, selector_area);

    let visible = app.visible_rates();
    let title = format!(" Showing {} of {} ", visible.len(), app.rates.len());
    ItemList::new(&mut tui.rate_list, visible, rate_line)
        .title(title)
        .render(frame, list_area);
}

/// `EUR: 0.9210`, code in bold, rate to four decimals.
pub fn rate_line(rate: &ExchangeRate) -> Line<'_> {
    Line::from(vec![
        Span::styled(
            format!("{}:", rate.currency),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(" {:.4}", rate.rate)),
    ])
}
