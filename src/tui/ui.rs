use crate::core::route::View;
use crate::core::state::App;
use crate::tui::component::Component;
use crate::tui::components::{BookDetail, BookGrid, PaginationBar, SearchBar, TitleBar};
use crate::tui::{InputMode, TuiState};

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    match app.view {
        View::Featured => draw_featured(frame, app, tui),
        View::All => draw_all_books(frame, app, tui),
    }

    if let Some(book) = app.selected_book() {
        let area = frame.area();
        BookDetail::new(book).render(frame, area);
    }
}

fn draw_featured(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(2), Min(0), Length(1)]);
    let [title_area, heading_area, grid_area, help_area] = layout.areas(frame.area());

    TitleBar::new(app.route().path(), app.status_message.clone(), None).render(frame, title_area);
    draw_heading(frame, heading_area, View::Featured.title());

    let books = app.visible_books();
    BookGrid::new(&tui.grid, &app.catalog, &books, app.featured_count, tui.pulse_value)
        .render(frame, grid_area);

    draw_help(frame, help_area, help_text(app, tui.input_mode));
}

fn draw_all_books(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Length(3), Min(0), Length(1), Length(1)]);
    let [title_area, search_area, grid_area, pages_area, help_area] = layout.areas(frame.area());

    let listing = app.current_listing();
    let matches = (!app.listing.filter.is_empty() && !app.catalog.is_loading())
        .then_some(listing.total_matches);

    TitleBar::new(app.route().path(), app.status_message.clone(), matches)
        .render(frame, title_area);

    SearchBar::new(
        &app.listing.filter.search_term,
        app.listing.filter.rating,
        tui.input_mode == InputMode::Search,
    )
    .render(frame, search_area);

    BookGrid::new(&tui.grid, &app.catalog, &listing.items, app.page_size, tui.pulse_value)
        .render(frame, grid_area);

    PaginationBar::new(listing.current_page, listing.total_pages).render(frame, pages_area);

    draw_help(frame, help_area, help_text(app, tui.input_mode));
}

fn draw_heading(frame: &mut Frame, area: Rect, title: &str) {
    let heading = Paragraph::new(Line::from(Span::styled(
        title.to_string(),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(heading, area);
}

fn draw_help(frame: &mut Frame, area: Rect, text: &str) {
    let help = Paragraph::new(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(Color::DarkGray),
    )));
    frame.render_widget(help, area);
}

/// Key hints for the current screen.
fn help_text(app: &App, mode: InputMode) -> &'static str {
    if app.open_book.is_some() {
        return " Esc Back  q Quit";
    }
    match (app.view, mode) {
        (_, InputMode::Search) => " Type to filter  Enter/Esc Done",
        (View::Featured, InputMode::Browse) => {
            " ←↑↓→ Select  Enter Open  a View all books  r Reload  q Quit"
        }
        (View::All, InputMode::Browse) => {
            " ←↑↓→ Select  Enter Open  / Search  f Rating  n/p Page  Esc Back  q Quit"
        }
    }
}
