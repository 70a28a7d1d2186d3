//! UI module for rendering the TUI

mod about;
mod components;
mod forms;
mod home;
mod layout;
mod schedule;

use crate::app::App;
use crate::state::View;
use ratatui::{layout::Rect, Frame};

/// Furthest the current page can scroll on a screen of this size
pub fn max_scroll(app: &App, screen: Rect) -> usize {
    match app.state.current_view {
        View::About => about::max_scroll(layout::create_layout(screen).content),
        View::Home | View::Schedule | View::Quote => 0,
    }
}

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let page = layout::create_layout(frame.area());

    layout::draw_navbar(frame, page.navbar, app);

    // Draw main content based on current view
    match app.state.current_view {
        View::Home => home::draw(frame, page.content, app),
        View::About => about::draw(frame, page.content, app),
        View::Schedule => schedule::draw(frame, page.content, app),
        View::Quote => forms::draw_quote_form(frame, page.content, app),
    }

    layout::draw_footer(frame, page.footer, app);
    layout::draw_status_bar(frame, page.status_bar, app);

    // Error dialog is modal and drawn last
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::state::QuoteField;
    use chrono::{Datelike, Local};
    use ratatui::{backend::TestBackend, style::Color, Terminal};

    /// Render the app and return the screen as one string per row
    fn render(app: &App, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect()
    }

    fn screen_contains(rows: &[String], needle: &str) -> bool {
        rows.iter().any(|row| row.contains(needle))
    }

    fn app_on(view: View) -> App {
        let mut app = App::new(SiteConfig::default());
        app.navigate(view);
        app
    }

    #[test]
    fn test_navbar_lists_every_page() {
        let rows = render(&app_on(View::Home), 100, 30);
        assert!(rows[1].contains("Your Brand"));
        for view in View::ALL {
            assert!(screen_contains(&rows[..3], view.label()), "{}", view.label());
        }
    }

    #[test]
    fn test_navbar_highlights_active_page() {
        // 100 columns: brand takes 40, then four 15-wide buttons
        let border_color = |app: &App, x: u16| {
            let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
            terminal.draw(|frame| draw(frame, app)).unwrap();
            terminal.backend().buffer()[(x, 0)].fg
        };

        let app = app_on(View::About);
        assert_eq!(border_color(&app, 40), Color::DarkGray);
        assert_eq!(border_color(&app, 55), Color::Cyan);
    }

    #[test]
    fn test_home_shows_call_to_action() {
        let rows = render(&app_on(View::Home), 100, 30);
        assert!(screen_contains(&rows, "Enter: Get Quote"));
    }

    #[test]
    fn test_full_footer_on_tall_terminal() {
        let rows = render(&app_on(View::Home), 120, 45);
        assert!(screen_contains(&rows, "Contact Us"));
        assert!(screen_contains(&rows, "Quick Links"));
        assert!(screen_contains(&rows, "Business Hours"));
        assert!(screen_contains(&rows, "Sunday: Closed"));
        let year = Local::now().year();
        assert!(screen_contains(&rows, &format!("{year} Your Brand. All rights reserved.")));
    }

    #[test]
    fn test_compact_footer_on_short_terminal() {
        let rows = render(&app_on(View::Home), 120, 24);
        assert!(!screen_contains(&rows, "Business Hours"));
        assert!(screen_contains(&rows, "contact@yourbrand.com"));
    }

    #[test]
    fn test_config_overrides_brand() {
        let config = SiteConfig {
            brand_name: Some("Acme Services".to_string()),
            ..Default::default()
        };
        let app = App::new(config);
        let rows = render(&app, 120, 45);
        assert!(rows[1].contains("Acme Services"));
        assert!(screen_contains(&rows, "Acme Services. All rights reserved."));
    }

    #[test]
    fn test_about_page_sections() {
        let rows = render(&app_on(View::About), 120, 60);
        assert!(screen_contains(&rows, "About Us"));
        assert!(screen_contains(&rows, "Our Values"));
        assert!(screen_contains(&rows, "Jane Smith"));
    }

    #[test]
    fn test_about_scroll_stops_at_end_of_page() {
        let mut app = app_on(View::About);
        app.state.scroll_offset = 10_000;
        let rows = render(&app, 120, 24);
        assert!(screen_contains(&rows, "Our Team"));
        assert!(screen_contains(&rows, "Jane Smith"));

        let screen = Rect::new(0, 0, 120, 24);
        let max = max_scroll(&app, screen);
        assert!(max > 0);
        app.state.clamp_scroll(max);
        assert_eq!(app.state.scroll_offset, max);
        assert_eq!(max_scroll(&app_on(View::Home), screen), 0);
    }

    #[test]
    fn test_schedule_page_points_to_contact() {
        let rows = render(&app_on(View::Schedule), 100, 30);
        assert!(screen_contains(&rows, "Schedule an Appointment"));
        assert!(screen_contains(&rows, "(555) 123-4567"));
    }

    #[test]
    fn test_quote_form_renders_fields_from_state() {
        let mut app = app_on(View::Quote);
        if let Some(form) = app.state.quote_form.as_mut() {
            form.update_field(QuoteField::Name, "Ada");
            form.update_field(QuoteField::Budget, "25000+");
        }
        let rows = render(&app, 100, 40);
        assert!(screen_contains(&rows, "Name *"));
        assert!(screen_contains(&rows, "Company"));
        assert!(screen_contains(&rows, "Ada"));
        assert!(screen_contains(&rows, "$25,000+"));
        assert!(screen_contains(&rows, "Select timeline"));
        assert!(screen_contains(&rows, "Request Quote"));
        assert!(screen_contains(&rows, "/quote"));
    }

    #[test]
    fn test_quote_form_values_visible_on_80x24() {
        let mut app = app_on(View::Quote);
        if let Some(form) = app.state.quote_form.as_mut() {
            form.update_field(QuoteField::Name, "Ada");
            form.update_field(QuoteField::Budget, "25000+");
            form.update_field(QuoteField::Description, "Line one\nLine two");
        }
        let rows = render(&app, 80, 24);
        assert!(screen_contains(&rows, "Ada"));
        assert!(screen_contains(&rows, "$25,000+"));
        assert!(screen_contains(&rows, "Select timeline"));
        assert!(screen_contains(&rows, "Line two"));
        assert!(screen_contains(&rows, "Request Quote"));
        // No empty boxes: every field title sits on the same row as its value
        assert!(!screen_contains(&rows, "┌ Name *"));
    }

    #[test]
    fn test_error_dialog_overlays_page() {
        let mut app = app_on(View::Quote);
        app.push_error("Could not send your quote request");
        let rows = render(&app, 100, 40);
        assert!(screen_contains(&rows, "Something went wrong"));
        assert!(screen_contains(&rows, "Could not send your quote request"));
    }

    #[test]
    fn test_status_message_in_status_bar() {
        let mut app = app_on(View::Quote);
        app.state.status_message = Some("Email is required".to_string());
        let rows = render(&app, 120, 30);
        assert!(rows[29].contains("Email is required"));
    }
}
