mod hero;
pub mod layout;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let hero_layout = layout::compute_layout(frame.area(), state.page.slides.len());

    hero::render(frame, &hero_layout, state);
    status_bar::render(frame, hero_layout.status_bar, state);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;
    use std::time::Instant;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_renders_visible_slide_and_dots() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 80, 24), Instant::now())
            .unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("New Season Arrivals"));
        assert!(!text.contains("Free Shipping"));
        assert!(text.contains("heroCarousel"));
        assert!(text.contains("slide 1/3 | autoplay"));
        assert_eq!(text.matches('●').count(), 1);
        assert_eq!(text.matches('○').count(), 2);
    }

    #[test]
    fn test_renders_placeholder_without_slides() {
        let mut config = AppConfig::default();
        config.hero.slides.clear();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let state = AppState::new(&config, Rect::new(0, 0, 80, 24), Instant::now()).unwrap();
        terminal.draw(|f| render(f, &state)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("No slides"));
        assert!(text.contains("no slides"));
    }
}
