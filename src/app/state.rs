use crate::carousel::{CarouselController, CarouselError};
use crate::config::AppConfig;
use crate::page::HeroPage;
use crate::ui::layout::{self, Hit, HeroLayout};
use ratatui::layout::Rect;
use std::time::Instant;

pub struct AppState {
    pub page: HeroPage,
    pub carousel: CarouselController,
    /// Last known terminal size, used for hit-testing mouse input.
    pub viewport: Rect,
    /// Whether the pointer is currently over the hero region.
    pub hovered: bool,
    /// Target under the left button when it went down inside the hero,
    /// `None` when no press is in progress.
    pub press: Option<Option<Hit>>,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: &AppConfig, viewport: Rect, now: Instant) -> Result<Self, CarouselError> {
        let mut page = HeroPage::build(&config.hero)?;
        let carousel = CarouselController::initialize(&mut page, now)?;
        Ok(Self {
            page,
            carousel,
            viewport,
            hovered: false,
            press: None,
            should_quit: false,
            dirty: true,
        })
    }

    pub fn layout(&self) -> HeroLayout {
        layout::compute_layout(self.viewport, self.page.slides.len())
    }

    pub fn status_line(&self) -> String {
        if self.carousel.is_empty() {
            return "no slides".to_string();
        }
        let autoplay = if self.carousel.is_autoplaying() {
            "autoplay"
        } else {
            "paused"
        };
        format!(
            "slide {}/{} | {}",
            self.carousel.current_index() + 1,
            self.carousel.len(),
            autoplay
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line() {
        let now = Instant::now();
        let mut state = AppState::new(&AppConfig::default(), Rect::new(0, 0, 80, 24), now).unwrap();
        assert_eq!(state.status_line(), "slide 1/3 | autoplay");
        state.carousel.suspend_autoplay();
        assert_eq!(state.status_line(), "slide 1/3 | paused");
    }

    #[test]
    fn test_missing_control_rejects_startup() {
        let mut config = AppConfig::default();
        config.hero.prev_control.clear();
        let result = AppState::new(&config, Rect::new(0, 0, 80, 24), Instant::now());
        assert!(matches!(result, Err(CarouselError::MissingElement(_))));
    }

    #[test]
    fn test_empty_status_line() {
        let mut config = AppConfig::default();
        config.hero.slides.clear();
        let state = AppState::new(&config, Rect::new(0, 0, 80, 24), Instant::now()).unwrap();
        assert_eq!(state.status_line(), "no slides");
    }
}
