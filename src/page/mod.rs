//! The hero page: the elements the carousel drives.
//!
//! A [`HeroPage`] is built once from configuration and owned by the
//! application state. The carousel controller borrows it through
//! [`CarouselSurface`] to flip slide visibility and indicator highlights;
//! the UI reads those flags back when drawing.

use crate::carousel::{CarouselError, CarouselSurface};
use crate::config::HeroConfig;
use ratatui::style::Color;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Control {
    pub label: String,
}

#[derive(Debug, Clone)]
pub struct SlideElement {
    pub title: String,
    pub subtitle: String,
    pub cta: Option<String>,
    pub accent: Color,
    pub visible: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Indicator {
    pub highlighted: bool,
}

#[derive(Debug, Clone)]
pub struct HeroPage {
    pub container: String,
    pub prev: Control,
    pub next: Control,
    pub slides: Vec<SlideElement>,
    pub indicators: Vec<Indicator>,
}

impl HeroPage {
    /// Build the page from config, failing on any missing required element.
    ///
    /// All slides start hidden; one indicator is generated per slide.
    pub fn build(cfg: &HeroConfig) -> Result<Self, CarouselError> {
        let container = required(&cfg.container, "container")?;
        let prev = Control {
            label: required(&cfg.prev_control, "previous control")?,
        };
        let next = Control {
            label: required(&cfg.next_control, "next control")?,
        };

        let slides: Vec<SlideElement> = cfg
            .slides
            .iter()
            .map(|s| SlideElement {
                title: s.title.clone(),
                subtitle: s.subtitle.clone(),
                cta: s.cta.clone(),
                accent: Color::from_str(&s.accent).unwrap_or(Color::White),
                visible: false,
            })
            .collect();
        let indicators = vec![Indicator::default(); slides.len()];

        Ok(Self {
            container,
            prev,
            next,
            slides,
            indicators,
        })
    }

    pub fn visible_slide(&self) -> Option<&SlideElement> {
        self.slides.iter().find(|s| s.visible)
    }
}

fn required(value: &str, element: &'static str) -> Result<String, CarouselError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CarouselError::MissingElement(element));
    }
    Ok(trimmed.to_string())
}

impl CarouselSurface for HeroPage {
    fn slide_count(&self) -> usize {
        self.slides.len()
    }

    fn indicator_count(&self) -> usize {
        self.indicators.len()
    }

    fn set_slide_visible(&mut self, index: usize, visible: bool) {
        if let Some(slide) = self.slides.get_mut(index) {
            slide.visible = visible;
        }
    }

    fn set_indicator_highlighted(&mut self, index: usize, highlighted: bool) {
        if let Some(dot) = self.indicators.get_mut(index) {
            dot.highlighted = highlighted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::carousel::CarouselController;
    use std::time::Instant;

    #[test]
    fn test_build_from_defaults() {
        let page = HeroPage::build(&HeroConfig::default()).unwrap();
        assert_eq!(page.container, "heroCarousel");
        assert_eq!(page.slides.len(), 3);
        assert_eq!(page.indicators.len(), 3);
        assert_eq!(page.slides[0].accent, Color::Cyan);
        assert!(page.visible_slide().is_none());
    }

    #[test]
    fn test_missing_elements_are_fatal() {
        let mut cfg = HeroConfig::default();
        cfg.next_control = "  ".into();
        assert_eq!(
            HeroPage::build(&cfg).unwrap_err(),
            CarouselError::MissingElement("next control")
        );

        let mut cfg = HeroConfig::default();
        cfg.container = String::new();
        assert_eq!(
            HeroPage::build(&cfg).unwrap_err(),
            CarouselError::MissingElement("container")
        );

        let mut cfg = HeroConfig::default();
        cfg.prev_control = String::new();
        assert_eq!(
            HeroPage::build(&cfg).unwrap_err(),
            CarouselError::MissingElement("previous control")
        );
    }

    #[test]
    fn test_unknown_accent_falls_back_to_white() {
        let mut cfg = HeroConfig::default();
        cfg.slides[1].accent = "not-a-colour".into();
        let page = HeroPage::build(&cfg).unwrap();
        assert_eq!(page.slides[1].accent, Color::White);
    }

    #[test]
    fn test_controller_drives_page() {
        let mut page = HeroPage::build(&HeroConfig::default()).unwrap();
        let now = Instant::now();
        let mut carousel = CarouselController::initialize(&mut page, now).unwrap();
        assert_eq!(
            page.visible_slide().map(|s| s.title.as_str()),
            Some("New Season Arrivals")
        );

        carousel.previous(&mut page, now);
        assert_eq!(
            page.visible_slide().map(|s| s.title.as_str()),
            Some("Free Shipping")
        );
        let lit: Vec<bool> = page.indicators.iter().map(|d| d.highlighted).collect();
        assert_eq!(lit, vec![false, false, true]);
    }

    #[test]
    fn test_empty_page_builds() {
        let mut cfg = HeroConfig::default();
        cfg.slides.clear();
        let mut page = HeroPage::build(&cfg).unwrap();
        let carousel = CarouselController::initialize(&mut page, Instant::now()).unwrap();
        assert!(carousel.is_empty());
        assert!(page.visible_slide().is_none());
    }
}
