use thiserror::Error;

/// Structural problems detected while wiring the carousel to its page.
///
/// Navigation itself never fails; these only surface at initialization.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CarouselError {
    #[error("required carousel element is missing: {0}")]
    MissingElement(&'static str),

    #[error("carousel has {slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },
}
