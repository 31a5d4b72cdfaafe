//! The host-element contract.

/// Visual elements supplied by the surrounding page.
///
/// Slides and indicators are index-aligned ordered collections. The
/// controller only ever calls the two setters; everything else about the
/// elements (content, layout, styling) belongs to the host.
pub trait CarouselSurface {
    fn slide_count(&self) -> usize;

    fn indicator_count(&self) -> usize;

    /// Show (full opacity) or hide (zero opacity) the slide at `index`.
    fn set_slide_visible(&mut self, index: usize, visible: bool);

    /// Switch the indicator at `index` between its highlighted and dimmed look.
    fn set_indicator_highlighted(&mut self, index: usize, highlighted: bool);
}
