use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Width of a prev/next control column.
const CONTROL_WIDTH: u16 = 5;
/// Width of one indicator cell (" ● ").
const DOT_WIDTH: u16 = 3;

/// Clickable targets inside the hero region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Prev,
    Next,
    Dot(usize),
}

#[derive(Debug, Clone)]
pub struct HeroLayout {
    /// The whole carousel region, border included.
    pub hero: Rect,
    /// The hover and swipe region: everything inside the border.
    pub region: Rect,
    pub prev: Rect,
    pub slide: Rect,
    pub next: Rect,
    /// One cell per indicator; cells that don't fit are zero-sized.
    pub dots: Vec<Rect>,
    pub status_bar: Rect,
}

impl HeroLayout {
    pub fn hit(&self, pos: Position) -> Option<Hit> {
        if self.prev.contains(pos) {
            return Some(Hit::Prev);
        }
        if self.next.contains(pos) {
            return Some(Hit::Next);
        }
        self.dots.iter().position(|d| d.contains(pos)).map(Hit::Dot)
    }
}

pub fn compute_layout(area: Rect, slide_count: usize) -> HeroLayout {
    // Main vertical split: hero | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(5),    // Hero
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let hero = main_chunks[0];
    let status_bar = main_chunks[1];

    let inner = Rect::new(
        hero.x.saturating_add(1),
        hero.y.saturating_add(1),
        hero.width.saturating_sub(2),
        hero.height.saturating_sub(2),
    );

    // Inside the border: slide body | dot row
    let inner_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = inner_chunks[0];
    let dots_row = inner_chunks[1];

    let body_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CONTROL_WIDTH),
            Constraint::Min(1),
            Constraint::Length(CONTROL_WIDTH),
        ])
        .split(body);

    HeroLayout {
        hero,
        region: inner,
        prev: body_chunks[0],
        slide: body_chunks[1],
        next: body_chunks[2],
        dots: dot_cells(dots_row, slide_count),
        status_bar,
    }
}

/// Centre `count` indicator cells in `row`, clipping any that overflow.
fn dot_cells(row: Rect, count: usize) -> Vec<Rect> {
    let total = DOT_WIDTH as usize * count;
    let offset = (row.width as usize).saturating_sub(total) / 2;
    (0..count)
        .map(|i| {
            let x = row.x as usize + offset + i * DOT_WIDTH as usize;
            let x = u16::try_from(x).unwrap_or(u16::MAX);
            Rect::new(x, row.y, DOT_WIDTH, row.height).intersection(row)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regions_do_not_overlap() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(layout.hero, Rect::new(0, 0, 80, 23));
        assert_eq!(layout.status_bar, Rect::new(0, 23, 80, 1));
        assert_eq!(layout.region, Rect::new(1, 1, 78, 21));
        assert_eq!(layout.prev.width, CONTROL_WIDTH);
        assert_eq!(layout.next.width, CONTROL_WIDTH);
        assert_eq!(layout.next.right(), 79);
        assert!(layout.slide.x >= layout.prev.right());
        assert!(layout.dots.iter().all(|d| d.y == 21));
    }

    #[test]
    fn test_dots_are_centred() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), 3);
        // inner width 78, three cells of 3 → offset 34
        assert_eq!(layout.dots[0], Rect::new(35, 21, 3, 1));
        assert_eq!(layout.dots[2], Rect::new(41, 21, 3, 1));
    }

    #[test]
    fn test_hit_testing() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24), 3);
        assert_eq!(layout.hit(Position::new(layout.prev.x, 5)), Some(Hit::Prev));
        assert_eq!(layout.hit(Position::new(layout.next.x + 2, 5)), Some(Hit::Next));
        assert_eq!(layout.hit(Position::new(42, 21)), Some(Hit::Dot(2)));
        assert_eq!(layout.hit(Position::new(40, 5)), None);
        assert_eq!(layout.hit(Position::new(40, 23)), None);
    }

    #[test]
    fn test_overflowing_dots_are_unclickable() {
        let layout = compute_layout(Rect::new(0, 0, 12, 10), 5);
        assert_eq!(layout.dots.len(), 5);
        assert!(layout.dots[4].is_empty());
        assert_eq!(layout.hit(Position::new(11, layout.dots[0].y)), None);
    }
}
