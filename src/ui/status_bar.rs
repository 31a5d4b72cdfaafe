use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

const HINTS: &str = " ←/→ navigate  1-9 jump  q quit ";

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let style = if state.carousel.is_autoplaying() {
        Theme::status_bar()
    } else {
        Theme::status_paused()
    };

    let status = format!(" {} ", state.status_line());
    // Pad to fill remaining space
    let used = status.chars().count() + HINTS.chars().count();
    let remaining = (area.width as usize).saturating_sub(used);

    let line = Line::from(vec![
        Span::styled(status, style),
        Span::styled(" ".repeat(remaining), Theme::status_bar()),
        Span::styled(HINTS, Style::default().fg(Color::Cyan).bg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
