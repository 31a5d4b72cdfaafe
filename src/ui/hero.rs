use crate::app::state::AppState;
use crate::page::SlideElement;
use crate::ui::layout::HeroLayout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, layout: &HeroLayout, state: &AppState) {
    let page = &state.page;
    let border_style = if state.hovered {
        Theme::border_hovered()
    } else {
        Theme::border()
    };
    let block = Block::default()
        .title(format!(" {} ", page.container))
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(block, layout.hero);

    render_control(frame, layout.prev, &page.prev.label);
    render_control(frame, layout.next, &page.next.label);

    match page.visible_slide() {
        Some(slide) => render_slide(frame, layout.slide, slide),
        None => {
            let placeholder = Paragraph::new(Span::styled("No slides", Theme::placeholder()))
                .alignment(Alignment::Center);
            frame.render_widget(placeholder, vertical_center(layout.slide, 1));
        }
    }

    for (dot, area) in page.indicators.iter().zip(&layout.dots) {
        if area.is_empty() {
            continue;
        }
        let span = if dot.highlighted {
            Span::styled("●", Theme::dot_active())
        } else {
            Span::styled("○", Theme::dot_inactive())
        };
        frame.render_widget(Paragraph::new(span).alignment(Alignment::Center), *area);
    }
}

fn render_control(frame: &mut Frame, area: Rect, label: &str) {
    let paragraph = Paragraph::new(Span::styled(label.to_string(), Theme::control()))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, 1));
}

fn render_slide(frame: &mut Frame, area: Rect, slide: &SlideElement) {
    let mut lines = vec![
        Line::from(Span::styled(slide.title.clone(), Theme::slide_title(slide.accent))),
        Line::default(),
        Line::from(Span::styled(slide.subtitle.clone(), Theme::slide_subtitle())),
    ];
    if let Some(cta) = &slide.cta {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  {}  ", cta),
            Theme::call_to_action(slide.accent),
        )));
    }

    let height = lines.len() as u16;
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, vertical_center(area, height));
}

/// The `height`-row band in the middle of `area`.
fn vertical_center(area: Rect, height: u16) -> Rect {
    let height = height.min(area.height);
    let top = area.y + (area.height - height) / 2;
    Rect::new(area.x, top, area.width, height)
}
