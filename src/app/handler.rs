use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::ui::layout::Hit;
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use std::time::Instant;

pub fn handle_event(state: &mut AppState, event: AppEvent, now: Instant) {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent, now);
        }
        AppEvent::Tick => {
            if state.carousel.tick(&mut state.page, now) {
                state.dirty = true;
            }
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent, now: Instant) {
    match event {
        CEvent::Key(key) => handle_key(state, key, now),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse, now),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
        }
        CEvent::FocusLost => update_hover(state, false, now),
        _ => {}
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent, now: Instant) {
    // Windows reports releases (and repeats) as separate events
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => state.should_quit = true,
        KeyCode::Left | KeyCode::Char('h') => activate(state, Hit::Prev, now),
        KeyCode::Right | KeyCode::Char('l') => activate(state, Hit::Next, now),
        KeyCode::Char(c @ '1'..='9') => {
            let index = c as usize - '1' as usize;
            activate(state, Hit::Dot(index), now);
        }
        _ => {}
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent, now: Instant) {
    let layout = state.layout();
    let pos = Position::new(mouse.column, mouse.row);
    let inside = layout.region.contains(pos);
    let x = i32::from(mouse.column);

    match mouse.kind {
        MouseEventKind::Moved | MouseEventKind::Drag(_) => update_hover(state, inside, now),
        MouseEventKind::Down(MouseButton::Left) => {
            update_hover(state, inside, now);
            if inside {
                state.press = Some(layout.hit(pos));
                state.carousel.touch_start(x);
            }
        }
        MouseEventKind::Up(MouseButton::Left) => {
            update_hover(state, inside, now);
            let Some(pressed) = state.press.take() else {
                return;
            };
            state.carousel.touch_end(&mut state.page, x, now);
            // Only a release over the control that was pressed counts as a click
            if let Some(target) = layout.hit(pos) {
                if pressed == Some(target) {
                    activate(state, target, now);
                }
            }
        }
        _ => {}
    }
}

/// Edge-triggered hover: only transitions suspend or resume autoplay.
fn update_hover(state: &mut AppState, inside: bool, now: Instant) {
    if inside == state.hovered {
        return;
    }
    state.hovered = inside;
    if inside {
        state.carousel.pointer_enter();
    } else {
        state.carousel.pointer_leave(now);
    }
}

fn activate(state: &mut AppState, target: Hit, now: Instant) {
    match target {
        Hit::Prev => state.carousel.previous(&mut state.page, now),
        Hit::Next => state.carousel.next(&mut state.page, now),
        Hit::Dot(index) => state.carousel.select(&mut state.page, index, now),
    }
}
