//! 键盘/鼠标事件映射 (Input -> Action)
//!
//! 将终端事件转换为 Action

use std::io;
use std::time::Instant;

use crossterm::event::{KeyCode, MouseButton, MouseEvent, MouseEventKind};

use super::actions::Action;
use super::state::App;

/// 根据按键获取对应的 Action
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevSlide),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::NextSlide),
        KeyCode::Char(c @ '1'..='9') => Some(Action::JumpTo((c as u8 - b'1') as usize)),
        _ => None,
    }
}

/// 处理按键事件
pub fn handle_key_event(app: &mut App, key: KeyCode, now: Instant) -> io::Result<bool> {
    if let Some(action) = get_action(key) {
        Ok(app.dispatch(action, now))
    } else {
        Ok(false)
    }
}

/// 处理鼠标事件：移动驱动悬停暂停，左键点击驱动导航
pub fn handle_mouse_event(app: &mut App, event: MouseEvent, now: Instant) -> io::Result<bool> {
    let action = match event.kind {
        MouseEventKind::Moved => app.update_hover(event.column, event.row),
        MouseEventKind::Down(MouseButton::Left) => app.hit_test(event.column, event.row),
        _ => None,
    };

    if let Some(action) = action {
        Ok(app.dispatch(action, now))
    } else {
        Ok(false)
    }
}
