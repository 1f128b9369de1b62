//! 业务逻辑处理 (Update/Dispatch)
//!
//! 包含核心的 dispatch 逻辑、鼠标悬停/命中判断和定时器驱动

use std::time::{Duration, Instant};

use ratatui::layout::Position;

use super::actions::Action;
use super::state::App;

/// poll 超时的保底值，保证界面在空闲时也保持响应
const IDLE_TIMEOUT: Duration = Duration::from_millis(250);

impl App {
    /// 核心逻辑分发，返回 true 表示退出
    pub fn dispatch(&mut self, action: Action, now: Instant) -> bool {
        match action {
            Action::Quit => return true,

            Action::NextSlide => self.carousel.next(&mut self.stage, now),
            Action::PrevSlide => self.carousel.previous(&mut self.stage, now),
            Action::JumpTo(index) => {
                // 数字键可能超出指示点范围，直接忽略而不回绕
                if index < self.carousel.count() {
                    self.carousel.go_to(&mut self.stage, index as i64, now);
                }
            }

            Action::PointerEnter => {
                self.hovering = true;
                self.carousel.pointer_enter();
                if self.carousel.count() > 1 {
                    self.set_message("已暂停自动轮播", now);
                }
            }
            Action::PointerLeave => {
                self.hovering = false;
                self.carousel.pointer_leave(now);
                self.message = None;
                self.message_timer.cancel();
            }
        }
        false
    }

    // ============ 鼠标相关 ============

    /// 鼠标移动后更新悬停判定，跨越边界时产生进入/离开动作
    pub fn update_hover(&self, column: u16, row: u16) -> Option<Action> {
        let inside = self
            .areas
            .wrapper
            .is_some_and(|area| area.contains(Position::new(column, row)));
        match (self.hovering, inside) {
            (false, true) => Some(Action::PointerEnter),
            (true, false) => Some(Action::PointerLeave),
            _ => None,
        }
    }

    /// 鼠标左键点击的命中判断：按钮优先，其次指示点
    pub fn hit_test(&self, column: u16, row: u16) -> Option<Action> {
        let pos = Position::new(column, row);
        if self.areas.prev.is_some_and(|area| area.contains(pos)) {
            return Some(Action::PrevSlide);
        }
        if self.areas.next.is_some_and(|area| area.contains(pos)) {
            return Some(Action::NextSlide);
        }
        self.areas
            .dots
            .iter()
            .position(|area| area.contains(pos))
            .map(Action::JumpTo)
    }

    // ============ 定时器驱动 ============

    /// 事件循环的 poll 超时：取最近的定时器截止时间
    pub fn tick_timeout(&self, now: Instant) -> Duration {
        let mut timeout = IDLE_TIMEOUT;
        if let Some(remaining) = self.carousel.time_until_tick(now) {
            timeout = timeout.min(remaining);
        }
        if let Some(remaining) = self.message_timer.remaining(now) {
            timeout = timeout.min(remaining);
        }
        timeout
    }

    /// 处理定时器到期：自动轮播前进、消息条消隐
    pub fn on_tick(&mut self, now: Instant) {
        self.carousel.on_tick(&mut self.stage, now);
        if self.message_timer.expired(now) {
            self.message = None;
        }
    }
}
