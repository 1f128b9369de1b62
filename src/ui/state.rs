//! App 状态定义 (Model)
//!
//! 包含应用状态结构体和终端侧的视图标签载体

use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::carousel::{Carousel, SlideView};
use crate::models::{Deck, Testimonial};
use crate::timer::Debouncer;

/// 消息条自动消隐的静默期
const MESSAGE_QUIET: Duration = Duration::from_secs(3);

/// 幻灯片上的视觉标签
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SlideTags {
    pub active: bool,
    pub exited: bool, // 已退场（位于当前张之前）
}

/// 终端视图的标签载体：控制器写入，渲染层读取
#[derive(Debug, Clone)]
pub struct Stage {
    pub slides: Vec<SlideTags>,
    pub dots: Vec<bool>,
}

impl Stage {
    pub fn new(count: usize) -> Self {
        Self {
            slides: vec![SlideTags::default(); count],
            dots: vec![false; count],
        }
    }
}

impl SlideView for Stage {
    fn len(&self) -> usize {
        self.slides.len()
    }

    fn set_slide_active(&mut self, index: usize, active: bool) {
        if let Some(tags) = self.slides.get_mut(index) {
            tags.active = active;
        }
    }

    fn set_slide_exited(&mut self, index: usize, exited: bool) {
        if let Some(tags) = self.slides.get_mut(index) {
            tags.exited = exited;
        }
    }

    fn set_indicator_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get_mut(index) {
            *dot = active;
        }
    }
}

/// 可点击区域，渲染时回填，鼠标事件用它做命中判断
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub wrapper: Option<Rect>, // 整个轮播区域，悬停判定用
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub dots: Vec<Rect>,
}

/// 应用状态
pub struct App {
    pub deck: Deck,
    pub carousel: Carousel,
    pub stage: Stage,
    pub hovering: bool,
    pub areas: HitAreas,
    pub message: Option<String>,
    pub message_timer: Debouncer,
}

impl App {
    /// 创建新的应用实例
    pub fn new(deck: Deck, now: Instant) -> Self {
        let mut stage = Stage::new(deck.len());
        let carousel = Carousel::mount(&mut stage, deck.interval(), now);
        Self {
            deck,
            carousel,
            stage,
            hovering: false,
            areas: HitAreas::default(),
            message: None,
            message_timer: Debouncer::new(MESSAGE_QUIET),
        }
    }

    /// 当前展示的评价
    pub fn current_slide(&self) -> Option<&Testimonial> {
        self.deck.get(self.carousel.current())
    }

    /// 设置消息条内容并重新计时自动消隐
    pub fn set_message(&mut self, text: impl Into<String>, now: Instant) {
        self.message = Some(text.into());
        self.message_timer.poke(now);
    }
}
