//! Action 枚举定义 (Intent)
//!
//! 用户交互转化为明确的语义化 Action

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,

    // 手动导航
    NextSlide,
    PrevSlide,
    JumpTo(usize), // 数字键 / 点击指示点

    // 悬停暂停
    PointerEnter, // 鼠标进入轮播区域
    PointerLeave, // 鼠标离开轮播区域
}
