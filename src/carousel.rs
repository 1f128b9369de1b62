//! 走马灯核心状态机
//!
//! 控制器不直接操作终端，只依赖 [`SlideView`] 能力集合
//! （读取张数、给幻灯片/指示点打标签），任何实现该 trait 的
//! 视图层都能接入，测试里用假视图即可验证全部状态转移。

use std::time::{Duration, Instant};

use crate::timer::Interval;

/// 视图能力集合
///
/// 指示点与幻灯片按下标一一对应
pub trait SlideView {
    fn len(&self) -> usize;
    fn set_slide_active(&mut self, index: usize, active: bool);
    fn set_slide_exited(&mut self, index: usize, exited: bool);
    fn set_indicator_active(&mut self, index: usize, active: bool);
}

/// 走马灯控制器
///
/// current 始终落在 `[0, count)`；count == 0 时整个控制器惰性，
/// 所有操作都是空操作。轮播定时器由控制器独占持有。
pub struct Carousel {
    current: usize,
    count: usize,
    timer: Interval,
}

impl Carousel {
    /// 挂载到视图：索引归零、应用初始标签，多于一张时启动自动轮播
    pub fn mount<V: SlideView>(view: &mut V, period: Duration, now: Instant) -> Self {
        let count = view.len();
        let mut carousel = Self {
            current: 0,
            count,
            timer: Interval::new(period),
        };
        if count > 0 {
            carousel.render(view);
            if count > 1 {
                carousel.timer.start(now);
            }
        }
        carousel
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// 自动轮播是否在运行
    pub fn is_rotating(&self) -> bool {
        self.timer.is_armed()
    }

    /// 把 current 投影为视图标签：
    /// i == current 的幻灯片与指示点亮起，i < current 的标记为已退场
    /// （方向性过渡样式用）。幂等，可重复调用。
    pub fn render<V: SlideView>(&self, view: &mut V) {
        if self.count == 0 {
            return;
        }
        for i in 0..self.count {
            if i == self.current {
                view.set_slide_active(i, true);
                view.set_slide_exited(i, false);
            } else {
                view.set_slide_active(i, false);
                view.set_slide_exited(i, i < self.current);
            }
            view.set_indicator_active(i, i == self.current);
        }
    }

    /// 跳到任意索引，负数和越界都按欧几里得取模回绕，
    /// 随后丢弃部分周期、重置轮播计时
    pub fn go_to<V: SlideView>(&mut self, view: &mut V, index: i64, now: Instant) {
        if self.count == 0 {
            return;
        }
        self.current = index.rem_euclid(self.count as i64) as usize;
        self.render(view);
        if self.count > 1 {
            self.timer.reset(now);
        }
    }

    pub fn next<V: SlideView>(&mut self, view: &mut V, now: Instant) {
        self.go_to(view, self.current as i64 + 1, now);
    }

    pub fn previous<V: SlideView>(&mut self, view: &mut V, now: Instant) {
        self.go_to(view, self.current as i64 - 1, now);
    }

    /// 启动自动轮播，单张或空集不启动
    pub fn start_auto_rotate(&mut self, now: Instant) {
        if self.count > 1 {
            self.timer.start(now);
        }
    }

    /// 停止自动轮播，幂等
    pub fn stop_auto_rotate(&mut self) {
        self.timer.cancel();
    }

    /// 指针进入轮播区域：暂停
    pub fn pointer_enter(&mut self) {
        self.stop_auto_rotate();
    }

    /// 指针离开轮播区域：恢复
    pub fn pointer_leave(&mut self, now: Instant) {
        self.start_auto_rotate(now);
    }

    /// 定时器到期则前进一张并重新渲染，返回是否发生了切换
    pub fn on_tick<V: SlideView>(&mut self, view: &mut V, now: Instant) -> bool {
        if !self.timer.fire(now) {
            return false;
        }
        // 定时器只会在 count > 1 时武装，取模安全
        self.current = (self.current + 1) % self.count;
        self.render(view);
        true
    }

    /// 距下次自动切换的剩余时间，供事件循环计算 poll 超时
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_secs(5);

    /// 记录标签赋值的假视图
    struct FakeView {
        active: Vec<bool>,
        exited: Vec<bool>,
        dots: Vec<bool>,
    }

    impl FakeView {
        fn new(count: usize) -> Self {
            Self {
                active: vec![false; count],
                exited: vec![false; count],
                dots: vec![false; count],
            }
        }

        /// 校验"恰好一个亮起"不变式，返回亮起的下标
        fn assert_single_active(&self) -> usize {
            let slide_on: Vec<usize> = (0..self.active.len()).filter(|&i| self.active[i]).collect();
            let dot_on: Vec<usize> = (0..self.dots.len()).filter(|&i| self.dots[i]).collect();
            assert_eq!(slide_on.len(), 1, "应恰好一张幻灯片亮起");
            assert_eq!(dot_on, slide_on, "指示点应与幻灯片同步");
            slide_on[0]
        }
    }

    impl SlideView for FakeView {
        fn len(&self) -> usize {
            self.active.len()
        }
        fn set_slide_active(&mut self, index: usize, active: bool) {
            self.active[index] = active;
        }
        fn set_slide_exited(&mut self, index: usize, exited: bool) {
            self.exited[index] = exited;
        }
        fn set_indicator_active(&mut self, index: usize, active: bool) {
            self.dots[index] = active;
        }
    }

    fn mounted(count: usize) -> (FakeView, Carousel, Instant) {
        let now = Instant::now();
        let mut view = FakeView::new(count);
        let carousel = Carousel::mount(&mut view, PERIOD, now);
        (view, carousel, now)
    }

    #[test]
    fn test_mount_activates_first_slide() {
        let (view, carousel, _) = mounted(3);
        assert_eq!(carousel.current(), 0);
        assert_eq!(view.assert_single_active(), 0);
        assert!(carousel.is_rotating());
    }

    #[test]
    fn test_single_active_invariant() {
        let (mut view, mut carousel, now) = mounted(4);
        carousel.next(&mut view, now);
        assert_eq!(view.assert_single_active(), 1);
        carousel.go_to(&mut view, 3, now);
        assert_eq!(view.assert_single_active(), 3);
        carousel.previous(&mut view, now);
        assert_eq!(view.assert_single_active(), 2);
    }

    #[test]
    fn test_wraparound() {
        let (mut view, mut carousel, now) = mounted(3);

        // 从 0 后退回绕到末尾
        carousel.go_to(&mut view, -1, now);
        assert_eq!(carousel.current(), 2);

        // 从末尾前进回绕到 0
        carousel.go_to(&mut view, 3, now);
        assert_eq!(carousel.current(), 0);

        // 任意越界整数都安全
        carousel.go_to(&mut view, -7, now);
        assert_eq!(carousel.current(), 2);
        carousel.go_to(&mut view, 14, now);
        assert_eq!(carousel.current(), 2);
    }

    #[test]
    fn test_exited_marks_slides_before_current() {
        let (mut view, mut carousel, now) = mounted(3);
        carousel.go_to(&mut view, 2, now);
        assert_eq!(view.exited, vec![true, true, false]);

        // 回到中间，后面的退场标记被清掉
        carousel.go_to(&mut view, 1, now);
        assert_eq!(view.exited, vec![true, false, false]);
    }

    #[test]
    fn test_render_idempotent() {
        let (mut view, mut carousel, now) = mounted(3);
        carousel.go_to(&mut view, 1, now);
        let (active, exited, dots) = (view.active.clone(), view.exited.clone(), view.dots.clone());

        carousel.render(&mut view);
        carousel.render(&mut view);
        assert_eq!(view.active, active);
        assert_eq!(view.exited, exited);
        assert_eq!(view.dots, dots);
    }

    #[test]
    fn test_timer_reset_on_interaction() {
        let (mut view, mut carousel, now) = mounted(3);

        // 走过 4 秒后手动切换，旧的部分周期作废
        let pressed = now + Duration::from_secs(4);
        carousel.next(&mut view, pressed);
        assert_eq!(carousel.current(), 1);

        // 原定 5 秒处不再触发，要等满一个全新周期
        assert!(!carousel.on_tick(&mut view, now + Duration::from_secs(5)));
        assert!(!carousel.on_tick(&mut view, pressed + Duration::from_millis(4_999)));
        assert!(carousel.on_tick(&mut view, pressed + PERIOD));
        assert_eq!(view.assert_single_active(), 2);
    }

    #[test]
    fn test_pause_on_hover() {
        let (mut view, mut carousel, now) = mounted(3);

        carousel.pointer_enter();
        assert!(!carousel.is_rotating());

        // 悬停期间无论过多久都不切换
        assert!(!carousel.on_tick(&mut view, now + Duration::from_secs(600)));
        assert_eq!(carousel.current(), 0);

        // 离开后从当前位置恢复轮播
        let left = now + Duration::from_secs(600);
        carousel.pointer_leave(left);
        assert!(carousel.is_rotating());
        assert!(!carousel.on_tick(&mut view, left + Duration::from_secs(4)));
        assert!(carousel.on_tick(&mut view, left + PERIOD));
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_stop_auto_rotate_idempotent() {
        let (_, mut carousel, _) = mounted(3);
        carousel.stop_auto_rotate();
        carousel.stop_auto_rotate();
        assert!(!carousel.is_rotating());
    }

    #[test]
    fn test_empty_deck_is_inert() {
        let (mut view, mut carousel, now) = mounted(0);
        assert!(!carousel.is_rotating());
        assert!(view.active.is_empty());

        // 所有操作都是受保护的空操作
        carousel.next(&mut view, now);
        carousel.previous(&mut view, now);
        carousel.go_to(&mut view, 7, now);
        carousel.render(&mut view);
        assert!(!carousel.on_tick(&mut view, now + Duration::from_secs(60)));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_single_slide_never_rotates() {
        let (mut view, mut carousel, now) = mounted(1);
        assert!(!carousel.is_rotating());
        assert_eq!(view.assert_single_active(), 0);

        carousel.next(&mut view, now);
        assert_eq!(carousel.current(), 0);
        assert!(!carousel.is_rotating());

        // 离开悬停也不会把单张集合转起来
        carousel.pointer_leave(now);
        assert!(!carousel.is_rotating());
        assert_eq!(carousel.time_until_tick(now), None);
    }
}
