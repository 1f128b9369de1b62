//! 定时器工具
//!
//! 事件循环是单线程协作式的，这里不持有真正的系统定时器，
//! 只记录截止时间，由主循环在 poll 超时后查询是否到期。

use std::time::{Duration, Instant};

/// 固定周期的重复定时器
///
/// 同一时刻最多持有一个截止时间，启动/取消/重置都作用于它，
/// 因此不可能出现两个并存的轮播计时。
#[derive(Debug, Clone)]
pub struct Interval {
    period: Duration,
    deadline: Option<Instant>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            deadline: None,
        }
    }

    /// 启动（或重新武装）定时器
    pub fn start(&mut self, now: Instant) {
        self.deadline = Some(now + self.period);
    }

    /// 取消定时器，重复调用无副作用
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// 丢弃已走过的部分周期，从现在起重新计满一个周期
    pub fn reset(&mut self, now: Instant) {
        self.cancel();
        self.start(now);
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// 到期则触发并按固定周期重新武装（不做漂移补偿）
    pub fn fire(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.period);
                true
            }
            _ => false,
        }
    }

    /// 距下次触发的剩余时间，未武装时为 None
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}

/// 防抖定时器：每次 poke 都丢弃旧的截止时间重新计时，
/// 静默期内没有新事件才会到期
#[derive(Debug, Clone)]
pub struct Debouncer {
    quiet: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            deadline: None,
        }
    }

    /// 记录一次新事件，重新开始计时
    pub fn poke(&mut self, now: Instant) {
        self.deadline = Some(now + self.quiet);
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// 静默期已过则消耗掉截止时间并返回 true
    pub fn expired(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// 距到期的剩余时间，未计时则为 None
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }
}
