//! # Transitions 模块
//!
//! 过渡效果：对单个 renderable 的属性做逐帧插值。
//!
//! ## 设计说明
//!
//! - transition 由 `ActionManager::create_transition` 按名称构造，
//!   但**不由管理器追踪**：持有它的 action 负责驱动和完成判定
//! - `speed` 单位为属性值/秒（alpha 全程 1.0，速度 2.0 即半秒完成）
//! - `skip()` 直接跳到最终状态，供取消/快进路径使用
//!
//! 内置变体与默认速度见 [`crate::registry`]。

use std::rc::Rc;

use tracing::warn;

use crate::scene::Renderable;

/// Transition 接口
///
/// 实现方自行保存帧间进度（当前值即进度），每帧由持有它的
/// action 调用 `update(dt)` 推进。
pub trait Transition {
    /// 推进插值
    ///
    /// # 返回
    /// - `true`: 仍在进行中
    /// - `false`: 已到达最终状态
    fn update(&mut self, dt: f32) -> bool;

    /// 是否已完成
    fn is_complete(&self) -> bool;

    /// 跳到最终状态并标记完成
    fn skip(&mut self);
}

/// 淡入：alpha 以 `speed`/秒 线性升至 1.0
pub struct FadeIn {
    renderable: Rc<dyn Renderable>,
    speed: f32,
    complete: bool,
}

impl FadeIn {
    /// 创建淡入过渡
    pub fn new(renderable: Rc<dyn Renderable>, speed: f32) -> Self {
        Self {
            renderable,
            speed,
            complete: false,
        }
    }

    /// 当前速度
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Transition for FadeIn {
    fn update(&mut self, dt: f32) -> bool {
        if self.complete {
            return false;
        }
        let Some(alpha) = self.renderable.get_property("alpha") else {
            warn!(key = %self.renderable.key(), "renderable 没有 alpha 属性，淡入直接完成");
            self.complete = true;
            return false;
        };

        let next = (alpha + self.speed * dt).min(1.0);
        self.renderable.set_property("alpha", next);
        if next >= 1.0 {
            self.complete = true;
        }
        !self.complete
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn skip(&mut self) {
        self.renderable.set_property("alpha", 1.0);
        self.complete = true;
    }
}

/// 淡出：alpha 以 `speed`/秒 线性降至 0.0
pub struct FadeOut {
    renderable: Rc<dyn Renderable>,
    speed: f32,
    complete: bool,
}

impl FadeOut {
    /// 创建淡出过渡
    pub fn new(renderable: Rc<dyn Renderable>, speed: f32) -> Self {
        Self {
            renderable,
            speed,
            complete: false,
        }
    }

    /// 当前速度
    pub fn speed(&self) -> f32 {
        self.speed
    }
}

impl Transition for FadeOut {
    fn update(&mut self, dt: f32) -> bool {
        if self.complete {
            return false;
        }
        let Some(alpha) = self.renderable.get_property("alpha") else {
            warn!(key = %self.renderable.key(), "renderable 没有 alpha 属性，淡出直接完成");
            self.complete = true;
            return false;
        };

        let next = (alpha - self.speed * dt).max(0.0);
        self.renderable.set_property("alpha", next);
        if next <= 0.0 {
            self.complete = true;
        }
        !self.complete
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn skip(&mut self) {
        self.renderable.set_property("alpha", 0.0);
        self.complete = true;
    }
}
