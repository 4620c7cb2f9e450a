//! 淡入 / 淡出 action。
//!
//! 两者都把实际插值交给 transition：参数块可以内嵌一个
//! `transition` 块（`type`、`speed`），未给出时使用该 action
//! 的默认 transition 类型。

use serde_json::json;

use crate::action::{Action, ActionData, ActionReturn};
use crate::error::EngineResult;
use crate::input::FrameEvents;
use crate::registry::ActionContext;
use crate::transitions::Transition;

use super::require_renderable;

/// 淡入目标对象
///
/// 参数块：
/// - `key`: 目标 renderable（必需）
/// - `transition`: 可选，默认 `{ "type": "fade_in" }`
pub struct FadeInRenderable {
    ctx: ActionContext,
    transition: Option<Box<dyn Transition>>,
    complete: bool,
}

impl FadeInRenderable {
    /// 由注册工厂调用
    pub fn new(ctx: ActionContext) -> Self {
        Self {
            ctx,
            transition: None,
            complete: false,
        }
    }
}

impl Action for FadeInRenderable {
    fn name(&self) -> &'static str {
        "fade_in_renderable"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        let renderable = require_renderable(&self.ctx.scene, &self.ctx.data, self.name())?;

        let block = self
            .ctx
            .data
            .get_block("transition")
            .unwrap_or_else(|| ActionData::new(json!({ "type": "fade_in" })));
        self.transition = Some(self.ctx.transitions.create(&block, renderable)?);

        Ok(None)
    }

    fn update(&mut self, events: &FrameEvents) {
        let Some(transition) = &mut self.transition else {
            return;
        };
        if events.skip_requested() {
            transition.skip();
        }
        if !transition.update(events.dt) {
            self.complete = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn cancel(&mut self) {
        self.complete = true;
    }
}

/// 淡出目标对象，完成后从场景移除
///
/// 参数块：
/// - `key`: 目标 renderable（必需）
/// - `transition`: 可选，默认 `{ "type": "fade_out" }`
///
/// 取消时不移除对象（跳过正常完成副作用）。
pub struct FadeOutRenderable {
    ctx: ActionContext,
    key: String,
    transition: Option<Box<dyn Transition>>,
    complete: bool,
}

impl FadeOutRenderable {
    /// 由注册工厂调用
    pub fn new(ctx: ActionContext) -> Self {
        Self {
            ctx,
            key: String::new(),
            transition: None,
            complete: false,
        }
    }
}

impl Action for FadeOutRenderable {
    fn name(&self) -> &'static str {
        "fade_out_renderable"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        let renderable = require_renderable(&self.ctx.scene, &self.ctx.data, self.name())?;
        self.key = renderable.key().to_string();

        let block = self
            .ctx
            .data
            .get_block("transition")
            .unwrap_or_else(|| ActionData::new(json!({ "type": "fade_out" })));
        self.transition = Some(self.ctx.transitions.create(&block, renderable)?);

        Ok(None)
    }

    fn update(&mut self, events: &FrameEvents) {
        let Some(transition) = &mut self.transition else {
            return;
        };
        if events.skip_requested() {
            transition.skip();
        }
        if !transition.update(events.dt) {
            // 正常完成的副作用：对象离开场景
            self.ctx.scene.remove_renderable(&self.key);
            self.complete = true;
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn cancel(&mut self) {
        self.complete = true;
    }
}
