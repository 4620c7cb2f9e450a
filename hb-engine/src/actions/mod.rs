//! # Actions 模块
//!
//! 内置 action 变体。
//!
//! ## 内置列表
//!
//! | 注册名 | 行为 |
//! |--------|------|
//! | `fade_in_renderable` | 按 transition 淡入目标对象 |
//! | `fade_out_renderable` | 淡出目标对象，完成后从场景移除 |
//! | `move_renderable` | 以恒定速度把对象移到 `dest` |
//! | `wait` | 等待 `duration` 秒，可选点击跳过 |
//! | `remove_renderable` | 立即从场景移除对象 |
//!
//! 所有 action 在 `start()` 中完成参数校验与场景查找，
//! 校验失败时返回错误且不会被注册到活跃集合。

mod fade;
mod motion;
mod scene_ops;
mod timing;

pub use fade::{FadeInRenderable, FadeOutRenderable};
pub use motion::MoveRenderable;
pub use scene_ops::RemoveRenderable;
pub use timing::Wait;

use std::rc::Rc;

use crate::action::ActionData;
use crate::error::{ActionError, EngineResult};
use crate::registry::ActionRegistry;
use crate::scene::{Renderable, Scene};

/// 注册所有内置 action
pub(crate) fn register_builtins(registry: &mut ActionRegistry) {
    registry.register(
        "fade_in_renderable",
        Box::new(|ctx| Box::new(FadeInRenderable::new(ctx))),
    );
    registry.register(
        "fade_out_renderable",
        Box::new(|ctx| Box::new(FadeOutRenderable::new(ctx))),
    );
    registry.register(
        "move_renderable",
        Box::new(|ctx| Box::new(MoveRenderable::new(ctx))),
    );
    registry.register("wait", Box::new(|ctx| Box::new(Wait::new(ctx))));
    registry.register(
        "remove_renderable",
        Box::new(|ctx| Box::new(RemoveRenderable::new(ctx))),
    );
}

/// 从参数块的 `key` 字段解析目标 renderable
fn require_renderable(
    scene: &Scene,
    data: &ActionData,
    action: &'static str,
) -> EngineResult<Rc<dyn Renderable>> {
    let key = data.get_str("key").ok_or(ActionError::MissingParameter {
        action,
        param: "key",
    })?;
    scene
        .get_renderable(key)
        .ok_or_else(|| ActionError::MissingRenderable { key: key.to_string() }.into())
}
