//! 场景操作 action。

use serde_json::Value;

use crate::action::{Action, ActionReturn};
use crate::error::{ActionError, EngineResult};
use crate::input::FrameEvents;
use crate::registry::ActionContext;

/// 立即从场景移除目标对象
///
/// 参数块：
/// - `key`: 目标 renderable（必需，必须存在于场景中）
///
/// 移除发生在 `start()` 内，action 立刻报告完成；按完成语义，
/// 它在下一个 `Update` 扫描中被退役，回调也在那时触发。
/// `start()` 返回被移除对象的 key。
pub struct RemoveRenderable {
    ctx: ActionContext,
    complete: bool,
}

impl RemoveRenderable {
    /// 由注册工厂调用
    pub fn new(ctx: ActionContext) -> Self {
        Self {
            ctx,
            complete: false,
        }
    }
}

impl Action for RemoveRenderable {
    fn name(&self) -> &'static str {
        "remove_renderable"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        let key = self
            .ctx
            .data
            .get_str("key")
            .ok_or(ActionError::MissingParameter {
                action: self.name(),
                param: "key",
            })?;

        if self.ctx.scene.remove_renderable(key).is_none() {
            return Err(ActionError::MissingRenderable {
                key: key.to_string(),
            }
            .into());
        }

        self.complete = true;
        Ok(Some(Value::String(key.to_string())))
    }

    fn update(&mut self, _events: &FrameEvents) {}

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn cancel(&mut self) {
        self.complete = true;
    }
}
