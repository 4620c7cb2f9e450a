//! 计时 action。

use crate::action::{Action, ActionReturn};
use crate::error::{ActionError, EngineResult};
use crate::input::FrameEvents;
use crate::registry::ActionContext;

/// 等待指定时长
///
/// 参数块：
/// - `duration`: 等待秒数（必需，不可为负）
/// - `skippable`: 为 true 时点击可提前结束，默认 false
pub struct Wait {
    ctx: ActionContext,
    duration: f32,
    skippable: bool,
    elapsed: f32,
    complete: bool,
}

impl Wait {
    /// 由注册工厂调用
    pub fn new(ctx: ActionContext) -> Self {
        Self {
            ctx,
            duration: 0.0,
            skippable: false,
            elapsed: 0.0,
            complete: false,
        }
    }
}

impl Action for Wait {
    fn name(&self) -> &'static str {
        "wait"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        let duration = self
            .ctx
            .data
            .get_f32("duration")
            .ok_or(ActionError::MissingParameter {
                action: self.name(),
                param: "duration",
            })?;
        if duration < 0.0 {
            return Err(ActionError::InvalidParameter {
                action: self.name(),
                param: "duration",
                message: "不可为负".to_string(),
            }
            .into());
        }
        self.duration = duration;
        self.skippable = self.ctx.data.get_bool("skippable").unwrap_or(false);

        Ok(None)
    }

    fn update(&mut self, events: &FrameEvents) {
        if self.complete {
            return;
        }
        if self.skippable && events.clicked() {
            self.complete = true;
            return;
        }
        self.elapsed += events.dt;
        if self.elapsed >= self.duration {
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
