//! 移动 action。

use std::rc::Rc;

use crate::action::{Action, ActionReturn};
use crate::error::{ActionError, EngineResult};
use crate::input::FrameEvents;
use crate::registry::{defaults, ActionContext};
use crate::scene::Renderable;

use super::require_renderable;

/// 以恒定速度把目标对象移动到 `dest`
///
/// 参数块：
/// - `key`: 目标 renderable（必需）
/// - `dest`: `[x, y]` 目标位置（必需）
/// - `speed`: 像素/秒，默认 [`defaults::MOVE_SPEED`]
///
/// 收到跳过请求时直接落到目标位置。
pub struct MoveRenderable {
    ctx: ActionContext,
    renderable: Option<Rc<dyn Renderable>>,
    dest: (f32, f32),
    speed: f32,
    complete: bool,
}

impl MoveRenderable {
    /// 由注册工厂调用
    pub fn new(ctx: ActionContext) -> Self {
        Self {
            ctx,
            renderable: None,
            dest: (0.0, 0.0),
            speed: defaults::MOVE_SPEED,
            complete: false,
        }
    }

    fn arrive(&mut self) {
        if let Some(renderable) = &self.renderable {
            renderable.set_property("position_x", self.dest.0);
            renderable.set_property("position_y", self.dest.1);
        }
        self.complete = true;
    }
}

impl Action for MoveRenderable {
    fn name(&self) -> &'static str {
        "move_renderable"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        let renderable = require_renderable(&self.ctx.scene, &self.ctx.data, self.name())?;

        self.dest = self
            .ctx
            .data
            .get_pair("dest")
            .ok_or(ActionError::MissingParameter {
                action: self.name(),
                param: "dest",
            })?;
        if let Some(speed) = self.ctx.data.get_f32("speed") {
            if speed <= 0.0 {
                return Err(ActionError::InvalidParameter {
                    action: self.name(),
                    param: "speed",
                    message: "必须大于 0".to_string(),
                }
                .into());
            }
            self.speed = speed;
        }
        self.renderable = Some(renderable);

        Ok(None)
    }

    fn update(&mut self, events: &FrameEvents) {
        if self.complete {
            return;
        }
        if events.skip_requested() {
            self.arrive();
            return;
        }
        let Some(renderable) = &self.renderable else {
            return;
        };

        let x = renderable.get_property("position_x").unwrap_or(0.0);
        let y = renderable.get_property("position_y").unwrap_or(0.0);
        let dx = self.dest.0 - x;
        let dy = self.dest.1 - y;
        let distance = (dx * dx + dy * dy).sqrt();
        let step = self.speed * events.dt;

        if step >= distance {
            self.arrive();
        } else {
            renderable.set_property("position_x", x + dx / distance * step);
            renderable.set_property("position_y", y + dy / distance * step);
        }
    }

    fn is_complete(&self) -> bool {
        self.complete
    }

    fn cancel(&mut self) {
        // 不落到目标位置，停在当前处
        self.complete = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ActionData;
    use crate::input::InputEvent;
    use crate::registry::TransitionRegistry;
    use crate::scene::{BasicRenderable, Scene};
    use crate::settings::Settings;
    use serde_json::json;

    fn test_ctx(data: serde_json::Value) -> (Rc<Scene>, ActionContext) {
        let scene = Scene::new(Rc::new(Settings::default()));
        let ctx = ActionContext {
            scene: scene.clone(),
            transitions: Rc::new(TransitionRegistry::with_builtins()),
            data: ActionData::new(data),
        };
        (scene, ctx)
    }

    #[test]
    fn test_move_reaches_destination() {
        let (scene, ctx) = test_ctx(json!({ "key": "sprite", "dest": [100.0, 0.0], "speed": 100.0 }));
        let sprite = Rc::new(BasicRenderable::new("sprite", 0.0, 0.0));
        scene.register_renderable(sprite.clone());

        let mut action = MoveRenderable::new(ctx);
        action.start().unwrap();

        action.update(&FrameEvents::tick(0.5));
        assert!(!action.is_complete());
        assert_eq!(sprite.position(), (50.0, 0.0));

        action.update(&FrameEvents::tick(0.6));
        assert!(action.is_complete());
        assert_eq!(sprite.position(), (100.0, 0.0));
    }

    #[test]
    fn test_move_requires_dest() {
        let (scene, ctx) = test_ctx(json!({ "key": "sprite" }));
        scene.register_renderable(Rc::new(BasicRenderable::new("sprite", 0.0, 0.0)));

        let mut action = MoveRenderable::new(ctx);
        assert!(action.start().is_err());
    }

    #[test]
    fn test_move_rejects_non_positive_speed() {
        let (scene, ctx) = test_ctx(json!({ "key": "sprite", "dest": [1.0, 1.0], "speed": 0.0 }));
        scene.register_renderable(Rc::new(BasicRenderable::new("sprite", 0.0, 0.0)));

        let mut action = MoveRenderable::new(ctx);
        assert!(action.start().is_err());
    }

    #[test]
    fn test_skip_lands_on_destination() {
        let (scene, ctx) = test_ctx(json!({ "key": "sprite", "dest": [100.0, 50.0], "speed": 10.0 }));
        let sprite = Rc::new(BasicRenderable::new("sprite", 0.0, 0.0));
        scene.register_renderable(sprite.clone());

        let mut action = MoveRenderable::new(ctx);
        action.start().unwrap();

        action.update(&FrameEvents::new(0.016, vec![InputEvent::Skip]));
        assert!(action.is_complete());
        assert_eq!(sprite.position(), (100.0, 50.0));
    }

    #[test]
    fn test_cancel_stops_in_place() {
        let (scene, ctx) = test_ctx(json!({ "key": "sprite", "dest": [100.0, 0.0], "speed": 100.0 }));
        let sprite = Rc::new(BasicRenderable::new("sprite", 0.0, 0.0));
        scene.register_renderable(sprite.clone());

        let mut action = MoveRenderable::new(ctx);
        action.start().unwrap();
        action.update(&FrameEvents::tick(0.25));

        action.cancel();
        assert!(action.is_complete());
        assert_eq!(sprite.position(), (25.0, 0.0));
    }
}
