//! # Action 调度集成测试
//!
//! 测试 perform_action → update → 完成回调的完整链路。
//! 这些测试不依赖真实的渲染设备，只走属性读写契约。

use std::cell::RefCell;
use std::rc::Rc;

use serde_json::json;

use hb_engine::{
    Action, ActionData, ActionManager, ActionReturn, BasicRenderable, EngineResult, FrameEvents,
    Scene, Settings,
};

fn test_manager() -> ActionManager {
    ActionManager::new(Scene::new(Rc::new(Settings::default())))
}

/// 测试用 action：经过指定帧数后完成
struct Countdown {
    remaining: u32,
    complete: bool,
}

impl Action for Countdown {
    fn name(&self) -> &'static str {
        "countdown"
    }

    fn start(&mut self) -> EngineResult<ActionReturn> {
        Ok(None)
    }

    fn update(&mut self, _events: &FrameEvents) {
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
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

fn register_countdown(manager: &mut ActionManager, name: &str, frames: u32) {
    manager.actions_mut().register(
        name,
        Box::new(move |_ctx| {
            Box::new(Countdown {
                remaining: frames,
                complete: false,
            })
        }),
    );
}

/// 两个完成节奏不同的 action 各自带回调：快的先退役、慢的后退役，
/// 每个回调恰好触发一次
#[test]
fn test_two_actions_with_distinct_delegates() {
    let mut manager = test_manager();
    register_countdown(&mut manager, "a", 1);
    register_countdown(&mut manager, "b", 3);

    let a_fired = Rc::new(RefCell::new(0u32));
    let b_fired = Rc::new(RefCell::new(0u32));

    let a = a_fired.clone();
    manager
        .perform_action(
            ActionData::empty(),
            "a",
            Some(Box::new(move |_| *a.borrow_mut() += 1)),
        )
        .unwrap();
    let b = b_fired.clone();
    manager
        .perform_action(
            ActionData::empty(),
            "b",
            Some(Box::new(move |_| *b.borrow_mut() += 1)),
        )
        .unwrap();
    assert_eq!(manager.active_count(), 2);

    // A 在第 1 帧完成、第 2 帧退役；B 要到第 3 帧才完成
    manager.update(&FrameEvents::tick(0.016));
    manager.update(&FrameEvents::tick(0.016));
    assert_eq!(*a_fired.borrow(), 1);
    assert_eq!(*b_fired.borrow(), 0);
    assert_eq!(manager.active_count(), 1);

    manager.update(&FrameEvents::tick(0.016));
    manager.update(&FrameEvents::tick(0.016));
    assert_eq!(*a_fired.borrow(), 1);
    assert_eq!(*b_fired.borrow(), 1);
    assert_eq!(manager.active_count(), 0);
}

/// 回调串联：淡出完成后由回调排入移除后续对象的 action
#[test]
fn test_delegate_chains_builtin_actions() {
    let mut manager = test_manager();
    manager
        .scene()
        .register_renderable(Rc::new(BasicRenderable::new("portrait", 0.0, 0.0)));
    manager
        .scene()
        .register_renderable(Rc::new(BasicRenderable::new("caption", 0.0, 0.0)));

    manager
        .perform_action(
            ActionData::new(json!({
                "key": "portrait",
                "transition": { "type": "fade_out", "speed": 4.0 },
            })),
            "fade_out_renderable",
            Some(Box::new(|manager| {
                manager
                    .perform_action(
                        ActionData::new(json!({ "key": "caption" })),
                        "remove_renderable",
                        None,
                    )
                    .unwrap();
            })),
        )
        .unwrap();

    // speed 4.0：一帧 0.3 秒走完淡出并移除 portrait
    manager.update(&FrameEvents::tick(0.3));
    assert!(manager.scene().get_renderable("portrait").is_none());
    assert!(manager.scene().get_renderable("caption").is_some());

    // 下一帧退役淡出 action，回调立即移除 caption
    manager.update(&FrameEvents::tick(0.016));
    assert!(manager.scene().get_renderable("caption").is_none());

    // remove_renderable 在 start 中即完成，再过一帧集合清空
    manager.update(&FrameEvents::tick(0.016));
    assert_eq!(manager.active_count(), 0);
}

/// 同一对象上并发 action：淡入与移动互不干扰，各自完成
#[test]
fn test_concurrent_actions_on_one_renderable() {
    let mut manager = test_manager();
    let sprite = Rc::new(BasicRenderable::new_hidden("sprite", 0.0, 0.0));
    manager.scene().register_renderable(sprite.clone());

    manager
        .perform_action(
            ActionData::new(json!({ "key": "sprite", "transition": { "type": "fade_in", "speed": 2.0 } })),
            "fade_in_renderable",
            None,
        )
        .unwrap();
    manager
        .perform_action(
            ActionData::new(json!({ "key": "sprite", "dest": [100.0, 0.0], "speed": 200.0 })),
            "move_renderable",
            None,
        )
        .unwrap();
    assert_eq!(manager.active_count(), 2);

    // 0.25 秒：alpha 0.5，位置 50
    manager.update(&FrameEvents::tick(0.25));
    assert!((sprite.alpha() - 0.5).abs() < f32::EPSILON);
    assert_eq!(sprite.position(), (50.0, 0.0));

    // 再 0.25 秒：两者都到达终点
    manager.update(&FrameEvents::tick(0.25));
    assert_eq!(sprite.alpha(), 1.0);
    assert_eq!(sprite.position(), (100.0, 0.0));

    // 下一帧两个 action 一起退役
    manager.update(&FrameEvents::tick(0.016));
    assert_eq!(manager.active_count(), 0);
}

/// perform_action 的返回值原样来自 action 的 start
#[test]
fn test_start_return_value_passthrough() {
    let mut manager = test_manager();
    manager
        .scene()
        .register_renderable(Rc::new(BasicRenderable::new("sprite", 0.0, 0.0)));

    let result = manager
        .perform_action(
            ActionData::new(json!({ "key": "sprite" })),
            "remove_renderable",
            None,
        )
        .unwrap();
    assert_eq!(result, Some(serde_json::Value::String("sprite".to_string())));
}

/// 取消在途 action：下一帧退役，正常完成副作用与回调都被跳过
#[test]
fn test_cancel_all_mid_flight() {
    let mut manager = test_manager();
    manager
        .scene()
        .register_renderable(Rc::new(BasicRenderable::new("sprite", 0.0, 0.0)));

    let fired = Rc::new(RefCell::new(0u32));
    let f = fired.clone();
    manager
        .perform_action(
            ActionData::new(json!({ "key": "sprite" })),
            "fade_out_renderable",
            Some(Box::new(move |_| *f.borrow_mut() += 1)),
        )
        .unwrap();

    manager.update(&FrameEvents::tick(0.1));
    manager.cancel_all();
    manager.update(&FrameEvents::tick(0.1));

    assert_eq!(manager.active_count(), 0);
    assert_eq!(*fired.borrow(), 0);
    // 淡出被取消，对象没有被移除
    assert!(manager.scene().get_renderable("sprite").is_some());
}
