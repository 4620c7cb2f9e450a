//! # hb-engine
//!
//! Heartbeat Engine 的 action/transition 子系统：一个协作式、
//! 帧同步的任务调度器，按名称解析创作数据里的 action，逐帧推进
//! 在途 action，并在 action 完成后恰好触发一次完成回调。
//!
//! ## 架构说明
//!
//! - `ActionManager` 是唯一的推进/退役权威，每帧由场景循环调用一次
//! - action/transition 通过显式注册表按名称解析，不做运行期反射
//! - 渲染、音频、编辑器界面均不在本 crate 范围内：对外只依赖
//!   `Renderable` 属性读写契约和逐帧事件批

pub mod action;
pub mod action_manager;
pub mod actions;
pub mod error;
pub mod input;
pub mod registry;
pub mod scene;
pub mod settings;
pub mod transitions;

pub use action::{Action, ActionData, ActionReturn};
pub use action_manager::{ActionManager, CompleteDelegate};
pub use error::{ActionError, EngineError, EngineResult, TransitionError};
pub use input::{FrameEvents, InputEvent};
pub use registry::{
    ActionContext, ActionFactory, ActionRegistry, TransitionRegistry, TransitionSpec,
};
pub use scene::{BasicRenderable, Renderable, Scene};
pub use settings::Settings;
pub use transitions::{FadeIn, FadeOut, Transition};
