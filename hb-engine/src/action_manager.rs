//! # ActionManager 模块
//!
//! 场景内帧驱动 action 的唯一推进与退役权威。
//!
//! ## 核心语义
//!
//! - `perform_action`: 按名称解析并同步启动一个 action
//! - `update`: 每帧调用一次，两阶段扫描——先收集已完成的条目，
//!   其余逐个推进；扫描结束后统一退役并触发完成回调。
//!   action 在自己的 `update` 中置位完成标志时，要到**下一帧**
//!   才会被退役（完成回调因此恒定晚一帧，这是刻意保留的语义：
//!   回调的副作用永远不会落进正在进行的扫描里）
//! - 活跃集合只归管理器所有，action/transition 只能通过自己的
//!   完成标志表达意图

use std::rc::Rc;

use tracing::{debug, warn};

use crate::action::{Action, ActionData, ActionReturn};
use crate::error::{ActionError, EngineResult, TransitionError};
use crate::input::FrameEvents;
use crate::registry::{ActionContext, ActionFactory, ActionRegistry, TransitionRegistry, TransitionSpec};
use crate::scene::{Renderable, Scene};
use crate::transitions::Transition;

/// 完成回调
///
/// 在 action 被退役的那一帧、扫描结束后恰好触发一次。
/// 回调收到管理器自身，可以在其中继续 `perform_action`
/// 排入后续工作——新 action 不会被本帧扫描访问到。
pub type CompleteDelegate = Box<dyn FnOnce(&mut ActionManager)>;

/// 活跃集合中的一个条目
struct ActiveEntry {
    action: Box<dyn Action>,
    complete_delegate: Option<CompleteDelegate>,
    cancelled: bool,
}

/// Action 管理器
///
/// 持有一个场景的全部在途 action，每帧推进一次。
pub struct ActionManager {
    scene: Rc<Scene>,
    actions: ActionRegistry,
    transitions: Rc<TransitionRegistry>,
    active: Vec<ActiveEntry>,
}

impl ActionManager {
    /// 创建管理器，注册全部内置 action/transition
    pub fn new(scene: Rc<Scene>) -> Self {
        Self::with_registries(
            scene,
            ActionRegistry::with_builtins(),
            TransitionRegistry::with_builtins(),
        )
    }

    /// 使用自定义注册表创建管理器
    pub fn with_registries(
        scene: Rc<Scene>,
        actions: ActionRegistry,
        transitions: TransitionRegistry,
    ) -> Self {
        Self {
            scene,
            actions,
            transitions: Rc::new(transitions),
            active: Vec::new(),
        }
    }

    /// 所属场景
    pub fn scene(&self) -> &Rc<Scene> {
        &self.scene
    }

    /// action 注册表（用于追加自定义变体）
    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    /// 当前在途 action 数量
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// 是否有在途 action
    pub fn has_active_actions(&self) -> bool {
        !self.active.is_empty()
    }

    /// 按名称解析并启动一个 action
    ///
    /// 解析失败（名称未注册）或 `start()` 返回错误时，活跃集合
    /// 不发生任何变化——不会有半成品 action 留在场景里。
    /// 成功时 action 进入活跃集合，`start()` 的返回值原样交给调用方。
    ///
    /// # 错误
    /// - [`ActionError::UnknownAction`]: 名称未注册（同时输出 warn 日志）
    /// - `start()` 内的参数校验/场景查找错误原样传出
    pub fn perform_action(
        &mut self,
        action_data: ActionData,
        action_name: &str,
        complete_delegate: Option<CompleteDelegate>,
    ) -> EngineResult<ActionReturn> {
        let Some(factory) = self.get_action(action_name) else {
            return Err(ActionError::UnknownAction {
                name: action_name.to_string(),
            }
            .into());
        };

        let ctx = ActionContext {
            scene: Rc::clone(&self.scene),
            transitions: Rc::clone(&self.transitions),
            data: action_data,
        };
        let mut action = factory(ctx);

        let result = action.start()?;

        if self.scene.settings().debug.log_actions {
            debug!(action = action_name, "action 启动");
        }
        self.active.push(ActiveEntry {
            action,
            complete_delegate,
            cancelled: false,
        });

        Ok(result)
    }

    /// 推进一帧
    ///
    /// 单线程单趟扫描：已完成（或已取消）的条目记入待退役列表，
    /// 其余条目收到本帧事件批。扫描结束后统一退役，先触发完成
    /// 回调（每个至多一次，取消的不触发），再把条目移出活跃集合。
    pub fn update(&mut self, events: &FrameEvents) {
        if self.active.is_empty() {
            return;
        }

        let mut pending_completion: Vec<usize> = Vec::new();
        for index in 0..self.active.len() {
            let entry = &mut self.active[index];
            if entry.cancelled || entry.action.is_complete() {
                pending_completion.push(index);
            } else {
                entry.action.update(events);
            }
        }

        // 退役在扫描之后统一进行：从后往前移除保持下标有效
        let mut delegates: Vec<CompleteDelegate> = Vec::new();
        for &index in pending_completion.iter().rev() {
            let entry = self.active.remove(index);
            if self.scene.settings().debug.log_actions {
                debug!(action = entry.action.name(), cancelled = entry.cancelled, "action 退役");
            }
            if !entry.cancelled {
                if let Some(delegate) = entry.complete_delegate {
                    delegates.push(delegate);
                }
            }
        }

        // 按注册顺序触发；回调里新增的 action 只会追加到集合尾部，
        // 本帧扫描已经结束，不会再访问到它们
        for delegate in delegates.into_iter().rev() {
            delegate(self);
        }
    }

    /// 取消所有在途 action
    ///
    /// 同步置位完成标志但跳过各自的正常完成副作用；被取消的
    /// 条目在下一次 `update` 中退役，完成回调**不会**触发。
    pub fn cancel_all(&mut self) {
        for entry in &mut self.active {
            entry.action.cancel();
            entry.cancelled = true;
        }
    }

    /// 按名称查找 action 工厂
    ///
    /// 软失败路径：未注册时输出诊断日志并返回 `None`，
    /// 由调用方决定是否上报给用户。
    pub fn get_action(&self, action_name: &str) -> Option<&ActionFactory> {
        let found = self.actions.get(action_name);
        if found.is_none() {
            warn!(
                action = action_name,
                available = ?self.actions.names(),
                "action 名称无效，请检查已注册的 action 列表"
            );
        }
        found
    }

    /// 从数据块解析 transition 变体
    ///
    /// 硬失败路径：`type` 缺失或未注册都会返回错误，
    /// 绝不静默构造半成品。
    pub fn get_transition(
        &self,
        transition_data: &ActionData,
    ) -> Result<&TransitionSpec, TransitionError> {
        self.transitions.resolve(transition_data)
    }

    /// 解析并构造 transition 实例
    ///
    /// 构造出的 transition 交给调用方（通常是某个 action）持有
    /// 和驱动，管理器不追踪它，活跃集合也不会被触碰。
    pub fn create_transition(
        &self,
        transition_data: &ActionData,
        renderable: Rc<dyn Renderable>,
    ) -> Result<Box<dyn Transition>, TransitionError> {
        self.transitions.create(transition_data, renderable)
    }
}

impl std::fmt::Debug for ActionManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionManager")
            .field("active", &self.active.len())
            .field("actions", &self.actions.names())
            .finish()
    }
}
