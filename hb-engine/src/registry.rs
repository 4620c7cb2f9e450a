//! # Registry 模块
//!
//! Action / Transition 的显式注册表。
//! 这是所有 action、transition 名称与默认参数的**唯一来源**。
//!
//! ## 设计说明
//!
//! 名称到实现的解析不做任何运行期反射：每个变体在启动时注册
//! 一个工厂，注册表因此是静态可枚举的，新增变体只需追加一次
//! `register` 调用。

use std::collections::HashMap;
use std::rc::Rc;

use crate::action::{Action, ActionData};
use crate::error::TransitionError;
use crate::scene::{Renderable, Scene};
use crate::transitions::{FadeIn, FadeOut, Transition};

/// 各 transition 的默认速度（属性值/秒）
///
/// 这些常量是速度默认值的**唯一来源**，任何需要默认速度的地方
/// 都应使用这些常量，而非硬编码数字。
pub mod defaults {
    /// 淡入默认速度（alpha/秒，0.5 秒完成全程）
    pub const FADE_IN_SPEED: f32 = 2.0;
    /// 淡出默认速度（alpha/秒）
    pub const FADE_OUT_SPEED: f32 = 2.0;
    /// 移动默认速度（像素/秒）
    pub const MOVE_SPEED: f32 = 600.0;
}

/// action 构造上下文
///
/// 工厂构造 action 时收到的全部协作者：场景、transition 注册表
/// （供包装 transition 的 action 使用）以及创作数据参数块。
pub struct ActionContext {
    /// 所属场景
    pub scene: Rc<Scene>,
    /// transition 注册表
    pub transitions: Rc<TransitionRegistry>,
    /// 创作数据参数块
    pub data: ActionData,
}

/// action 工厂
///
/// 构造本身不会失败：参数校验与场景查找都推迟到 `start()`。
pub type ActionFactory = Box<dyn Fn(ActionContext) -> Box<dyn Action>>;

/// transition 工厂，参数为目标 renderable 与已解析的速度
pub type TransitionFactory = Box<dyn Fn(Rc<dyn Renderable>, f32) -> Box<dyn Transition>>;

/// 一个已注册的 transition 变体
pub struct TransitionSpec {
    factory: TransitionFactory,
    /// 数据块未给出 `speed` 时使用的默认速度
    pub default_speed: f32,
}

impl TransitionSpec {
    /// 创建 transition 变体描述
    pub fn new(factory: TransitionFactory, default_speed: f32) -> Self {
        Self {
            factory,
            default_speed,
        }
    }

    /// 按给定速度构造实例
    pub fn construct(&self, renderable: Rc<dyn Renderable>, speed: f32) -> Box<dyn Transition> {
        (self.factory)(renderable, speed)
    }
}

/// Action 注册表
pub struct ActionRegistry {
    entries: HashMap<String, ActionFactory>,
}

impl ActionRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 创建并注册所有内置 action
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        crate::actions::register_builtins(&mut registry);
        registry
    }

    /// 注册一个 action 变体
    ///
    /// 同名注册会覆盖旧工厂。
    pub fn register(&mut self, name: impl Into<String>, factory: ActionFactory) {
        self.entries.insert(name.into(), factory);
    }

    /// 按名称查找工厂
    pub fn get(&self, name: &str) -> Option<&ActionFactory> {
        self.entries.get(name)
    }

    /// 是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 已注册的名称列表（排序后，用于诊断输出）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Transition 注册表
pub struct TransitionRegistry {
    entries: HashMap<String, TransitionSpec>,
}

impl TransitionRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// 创建并注册所有内置 transition
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(
            "fade_in",
            TransitionSpec::new(
                Box::new(|renderable, speed| Box::new(FadeIn::new(renderable, speed))),
                defaults::FADE_IN_SPEED,
            ),
        );
        registry.register(
            "fade_out",
            TransitionSpec::new(
                Box::new(|renderable, speed| Box::new(FadeOut::new(renderable, speed))),
                defaults::FADE_OUT_SPEED,
            ),
        );
        registry
    }

    /// 注册一个 transition 变体
    pub fn register(&mut self, name: impl Into<String>, spec: TransitionSpec) {
        self.entries.insert(name.into(), spec);
    }

    /// 从数据块解析 transition 变体
    ///
    /// 与 action 查找不同，这里的失败是硬错误：
    ///
    /// # 错误
    /// - [`TransitionError::MissingType`]: 块中没有 `type` 键
    /// - [`TransitionError::UnknownType`]: `type` 未注册
    pub fn resolve(&self, transition_data: &ActionData) -> Result<&TransitionSpec, TransitionError> {
        let Some(name) = transition_data.get_str("type") else {
            return Err(TransitionError::MissingType);
        };
        self.entries
            .get(name)
            .ok_or_else(|| TransitionError::UnknownType {
                name: name.to_string(),
            })
    }

    /// 解析并构造 transition 实例
    ///
    /// `speed` 取数据块中的值，未给出时退回该变体的默认速度。
    /// 构造只产生 transition 本身，不会触碰任何活跃 action 集合。
    pub fn create(
        &self,
        transition_data: &ActionData,
        renderable: Rc<dyn Renderable>,
    ) -> Result<Box<dyn Transition>, TransitionError> {
        let spec = self.resolve(transition_data)?;

        let speed = if transition_data.contains("speed") {
            transition_data
                .get_f32("speed")
                .ok_or_else(|| TransitionError::InvalidSpeed {
                    message: "必须是数值".to_string(),
                })?
        } else {
            spec.default_speed
        };

        Ok(spec.construct(renderable, speed))
    }

    /// 是否已注册
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// 已注册的名称列表（排序后，用于诊断输出）
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for TransitionRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}
