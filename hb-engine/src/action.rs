//! # Action 模块
//!
//! Action 接口与参数块定义。
//!
//! ## 核心概念
//!
//! - `Action`: 跨越一帧或多帧执行的行为单元（移动、淡入、等待……）
//! - `ActionData`: 创作数据中的参数块，对管理器不透明，由具体 action 解释
//! - action 只通过自身的 complete 标志向管理器表达"我结束了"，
//!   从不直接操作活跃集合，也从不自己调用完成回调

use serde_json::Value;

use crate::error::EngineResult;
use crate::input::FrameEvents;

/// action 的 Start 返回值
///
/// action 可以选择向调用方同步返回数据（例如立即可用的句柄）。
pub type ActionReturn = Option<Value>;

/// Action 接口
///
/// 生命周期：由注册工厂构造 → `start()` 同步执行一次 →
/// 每帧 `update(events)` 推进 → `is_complete()` 返回 true 后，
/// 在**下一个** `Update` 扫描中被管理器退役。
///
/// ## 实现约定
///
/// - `start` 中完成所有参数校验与场景查找；校验失败返回错误，
///   此时 action 不会被注册
/// - `update` 不返回错误：能在运行期失败的状态都应在 `start` 中排除
/// - 完成标志只由 action 自己（或 `cancel`）置位
pub trait Action {
    /// action 的注册名（用于日志）
    fn name(&self) -> &'static str;

    /// 同步启动
    ///
    /// 在 `perform_action` 内被调用一次。返回值原样交给调用方。
    fn start(&mut self) -> EngineResult<ActionReturn>;

    /// 逐帧推进
    ///
    /// 收到帧驱动转发的事件批。action 在这里推进内部状态，
    /// 结束时置位自己的完成标志。
    fn update(&mut self, events: &FrameEvents);

    /// 是否已完成
    fn is_complete(&self) -> bool;

    /// 取消
    ///
    /// 同步置位完成标志，但不执行正常完成时的副作用。
    /// 被取消的 action 在下一帧被退役，且完成回调不会触发。
    fn cancel(&mut self);
}

/// 创作数据参数块
///
/// 包装一段 JSON 数据。管理器只转发不解释；具体 action/transition
/// 通过类型化访问器读取自己关心的键。
#[derive(Debug, Clone, PartialEq)]
pub struct ActionData(Value);

impl ActionData {
    /// 包装一个 JSON 值
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// 创建空参数块
    pub fn empty() -> Self {
        Self(Value::Object(serde_json::Map::new()))
    }

    /// 读取字符串字段
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(Value::as_str)
    }

    /// 读取数值字段
    pub fn get_f32(&self, key: &str) -> Option<f32> {
        self.0.get(key).and_then(Value::as_f64).map(|v| v as f32)
    }

    /// 读取布尔字段
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.0.get(key).and_then(Value::as_bool)
    }

    /// 读取嵌套参数块（如 action 内嵌的 transition 块）
    pub fn get_block(&self, key: &str) -> Option<ActionData> {
        self.0.get(key).map(|v| ActionData(v.clone()))
    }

    /// 读取二元数组字段（如 `dest: [x, y]`）
    pub fn get_pair(&self, key: &str) -> Option<(f32, f32)> {
        let arr = self.0.get(key)?.as_array()?;
        if arr.len() != 2 {
            return None;
        }
        let x = arr[0].as_f64()? as f32;
        let y = arr[1].as_f64()? as f32;
        Some((x, y))
    }

    /// 字段是否存在
    pub fn contains(&self, key: &str) -> bool {
        self.0.get(key).is_some()
    }

    /// 底层 JSON 值
    pub fn raw(&self) -> &Value {
        &self.0
    }
}

impl From<Value> for ActionData {
    fn from(value: Value) -> Self {
        Self(value)
    }
}
