//! # Error 模块
//!
//! 定义 hb-engine 中使用的错误类型。

use thiserror::Error;

/// Action 相关错误
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ActionError {
    /// 未注册的 action 名称
    #[error("未知的 action '{name}'")]
    UnknownAction { name: String },

    /// 场景中找不到目标 renderable
    #[error("场景中不存在 renderable '{key}'")]
    MissingRenderable { key: String },

    /// 缺少必需参数
    #[error("action '{action}' 缺少参数 '{param}'")]
    MissingParameter {
        action: &'static str,
        param: &'static str,
    },

    /// 参数值无效
    #[error("action '{action}' 的参数 '{param}' 无效 - {message}")]
    InvalidParameter {
        action: &'static str,
        param: &'static str,
        message: String,
    },
}

/// Transition 相关错误
///
/// 与 action 查找不同，transition 解析失败是**硬错误**：
/// `type` 缺失属于配置错误，`type` 未注册属于查找错误，
/// 两者都立即中止构造，不会产生半成品的 transition。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransitionError {
    /// transition 块缺少 `type` 键（配置错误）
    #[error("transition 块未指定 type - 无法解析过渡效果")]
    MissingType,

    /// `type` 对应的 transition 未注册（查找错误）
    #[error("未知的 transition 类型 '{name}'")]
    UnknownType { name: String },

    /// `speed` 字段存在但不是数值
    #[error("transition 的 speed 字段无效 - {message}")]
    InvalidSpeed { message: String },
}

/// hb-engine 统一错误类型
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Action 错误
    #[error("action 错误: {0}")]
    Action(#[from] ActionError),

    /// Transition 错误
    #[error("transition 错误: {0}")]
    Transition(#[from] TransitionError),
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
