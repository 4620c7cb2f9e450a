//! # Input 模块
//!
//! 定义帧驱动向 action 子系统传递的逐帧事件批。
//!
//! ## 设计说明
//!
//! - `FrameEvents` 由场景循环每帧构造一次，原样转发给所有活跃 action
//! - ActionManager 不解释其中的内容，只负责转发
//! - action 不直接处理鼠标/键盘事件，只处理语义化的输入

use serde::{Deserialize, Serialize};

/// 语义化输入事件
///
/// 场景循环采集用户操作后翻译为语义事件，action 据此决定
/// 是否提前结束等待、跳过动画等。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    /// 用户点击（推进对话、跳过可跳过的等待）
    Click,

    /// 跳过请求（快进模式）
    Skip,
}

/// 一帧的事件批
///
/// 携带本帧流逝的时间和采集到的语义输入，作为一个整体
/// 转发给每个活跃 action。
#[derive(Debug, Clone, PartialEq)]
pub struct FrameEvents {
    /// 本帧流逝时间（秒）
    pub dt: f32,
    /// 本帧采集到的输入事件
    pub inputs: Vec<InputEvent>,
}

impl FrameEvents {
    /// 创建事件批
    pub fn new(dt: f32, inputs: Vec<InputEvent>) -> Self {
        Self { dt, inputs }
    }

    /// 创建只携带时间流逝、无输入的事件批
    pub fn tick(dt: f32) -> Self {
        Self {
            dt,
            inputs: Vec::new(),
        }
    }

    /// 本帧是否有点击输入
    pub fn clicked(&self) -> bool {
        self.inputs.contains(&InputEvent::Click)
    }

    /// 本帧是否有跳过请求
    pub fn skip_requested(&self) -> bool {
        self.inputs.contains(&InputEvent::Skip)
    }
}
