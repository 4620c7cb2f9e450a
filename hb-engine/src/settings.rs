//! # Settings 模块
//!
//! 引擎全局设置。启动时加载一次，随后以 `Rc<Settings>` 注入
//! `Scene` 与 `ActionManager`，各子系统只读访问。
//!
//! ## 配置优先级
//!
//! 1. 配置文件 (settings.json)
//! 2. 默认值

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::rc::Rc;
use tracing::warn;

/// 引擎全局设置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// 窗口配置
    #[serde(default)]
    pub window: WindowSettings,

    /// 调试配置
    #[serde(default)]
    pub debug: DebugSettings,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    /// 窗口宽度
    #[serde(default = "default_window_width")]
    pub width: u32,

    /// 窗口高度
    #[serde(default = "default_window_height")]
    pub height: u32,

    /// 窗口标题
    #[serde(default = "default_window_title")]
    pub title: String,
}

/// 调试配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugSettings {
    /// 是否为每个 action 的创建/完成输出日志
    #[serde(default)]
    pub log_actions: bool,
}

// 默认值函数
fn default_window_width() -> u32 {
    1280
}

fn default_window_height() -> u32 {
    720
}

fn default_window_title() -> String {
    "Heartbeat Engine".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window: WindowSettings::default(),
            debug: DebugSettings::default(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
            title: default_window_title(),
        }
    }
}

impl Default for DebugSettings {
    fn default() -> Self {
        Self { log_actions: false }
    }
}

impl Settings {
    /// 加载设置文件
    ///
    /// 如果文件不存在或解析失败，返回默认设置并输出警告。
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            warn!(path = ?path, "设置文件不存在，使用默认设置");
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!(path = ?path, error = %e, "解析设置文件失败，使用默认设置");
                    Self::default()
                }
            },
            Err(e) => {
                warn!(path = ?path, error = %e, "读取设置文件失败，使用默认设置");
                Self::default()
            }
        }
    }

    /// 包装为共享引用
    pub fn into_shared(self) -> Rc<Settings> {
        Rc::new(self)
    }
}
