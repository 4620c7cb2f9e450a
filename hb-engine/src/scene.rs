//! # Scene 模块
//!
//! 场景与可渲染对象的抽象。
//!
//! ## 设计说明
//!
//! - `Renderable`: 可被 transition 驱动的对象接口，按名称读写 f32 属性
//! - `Scene`: 按 key 管理 renderable 的注册表，持有全局设置的只读引用
//! - 单线程运行，内部可变性采用 `Rc<RefCell<...>>` 模式：
//!   action/transition 持有 `Rc<dyn Renderable>`，通过 `&self` 写属性，
//!   无需与场景注册表产生借用冲突

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::settings::Settings;

/// 可渲染对象接口
///
/// 对象通过实现此 trait 声明自己有哪些属性可以被 transition 驱动。
/// 属性访问全部经过 `&self`，实现方内部用 `RefCell` 承担可变性。
pub trait Renderable: 'static {
    /// 对象在场景中的 key
    fn key(&self) -> &str;

    /// 获取属性的当前值
    ///
    /// # 返回
    /// - `Some(value)`: 属性存在，返回当前值
    /// - `None`: 属性不存在
    fn get_property(&self, property: &str) -> Option<f32>;

    /// 设置属性的新值
    ///
    /// # 返回
    /// - `true`: 设置成功
    /// - `false`: 属性不存在
    fn set_property(&self, property: &str, value: f32) -> bool;

    /// 所有可驱动属性的列表（用于调试和校验）
    fn property_list(&self) -> &'static [&'static str];
}

/// 基础 renderable 实现
///
/// 携带 transition 子系统关心的三个属性：`alpha`、`position_x`、`position_y`。
/// 渲染细节（纹理、文字排版）不在本 crate 范围内。
#[derive(Debug)]
pub struct BasicRenderable {
    key: String,
    alpha: RefCell<f32>,
    position_x: RefCell<f32>,
    position_y: RefCell<f32>,
}

impl BasicRenderable {
    /// 创建新的 renderable，初始 alpha 为 1.0
    pub fn new(key: impl Into<String>, x: f32, y: f32) -> Self {
        Self {
            key: key.into(),
            alpha: RefCell::new(1.0),
            position_x: RefCell::new(x),
            position_y: RefCell::new(y),
        }
    }

    /// 创建完全透明的 renderable（用于淡入）
    pub fn new_hidden(key: impl Into<String>, x: f32, y: f32) -> Self {
        let renderable = Self::new(key, x, y);
        *renderable.alpha.borrow_mut() = 0.0;
        renderable
    }

    /// 当前 alpha
    pub fn alpha(&self) -> f32 {
        *self.alpha.borrow()
    }

    /// 当前位置
    pub fn position(&self) -> (f32, f32) {
        (*self.position_x.borrow(), *self.position_y.borrow())
    }
}

impl Renderable for BasicRenderable {
    fn key(&self) -> &str {
        &self.key
    }

    fn get_property(&self, property: &str) -> Option<f32> {
        match property {
            "alpha" => Some(*self.alpha.borrow()),
            "position_x" => Some(*self.position_x.borrow()),
            "position_y" => Some(*self.position_y.borrow()),
            _ => None,
        }
    }

    fn set_property(&self, property: &str, value: f32) -> bool {
        match property {
            "alpha" => {
                *self.alpha.borrow_mut() = value;
                true
            }
            "position_x" => {
                *self.position_x.borrow_mut() = value;
                true
            }
            "position_y" => {
                *self.position_y.borrow_mut() = value;
                true
            }
            _ => false,
        }
    }

    fn property_list(&self) -> &'static [&'static str] {
        &["alpha", "position_x", "position_y"]
    }
}

/// 场景
///
/// 按 key 管理 renderable。注册表内部可变，action 通过 `Rc<Scene>`
/// 在 start/update 期间增删对象。
pub struct Scene {
    renderables: RefCell<HashMap<String, Rc<dyn Renderable>>>,
    settings: Rc<Settings>,
}

impl Scene {
    /// 创建新场景，注入全局设置
    pub fn new(settings: Rc<Settings>) -> Rc<Self> {
        Rc::new(Self {
            renderables: RefCell::new(HashMap::new()),
            settings,
        })
    }

    /// 全局设置
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// 注册 renderable
    ///
    /// 同名 key 会覆盖旧对象。
    pub fn register_renderable(&self, renderable: Rc<dyn Renderable>) {
        self.renderables
            .borrow_mut()
            .insert(renderable.key().to_string(), renderable);
    }

    /// 按 key 查找 renderable
    pub fn get_renderable(&self, key: &str) -> Option<Rc<dyn Renderable>> {
        self.renderables.borrow().get(key).cloned()
    }

    /// 移除 renderable
    ///
    /// # 返回
    /// 被移除的对象；key 不存在时返回 `None`
    pub fn remove_renderable(&self, key: &str) -> Option<Rc<dyn Renderable>> {
        self.renderables.borrow_mut().remove(key)
    }

    /// 场景中 renderable 的数量
    pub fn renderable_count(&self) -> usize {
        self.renderables.borrow().len()
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("renderables", &self.renderable_count())
            .finish()
    }
}
