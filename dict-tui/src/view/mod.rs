//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! ```text
//! View 层只读取 App，不修改任何状态。
//! 每一帧都根据当前 Model 完整重绘。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：三个面板窗口 + 状态栏 + 弹窗
//!         mod panels;             // 面板内容
//!         mod components;         // 状态栏、弹窗
//!         pub mod theme;          // 主题颜色
//!
//!         pub use layout::render;
//!
//!
//!     渲染上下文 RenderContext：
//!         主题和界面语言都保存在设置控件中，
//!         每帧开始时从 App 读取一次，再传给各个组件与控件：
//!
//!             let ctx = RenderContext::for_app(app);
//!             ctx.colors              // 当前主题的颜色方案
//!             ctx.texts               // 当前语言的翻译文本
//! ```
//!

mod components;
mod layout;
mod panels;
pub mod theme;

use crate::i18n::{self, Translations};
use crate::model::App;

pub use layout::render;
pub use theme::ThemeColors;

/// 渲染上下文
pub struct RenderContext {
    pub colors: ThemeColors,
    pub texts: &'static Translations,
}

impl RenderContext {
    /// 从应用状态读取主题与语言
    pub fn for_app(app: &App) -> Self {
        Self {
            colors: theme::colors(app.theme()),
            texts: i18n::texts(app.language()),
        }
    }
}
