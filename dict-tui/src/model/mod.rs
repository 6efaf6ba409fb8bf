//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! ```text
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发，View 层只读取。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 可聚焦控件标识
//!         mod language;       // 词典语言对
//!         mod overlay;        // 弹窗状态（单槽位）
//!         mod panel;          // 面板集合
//!         mod settings;       // 主题、设置项
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!         pub struct App {
//!             should_quit: bool,              // 退出标志，只会从 false 变为 true
//!             pub panels: PanelSet,           // 当前选中的面板
//!             pub overlay: OverlayState,      // 当前弹窗
//!             focus: Option<WidgetId>,        // 当前焦点控件
//!             pub widgets: Widgets,           // 所有控件
//!             pub dictionaries: Dictionaries, // 各面板的词典
//!         }
//!
//!     启动时为 (Meaning, 无弹窗, 不退出)，焦点在释义输入框。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、面板（PanelSet）与弹窗（OverlayState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     面板固定为 Meaning / Translate / Settings，任何时刻恰好选中一个。
//!
//!     弹窗只有一个槽位：
//!         - open(kind)    覆盖当前弹窗，返回该弹窗的描述（需要聚焦的控件）
//!         - close()       清空槽位
//!
//!     快捷键帮助弹窗不持有控件，语言选择弹窗持有 LanguagePicker 控件。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、焦点（WidgetId）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     焦点只记录在 App.focus 一个字段中，只在以下转换里被修改：
//!         - 打开弹窗       → 弹窗持有的控件（或 None）
//!         - 关闭弹窗       → 当前面板的控件
//!         - 切换面板       → 新面板的控件
//!
//!     因此弹窗关闭时，弹窗持有的控件一定不持有焦点。
//! ```
//!

mod app;
mod focus;
mod language;
mod overlay;
mod panel;
mod settings;

pub use app::App;
pub use focus::WidgetId;
pub use language::{filter_language_pairs, get_all_language_pairs, Dictionaries, LanguagePair};
pub use overlay::{OverlayDescriptor, OverlayKind, OverlayState};
pub use panel::{PanelId, PanelSet};
pub use settings::{SettingItem, Theme};
