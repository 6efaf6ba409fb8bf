//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! ```text
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器（路由表）
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, handle_key_event, next_event};
//!
//!
//!     其中有：
//!         · next_event      阻塞读取下一个事件，受 ~/app.rs 调用
//!
//!         · handle_event    事件分发
//!
//!         接收以下 Event 类型：
//!             Event::Key(KeyEvent)                // 键盘事件，按路由表翻译成消息
//!             Event::Resize(width, height)        // 终端窗口大小发生变化，只需重绘
//!             其他                                 // 忽略
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 路由表
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     按优先级匹配，第一个命中的规则生效，每个事件只触发一次转换：
//!
//!         按键        前提            消息
//!         ?           无              OpenOverlay(Shortcuts)
//!         l           无              OpenOverlay(LanguagePicker)
//!         Esc         有弹窗          CloseOverlay
//!         q / Ctrl+C  无              Quit
//!         1 / 2 / 3   无              SelectPanel(..)
//!         其他        无              Forward(key)
//!
//!     打开弹窗的按键即使已有弹窗也会生效，于是可以直接在两个弹窗之间切换。
//!     Esc 在没有弹窗时不属于路由表，会转发给焦点控件。
//!
//!
//!     handler.rs 只读取 App 判断前提，不修改任何状态；
//!     修改统一在 src/update/mod.rs 中完成。
//! ```
//!

mod handler;
mod keymap;

pub use handler::{handle_event, handle_key_event, next_event};
pub use keymap::{DefaultKeymap, KeyBinding};
