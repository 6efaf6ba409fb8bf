//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! ```text
//! 作为 Event → Update 之间的桥梁。
//! Event 层把按键翻译成 AppMessage，Update 层根据 AppMessage 修改 Model。
//!
//!
//!         pub enum AppMessage {
//!             OpenOverlay(OverlayKind),   // ? / l
//!             CloseOverlay,               // Esc（仅当有弹窗时）
//!             Quit,                       // q / Ctrl+C
//!             SelectPanel(PanelId),       // 1 / 2 / 3
//!             Forward(KeyEvent),          // 其余按键，交给焦点控件
//!             Noop,                       // 非按下事件等
//!         }
//!
//!
//! 最后，Event 将消息传入 Update 层进行处理。
//!     —— 去往 src/update/mod.rs 吧
//! ```
//!

mod app;

pub use app::AppMessage;
