//! dict TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 路由消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理与路由表 (`event/`)
//! - **Widget**: 可聚焦控件 (`widget/`)
//! - **Backend**: 启动配置 (`backend/`)
//!
//! 一个按键事件的完整路径：
//!
//! ```text
//! crossterm::event::read()
//!     → event::handle_event(event, &app)      // 按优先级翻译为 AppMessage
//!     → update::update(&mut app, msg)         // 修改 App，返回是否消费
//!     → view::render(&app, frame)             // 下一帧重绘
//! ```

pub mod app;
pub mod backend;
pub mod error;
pub mod event;
pub mod i18n;
pub mod message;
pub mod model;
pub mod update;
pub mod util;
pub mod view;
pub mod widget;

pub use error::{DictError, DictResult};
