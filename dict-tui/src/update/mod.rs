//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! ```text
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方，焦点也只在这里改变。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod overlay;            // 打开 / 关闭弹窗
//!         mod panel;              // 切换面板
//!
//!         pub fn update(app: &mut App, msg: AppMessage) -> bool {...}
//!         pub fn dispatch(app: &mut App, event: Event) -> bool {...}
//!
//!
//!     update 使用 match 穷举消息，返回该事件是否被消费：
//!         - 路由表中的消息         一定被消费
//!         - Forward(key)          由焦点控件决定；没有焦点控件时丢弃，返回 false
//!         - Noop                  不消费
//!
//!     每条消息处理完后，以下性质依然成立：
//!         - 没有弹窗时，弹窗持有的控件不持有焦点
//!         - 最多只有一个控件持有焦点
//!         - should_quit 一旦为 true 就不会再变回 false
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//! ```
//!

mod overlay;
mod panel;

use crossterm::event::{Event, KeyEvent};

use crate::event;
use crate::message::AppMessage;
use crate::model::{App, WidgetId};

/// 处理应用消息，更新状态，返回事件是否被消费
pub fn update(app: &mut App, msg: AppMessage) -> bool {
    match msg {
        AppMessage::OpenOverlay(kind) => {
            overlay::open(app, kind);
            true
        }

        AppMessage::CloseOverlay => {
            overlay::close(app);
            true
        }

        AppMessage::Quit => {
            log::info!("Request to quit the application");
            app.request_quit();
            true
        }

        AppMessage::SelectPanel(panel) => {
            panel::select(app, panel);
            true
        }

        AppMessage::Forward(key) => forward_to_focus(app, key),

        AppMessage::Noop => false,
    }
}

/// 事件 → 消息 → 更新，一步完成
///
/// # Example
///
/// ```
/// use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
/// use dict_tui::model::{App, OverlayKind, WidgetId};
/// use dict_tui::update::dispatch;
///
/// let mut app = App::new();
/// let key = Event::Key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
///
/// assert!(dispatch(&mut app, key));
/// assert_eq!(app.active_overlay(), Some(OverlayKind::LanguagePicker));
/// assert_eq!(app.focus(), Some(WidgetId::LanguagePicker));
/// ```
pub fn dispatch(app: &mut App, event: Event) -> bool {
    let msg = event::handle_event(event, app);
    update(app, msg)
}

/// 把按键交给当前焦点控件
fn forward_to_focus(app: &mut App, key: KeyEvent) -> bool {
    let Some(id) = app.focus() else {
        return false;
    };

    let consumed = app.widgets.get_mut(id).handle_key(key);

    if id == WidgetId::LanguagePicker {
        if let Some(pair) = app.widgets.language_picker.take_selection() {
            log::debug!("Language pair selected: {}", pair.label());
            app.apply_language_pair(pair);
        }
    }

    consumed
}
