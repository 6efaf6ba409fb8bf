//! 事件处理器

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::{App, OverlayKind, PanelId};

/// 阻塞读取下一个终端事件
pub fn next_event() -> Result<Event> {
    Ok(event::read()?)
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(_, _) => AppMessage::Noop,                   // 终端窗口大小改变，自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
///
/// 按优先级依次匹配，第一个命中的规则生效：
///
/// ```text
///     ?       打开快捷键帮助（无论当前是否有弹窗）
///     l       打开语言选择
///     Esc     关闭弹窗（仅当有弹窗时，否则转发）
///     q       退出
///     Ctrl+C  退出
///     1/2/3   切换面板并关闭弹窗
///     其他    转发给焦点控件
/// ```
pub fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 重要：只处理 Press 事件，忽略 Release 和 Repeat
    // 避免 Windows 终端上按键重复问题的发生
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::SHORTCUTS.matches(&key) {
        return AppMessage::OpenOverlay(OverlayKind::Shortcuts);
    }

    if DefaultKeymap::LANGUAGES.matches(&key) {
        return AppMessage::OpenOverlay(OverlayKind::LanguagePicker);
    }

    if DefaultKeymap::CLOSE.matches(&key) && app.overlay.is_open() {
        return AppMessage::CloseOverlay;
    }

    if DefaultKeymap::QUIT.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if let Some(panel) = PanelId::ALL
        .into_iter()
        .find(|panel| DefaultKeymap::panel(*panel).matches(&key))
    {
        return AppMessage::SelectPanel(panel);
    }

    AppMessage::Forward(key)
}
