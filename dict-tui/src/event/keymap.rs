//! 快捷键配置
//!
//! 路由表中的全部按键都定义在这里

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::PanelId;

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    ///
    /// 字符键忽略 Shift：部分终端在输入 `?` 时会带上 Shift 修饰。
    pub fn matches(&self, key: &KeyEvent) -> bool {
        if key.code != self.code {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => key.modifiers.difference(KeyModifiers::SHIFT) == self.modifiers,
            _ => key.modifiers == self.modifiers,
        }
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 弹窗
    pub const SHORTCUTS: KeyBinding = KeyBinding::key(KeyCode::Char('?'));
    pub const LANGUAGES: KeyBinding = KeyBinding::key(KeyCode::Char('l'));
    pub const CLOSE: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // 全局
    pub const QUIT: KeyBinding = KeyBinding::key(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));

    /// 面板切换键
    pub fn panel(panel: PanelId) -> KeyBinding {
        KeyBinding::key(KeyCode::Char(panel.shortcut()))
    }
}
