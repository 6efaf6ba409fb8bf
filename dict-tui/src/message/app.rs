//! 应用主消息枚举

use crossterm::event::KeyEvent;

use crate::model::{OverlayKind, PanelId};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 打开弹窗（覆盖当前弹窗）
    OpenOverlay(OverlayKind),

    /// 关闭弹窗
    CloseOverlay,

    /// 退出应用
    Quit,

    /// 切换面板（同时关闭弹窗）
    SelectPanel(PanelId),

    /// 路由表未处理的按键，转发给焦点控件
    Forward(KeyEvent),

    /// 无操作（按键释放、窗口大小变化等）
    Noop,
}
