//! 弹窗更新逻辑

use crate::model::{App, OverlayKind};

/// 打开弹窗：覆盖当前弹窗，焦点交给弹窗持有的控件
///
/// 快捷键帮助不持有控件，打开期间没有控件持有焦点，未处理的按键会被丢弃。
pub fn open(app: &mut App, kind: OverlayKind) {
    let descriptor = app.overlay.open(kind);
    app.focus_widget(descriptor.owned_focusable);
    log::debug!("Overlay opened: {kind:?}, focus: {:?}", app.focus());
}

/// 关闭弹窗：焦点回到当前面板的控件
pub fn close(app: &mut App) {
    app.overlay.close();
    app.focus_widget(app.selected_panel().widget());
    log::debug!("Overlay closed, focus: {:?}", app.focus());
}
