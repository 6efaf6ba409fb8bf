//! 面板更新逻辑

use crate::model::{App, PanelId};

/// 切换面板：关闭弹窗，焦点交给新面板的控件
pub fn select(app: &mut App, panel: PanelId) {
    app.overlay.close();
    app.panels.select(panel);
    app.focus_widget(panel.widget());
    log::debug!("Panel selected: {panel:?}");
}
