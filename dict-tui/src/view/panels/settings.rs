//! 设置面板视图

use ratatui::{layout::Rect, Frame};

use crate::model::App;
use crate::view::RenderContext;
use crate::widget::FocusableWidget;

/// 渲染设置面板
pub fn render(app: &App, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    app.widgets.settings.render(frame, area, ctx);
}
