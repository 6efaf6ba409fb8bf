//! 面板内容视图

mod input;
mod settings;

use ratatui::{layout::Rect, Frame};

use crate::model::{App, PanelId};
use crate::view::RenderContext;

/// 渲染选中面板的内容
pub fn render(app: &App, frame: &mut Frame, area: Rect, panel: PanelId, ctx: &RenderContext) {
    match panel {
        PanelId::Meaning => input::render(
            frame,
            area,
            ctx,
            &app.widgets.meaning_input,
            &app.dictionaries.meaning,
            &ctx.texts.meaning,
        ),
        PanelId::Translate => input::render(
            frame,
            area,
            ctx,
            &app.widgets.translate_input,
            &app.dictionaries.translate,
            &ctx.texts.translate,
        ),
        PanelId::Settings => settings::render(app, frame, area, ctx),
    }
}
