//! 主布局渲染

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::{App, PanelId};

use super::components;
use super::panels;
use super::RenderContext;

/// 未选中面板的高度（只有边框和标题）
const COLLAPSED_HEIGHT: u16 = 3;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let ctx = RenderContext::for_app(app);
    let size = frame.area();

    // 三层布局：标题栏 + 面板区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 面板区
            Constraint::Length(1), // 状态栏
        ])
        .split(size);

    let title_area = main_layout[0];
    let content_area = main_layout[1];
    let status_area = main_layout[2];

    render_title_bar(frame, title_area, &ctx);

    // 面板按固定顺序纵向排列，选中的面板占据剩余空间
    let constraints: Vec<Constraint> = app
        .panels
        .panels()
        .map(|panel| {
            if app.panels.is_selected(panel) {
                Constraint::Min(COLLAPSED_HEIGHT)
            } else {
                Constraint::Length(COLLAPSED_HEIGHT)
            }
        })
        .collect();

    let panel_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content_area);

    for (panel, area) in app.panels.panels().zip(panel_areas.iter()) {
        render_panel_window(app, frame, *area, panel, &ctx);
    }

    components::statusbar::render(app, frame, status_area, &ctx);

    // 渲染弹窗（在最上层）
    components::overlay::render(app, frame, &ctx);
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let c = &ctx.colors;
    let title = Paragraph::new(format!(
        " {} v{}",
        ctx.texts.common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 渲染单个面板窗口
///
/// 未选中的面板只保留边框和标题。
fn render_panel_window(
    app: &App,
    frame: &mut Frame,
    area: Rect,
    panel: PanelId,
    ctx: &RenderContext,
) {
    let texts = &ctx.texts.panels;
    let c = &ctx.colors;
    let is_selected = app.panels.is_selected(panel);

    let title = match panel {
        PanelId::Meaning => texts.meaning,
        PanelId::Translate => texts.translate,
        PanelId::Settings => texts.settings,
    };

    let block = Block::default()
        .title(format!(" [{}] {} ", panel.shortcut(), title))
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(is_selected));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if is_selected {
        panels::render(app, frame, inner_area, panel, ctx);
    }
}
