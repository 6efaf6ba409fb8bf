//! 底部状态栏组件

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::model::{App, OverlayKind, PanelId};
use crate::view::RenderContext;

/// 渲染状态栏：左侧快捷键提示，右侧当前词典与界面语言
pub fn render(app: &App, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
    let c = &ctx.colors;
    let hints = get_hints(app, ctx);

    let mut spans = vec![Span::raw(" ")];

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.muted)));
        }
        spans.push(Span::styled(*key, c.hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, c.hint_desc()));
    }

    let indicator = format!("{} ", status_indicator(app));
    let indicator_width = u16::try_from(indicator.width()).unwrap_or(u16::MAX);
    let [hints_area, indicator_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(indicator_width)]).areas(area);

    frame.render_widget(Paragraph::new(Line::from(spans)).style(c.statusbar()), hints_area);
    frame.render_widget(
        Paragraph::new(indicator)
            .alignment(Alignment::Right)
            .style(c.statusbar()),
        indicator_area,
    );
}

/// 右侧状态：`[source>target|locale]`，设置面板只显示 `[locale]`
pub fn status_indicator(app: &App) -> String {
    let locale = app.language().code();
    match app.dictionary(app.selected_panel()) {
        Some(pair) => format!("[{}|{locale}]", pair.label()),
        None => format!("[{locale}]"),
    }
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App, ctx: &RenderContext) -> Vec<(&'static str, &'static str)> {
    let texts = &ctx.texts.hints;
    let mut hints = Vec::new();

    match app.active_overlay() {
        Some(OverlayKind::LanguagePicker) => {
            hints.push(("↑↓", texts.select));
            hints.push(("Enter", texts.apply));
            hints.push(("Esc", texts.close));
        }
        Some(OverlayKind::Shortcuts) => {
            hints.push(("Esc", texts.close));
        }
        None => {
            hints.push(("1-3", texts.panels));
            hints.push(("?", texts.help));
            hints.push(("l", texts.languages));
            if app.selected_panel() == PanelId::Settings {
                hints.push(("↑↓", texts.select));
                hints.push(("←→", texts.change));
            }
        }
    }

    hints.push(("q", texts.quit));

    hints
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::AppMessage;
    use crate::model::LanguagePair;
    use crate::update::update;

    #[test]
    fn test_indicator_shows_panel_dictionary() {
        let mut app = App::new();
        assert_eq!(status_indicator(&app), "[en>en|en-US]");

        update(&mut app, AppMessage::SelectPanel(PanelId::Translate));
        app.apply_language_pair(LanguagePair::new("dk", "pt_br"));
        assert_eq!(status_indicator(&app), "[dk>pt_br|en-US]");
    }

    #[test]
    fn test_indicator_on_settings_shows_locale_only() {
        let mut app = App::new();
        update(&mut app, AppMessage::SelectPanel(PanelId::Settings));
        assert_eq!(status_indicator(&app), "[en-US]");
    }

    #[test]
    fn test_hints_follow_overlay() {
        let mut app = App::new();
        let ctx = RenderContext::for_app(&app);
        let keys: Vec<_> = get_hints(&app, &ctx).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["1-3", "?", "l", "q"]);

        update(&mut app, AppMessage::OpenOverlay(OverlayKind::LanguagePicker));
        let keys: Vec<_> = get_hints(&app, &ctx).into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["↑↓", "Enter", "Esc", "q"]);
    }
}
