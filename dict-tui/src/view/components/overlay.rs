//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::model::{App, OverlayKind};
use crate::view::RenderContext;
use crate::widget::FocusableWidget;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame, ctx: &RenderContext) {
    let Some(kind) = app.active_overlay() else {
        return;
    };

    match kind {
        OverlayKind::Shortcuts => render_shortcuts(frame, ctx),
        OverlayKind::LanguagePicker => render_language_picker(app, frame, ctx),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 清除背景并绘制弹窗边框，返回内容区域
fn render_frame(frame: &mut Frame, area: Rect, title: &str, ctx: &RenderContext) -> Rect {
    let c = &ctx.colors;

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .title_style(c.title())
        .borders(Borders::ALL)
        .border_style(c.border_style(true))
        .style(Style::default().bg(c.bg));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    )
}

/// 渲染快捷键帮助
fn render_shortcuts(frame: &mut Frame, ctx: &RenderContext) {
    let texts = &ctx.texts.overlay;
    let c = &ctx.colors;

    let entries = [
        ("1", texts.shortcuts.meaning),
        ("2", texts.shortcuts.translate),
        ("3", texts.shortcuts.settings),
        ("?", texts.shortcuts.help),
        ("l", texts.shortcuts.languages),
        ("Esc", texts.shortcuts.close),
        ("q", texts.shortcuts.quit),
    ];

    let height = u16::try_from(entries.len()).unwrap_or(u16::MAX) + 4;
    let area = centered_rect(40, height, frame.area());
    let inner = render_frame(frame, area, texts.shortcuts_title, ctx);

    let mut lines = vec![Line::from("")];
    for (key, desc) in entries {
        lines.push(Line::from(vec![
            Span::styled(format!("{:>7}", format!("[{key}]")), c.hint_key()),
            Span::raw("  "),
            Span::styled(desc, Style::default().fg(c.fg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// 渲染语言选择弹窗
fn render_language_picker(app: &App, frame: &mut Frame, ctx: &RenderContext) {
    let area = centered_rect(44, 14, frame.area());
    let inner = render_frame(frame, area, ctx.texts.overlay.languages_title, ctx);
    app.widgets.language_picker.render(frame, inner, ctx);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use super::*;
    use crate::message::AppMessage;
    use crate::update::update;

    fn draw(app: &App) -> Buffer {
        let backend = TestBackend::new(60, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let ctx = RenderContext::for_app(app);
        terminal.draw(|frame| render(app, frame, &ctx)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn screen(buf: &Buffer) -> String {
        (0..buf.area.height)
            .map(|y| {
                (0..buf.area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_nothing_drawn_without_overlay() {
        let app = App::new();
        assert!(screen(&draw(&app)).trim().is_empty());
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 60, 20);
        assert_eq!(centered_rect(40, 10, area), Rect::new(10, 5, 40, 10));
        // 终端过小时不越界
        assert_eq!(centered_rect(80, 30, area), Rect::new(0, 0, 60, 20));
    }

    #[test]
    fn test_shortcuts_lists_bindings() {
        let mut app = App::new();
        update(&mut app, AppMessage::OpenOverlay(OverlayKind::Shortcuts));
        let text = screen(&draw(&app));
        for entry in ["[1]", "[2]", "[3]", "[?]", "[l]", "[Esc]", "[q]"] {
            assert!(text.contains(entry), "missing {entry}");
        }
    }

    #[test]
    fn test_language_picker_lists_pairs() {
        let mut app = App::new();
        update(&mut app, AppMessage::OpenOverlay(OverlayKind::LanguagePicker));
        let text = screen(&draw(&app));
        assert!(text.contains("Languages"));
        assert!(text.contains("en -> pt_br"));
        assert!(text.contains("pt_br -> pt_br"));
    }
}
