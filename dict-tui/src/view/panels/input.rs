//! 释义 / 翻译面板视图

use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::InputPanelTexts;
use crate::model::LanguagePair;
use crate::view::RenderContext;
use crate::widget::TextInput;

/// 渲染带输入框的面板：输入行 + 词典行
pub fn render(
    frame: &mut Frame,
    area: Rect,
    ctx: &RenderContext,
    input: &TextInput,
    dictionary: &LanguagePair,
    texts: &InputPanelTexts,
) {
    let c = &ctx.colors;

    let [input_area, _, dictionary_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(area);

    input.render_labeled(frame, input_area, ctx, texts.input_label, texts.placeholder);

    let line = Line::from(vec![
        Span::styled(format!("{}: ", texts.dictionary), c.muted()),
        Span::styled(dictionary.to_string(), c.title()),
    ]);
    frame.render_widget(Paragraph::new(line), dictionary_area);
}
