//! 语言对选择控件
//!
//! 由过滤输入框和过滤后的语言对列表组成。
//! 输入框内容变化时重新过滤，并把高亮重置到第一项；
//! Enter 记下当前高亮的语言对，由 Update 层通过 `take_selection` 取走。

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame,
};

use super::{FocusableWidget, TextInput};
use crate::model::{filter_language_pairs, LanguagePair, WidgetId};
use crate::view::RenderContext;

/// 语言对选择控件
#[derive(Debug, Clone)]
pub struct LanguagePicker {
    filter: TextInput,
    matches: Vec<LanguagePair>,
    highlighted: usize,
    selection: Option<LanguagePair>,
}

impl LanguagePicker {
    pub fn new() -> Self {
        Self {
            filter: TextInput::new(WidgetId::LanguagePicker),
            matches: filter_language_pairs(""),
            highlighted: 0,
            selection: None,
        }
    }

    /// 过滤文本
    pub fn filter(&self) -> &str {
        self.filter.value()
    }

    /// 过滤后的语言对
    pub fn matches(&self) -> &[LanguagePair] {
        &self.matches
    }

    /// 当前高亮的语言对
    pub fn highlighted(&self) -> Option<&LanguagePair> {
        self.matches.get(self.highlighted)
    }

    /// 取走 Enter 选中的语言对
    pub fn take_selection(&mut self) -> Option<LanguagePair> {
        self.selection.take()
    }

    fn refresh_matches(&mut self) {
        self.matches = filter_language_pairs(self.filter.value());
        self.highlighted = 0;
    }

    fn select_previous(&mut self) {
        self.highlighted = self.highlighted.saturating_sub(1);
    }

    fn select_next(&mut self) {
        if self.highlighted < self.matches.len().saturating_sub(1) {
            self.highlighted += 1;
        }
    }
}

impl Default for LanguagePicker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusableWidget for LanguagePicker {
    fn id(&self) -> WidgetId {
        WidgetId::LanguagePicker
    }

    fn take_focus(&mut self) {
        self.filter.take_focus();
    }

    fn blur(&mut self) {
        self.filter.blur();
    }

    fn is_focused(&self) -> bool {
        self.filter.is_focused()
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.is_focused() {
            return false;
        }

        match key.code {
            KeyCode::Up => {
                self.select_previous();
                true
            }
            KeyCode::Down => {
                self.select_next();
                true
            }
            KeyCode::Enter => {
                self.selection = self.highlighted().cloned();
                true
            }
            _ => {
                let before = self.filter.value().to_string();
                let consumed = self.filter.handle_key(key);
                if consumed && before != self.filter.value() {
                    self.refresh_matches();
                }
                consumed
            }
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let texts = &ctx.texts.overlay;
        let c = &ctx.colors;

        let [filter_area, list_area, hint_area] = Layout::vertical([
            Constraint::Length(2),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .areas(area);

        self.filter
            .render_labeled(frame, filter_area, ctx, "", texts.filter_placeholder);

        if self.matches.is_empty() {
            frame.render_widget(
                Paragraph::new(Line::from(Span::styled(texts.no_match, c.muted()))),
                list_area,
            );
        } else {
            let items: Vec<ListItem> = self
                .matches
                .iter()
                .map(|pair| ListItem::new(Line::from(format!("  {pair}"))))
                .collect();
            let list = List::new(items).highlight_style(c.selected());

            let mut state = ListState::default();
            state.select(Some(self.highlighted));
            frame.render_stateful_widget(list, list_area, &mut state);
        }

        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(texts.picker_hint, c.muted()))),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused_picker() -> LanguagePicker {
        let mut picker = LanguagePicker::new();
        picker.take_focus();
        picker
    }

    #[test]
    fn test_lists_every_pair_initially() {
        let picker = LanguagePicker::new();
        assert_eq!(picker.matches().len(), 7);
        assert_eq!(picker.highlighted(), Some(&LanguagePair::new("en", "en")));
    }

    #[test]
    fn test_typing_filters_and_resets_highlight() {
        let mut picker = focused_picker();
        picker.handle_key(key(KeyCode::Down));
        picker.handle_key(key(KeyCode::Down));

        for ch in "pt".chars() {
            assert!(picker.handle_key(key(KeyCode::Char(ch))));
        }
        assert_eq!(picker.filter(), "pt");
        assert_eq!(picker.matches().len(), 4);
        assert_eq!(picker.highlighted(), Some(&LanguagePair::new("en", "pt_br")));
    }

    #[test]
    fn test_highlight_stays_in_bounds() {
        let mut picker = focused_picker();
        picker.handle_key(key(KeyCode::Up));
        assert_eq!(picker.highlighted(), Some(&LanguagePair::new("en", "en")));

        for _ in 0..20 {
            picker.handle_key(key(KeyCode::Down));
        }
        assert_eq!(picker.highlighted(), Some(&LanguagePair::new("pt_br", "pt_br")));
    }

    #[test]
    fn test_enter_records_selection_once() {
        let mut picker = focused_picker();
        picker.handle_key(key(KeyCode::Down));
        assert!(picker.handle_key(key(KeyCode::Enter)));
        assert_eq!(picker.take_selection(), Some(LanguagePair::new("en", "pt_br")));
        assert_eq!(picker.take_selection(), None);
    }

    #[test]
    fn test_enter_without_match_selects_nothing() {
        let mut picker = focused_picker();
        for ch in "zz".chars() {
            picker.handle_key(key(KeyCode::Char(ch)));
        }
        assert!(picker.matches().is_empty());
        assert!(picker.handle_key(key(KeyCode::Enter)));
        assert_eq!(picker.take_selection(), None);
    }

    #[test]
    fn test_backspace_widens_filter() {
        let mut picker = focused_picker();
        for ch in "dk>p".chars() {
            picker.handle_key(key(KeyCode::Char(ch)));
        }
        assert_eq!(picker.matches().len(), 1);
        picker.handle_key(key(KeyCode::Backspace));
        assert_eq!(picker.matches().len(), 2);
    }

    #[test]
    fn test_blurred_picker_ignores_keys() {
        let mut picker = LanguagePicker::new();
        assert!(!picker.handle_key(key(KeyCode::Down)));
        assert!(!picker.handle_key(key(KeyCode::Char('e'))));
        assert_eq!(picker.filter(), "");
    }
}
