//! 单行输入框

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::FocusableWidget;
use crate::model::WidgetId;
use crate::view::RenderContext;

/// 单行输入框
#[derive(Debug, Clone)]
pub struct TextInput {
    id: WidgetId,
    value: String,
    /// 光标位置（字符索引，不是字节索引）
    cursor: usize,
    focused: bool,
}

impl TextInput {
    pub fn new(id: WidgetId) -> Self {
        Self {
            id,
            value: String::new(),
            cursor: 0,
            focused: false,
        }
    }

    /// 当前内容
    pub fn value(&self) -> &str {
        &self.value
    }

    /// 光标位置
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// 替换内容，光标移到末尾
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// 光标所在的字节偏移
    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert(&mut self, ch: char) {
        let index = self.byte_index();
        self.value.insert(index, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let index = self.byte_index();
        self.value.remove(index);
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let index = self.byte_index();
            self.value.remove(index);
        }
    }

    /// 以 `label: value` 形式绘制，未聚焦且为空时显示占位文本
    pub fn render_labeled(
        &self,
        frame: &mut Frame,
        area: Rect,
        ctx: &RenderContext,
        label: &str,
        placeholder: &str,
    ) {
        let c = &ctx.colors;
        let prefix = if label.is_empty() {
            String::from("> ")
        } else {
            format!("{label}: ")
        };

        let value_span = if self.value.is_empty() && !self.focused {
            Span::styled(placeholder.to_string(), c.muted())
        } else {
            let style = if self.focused {
                Style::default().fg(c.highlight)
            } else {
                Style::default().fg(c.fg)
            };
            Span::styled(self.value.clone(), style)
        };

        let prefix_width = prefix.width();
        let line = Line::from(vec![Span::styled(prefix, c.title()), value_span]);
        frame.render_widget(Paragraph::new(line), area);

        if self.focused && area.height > 0 {
            let before_cursor = &self.value[..self.byte_index()];
            let offset = u16::try_from(prefix_width + before_cursor.width()).unwrap_or(u16::MAX);
            let x = area
                .x
                .saturating_add(offset)
                .min(area.right().saturating_sub(1));
            frame.set_cursor_position(Position::new(x, area.y));
        }
    }
}

impl FocusableWidget for TextInput {
    fn id(&self) -> WidgetId {
        self.id
    }

    fn take_focus(&mut self) {
        self.focused = true;
    }

    fn blur(&mut self) {
        self.focused = false;
    }

    fn is_focused(&self) -> bool {
        self.focused
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if !self.focused {
            return false;
        }

        match key.code {
            // 普通字符输入（允许 Shift 产生的大写和符号）
            KeyCode::Char(ch) if (key.modifiers - KeyModifiers::SHIFT).is_empty() => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        self.render_labeled(frame, area, ctx, "", "");
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused_input() -> TextInput {
        let mut input = TextInput::new(WidgetId::MeaningInput);
        input.take_focus();
        input
    }

    fn type_str(input: &mut TextInput, text: &str) {
        for ch in text.chars() {
            assert!(input.handle_key(key(KeyCode::Char(ch))));
        }
    }

    #[test]
    fn test_unfocused_input_ignores_keys() {
        let mut input = TextInput::new(WidgetId::MeaningInput);
        assert!(!input.handle_key(key(KeyCode::Char('a'))));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_typing_appends_and_moves_cursor() {
        let mut input = focused_input();
        type_str(&mut input, "word");
        assert_eq!(input.value(), "word");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_shift_characters_are_inserted() {
        let mut input = focused_input();
        assert!(input.handle_key(KeyEvent::new(KeyCode::Char('W'), KeyModifiers::SHIFT)));
        assert_eq!(input.value(), "W");
    }

    #[test]
    fn test_control_characters_are_not_consumed() {
        let mut input = focused_input();
        assert!(!input.handle_key(KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL)));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_editing_in_the_middle() {
        let mut input = focused_input();
        type_str(&mut input, "wrd");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Left));
        type_str(&mut input, "o");
        assert_eq!(input.value(), "word");

        input.handle_key(key(KeyCode::Home));
        input.handle_key(key(KeyCode::Delete));
        assert_eq!(input.value(), "ord");

        input.handle_key(key(KeyCode::End));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "or");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut input = focused_input();
        type_str(&mut input, "词典");
        input.handle_key(key(KeyCode::Left));
        input.handle_key(key(KeyCode::Backspace));
        assert_eq!(input.value(), "典");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = focused_input();
        assert!(input.handle_key(key(KeyCode::Backspace)));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_unhandled_keys_fall_through() {
        let mut input = focused_input();
        assert!(!input.handle_key(key(KeyCode::Enter)));
        assert!(!input.handle_key(key(KeyCode::Up)));
        assert!(!input.handle_key(key(KeyCode::Tab)));
    }

    #[test]
    fn test_set_value_moves_cursor_to_end() {
        let mut input = TextInput::new(WidgetId::TranslateInput);
        input.set_value("hello");
        assert_eq!(input.cursor(), 5);
    }
}
