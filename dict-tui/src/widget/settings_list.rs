//! 设置列表控件

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::FocusableWidget;
use crate::i18n::Language;
use crate::model::{SettingItem, Theme, WidgetId};
use crate::view::theme::ThemeColors;
use crate::view::RenderContext;

/// 设置项的标签宽度（用于对齐，基于显示宽度）
const LABEL_WIDTH: usize = 14;
/// 值区域的宽度（包含 ◀ ▶ 符号）
const VALUE_WIDTH: usize = 16;

/// 设置列表
#[derive(Debug, Clone, Default)]
pub struct SettingsList {
    /// 当前选中的设置项索引
    selected_index: usize,
    theme: Theme,
    language: Language,
    focused: bool,
}

impl SettingsList {
    pub fn new() -> Self {
        Self::default()
    }

    /// 使用配置中的初始值
    pub fn with_values(theme: Theme, language: Language) -> Self {
        Self {
            theme,
            language,
            ..Self::default()
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    fn item_count() -> usize {
        SettingItem::all().len()
    }

    /// 选择上一个设置项
    fn select_previous(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        } else {
            self.selected_index = Self::item_count() - 1;
        }
    }

    /// 选择下一个设置项
    fn select_next(&mut self) {
        if self.selected_index < Self::item_count() - 1 {
            self.selected_index += 1;
        } else {
            self.selected_index = 0;
        }
    }

    /// 获取当前选中的设置项
    fn current_item(&self) -> Option<SettingItem> {
        SettingItem::from_index(self.selected_index)
    }

    /// 切换当前设置项到下一个值
    fn toggle_next(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.next(),
            Some(SettingItem::Locale) => self.language = self.language.next(),
            None => {}
        }
        log::debug!("Settings changed: theme={:?}, locale={}", self.theme, self.language.code());
    }

    /// 切换当前设置项到上一个值
    fn toggle_prev(&mut self) {
        match self.current_item() {
            Some(SettingItem::Theme) => self.theme = self.theme.prev(),
            Some(SettingItem::Locale) => self.language = self.language.prev(),
            None => {}
        }
        log::debug!("Settings changed: theme={:?}, locale={}", self.theme, self.language.code());
    }
}

impl FocusableWidget for SettingsList {
    fn id(&self) -> WidgetId {
        WidgetId::SettingsList
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
            // ↑ 或 k: 上一个设置项
            KeyCode::Up | KeyCode::Char('k') => self.select_previous(),
            // ↓ 或 j: 下一个设置项
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Left => self.toggle_prev(),
            KeyCode::Right | KeyCode::Enter => self.toggle_next(),
            _ => return false,
        }
        true
    }

    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) {
        let texts = &ctx.texts.settings;
        let c = &ctx.colors;

        let theme_value = match self.theme {
            Theme::Dark => texts.theme.dark,
            Theme::Light => texts.theme.light,
        };

        let lines = vec![
            Line::from(""),
            render_setting_row(c, texts.theme.label, theme_value, self.selected_index == 0),
            render_setting_row(
                c,
                texts.locale,
                self.language.display_name(),
                self.selected_index == 1,
            ),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }
}

/// 渲染单行设置项
fn render_setting_row<'a>(
    c: &ThemeColors,
    label: &'a str,
    value: &'a str,
    is_selected: bool,
) -> Line<'a> {
    let prefix = if is_selected { "▶ " } else { "  " };

    let label_style = if is_selected {
        Style::default().fg(c.fg).add_modifier(Modifier::BOLD)
    } else {
        c.muted()
    };

    let value_style = if is_selected {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.highlight)
    };

    // 使用 unicode-width 计算显示宽度
    let label_padding = LABEL_WIDTH.saturating_sub(label.width());

    // 值居中显示在 ◀ ▶ 之间
    let available_space = VALUE_WIDTH.saturating_sub(4);
    let left_padding = available_space.saturating_sub(value.width()) / 2;
    let right_padding = available_space
        .saturating_sub(value.width())
        .saturating_sub(left_padding);

    let (left_arrow, right_arrow) = if is_selected {
        ("◀ ", " ▶")
    } else {
        ("  ", "  ")
    };

    Line::from(vec![
        Span::styled(prefix, label_style),
        Span::styled(label, label_style),
        Span::raw(" ".repeat(label_padding)),
        Span::styled(": ", c.muted()),
        Span::styled(left_arrow, c.hint_key()),
        Span::raw(" ".repeat(left_padding)),
        Span::styled(value, value_style),
        Span::raw(" ".repeat(right_padding)),
        Span::styled(right_arrow, c.hint_key()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn focused_list() -> SettingsList {
        let mut list = SettingsList::new();
        list.take_focus();
        list
    }

    #[test]
    fn test_selection_wraps() {
        let mut list = focused_list();
        assert!(list.handle_key(key(KeyCode::Up)));
        assert_eq!(list.selected_index(), 1);
        assert!(list.handle_key(key(KeyCode::Down)));
        assert_eq!(list.selected_index(), 0);
    }

    #[test]
    fn test_toggle_theme() {
        let mut list = focused_list();
        assert!(list.handle_key(key(KeyCode::Right)));
        assert_eq!(list.theme(), Theme::Light);
        assert!(list.handle_key(key(KeyCode::Left)));
        assert_eq!(list.theme(), Theme::Dark);
    }

    #[test]
    fn test_toggle_locale() {
        let mut list = focused_list();
        list.handle_key(key(KeyCode::Char('j')));
        list.handle_key(key(KeyCode::Enter));
        assert_eq!(list.language(), Language::ZhCn);
        assert_eq!(list.theme(), Theme::Dark);
    }

    #[test]
    fn test_other_keys_fall_through() {
        let mut list = focused_list();
        assert!(!list.handle_key(key(KeyCode::Char('x'))));
        assert!(!list.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn test_blurred_list_ignores_keys() {
        let mut list = SettingsList::with_values(Theme::Light, Language::EnUs);
        assert!(!list.handle_key(key(KeyCode::Right)));
        assert_eq!(list.theme(), Theme::Light);
    }
}
