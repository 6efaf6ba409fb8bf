//!
//! src/widget/mod.rs
//! Widget 层：可聚焦控件
//!
//! ```text
//! 每个控件都自己管理内部编辑状态（输入框内容、光标位置、列表选中项），
//! 控件之间互不知晓。
//! “同一时刻最多一个控件持有焦点” 由 Update 层保证：
//! 焦点只会在打开/关闭弹窗和切换面板时通过 `App::focus_widget` 改变。
//!
//!
//! 有模块结构：
//!     src/widget/mod.rs
//!         mod text_input;         // 单行输入框
//!         mod language_picker;    // 语言对选择（过滤输入 + 列表）
//!         mod settings_list;      // 设置列表
//!
//!
//!     控件契约 FocusableWidget：
//!         - take_focus()          成为键盘输入的接收者（幂等）
//!         - blur()                失去焦点
//!         - handle_key(key)       处理按键，返回是否消费了该按键
//!         - render(...)           绘制自身
//!
//!     Update 层只会把路由表没有处理的按键转发给当前焦点控件，
//!     不会读取控件的内部状态。
//! ```
//!

mod language_picker;
mod settings_list;
mod text_input;

use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

use crate::model::WidgetId;
use crate::view::RenderContext;

pub use language_picker::LanguagePicker;
pub use settings_list::SettingsList;
pub use text_input::TextInput;

/// 可聚焦控件
pub trait FocusableWidget {
    /// 控件标识
    fn id(&self) -> WidgetId;

    /// 获取焦点
    fn take_focus(&mut self);

    /// 失去焦点
    fn blur(&mut self);

    /// 是否持有焦点
    fn is_focused(&self) -> bool;

    /// 处理按键，返回是否消费
    fn handle_key(&mut self, key: KeyEvent) -> bool;

    /// 绘制控件
    fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext);
}

/// 应用内所有控件，启动时创建一次
#[derive(Debug)]
pub struct Widgets {
    pub meaning_input: TextInput,
    pub translate_input: TextInput,
    pub settings: SettingsList,
    pub language_picker: LanguagePicker,
}

impl Widgets {
    pub fn new() -> Self {
        Self {
            meaning_input: TextInput::new(WidgetId::MeaningInput),
            translate_input: TextInput::new(WidgetId::TranslateInput),
            settings: SettingsList::new(),
            language_picker: LanguagePicker::new(),
        }
    }

    /// 按标识获取控件
    pub fn get(&self, id: WidgetId) -> &dyn FocusableWidget {
        match id {
            WidgetId::MeaningInput => &self.meaning_input,
            WidgetId::TranslateInput => &self.translate_input,
            WidgetId::SettingsList => &self.settings,
            WidgetId::LanguagePicker => &self.language_picker,
        }
    }

    /// 按标识获取可变控件
    pub fn get_mut(&mut self, id: WidgetId) -> &mut dyn FocusableWidget {
        match id {
            WidgetId::MeaningInput => &mut self.meaning_input,
            WidgetId::TranslateInput => &mut self.translate_input,
            WidgetId::SettingsList => &mut self.settings,
            WidgetId::LanguagePicker => &mut self.language_picker,
        }
    }

    /// 所有控件（按显示顺序）
    fn all(&self) -> [&dyn FocusableWidget; 4] {
        [
            &self.meaning_input,
            &self.translate_input,
            &self.settings,
            &self.language_picker,
        ]
    }

    /// 当前持有焦点的控件
    pub fn focused(&self) -> Vec<WidgetId> {
        self.all()
            .into_iter()
            .filter(|widget| widget.is_focused())
            .map(|widget| widget.id())
            .collect()
    }
}

impl Default for Widgets {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_returns_matching_widget() {
        let widgets = Widgets::new();
        for widget in widgets.all() {
            assert_eq!(widgets.get(widget.id()).id(), widget.id());
        }
        assert_eq!(
            widgets.all().map(|widget| widget.id()),
            [
                WidgetId::MeaningInput,
                WidgetId::TranslateInput,
                WidgetId::SettingsList,
                WidgetId::LanguagePicker,
            ]
        );
    }

    #[test]
    fn test_focused_reports_widget_ids() {
        let mut widgets = Widgets::new();
        assert!(widgets.focused().is_empty());

        widgets.get_mut(WidgetId::SettingsList).take_focus();
        assert_eq!(widgets.focused(), vec![WidgetId::SettingsList]);

        widgets.get_mut(WidgetId::SettingsList).blur();
        widgets.get_mut(WidgetId::TranslateInput).take_focus();
        assert_eq!(widgets.focused(), vec![WidgetId::TranslateInput]);
    }
}
