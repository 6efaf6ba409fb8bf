//! 焦点状态定义

/// 可聚焦控件的标识
///
/// 控件在启动时创建一次，此后只会被聚焦或失焦，不会被重建。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetId {
    /// 释义面板的输入框
    MeaningInput,
    /// 翻译面板的输入框
    TranslateInput,
    /// 设置面板的设置列表
    SettingsList,
    /// 语言选择弹窗的过滤输入
    LanguagePicker,
}

impl WidgetId {
    /// 是否属于弹窗
    pub fn is_overlay_owned(self) -> bool {
        matches!(self, WidgetId::LanguagePicker)
    }
}
