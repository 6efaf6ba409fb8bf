//! 翻译键定义
//!
//! 定义所有翻译文本的结构体，提供编译期类型检查。
//!
//! ## 分类标准
//!
//! 1. **按 UI 组件位置分类**：文本归属于它出现的 UI 组件
//! 2. **弹窗内容归 `overlay.*`**：所有弹窗的内容都放在 overlay 下
//! 3. **面板内容归对应面板**：如 `meaning.*`, `settings.*`
//! 4. **键盘提示归 `hints.*`**：状态栏上的操作提示

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 面板标题
    pub panels: PanelTexts,
    /// 释义面板文本
    pub meaning: InputPanelTexts,
    /// 翻译面板文本
    pub translate: InputPanelTexts,
    /// 设置面板文本
    pub settings: SettingsTexts,
    /// 弹窗文本
    pub overlay: OverlayTexts,
    /// 状态栏提示
    pub hints: HintTexts,
}

/// 通用文本
pub struct CommonTexts {
    pub app_name: &'static str,
}

/// 面板标题
pub struct PanelTexts {
    pub meaning: &'static str,
    pub translate: &'static str,
    pub settings: &'static str,
}

/// 带输入框的面板
pub struct InputPanelTexts {
    /// 输入框标签
    pub input_label: &'static str,
    /// 输入框为空且未聚焦时的占位文本
    pub placeholder: &'static str,
    /// 词典标签
    pub dictionary: &'static str,
}

/// 设置面板文本
pub struct SettingsTexts {
    pub theme: ThemeTexts,
    pub locale: &'static str,
}

/// 主题设置文本
pub struct ThemeTexts {
    pub label: &'static str,
    pub dark: &'static str,
    pub light: &'static str,
}

/// 弹窗文本
pub struct OverlayTexts {
    pub shortcuts_title: &'static str,
    pub languages_title: &'static str,
    pub filter_placeholder: &'static str,
    pub no_match: &'static str,
    pub picker_hint: &'static str,
    pub shortcuts: ShortcutTexts,
}

/// 快捷键帮助中的条目说明
pub struct ShortcutTexts {
    pub meaning: &'static str,
    pub translate: &'static str,
    pub settings: &'static str,
    pub help: &'static str,
    pub languages: &'static str,
    pub close: &'static str,
    pub quit: &'static str,
}

/// 状态栏提示动作词
pub struct HintTexts {
    pub panels: &'static str,
    pub help: &'static str,
    pub languages: &'static str,
    pub close: &'static str,
    pub select: &'static str,
    pub apply: &'static str,
    pub change: &'static str,
    pub quit: &'static str,
}
