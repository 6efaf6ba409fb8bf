//! 面板状态定义

use super::focus::WidgetId;

/// 面板枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelId {
    /// 释义
    #[default]
    Meaning,
    /// 翻译
    Translate,
    /// 设置
    Settings,
}

impl PanelId {
    /// 所有面板，按显示顺序排列
    pub const ALL: [PanelId; 3] = [PanelId::Meaning, PanelId::Translate, PanelId::Settings];

    /// 面板持有的可聚焦控件
    pub fn widget(self) -> Option<WidgetId> {
        match self {
            PanelId::Meaning => Some(WidgetId::MeaningInput),
            PanelId::Translate => Some(WidgetId::TranslateInput),
            PanelId::Settings => Some(WidgetId::SettingsList),
        }
    }

    /// 面板对应的数字快捷键
    pub fn shortcut(self) -> char {
        match self {
            PanelId::Meaning => '1',
            PanelId::Translate => '2',
            PanelId::Settings => '3',
        }
    }
}

/// 面板集合
///
/// 面板的数量和顺序是固定的，这里只记录当前选中的是哪一个。
#[derive(Debug, Default)]
pub struct PanelSet {
    selected: PanelId,
}

impl PanelSet {
    /// 创建面板集合，默认选中释义面板
    pub fn new() -> Self {
        Self::default()
    }

    /// 选中面板
    pub fn select(&mut self, panel: PanelId) {
        self.selected = panel;
    }

    /// 当前选中的面板
    pub fn selected(&self) -> PanelId {
        self.selected
    }

    /// 是否选中了指定面板
    pub fn is_selected(&self, panel: PanelId) -> bool {
        self.selected == panel
    }

    /// 按显示顺序遍历所有面板
    pub fn panels(&self) -> impl Iterator<Item = PanelId> {
        PanelId::ALL.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selection_is_meaning() {
        let panels = PanelSet::new();
        assert_eq!(panels.selected(), PanelId::Meaning);
    }

    #[test]
    fn test_select_replaces_selection() {
        let mut panels = PanelSet::new();
        panels.select(PanelId::Settings);
        assert!(panels.is_selected(PanelId::Settings));
        assert!(!panels.is_selected(PanelId::Meaning));

        panels.select(PanelId::Translate);
        assert_eq!(panels.selected(), PanelId::Translate);
    }

    #[test]
    fn test_panels_in_display_order() {
        let order: Vec<PanelId> = PanelSet::new().panels().collect();
        assert_eq!(
            order,
            vec![PanelId::Meaning, PanelId::Translate, PanelId::Settings]
        );
    }

    #[test]
    fn test_shortcuts_are_distinct_digits() {
        let keys: Vec<char> = PanelId::ALL.iter().map(|p| p.shortcut()).collect();
        assert_eq!(keys, vec!['1', '2', '3']);
    }
}
