//! 设置项定义

/// 主题枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// 获取下一个主题
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 获取上一个主题
    #[must_use]
    pub fn prev(self) -> Theme {
        self.next() // 只有两个选项，prev 和 next 相同
    }

    /// 从配置字符串解析
    pub fn from_name(name: &str) -> Option<Theme> {
        match name {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// 设置项枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingItem {
    Theme,
    Locale,
}

impl SettingItem {
    /// 获取所有设置项
    pub fn all() -> &'static [SettingItem] {
        &[SettingItem::Theme, SettingItem::Locale]
    }

    /// 从索引获取设置项
    pub fn from_index(index: usize) -> Option<SettingItem> {
        Self::all().get(index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_from_name() {
        assert_eq!(Theme::from_name("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_name("light"), Some(Theme::Light));
        // 配置里只接受小写名称
        assert_eq!(Theme::from_name("Light"), None);
        assert_eq!(Theme::from_name("solarized"), None);
    }

    #[test]
    fn test_theme_cycles() {
        assert_eq!(Theme::Dark.next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        assert_eq!(Theme::Light.prev(), Theme::Dark);
    }

    #[test]
    fn test_setting_items_by_index() {
        assert_eq!(SettingItem::from_index(0), Some(SettingItem::Theme));
        assert_eq!(SettingItem::from_index(1), Some(SettingItem::Locale));
        assert_eq!(SettingItem::from_index(SettingItem::all().len()), None);
    }
}
