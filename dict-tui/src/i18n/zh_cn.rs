//! 简体中文翻译 (zh-CN)

use super::keys::{
    CommonTexts, HintTexts, InputPanelTexts, OverlayTexts, PanelTexts, SettingsTexts,
    ShortcutTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts { app_name: "dict" },

    panels: PanelTexts {
        meaning: "释义",
        translate: "翻译",
        settings: "设置",
    },

    meaning: InputPanelTexts {
        input_label: "单词",
        placeholder: "输入要查询的单词",
        dictionary: "词典",
    },

    translate: InputPanelTexts {
        input_label: "短语",
        placeholder: "输入要翻译的短语",
        dictionary: "词典",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "主题",
            dark: "深色",
            light: "浅色",
        },
        locale: "界面语言",
    },

    overlay: OverlayTexts {
        shortcuts_title: "快捷键",
        languages_title: "语言",
        filter_placeholder: "输入以过滤...",
        no_match: "没有匹配的语言对",
        picker_hint: "↑↓ 移动 | Enter 应用 | Esc 关闭",
        shortcuts: ShortcutTexts {
            meaning: "释义",
            translate: "翻译",
            settings: "设置",
            help: "显示本帮助",
            languages: "选择语言",
            close: "关闭弹窗",
            quit: "退出",
        },
    },

    hints: HintTexts {
        panels: "切换面板",
        help: "帮助",
        languages: "语言",
        close: "关闭",
        select: "选择",
        apply: "应用",
        change: "修改",
        quit: "退出",
    },
};
