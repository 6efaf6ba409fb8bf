//! 英文翻译 (en-US)

use super::keys::{
    CommonTexts, HintTexts, InputPanelTexts, OverlayTexts, PanelTexts, SettingsTexts,
    ShortcutTexts, ThemeTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts { app_name: "dict" },

    panels: PanelTexts {
        meaning: "Meaning",
        translate: "Translate",
        settings: "Settings",
    },

    meaning: InputPanelTexts {
        input_label: "Word",
        placeholder: "Type a word to look up",
        dictionary: "Dictionary",
    },

    translate: InputPanelTexts {
        input_label: "Phrase",
        placeholder: "Type a phrase to translate",
        dictionary: "Dictionary",
    },

    settings: SettingsTexts {
        theme: ThemeTexts {
            label: "Theme",
            dark: "Dark",
            light: "Light",
        },
        locale: "Locale",
    },

    overlay: OverlayTexts {
        shortcuts_title: "Shortcuts",
        languages_title: "Languages",
        filter_placeholder: "Enter text...",
        no_match: "No matching language pair",
        picker_hint: "↑↓ Move | Enter Apply | Esc Close",
        shortcuts: ShortcutTexts {
            meaning: "Meaning",
            translate: "Translate",
            settings: "Settings",
            help: "Show this help",
            languages: "Choose languages",
            close: "Close overlay",
            quit: "Quit",
        },
    },

    hints: HintTexts {
        panels: "Panels",
        help: "Help",
        languages: "Languages",
        close: "Close",
        select: "Select",
        apply: "Apply",
        change: "Change",
        quit: "Quit",
    },
};
