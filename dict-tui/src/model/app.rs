//! 应用主状态结构

use super::{Dictionaries, LanguagePair, OverlayKind, OverlayState, PanelId, PanelSet, Theme, WidgetId};
use crate::backend::AppConfig;
use crate::i18n::Language;
use crate::widget::{SettingsList, Widgets};

/// 应用主状态
///
/// 只由 Update 层修改，View 层只读。
/// 面板、弹窗与控件只在 crate 内可写，外部通过 `update::dispatch` 驱动。
#[derive(Debug)]
pub struct App {
    /// 是否应该退出（只会从 false 变为 true）
    should_quit: bool,

    /// 面板集合
    pub(crate) panels: PanelSet,

    /// 弹窗状态
    pub(crate) overlay: OverlayState,

    /// 当前持有焦点的控件
    focus: Option<WidgetId>,

    /// 所有控件
    pub(crate) widgets: Widgets,

    /// 释义 / 翻译面板各自的词典
    pub(crate) dictionaries: Dictionaries,
}

impl App {
    /// 创建新的应用实例：(Meaning, 无弹窗, 不退出)，焦点在释义输入框
    pub fn new() -> Self {
        let mut app = Self {
            should_quit: false,
            panels: PanelSet::new(),
            overlay: OverlayState::new(),
            focus: None,
            widgets: Widgets::new(),
            dictionaries: Dictionaries::default(),
        };
        app.focus_widget(PanelId::Meaning.widget());
        app
    }

    /// 使用启动配置创建应用实例
    pub fn from_config(config: &AppConfig) -> Self {
        let mut app = Self::new();
        app.widgets.settings = SettingsList::with_values(config.theme(), config.language());
        if let Some(pair) = &config.meaning_pair {
            app.dictionaries.meaning = pair.clone();
        }
        if let Some(pair) = &config.translate_pair {
            app.dictionaries.translate = pair.clone();
        }
        app
    }

    /// 预先填写释义输入框（`dict meaning <WORD>`）
    pub fn set_meaning_word(&mut self, word: impl Into<String>) {
        self.widgets.meaning_input.set_value(word);
    }

    /// 所有控件（只读）
    pub fn widgets(&self) -> &Widgets {
        &self.widgets
    }

    /// 是否应该退出
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// 请求退出
    pub(crate) fn request_quit(&mut self) {
        self.should_quit = true;
    }

    /// 当前选中的面板
    pub fn selected_panel(&self) -> PanelId {
        self.panels.selected()
    }

    /// 当前弹窗
    pub fn active_overlay(&self) -> Option<OverlayKind> {
        self.overlay.active()
    }

    /// 当前焦点控件
    pub fn focus(&self) -> Option<WidgetId> {
        self.focus
    }

    /// 把焦点移到指定控件，原焦点控件失焦
    pub(crate) fn focus_widget(&mut self, target: Option<WidgetId>) {
        if let Some(previous) = self.focus {
            if Some(previous) != target {
                self.widgets.get_mut(previous).blur();
            }
        }
        if let Some(id) = target {
            self.widgets.get_mut(id).take_focus();
        }
        self.focus = target;
    }

    /// 当前主题
    pub fn theme(&self) -> Theme {
        self.widgets.settings.theme()
    }

    /// 当前界面语言
    pub fn language(&self) -> Language {
        self.widgets.settings.language()
    }

    /// 面板对应的词典
    pub fn dictionary(&self, panel: PanelId) -> Option<&LanguagePair> {
        match panel {
            PanelId::Meaning => Some(&self.dictionaries.meaning),
            PanelId::Translate => Some(&self.dictionaries.translate),
            PanelId::Settings => None,
        }
    }

    /// 把语言对应用到当前面板的词典，设置面板没有词典，忽略
    pub(crate) fn apply_language_pair(&mut self, pair: LanguagePair) {
        match self.panels.selected() {
            PanelId::Meaning => self.dictionaries.meaning = pair,
            PanelId::Translate => self.dictionaries.translate = pair,
            PanelId::Settings => {
                log::debug!("Ignoring language pair {} on the settings panel", pair.label());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
