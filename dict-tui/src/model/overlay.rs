//! 弹窗状态
//!
//! 只有一个槽位：打开新的弹窗会直接覆盖旧的，不存在嵌套，
//! 关闭后也不会回到之前的弹窗。

use super::focus::WidgetId;

/// 弹窗类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    /// 快捷键帮助
    Shortcuts,
    /// 语言对选择
    LanguagePicker,
}

impl OverlayKind {
    /// 获取弹窗描述
    pub fn descriptor(self) -> OverlayDescriptor {
        let owned_focusable = match self {
            OverlayKind::Shortcuts => None,
            OverlayKind::LanguagePicker => Some(WidgetId::LanguagePicker),
        };
        OverlayDescriptor {
            kind: self,
            owned_focusable,
        }
    }
}

/// 弹窗描述：类型 + 打开时需要聚焦的控件
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayDescriptor {
    pub kind: OverlayKind,
    pub owned_focusable: Option<WidgetId>,
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct OverlayState {
    /// 当前活动的弹窗
    active: Option<OverlayKind>,
}

impl OverlayState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 打开弹窗，覆盖当前弹窗
    pub fn open(&mut self, kind: OverlayKind) -> OverlayDescriptor {
        self.active = Some(kind);
        kind.descriptor()
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 当前弹窗类型
    pub fn active(&self) -> Option<OverlayKind> {
        self.active
    }
}
