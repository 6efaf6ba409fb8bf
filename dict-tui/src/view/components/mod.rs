//! 界面组件

pub mod overlay;
pub mod statusbar;
