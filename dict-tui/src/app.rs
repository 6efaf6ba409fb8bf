//!
//! app.rs
//! 应用主循环
//!
//! ```text
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出，只会从 false 变为 true
//!     panels: PanelSet {
//!         selected: PanelId::Meaning,                     // 三个面板中选中的一个
//!     },
//!     overlay: OverlayState {
//!         active: None,                                   // 最多一个弹窗
//!     },
//!     focus: Some(WidgetId::MeaningInput),            // 当前接收键盘输入的控件
//!     widgets: Widgets { .. },                        // 所有控件，各自保存编辑状态
//!     dictionaries: Dictionaries { .. },              // 释义 / 翻译面板的语言对
//!
//! }
//!
//!
//! 主循环没有定时器，每读到一个事件才执行一次：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app , f))       // 渲染 UI
//!     if app.should_quit() { break }                  // 检查 APP 是否应该退出
//!     let event = next_event()?;                      // 阻塞等待下一个输入事件
//!     update::dispatch(&mut app , event)              // 路由事件并更新状态
//!
//! }
//!
//! 非按键事件（窗口大小变化等）不会改变状态，只会触发下一轮重绘。
//! ```
//!

use anyhow::Result;

use crate::event;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App) -> Result<()> {
    log::info!("Entering main loop");

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit() {
            break;
        }

        // 3. 阻塞读取事件
        let event = event::next_event()?;

        // 4. 路由事件，更新状态
        let consumed = update::dispatch(app, event);
        log::trace!("Event consumed: {consumed}");
    }

    log::info!("Main loop finished");
    Ok(())
}
