//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! ```text
//! Util 层提供与业务逻辑无关的基础设施代码：
//! 终端的初始化与恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 日志初始化
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, merge_exit, restore_terminal, Term};
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、箭头键等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容
//!
//!         无论 app::run 成功与否，main.rs 都会先调用 restore_terminal，
//!         再返回结果，否则终端会保持在原始模式。
//!         两者都失败时，merge_exit 把主循环的错误写入日志，返回恢复错误。
//!
//!
//!     日志：
//!         TUI 占用了整个屏幕，日志不能写到 stdout / stderr，
//!         统一写入数据目录下的 dict.log：
//!
//!             <data-path>/dict.log
//!
//!         代码中使用 log 宏（log::info! 等），
//!         由 tracing-subscriber 接收并格式化输出。
//!         级别默认为 warn，可通过 -v / -vv 或 RUST_LOG 调整。
//! ```
//!

mod logging;
mod terminal;

pub use logging::{init_logging, LOG_FILE};
pub use terminal::{init_terminal, merge_exit, restore_terminal, Term};
