//! 终端初始化和清理

use std::io::{self, Stdout};

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

/// 终端类型别名
pub type Term = Terminal<CrosstermBackend<Stdout>>;

/// 初始化终端：原始模式 + 备用屏幕
pub fn init_terminal() -> Result<Term> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    log::debug!("Terminal initialized");
    Ok(terminal)
}

/// 恢复终端
pub fn restore_terminal(terminal: &mut Term) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    log::debug!("Terminal restored");
    Ok(())
}

/// 合并主循环与恢复终端的结果
///
/// 两者都失败时返回恢复终端的错误，主循环的错误写入日志。
pub fn merge_exit(run: Result<()>, restore: Result<()>) -> Result<()> {
    match (run, restore) {
        (run, Ok(())) => run,
        (Ok(()), Err(restore)) => Err(restore),
        (Err(run), Err(restore)) => {
            log::error!("Main loop failed before terminal restore failed: {run:#}");
            Err(restore)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_merge_exit_keeps_run_error() {
        let err = merge_exit(Err(anyhow!("run")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "run");
        assert!(merge_exit(Ok(()), Ok(())).is_ok());
    }

    #[test]
    fn test_merge_exit_prefers_restore_error() {
        let err = merge_exit(Ok(()), Err(anyhow!("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "restore");

        let err = merge_exit(Err(anyhow!("run")), Err(anyhow!("restore"))).unwrap_err();
        assert_eq!(err.to_string(), "restore");
    }
}
