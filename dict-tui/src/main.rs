//! main.rs
//! dict 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     Cli::parse()                // 解析命令行参数
//!     resolve_data_path()         // 确定数据目录（默认 ~/.dict）
//!     init_logging()              // 日志写入 <data-path>/dict.log
//!     LocalConfigService::load()  // 读取 settings.json，失败时使用默认值
//!     App::from_config()          // 创建 APP 实例
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use dict_tui::app;
use dict_tui::backend::{resolve_data_path, AppConfig, ConfigService, LocalConfigService};
use dict_tui::model::App;
use dict_tui::util::{init_logging, init_terminal, merge_exit, restore_terminal};

#[derive(Parser)]
#[command(
    name = "dict",
    version,
    about = "Terminal dictionary with switchable panels and keyboard-driven overlays"
)]
struct Cli {
    #[arg(long, global = true, help = "Data directory (default: ~/.dict)")]
    data_path: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug)")]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Start the interactive application
    App,
    /// Start with the Meaning panel pre-filled
    Meaning {
        /// Word to look up
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. 数据目录与日志
    let data_path = resolve_data_path(cli.data_path)?;
    init_logging(&data_path, cli.verbose)?;

    // 2. 读取配置
    let config = match LocalConfigService::new(&data_path).load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default settings: {e}");
            AppConfig::default()
        }
    };

    // 3. 创建应用实例
    let mut app = App::from_config(&config);
    if let Some(Command::Meaning { word }) = cli.command {
        log::info!("Starting with word: {word}");
        app.set_meaning_word(word);
    }

    // 4. 运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    let restored = restore_terminal(&mut terminal);

    merge_exit(result, restored)
}
