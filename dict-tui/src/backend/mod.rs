//!
//! src/backend/mod.rs
//! Backend 层：与终端界面无关的服务
//!
//! 目前只有配置服务：启动时确定数据目录并读取 settings.json。
//! 路由状态机不依赖这一层，配置只在创建 App 时使用一次。
//!

mod config_service;

pub use config_service::{
    resolve_data_path, AppConfig, ConfigService, LocalConfigService, SETTINGS_FILE,
};
