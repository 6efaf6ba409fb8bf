//! 配置服务
//!
//! 启动时从 `<data-path>/settings.json` 读取配置，只读不写。

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Deserialize;

use crate::error::{DictError, DictResult};
use crate::i18n::Language;
use crate::model::{LanguagePair, Theme};

/// 配置文件名
pub const SETTINGS_FILE: &str = "settings.json";

/// 默认数据目录名（位于用户主目录下）
const DEFAULT_DATA_DIR: &str = ".dict";

/// 应用配置
///
/// 主题和语言以字符串保存，未知值在读取时给出警告并回落到默认值。
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub theme: Option<String>,
    pub locale: Option<String>,
    pub meaning_pair: Option<LanguagePair>,
    pub translate_pair: Option<LanguagePair>,
}

impl AppConfig {
    /// 解析主题
    pub fn theme(&self) -> Theme {
        match self.theme.as_deref() {
            None => Theme::default(),
            Some(name) => Theme::from_name(name).unwrap_or_else(|| {
                log::warn!("Theme {name} doesn't exist. Ignoring configuration.");
                Theme::default()
            }),
        }
    }

    /// 解析界面语言
    pub fn language(&self) -> Language {
        match self.locale.as_deref() {
            None => Language::default(),
            Some(code) => Language::from_code(code).unwrap_or_else(|| {
                log::warn!("Locale {code} is not supported. Ignoring configuration.");
                Language::default()
            }),
        }
    }
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> DictResult<AppConfig>;
}

/// 本地配置服务
pub struct LocalConfigService {
    data_path: PathBuf,
}

impl LocalConfigService {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
        }
    }

    /// 配置文件路径
    pub fn settings_path(&self) -> PathBuf {
        self.data_path.join(SETTINGS_FILE)
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> DictResult<AppConfig> {
        let path = self.settings_path();
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!(
                    "Failed to load file {}. Using default configuration values.",
                    path.display()
                );
                return Ok(AppConfig::default());
            }
            Err(source) => return Err(DictError::ConfigRead { path, source }),
        };

        serde_json::from_str(&content).map_err(|source| DictError::ConfigParse { path, source })
    }
}

/// 确定数据目录：命令行参数优先，否则为 `~/.dict`；目录不存在时创建
pub fn resolve_data_path(explicit: Option<PathBuf>) -> DictResult<PathBuf> {
    let path = match explicit {
        Some(path) => path,
        None => dirs::home_dir()
            .ok_or(DictError::NoHomeDir)?
            .join(DEFAULT_DATA_DIR),
    };

    fs::create_dir_all(&path).map_err(|source| DictError::DataDir {
        path: path.clone(),
        source,
    })?;

    Ok(path)
}
