// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::utils::serde_helpers::null_as_default;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// 配置加载错误
#[derive(Error, Debug)]
pub enum SettingsError {
    /// 配置文件无法打开或读取
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// 配置文件不是合法的 YAML
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// 应用程序配置设置
///
/// 启动时加载一次，运行期间只读。缺失的键保持为空字符串，不做默认值替换。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 请求基金接口时使用的 User-Agent
    #[serde(rename = "UserAgent", deserialize_with = "null_as_default")]
    pub user_agent: String,
    /// SQLite 数据库文件路径
    #[serde(rename = "Database", deserialize_with = "null_as_default")]
    pub database: String,
    /// Slack Incoming Webhook 地址
    #[serde(rename = "SlackWebhookURL", deserialize_with = "null_as_default")]
    pub slack_webhook_url: String,
}

impl Settings {
    /// 从 YAML 文件加载配置
    ///
    /// # 参数
    ///
    /// * `path` - 配置文件路径
    ///
    /// # 返回值
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(SettingsError)` - 文件读取或解析失败
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&content)
    }

    /// 从 YAML 文本解析配置，空文档视为全部键缺失
    pub fn from_yaml(content: &str) -> Result<Self, SettingsError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }
}
