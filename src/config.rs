//! 版式设置的分层加载
//!
//! 默认值 → JSON 文件 → 命令行参数。程序本身从不写入设置文件。

use crate::error::{IdiomError, Result};
use idiom_slides_common::LayoutConfig;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "layout.json";

/// 读取版式设置
///
/// `explicit` 指定时文件必须存在；否则读取默认位置，不存在则使用内置默认值。
pub fn load_layout(explicit: Option<&Path>) -> Result<LayoutConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                return Err(IdiomError::Config(format!(
                    "找不到配置文件: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => match default_config_path() {
            Some(path) if path.exists() => path,
            _ => return Ok(LayoutConfig::default()),
        },
    };

    tracing::debug!(path = %path.display(), "loading layout config");
    let content = std::fs::read_to_string(&path)?;
    let layout: LayoutConfig = serde_json::from_str(&content)?;
    Ok(layout.clamped())
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("idiom-slides").join(CONFIG_FILE_NAME))
}
