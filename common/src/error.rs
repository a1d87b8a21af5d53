//! 错误类型定义

use std::path::PathBuf;
use thiserror::Error;

/// 公共错误类型
#[derive(Error, Debug)]
pub enum Error {
    /// CSV 文件无法读取或不是合法的分隔文本
    #[error("File read error ({path}): {message}")]
    FileRead { path: PathBuf, message: String },

    /// 演示文稿无法写入目标路径
    #[error("File write error ({path}): {message}")]
    FileWrite { path: PathBuf, message: String },

    /// 文档格式拒绝了某个参数
    #[error("Render error: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

impl Error {
    pub(crate) fn file_read(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::FileRead {
            path: path.into(),
            message: message.to_string(),
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Error::FileWrite {
            path: path.into(),
            message: message.to_string(),
        }
    }
}

/// Result型别名
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_file_read() {
        let error = Error::file_read("idioms.csv", "stream did not contain valid UTF-8");
        let display = format!("{}", error);
        assert!(display.contains("File read error"));
        assert!(display.contains("idioms.csv"));
        assert!(display.contains("valid UTF-8"));
    }

    #[test]
    fn test_error_display_file_write() {
        let error = Error::file_write("/readonly/out.pptx", "permission denied");
        let display = format!("{}", error);
        assert!(display.starts_with("File write error"));
        assert!(display.contains("out.pptx"));
    }

    #[test]
    fn test_error_display_render() {
        let error = Error::Render("字号超出范围".to_string());
        assert_eq!(format!("{}", error), "Render error: 字号超出范围");
    }

    #[test]
    fn test_file_read_keeps_path() {
        let path = std::path::Path::new("/data/成语.csv");
        let Error::FileRead { path: stored, message } = Error::file_read(path, "bad record") else {
            panic!("不是 FileRead");
        };
        assert_eq!(stored, path);
        assert_eq!(message, "bad record");
    }

    #[test]
    fn test_file_write_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let error = Error::file_write(PathBuf::from("out.pptx"), io_error);
        assert!(matches!(
            &error,
            Error::FileWrite { path, message } if path == &PathBuf::from("out.pptx") && message == "access denied"
        ));
    }

    #[test]
    fn test_csv_error_maps_to_file_read() {
        let csv_error = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&[0xff_u8, b'\n'][..])
            .records()
            .next()
            .unwrap()
            .unwrap_err();
        let display = format!("{}", Error::file_read("<reader>", csv_error));
        assert!(display.starts_with("File read error (<reader>)"));
    }
}
