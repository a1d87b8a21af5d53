use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdiomError {
    #[error("配置错误: {0}")]
    Config(String),

    #[error("交互输入错误: {0}")]
    Prompt(String),

    #[error("已取消: 未覆盖 {0}")]
    Cancelled(String),

    #[error("JSON解析错误: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Common(#[from] idiom_slides_common::Error),
}

pub type Result<T> = std::result::Result<T, IdiomError>;
