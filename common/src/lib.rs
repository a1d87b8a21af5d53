//! Idiom Slides Common Library
//!
//! CLI与桌面端共用的读取、抽取、导出逻辑

pub mod csv_loader;
pub mod error;
pub mod export;
pub mod layout;
pub mod sampler;
pub mod shell;

pub use error::{Error, Result};
pub use export::{build, build_with_layout, read_slide_texts, Presentation};
pub use layout::LayoutConfig;
pub use shell::{Action, AppShell, Outcome, Phase};
