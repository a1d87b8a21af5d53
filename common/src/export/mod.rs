//! PPTX 导出核心，CLI 与桌面端共用。

pub mod package;
pub mod pptx_core;
pub mod reader;
pub mod template;

pub use pptx_core::{build, build_with_layout, Presentation, Slide, TextBox};
pub use reader::{read_slide_texts, read_slide_texts_from_bytes};
