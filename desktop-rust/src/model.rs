use idiom_slides_common::{AppShell, LayoutConfig};

pub const WINDOW_TITLE: &str = "成语PPT生成系统 IdiomUI";

pub const LOAD_BUTTON: &str = "加载成语文件 (.csv)";
pub const SAMPLE_BUTTON: &str = "随机选取";
pub const EXPORT_BUTTON: &str = "导出 (.pptx)";

/// 字体下拉框的候选（也可以直接输入）
pub const FONT_CHOICES: &[&str] = &[
    "Kai",
    "KaiTi",
    "STKaiti",
    "SimSun",
    "SimHei",
    "FangSong",
    "Microsoft YaHei",
    "Noto Serif CJK SC",
];

pub const DEFAULT_FILE_NAME: &str = "成语幻灯片.pptx";

pub fn about_text() -> String {
    format!("{} Version {}", WINDOW_TITLE, env!("CARGO_PKG_VERSION"))
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub shell: AppShell,
    pub status: String,
}

impl AppState {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            shell: AppShell::new(layout),
            status: String::new(),
        }
    }
}
