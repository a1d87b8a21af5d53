use rfd::{FileDialog, MessageButtons, MessageDialog, MessageLevel};
use std::path::PathBuf;

pub fn pick_csv() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("选择 CSV 文件")
        .add_filter("CSV Files", &["csv"])
        .pick_file()
}

pub fn pick_pptx_save(default_name: &str) -> Option<PathBuf> {
    FileDialog::new()
        .set_title("保存文件")
        .add_filter("PPTX Files", &["pptx"])
        .add_filter("All Files", &["*"])
        .set_file_name(default_name)
        .save_file()
        .map(ensure_pptx_extension)
}

/// 保存对话框没有补上扩展名时加上 `.pptx`
pub fn ensure_pptx_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some() {
        path
    } else {
        path.with_extension("pptx")
    }
}

pub fn show_info(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Info)
        .set_title("信息")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}

pub fn show_error(message: &str) {
    MessageDialog::new()
        .set_level(MessageLevel::Error)
        .set_title("错误")
        .set_description(message)
        .set_buttons(MessageButtons::Ok)
        .show();
}
