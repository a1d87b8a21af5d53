use anyhow::{Context, Result};
use eframe::egui::{self, Color32, RichText};
use eframe::egui::{FontData, FontDefinitions, FontFamily};
use idiom_slides_common::layout::MAX_INPUT;
use idiom_slides_common::{Action, LayoutConfig, Outcome};

use crate::io::{pick_csv, pick_pptx_save, show_error, show_info};
use crate::model::{
    about_text, AppState, DEFAULT_FILE_NAME, EXPORT_BUTTON, FONT_CHOICES, LOAD_BUTTON, SAMPLE_BUTTON,
};

pub struct IdiomApp {
    state: AppState,
}

impl IdiomApp {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            state: AppState::new(layout),
        }
    }

    fn load_csv(&mut self) {
        let Some(path) = pick_csv() else {
            return;
        };
        match self.dispatch(Action::Load(path)) {
            Ok(Outcome::Loaded { count }) => self.state.status = format!("已加载 {count} 个成语"),
            Ok(_) => {}
            Err(err) => self.report_error(err),
        }
    }

    fn sample(&mut self) {
        match self.dispatch(Action::Sample) {
            Ok(Outcome::Sampled { count }) => self.state.status = format!("已选取 {count} 个成语"),
            Ok(_) => self.state.status = "没有可选取的成语".to_string(),
            Err(err) => self.report_error(err),
        }
    }

    fn export(&mut self) {
        let Some(path) = pick_pptx_save(DEFAULT_FILE_NAME) else {
            return;
        };
        match self.dispatch(Action::Export(path)) {
            Ok(outcome) => {
                if let Outcome::Exported { path, slides } = &outcome {
                    self.state.status = format!("{} ({slides}页)", path.display());
                }
                if let Some(notice) = outcome.notice() {
                    show_info(notice);
                }
            }
            Err(err) => self.report_error(err),
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<Outcome> {
        let label = match &action {
            Action::Load(path) => format!("加载失败: {}", path.display()),
            Action::Sample => "选取失败".to_string(),
            Action::Export(path) => format!("导出失败: {}", path.display()),
        };
        self.state
            .shell
            .dispatch(action, &mut rand::thread_rng())
            .context(label)
    }

    fn report_error(&mut self, err: anyhow::Error) {
        let message = format!("{err:#}");
        tracing::warn!(error = %message, "action failed");
        show_error(&message);
        self.state.status = message;
    }

    fn render_settings(&mut self, ui: &mut egui::Ui) {
        let layout = &mut self.state.shell.layout;
        ui.group(|ui| {
            egui::Grid::new("settings")
                .num_columns(2)
                .spacing([12.0, 6.0])
                .show(ui, |ui| {
                    number_row(ui, "成语数量:", &mut layout.sample_count);

                    ui.label("字体：");
                    font_picker(ui, &mut layout.font_name);
                    ui.end_row();

                    number_row(ui, "起始阅读行号:", &mut layout.start_row);
                    number_row(ui, "数据源列号:", &mut layout.start_column);
                    number_row(ui, "字体大小:", &mut layout.font_size);
                    number_row(ui, "文本框宽度:", &mut layout.box_width);
                    number_row(ui, "文本框高度:", &mut layout.box_height);
                    number_row(ui, "文本上间距:", &mut layout.box_top);
                    number_row(ui, "文本左间距:", &mut layout.box_left);
                });
        });
    }

    fn render_lists(&self, ui: &mut egui::Ui) {
        ui.columns(2, |columns| {
            item_list(&mut columns[0], "loaded_items", "已加载：", self.state.shell.items());
            item_list(&mut columns[1], "selected_items", "已选取：", self.state.shell.samples());
        });
    }
}

impl Default for IdiomApp {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

fn number_row(ui: &mut egui::Ui, label: &str, value: &mut u32) {
    ui.label(label);
    ui.add(egui::DragValue::new(value).clamp_range(0..=MAX_INPUT));
    ui.end_row();
}

fn font_picker(ui: &mut egui::Ui, font_name: &mut String) {
    ui.horizontal(|ui| {
        egui::ComboBox::from_id_source("font_choice")
            .selected_text(font_name.clone())
            .show_ui(ui, |ui| {
                for choice in FONT_CHOICES {
                    ui.selectable_value(font_name, choice.to_string(), *choice);
                }
            });
        ui.add(egui::TextEdit::singleline(font_name).desired_width(140.0));
    });
}

fn item_list(ui: &mut egui::Ui, id: &str, heading: &str, items: &[String]) {
    ui.label(RichText::new(heading).strong());
    ui.label(RichText::new(format!("{} 个", items.len())).color(Color32::from_gray(150)));
    egui::ScrollArea::vertical()
        .id_source(id)
        .auto_shrink([false, false])
        .max_height(260.0)
        .show(ui, |ui| {
            for item in items {
                ui.label(item);
            }
        });
}

pub fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = FontDefinitions::default();
    let candidates = [
        r"C:\Windows\Fonts\simkai.ttf",
        r"C:\Windows\Fonts\msyh.ttc",
        r"C:\Windows\Fonts\simsun.ttc",
        "/System/Library/Fonts/PingFang.ttc",
        "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
        "/usr/share/fonts/truetype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc",
        "/usr/share/fonts/truetype/wqy/wqy-microhei.ttc",
    ];

    for path in candidates {
        if let Ok(data) = std::fs::read(path) {
            tracing::debug!(path, "cjk font loaded");
            fonts.font_data.insert("cjk_fallback".to_string(), FontData::from_owned(data));
            fonts.families
                .entry(FontFamily::Proportional)
                .or_default()
                .insert(0, "cjk_fallback".to_string());
            fonts.families
                .entry(FontFamily::Monospace)
                .or_default()
                .insert(0, "cjk_fallback".to_string());
            ctx.set_fonts(fonts);
            return;
        }
    }
    tracing::warn!("no cjk font found");
}

impl eframe::App for IdiomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("about").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("加载文件:");
                ui.label(self.state.shell.loaded_label());
            });
            if !self.state.status.is_empty() {
                ui.label(RichText::new(&self.state.status).color(Color32::from_gray(170)));
            }
            ui.label(RichText::new(about_text()).size(9.0).color(Color32::from_gray(120)));
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_settings(ui);
            ui.add_space(8.0);
            self.render_lists(ui);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button(LOAD_BUTTON).clicked() {
                    self.load_csv();
                }
                if ui.button(SAMPLE_BUTTON).clicked() {
                    self.sample();
                }
                if ui.button(EXPORT_BUTTON).clicked() {
                    self.export();
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use idiom_slides_common::Phase;

    #[test]
    fn test_default_layout() {
        let app = IdiomApp::default();
        let layout = &app.state.shell.layout;
        assert_eq!(layout.sample_count, 20);
        assert_eq!(layout.font_name, "Kai");
        assert_eq!(app.state.shell.phase(), Phase::Empty);
    }

    #[test]
    fn test_sample_without_items() {
        let mut app = IdiomApp::default();
        app.sample();
        assert_eq!(app.state.status, "没有可选取的成语");
        assert!(app.state.shell.samples().is_empty());
    }

    #[test]
    fn test_load_error_has_context() {
        let mut app = IdiomApp::default();
        let err = app
            .dispatch(Action::Load("/no/such/idioms.csv".into()))
            .unwrap_err();
        assert!(format!("{err:#}").starts_with("加载失败"));
    }
}
