//! 应用状态机
//!
//! 桌面端和 CLI 只负责派发动作与显示状态，业务逻辑全部在这里。
//!
//! 状态: `Empty → Loaded → Sampled → Exported`，任何状态都可以重新加载、
//! 重新抽取或再次导出。

use crate::csv_loader;
use crate::error::Result;
use crate::export;
use crate::layout::LayoutConfig;
use crate::sampler;
use rand::Rng;
use std::path::{Path, PathBuf};

/// 未加载时的占位文本
pub const NOT_LOADED_LABEL: &str = "(未加载)";

/// 导出成功提示
pub const EXPORT_NOTICE: &str = "成语幻灯片导出成功";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Empty,
    Loaded,
    Sampled,
    Exported,
}

/// 用户动作
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// 加载 CSV
    Load(PathBuf),
    /// 随机选取
    Sample,
    /// 导出 PPTX
    Export(PathBuf),
}

/// 动作结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Loaded { count: usize },
    Sampled { count: usize },
    /// 成语列表为空，未做任何改变
    Unchanged,
    Exported { path: PathBuf, slides: usize },
}

impl Outcome {
    /// 需要弹窗提示的消息
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            Outcome::Exported { .. } => Some(EXPORT_NOTICE),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppShell {
    pub layout: LayoutConfig,
    items: Vec<String>,
    samples: Vec<String>,
    loaded_path: Option<PathBuf>,
    phase: Phase,
    title: Option<String>,
}

impl AppShell {
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// 文稿标题（docProps/core.xml）
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    pub fn loaded_path(&self) -> Option<&Path> {
        self.loaded_path.as_deref()
    }

    /// 已加载文件的显示文本
    pub fn loaded_label(&self) -> String {
        self.loaded_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| NOT_LOADED_LABEL.to_string())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// 派发动作。失败时状态保持不变。
    pub fn dispatch<R: Rng + ?Sized>(&mut self, action: Action, rng: &mut R) -> Result<Outcome> {
        match action {
            Action::Load(path) => self.load(&path),
            Action::Sample => Ok(self.sample(rng)),
            Action::Export(path) => self.export(&path),
        }
    }

    /// 加载 CSV，替换成语列表。已选取列表保持不变。
    pub fn load(&mut self, path: &Path) -> Result<Outcome> {
        let items = csv_loader::load(path, self.layout.start_row, self.layout.start_column)?;
        let count = items.len();

        self.items = items;
        self.loaded_path = Some(path.to_path_buf());
        self.phase = Phase::Loaded;

        tracing::debug!(path = %path.display(), count, "items loaded");
        Ok(Outcome::Loaded { count })
    }

    /// 随机选取。成语列表为空时什么都不做。
    pub fn sample<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Outcome {
        if self.items.is_empty() {
            return Outcome::Unchanged;
        }
        self.samples = sampler::sample(&self.items, self.layout.sample_count, rng);
        self.phase = Phase::Sampled;
        tracing::debug!(count = self.samples.len(), "items sampled");
        Outcome::Sampled {
            count: self.samples.len(),
        }
    }

    /// 用当前选取结果生成并保存演示文稿（选取为空时得到0页文稿）
    pub fn export(&mut self, path: &Path) -> Result<Outcome> {
        let mut presentation = export::build_with_layout(&self.samples, &self.layout)?;
        if let Some(title) = &self.title {
            presentation = presentation.with_title(title.clone());
        }
        presentation.save(path)?;

        self.phase = Phase::Exported;
        Ok(Outcome::Exported {
            path: path.to_path_buf(),
            slides: presentation.slide_count(),
        })
    }
}
