//! CLI 导出流程（读取 → 抽取 → 生成 → 保存）

use crate::error::{IdiomError, Result};
use dialoguer::Confirm;
use idiom_slides_common::{Action, AppShell, LayoutConfig, Outcome};
use rand::Rng;
use std::path::{Path, PathBuf};

/// 输出为目录（或无扩展名）时，在其中创建 `<title>.pptx`
pub fn output_path_for(output: &Path, title: &str) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("{}.pptx", title))
    } else {
        output.to_path_buf()
    }
}

/// 目标文件已存在时确认是否覆盖
pub fn confirm_overwrite(path: &Path, assume_yes: bool) -> Result<()> {
    if assume_yes || !path.exists() {
        return Ok(());
    }
    let overwrite = Confirm::new()
        .with_prompt(format!("{} 已存在，是否覆盖?", path.display()))
        .default(false)
        .interact()
        .map_err(|e| IdiomError::Prompt(e.to_string()))?;
    if overwrite {
        Ok(())
    } else {
        Err(IdiomError::Cancelled(path.display().to_string()))
    }
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportReport {
    pub path: PathBuf,
    pub loaded: usize,
    pub samples: Vec<String>,
}

/// 读取 CSV、随机选取并写出演示文稿
pub fn run_export<R: Rng + ?Sized>(
    csv: &Path,
    output: &Path,
    layout: LayoutConfig,
    title: &str,
    rng: &mut R,
) -> Result<ExportReport> {
    let mut shell = AppShell::new(layout).with_title(title);

    let loaded = match shell.dispatch(Action::Load(csv.to_path_buf()), rng)? {
        Outcome::Loaded { count } => count,
        _ => 0,
    };
    println!("✔ 已加载 {} 个成语", loaded);

    shell.dispatch(Action::Sample, rng)?;
    println!("✔ 已选取 {} 个成语", shell.samples().len());

    shell.dispatch(Action::Export(output.to_path_buf()), rng)?;

    Ok(ExportReport {
        path: output.to_path_buf(),
        loaded,
        samples: shell.samples().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_output_path_directory() {
        let dir = tempdir().unwrap();
        let path = output_path_for(dir.path(), "成语幻灯片");
        assert_eq!(path, dir.path().join("成语幻灯片.pptx"));
    }

    #[test]
    fn test_output_path_file() {
        let path = output_path_for(Path::new("out/idioms.pptx"), "成语幻灯片");
        assert_eq!(path, PathBuf::from("out/idioms.pptx"));
    }

    #[test]
    fn test_output_path_without_extension() {
        let path = output_path_for(Path::new("slides"), "三年级");
        assert_eq!(path, PathBuf::from("slides").join("三年级.pptx"));
    }

    #[test]
    fn test_confirm_skipped_when_missing_or_forced() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("new.pptx");
        assert!(confirm_overwrite(&missing, false).is_ok());

        let existing = dir.path().join("old.pptx");
        std::fs::write(&existing, b"x").unwrap();
        assert!(confirm_overwrite(&existing, true).is_ok());
    }
}
