use clap::{Args, Parser, Subcommand};
use idiom_slides_common::LayoutConfig;
use std::path::PathBuf;

/// 输入框上限（2^31 - 1）
const MAX_INPUT: i64 = i32::MAX as i64;

#[derive(Parser)]
#[command(name = "idiom-slides")]
#[command(about = "成语PPT生成工具", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 输出详细日志
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// 版式设置JSON文件
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 读取CSV并显示成语列表
    Load {
        /// CSV文件
        #[arg(required = true)]
        csv: PathBuf,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// 从CSV中随机选取成语
    Sample {
        /// CSV文件
        #[arg(required = true)]
        csv: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        /// 成语数量
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
        count: Option<u32>,

        /// 随机种子（指定后结果可复现）
        #[arg(long)]
        seed: Option<u64>,
    },

    /// 读取、随机选取、导出PPTX
    Export {
        /// CSV文件
        #[arg(required = true)]
        csv: PathBuf,

        /// 输出文件/目录
        #[arg(short, long, required = true)]
        output: PathBuf,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        layout: LayoutArgs,

        /// 成语数量
        #[arg(short, long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
        count: Option<u32>,

        /// 随机种子
        #[arg(long)]
        seed: Option<u64>,

        /// 文稿标题（输出为目录时也作为文件名）
        #[arg(short, long, default_value = "成语幻灯片")]
        title: String,

        /// 不询问直接覆盖已有文件
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// 显示PPTX中每页的文本
    Inspect {
        /// PPTX文件
        #[arg(required = true)]
        pptx: PathBuf,
    },

    /// 显示当前版式设置
    Config {
        /// 以JSON显示
        #[arg(long)]
        show: bool,
    },
}

/// 读取位置
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// 起始阅读行号
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub start_row: Option<u32>,

    /// 数据源列号
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub start_column: Option<u32>,
}

/// 幻灯片版式
#[derive(Args, Clone, Debug, Default)]
pub struct LayoutArgs {
    /// 字体
    #[arg(long)]
    pub font: Option<String>,

    /// 字体大小（pt）
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub font_size: Option<u32>,

    /// 文本框宽度（pt）
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub width: Option<u32>,

    /// 文本框高度（pt）
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub height: Option<u32>,

    /// 文本上间距（pt）
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub top: Option<u32>,

    /// 文本左间距（pt）
    #[arg(long, value_parser = clap::value_parser!(u32).range(0..=MAX_INPUT))]
    pub left: Option<u32>,
}

impl SourceArgs {
    pub fn apply(&self, layout: &mut LayoutConfig) {
        if let Some(row) = self.start_row {
            layout.start_row = row;
        }
        if let Some(column) = self.start_column {
            layout.start_column = column;
        }
    }
}

impl LayoutArgs {
    pub fn apply(&self, layout: &mut LayoutConfig) {
        if let Some(font) = &self.font {
            layout.font_name = font.clone();
        }
        let overrides = [
            (self.font_size, &mut layout.font_size),
            (self.width, &mut layout.box_width),
            (self.height, &mut layout.box_height),
            (self.top, &mut layout.box_top),
            (self.left, &mut layout.box_left),
        ];
        for (value, field) in overrides {
            if let Some(value) = value {
                *field = value;
            }
        }
    }
}
