//! 版式设置模块
//!
//! pt 基准的版式定义。幻灯片尺寸沿用 4:3 默认模板（720pt × 540pt），
//! 文本框几何参数与字号都以 pt 为单位输入，导出时换算为 EMU。

use serde::{Deserialize, Serialize};

// ============================================
// 单位换算
// ============================================

/// 1pt = 12700 EMU
pub const EMU_PER_PT: i64 = 12_700;

/// 幻灯片尺寸（pt）
pub const SLIDE_WIDTH_PT: u32 = 720;
pub const SLIDE_HEIGHT_PT: u32 = 540;

/// 幻灯片尺寸（EMU）
pub const SLIDE_WIDTH_EMU: i64 = SLIDE_WIDTH_PT as i64 * EMU_PER_PT; // 9144000
pub const SLIDE_HEIGHT_EMU: i64 = SLIDE_HEIGHT_PT as i64 * EMU_PER_PT; // 6858000

/// 输入框上限（2^31 - 1）
pub const MAX_INPUT: u32 = i32::MAX as u32;

// ============================================
// 默认值
// ============================================

pub const DEFAULT_SAMPLE_COUNT: u32 = 20;
pub const DEFAULT_FONT_NAME: &str = "Kai";
pub const DEFAULT_START_ROW: u32 = 1;
pub const DEFAULT_START_COLUMN: u32 = 1;
pub const DEFAULT_FONT_SIZE: u32 = 150;
pub const DEFAULT_BOX_WIDTH: u32 = 720;
pub const DEFAULT_BOX_HEIGHT: u32 = 200;
pub const DEFAULT_BOX_TOP: u32 = 180;
pub const DEFAULT_BOX_LEFT: u32 = 0;

// ============================================
// 版式设置结构体
// ============================================

/// 导出版式设置
///
/// 各字段互相独立，不做交叉校验，只把数值限制在 `[0, 2^31-1]`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LayoutConfig {
    /// 随机抽取数量
    pub sample_count: u32,
    /// 字体名
    pub font_name: String,
    /// 起始读取行号（从1开始）
    pub start_row: u32,
    /// 数据源列号（从1开始）
    pub start_column: u32,
    /// 字号（pt）
    pub font_size: u32,
    /// 文本框宽度（pt）
    pub box_width: u32,
    /// 文本框高度（pt）
    pub box_height: u32,
    /// 文本上间距（pt）
    pub box_top: u32,
    /// 文本左间距（pt）
    pub box_left: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            font_name: DEFAULT_FONT_NAME.to_string(),
            start_row: DEFAULT_START_ROW,
            start_column: DEFAULT_START_COLUMN,
            font_size: DEFAULT_FONT_SIZE,
            box_width: DEFAULT_BOX_WIDTH,
            box_height: DEFAULT_BOX_HEIGHT,
            box_top: DEFAULT_BOX_TOP,
            box_left: DEFAULT_BOX_LEFT,
        }
    }
}

impl LayoutConfig {
    /// 把所有数值字段限制在输入范围内
    pub fn clamped(mut self) -> Self {
        for value in [
            &mut self.sample_count,
            &mut self.start_row,
            &mut self.start_column,
            &mut self.font_size,
            &mut self.box_width,
            &mut self.box_height,
            &mut self.box_top,
            &mut self.box_left,
        ] {
            *value = clamp_input(*value);
        }
        self
    }

    /// 文本框几何参数
    pub fn text_box(&self) -> TextBoxGeometry {
        TextBoxGeometry {
            left: self.box_left,
            top: self.box_top,
            width: self.box_width,
            height: self.box_height,
        }
    }
}

/// 文本框位置与尺寸（pt）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBoxGeometry {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

// ============================================
// 辅助函数
// ============================================

#[inline]
pub fn clamp_input(value: u32) -> u32 {
    value.min(MAX_INPUT)
}

/// pt → EMU 换算
#[inline]
pub fn pt_to_emu(pt: u32) -> i64 {
    i64::from(pt) * EMU_PER_PT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.sample_count, 20);
        assert_eq!(config.font_name, "Kai");
        assert_eq!(config.start_row, 1);
        assert_eq!(config.start_column, 1);
        assert_eq!(config.font_size, 150);
        assert_eq!(config.box_width, 720);
        assert_eq!(config.box_height, 200);
        assert_eq!(config.box_top, 180);
        assert_eq!(config.box_left, 0);
    }

    #[test]
    fn test_slide_size() {
        assert_eq!(SLIDE_WIDTH_EMU, 9_144_000);
        assert_eq!(SLIDE_HEIGHT_EMU, 6_858_000);
        // 默认文本框宽度正好等于幻灯片宽度
        assert_eq!(pt_to_emu(DEFAULT_BOX_WIDTH), SLIDE_WIDTH_EMU);
    }

    #[test]
    fn test_clamped() {
        let config = LayoutConfig {
            sample_count: u32::MAX,
            box_left: MAX_INPUT,
            ..Default::default()
        }
        .clamped();
        assert_eq!(config.sample_count, MAX_INPUT);
        assert_eq!(config.box_left, MAX_INPUT);
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"sampleCount": 5, "fontName": "SimSun"}"#).unwrap();
        assert_eq!(config.sample_count, 5);
        assert_eq!(config.font_name, "SimSun");
        assert_eq!(config.font_size, DEFAULT_FONT_SIZE);
        assert_eq!(config.box_top, DEFAULT_BOX_TOP);
    }

    #[test]
    fn test_text_box_geometry() {
        let geometry = LayoutConfig::default().text_box();
        assert_eq!(geometry.left, 0);
        assert_eq!(geometry.top, 180);
        assert_eq!(geometry.width, 720);
        assert_eq!(geometry.height, 200);
    }
}
