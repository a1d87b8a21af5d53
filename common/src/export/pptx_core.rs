//! PPTX 生成核心
//!
//! 每个成语一页幻灯片，每页只放一个文本框。

use super::template::{NS_A, NS_P, NS_R, XML_DECLARATION};
use crate::error::{Error, Result};
use crate::layout::{pt_to_emu, LayoutConfig, TextBoxGeometry};
use chrono::{DateTime, Utc};
use std::fmt::Write as FmtWrite;

/// ST_TextFontSize 的范围（百分之一 pt）
const MIN_FONT_SIZE_CENTI_PT: u32 = 100;
const MAX_FONT_SIZE_CENTI_PT: u32 = 400_000;

/// ST_Coordinate / ST_PositiveCoordinate 的上限（EMU）
const MAX_COORDINATE_EMU: i64 = 27_273_042_316_900;

const DEFAULT_TITLE: &str = "成语幻灯片";

/// 文本框（EMU 单位）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBox {
    pub text: String,
    pub left_emu: i64,
    pub top_emu: i64,
    pub width_emu: i64,
    pub height_emu: i64,
    pub font_name: String,
    /// 百分之一 pt
    pub font_size: u32,
}

/// 一页幻灯片
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub text_box: TextBox,
}

/// 可写出的演示文稿
#[derive(Debug, Clone)]
pub struct Presentation {
    pub(crate) slides: Vec<Slide>,
    pub(crate) title: String,
    pub(crate) created: DateTime<Utc>,
}

/// 按给定版式生成演示文稿
///
/// # Arguments
/// * `items` - 成语列表（可为空，得到0页的文稿）
/// * `font_size` - 字号（pt）
/// * `box_width` / `box_height` - 文本框尺寸（pt）
/// * `box_top` / `box_left` - 文本框位置（pt）
/// * `font_name` - 字体名（不检查是否已安装）
pub fn build(
    items: &[String],
    font_size: u32,
    box_width: u32,
    box_height: u32,
    box_top: u32,
    box_left: u32,
    font_name: &str,
) -> Result<Presentation> {
    let geometry = TextBoxGeometry {
        left: box_left,
        top: box_top,
        width: box_width,
        height: box_height,
    };
    build_slides(items, font_size, geometry, font_name)
}

/// `LayoutConfig` 版本
pub fn build_with_layout(items: &[String], layout: &LayoutConfig) -> Result<Presentation> {
    build_slides(items, layout.font_size, layout.text_box(), &layout.font_name)
}

fn build_slides(
    items: &[String],
    font_size: u32,
    geometry: TextBoxGeometry,
    font_name: &str,
) -> Result<Presentation> {
    let font_size = font_size_to_centi_pt(font_size)?;
    let left_emu = coordinate("左间距", geometry.left)?;
    let top_emu = coordinate("上间距", geometry.top)?;
    let width_emu = coordinate("宽度", geometry.width)?;
    let height_emu = coordinate("高度", geometry.height)?;
    xml_text("字体名", font_name)?;
    for text in items {
        xml_text("成语", text)?;
    }

    let slides = items
        .iter()
        .map(|text| Slide {
            text_box: TextBox {
                text: text.clone(),
                left_emu,
                top_emu,
                width_emu,
                height_emu,
                font_name: font_name.to_string(),
                font_size,
            },
        })
        .collect();

    Ok(Presentation {
        slides,
        title: DEFAULT_TITLE.to_string(),
        created: Utc::now(),
    })
}

/// XML 1.0 不允许的字符无法写入文档
fn xml_text(label: &str, value: &str) -> Result<()> {
    match value.chars().find(|c| !is_xml_char(*c)) {
        Some(c) => Err(Error::Render(format!(
            "{}含有 XML 不允许的字符 U+{:04X}: {:?}",
            label, c as u32, value
        ))),
        None => Ok(()),
    }
}

fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

fn font_size_to_centi_pt(font_size: u32) -> Result<u32> {
    let centi = font_size.saturating_mul(100);
    if !(MIN_FONT_SIZE_CENTI_PT..=MAX_FONT_SIZE_CENTI_PT).contains(&centi) {
        return Err(Error::Render(format!(
            "字号必须在 1～4000 pt 之间: {}",
            font_size
        )));
    }
    Ok(centi)
}

fn coordinate(name: &str, pt: u32) -> Result<i64> {
    let emu = pt_to_emu(pt);
    if emu > MAX_COORDINATE_EMU {
        return Err(Error::Render(format!("文本框{}超出范围: {} pt", name, pt)));
    }
    Ok(emu)
}

impl Presentation {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// 各页文本（按页序）
    pub fn texts(&self) -> Vec<&str> {
        self.slides.iter().map(|s| s.text_box.text.as_str()).collect()
    }
}

impl Slide {
    /// slideN.xml
    pub(crate) fn to_xml(&self) -> Result<String> {
        let tb = &self.text_box;
        let font = escape_xml(&tb.font_name);
        let mut xml = String::with_capacity(1024);

        xml.push_str(XML_DECLARATION);
        write!(
            xml,
            r#"<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">"#,
            NS_A, NS_R, NS_P
        )
        .map_err(render_err)?;
        xml.push_str("<p:cSld><p:spTree>");
        xml.push_str(r#"<p:nvGrpSpPr><p:cNvPr id="1" name=""/><p:cNvGrpSpPr/><p:nvPr/></p:nvGrpSpPr>"#);
        xml.push_str(r#"<p:grpSpPr><a:xfrm><a:off x="0" y="0"/><a:ext cx="0" cy="0"/><a:chOff x="0" y="0"/><a:chExt cx="0" cy="0"/></a:xfrm></p:grpSpPr>"#);

        xml.push_str("<p:sp>");
        xml.push_str(r#"<p:nvSpPr><p:cNvPr id="2" name="TextBox 1"/><p:cNvSpPr txBox="1"/><p:nvPr/></p:nvSpPr>"#);
        xml.push_str("<p:spPr><a:xfrm>");
        write!(xml, r#"<a:off x="{}" y="{}"/>"#, tb.left_emu, tb.top_emu).map_err(render_err)?;
        write!(xml, r#"<a:ext cx="{}" cy="{}"/>"#, tb.width_emu, tb.height_emu).map_err(render_err)?;
        xml.push_str("</a:xfrm>");
        xml.push_str(r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom><a:noFill/>"#);
        xml.push_str("</p:spPr>");

        xml.push_str("<p:txBody>");
        xml.push_str(r#"<a:bodyPr wrap="square" rtlCol="0"><a:noAutofit/></a:bodyPr>"#);
        xml.push_str("<a:lstStyle/>");
        xml.push_str("<a:p><a:r>");
        write!(xml, r#"<a:rPr lang="zh-CN" altLang="en-US" sz="{}" dirty="0">"#, tb.font_size)
            .map_err(render_err)?;
        write!(xml, r#"<a:latin typeface="{0}"/><a:ea typeface="{0}"/>"#, font).map_err(render_err)?;
        xml.push_str("</a:rPr>");
        write!(xml, "<a:t>{}</a:t>", escape_xml(&tb.text)).map_err(render_err)?;
        xml.push_str("</a:r></a:p>");
        xml.push_str("</p:txBody>");
        xml.push_str("</p:sp>");

        xml.push_str("</p:spTree></p:cSld>");
        xml.push_str("<p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>");
        xml.push_str("</p:sld>");

        Ok(xml)
    }
}

fn render_err(e: std::fmt::Error) -> Error {
    Error::Render(e.to_string())
}

/// XML 特殊字符转义
pub(crate) fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
