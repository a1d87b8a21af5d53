//! PPTX 包写出（ZIP）

use super::pptx_core::{escape_xml, Presentation};
use super::template::*;
use crate::error::{Error, Result};
use crate::layout::{SLIDE_HEIGHT_EMU, SLIDE_WIDTH_EMU};
use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

/// 幻灯片 ID 从 256 开始
const FIRST_SLIDE_ID: usize = 256;

impl Presentation {
    /// 写出到内存
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let cursor = self.write_package(Cursor::new(Vec::new()))?;
        Ok(cursor.into_inner())
    }

    /// 保存为 .pptx 文件
    pub fn save(&self, path: &Path) -> Result<()> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, bytes).map_err(|e| Error::file_write(path, e))?;

        tracing::info!(path = %path.display(), slides = self.slide_count(), "presentation saved");
        Ok(())
    }

    fn write_package<W: Write + Seek>(&self, writer: W) -> Result<W> {
        let mut package = ZipWriter::new(writer);

        let mut add = |name: &str, content: &str| -> Result<()> {
            let options =
                SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
            package.start_file(name, options).map_err(zip_err)?;
            package.write_all(content.as_bytes())?;
            Ok(())
        };

        add("[Content_Types].xml", &self.content_types_xml()?)?;
        add("_rels/.rels", ROOT_RELS_XML)?;
        add("docProps/core.xml", &self.core_properties_xml()?)?;
        add("docProps/app.xml", &self.app_properties_xml()?)?;
        add("ppt/presentation.xml", &self.presentation_xml()?)?;
        add("ppt/_rels/presentation.xml.rels", &self.presentation_rels_xml()?)?;
        add("ppt/slideMasters/slideMaster1.xml", SLIDE_MASTER_XML)?;
        add("ppt/slideMasters/_rels/slideMaster1.xml.rels", SLIDE_MASTER_RELS_XML)?;
        add("ppt/slideLayouts/slideLayout1.xml", SLIDE_LAYOUT_XML)?;
        add("ppt/slideLayouts/_rels/slideLayout1.xml.rels", SLIDE_LAYOUT_RELS_XML)?;
        add("ppt/theme/theme1.xml", THEME_XML)?;

        for (index, slide) in self.slides.iter().enumerate() {
            let number = index + 1;
            add(&format!("ppt/slides/slide{}.xml", number), &slide.to_xml()?)?;
            add(&format!("ppt/slides/_rels/slide{}.xml.rels", number), SLIDE_RELS_XML)?;
        }

        package.finish().map_err(zip_err)
    }

    fn content_types_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(2048);
        xml.push_str(XML_DECLARATION);
        xml.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
        xml.push_str(r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
        xml.push_str(r#"<Default Extension="xml" ContentType="application/xml"/>"#);

        let fixed = [
            ("/ppt/presentation.xml", CT_PRESENTATION),
            ("/ppt/slideMasters/slideMaster1.xml", CT_SLIDE_MASTER),
            ("/ppt/slideLayouts/slideLayout1.xml", CT_SLIDE_LAYOUT),
            ("/ppt/theme/theme1.xml", CT_THEME),
            ("/docProps/core.xml", CT_CORE_PROPERTIES),
            ("/docProps/app.xml", CT_EXTENDED_PROPERTIES),
        ];
        for (part, content_type) in fixed {
            write!(xml, r#"<Override PartName="{}" ContentType="{}"/>"#, part, content_type)
                .map_err(fmt_err)?;
        }
        for number in 1..=self.slides.len() {
            write!(
                xml,
                r#"<Override PartName="/ppt/slides/slide{}.xml" ContentType="{}"/>"#,
                number, CT_SLIDE
            )
            .map_err(fmt_err)?;
        }

        xml.push_str("</Types>");
        Ok(xml)
    }

    /// presentation.xml
    ///
    /// rId1 = 母版, rId2.. = 幻灯片, 最后 = 主题
    fn presentation_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(XML_DECLARATION);
        write!(
            xml,
            r#"<p:presentation xmlns:a="{}" xmlns:r="{}" xmlns:p="{}" saveSubsetFonts="1">"#,
            NS_A, NS_R, NS_P
        )
        .map_err(fmt_err)?;

        xml.push_str(r#"<p:sldMasterIdLst><p:sldMasterId id="2147483648" r:id="rId1"/></p:sldMasterIdLst>"#);

        if !self.slides.is_empty() {
            xml.push_str("<p:sldIdLst>");
            for index in 0..self.slides.len() {
                write!(
                    xml,
                    r#"<p:sldId id="{}" r:id="rId{}"/>"#,
                    FIRST_SLIDE_ID + index,
                    index + 2
                )
                .map_err(fmt_err)?;
            }
            xml.push_str("</p:sldIdLst>");
        }

        write!(
            xml,
            r#"<p:sldSz cx="{}" cy="{}" type="screen4x3"/>"#,
            SLIDE_WIDTH_EMU, SLIDE_HEIGHT_EMU
        )
        .map_err(fmt_err)?;
        xml.push_str(r#"<p:notesSz cx="6858000" cy="9144000"/>"#);
        xml.push_str("</p:presentation>");
        Ok(xml)
    }

    fn presentation_rels_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(1024);
        xml.push_str(XML_DECLARATION);
        write!(xml, r#"<Relationships xmlns="{}">"#, NS_PKG_RELS).map_err(fmt_err)?;
        write!(
            xml,
            r#"<Relationship Id="rId1" Type="{}" Target="slideMasters/slideMaster1.xml"/>"#,
            REL_SLIDE_MASTER
        )
        .map_err(fmt_err)?;
        for index in 0..self.slides.len() {
            write!(
                xml,
                r#"<Relationship Id="rId{}" Type="{}" Target="slides/slide{}.xml"/>"#,
                index + 2,
                REL_SLIDE,
                index + 1
            )
            .map_err(fmt_err)?;
        }
        write!(
            xml,
            r#"<Relationship Id="rId{}" Type="{}" Target="theme/theme1.xml"/>"#,
            self.slides.len() + 2,
            REL_THEME
        )
        .map_err(fmt_err)?;
        xml.push_str("</Relationships>");
        Ok(xml)
    }

    fn core_properties_xml(&self) -> Result<String> {
        let created = self.created.format("%Y-%m-%dT%H:%M:%SZ");
        let mut xml = String::with_capacity(768);
        xml.push_str(XML_DECLARATION);
        xml.push_str(concat!(
            r#"<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" "#,
            r#"xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" "#,
            r#"xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">"#
        ));
        write!(xml, "<dc:title>{}</dc:title>", escape_xml(&self.title)).map_err(fmt_err)?;
        write!(
            xml,
            r#"<dcterms:created xsi:type="dcterms:W3CDTF">{0}</dcterms:created><dcterms:modified xsi:type="dcterms:W3CDTF">{0}</dcterms:modified>"#,
            created
        )
        .map_err(fmt_err)?;
        xml.push_str("</cp:coreProperties>");
        Ok(xml)
    }

    fn app_properties_xml(&self) -> Result<String> {
        let mut xml = String::with_capacity(512);
        xml.push_str(XML_DECLARATION);
        xml.push_str(r#"<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties">"#);
        xml.push_str("<Application>idiom-slides</Application>");
        write!(xml, "<Slides>{}</Slides>", self.slides.len()).map_err(fmt_err)?;
        xml.push_str("</Properties>");
        Ok(xml)
    }
}

fn zip_err(e: zip::result::ZipError) -> Error {
    Error::Render(format!("ZIP 写出错误: {}", e))
}

fn fmt_err(e: std::fmt::Error) -> Error {
    Error::Render(e.to_string())
}

#[cfg(test)]
mod tests {
    use crate::export::pptx_core::build;
    use crate::error::Error;
    use std::io::{Cursor, Read};

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut file = archive.by_name(name).unwrap();
        let mut content = String::new();
        file.read_to_string(&mut content).unwrap();
        content
    }

    #[test]
    fn test_package_parts() {
        let items = vec!["画蛇添足".to_string(), "守株待兔".to_string()];
        let bytes = build(&items, 150, 720, 200, 180, 0, "Kai").unwrap().to_bytes().unwrap();

        let archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for required in [
            "[Content_Types].xml",
            "_rels/.rels",
            "ppt/presentation.xml",
            "ppt/slides/slide1.xml",
            "ppt/slides/slide2.xml",
            "ppt/theme/theme1.xml",
        ] {
            assert!(names.contains(&required), "缺少部件: {}", required);
        }
        assert!(!names.contains(&"ppt/slides/slide3.xml"));

        let content_types = read_part(&bytes, "[Content_Types].xml");
        assert!(content_types.contains("/ppt/slides/slide2.xml"));

        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(presentation.contains(r#"<p:sldId id="257" r:id="rId3"/>"#));

        let rels = read_part(&bytes, "ppt/_rels/presentation.xml.rels");
        assert!(rels.contains(r#"Id="rId4""#));
        assert!(rels.contains("theme/theme1.xml"));

        let app = read_part(&bytes, "docProps/app.xml");
        assert!(app.contains("<Slides>2</Slides>"));
    }

    #[test]
    fn test_zero_slide_package() {
        let bytes = build(&[], 150, 720, 200, 180, 0, "Kai").unwrap().to_bytes().unwrap();
        let presentation = read_part(&bytes, "ppt/presentation.xml");
        assert!(!presentation.contains("sldIdLst"));
    }

    #[test]
    fn test_title_in_core_properties() {
        let bytes = build(&[], 150, 720, 200, 180, 0, "Kai")
            .unwrap()
            .with_title("三年级 & 成语")
            .to_bytes()
            .unwrap();
        let core = read_part(&bytes, "docProps/core.xml");
        assert!(core.contains("<dc:title>三年级 &amp; 成语</dc:title>"));
    }

    #[test]
    fn test_save_to_missing_dir_is_file_write_error() {
        let presentation = build(&[], 150, 720, 200, 180, 0, "Kai").unwrap();
        let result = presentation.save(std::path::Path::new("/nonexistent/dir/out.pptx"));
        assert!(matches!(result, Err(Error::FileWrite { .. })));
    }
}
