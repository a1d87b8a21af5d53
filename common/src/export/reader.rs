//! PPTX 读回
//!
//! 按演示顺序取出每页幻灯片中各形状的文本，用于 `inspect` 命令和往返校验。

use crate::error::{Error, Result};
use quick_xml::events::Event;
use quick_xml::Reader;
use std::collections::HashMap;
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// 每页幻灯片的文本框文本（段落之间以换行连接）
pub fn read_slide_texts(path: &Path) -> Result<Vec<Vec<String>>> {
    let file = std::fs::File::open(path).map_err(|e| Error::file_read(path, e))?;
    read_package(file).map_err(|e| Error::file_read(path, e))
}

pub fn read_slide_texts_from_bytes(bytes: &[u8]) -> Result<Vec<Vec<String>>> {
    read_package(Cursor::new(bytes)).map_err(|e| Error::file_read("<memory>", e))
}

fn read_package<R: Read + Seek>(reader: R) -> std::result::Result<Vec<Vec<String>>, String> {
    let mut archive = ZipArchive::new(reader).map_err(|e| e.to_string())?;

    let presentation = read_part(&mut archive, "ppt/presentation.xml")?;
    let rels = read_part(&mut archive, "ppt/_rels/presentation.xml.rels")?;
    let targets = relationship_targets(&rels)?;

    let mut slides = Vec::new();
    for rel_id in slide_rel_ids(&presentation)? {
        let target = targets
            .get(&rel_id)
            .ok_or_else(|| format!("未找到关系: {}", rel_id))?;
        let part_name = format!("ppt/{}", target.trim_start_matches('/').trim_start_matches("ppt/"));
        let slide_xml = read_part(&mut archive, &part_name)?;
        slides.push(shape_texts(&slide_xml)?);
    }

    Ok(slides)
}

fn read_part<R: Read + Seek>(
    archive: &mut ZipArchive<R>,
    name: &str,
) -> std::result::Result<String, String> {
    let mut file = archive
        .by_name(name)
        .map_err(|e| format!("{}: {}", name, e))?;
    let mut content = String::new();
    file.read_to_string(&mut content)
        .map_err(|e| format!("{}: {}", name, e))?;
    Ok(content)
}

/// presentation.xml 中 sldIdLst 的顺序
fn slide_rel_ids(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"sldId" => {
                if let Some(attr) = e.try_get_attribute("r:id").map_err(|e| e.to_string())? {
                    let value = attr.unescape_value().map_err(|e| e.to_string())?;
                    ids.push(value.into_owned());
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(ids)
}

/// 关系 ID → Target
fn relationship_targets(xml: &str) -> std::result::Result<HashMap<String, String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut targets = HashMap::new();

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == b"Relationship" => {
                let id = e.try_get_attribute("Id").map_err(|e| e.to_string())?;
                let target = e.try_get_attribute("Target").map_err(|e| e.to_string())?;
                if let (Some(id), Some(target)) = (id, target) {
                    targets.insert(
                        id.unescape_value().map_err(|e| e.to_string())?.into_owned(),
                        target.unescape_value().map_err(|e| e.to_string())?.into_owned(),
                    );
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(targets)
}

/// 一页幻灯片中每个 `p:sp` 的文本
fn shape_texts(xml: &str) -> std::result::Result<Vec<String>, String> {
    let mut reader = Reader::from_str(xml);
    let mut shapes = Vec::new();
    let mut current: Option<Vec<String>> = None;
    let mut in_text = false;

    loop {
        match reader.read_event().map_err(|e| e.to_string())? {
            Event::Start(e) => match e.local_name().as_ref() {
                b"sp" => current = Some(Vec::new()),
                b"p" => {
                    if let Some(paragraphs) = current.as_mut() {
                        paragraphs.push(String::new());
                    }
                }
                b"t" => in_text = true,
                _ => {}
            },
            Event::Text(t) if in_text => {
                let text = t.unescape().map_err(|e| e.to_string())?;
                if let Some(paragraph) = current.as_mut().and_then(|p| p.last_mut()) {
                    paragraph.push_str(&text);
                }
            }
            Event::End(e) => match e.local_name().as_ref() {
                b"t" => in_text = false,
                b"sp" => {
                    if let Some(paragraphs) = current.take() {
                        shapes.push(paragraphs.join("\n"));
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::pptx_core::build;

    #[test]
    fn test_round_trip() {
        let items: Vec<String> = ["画蛇添足", "守株待兔", "A & <B>"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let bytes = build(&items, 150, 720, 200, 180, 0, "Kai").unwrap().to_bytes().unwrap();

        let slides = read_slide_texts_from_bytes(&bytes).unwrap();
        assert_eq!(slides.len(), 3);
        for (slide, item) in slides.iter().zip(&items) {
            assert_eq!(slide, &vec![item.clone()]);
        }
    }

    #[test]
    fn test_zero_slides() {
        let bytes = build(&[], 150, 720, 200, 180, 0, "Kai").unwrap().to_bytes().unwrap();
        assert!(read_slide_texts_from_bytes(&bytes).unwrap().is_empty());
    }

    #[test]
    fn test_not_a_package() {
        let result = read_slide_texts_from_bytes(b"not a zip file");
        assert!(matches!(result, Err(Error::FileRead { .. })));
    }

    #[test]
    fn test_multi_paragraph_shape() {
        let xml = r#"<p:sld xmlns:p="p" xmlns:a="a"><p:cSld><p:spTree>
            <p:sp><p:txBody><a:p><a:r><a:t>一</a:t></a:r><a:r><a:t>二</a:t></a:r></a:p><a:p><a:r><a:t>三</a:t></a:r></a:p></p:txBody></p:sp>
            <p:sp><p:txBody><a:p/></p:txBody></p:sp>
            </p:spTree></p:cSld></p:sld>"#;
        let texts = shape_texts(xml).unwrap();
        assert_eq!(texts, vec!["一二\n三".to_string(), String::new()]);
    }
}
