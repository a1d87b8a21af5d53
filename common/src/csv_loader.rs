//! CSV 读取模块
//!
//! 从指定行开始读取 CSV 的某一列，返回去除首尾空白后的非空单元格。

use crate::error::{Error, Result};
use csv::ReaderBuilder;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: char = '\u{feff}';

/// 读取 CSV 文件中指定列的成语
///
/// # Arguments
/// * `path` - CSV 文件路径
/// * `start_row` - 起始行号（从1开始，0 视同 1）
/// * `start_column` - 列号（从1开始，0 不对应任何列）
pub fn load(path: &Path, start_row: u32, start_column: u32) -> Result<Vec<String>> {
    let file = std::fs::File::open(path).map_err(|e| Error::file_read(path, e))?;
    let items = collect_column(file, start_row, start_column)
        .map_err(|e| Error::file_read(path, e))?;

    tracing::debug!(path = %path.display(), count = items.len(), "loaded csv column");
    Ok(items)
}

/// 从任意读取源读取指定列（测试、标准输入用）
pub fn load_from_reader<R: Read>(reader: R, start_row: u32, start_column: u32) -> Result<Vec<String>> {
    collect_column(reader, start_row, start_column).map_err(|e| Error::file_read("<reader>", e))
}

fn collect_column<R: Read>(
    mut reader: R,
    start_row: u32,
    start_column: u32,
) -> std::result::Result<Vec<String>, csv::Error> {
    let mut content = Vec::new();
    reader.read_to_end(&mut content)?;

    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_slice());

    let Some(column) = (start_column as usize).checked_sub(1) else {
        // 第0列不存在，但仍然校验整个文件是否可读
        for record in csv_reader.records() {
            record?;
        }
        return Ok(Vec::new());
    };
    let first_row = u64::from(start_row.max(1));

    let mut items = Vec::new();
    for (index, record) in csv_reader.records().enumerate() {
        let record = record?;
        let row = record
            .position()
            .map(|p| physical_line(&content, p))
            .unwrap_or(index as u64 + 1);
        if row < first_row {
            continue;
        }
        let Some(cell) = record.get(column) else {
            continue;
        };
        let cell = if index == 0 { cell.trim_start_matches(UTF8_BOM) } else { cell };
        let value = cell.trim();
        if !value.is_empty() {
            items.push(value.to_string());
        }
    }

    Ok(items)
}

/// 记录实际所在的行号（从1开始）
///
/// csv 记录的位置取在前面的空行之前，这里跳过这些换行符后再计数。
fn physical_line(content: &[u8], position: &csv::Position) -> u64 {
    let start = (position.byte() as usize).min(content.len());
    let skipped = &content[start..];
    let blank = skipped
        .iter()
        .position(|b| *b != b'\n' && *b != b'\r')
        .unwrap_or(skipped.len());
    position.line() + count_line_breaks(&skipped[..blank])
}

/// `\n`、`\r\n`、单独的 `\r` 各算一次换行
fn count_line_breaks(bytes: &[u8]) -> u64 {
    let mut count = 0;
    let mut iter = bytes.iter().peekable();
    while let Some(b) = iter.next() {
        match b {
            b'\n' => count += 1,
            b'\r' => {
                iter.next_if_eq(&&b'\n');
                count += 1;
            }
            _ => {}
        }
    }
    count
}
