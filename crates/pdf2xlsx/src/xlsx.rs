//! Spreadsheet output.
//!
//! [`XlsxWriter`] produces a minimal single-sheet workbook: the OPC package
//! parts plus one worksheet. There is no header row, no index column and no
//! styling. Cells are written as:
//!
//! - numbers as numeric cells (`NaN` is left empty, infinities become text),
//! - text as inline strings,
//! - absent values are omitted.

use std::fmt::Write as FmtWrite;
use std::io::{Cursor, Write};
use std::path::Path;

use pdf2xlsx_core::{CellValue, Grid, Number, format_float};
use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::Result;

/// Sink for the final grid.
pub trait SpreadsheetWriter {
    /// Serialize `grid` to the file at `path`, replacing it if present.
    fn write(&self, grid: &Grid, path: &Path) -> Result<()>;
}

/// Writes `.xlsx` workbooks.
#[derive(Debug, Clone)]
pub struct XlsxWriter {
    sheet_name: String,
}

impl Default for XlsxWriter {
    fn default() -> Self {
        Self {
            sheet_name: "Sheet1".to_string(),
        }
    }
}

impl XlsxWriter {
    /// Create a writer using a custom worksheet name.
    pub fn with_sheet_name(name: impl Into<String>) -> Self {
        Self {
            sheet_name: name.into(),
        }
    }

    /// The worksheet name.
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Build the workbook archive in memory.
    pub fn to_bytes(&self, grid: &Grid) -> Result<Vec<u8>> {
        let parts = [
            ("[Content_Types].xml", content_types_xml()),
            ("_rels/.rels", root_rels_xml()),
            ("xl/workbook.xml", workbook_xml(&self.sheet_name)),
            ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
            ("xl/styles.xml", styles_xml()),
            ("xl/worksheets/sheet1.xml", worksheet_xml(grid)),
        ];

        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        for (name, body) in parts {
            zip.start_file(name, options)?;
            zip.write_all(body.as_bytes())?;
        }
        Ok(zip.finish()?.into_inner())
    }
}

impl SpreadsheetWriter for XlsxWriter {
    fn write(&self, grid: &Grid, path: &Path) -> Result<()> {
        let bytes = self.to_bytes(grid)?;
        std::fs::write(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote workbook");
        Ok(())
    }
}

/// Spreadsheet column name for a 0-indexed column (`0` → `A`, `26` → `AA`).
pub fn column_name(index: usize) -> String {
    let mut n = index + 1;
    let mut name = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        name.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

/// Escape text for XML content and attributes.
///
/// Characters XML 1.0 cannot carry (most C0 controls) are dropped.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            '\t' | '\n' | '\r' => out.push(ch),
            c if (c as u32) < 0x20 => {}
            c => out.push(c),
        }
    }
    out
}

fn inline_string(xml: &mut String, cell_ref: &str, text: &str) {
    let preserve = text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace);
    let space = if preserve { r#" xml:space="preserve""# } else { "" };
    let _ = write!(
        xml,
        r#"<c r="{cell_ref}" t="inlineStr"><is><t{space}>{}</t></is></c>"#,
        escape_xml(text)
    );
}

fn write_cell(xml: &mut String, cell_ref: &str, value: &CellValue) {
    match value {
        CellValue::Absent => {}
        CellValue::Number(Number::Int(i)) => {
            let _ = write!(xml, r#"<c r="{cell_ref}"><v>{i}</v></c>"#);
        }
        CellValue::Number(Number::Float(f)) if f.is_nan() => {}
        CellValue::Number(Number::Float(f)) if f.is_infinite() => {
            inline_string(xml, cell_ref, &format_float(*f));
        }
        CellValue::Number(Number::Float(f)) => {
            let _ = write!(xml, r#"<c r="{cell_ref}"><v>{}</v></c>"#, format_float(*f));
        }
        CellValue::Text(text) => inline_string(xml, cell_ref, text),
    }
}

fn worksheet_xml(grid: &Grid) -> String {
    let mut xml = String::with_capacity(256 + grid.height() * grid.width() * 32);
    xml.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    xml.push('\n');
    xml.push_str(r#"<worksheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">"#);

    if grid.width() > 0 && !grid.is_empty() {
        let _ = write!(
            xml,
            r#"<dimension ref="A1:{}{}"/>"#,
            column_name(grid.width() - 1),
            grid.height()
        );
    }

    xml.push_str("<sheetData>");
    for (r, row) in grid.rows().iter().enumerate() {
        if row.iter().all(CellValue::is_absent) {
            continue;
        }
        let row_num = r + 1;
        let _ = write!(xml, r#"<row r="{row_num}">"#);
        for (c, value) in row.iter().enumerate() {
            let cell_ref = format!("{}{row_num}", column_name(c));
            write_cell(&mut xml, &cell_ref, value);
        }
        xml.push_str("</row>");
    }
    xml.push_str("</sheetData></worksheet>");
    xml
}

fn content_types_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
<Default Extension="xml" ContentType="application/xml"/>
<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>
<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>
<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>
</Types>"#
        .to_string()
}

fn root_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="xl/workbook.xml"/>
</Relationships>"#
        .to_string()
}

fn workbook_xml(sheet_name: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<workbook xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main" xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">
<sheets>
<sheet name="{}" sheetId="1" r:id="rId1"/>
</sheets>
</workbook>"#,
        escape_xml(sheet_name)
    )
}

fn workbook_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet" Target="worksheets/sheet1.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
</Relationships>"#
        .to_string()
}

fn styles_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<styleSheet xmlns="http://schemas.openxmlformats.org/spreadsheetml/2006/main">
<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>
<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>
<borders count="1"><border/></borders>
<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>
<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>
</styleSheet>"#
        .to_string()
}
