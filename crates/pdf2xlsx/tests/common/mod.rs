//! Shared helpers for pdf2xlsx integration tests.

#![allow(dead_code)]

use std::path::Path;

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use lopdf::{Document, Object, Stream, dictionary};

/// Build a single-page PDF with a bordered 3x3 table.
///
/// Columns are 100pt wide and rows 30pt tall, the top-left corner sits at
/// (72, 722) in PDF user space. Cell text is drawn with Helvetica 10pt,
/// 5pt from the left border and 20pt below the top border of its cell.
pub fn pdf_with_table(rows: [[&str; 3]; 3]) -> Vec<u8> {
    single_page_pdf(table_content_stream(rows))
}

fn table_content_stream(rows: [[&str; 3]; 3]) -> Vec<u8> {
    let mut cs = String::from("1 w\n");

    let x0 = 72.0_f64;
    let y_top = 722.0_f64;
    let col_w = 100.0_f64;
    let row_h = 30.0_f64;
    let x1 = x0 + col_w * 3.0;
    let y_bottom = y_top - row_h * 3.0;

    for r in 0..=3 {
        let y = y_top - row_h * r as f64;
        cs.push_str(&format!("{x0} {y} m {x1} {y} l S\n"));
    }
    for c in 0..=3 {
        let x = x0 + col_w * c as f64;
        cs.push_str(&format!("{x} {y_top} m {x} {y_bottom} l S\n"));
    }

    for (r, row) in rows.iter().enumerate() {
        for (c, text) in row.iter().enumerate() {
            let tx = x0 + col_w * c as f64 + 5.0;
            let ty = y_top - row_h * r as f64 - 20.0;
            cs.push_str(&format!("BT /F1 10 Tf {tx} {ty} Td ({text}) Tj ET\n"));
        }
    }

    cs.into_bytes()
}

/// Build a single-page PDF with one line of text and no table.
pub fn pdf_without_table() -> Vec<u8> {
    single_page_pdf(b"BT /F1 12 Tf 72 720 Td (Hello World) Tj ET".to_vec())
}

fn single_page_pdf(content: Vec<u8>) -> Vec<u8> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
    });
    let content_id = doc.add_object(Stream::new(dictionary! {}, content));

    let page_id = doc.add_object(dictionary! {
        "Type" => "Page",
        "Parent" => pages_id,
        "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        "Contents" => content_id,
        "Resources" => dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        },
    });

    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![Object::from(page_id)],
            "Count" => 1i64,
        }),
    );

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buf = Vec::new();
    doc.save_to(&mut buf).unwrap();
    buf
}

/// Read the first worksheet of a workbook.
pub fn read_sheet(path: &Path) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    workbook.worksheet_range("Sheet1").unwrap()
}

/// Value at an absolute (row, col) position, `Data::Empty` if unset.
pub fn cell(range: &Range<Data>, row: u32, col: u32) -> Data {
    range.get_value((row, col)).cloned().unwrap_or(Data::Empty)
}

/// Numeric value at an absolute (row, col) position.
pub fn number(range: &Range<Data>, row: u32, col: u32) -> Option<f64> {
    as_number(&cell(range, row, col))
}

fn as_number(value: &Data) -> Option<f64> {
    match value {
        Data::Float(f) => Some(*f),
        Data::Int(i) => Some(*i as f64),
        _ => None,
    }
}
