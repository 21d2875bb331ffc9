use anyhow::Context;
use rust_xlsxwriter::Workbook;

use crate::domain::page_result::PageResult;

const COLUMNS: [(&str, f64); 6] = [
    ("Page (URL)", 50.0),
    ("Header Partner ID", 30.0),
    ("Footer Partner ID", 30.0),
    ("Header", 30.0),
    ("Footer", 30.0),
    ("Site (Category)", 20.0),
];

/// Encodes the scanned rows into an xlsx workbook with a single
/// `Footprints` worksheet, one row per page in input order.
pub fn build_workbook(results: &[PageResult]) -> anyhow::Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Footprints")?;

    for (col, (title, width)) in COLUMNS.into_iter().enumerate() {
        let col = col as u16;
        worksheet.set_column_width(col, width)?;
        worksheet.write_string(0, col, title)?;
    }

    for (i, result) in results.iter().enumerate() {
        let row = (i + 1) as u32;
        worksheet.write_string(row, 0, &result.link)?;
        worksheet.write_string(row, 1, &result.header_partner_id)?;
        worksheet.write_string(row, 2, &result.footer_partner_id)?;
        worksheet.write_string(row, 3, &result.header_footprint)?;
        worksheet.write_string(row, 4, &result.footer_footprint)?;
        worksheet.write_string(row, 5, result.category.as_str())?;
    }

    workbook
        .save_to_buffer()
        .context("Failed to encode the footprint workbook")
}
