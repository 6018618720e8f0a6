//! Workbook serialization.
//!
//! Writes the in-memory [`Workbook`] as an xlsx document using
//! `rust_xlsxwriter`. Formulas are stored as formulas; the consuming
//! spreadsheet application evaluates them when the file is opened.

use rust_xlsxwriter::{Format, Formula, Worksheet};

use crate::error::TimesheetResult;
use crate::models::{CellValue, Sheet, Workbook};

/// Rows written in bold: the employee name and the column headers.
const BOLD_ROWS: [u32; 2] = [1, 2];

/// Serializes a workbook to xlsx bytes.
///
/// # Errors
///
/// Returns [`crate::error::TimesheetError::Export`] if the writer rejects a
/// sheet name or cell, or fails to assemble the container.
pub fn export_xlsx(workbook: &Workbook) -> TimesheetResult<Vec<u8>> {
    let mut book = rust_xlsxwriter::Workbook::new();
    let bold = Format::new().set_bold();

    for sheet in workbook.sheets() {
        let worksheet = book.add_worksheet();
        worksheet.set_name(sheet.name())?;
        write_cells(worksheet, sheet, &bold)?;
    }

    Ok(book.save_to_buffer()?)
}

fn write_cells(worksheet: &mut Worksheet, sheet: &Sheet, bold: &Format) -> TimesheetResult<()> {
    for (row, col, value) in sheet.cells() {
        // rust_xlsxwriter rows are zero-based
        let row_index = row - 1;
        match value {
            CellValue::Text(text) if BOLD_ROWS.contains(&row) => {
                worksheet.write_string_with_format(row_index, col, text, bold)?;
            }
            CellValue::Text(text) => {
                worksheet.write_string(row_index, col, text)?;
            }
            CellValue::Number(number) => {
                worksheet.write_number(row_index, col, *number)?;
            }
            CellValue::Formula(formula) => {
                worksheet.write_formula(row_index, col, Formula::new(formula))?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimesheetError;

    const ZIP_SIGNATURE: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

    #[test]
    fn test_export_produces_zip_container() {
        let mut workbook = Workbook::new();
        let sheet = workbook.create_sheet("Alice").unwrap();
        sheet.set(0, 1, CellValue::text("Alice"));
        sheet.set(1, 3, CellValue::Number(3.25));
        sheet.set(1, 4, CellValue::formula("=SUM(B3:B3)"));
        workbook.remove_placeholder().unwrap();

        let bytes = export_xlsx(&workbook).unwrap();
        assert!(bytes.len() > 100, "xlsx output suspiciously small");
        assert_eq!(&bytes[0..4], &ZIP_SIGNATURE);
    }

    #[test]
    fn test_export_places_cells_at_model_positions() {
        use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
        use std::io::Cursor;

        let mut workbook = Workbook::new();
        for name in ["Zed", "Amy"] {
            let sheet = workbook.create_sheet(name).unwrap();
            sheet.set(0, 1, CellValue::text(name));
            sheet.set(4, 3, CellValue::Number(2.5));
            sheet.set(4, 6, CellValue::formula("=SUM(E3:E4)"));
        }
        workbook.remove_placeholder().unwrap();

        let bytes = export_xlsx(&workbook).unwrap();
        let mut xlsx: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();

        assert_eq!(xlsx.sheet_names(), vec!["Zed", "Amy"]);
        let values = xlsx.worksheet_range("Amy").unwrap();
        assert_eq!(values.get_value((0, 0)), Some(&Data::String("Amy".to_string())));
        assert_eq!(values.get_value((2, 4)), Some(&Data::Float(2.5)));
        let formulas = xlsx.worksheet_formula("Amy").unwrap();
        assert_eq!(formulas.get_value((5, 4)).map(String::as_str), Some("SUM(E3:E4)"));
    }

    #[test]
    fn test_export_rejects_invalid_sheet_name() {
        let mut workbook = Workbook::new();
        workbook.create_sheet("bad/name").unwrap();
        workbook.remove_placeholder().unwrap();

        let result = export_xlsx(&workbook);
        assert!(matches!(result, Err(TimesheetError::Export { .. })));
    }
}
