//! In-memory workbook model.
//!
//! Sheets hold cells keyed by 1-based row and zero-based column, which is the
//! same convention used by cell addresses. Formulas are stored as their text
//! and are never evaluated here.

use std::collections::BTreeMap;

use crate::error::{TimesheetError, TimesheetResult};

/// Name of the placeholder sheet a new workbook starts with.
pub const DEFAULT_SHEET_NAME: &str = "Sheet";

/// The content of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Literal text.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A formula, including its leading `=`.
    Formula(String),
}

impl CellValue {
    /// Creates a text cell.
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    /// Creates a formula cell.
    pub fn formula(value: impl Into<String>) -> Self {
        CellValue::Formula(value.into())
    }

    /// Interprets a raw input field.
    ///
    /// Empty fields yield `None`. Fields holding a finite number are written as
    /// numbers, everything else as text.
    ///
    /// ```
    /// use timesheet_formatter::models::CellValue;
    ///
    /// assert_eq!(CellValue::from_field("7.5"), Some(CellValue::Number(7.5)));
    /// assert_eq!(CellValue::from_field("3h 15m"), Some(CellValue::text("3h 15m")));
    /// assert_eq!(CellValue::from_field(""), None);
    /// ```
    pub fn from_field(field: &str) -> Option<Self> {
        if field.is_empty() {
            return None;
        }
        match field.trim().parse::<f64>() {
            Ok(number) if number.is_finite() => Some(CellValue::Number(number)),
            _ => Some(CellValue::Text(field.to_string())),
        }
    }

    /// Returns the formula text if this is a formula cell.
    pub fn as_formula(&self) -> Option<&str> {
        match self {
            CellValue::Formula(formula) => Some(formula),
            _ => None,
        }
    }

    /// Returns the text if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// A named sheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    name: String,
    placeholder: bool,
    cells: BTreeMap<(u32, u16), CellValue>,
}

impl Sheet {
    fn new(name: impl Into<String>, placeholder: bool) -> Self {
        Self {
            name: name.into(),
            placeholder,
            cells: BTreeMap::new(),
        }
    }

    /// Returns the sheet name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true for the default sheet a new workbook starts with.
    pub fn is_placeholder(&self) -> bool {
        self.placeholder
    }

    /// Sets the cell at `col` (zero-based) and `row` (1-based).
    pub fn set(&mut self, col: u16, row: u32, value: CellValue) {
        self.cells.insert((row, col), value);
    }

    /// Returns the cell at `col` (zero-based) and `row` (1-based).
    pub fn get(&self, col: u16, row: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Iterates over `(row, col, value)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u16, &CellValue)> {
        self.cells.iter().map(|(&(row, col), value)| (row, col, value))
    }

    /// Returns the highest occupied row, or 0 for an empty sheet.
    pub fn max_row(&self) -> u32 {
        self.cells.keys().map(|(row, _)| *row).max().unwrap_or(0)
    }
}

/// An ordered collection of sheets.
#[derive(Debug, Clone, PartialEq)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    /// Creates a workbook holding only the placeholder sheet.
    pub fn new() -> Self {
        Self {
            sheets: vec![Sheet::new(DEFAULT_SHEET_NAME, true)],
        }
    }

    /// Appends a new empty sheet and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::DuplicateSheetName`] if a non-placeholder sheet
    /// already has this name, compared case-insensitively.
    pub fn create_sheet(&mut self, name: &str) -> TimesheetResult<&mut Sheet> {
        let taken = self
            .sheets
            .iter()
            .any(|s| !s.placeholder && s.name.to_lowercase() == name.to_lowercase());
        if taken {
            return Err(TimesheetError::DuplicateSheetName {
                name: name.to_string(),
            });
        }
        self.sheets.push(Sheet::new(name, false));
        let index = self.sheets.len() - 1;
        Ok(&mut self.sheets[index])
    }

    /// Removes the placeholder sheet.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::NoSheets`] if no other sheet has been added
    /// yet, and [`TimesheetError::SheetNotFound`] if the placeholder is
    /// already gone.
    pub fn remove_placeholder(&mut self) -> TimesheetResult<Sheet> {
        let index = self
            .sheets
            .iter()
            .position(Sheet::is_placeholder)
            .ok_or_else(|| TimesheetError::SheetNotFound {
                name: DEFAULT_SHEET_NAME.to_string(),
            })?;
        if self.sheets.len() == 1 {
            return Err(TimesheetError::NoSheets);
        }
        Ok(self.sheets.remove(index))
    }

    /// Returns the sheets in order.
    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    /// Returns the sheet with the given name.
    pub fn sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Returns the sheet names in order.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(Sheet::name).collect()
    }

    /// Returns the number of sheets.
    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    /// Returns true if the workbook has no sheets.
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}

impl Default for Workbook {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook_has_placeholder() {
        let workbook = Workbook::new();
        assert_eq!(workbook.sheet_names(), vec![DEFAULT_SHEET_NAME]);
        assert!(workbook.sheets()[0].is_placeholder());
    }

    #[test]
    fn test_remove_placeholder_after_adding_sheet() {
        let mut workbook = Workbook::new();
        workbook.create_sheet("Alice").unwrap();
        let removed = workbook.remove_placeholder().unwrap();
        assert!(removed.is_placeholder());
        assert_eq!(workbook.sheet_names(), vec!["Alice"]);
    }

    #[test]
    fn test_remove_placeholder_alone_fails() {
        let mut workbook = Workbook::new();
        assert!(matches!(
            workbook.remove_placeholder(),
            Err(TimesheetError::NoSheets)
        ));
        assert_eq!(workbook.len(), 1);
    }

    #[test]
    fn test_remove_placeholder_twice_fails() {
        let mut workbook = Workbook::new();
        workbook.create_sheet("Alice").unwrap();
        workbook.remove_placeholder().unwrap();
        assert!(matches!(
            workbook.remove_placeholder(),
            Err(TimesheetError::SheetNotFound { .. })
        ));
    }

    #[test]
    fn test_duplicate_sheet_name_rejected_case_insensitively() {
        let mut workbook = Workbook::new();
        workbook.create_sheet("Alice").unwrap();
        assert!(matches!(
            workbook.create_sheet("ALICE"),
            Err(TimesheetError::DuplicateSheetName { .. })
        ));
    }

    #[test]
    fn test_employee_may_share_placeholder_name() {
        let mut workbook = Workbook::new();
        workbook.create_sheet("Sheet").unwrap();
        workbook.remove_placeholder().unwrap();
        assert_eq!(workbook.sheet_names(), vec!["Sheet"]);
        assert!(!workbook.sheets()[0].is_placeholder());
    }

    #[test]
    fn test_cells_iterate_row_major() {
        let mut workbook = Workbook::new();
        let sheet = workbook.create_sheet("Alice").unwrap();
        sheet.set(2, 1, CellValue::text("c"));
        sheet.set(0, 2, CellValue::text("a2"));
        sheet.set(0, 1, CellValue::text("a1"));

        let order: Vec<(u32, u16)> = sheet.cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(order, vec![(1, 0), (1, 2), (2, 0)]);
        assert_eq!(sheet.max_row(), 2);
    }

    #[test]
    fn test_from_field_rejects_non_finite() {
        assert_eq!(CellValue::from_field("inf"), Some(CellValue::text("inf")));
        assert_eq!(CellValue::from_field("NaN"), Some(CellValue::text("NaN")));
    }
}
