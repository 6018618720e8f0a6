//! Sheet layout models.
//!
//! A [`SheetLayout`] fixes where every part of an employee sheet goes. All
//! positions are a function of the number of kept input columns, the number
//! of rows in the group, and the [`LayoutProfile`]; nothing depends on cell
//! contents.

use serde::{Deserialize, Serialize};

use crate::error::{TimesheetError, TimesheetResult};

/// Number of columns a sheet may use, A through Z.
///
/// Cell addresses are single letters, so anything past Z would alias an
/// earlier column in the generated formulas.
pub const ADDRESSABLE_COLUMNS: usize = 26;

/// Header of the normalized hours column.
pub const HOURS_HEADER: &str = "Hours incl break";

/// Break type value whose hours count as unpaid.
pub const UNPAID_BREAK_TYPE: &str = "Unpaid";

/// Named layout policies for employee sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutProfile {
    /// UNPAID derived by formula from the break type, leave columns, and
    /// Overtime / REG / TOTAL HRS rows.
    #[default]
    Standard,
    /// Like `Standard`, but UNPAID is left blank for manual entry.
    ManualUnpaid,
    /// Leave columns and column sums only.
    LeaveOnly,
}

impl LayoutProfile {
    /// Returns the columns appended after the hours column, in order.
    pub fn extra_columns(self) -> &'static [ExtraColumn] {
        match self {
            LayoutProfile::Standard | LayoutProfile::ManualUnpaid => &[
                ExtraColumn::Unpaid,
                ExtraColumn::Sick,
                ExtraColumn::Pto,
                ExtraColumn::Holiday,
            ],
            LayoutProfile::LeaveOnly => {
                &[ExtraColumn::Sick, ExtraColumn::Pto, ExtraColumn::Holiday]
            }
        }
    }

    /// Returns true if UNPAID cells carry a break-type formula.
    pub fn derives_unpaid(self) -> bool {
        self == LayoutProfile::Standard
    }

    /// Returns true if the Overtime, REG and TOTAL HRS rows are written.
    pub fn has_summary_rows(self) -> bool {
        matches!(self, LayoutProfile::Standard | LayoutProfile::ManualUnpaid)
    }
}

/// A column appended after the input data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraColumn {
    /// Hours worked on unpaid breaks.
    Unpaid,
    /// Sick leave hours.
    Sick,
    /// Paid time off hours.
    Pto,
    /// Holiday hours.
    Holiday,
}

impl ExtraColumn {
    /// Returns the header text for the column.
    pub fn header(self) -> &'static str {
        match self {
            ExtraColumn::Unpaid => "UNPAID",
            ExtraColumn::Sick => "SICK",
            ExtraColumn::Pto => "PTO",
            ExtraColumn::Holiday => "HOLIDAY",
        }
    }
}

/// Fixed positions for one employee sheet.
///
/// Rows are 1-based spreadsheet rows; columns are zero-based.
///
/// # Example
///
/// ```
/// use timesheet_formatter::models::{LayoutProfile, SheetLayout};
///
/// let layout = SheetLayout::new(4, 2, LayoutProfile::Standard).unwrap();
///
/// assert_eq!(layout.header_row(), 2);
/// assert_eq!(layout.last_data_row(), 4);
/// assert_eq!(layout.totals_label_row(), 5);
/// assert_eq!(layout.sums_row(), 6);
/// assert_eq!(layout.hours_col(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetLayout {
    profile: LayoutProfile,
    data_columns: u16,
    row_count: u32,
}

impl SheetLayout {
    /// Creates the layout for `row_count` rows of `data_columns` kept input columns.
    ///
    /// # Errors
    ///
    /// Returns [`TimesheetError::TooManyColumns`] if the data columns plus the
    /// hours and profile columns do not fit in [`ADDRESSABLE_COLUMNS`].
    pub fn new(
        data_columns: usize,
        row_count: usize,
        profile: LayoutProfile,
    ) -> TimesheetResult<Self> {
        let columns = data_columns + 1 + profile.extra_columns().len();
        if columns > ADDRESSABLE_COLUMNS {
            return Err(TimesheetError::TooManyColumns {
                columns,
                max: ADDRESSABLE_COLUMNS,
            });
        }

        Ok(Self {
            profile,
            // Bounded by ADDRESSABLE_COLUMNS above
            data_columns: data_columns as u16,
            row_count: u32::try_from(row_count).unwrap_or(u32::MAX),
        })
    }

    /// Returns the profile this layout was built for.
    pub fn profile(&self) -> LayoutProfile {
        self.profile
    }

    /// Returns the number of data rows.
    pub fn row_count(&self) -> u32 {
        self.row_count
    }

    /// Row holding the employee name.
    pub fn title_row(&self) -> u32 {
        1
    }

    /// Row holding the column headers.
    pub fn header_row(&self) -> u32 {
        2
    }

    /// First data row.
    pub fn first_data_row(&self) -> u32 {
        3
    }

    /// Last data row. Equals `header_row()` when the group is empty.
    pub fn last_data_row(&self) -> u32 {
        self.first_data_row() + self.row_count - 1
    }

    /// Row of the "Totals:" label.
    pub fn totals_label_row(&self) -> u32 {
        self.row_count + 3
    }

    /// Row of the column sums.
    pub fn sums_row(&self) -> u32 {
        self.row_count + 4
    }

    /// Row of the manual overtime entry.
    pub fn overtime_row(&self) -> u32 {
        self.row_count + 5
    }

    /// Row of the regular hours formula.
    pub fn regular_row(&self) -> u32 {
        self.row_count + 6
    }

    /// Row of the total hours formula.
    pub fn total_hours_row(&self) -> u32 {
        self.row_count + 7
    }

    /// Column of the normalized hours, directly after the data columns.
    pub fn hours_col(&self) -> u16 {
        self.data_columns
    }

    /// Column of the labels in the summary rows.
    pub fn label_col(&self) -> u16 {
        self.hours_col().saturating_sub(1)
    }

    /// Column of the values in the summary rows.
    pub fn value_col(&self) -> u16 {
        self.hours_col()
    }

    /// Returns the extra columns with their positions.
    pub fn extra_columns(&self) -> impl Iterator<Item = (ExtraColumn, u16)> + '_ {
        let start = self.hours_col() + 1;
        self.profile
            .extra_columns()
            .iter()
            .zip(start..)
            .map(|(column, index)| (*column, index))
    }

    /// Returns the position of an extra column, if the profile has it.
    pub fn extra_col(&self, column: ExtraColumn) -> Option<u16> {
        self.extra_columns()
            .find(|(c, _)| *c == column)
            .map(|(_, index)| index)
    }

    /// Returns every column that receives a sum, hours first.
    pub fn summed_columns(&self) -> Vec<u16> {
        std::iter::once(self.hours_col())
            .chain(self.extra_columns().map(|(_, index)| index))
            .collect()
    }

    /// Returns the highest column index the layout writes to.
    pub fn last_col(&self) -> u16 {
        self.hours_col() + self.profile.extra_columns().len() as u16
    }
}
