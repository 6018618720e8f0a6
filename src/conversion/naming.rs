//! Sheet name assignment.
//!
//! Employee names go into sheet tabs, which have stricter rules than cell
//! text. [`SheetNamer`] maps every employee name to a valid, unique tab name
//! in a deterministic way.

use std::collections::HashSet;

use tracing::warn;

/// Longest sheet name the output format accepts.
pub const MAX_SHEET_NAME_LEN: usize = 31;

/// Name used for an employee whose name is empty after cleanup.
pub const UNNAMED_SHEET: &str = "Unnamed";

const FORBIDDEN_CHARS: [char; 7] = ['[', ']', ':', '*', '?', '/', '\\'];

/// Replaces forbidden characters, strips edge apostrophes, and truncates.
///
/// ```
/// use timesheet_formatter::conversion::sanitize_sheet_name;
///
/// assert_eq!(sanitize_sheet_name("Night/Shift: Bob"), "Night_Shift_ Bob");
/// assert_eq!(sanitize_sheet_name("'quoted'"), "quoted");
/// assert_eq!(sanitize_sheet_name(""), "Unnamed");
/// ```
pub fn sanitize_sheet_name(name: &str) -> String {
    let replaced: String = name
        .chars()
        .map(|c| if FORBIDDEN_CHARS.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = replaced.trim_matches('\'');
    let truncated: String = trimmed.chars().take(MAX_SHEET_NAME_LEN).collect();
    let cleaned = truncated.trim_end_matches('\'');

    if cleaned.is_empty() {
        UNNAMED_SHEET.to_string()
    } else {
        cleaned.to_string()
    }
}

/// Assigns unique sheet names in call order.
///
/// Names that collide case-insensitively after sanitising get a ` (2)`,
/// ` (3)`, ... suffix, with the base shortened to keep the length limit.
#[derive(Debug, Default)]
pub struct SheetNamer {
    used: HashSet<String>,
}

impl SheetNamer {
    /// Creates a namer with no names taken.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the sheet name for the next employee.
    ///
    /// ```
    /// use timesheet_formatter::conversion::SheetNamer;
    ///
    /// let mut namer = SheetNamer::new();
    /// assert_eq!(namer.assign("Alice"), "Alice");
    /// assert_eq!(namer.assign("alice"), "alice (2)");
    /// ```
    pub fn assign(&mut self, employee_name: &str) -> String {
        let base = sanitize_sheet_name(employee_name);
        let mut candidate = base.clone();
        let mut counter = 2u32;

        while self.used.contains(&candidate.to_lowercase()) {
            let suffix = format!(" ({})", counter);
            let room = MAX_SHEET_NAME_LEN - suffix.chars().count();
            let stem: String = base.chars().take(room).collect();
            candidate = format!("{}{}", stem, suffix);
            counter += 1;
        }

        if candidate != employee_name {
            warn!(employee = %employee_name, sheet = %candidate, "Adjusted sheet name");
        }

        self.used.insert(candidate.to_lowercase());
        candidate
    }
}
