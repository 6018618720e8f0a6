//! Cell addressing.

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Maps a zero-based column and a 1-based row to an address such as `"C5"`.
///
/// Columns use a single letter chosen by `col % 26`, so column 26 aliases
/// back to `A`. Sheets written by this crate keep every addressed column
/// below 26; layouts that would exceed it are logged when written.
///
/// ```
/// use timesheet_formatter::conversion::cell_address;
///
/// assert_eq!(cell_address(0, 1), "A1");
/// assert_eq!(cell_address(2, 5), "C5");
/// assert_eq!(cell_address(26, 1), "A1");
/// ```
pub fn cell_address(col: u16, row: u32) -> String {
    let letter = ALPHABET[usize::from(col) % ALPHABET.len()] as char;
    format!("{}{}", letter, row)
}

/// Formats a single-column range between two rows, e.g. `"F3:F4"`.
pub fn column_range(col: u16, first_row: u32, last_row: u32) -> String {
    format!(
        "{}:{}",
        cell_address(col, first_row),
        cell_address(col, last_row)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_first_and_last_letters() {
        assert_eq!(cell_address(0, 1), "A1");
        assert_eq!(cell_address(25, 1), "Z1");
    }

    #[test]
    fn test_wraparound_past_z() {
        assert_eq!(cell_address(26, 1), "A1");
        assert_eq!(cell_address(27, 10), "B10");
    }

    #[test]
    fn test_column_range() {
        assert_eq!(column_range(5, 3, 4), "F3:F4");
    }

    proptest! {
        #[test]
        fn prop_address_repeats_every_26_columns(col in 0u16..2000, row in 1u32..100_000) {
            prop_assert_eq!(cell_address(col, row), cell_address(col % 26, row));
        }

        #[test]
        fn prop_address_is_letter_then_row(col in 0u16..26, row in 1u32..1_000_000) {
            let address = cell_address(col, row);
            let (letter, digits) = address.split_at(1);
            prop_assert!(letter.chars().all(|c| c.is_ascii_uppercase()));
            prop_assert_eq!(digits.parse::<u32>().unwrap(), row);
        }
    }
}
