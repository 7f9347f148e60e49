//! Column sizing for the users table.

use egui_extras::Column;

/// Initial widths, one per entry of `USER_COLUMNS`.
const INITIAL_WIDTHS: [f32; 8] = [
    160.0, // name
    200.0, // email
    170.0, // phone
    110.0, // username
    120.0, // website
    120.0, // city
    90.0,  // latitude
    90.0,  // longitude
];

pub const MIN_COLUMN_WIDTH: f32 = 60.0;
pub const ROW_HEIGHT: f32 = 24.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Table column configuration, resizable, with the last column filling the rest.
#[inline]
pub fn table_columns() -> Vec<Column> {
    let last = INITIAL_WIDTHS.len() - 1;
    INITIAL_WIDTHS
        .iter()
        .enumerate()
        .map(|(index, &width)| {
            if index == last {
                Column::remainder().at_least(width)
            } else {
                Column::initial(width)
                    .at_least(MIN_COLUMN_WIDTH)
                    .resizable(true)
            }
        })
        .collect()
}
