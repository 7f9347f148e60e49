//! Static column schema for the users table.

use crate::User;

/// Maps a dotted accessor path on [`User`] to a header label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub header: &'static str,
    pub accessor: &'static str,
}

impl ColumnDef {
    pub const fn new(header: &'static str, accessor: &'static str) -> Self {
        Self { header, accessor }
    }

    /// Cell text for `user`, empty when the accessor names no field.
    pub fn cell<'a>(&self, user: &'a User) -> &'a str {
        user.field(self.accessor).unwrap_or_default()
    }
}

/// The eight columns of the users table, in display order.
pub const USER_COLUMNS: [ColumnDef; 8] = [
    ColumnDef::new("name", "name"),
    ColumnDef::new("email", "email"),
    ColumnDef::new("phone", "phone"),
    ColumnDef::new("username", "username"),
    ColumnDef::new("website", "website"),
    ColumnDef::new("city", "address.city"),
    ColumnDef::new("latitude", "address.geo.lat"),
    ColumnDef::new("longitude", "address.geo.lng"),
];
