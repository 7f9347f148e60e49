//! User records as served by the users endpoint.
//!
//! Records are decoded leniently: unknown fields are ignored and a missing
//! display field decodes to an empty string. Once fetched a record is never
//! mutated; the whole collection is replaced instead.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque user identifier.
///
/// The endpoint serves numeric ids, but nothing here relies on that, so both
/// JSON strings and JSON numbers decode into their textual form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for UserId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(serde_json::Number),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(text) => Self(text),
            RawId::Number(number) => Self(number.to_string()),
        })
    }
}

/// Geographic coordinates, kept string-encoded exactly as received.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geo {
    pub lat: String,
    pub lng: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    pub city: String,
    pub geo: Geo,
}

/// A fetched person with contact and geo-location fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub username: String,
    pub website: String,
    pub address: Address,
}

impl User {
    /// Reads a string field by its dotted accessor path, e.g. `address.geo.lat`.
    ///
    /// Returns `None` when the path does not name a string field.
    pub fn field(&self, accessor: &str) -> Option<&str> {
        let value = match accessor {
            "id" => self.id.as_str(),
            "name" => &self.name,
            "email" => &self.email,
            "phone" => &self.phone,
            "username" => &self.username,
            "website" => &self.website,
            "address.city" => &self.address.city,
            "address.geo.lat" => &self.address.geo.lat,
            "address.geo.lng" => &self.address.geo.lng,
            _ => return None,
        };
        Some(value)
    }
}
