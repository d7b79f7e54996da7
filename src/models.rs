// Data shapes read from `data.json` and posted to the users API.
//
// Values are opaque strings: no email, date or phone validation happens
// here, the server owns that.

use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One record of the input array. Field names on the wire are camelCase
/// (`firstName`, `birthDate`, ...). Missing fields decode as empty strings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: String,
    pub address: Address,
    pub phone: String,
}

/// Postal address owned by its `User`.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
    pub number: String,
}

/// Decode a JSON array of users, keeping input order.
pub fn parse_users(data: &[u8]) -> Result<Vec<User>, LoadError> {
    Ok(serde_json::from_slice(data)?)
}

/// Read the whole file at `path` and decode it with [`parse_users`].
pub fn load_users(path: &Path) -> Result<Vec<User>, LoadError> {
    let data = std::fs::read(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_users(&data)
}
