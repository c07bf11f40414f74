use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque district identifier: either a district number or a name / GEOID.
/// Names keep their original text, including leading zeros ("027").
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictId {
    Number(i64),
    Name(String),
}

impl From<i64> for DistrictId {
    fn from(value: i64) -> Self { DistrictId::Number(value) }
}

impl From<&str> for DistrictId {
    fn from(value: &str) -> Self { DistrictId::Name(value.to_owned()) }
}

impl From<String> for DistrictId {
    fn from(value: String) -> Self { DistrictId::Name(value) }
}

impl fmt::Display for DistrictId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistrictId::Number(n) => write!(f, "{n}"),
            DistrictId::Name(name) => f.write_str(name),
        }
    }
}
