use std::{
    fmt,
    fmt::Display,
    str::FromStr,
};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{
    Deserialize,
    Serialize,
};

use crate::error::Error;

/// An ID for a resource, such as a held item or a species.
///
/// IDs are normalized to lowercase alphanumeric characters, so `"Sitrus Berry"` and
/// `"sitrusberry"` refer to the same resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Id(String);

impl Id {
    /// The ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for Id {
    fn from(value: String) -> Self {
        normalize_id(&value)
    }
}

impl From<&str> for Id {
    fn from(value: &str) -> Self {
        normalize_id(value)
    }
}

impl From<Id> for String {
    fn from(value: Id) -> Self {
        value.0
    }
}

impl FromStr for Id {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Id::from(s))
    }
}

fn normalize_id(id: &str) -> Id {
    static PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9]").unwrap());
    Id(PATTERN
        .replace_all(&id.to_ascii_lowercase(), "")
        .into_owned())
}
