use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Id;

/// Role tag on a user. Input is never rejected; unknown values are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Role {
    ServiceProvider,
    ServiceConsumer,
    Other(String),
    #[default]
    Unset,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::ServiceProvider => "service_provider",
            Role::ServiceConsumer => "service_consumer",
            Role::Other(raw) => raw,
            Role::Unset => "",
        }
    }

    pub fn parse(raw: &str) -> Self {
        match raw {
            "service_provider" => Role::ServiceProvider,
            "service_consumer" => Role::ServiceConsumer,
            "" => Role::Unset,
            other => Role::Other(other.to_string()),
        }
    }
}

impl From<&str> for Role {
    fn from(raw: &str) -> Self { Role::parse(raw) }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Role {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Role::parse(&raw))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Role")]
    pub role: Role,
}
