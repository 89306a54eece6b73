use serde::{Deserialize, Serialize};

use crate::Id;

/// A listing offered by a provider. `provider_id` is not checked against users.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    #[serde(rename = "ID")]
    pub id: Id,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "ProviderID")]
    pub provider_id: Id,
    #[serde(rename = "ImageURL")]
    pub image_url: String,
}

/// Service fields before an ID is assigned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewService {
    pub name: String,
    pub description: String,
    pub provider_id: Id,
    pub image_url: String,
}

impl NewService {
    pub fn with_id(self, id: Id) -> Service {
        Service {
            id,
            name: self.name,
            description: self.description,
            provider_id: self.provider_id,
            image_url: self.image_url,
        }
    }
}
