use serde::{Deserialize, Serialize};

use crate::Id;

/// Login secret for a registered username. The password is stored in clear
/// text; see DESIGN.md before deploying this anywhere real.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    pub username: String,
    pub password: String,
    pub user_id: Id,
}

impl Credential {
    pub fn matches(&self, password: &str) -> bool {
        self.password == password
    }
}
