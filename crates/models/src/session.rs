use serde::{Deserialize, Serialize};

use crate::Id;

/// Opaque login token mapped to a user. Sessions never expire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub session_id: String,
    pub user_id: Id,
}
