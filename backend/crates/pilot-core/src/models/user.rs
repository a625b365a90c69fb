//! User entity. Kept for the store's declared surface; no route creates or reads users.

use crate::NewUser;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password: String,
}

impl User {
    pub fn from_new(user: NewUser, id: Uuid) -> Self {
        Self {
            id,
            username: user.username,
            password: user.password,
        }
    }
}
