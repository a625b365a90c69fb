use crate::Result as StoreErrorResult;

use pilot_core::{NewPilotRequest, NewUser, PilotRequest, User};

use async_trait::async_trait;
use uuid::Uuid;

/// Storage surface for pilot requests and users.
///
/// The user operations exist for completeness; no HTTP route reaches them.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_user(&self, id: Uuid) -> StoreErrorResult<Option<User>>;

    async fn get_user_by_username(&self, username: &str) -> StoreErrorResult<Option<User>>;

    async fn create_user(&self, user: NewUser) -> StoreErrorResult<User>;

    /// Assign a fresh id and the current time, insert, and return the stored record
    async fn create_pilot_request(&self, request: NewPilotRequest)
    -> StoreErrorResult<PilotRequest>;

    /// Every stored pilot request, newest first
    async fn get_all_pilot_requests(&self) -> StoreErrorResult<Vec<PilotRequest>>;

    async fn pilot_request_count(&self) -> StoreErrorResult<usize>;
}
