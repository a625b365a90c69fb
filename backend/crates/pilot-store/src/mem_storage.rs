//! In-memory storage.
//!
//! Records live for the lifetime of the process. Each collection sits behind
//! its own `RwLock`: inserts take the write lock and listings the read lock,
//! so a listing never observes a half-applied insert.

use crate::{Clock, Result as StoreErrorResult, Storage, StoreError, SystemClock};

use pilot_core::{NewPilotRequest, NewUser, PilotRequest, User};

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use log::debug;
use uuid::Uuid;

const USERS: &str = "users";
const PILOT_REQUESTS: &str = "pilot_requests";

pub struct MemStorage {
    pub(crate) users: RwLock<HashMap<Uuid, User>>,
    pub(crate) pilot_requests: RwLock<HashMap<Uuid, PilotRequest>>,
    clock: Box<dyn Clock>,
}

impl MemStorage {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Create a store that stamps `created_at` from `clock`
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
            pilot_requests: RwLock::new(HashMap::new()),
            clock: Box::new(clock),
        }
    }
}

impl Default for MemStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Storage for MemStorage {
    async fn get_user(&self, id: Uuid) -> StoreErrorResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::poisoned(USERS, e))?;

        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_username(&self, username: &str) -> StoreErrorResult<Option<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| StoreError::poisoned(USERS, e))?;

        Ok(users.values().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, user: NewUser) -> StoreErrorResult<User> {
        let mut users = self
            .users
            .write()
            .map_err(|e| StoreError::poisoned(USERS, e))?;

        let user = User::from_new(user, fresh_id(&users));
        users.insert(user.id, user.clone());

        Ok(user)
    }

    async fn create_pilot_request(
        &self,
        request: NewPilotRequest,
    ) -> StoreErrorResult<PilotRequest> {
        let mut requests = self
            .pilot_requests
            .write()
            .map_err(|e| StoreError::poisoned(PILOT_REQUESTS, e))?;

        // Stamped under the write lock so insertion order and timestamps agree
        let stored = PilotRequest::from_new(request, fresh_id(&requests), self.clock.now());
        requests.insert(stored.id, stored.clone());

        debug!(
            "Stored pilot request {} ({} total)",
            stored.id,
            requests.len()
        );

        Ok(stored)
    }

    async fn get_all_pilot_requests(&self) -> StoreErrorResult<Vec<PilotRequest>> {
        let requests = self
            .pilot_requests
            .read()
            .map_err(|e| StoreError::poisoned(PILOT_REQUESTS, e))?;

        let mut all: Vec<PilotRequest> = requests.values().cloned().collect();
        // Order among equal timestamps is unspecified
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all)
    }

    async fn pilot_request_count(&self) -> StoreErrorResult<usize> {
        let requests = self
            .pilot_requests
            .read()
            .map_err(|e| StoreError::poisoned(PILOT_REQUESTS, e))?;

        Ok(requests.len())
    }
}

/// A v4 id not already present in `map`
fn fresh_id<V>(map: &HashMap<Uuid, V>) -> Uuid {
    loop {
        let id = Uuid::new_v4();
        if !map.contains_key(&id) {
            return id;
        }
    }
}
