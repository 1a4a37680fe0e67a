use std::collections::BTreeMap;

use async_trait::async_trait;
use renewly_models::user::{NotificationPreferences, User, UserId};
use tokio::sync::RwLock;

use super::MemoryStorageError;
use crate::user::{NewUser, UserStorage};

struct UserStore {
    next_id: UserId,
    users: BTreeMap<UserId, User>,
}

pub struct InMemoryUserStorage {
    store: RwLock<UserStore>,
}

impl InMemoryUserStorage {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(UserStore {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }

    pub async fn insert(&self, new_user: NewUser) -> User {
        let mut store = self.store.write().await;
        let id = store.next_id;
        store.next_id += 1;

        let user = User {
            id,
            email: new_user.email,
            phone_number: new_user.phone_number,
            email_enabled: new_user.email_enabled,
            sms_enabled: new_user.sms_enabled,
            in_app_enabled: new_user.in_app_enabled,
        };
        store.users.insert(id, user.clone());
        user
    }
}

impl Default for InMemoryUserStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStorage for InMemoryUserStorage {
    type Error = MemoryStorageError;

    async fn get(&self, id: UserId) -> Result<Option<User>, Self::Error> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).cloned())
    }

    async fn get_preferences(
        &self,
        id: UserId,
    ) -> Result<Option<NotificationPreferences>, Self::Error> {
        let store = self.store.read().await;
        Ok(store.users.get(&id).map(User::notification_preferences))
    }
}
