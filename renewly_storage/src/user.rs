use async_trait::async_trait;
use renewly_models::user::{NotificationPreferences, User, UserId};

pub struct NewUser {
    pub email: String,
    pub phone_number: Option<String>,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub in_app_enabled: bool,
}

#[async_trait]
pub trait UserStorage: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    async fn get(&self, id: UserId) -> Result<Option<User>, Self::Error>;

    async fn get_preferences(
        &self,
        id: UserId,
    ) -> Result<Option<NotificationPreferences>, Self::Error>;
}
