pub type UserId = i64;

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub phone_number: Option<String>,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub in_app_enabled: bool,
}

impl User {
    pub fn notification_preferences(&self) -> NotificationPreferences {
        NotificationPreferences {
            email: self.email.clone(),
            phone_number: self.phone_number.clone(),
            email_enabled: self.email_enabled,
            sms_enabled: self.sms_enabled,
            in_app_enabled: self.in_app_enabled,
        }
    }
}

/// Per-user channel toggles plus the recipient identities needed to act on
/// them. `email` is always present since it is tied to the account itself;
/// `phone_number` is only meaningful when `sms_enabled` is set.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationPreferences {
    pub email: String,
    pub phone_number: Option<String>,
    pub email_enabled: bool,
    pub sms_enabled: bool,
    pub in_app_enabled: bool,
}
