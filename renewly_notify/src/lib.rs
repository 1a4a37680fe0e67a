mod delivery;
mod dispatcher;

pub use delivery::{
    ChannelSender, DeliveryOutcome, LogOnlyEmailSender, LogOnlyInAppSender, LogOnlySmsSender,
    Recipient,
};
pub use dispatcher::{
    ChannelSenders, DispatchError, NotificationDispatcher, SEND_TIMEOUT, reminder_message,
};
