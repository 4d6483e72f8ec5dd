pub mod alert_message;
pub mod notifier;
pub mod password;
