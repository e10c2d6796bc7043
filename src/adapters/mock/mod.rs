pub mod notification_service;

pub use notification_service::{
    Notification, NotificationKind, NotificationService as RecordingNotificationService,
};
