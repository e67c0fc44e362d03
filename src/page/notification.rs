use std::time::Duration;
use tokio::time::Instant;

/// 顯示後自動隱藏的時間
pub const AUTO_HIDE_AFTER: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
        }
    }
}

/// `#form-notification` 的狀態；可見與否由截止時間決定，不需要背景計時器
#[derive(Debug, Clone, Default)]
pub struct FormNotification {
    message: String,
    kind: Option<NotificationKind>,
    visible_until: Option<Instant>,
}

impl FormNotification {
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) {
        self.message = message.into();
        self.kind = Some(kind);
        self.visible_until = Some(Instant::now() + AUTO_HIDE_AFTER);
        tracing::debug!("Notification shown ({}): {}", kind.css_class(), self.message);
    }

    pub fn is_visible(&self) -> bool {
        self.visible_until
            .map(|until| Instant::now() < until)
            .unwrap_or(false)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn kind(&self) -> Option<NotificationKind> {
        self.kind
    }

    pub fn class_name(&self) -> String {
        match self.kind {
            Some(kind) => format!("form-notification {}", kind.css_class()),
            None => "form-notification".to_string(),
        }
    }
}
