//! 頁面 view-model：以型別描述 host page 上的 DOM 契約。

pub mod host;
pub mod notification;
pub mod view;

pub use host::HostPage;
pub use notification::{FormNotification, NotificationKind};
pub use view::PageView;

/// host page 必須提供的元素
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementId {
    ProjectsContainer,
    ExperienceContainer,
    EducationContainer,
    ReviewsContainer,
    ReviewsSection,
    ViewMoreReviews,
    ContactForm,
    FormNotification,
}

impl ElementId {
    pub const ALL: [ElementId; 8] = [
        ElementId::ProjectsContainer,
        ElementId::ExperienceContainer,
        ElementId::EducationContainer,
        ElementId::ReviewsContainer,
        ElementId::ReviewsSection,
        ElementId::ViewMoreReviews,
        ElementId::ContactForm,
        ElementId::FormNotification,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ElementId::ProjectsContainer => "projects-container",
            ElementId::ExperienceContainer => "experience-container",
            ElementId::EducationContainer => "education-container",
            ElementId::ReviewsContainer => "reviews-container",
            ElementId::ReviewsSection => "reviews-section",
            ElementId::ViewMoreReviews => "view-more-reviews",
            ElementId::ContactForm => "contactForm",
            ElementId::FormNotification => "form-notification",
        }
    }

    /// 預設隱藏、由 controller 決定是否顯示的元素
    pub fn is_toggle(&self) -> bool {
        matches!(self, ElementId::ReviewsSection | ElementId::ViewMoreReviews)
    }
}

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 可選的文字欄位，host page 有提供時才填入
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TextSlot {
    TypingText,
    CurrentYear,
}

impl TextSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            TextSlot::TypingText => "typingText",
            TextSlot::CurrentYear => "current-year",
        }
    }
}
