use crate::core::contact::{ContactClient, ContactForm, ContactOutcome, DEFAULT_CONTACT_EMAIL};
use crate::core::typing::Typewriter;
use crate::domain::model::{DataOrigin, ExperienceEntry};
use crate::domain::ports::ContentSource;
use crate::page::{ElementId, FormNotification, NotificationKind, PageView, TextSlot};
use crate::render::Renderer;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use chrono::Datelike;

/// 評論只屬於這個職位
pub const REVIEWS_SENTINEL_TITLE: &str = "Moving Crew Lead & Operations Coordinator";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    Ready,
    SubmitContact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subscription {
    PageReady,
    ContactSubmit,
}

impl PageEvent {
    pub fn subscription(&self) -> Subscription {
        match self {
            PageEvent::Ready => Subscription::PageReady,
            PageEvent::SubmitContact => Subscription::ContactSubmit,
        }
    }
}

pub struct PageController<S: ContentSource> {
    source: S,
    contact: ContactClient,
    contact_email: String,
    view: PageView,
    form: ContactForm,
    notification: FormNotification,
    typewriter: Typewriter,
    subscriptions: Vec<Subscription>,
}

impl<S: ContentSource> PageController<S> {
    pub fn new(source: S, contact: ContactClient, view: PageView) -> Self {
        Self {
            source,
            contact,
            contact_email: DEFAULT_CONTACT_EMAIL.to_string(),
            view,
            form: ContactForm::default(),
            notification: FormNotification::default(),
            typewriter: Typewriter::default(),
            // 初始化時一次建好，teardown 時清空
            subscriptions: vec![Subscription::PageReady, Subscription::ContactSubmit],
        }
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    /// 載入資料並依 Projects → Experience → Education 順序渲染
    pub async fn on_ready(&mut self) -> Result<DataOrigin> {
        let data = self.source.load().await;
        tracing::info!("Rendering page from {:?} data", data.origin);

        Renderer::render(&mut self.view, ElementId::ProjectsContainer, &data.projects)?;
        self.render_experience(&data.experience)?;
        Renderer::render(&mut self.view, ElementId::EducationContainer, &data.education)?;

        self.view.set_text(TextSlot::TypingText, self.typewriter.full_text());
        self.view
            .set_text(TextSlot::CurrentYear, chrono::Local::now().year().to_string());

        Ok(data.origin)
    }

    /// 渲染經歷；crew lead 有評論時才顯示評論區與「查看更多」
    pub fn render_experience(&mut self, experience: &[ExperienceEntry]) -> Result<()> {
        Renderer::render(&mut self.view, ElementId::ExperienceContainer, experience)?;

        let reviews = experience
            .iter()
            .find(|job| job.title == REVIEWS_SENTINEL_TITLE)
            .and_then(|job| job.reviews.as_deref())
            .filter(|reviews| !reviews.is_empty());

        match reviews {
            Some(reviews) => {
                Renderer::render(&mut self.view, ElementId::ReviewsContainer, reviews)?;
                self.view.reveal(ElementId::ReviewsSection);
                self.view.reveal(ElementId::ViewMoreReviews);
                tracing::debug!("⭐ Showing {} customer reviews", reviews.len());
            }
            None => tracing::debug!("No customer reviews to show"),
        }
        Ok(())
    }

    /// 驗證表單並進入送出中狀態；驗證失敗時顯示錯誤並回傳 None
    pub fn begin_submit(&mut self) -> Option<ContactForm> {
        let form = self.form.sanitized();
        if let Err(e) = form.validate() {
            tracing::warn!("Contact form validation failed: {}", e);
            self.notification.show(
                format!("❌ Error: {}", e.user_friendly_message()),
                NotificationKind::Error,
            );
            return None;
        }

        self.view.set_submitting(true);
        Some(form)
    }

    /// 恢復送出按鈕並依結果更新通知
    pub fn finish_submit(&mut self, outcome: ContactOutcome) -> &FormNotification {
        self.view.set_submitting(false);

        match outcome {
            ContactOutcome::Sent => {
                self.notification.show(
                    "✅ Message sent successfully! Thank you for reaching out.",
                    NotificationKind::Success,
                );
                self.form.reset();
            }
            ContactOutcome::Rejected { message } => {
                self.notification
                    .show(format!("❌ Error: {}", message), NotificationKind::Error);
            }
            ContactOutcome::Failed => {
                self.notification.show(
                    format!(
                        "❌ There was an error sending your message. Please try emailing me directly at {}",
                        self.contact_email
                    ),
                    NotificationKind::Error,
                );
            }
        }
        &self.notification
    }

    pub async fn submit_contact(&mut self) -> &FormNotification {
        let Some(form) = self.begin_submit() else {
            return &self.notification;
        };
        let outcome = self.contact.submit(&form).await;
        self.finish_submit(outcome)
    }

    pub fn contact_client(&self) -> &ContactClient {
        &self.contact
    }

    pub async fn dispatch(&mut self, event: PageEvent) -> Result<()> {
        if !self.subscriptions.contains(&event.subscription()) {
            tracing::debug!("Ignoring {:?}, no subscription", event);
            return Ok(());
        }
        match event {
            PageEvent::Ready => {
                self.on_ready().await?;
            }
            PageEvent::SubmitContact => {
                self.submit_contact().await;
            }
        }
        Ok(())
    }

    pub fn teardown(&mut self) {
        tracing::debug!("Tearing down {} subscriptions", self.subscriptions.len());
        self.subscriptions.clear();
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ContactForm {
        &mut self.form
    }

    pub fn notification(&self) -> &FormNotification {
        &self.notification
    }

    pub fn is_submitting(&self) -> bool {
        self.view.is_submitting()
    }

    pub fn typewriter_mut(&mut self) -> &mut Typewriter {
        &mut self.typewriter
    }

    pub fn view(&self) -> &PageView {
        &self.view
    }

    pub fn compose(&self) -> Result<String> {
        self.view.compose()
    }
}
