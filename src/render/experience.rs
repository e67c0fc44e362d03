use crate::domain::model::ExperienceEntry;
use crate::render::{aos_delay, Render};
use crate::utils::error::Result;
use askama::Template;

#[derive(Template)]
#[template(
    source = r#"<div class="experience-card" data-aos="fade-up" data-aos-delay="{{ delay }}">
  <div class="d-flex justify-content-between align-items-start mb-3">
    <div>
      <h5 class="text-gradient">{{ job.title }}</h5>
      <h6 class="text-muted">{{ job.company }} - {{ job.location }}</h6>
    </div>
    <span class="date-badge">{{ job.period }}</span>
  </div>
  <ul class="list-unstyled">{% for achievement in job.achievements %}<li><i class="fas fa-arrow-right text-primary me-2"></i>{{ achievement }}</li>{% endfor %}</ul>
</div>"#,
    ext = "html"
)]
struct ExperienceCard<'a> {
    job: &'a ExperienceEntry,
    delay: usize,
}

impl Render for ExperienceEntry {
    fn render(&self, index: usize) -> Result<String> {
        let card = ExperienceCard {
            job: self,
            delay: aos_delay(index),
        };
        Ok(card.render()?)
    }
}
