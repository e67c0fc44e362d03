use crate::domain::model::Project;
use crate::render::slug::project_slug;
use crate::render::{aos_delay, Render};
use crate::utils::error::Result;
use askama::Template;
use std::borrow::Cow;

/// 這個網站本身，不需要再連到自己的 demo
pub const SELF_HOSTED_PROJECT: &str = "FastAPI Portfolio Website";

#[derive(Template)]
#[template(
    source = r#"<div class="col-lg-6 mb-4" data-aos="fade-up" data-aos-delay="{{ delay }}">
  <div class="card h-100">
    <div class="card-body d-flex flex-column">
      {% if let Some(image) = image %}<img src="{{ image }}" alt="{{ project.title }} project preview" class="project-preview" onerror="this.style.display='none'; this.nextElementSibling.style.display='flex';">
      <div class="project-fallback-icon" style="display: none;"><i class="fas fa-project-diagram"></i></div>{% else %}<div class="project-fallback-icon"><i class="fas fa-project-diagram"></i></div>{% endif %}
      <h5 class="card-title text-gradient">{{ project.title }}</h5>
      <p class="card-text">{{ project.description }}</p>
      <div class="mb-3">{% for tech in project.technologies %}<span class="badge bg-secondary me-1 mb-1">{{ tech }}</span>{% endfor %}</div>
      <div class="card-features mb-3">
        <h6 class="text-muted">Key Features:</h6>
        <ul class="list-unstyled">{% for feature in project.features %}<li><i class="fas fa-check text-success me-2"></i>{{ feature }}</li>{% endfor %}</ul>
      </div>
      <div class="mt-auto">
        <div class="d-flex flex-wrap gap-2 justify-content-center">
          <a href="{{ project.github }}" target="_blank" class="btn-outline-primary"><i class="fab fa-github me-2"></i>View Code</a>
          <a href="/projects/{{ slug|safe }}" class="btn-outline-primary"><i class="fas fa-search me-2"></i>Case Study</a>{% if let Some(demo) = demo %}
          <a href="{{ demo }}" target="_blank" class="btn-outline-primary project-demo"><i class="fas fa-external-link-alt me-2"></i>Live Demo</a>{% endif %}
        </div>
      </div>
    </div>
  </div>
</div>"#,
    ext = "html"
)]
struct ProjectCard<'a> {
    project: &'a Project,
    delay: usize,
    image: Option<&'a str>,
    demo: Option<&'a str>,
    slug: Cow<'static, str>,
}

impl Render for Project {
    fn render(&self, index: usize) -> Result<String> {
        let demo = self
            .demo
            .as_deref()
            .filter(|_| self.title != SELF_HOSTED_PROJECT);

        let card = ProjectCard {
            project: self,
            delay: aos_delay(index),
            image: self.image.as_deref(),
            demo,
            slug: project_slug(&self.title),
        };
        Ok(card.render()?)
    }
}
