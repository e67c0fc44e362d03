use crate::domain::model::EducationEntry;
use crate::render::{aos_delay, Render};
use crate::utils::error::Result;
use askama::Template;

const HONORS_INSTITUTION: &str = "Southern New Hampshire";
const HONORS_URL: &str = "http://meritpages.com/samuelrincon";

struct InstitutionLogo {
    src: &'static str,
    alt: &'static str,
}

fn institution_logo(institution: &str) -> InstitutionLogo {
    if institution.contains(HONORS_INSTITUTION) {
        InstitutionLogo {
            src: "/images/SNHU.png",
            alt: "Southern New Hampshire University logo",
        }
    } else {
        InstitutionLogo {
            src: "/images/LSC.png",
            alt: "Lone Star College logo",
        }
    }
}

#[derive(Template)]
#[template(
    source = r#"<div class="education-card" data-aos="fade-right" data-aos-delay="{{ delay }}">
  <img src="{{ logo.src|safe }}" alt="{{ logo.alt }}" onerror="this.style.display='none'">
  <div class="education-info flex-grow-1">
    <h5>{{ edu.degree }}</h5>
    <h6 class="text-muted">{{ edu.institution }}</h6>
    <p class="mb-2">{{ edu.period }}{% if !edu.status.is_empty() %} - {{ edu.status }}{% endif %}</p>
    <div class="gpa-badge">GPA: {{ edu.gpa }}</div>{% if let Some(focus) = edu.focus %}
    <p class="mt-2"><strong>Focus:</strong> {{ focus }}</p>{% endif %}{% if let Some(achievements) = edu.achievements %}
    <ul class="mt-2 education-achievements">{% for achievement in achievements %}<li>{{ achievement }}</li>{% endfor %}</ul>{% endif %}{% if show_honors %}
    <div class="mt-3">
      <a href="{{ honors_url|safe }}" target="_blank" class="btn-custom btn-sm"><i class="fas fa-award me-2"></i>View Honors &amp; Badges</a>
    </div>{% endif %}
  </div>
</div>"#,
    ext = "html"
)]
struct EducationCard<'a> {
    edu: &'a EducationEntry,
    delay: usize,
    logo: InstitutionLogo,
    show_honors: bool,
    honors_url: &'static str,
}

impl Render for EducationEntry {
    fn render(&self, index: usize) -> Result<String> {
        let card = EducationCard {
            edu: self,
            delay: aos_delay(index),
            logo: institution_logo(&self.institution),
            show_honors: self.institution.contains(HONORS_INSTITUTION),
            honors_url: HONORS_URL,
        };
        Ok(card.render()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lone_star() -> EducationEntry {
        EducationEntry {
            institution: "Lone Star College".to_string(),
            degree: "Associate of Arts".to_string(),
            period: "August 2019 - May 2022".to_string(),
            gpa: "3.75".to_string(),
            status: "Graduated".to_string(),
            focus: None,
            achievements: None,
        }
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let html = lone_star().render(0).unwrap();
        assert!(!html.contains("<ul"));
        assert!(!html.contains("Focus:"));
        assert!(!html.contains("View Honors"));
        assert!(html.contains("/images/LSC.png"));
        assert!(html.contains("August 2019 - May 2022 - Graduated"));
    }

    #[test]
    fn test_achievements_render_one_item_each_in_order() {
        let mut edu = lone_star();
        edu.achievements = Some(vec![
            "Dean's list".to_string(),
            "Honor society".to_string(),
            "Scholarship".to_string(),
        ]);
        let html = edu.render(0).unwrap();

        assert_eq!(html.matches(r#"<ul class="mt-2 education-achievements">"#).count(), 1);
        assert_eq!(html.matches("<li>").count(), 3);
        let honor = html.find("<li>Honor society</li>").unwrap();
        let scholarship = html.find("<li>Scholarship</li>").unwrap();
        assert!(honor < scholarship);
    }

    #[test]
    fn test_honors_link_only_for_snhu() {
        let mut edu = lone_star();
        edu.institution = "Southern New Hampshire University".to_string();
        edu.focus = Some("Backend Development".to_string());
        let html = edu.render(1).unwrap();

        assert!(html.contains("http://meritpages.com/samuelrincon"));
        assert!(html.contains("/images/SNHU.png"));
        assert!(html.contains("<strong>Focus:</strong> Backend Development"));
        assert!(html.contains(r#"data-aos-delay="100""#));
    }

    #[test]
    fn test_empty_status_has_no_separator() {
        let mut edu = lone_star();
        edu.status = String::new();
        let html = edu.render(0).unwrap();
        assert!(html.contains(r#"<p class="mb-2">August 2019 - May 2022</p>"#));
    }
}
