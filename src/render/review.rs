use crate::domain::model::Review;
use crate::render::Render;
use crate::utils::error::Result;
use askama::Template;

pub const MAX_STARS: usize = 5;
const FILLED_STAR: char = '★';
const EMPTY_STAR: char = '☆';

/// (filled, empty)，rating 先夾在 0..=5，兩者相加恆為 5
pub fn star_counts(rating: i64) -> (usize, usize) {
    let filled = rating.clamp(0, MAX_STARS as i64) as usize;
    (filled, MAX_STARS - filled)
}

pub fn star_glyphs(rating: i64) -> String {
    let (filled, empty) = star_counts(rating);
    let mut stars = String::with_capacity(MAX_STARS * 3);
    stars.extend(std::iter::repeat(FILLED_STAR).take(filled));
    stars.extend(std::iter::repeat(EMPTY_STAR).take(empty));
    stars
}

#[derive(Template)]
#[template(
    source = r#"<div class="carousel-item{% if active %} active{% endif %}">
  <div class="review-slide">
    <div class="stars">{{ stars }}</div>
    <div class="review-top">{{ review.customer }}</div>
    <div class="review-mid">"{{ review.comment }}"</div>
  </div>
</div>"#,
    ext = "html"
)]
struct ReviewSlide<'a> {
    review: &'a Review,
    active: bool,
    stars: String,
}

impl Render for Review {
    /// 第一張投影片為 active，決定輪播的初始狀態
    fn render(&self, index: usize) -> Result<String> {
        let slide = ReviewSlide {
            review: self,
            active: index == 0,
            stars: star_glyphs(self.rating),
        };
        Ok(slide.render()?)
    }
}
