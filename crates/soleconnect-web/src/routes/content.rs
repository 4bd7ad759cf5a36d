//! Blog and FAQ handlers over the static content crate.

use crate::error::ApiError;
use axum::extract::Path;
use axum::Json;
use serde::Serialize;
use soleconnect_content::{blog, faq, BlogPost, FaqCategory};

/// Index entry: everything except the body, which only the post page
/// needs.
#[derive(Serialize)]
pub(super) struct BlogSummary {
    slug: &'static str,
    title: &'static str,
    excerpt: &'static str,
    category: &'static str,
    author: &'static str,
    published: &'static str,
    read_minutes: u32,
}

impl From<&'static BlogPost> for BlogSummary {
    fn from(post: &'static BlogPost) -> Self {
        Self {
            slug: post.slug,
            title: post.title,
            excerpt: post.excerpt,
            category: post.category,
            author: post.author,
            published: post.published,
            read_minutes: post.read_minutes,
        }
    }
}

pub(super) async fn blog_index() -> Json<Vec<BlogSummary>> {
    Json(blog::posts().iter().map(BlogSummary::from).collect())
}

pub(super) async fn blog_post(
    Path(slug): Path<String>,
) -> Result<Json<&'static BlogPost>, ApiError> {
    blog::by_slug(&slug)
        .map(Json)
        .ok_or(ApiError::PostNotFound(slug))
}

pub(super) async fn faq_index() -> Json<&'static [FaqCategory]> {
    Json(faq::categories())
}
