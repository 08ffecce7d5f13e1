//! Client for the discussion collection endpoint.
//!
//! The listing is paginated with json-server range parameters and excludes
//! the current user's own discussions via `authorId_ne`. Page size is fixed
//! at five; page N maps to `_start=(N-1)*5`, `_end=N*5-1`.

use super::{ApiError, Gateway};
use crate::libs::discussion::Discussion;

const DISCUSSIONS_URL: &str = "discussions";

/// Discussions shown per page of the forum listing.
pub const DISCUSSIONS_PER_PAGE: u32 = 5;

/// Range bounds for a one-based page number.
pub fn page_bounds(page: u32) -> (u32, u32) {
    let page = page.max(1);
    let start = (page - 1) * DISCUSSIONS_PER_PAGE;
    let end = page * DISCUSSIONS_PER_PAGE - 1;
    (start, end)
}

/// Query string for a page of discussions excluding one author.
pub fn page_query(page: u32, author_id: &str) -> String {
    let (start, end) = page_bounds(page);
    format!("_start={}&_end={}&authorId_ne={}", start, end, author_id)
}

#[derive(Debug, Clone)]
pub struct DiscussionsApi {
    gateway: Gateway,
}

impl DiscussionsApi {
    pub fn new(gateway: Gateway) -> Self {
        Self { gateway }
    }

    /// `GET /discussions?_start=&_end=&authorId_ne=`.
    pub async fn fetch_page(&self, page: u32, author_id: &str) -> Result<Vec<Discussion>, ApiError> {
        self.gateway.get(&format!("{}?{}", DISCUSSIONS_URL, page_query(page, author_id))).await
    }

    /// `GET /discussions/{id}`.
    pub async fn fetch_one(&self, id: &str) -> Result<Discussion, ApiError> {
        self.gateway.get(&format!("{}/{}", DISCUSSIONS_URL, id)).await
    }

    /// `POST /discussions` — returns the created discussion with its id.
    pub async fn create(&self, discussion: &Discussion) -> Result<Discussion, ApiError> {
        self.gateway.post(DISCUSSIONS_URL, discussion).await
    }

    /// `PUT /discussions/{id}` — full-object update.
    pub async fn update(&self, id: &str, discussion: &Discussion) -> Result<Discussion, ApiError> {
        self.gateway.put(&format!("{}/{}", DISCUSSIONS_URL, id), discussion).await
    }

    /// `DELETE /discussions/{id}`.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        self.gateway.delete(&format!("{}/{}", DISCUSSIONS_URL, id)).await
    }
}
