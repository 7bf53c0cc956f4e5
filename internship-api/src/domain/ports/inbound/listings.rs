use async_trait::async_trait;

use crate::domain::{
    catalog::Category,
    models::{Internship, InternshipId, InternshipPatch, NewInternship, Page, PageNumber},
    ListingError,
};

#[async_trait]
pub trait ListingService: Send + Sync + 'static {
    /// Heading identifiers of every posting, in store order.
    async fn heading_urls(&self) -> Result<Vec<String>, ListingError>;

    /// The first `limit` postings in store order.
    async fn top(&self, limit: u64) -> Result<Vec<Internship>, ListingError>;

    async fn page(&self, page: PageNumber) -> Result<Page, ListingError>;

    /// Free-text search over optional name and location substrings.
    async fn search(
        &self,
        name: Option<String>,
        location: Option<String>,
    ) -> Result<Vec<Internship>, ListingError>;

    /// Postings matched by the single best keyword of `category`.
    async fn category_search(&self, category: Category) -> Result<Vec<Internship>, ListingError>;

    async fn detail(&self, heading_url: &str) -> Result<Internship, ListingError>;

    async fn add(&self, internship: NewInternship) -> Result<Internship, ListingError>;

    async fn update(
        &self,
        id: InternshipId,
        patch: InternshipPatch,
    ) -> Result<Internship, ListingError>;

    async fn delete_all(&self) -> Result<u64, ListingError>;
}
