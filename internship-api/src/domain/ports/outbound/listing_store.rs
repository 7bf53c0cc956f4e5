use async_trait::async_trait;

use crate::domain::{
    models::{Internship, InternshipId, InternshipPatch, ListingFilter, NewInternship, Window},
    ListingError,
};

/// Document collection holding internship postings.
///
/// Every call is an independent, individually failable read or write.
/// Results come back in the store's iteration order, which must be stable
/// for an unchanged collection.
#[async_trait]
pub trait ListingStore: Send + Sync + 'static {
    async fn find(
        &self,
        filter: &ListingFilter,
        window: Window,
    ) -> Result<Vec<Internship>, ListingError>;

    async fn count(&self, filter: &ListingFilter) -> Result<u64, ListingError>;

    /// Projects the heading identifier of every posting without loading
    /// full documents.
    async fn heading_urls(&self) -> Result<Vec<String>, ListingError>;

    async fn find_by_heading_url(
        &self,
        heading_url: &str,
    ) -> Result<Option<Internship>, ListingError>;

    /// Fails with [`ListingError::DuplicateHeading`] when the heading
    /// identifier is already taken.
    async fn insert(&self, internship: &NewInternship) -> Result<Internship, ListingError>;

    async fn update(
        &self,
        id: InternshipId,
        patch: &InternshipPatch,
    ) -> Result<Option<Internship>, ListingError>;

    /// Returns the number of deleted postings.
    async fn delete_all(&self) -> Result<u64, ListingError>;
}
