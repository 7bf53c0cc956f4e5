use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{
    catalog::Category,
    models::{
        Internship, InternshipId, InternshipPatch, ListingFilter, NewInternship, Page,
        PageNumber, SearchTerms, Window,
    },
    ports::{inbound::ListingService, outbound::ListingStore},
    ListingError,
};

pub const DEFAULT_PAGE_SIZE: u64 = 20;

pub struct ListingServiceImpl<S> {
    store: Arc<S>,
    page_size: u64,
}

impl<S> ListingServiceImpl<S> {
    pub fn new(store: Arc<S>, page_size: u64) -> Self {
        Self {
            store,
            page_size: page_size.max(1),
        }
    }
}

impl<S: ListingStore> ListingServiceImpl<S> {
    /// Runs one name probe per keyword and keeps the largest result set.
    ///
    /// A later set only replaces the current best when it is strictly
    /// larger, so ties go to the keyword declared first.
    async fn best_keyword_match(
        &self,
        keywords: &[&str],
    ) -> Result<Vec<Internship>, ListingError> {
        let mut best_matches: Vec<Internship> = Vec::new();

        for keyword in keywords {
            let matches = self
                .store
                .find(&ListingFilter::name_contains(*keyword), Window::all())
                .await?;

            tracing::debug!(keyword, matches = matches.len(), "category keyword probed");

            if matches.len() > best_matches.len() {
                best_matches = matches;
            }
        }

        Ok(best_matches)
    }
}

#[async_trait]
impl<S: ListingStore> ListingService for ListingServiceImpl<S> {
    async fn heading_urls(&self) -> Result<Vec<String>, ListingError> {
        self.store.heading_urls().await
    }

    async fn top(&self, limit: u64) -> Result<Vec<Internship>, ListingError> {
        self.store
            .find(&ListingFilter::all(), Window::first(limit))
            .await
    }

    async fn page(&self, page: PageNumber) -> Result<Page, ListingError> {
        let filter = ListingFilter::all();
        let total_items = self.store.count(&filter).await?;
        let internships = self
            .store
            .find(&filter, Window::page(page, self.page_size))
            .await?;

        Ok(Page::new(total_items, self.page_size, page, internships))
    }

    async fn search(
        &self,
        name: Option<String>,
        location: Option<String>,
    ) -> Result<Vec<Internship>, ListingError> {
        let terms = SearchTerms::resolve(name, location).ok_or(ListingError::InvalidSearch)?;

        let internships = self.store.find(&terms.to_filter(), Window::all()).await?;
        if internships.is_empty() {
            return Err(ListingError::NoSearchMatches(terms));
        }

        Ok(internships)
    }

    async fn category_search(&self, category: Category) -> Result<Vec<Internship>, ListingError> {
        let best_matches = self.best_keyword_match(category.keywords()).await?;
        if best_matches.is_empty() {
            return Err(ListingError::NoCategoryMatches(category));
        }

        Ok(best_matches)
    }

    async fn detail(&self, heading_url: &str) -> Result<Internship, ListingError> {
        self.store
            .find_by_heading_url(heading_url)
            .await?
            .ok_or(ListingError::NotFound)
    }

    async fn add(&self, internship: NewInternship) -> Result<Internship, ListingError> {
        self.store.insert(&internship).await
    }

    async fn update(
        &self,
        id: InternshipId,
        patch: InternshipPatch,
    ) -> Result<Internship, ListingError> {
        let updated = self
            .store
            .update(id, &patch)
            .await?
            .ok_or(ListingError::NotFound)?;

        tracing::info!(id = %updated.id, "internship updated");
        Ok(updated)
    }

    async fn delete_all(&self) -> Result<u64, ListingError> {
        let deleted = self.store.delete_all().await?;
        tracing::info!(deleted, "deleted all internships");
        Ok(deleted)
    }
}
