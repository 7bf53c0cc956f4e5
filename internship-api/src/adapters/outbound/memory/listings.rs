//! In-memory listing store for tests.

use std::sync::{
    atomic::{AtomicI32, AtomicUsize, Ordering},
    Arc, RwLock,
};

use async_trait::async_trait;
use time::OffsetDateTime;

use crate::domain::{
    models::{Internship, InternshipId, InternshipPatch, ListingFilter, NewInternship, Window},
    ports::outbound::ListingStore,
    ListingError,
};

/// Listing store backed by a Vec kept in insertion order.
///
/// # Examples
///
/// ```ignore
/// let store = InMemoryListingStore::new().with_names(&["Data Analyst", "Java Developer"]);
/// // fail every `find` after the first two:
/// let store = InMemoryListingStore::new().failing_after(2);
/// ```
#[derive(Clone, Default)]
pub struct InMemoryListingStore {
    internships: Arc<RwLock<Vec<Internship>>>,
    next_id: Arc<AtomicI32>,
    find_calls: Arc<AtomicUsize>,
    /// Number of `find` calls that succeed before every call fails.
    fail_after: Option<usize>,
}

#[allow(dead_code)]
impl InMemoryListingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds postings whose names are given; other fields are filled in.
    pub fn with_names(self, names: &[&str]) -> Self {
        for name in names {
            self.push(sample(name, "Remote"));
        }
        self
    }

    /// Seeds postings from `(name, location)` pairs.
    pub fn with_postings(self, postings: &[(&str, &str)]) -> Self {
        for (name, location) in postings {
            self.push(sample(name, location));
        }
        self
    }

    pub fn failing_after(mut self, successful_calls: usize) -> Self {
        self.fail_after = Some(successful_calls);
        self
    }

    pub fn find_calls(&self) -> usize {
        self.find_calls.load(Ordering::SeqCst)
    }

    pub fn len(&self) -> usize {
        self.internships.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&self, new: NewInternship) -> Internship {
        let id = InternshipId::new(self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let now = OffsetDateTime::now_utc();
        let internship = Internship {
            id,
            internship_name: new.internship_name,
            internship_url: new.internship_url,
            heading_url: new.heading_url,
            company_name: new.company_name,
            stipend: new.stipend,
            duration: new.duration,
            location: new.location,
            apply_by: new.apply_by,
            img_link: new.img_link,
            about_company: new.about_company,
            more_about: new.more_about,
            who_can_apply: new.who_can_apply,
            activities: new.activities,
            skills: new.skills,
            users: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        self.internships.write().unwrap().push(internship.clone());
        internship
    }

    fn check_failure(&self) -> Result<(), ListingError> {
        let call = self.find_calls.fetch_add(1, Ordering::SeqCst);
        match self.fail_after {
            Some(limit) if call >= limit => Err(ListingError::store("connection refused")),
            _ => Ok(()),
        }
    }
}

/// A posting with placeholder values and a heading derived from the name.
pub fn sample(name: &str, location: &str) -> NewInternship {
    let heading_url = format!(
        "{}-{}",
        name.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-"),
        location.to_lowercase().replace(' ', "-")
    );
    NewInternship {
        internship_name: name.to_string(),
        internship_url: format!("https://internships.example.com/{heading_url}"),
        heading_url,
        company_name: "Example Corp".to_string(),
        stipend: "10000 /month".to_string(),
        duration: "3 Months".to_string(),
        location: location.to_string(),
        apply_by: "30 Jun' 24".to_string(),
        img_link: None,
        about_company: "A company.".to_string(),
        more_about: None,
        who_can_apply: None,
        activities: vec![],
        skills: vec![],
    }
}

#[async_trait]
impl ListingStore for InMemoryListingStore {
    async fn find(
        &self,
        filter: &ListingFilter,
        window: Window,
    ) -> Result<Vec<Internship>, ListingError> {
        self.check_failure()?;

        let internships = self.internships.read().unwrap();
        let matching = internships
            .iter()
            .filter(|internship| filter.matches(internship))
            .skip(window.skip as usize)
            .take(window.limit.map_or(usize::MAX, |limit| limit as usize))
            .cloned()
            .collect();

        Ok(matching)
    }

    async fn count(&self, filter: &ListingFilter) -> Result<u64, ListingError> {
        let internships = self.internships.read().unwrap();
        Ok(internships.iter().filter(|i| filter.matches(i)).count() as u64)
    }

    async fn heading_urls(&self) -> Result<Vec<String>, ListingError> {
        let internships = self.internships.read().unwrap();
        Ok(internships.iter().map(|i| i.heading_url.clone()).collect())
    }

    async fn find_by_heading_url(
        &self,
        heading_url: &str,
    ) -> Result<Option<Internship>, ListingError> {
        let internships = self.internships.read().unwrap();
        Ok(internships
            .iter()
            .find(|i| i.heading_url == heading_url)
            .cloned())
    }

    async fn insert(&self, internship: &NewInternship) -> Result<Internship, ListingError> {
        let taken = self
            .internships
            .read()
            .unwrap()
            .iter()
            .any(|i| i.heading_url == internship.heading_url);
        if taken {
            return Err(ListingError::DuplicateHeading(
                internship.heading_url.clone(),
            ));
        }

        Ok(self.push(internship.clone()))
    }

    async fn update(
        &self,
        id: InternshipId,
        patch: &InternshipPatch,
    ) -> Result<Option<Internship>, ListingError> {
        let mut internships = self.internships.write().unwrap();
        let Some(internship) = internships.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };

        patch.apply_to(internship);
        internship.updated_at = OffsetDateTime::now_utc();
        Ok(Some(internship.clone()))
    }

    async fn delete_all(&self) -> Result<u64, ListingError> {
        let mut internships = self.internships.write().unwrap();
        let deleted = internships.len() as u64;
        internships.clear();
        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_applies_filter_then_window() {
        let store = InMemoryListingStore::new().with_names(&[
            "Java Developer",
            "Marketing Intern",
            "Python Developer",
            "Android Developer",
        ]);

        let developers = store
            .find(&ListingFilter::name_contains("DEVELOPER"), Window::all())
            .await
            .unwrap();
        assert_eq!(developers.len(), 3);

        let second = store
            .find(
                &ListingFilter::name_contains("developer"),
                Window {
                    skip: 1,
                    limit: Some(1),
                },
            )
            .await
            .unwrap();
        assert_eq!(second[0].internship_name, "Python Developer");
    }

    #[tokio::test]
    async fn insert_rejects_taken_heading() {
        let store = InMemoryListingStore::new();
        store.insert(&sample("Editor", "Delhi")).await.unwrap();

        let err = store.insert(&sample("Editor", "Delhi")).await.unwrap_err();
        assert!(matches!(err, ListingError::DuplicateHeading(h) if h == "editor-delhi"));
    }

    #[tokio::test]
    async fn failing_store_fails_after_limit() {
        let store = InMemoryListingStore::new()
            .with_names(&["Editor"])
            .failing_after(1);

        assert!(store.find(&ListingFilter::all(), Window::all()).await.is_ok());
        assert!(store.find(&ListingFilter::all(), Window::all()).await.is_err());
        assert_eq!(store.find_calls(), 2);
    }
}
