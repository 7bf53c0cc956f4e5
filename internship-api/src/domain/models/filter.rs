use std::fmt;

use super::Internship;

/// Predicate over internships executed by a listing store.
///
/// Each present term is a case-insensitive, unanchored substring match on
/// its field. Present terms are combined with AND; no terms matches all.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub name_contains: Option<String>,
    pub location_contains: Option<String>,
}

impl ListingFilter {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn name_contains(term: impl Into<String>) -> Self {
        Self {
            name_contains: Some(term.into()),
            location_contains: None,
        }
    }

    /// In-process evaluation, used by stores without a query engine.
    pub fn matches(&self, internship: &Internship) -> bool {
        fn contains(haystack: &str, needle: &Option<String>) -> bool {
            needle
                .as_ref()
                .map_or(true, |n| haystack.to_lowercase().contains(&n.to_lowercase()))
        }

        contains(&internship.internship_name, &self.name_contains)
            && contains(&internship.location, &self.location_contains)
    }
}

/// Resolved free-text search terms. At least one term is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchTerms {
    Name(String),
    Location(String),
    NameAndLocation { name: String, location: String },
}

impl SearchTerms {
    /// Resolves optional query parameters. Empty strings count as absent.
    pub fn resolve(name: Option<String>, location: Option<String>) -> Option<Self> {
        let name = name.filter(|n| !n.is_empty());
        let location = location.filter(|l| !l.is_empty());

        match (name, location) {
            (Some(name), Some(location)) => Some(Self::NameAndLocation { name, location }),
            (Some(name), None) => Some(Self::Name(name)),
            (None, Some(location)) => Some(Self::Location(location)),
            (None, None) => None,
        }
    }

    pub fn to_filter(&self) -> ListingFilter {
        match self {
            Self::Name(name) => ListingFilter {
                name_contains: Some(name.clone()),
                location_contains: None,
            },
            Self::Location(location) => ListingFilter {
                name_contains: None,
                location_contains: Some(location.clone()),
            },
            Self::NameAndLocation { name, location } => ListingFilter {
                name_contains: Some(name.clone()),
                location_contains: Some(location.clone()),
            },
        }
    }
}

/// Describes the terms the way the not-found message reports them.
impl fmt::Display for SearchTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name(name) => write!(f, "with names containing '{name}'"),
            Self::Location(location) => write!(f, "in '{location}'"),
            Self::NameAndLocation { name, location } => {
                write!(f, "with names containing '{name}' in '{location}'")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_are_absent() {
        assert_eq!(
            SearchTerms::resolve(Some("Engineer".to_string()), Some(String::new())),
            Some(SearchTerms::Name("Engineer".to_string()))
        );
        assert_eq!(SearchTerms::resolve(Some(String::new()), None), None);
        assert_eq!(SearchTerms::resolve(None, None), None);
    }

    #[test]
    fn both_terms_build_conjunctive_filter() {
        let terms = SearchTerms::resolve(Some("design".to_string()), Some("pune".to_string()))
            .unwrap();
        assert_eq!(
            terms.to_filter(),
            ListingFilter {
                name_contains: Some("design".to_string()),
                location_contains: Some("pune".to_string()),
            }
        );
    }

    #[test]
    fn display_reflects_supplied_terms() {
        assert_eq!(
            SearchTerms::Name("ux".to_string()).to_string(),
            "with names containing 'ux'"
        );
        assert_eq!(
            SearchTerms::Location("Delhi".to_string()).to_string(),
            "in 'Delhi'"
        );
        assert_eq!(
            SearchTerms::NameAndLocation {
                name: "ux".to_string(),
                location: "Delhi".to_string()
            }
            .to_string(),
            "with names containing 'ux' in 'Delhi'"
        );
    }
}
