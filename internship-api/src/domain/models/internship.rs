use serde::Deserialize;
use time::OffsetDateTime;

use super::{InternshipId, UserId};
use crate::domain::ListingError;

/// A stored internship posting.
#[derive(Debug, Clone, PartialEq)]
pub struct Internship {
    pub id: InternshipId,
    pub internship_name: String,
    pub internship_url: String,
    /// Slug used as the detail lookup key. Unique across postings.
    pub heading_url: String,
    pub company_name: String,
    pub stipend: String,
    pub duration: String,
    pub location: String,
    pub apply_by: String,
    pub img_link: Option<String>,
    pub about_company: String,
    pub more_about: Option<String>,
    pub who_can_apply: Option<String>,
    pub activities: Vec<String>,
    pub skills: Vec<String>,
    /// Users who applied to or saved this posting.
    pub users: Vec<UserId>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

/// A posting that has passed required-field checks and can be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInternship {
    pub internship_name: String,
    pub internship_url: String,
    pub heading_url: String,
    pub company_name: String,
    pub stipend: String,
    pub duration: String,
    pub location: String,
    pub apply_by: String,
    pub img_link: Option<String>,
    pub about_company: String,
    pub more_about: Option<String>,
    pub who_can_apply: Option<String>,
    pub activities: Vec<String>,
    pub skills: Vec<String>,
}

/// Incoming posting as submitted by a client, before validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InternshipDraft {
    pub internship_name: Option<String>,
    pub internship_url: Option<String>,
    pub heading_url: Option<String>,
    pub company_name: Option<String>,
    pub stipend: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub apply_by: Option<String>,
    pub img_link: Option<String>,
    pub about_company: Option<String>,
    pub more_about: Option<String>,
    pub who_can_apply: Option<String>,
    #[serde(default)]
    pub activities: Vec<String>,
    #[serde(default)]
    pub skills: Vec<String>,
}

impl TryFrom<InternshipDraft> for NewInternship {
    type Error = ListingError;

    fn try_from(draft: InternshipDraft) -> Result<Self, Self::Error> {
        let mut missing = Vec::new();
        let mut required = |value: Option<String>, field: &'static str| -> String {
            match value {
                Some(value) if !value.trim().is_empty() => value,
                _ => {
                    missing.push(field);
                    String::new()
                }
            }
        };

        let internship_name = required(draft.internship_name, "internship_name");
        let internship_url = required(draft.internship_url, "internship_url");
        let heading_url = required(draft.heading_url, "heading_url");
        let company_name = required(draft.company_name, "company_name");
        let stipend = required(draft.stipend, "stipend");
        let duration = required(draft.duration, "duration");
        let location = required(draft.location, "location");
        let apply_by = required(draft.apply_by, "apply_by");
        let about_company = required(draft.about_company, "about_company");

        if !missing.is_empty() {
            return Err(ListingError::Validation(format!(
                "Internship validation failed: missing {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            internship_name,
            internship_url,
            heading_url,
            company_name,
            stipend,
            duration,
            location,
            apply_by,
            img_link: draft.img_link,
            about_company,
            more_about: draft.more_about,
            who_can_apply: draft.who_can_apply,
            activities: draft.activities,
            skills: draft.skills,
        })
    }
}

/// Partial update of a posting. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InternshipPatch {
    pub internship_name: Option<String>,
    pub internship_url: Option<String>,
    pub heading_url: Option<String>,
    pub company_name: Option<String>,
    pub stipend: Option<String>,
    pub duration: Option<String>,
    pub location: Option<String>,
    pub apply_by: Option<String>,
    pub img_link: Option<String>,
    pub about_company: Option<String>,
    pub more_about: Option<String>,
    pub who_can_apply: Option<String>,
    pub activities: Option<Vec<String>>,
    pub skills: Option<Vec<String>>,
    pub users: Option<Vec<UserId>>,
}

impl InternshipPatch {
    /// Applies every present field to `internship`.
    pub fn apply_to(&self, internship: &mut Internship) {
        fn set<T: Clone>(target: &mut T, value: &Option<T>) {
            if let Some(value) = value {
                *target = value.clone();
            }
        }
        fn set_opt<T: Clone>(target: &mut Option<T>, value: &Option<T>) {
            if value.is_some() {
                *target = value.clone();
            }
        }

        set(&mut internship.internship_name, &self.internship_name);
        set(&mut internship.internship_url, &self.internship_url);
        set(&mut internship.heading_url, &self.heading_url);
        set(&mut internship.company_name, &self.company_name);
        set(&mut internship.stipend, &self.stipend);
        set(&mut internship.duration, &self.duration);
        set(&mut internship.location, &self.location);
        set(&mut internship.apply_by, &self.apply_by);
        set_opt(&mut internship.img_link, &self.img_link);
        set(&mut internship.about_company, &self.about_company);
        set_opt(&mut internship.more_about, &self.more_about);
        set_opt(&mut internship.who_can_apply, &self.who_can_apply);
        set(&mut internship.activities, &self.activities);
        set(&mut internship.skills, &self.skills);
        set(&mut internship.users, &self.users);
    }
}
