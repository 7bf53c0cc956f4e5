//! HTTP response types for listing and user endpoints.
//!
//! These types serialize to the JSON format expected by the frontend.

use serde::Serialize;
use time::OffsetDateTime;

use crate::domain::models::{Internship, InternshipId, Page, Role, User, UserId};

/// A single internship document.
#[derive(Debug, Serialize)]
pub struct InternshipResponse {
    #[serde(rename = "_id")]
    pub id: InternshipId,
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
    pub users: Vec<UserId>,
    #[serde(rename = "createdAt", with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(rename = "updatedAt", with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Internship> for InternshipResponse {
    fn from(internship: Internship) -> Self {
        Self {
            id: internship.id,
            internship_name: internship.internship_name,
            internship_url: internship.internship_url,
            heading_url: internship.heading_url,
            company_name: internship.company_name,
            stipend: internship.stipend,
            duration: internship.duration,
            location: internship.location,
            apply_by: internship.apply_by,
            img_link: internship.img_link,
            about_company: internship.about_company,
            more_about: internship.more_about,
            who_can_apply: internship.who_can_apply,
            activities: internship.activities,
            skills: internship.skills,
            users: internship.users,
            created_at: internship.created_at,
            updated_at: internship.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct InternshipsResponse {
    pub internships: Vec<InternshipResponse>,
}

impl From<Vec<Internship>> for InternshipsResponse {
    fn from(internships: Vec<Internship>) -> Self {
        Self {
            internships: internships.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HeadingUrlsResponse {
    pub internship_urls: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse {
    pub total_items: u64,
    pub total_pages: u64,
    pub current_page: u64,
    pub internships: Vec<InternshipResponse>,
}

impl From<Page> for PageResponse {
    fn from(page: Page) -> Self {
        Self {
            total_items: page.total_items,
            total_pages: page.total_pages,
            current_page: page.current_page,
            internships: page.internships.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInternshipResponse {
    pub new_internship: InternshipResponse,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatedInternshipResponse {
    pub updated_internship: InternshipResponse,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Public view of an account. The password hash is never included.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: UserId,
    pub name: String,
    pub phone: i64,
    pub email: String,
    pub college: Option<String>,
    pub role: Role,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            phone: user.phone,
            email: user.email,
            college: user.college,
            role: user.role,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct UserMessageResponse {
    pub message: String,
    pub user: UserResponse,
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}
