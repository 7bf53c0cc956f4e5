//! Fixed internship categories and the keywords used to match them.
//!
//! Keywords are tried in declaration order by the category matcher, so the
//! order within each list is part of the observable behavior.

use strum::{Display, EnumIter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Category {
    #[strum(serialize = "Software Development")]
    SoftwareDevelopment,
    #[strum(serialize = "Graphics Designer")]
    GraphicsDesigner,
    #[strum(serialize = "Data Science")]
    DataScience,
    #[strum(serialize = "Business Development")]
    BusinessDevelopment,
    #[strum(serialize = "Marketing")]
    Marketing,
    #[strum(serialize = "Finance")]
    Finance,
    #[strum(serialize = "Editor")]
    Editor,
    #[strum(serialize = "Content Writer")]
    ContentWriter,
    #[strum(serialize = "Human Resources")]
    HumanResources,
    #[strum(serialize = "Web Development")]
    WebDevelopment,
}

const SOFTWARE_KEYWORDS: &[&str] = &[
    "software",
    "developer",
    "engineer",
    "programming",
    "java",
    "python",
    "c++",
    "android",
    "flutter",
    "backend",
];

const GRAPHIC_KEYWORDS: &[&str] = &[
    "graphic",
    "design",
    "illustrator",
    "photoshop",
    "ui/ux",
    "visual",
    "motion",
    "animation",
];

const DATA_SCIENCE_KEYWORDS: &[&str] = &[
    "data science",
    "data",
    "machine learning",
    "analytics",
    "analyst",
    "artificial intelligence",
    "deep learning",
    "statistics",
];

const BUSINESS_DEVELOPMENT_KEYWORDS: &[&str] = &[
    "business development",
    "business",
    "sales",
    "client",
    "partnership",
    "lead generation",
];

const MARKETING_KEYWORDS: &[&str] = &[
    "marketing",
    "digital marketing",
    "social media",
    "seo",
    "brand",
    "growth",
    "campaign",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "finance",
    "accounting",
    "accounts",
    "investment",
    "banking",
    "audit",
    "tax",
];

const EDITOR_KEYWORDS: &[&str] = &[
    "editor",
    "editing",
    "video",
    "proofread",
    "post production",
];

const CONTENT_WRITING_KEYWORDS: &[&str] = &[
    "content",
    "writer",
    "writing",
    "copywriting",
    "blog",
    "technical writing",
];

const HUMAN_RESOURCES_KEYWORDS: &[&str] = &[
    "human resources",
    "hr",
    "recruitment",
    "recruiter",
    "talent acquisition",
    "people operations",
];

const WEB_DEVELOPMENT_KEYWORDS: &[&str] = &[
    "web",
    "frontend",
    "front end",
    "full stack",
    "react",
    "javascript",
    "node",
    "wordpress",
];

impl Category {
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::SoftwareDevelopment => SOFTWARE_KEYWORDS,
            Self::GraphicsDesigner => GRAPHIC_KEYWORDS,
            Self::DataScience => DATA_SCIENCE_KEYWORDS,
            Self::BusinessDevelopment => BUSINESS_DEVELOPMENT_KEYWORDS,
            Self::Marketing => MARKETING_KEYWORDS,
            Self::Finance => FINANCE_KEYWORDS,
            Self::Editor => EDITOR_KEYWORDS,
            Self::ContentWriter => CONTENT_WRITING_KEYWORDS,
            Self::HumanResources => HUMAN_RESOURCES_KEYWORDS,
            Self::WebDevelopment => WEB_DEVELOPMENT_KEYWORDS,
        }
    }

    /// URL segment for this category, e.g. `data-science`.
    pub fn slug(&self) -> String {
        slugify(&self.to_string())
    }
}

/// Lowercases `name` and collapses each whitespace run into a single hyphen.
pub fn slugify(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}
