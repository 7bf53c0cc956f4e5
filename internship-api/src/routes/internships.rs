use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::Deserialize;
use strum::IntoEnumIterator;
use tracing::instrument;

use crate::{
    adapters::inbound::http::{
        HeadingUrlsResponse, InternshipResponse, InternshipsResponse, MessageResponse,
        NewInternshipResponse, PageResponse, UpdatedInternshipResponse,
    },
    domain::{
        catalog::Category,
        models::{InternshipDraft, InternshipId, InternshipPatch, NewInternship, PageNumber},
        ListingError,
    },
    routes::ApiError,
    AppState,
};

const FEATURED_LIMIT: u64 = 6;
const BULK_LIMIT: u64 = 1500;

pub fn router() -> Router<AppState> {
    let mut router = Router::new()
        .route("/all", get(all_heading_urls))
        .route("/top6", get(featured))
        .route("/top1k", get(bulk))
        .route("/page", get(page))
        .route("/search", get(search))
        .route("/internship/detail/:heading_url", get(detail))
        .route("/update-internship/:id", put(update_internship))
        .route("/add", post(add_internship))
        .route("/delete-all", delete(delete_all));

    for category in Category::iter() {
        let path = format!("/category-search/{}", category.slug());
        tracing::debug!("Generated route for {category}: {path}");

        router = router.route(
            &path,
            get(move |state: State<AppState>| category_search(state, category)),
        );
    }

    router
}

#[instrument(name = "GET /internship/all", skip(app_state))]
async fn all_heading_urls(
    State(app_state): State<AppState>,
) -> Result<Json<HeadingUrlsResponse>, ApiError> {
    let internship_urls = app_state.listing_service.heading_urls().await?;

    Ok(Json(HeadingUrlsResponse { internship_urls }))
}

#[instrument(name = "GET /internship/top6", skip(app_state))]
async fn featured(State(app_state): State<AppState>) -> Result<Json<InternshipsResponse>, ApiError> {
    let internships = app_state.listing_service.top(FEATURED_LIMIT).await?;

    Ok(Json(internships.into()))
}

#[instrument(name = "GET /internship/top1k", skip(app_state))]
async fn bulk(State(app_state): State<AppState>) -> Result<Json<InternshipsResponse>, ApiError> {
    let internships = app_state.listing_service.top(BULK_LIMIT).await?;

    Ok(Json(internships.into()))
}

#[derive(Debug, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

#[instrument(name = "GET /internship/page", skip(app_state))]
async fn page(
    State(app_state): State<AppState>,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> Result<Json<PageResponse>, ApiError> {
    let page_number = match query {
        Ok(Query(query)) => PageNumber::parse(query.page.as_deref()),
        Err(rejection) => {
            tracing::debug!("unreadable page query, using first page: {}", rejection.body_text());
            PageNumber::FIRST
        }
    };
    let page = app_state.listing_service.page(page_number).await?;

    Ok(Json(page.into()))
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    name: Option<String>,
    location: Option<String>,
}

#[instrument(name = "GET /internship/search", skip(app_state))]
async fn search(
    State(app_state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<InternshipsResponse>, ApiError> {
    let Query(query) = query?;
    let internships = app_state
        .listing_service
        .search(query.name, query.location)
        .await?;

    Ok(Json(internships.into()))
}

#[instrument(
    name = "GET /internship/category-search",
    skip(app_state, category),
    fields(category = %category)
)]
async fn category_search(
    State(app_state): State<AppState>,
    category: Category,
) -> Result<Json<InternshipsResponse>, ApiError> {
    let internships = app_state.listing_service.category_search(category).await?;

    Ok(Json(internships.into()))
}

#[instrument(name = "GET /internship/internship/detail", skip(app_state))]
async fn detail(
    State(app_state): State<AppState>,
    Path(heading_url): Path<String>,
) -> Result<Json<InternshipResponse>, ApiError> {
    let internship = app_state.listing_service.detail(&heading_url).await?;

    Ok(Json(internship.into()))
}

#[instrument(name = "PUT /internship/update-internship", skip(app_state, body))]
async fn update_internship(
    State(app_state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<InternshipPatch>, JsonRejection>,
) -> Result<Json<UpdatedInternshipResponse>, ApiError> {
    let Json(patch) = body?;
    let id = id
        .parse::<InternshipId>()
        .map_err(|_| ListingError::NotFound)?;

    let updated = app_state.listing_service.update(id, patch).await?;

    Ok(Json(UpdatedInternshipResponse {
        updated_internship: updated.into(),
    }))
}

#[instrument(name = "POST /internship/add", skip(app_state, body))]
async fn add_internship(
    State(app_state): State<AppState>,
    body: Result<Json<InternshipDraft>, JsonRejection>,
) -> Result<(StatusCode, Json<NewInternshipResponse>), ApiError> {
    let Json(draft) = body?;
    let new_internship = NewInternship::try_from(draft)?;

    let created = app_state.listing_service.add(new_internship).await?;

    Ok((
        StatusCode::CREATED,
        Json(NewInternshipResponse {
            new_internship: created.into(),
        }),
    ))
}

#[instrument(name = "DELETE /internship/delete-all", skip(app_state))]
async fn delete_all(State(app_state): State<AppState>) -> Result<Json<MessageResponse>, ApiError> {
    app_state.listing_service.delete_all().await?;

    Ok(Json(MessageResponse::new(
        "Successfully deleted all internships",
    )))
}
