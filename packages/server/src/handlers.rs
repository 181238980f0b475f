//! HTTP handler functions for the directory API.

use actix_web::{HttpRequest, HttpResponse, web};
use awaas_catalog_models::Community;
use awaas_server_models::{
    ApiCommunitySummary, ApiHealth, ApiSearchResponse, CommunityQueryParams, UpdateStatusRequest,
};
use awaas_storage::StorageError;
use awaas_storage::models::NewMessage;
use serde::Deserialize;

use crate::AppState;

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/states`
///
/// Returns state names in seed order.
pub async fn states(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.states())
}

/// Query parameter for the cities endpoint.
#[derive(Debug, Deserialize)]
pub struct CitiesQuery {
    /// Restrict to one state; omitted means every city.
    pub state: Option<String>,
}

/// `GET /api/cities[?state=...]`
///
/// With a state, the cities of that state (empty for an unknown state);
/// without one, every city across every state.
pub async fn cities(state: web::Data<AppState>, query: web::Query<CitiesQuery>) -> HttpResponse {
    let cities = match query.state.as_deref() {
        Some(name) => state.catalog.cities_for_state(name),
        None => state.catalog.all_cities(),
    };
    HttpResponse::Ok().json(cities)
}

/// Query parameter for the areas endpoint.
#[derive(Debug, Deserialize)]
pub struct AreasQuery {
    /// City whose areas to list.
    pub city: String,
}

/// `GET /api/areas?city=...`
///
/// Distinct areas of the city's records, in first-seen order.
pub async fn areas(state: web::Data<AppState>, query: web::Query<AreasQuery>) -> HttpResponse {
    HttpResponse::Ok().json(state.catalog.areas_for_city(&query.city))
}

/// `GET /api/communities`
///
/// Free-text search plus preference filtering. The base candidate set comes
/// from the text query (the whole catalog when blank); the filter engine
/// then applies the conjunction of every supplied axis.
pub async fn communities(
    state: web::Data<AppState>,
    params: web::Query<CommunityQueryParams>,
) -> HttpResponse {
    let params = params.into_inner();
    let query = params.q.clone().unwrap_or_default();
    let preferences = params.into_preferences();

    let base: Vec<&Community> = state.catalog.text_search(&query);
    let matched = awaas_search::filter(&base, &preferences);
    let results: Vec<ApiCommunitySummary> =
        matched.iter().map(|c| ApiCommunitySummary::from(*c)).collect();

    HttpResponse::Ok().json(ApiSearchResponse {
        count: results.len(),
        preferences,
        results,
    })
}

/// `GET /api/communities/{id}`
///
/// Full community detail, or a not-found body the caller renders as its
/// not-found state.
pub async fn community_detail(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();
    state.catalog.find_by_id(&id).map_or_else(
        || {
            HttpResponse::NotFound().json(serde_json::json!({
                "error": format!("No community with id {id}")
            }))
        },
        |community| HttpResponse::Ok().json(community),
    )
}

/// `POST /api/contact`
///
/// Stores a contact form submission.
pub async fn contact_submit(
    state: web::Data<AppState>,
    body: web::Json<NewMessage>,
) -> HttpResponse {
    match state.messages.insert_message(body.into_inner()).await {
        Ok(message) => HttpResponse::Created().json(message),
        Err(e) => {
            log::error!("Failed to store contact message: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to store message"
            }))
        }
    }
}

/// `GET /api/admin/messages`
///
/// All contact messages, newest first. Requires the admin bearer token.
pub async fn admin_messages(state: web::Data<AppState>, req: HttpRequest) -> HttpResponse {
    if !state.is_admin(&req) {
        return unauthorized();
    }
    match state.messages.list_messages().await {
        Ok(messages) => HttpResponse::Ok().json(messages),
        Err(e) => {
            log::error!("Failed to list messages: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to list messages"
            }))
        }
    }
}

/// `PUT /api/admin/messages/{id}/status`
///
/// Sets a message's moderation status. Requires the admin bearer token.
pub async fn admin_update_status(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
    body: web::Json<UpdateStatusRequest>,
) -> HttpResponse {
    if !state.is_admin(&req) {
        return unauthorized();
    }
    let id = path.into_inner();
    match state.messages.update_status(&id, body.status).await {
        Ok(message) => HttpResponse::Ok().json(message),
        Err(e @ StorageError::NotFound { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Failed to update message {id}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to update message"
            }))
        }
    }
}

/// `DELETE /api/admin/messages/{id}`
///
/// Deletes a message. Requires the admin bearer token.
pub async fn admin_delete_message(
    state: web::Data<AppState>,
    req: HttpRequest,
    path: web::Path<String>,
) -> HttpResponse {
    if !state.is_admin(&req) {
        return unauthorized();
    }
    let id = path.into_inner();
    match state.messages.delete_message(&id).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e @ StorageError::NotFound { .. }) => {
            HttpResponse::NotFound().json(serde_json::json!({ "error": e.to_string() }))
        }
        Err(e) => {
            log::error!("Failed to delete message {id}: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to delete message"
            }))
        }
    }
}

/// `GET /api/posts`
///
/// Blog posts, newest publish date first.
pub async fn posts(state: web::Data<AppState>) -> HttpResponse {
    match state.posts.list_posts().await {
        Ok(posts) => HttpResponse::Ok().json(posts),
        Err(e) => {
            log::error!("Failed to list posts: {e}");
            HttpResponse::InternalServerError().json(serde_json::json!({
                "error": "Failed to list posts"
            }))
        }
    }
}

/// Standard rejection for admin endpoints.
fn unauthorized() -> HttpResponse {
    HttpResponse::Unauthorized().json(serde_json::json!({
        "error": "Admin token required"
    }))
}
