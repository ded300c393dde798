// src/application/routes/tag_routes.rs

use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};

use crate::application::dto::{MovieDto, TagDto};
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;

pub fn tag_routes() -> Router<AppState> {
    Router::new()
        .route("/api/tags", get(list_tag_names))
        .route("/api/tags/:name", get(get_tag))
        .route("/api/tags/:name/movies", get(get_movies_for_tag))
}

/// GET /api/tags
pub async fn list_tag_names(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.utility_service.get_tag_names())
}

/// GET /api/tags/:name
pub async fn get_tag(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
) -> Result<Json<TagDto>, ErrorResponse> {
    let tag = state.movie_service.get_tag(&tag_name)?;
    Ok(Json(TagDto::from(tag)))
}

/// GET /api/tags/:name/movies
pub async fn get_movies_for_tag(
    State(state): State<AppState>,
    Path(tag_name): Path<String>,
) -> Result<Json<Vec<MovieDto>>, ErrorResponse> {
    let movies = state.movie_service.get_movies_for_tag(&tag_name)?;
    Ok(Json(movies.iter().map(|m| MovieDto::from(m.as_ref())).collect()))
}
