// src/application/routes/movie_routes.rs
//
// Movie Route Handlers
//
// RULES:
// - Accept DTOs
// - Call services
// - Return DTOs
// - Never contain business logic

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::application::dto::*;
use crate::application::error_handling::ErrorResponse;
use crate::application::state::AppState;
use crate::domain::{MovieId, ReleaseYear};
use crate::services::AddReviewRequest;

/// Largest number of movies one random request may ask for
pub const MAX_RANDOM_MOVIES: usize = 100;

#[derive(Debug, Deserialize)]
pub struct RandomMoviesQuery {
    #[serde(default = "default_quantity")]
    pub quantity: usize,
}

fn default_quantity() -> usize {
    3
}

pub fn movie_routes() -> Router<AppState> {
    Router::new()
        .route("/api/movies/first", get(get_first_movie))
        .route("/api/movies/last", get(get_last_movie))
        .route("/api/movies/random", get(get_random_movies))
        .route("/api/movies/by-year/:year", get(get_movies_by_year))
        .route("/api/movies/:id", get(get_movie))
        .route(
            "/api/movies/:id/reviews",
            get(get_reviews_for_movie).post(add_review),
        )
}

/// GET /api/movies/first
pub async fn get_first_movie(State(state): State<AppState>) -> Result<Json<MovieDto>, ErrorResponse> {
    let movie = state.movie_service.get_first_movie()?;
    Ok(Json(MovieDto::from(movie.as_ref())))
}

/// GET /api/movies/last
pub async fn get_last_movie(State(state): State<AppState>) -> Result<Json<MovieDto>, ErrorResponse> {
    let movie = state.movie_service.get_last_movie()?;
    Ok(Json(MovieDto::from(movie.as_ref())))
}

/// GET /api/movies/random?quantity=N
pub async fn get_random_movies(
    State(state): State<AppState>,
    Query(query): Query<RandomMoviesQuery>,
) -> Result<Json<Vec<MovieDto>>, ErrorResponse> {
    if query.quantity == 0 || query.quantity > MAX_RANDOM_MOVIES {
        return Err(ErrorResponse::validation(format!(
            "quantity must be between 1 and {}",
            MAX_RANDOM_MOVIES
        )));
    }

    let movies = state.utility_service.get_random_movies(query.quantity);
    Ok(Json(movies.iter().map(|m| MovieDto::from(m.as_ref())).collect()))
}

/// GET /api/movies/by-year/:year
pub async fn get_movies_by_year(
    State(state): State<AppState>,
    Path(year): Path<u16>,
) -> Json<MoviesByYearDto> {
    let result = state.movie_service.get_movies_by_year(ReleaseYear::new(year));
    Json(MoviesByYearDto::new(year, result))
}

/// GET /api/movies/:id
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MovieDto>, ErrorResponse> {
    let movie = state.movie_service.get_movie(MovieId::new(id))?;
    Ok(Json(MovieDto::from(movie.as_ref())))
}

/// GET /api/movies/:id/reviews
pub async fn get_reviews_for_movie(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<ReviewDto>>, ErrorResponse> {
    let reviews = state.movie_service.get_reviews_for_movie(MovieId::new(id))?;
    Ok(Json(reviews.into_iter().map(ReviewDto::from).collect()))
}

/// POST /api/movies/:id/reviews
pub async fn add_review(
    State(state): State<AppState>,
    Path(id): Path<u32>,
    Json(dto): Json<AddReviewDto>,
) -> Result<(StatusCode, Json<ReviewDto>), ErrorResponse> {
    let review = state.movie_service.add_review(AddReviewRequest {
        movie_id: MovieId::new(id),
        review_text: dto.review_text,
        user_name: dto.user_name,
    })?;

    Ok((StatusCode::CREATED, Json(ReviewDto::from(review))))
}
