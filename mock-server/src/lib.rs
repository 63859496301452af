pub mod config;
pub mod error;

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::error::ServerError;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub id: Uuid,
    pub slug: String,
    pub name: String,
    pub synopsis: String,
    pub release_date: String,
    pub rating: i64,
    pub director: String,
    pub main_actor: String,
    pub duration: i64,
    pub genre: Vec<String>,
}

/// Body of POST and PATCH. Integers may arrive as `null`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub release_date: String,
    pub rating: Option<i64>,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub main_actor: String,
    pub duration: Option<i64>,
    #[serde(default)]
    pub genre: Vec<String>,
}

struct Validated {
    rating: i64,
    duration: i64,
}

impl MovieInput {
    fn validate(&self) -> Result<Validated, ServerError> {
        if self.name.trim().is_empty() {
            return Err(ServerError::InvalidInput("name is required".to_string()));
        }
        let rating = self
            .rating
            .ok_or_else(|| ServerError::InvalidInput("rating must be an integer".to_string()))?;
        let duration = self
            .duration
            .ok_or_else(|| ServerError::InvalidInput("duration must be an integer".to_string()))?;
        Ok(Validated { rating, duration })
    }
}

/// Records in insertion order.
pub type Db = Arc<RwLock<Vec<Movie>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Vec::new()));
    Router::new()
        .route("/api/movies", get(list_movies).post(create_movie))
        .route("/api/movies/{id}", patch(update_movie).delete(delete_movie))
        .with_state(db)
        .layer(TraceLayer::new_for_http())
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// Lowercase, with every run of non-alphanumerics collapsed to one `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for c in name.chars().flat_map(char::to_lowercase) {
        if c.is_alphanumeric() {
            slug.push(c);
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

async fn list_movies(State(db): State<Db>) -> Json<Vec<Movie>> {
    Json(db.read().await.clone())
}

async fn create_movie(
    State(db): State<Db>,
    Json(input): Json<MovieInput>,
) -> Result<(StatusCode, Json<Movie>), ServerError> {
    let valid = input.validate()?;
    let mut movies = db.write().await;
    if movies.iter().any(|m| m.name == input.name) {
        return Err(ServerError::DuplicateName(input.name));
    }
    let movie = Movie {
        id: Uuid::new_v4(),
        slug: slugify(&input.name),
        name: input.name,
        synopsis: input.synopsis,
        release_date: input.release_date,
        rating: valid.rating,
        director: input.director,
        main_actor: input.main_actor,
        duration: valid.duration,
        genre: input.genre,
    };
    tracing::debug!(id = %movie.id, name = %movie.name, "movie created");
    movies.push(movie.clone());
    Ok((StatusCode::CREATED, Json(movie)))
}

async fn update_movie(
    State(db): State<Db>,
    Path(id): Path<Uuid>,
    Json(input): Json<MovieInput>,
) -> Result<Json<Movie>, ServerError> {
    let valid = input.validate()?;
    let mut movies = db.write().await;
    if movies.iter().any(|m| m.id != id && m.name == input.name) {
        return Err(ServerError::DuplicateName(input.name));
    }
    let movie = movies
        .iter_mut()
        .find(|m| m.id == id)
        .ok_or(ServerError::NotFound)?;
    movie.slug = slugify(&input.name);
    movie.name = input.name;
    movie.synopsis = input.synopsis;
    movie.release_date = input.release_date;
    movie.rating = valid.rating;
    movie.director = input.director;
    movie.main_actor = input.main_actor;
    movie.duration = valid.duration;
    movie.genre = input.genre;
    Ok(Json(movie.clone()))
}

async fn delete_movie(State(db): State<Db>, Path(id): Path<Uuid>) -> Result<StatusCode, ServerError> {
    let mut movies = db.write().await;
    let index = movies
        .iter()
        .position(|m| m.id == id)
        .ok_or(ServerError::NotFound)?;
    movies.remove(index);
    Ok(StatusCode::NO_CONTENT)
}
