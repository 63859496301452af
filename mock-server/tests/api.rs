use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Movie};
use tower::ServiceExt;

const ALIEN: &str = r#"{"name":"Alien","synopsis":"Nostromo","releaseDate":"1979-05-25","rating":9,"director":"Ridley Scott","mainActor":"Sigourney Weaver","duration":117,"genre":["Terror"]}"#;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn json_request(method: &str, uri: &str, body: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(http::header::CONTENT_TYPE, "application/json;charset=UTF-8")
        .body(body.to_string())
        .unwrap()
}

fn empty_request(method: &str, uri: &str) -> Request<String> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(String::new())
        .unwrap()
}

// --- list ---

#[tokio::test]
async fn list_movies_empty() {
    let resp = app().oneshot(empty_request("GET", "/api/movies")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert!(movies.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_movie_returns_201_with_id_and_slug() {
    let resp = app()
        .oneshot(json_request("POST", "/api/movies", ALIEN))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let movie: Movie = body_json(resp).await;
    assert_eq!(movie.name, "Alien");
    assert_eq!(movie.slug, "alien");
    assert_eq!(movie.duration, 117);
    assert_eq!(movie.genre, vec!["Terror"]);
}

#[tokio::test]
async fn create_movie_with_null_rating_returns_400() {
    let resp = app()
        .oneshot(json_request(
            "POST",
            "/api/movies",
            r#"{"name":"Alien","rating":null,"duration":117,"genre":[]}"#,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["errorCode"], "22P02");
}

#[tokio::test]
async fn create_movie_malformed_json_is_rejected() {
    let resp = app()
        .oneshot(json_request("POST", "/api/movies", "{not json"))
        .await
        .unwrap();

    assert!(resp.status().is_client_error());
}

// --- update ---

#[tokio::test]
async fn update_movie_not_found() {
    let resp = app()
        .oneshot(json_request(
            "PATCH",
            "/api/movies/00000000-0000-0000-0000-000000000000",
            ALIEN,
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_movie_bad_uuid_returns_400() {
    let resp = app()
        .oneshot(json_request("PATCH", "/api/movies/not-a-uuid", ALIEN))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

// --- delete ---

#[tokio::test]
async fn delete_movie_not_found() {
    let resp = app()
        .oneshot(empty_request(
            "DELETE",
            "/api/movies/00000000-0000-0000-0000-000000000000",
        ))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- full CRUD lifecycle ---

#[tokio::test]
async fn crud_lifecycle() {
    use tower::Service;

    let mut app = app().into_service();

    // create
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/movies", ALIEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Movie = body_json(resp).await;
    let id = created.id;

    // duplicate name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("POST", "/api/movies", ALIEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    let body: serde_json::Value = body_json(resp).await;
    assert_eq!(body["errorCode"], "23505");

    // second movie
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "POST",
            "/api/movies",
            r#"{"name":"Aliens","rating":8,"duration":137,"genre":[]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let second: Movie = body_json(resp).await;

    // list keeps insertion order
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/movies"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].id, id);
    assert_eq!(movies[1].id, second.id);

    // renaming onto an existing name conflicts
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("PATCH", &format!("/api/movies/{}", second.id), ALIEN))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // update keeping own name
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request(
            "PATCH",
            &format!("/api/movies/{id}"),
            r#"{"name":"Alien","synopsis":"Director's cut","rating":10,"duration":116,"genre":["Terror","Ciencia ficcion"]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Movie = body_json(resp).await;
    assert_eq!(updated.id, id);
    assert_eq!(updated.rating, 10);
    assert_eq!(updated.synopsis, "Director's cut");
    assert_eq!(updated.genre.len(), 2);

    // delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(json_request("DELETE", &format!("/api/movies/{id}"), "{}"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());

    // list after delete
    let resp = ServiceExt::ready(&mut app)
        .await
        .unwrap()
        .call(empty_request("GET", "/api/movies"))
        .await
        .unwrap();
    let movies: Vec<Movie> = body_json(resp).await;
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].id, second.id);
}
