//! Catalog tests: movie and channel CRUD, the series/season/episode
//! hierarchy, duplicate-number rejection, and counter maintenance.

use http::StatusCode;
use serde_json::json;

use crate::helpers::{TestApp, create_episode, create_season, create_series};

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn movie_crud_round_trip() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/movies",
            Some(json!({
                "title": "La Gran Película",
                "synopsis": "A test movie",
                "genre": "Action",
                "year": 2024,
                "duration": 120,
                "coverUrl": "https://example.com/cover.jpg",
                "videoUrl": "https://example.com/movie.mp4",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let id = response.body["movie"]["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/movies/{id}"),
            Some(json!({
                "title": "La Gran Película (Remaster)",
                "synopsis": "A test movie",
                "genre": "Action",
                "year": 2024,
                "duration": 120,
                "coverUrl": "https://example.com/cover.jpg",
                "videoUrl": "https://example.com/movie.mp4",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["movie"]["title"], "La Gran Película (Remaster)");

    let response = app
        .request("DELETE", &format!("/api/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/movies/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn movie_without_a_title_is_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/movies",
            Some(json!({
                "title": "",
                "synopsis": "",
                "genre": "Action",
                "year": 2024,
                "duration": 90,
                "coverUrl": "",
                "videoUrl": "https://example.com/movie.mp4",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn non_admins_can_browse_but_not_mutate() {
    let app = TestApp::new().await;
    let admin_token = app.admin_token().await;
    create_series(&app, &admin_token, "Serie Pública").await;

    app.create_user("Usuario Demo", "123", 1, false).await;
    let token = app.login("123").await;

    let response = app.request("GET", "/api/series", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["series"].as_array().unwrap().len(), 1);

    let response = app
        .request(
            "POST",
            "/api/series",
            Some(json!({
                "title": "Serie Pirata",
                "synopsis": "",
                "genre": "Drama",
                "year": 2023,
                "coverUrl": "",
                "videoUrl": "https://example.com/trailer.mp4",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn series_counters_follow_season_and_episode_changes() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie Contada").await;
    let season1 = create_season(&app, &token, series_id, 1).await;
    let season2 = create_season(&app, &token, series_id, 2).await;

    create_episode(&app, &token, season1, 1).await;
    create_episode(&app, &token, season1, 2).await;
    let episode = create_episode(&app, &token, season2, 1).await;

    let response = app
        .request("GET", &format!("/api/series/{series_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["series"]["seasons"], 2);
    assert_eq!(response.body["series"]["episodes"], 3);
    assert_eq!(response.body["series"]["seasonsList"].as_array().unwrap().len(), 2);

    // Deleting an episode drops the episode total.
    app.request("DELETE", &format!("/api/episodes/{episode}"), None, Some(&token))
        .await;
    let response = app
        .request("GET", &format!("/api/series/{series_id}"), None, Some(&token))
        .await;
    assert_eq!(response.body["series"]["episodes"], 2);

    // Deleting a season drops both counters; its episodes go with it.
    app.request("DELETE", &format!("/api/seasons/{season1}"), None, Some(&token))
        .await;
    let response = app
        .request("GET", &format!("/api/series/{series_id}"), None, Some(&token))
        .await;
    assert_eq!(response.body["series"]["seasons"], 1);
    assert_eq!(response.body["series"]["episodes"], 0);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn season_episode_counter_is_maintained() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie").await;
    let season_id = create_season(&app, &token, series_id, 1).await;
    create_episode(&app, &token, season_id, 1).await;
    create_episode(&app, &token, season_id, 2).await;

    let response = app
        .request("GET", &format!("/api/seasons/{season_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["season"]["totalEpisodes"], 2);
    assert_eq!(response.body["season"]["episodes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn duplicate_season_numbers_conflict() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie").await;
    create_season(&app, &token, series_id, 1).await;

    let response = app
        .request(
            "POST",
            "/api/seasons",
            Some(json!({
                "seriesId": series_id,
                "number": 1,
                "title": "Temporada Repetida",
                "year": 2023,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn renumbering_a_season_onto_a_sibling_conflicts() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie").await;
    create_season(&app, &token, series_id, 1).await;
    let season2 = create_season(&app, &token, series_id, 2).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/seasons/{season2}"),
            Some(json!({
                "number": 1,
                "title": "Temporada 2",
                "year": 2023,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // Keeping its own number is not a conflict.
    let response = app
        .request(
            "PUT",
            &format!("/api/seasons/{season2}"),
            Some(json!({
                "number": 2,
                "title": "Temporada 2 (Editada)",
                "year": 2023,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn duplicate_episode_numbers_conflict() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie").await;
    let season_id = create_season(&app, &token, series_id, 1).await;
    create_episode(&app, &token, season_id, 1).await;

    let response = app
        .request(
            "POST",
            "/api/episodes",
            Some(json!({
                "seasonId": season_id,
                "number": 1,
                "title": "Episodio Repetido",
                "duration": 42,
                "videoUrl": "https://example.com/episode.mp4",
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn season_for_an_unknown_series_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/seasons",
            Some(json!({
                "seriesId": uuid::Uuid::new_v4(),
                "number": 1,
                "title": "Temporada Huérfana",
                "year": 2023,
            })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn unfiltered_season_listing_spans_all_series() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let first = create_series(&app, &token, "Serie A").await;
    let second = create_series(&app, &token, "Serie B").await;
    create_season(&app, &token, first, 1).await;
    create_season(&app, &token, second, 1).await;
    create_season(&app, &token, second, 2).await;

    let response = app.request("GET", "/api/seasons", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["seasons"].as_array().unwrap().len(), 3);

    let response = app
        .request("GET", &format!("/api/seasons?seriesId={second}"), None, Some(&token))
        .await;
    assert_eq!(response.body["seasons"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn unfiltered_episode_listing_spans_the_catalog() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let first = create_series(&app, &token, "Serie A").await;
    let second = create_series(&app, &token, "Serie B").await;
    let season_a = create_season(&app, &token, first, 1).await;
    let season_b = create_season(&app, &token, second, 1).await;
    create_episode(&app, &token, season_a, 1).await;
    create_episode(&app, &token, season_b, 1).await;
    create_episode(&app, &token, season_b, 2).await;

    let response = app.request("GET", "/api/episodes", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["episodes"].as_array().unwrap().len(), 3);

    let response = app
        .request(
            "GET",
            &format!("/api/episodes?seasonId={season_b}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.body["episodes"].as_array().unwrap().len(), 2);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn deleting_a_series_removes_its_tree() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let series_id = create_series(&app, &token, "Serie Borrable").await;
    let season_id = create_season(&app, &token, series_id, 1).await;
    create_episode(&app, &token, season_id, 1).await;

    let response = app
        .request("DELETE", &format!("/api/series/{series_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/seasons/{season_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires a PostgreSQL test database"]
async fn channel_crud_round_trip() {
    let app = TestApp::new().await;
    let token = app.admin_token().await;

    let response = app
        .request(
            "POST",
            "/api/channels",
            Some(json!({
                "name": "Canal Uno",
                "coverUrl": "https://example.com/logo.png",
                "m3u8Url": "https://example.com/stream.m3u8",
            })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK, "{:?}", response.body);
    let id = response.body["channel"]["id"].as_str().unwrap().to_string();

    let response = app.request("GET", "/api/channels", None, Some(&token)).await;
    assert_eq!(response.body["channels"].as_array().unwrap().len(), 1);

    let response = app
        .request("DELETE", &format!("/api/channels/{id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}
