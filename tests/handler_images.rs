mod common;

use axum::body::Bytes;
use axum::http::StatusCode;

use common::{KEEPER_TOKEN, MAX_IMAGE_BYTES, spawn_app};

#[tokio::test]
async fn test_upload_image_success() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/rex.png")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from_static(b"fake-png-bytes"))
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    let key = json["key"].as_str().unwrap();
    assert!(key.ends_with("-rex.png"));
    assert_eq!(key.len(), 12 + 1 + "rex.png".len());
    assert_eq!(json["url"], format!("/images/{key}"));
    assert_eq!(json["size"], 14);

    let stored = std::fs::read(app.image_dir.path().join(key)).unwrap();
    assert_eq!(stored, b"fake-png-bytes");
}

#[tokio::test]
async fn test_uploaded_image_is_served() {
    let app = spawn_app().await;

    let upload = app
        .server
        .put("/api/images/whiskers.jpg")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from_static(b"jpeg-bytes"))
        .await;
    upload.assert_status(StatusCode::CREATED);

    let url = upload.json::<serde_json::Value>()["url"]
        .as_str()
        .unwrap()
        .to_string();

    let response = app.server.get(&url).await;

    response.assert_status_ok();
    assert_eq!(response.as_bytes().as_ref(), b"jpeg-bytes");
}

#[tokio::test]
async fn test_same_name_gets_distinct_keys() {
    let app = spawn_app().await;

    let mut keys = Vec::new();
    for _ in 0..2 {
        let response = app
            .server
            .put("/api/images/rex.png")
            .authorization_bearer(KEEPER_TOKEN)
            .bytes(Bytes::from_static(b"png"))
            .await;
        response.assert_status(StatusCode::CREATED);
        keys.push(response.json::<serde_json::Value>()["key"].clone());
    }

    assert_ne!(keys[0], keys[1]);
}

#[tokio::test]
async fn test_upload_anonymous_is_unauthorized() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/rex.png")
        .bytes(Bytes::from_static(b"png"))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(std::fs::read_dir(app.image_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_upload_rejects_unsupported_extension() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/notes.txt")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from_static(b"hello"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_upload_rejects_hidden_file_name() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/.rex.png")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from_static(b"png"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_empty_body() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/rex.png")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::new())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upload_rejects_oversized_body() {
    let app = spawn_app().await;

    let response = app
        .server
        .put("/api/images/rex.png")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from(vec![0u8; MAX_IMAGE_BYTES + 1]))
        .await;

    response.assert_status(StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(std::fs::read_dir(app.image_dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_missing_image_is_not_found() {
    let app = spawn_app().await;

    let response = app.server.get("/images/AAAAAAAAAAAA-missing.png").await;

    response.assert_status_not_found();
}
