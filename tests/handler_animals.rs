mod common;

use axum::http::{HeaderValue, StatusCode, header};
use serde_json::json;

use axum::body::Bytes;

use common::{InMemoryAnimals, KEEPER_TOKEN, REX_IMAGE, TestApp, spawn_app, spawn_app_with};

fn rex() -> serde_json::Value {
    json!({
        "species": "Dog",
        "name": "Rex",
        "age": 3,
        "enclosure": "East Yard",
        "image": REX_IMAGE
    })
}

async fn app_with_rex_photo() -> TestApp {
    let app = spawn_app().await;
    app.seed_image(REX_IMAGE);
    app
}

#[tokio::test]
async fn test_register_dog_success() {
    let app = app_with_rex_photo().await;

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&rex())
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["species"], "Dog");
    assert_eq!(json["name"], "Rex");
    assert_eq!(json["age"], 3.0);
    assert_eq!(json["enclosure"], "East Yard");
    assert_eq!(json["image_key"], REX_IMAGE);
    assert_eq!(json["owner_id"], 1);
    assert_eq!(json["sound"], "Woof woof");
    assert_eq!(
        json["description"],
        "Name: Rex, Age: 3, Species: Dog, Enclosure: East Yard"
    );

    let records = app.animals.records.lock().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].name, "Rex");
}

#[tokio::test]
async fn test_register_every_species_sound() {
    let app = app_with_rex_photo().await;

    let cases = [
        ("Alpaca", "Yeeeeeet!"),
        ("Bird", "Tweet tweet"),
        ("Cat", "Meow meow"),
        ("Dog", "Woof woof"),
        ("Fish", "Blub blub"),
    ];

    for (species, sound) in cases {
        let mut body = rex();
        body["species"] = json!(species);

        let response = app
            .server
            .post("/api/animals")
            .authorization_bearer(KEEPER_TOKEN)
            .json(&body)
            .await;

        response.assert_status(StatusCode::CREATED);
        let json = response.json::<serde_json::Value>();
        assert_eq!(json["sound"], sound, "{species}");
    }

    assert_eq!(app.animals.records.lock().unwrap().len(), cases.len());
}

#[tokio::test]
async fn test_register_fractional_age() {
    let app = app_with_rex_photo().await;

    let mut body = rex();
    body["species"] = json!("Fish");
    body["name"] = json!("Nemo");
    body["age"] = json!(0.5);

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["description"],
        "Name: Nemo, Age: 0.5, Species: Fish, Enclosure: East Yard"
    );
}

#[tokio::test]
async fn test_register_unrecognized_species() {
    let app = spawn_app().await;

    let mut body = rex();
    body["species"] = json!("Unicorn");

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unrecognized_species");
    assert_eq!(json["error"]["details"]["species"], "Unicorn");

    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_species_is_case_sensitive() {
    let app = spawn_app().await;

    let mut body = rex();
    body["species"] = json!("dog");

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unrecognized_species");
}

#[tokio::test]
async fn test_register_rejects_non_positive_age() {
    let app = spawn_app().await;

    for age in [json!(0), json!(-1)] {
        let mut body = rex();
        body["age"] = age;

        let response = app
            .server
            .post("/api/animals")
            .authorization_bearer(KEEPER_TOKEN)
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert!(json["error"]["details"]["fields"]["age"].is_array());
    }

    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_rejects_blank_fields() {
    let app = spawn_app().await;

    let body = json!({
        "species": "",
        "name": "   ",
        "age": 2,
        "enclosure": "",
        "image": ""
    });

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    let fields = &json["error"]["details"]["fields"];
    assert_eq!(fields["name"][0], "Please enter an animal name");
    assert_eq!(fields["species"][0], "Please select a species");
    assert_eq!(fields["enclosure"][0], "Please select an enclosure");
    assert_eq!(fields["image"][0], "Please select an image");
}

#[tokio::test]
async fn test_register_rejects_malformed_json() {
    let app = spawn_app().await;

    let mut body = rex();
    body["age"] = json!("three");

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_anonymous_is_unauthorized() {
    let app = spawn_app().await;

    let response = app.server.post("/api/animals").json(&rex()).await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(response.header(header::WWW_AUTHENTICATE), "Bearer");

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "unauthorized");
    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_unknown_token_is_unauthorized() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer("not-a-keeper")
        .json(&rex())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_malformed_authorization_header() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/animals")
        .add_header(header::AUTHORIZATION, HeaderValue::from_static("Basic YW5hOnB3"))
        .json(&rex())
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_register_persistence_failure() {
    let app = spawn_app_with(InMemoryAnimals {
        failing: true,
        ..Default::default()
    })
    .await;
    app.seed_image(REX_IMAGE);

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&rex())
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "persistence_error");
    assert!(json.get("sound").is_none());
}

#[tokio::test]
async fn test_register_image_never_uploaded() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&rex())
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "validation_error");
    assert_eq!(json["error"]["details"]["image"], REX_IMAGE);

    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_register_rejects_arbitrary_image_values() {
    let app = app_with_rex_photo().await;

    for image in ["never-uploaded.png", "../../etc/passwd", "<script>"] {
        let mut body = rex();
        body["image"] = json!(image);

        let response = app
            .server
            .post("/api/animals")
            .authorization_bearer(KEEPER_TOKEN)
            .json(&body)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["code"], "validation_error");
        assert_eq!(
            json["error"]["details"]["fields"]["image"][0],
            "Image must be a key returned by the upload endpoint"
        );
    }

    assert!(app.animals.records.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_upload_then_register() {
    let app = spawn_app().await;

    let upload = app
        .server
        .put("/api/images/bella.jpg")
        .authorization_bearer(KEEPER_TOKEN)
        .bytes(Bytes::from_static(b"jpeg-bytes"))
        .await;
    upload.assert_status(StatusCode::CREATED);
    let key = upload.json::<serde_json::Value>()["key"].clone();

    let mut body = rex();
    body["species"] = json!("Cat");
    body["name"] = json!("Bella");
    body["image"] = key.clone();

    let response = app
        .server
        .post("/api/animals")
        .authorization_bearer(KEEPER_TOKEN)
        .json(&body)
        .await;

    response.assert_status(StatusCode::CREATED);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["image_key"], key);
    assert_eq!(json["sound"], "Meow meow");
}
