use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, Car};
use tower::ServiceExt;

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
        .header(http::header::CONTENT_TYPE, "application/json")
        .body(body.to_string())
        .unwrap()
}

fn get_request(uri: &str) -> Request<String> {
    Request::builder().uri(uri).body(String::new()).unwrap()
}

const FUSCA: &str = r#"{"name":"Fusca","brand":"VW","price":15000.0,"gasType":0}"#;

// --- list ---

#[tokio::test]
async fn list_cars_empty() {
    let app = app();
    let resp = app.oneshot(get_request("/cars")).await.unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let cars: Vec<Car> = body_json(resp).await;
    assert!(cars.is_empty());
}

// --- create ---

#[tokio::test]
async fn create_car_returns_201_and_assigns_an_id() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/cars", FUSCA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::CREATED);
    let car: Car = body_json(resp).await;
    assert!(car.id.is_some());
    assert_eq!(car.name, "Fusca");
    assert_eq!(car.gas_type, 0);
}

#[tokio::test]
async fn create_car_malformed_payload_is_rejected() {
    let app = app();
    let resp = app
        .oneshot(json_request("POST", "/cars", r#"{"not_a_car":1}"#))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn created_car_shows_up_in_the_list() {
    let app = app();
    app.clone()
        .oneshot(json_request("POST", "/cars", FUSCA))
        .await
        .unwrap();

    let resp = app.oneshot(get_request("/cars")).await.unwrap();
    let cars: Vec<Car> = body_json(resp).await;
    assert_eq!(cars.len(), 1);
    assert_eq!(cars[0].brand, "VW");
}

// --- update ---

#[tokio::test]
async fn update_unknown_car_returns_404() {
    let app = app();
    let resp = app
        .oneshot(json_request("PUT", "/cars/nope", FUSCA))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn update_keeps_the_path_id() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cars", FUSCA))
        .await
        .unwrap();
    let created: Car = body_json(resp).await;
    let id = created.id.unwrap();

    // Body claims a different id; the stored record must keep its own.
    let body = r#"{"_id":"forged","name":"Fusca 1972","brand":"VW","price":22000.0,"gasType":1}"#;
    let resp = app
        .oneshot(json_request("PUT", &format!("/cars/{id}"), body))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Car = body_json(resp).await;
    assert_eq!(updated.id.as_deref(), Some(id.as_str()));
    assert_eq!(updated.name, "Fusca 1972");
    assert_eq!(updated.price, 22000.0);
    assert_eq!(updated.gas_type, 1);
}

// --- delete ---

#[tokio::test]
async fn delete_returns_204_with_no_body() {
    let app = app();
    let resp = app
        .clone()
        .oneshot(json_request("POST", "/cars", FUSCA))
        .await
        .unwrap();
    let created: Car = body_json(resp).await;
    let id = created.id.unwrap();

    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/cars/{id}"))
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
    assert!(body_bytes(resp).await.is_empty());
}

#[tokio::test]
async fn delete_unknown_car_returns_404() {
    let app = app();
    let resp = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/cars/nope")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

// --- brands ---

#[tokio::test]
async fn brand_table_serves_fipe_names() {
    let app = app();
    let resp = app
        .oneshot(get_request("/api/1/carros/marcas.json"))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let brands: Vec<serde_json::Value> = body_json(resp).await;
    assert!(!brands.is_empty());
    assert!(brands.iter().all(|b| b["fipe_name"].is_string()));
}
