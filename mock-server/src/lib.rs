use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// A stored car record. `_id` is assigned on create and never changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Car {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub brand: String,
    pub price: f64,
    #[serde(rename = "gasType")]
    pub gas_type: u8,
}

/// One row of the FIPE brand table. The real endpoint carries extra fields
/// next to `fipe_name`; clients only read the display name.
#[derive(Clone, Debug, Serialize)]
pub struct Brand {
    pub fipe_name: String,
    pub name: String,
    pub id: u32,
}

pub type Db = Arc<RwLock<HashMap<String, Car>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(HashMap::new()));
    Router::new()
        .route("/cars", get(list_cars).post(create_car))
        .route("/cars/{id}", axum::routing::put(update_car).delete(delete_car))
        .route("/api/1/carros/marcas.json", get(list_brands))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_cars(State(db): State<Db>) -> Json<Vec<Car>> {
    let cars = db.read().await;
    let mut cars: Vec<Car> = cars.values().cloned().collect();
    cars.sort_by(|a, b| a.name.cmp(&b.name));
    Json(cars)
}

async fn create_car(State(db): State<Db>, Json(input): Json<Car>) -> (StatusCode, Json<Car>) {
    let id = Uuid::new_v4().to_string();
    let car = Car {
        id: Some(id.clone()),
        ..input
    };
    db.write().await.insert(id, car.clone());
    (StatusCode::CREATED, Json(car))
}

async fn update_car(
    State(db): State<Db>,
    Path(id): Path<String>,
    Json(input): Json<Car>,
) -> Result<Json<Car>, StatusCode> {
    let mut cars = db.write().await;
    let car = cars.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    // The path id wins; any `_id` in the body is ignored.
    car.name = input.name;
    car.brand = input.brand;
    car.price = input.price;
    car.gas_type = input.gas_type;
    Ok(Json(car.clone()))
}

async fn delete_car(State(db): State<Db>, Path(id): Path<String>) -> Result<StatusCode, StatusCode> {
    let mut cars = db.write().await;
    cars.remove(&id)
        .map(|_| StatusCode::NO_CONTENT)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_brands() -> Json<Vec<Brand>> {
    Json(brand_table())
}

/// A representative slice of the FIPE table, ids matching the public API.
fn brand_table() -> Vec<Brand> {
    [
        (21, "Fiat"),
        (22, "Ford"),
        (23, "GM - Chevrolet"),
        (25, "Honda"),
        (26, "Hyundai"),
        (44, "Nissan"),
        (48, "Renault"),
        (56, "Toyota"),
        (59, "VW - VolksWagen"),
    ]
    .into_iter()
    .map(|(id, name)| Brand {
        fipe_name: name.to_string(),
        name: name.to_string(),
        id,
    })
    .collect()
}
