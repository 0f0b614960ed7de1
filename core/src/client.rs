//! The resource client: five CRUD operations against the car backend plus
//! the read-only brand listing, every outcome normalized into `CarError`.
//!
//! # Design
//! `CarClient` keeps the two base URLs as plain strings and parses the target
//! URL on every call, so an invalid base surfaces as `CarError::Url` before
//! any I/O. The three mutations share one helper parameterized by
//! `Operation`; they acknowledge success as `Ok(())` and never inspect the
//! response body. List operations read the body themselves so an absent body
//! is reported distinctly from a decode failure.

use reqwest::Method;
use tracing::{debug, warn};
use url::Url;

use crate::error::CarError;
use crate::http::{self, HttpConfig};
use crate::types::{Brand, Car};

/// Which mutation a write request performs. Decides the HTTP method and
/// whether the target URL carries the record id.
#[derive(Debug, Clone, Copy)]
enum Operation {
    Create,
    Update,
    Delete,
}

/// Asynchronous client for the Carangas API.
///
/// Holds only configuration and the shared HTTP session. Calls are
/// independent: no locks, no ordering guarantees between concurrent
/// operations, and no state carried from one call to the next. A caller that
/// stops caring about a result simply drops the future.
#[derive(Debug, Clone)]
pub struct CarClient {
    cars_base: String,
    brands_url: String,
    session: reqwest::Client,
}

impl CarClient {
    /// Create a client with the default session settings: 10 s timeout, 5
    /// pooled connections per host, JSON content type.
    pub fn new(cars_base: &str, brands_url: &str) -> Result<Self, CarError> {
        Self::with_config(cars_base, brands_url, HttpConfig::default())
    }

    /// Create a client with explicit session settings.
    pub fn with_config(
        cars_base: &str,
        brands_url: &str,
        config: HttpConfig,
    ) -> Result<Self, CarError> {
        Ok(Self {
            cars_base: cars_base.trim_end_matches('/').to_string(),
            brands_url: brands_url.to_string(),
            session: http::build_session(&config)?,
        })
    }

    /// Fetch every car currently stored on the server.
    pub async fn list_cars(&self) -> Result<Vec<Car>, CarError> {
        let url = parse_url(&self.cars_base)?;
        let body = self.fetch(url).await?;
        serde_json::from_slice(&body).map_err(CarError::from)
    }

    /// Fetch the FIPE brand table.
    ///
    /// `Ok(None)` when the endpoint answers with JSON `null` instead of a
    /// brand array.
    pub async fn list_brands(&self) -> Result<Option<Vec<Brand>>, CarError> {
        let url = parse_url(&self.brands_url)?;
        let body = self.fetch(url).await?;
        serde_json::from_slice(&body).map_err(CarError::from)
    }

    /// Store a new car. The server assigns the identifier, so `car.id`
    /// should be absent.
    pub async fn create_car(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Create).await
    }

    /// Overwrite an existing car's fields. `car.id` must be present; the
    /// identifier itself never changes.
    pub async fn update_car(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Update).await
    }

    /// Remove an existing car. `car.id` must be present.
    pub async fn delete_car(&self, car: &Car) -> Result<(), CarError> {
        self.apply(car, Operation::Delete).await
    }

    /// GET `url` and return the raw body.
    ///
    /// Classification order: timeout, other transport failure, absent body,
    /// non-2xx status. Decoding is left to the caller.
    async fn fetch(&self, url: Url) -> Result<Vec<u8>, CarError> {
        debug!(%url, "fetching");
        let response = self.session.get(url).send().await.map_err(http::classify)?;
        let status = response.status();
        let body = response.bytes().await.map_err(http::classify)?;
        if body.is_empty() {
            warn!(%status, "response carried no body");
            return Err(CarError::EmptyBody);
        }
        if !status.is_success() {
            warn!(%status, "request rejected");
            return Err(CarError::Status(status.as_u16()));
        }
        Ok(body.to_vec())
    }

    /// Shared implementation of the three mutations. Any 2xx answer, with or
    /// without a body, acknowledges the write.
    async fn apply(&self, car: &Car, operation: Operation) -> Result<(), CarError> {
        let url = self.write_target(car, operation)?;
        let method = match operation {
            Operation::Create => Method::POST,
            Operation::Update => Method::PUT,
            Operation::Delete => Method::DELETE,
        };
        debug!(%method, %url, "dispatching write");
        let mut request = self.session.request(method, url);
        if matches!(operation, Operation::Create | Operation::Update) {
            request = request.body(serde_json::to_vec(car)?);
        }
        let response = request.send().await.map_err(http::classify)?;
        let status = response.status();
        if !status.is_success() {
            warn!(%status, "write rejected");
            return Err(CarError::Status(status.as_u16()));
        }
        Ok(())
    }

    /// Target URL for a mutation: the collection for create, the record for
    /// update and delete. A car without an id cannot name a record, so the
    /// target cannot be built.
    fn write_target(&self, car: &Car, operation: Operation) -> Result<Url, CarError> {
        match operation {
            Operation::Create => parse_url(&self.cars_base),
            Operation::Update | Operation::Delete => {
                let id = car.id.as_deref().ok_or(CarError::Url)?;
                parse_url(&format!("{}/{}", self.cars_base, id))
            }
        }
    }
}

/// Parse a target URL, folding any parse failure into `CarError::Url`.
fn parse_url(target: &str) -> Result<Url, CarError> {
    Url::parse(target).map_err(|_| CarError::Url)
}
