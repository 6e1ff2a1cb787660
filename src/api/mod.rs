//! Typed backend resources.
//!
//! Thin wrappers over [`ApiClient`]: each method names a path and a payload
//! type, and inherits the facade's envelope handling and notifications.
//!
//! ```text
//! /cities          → cities.rs
//! /users           → users.rs
//! /weather-data    → weather.rs
//! ```

pub mod cities;
pub mod models;
pub mod users;
pub mod weather;

pub use cities::Cities;
pub use models::{City, User, WeatherData};
pub use users::Users;
pub use weather::WeatherRecords;

use crate::client::ApiClient;

impl ApiClient {
    pub fn cities(&self) -> Cities<'_> {
        Cities::new(self)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(self)
    }

    pub fn weather(&self) -> WeatherRecords<'_> {
        WeatherRecords::new(self)
    }
}
