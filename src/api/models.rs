//! Backend entities as they appear on the wire (camelCase JSON).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct City {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub province: Option<String>,
    pub description: Option<String>,
}

/// One daily observation for a city.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub city: Option<City>,
    /// Serialized as `yyyy-MM-dd`.
    pub date: NaiveDate,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub weather: Option<String>,
    pub wind_direction: Option<String>,
    pub wind_speed: Option<f64>,
}

/// A console user. Fields the console does not know about are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub username: Option<String>,
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
