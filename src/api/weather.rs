//! `/weather-data` resource.
//!
//! # Responsibilities
//! - CRUD on single observations
//! - Date-range queries per city
//! - CSV bulk upload (multipart field `file`)
//!
//! The upload format is decided by the backend: a header row, then
//! `cityId,date,temperature,humidity,weather,windDirection,windSpeed`.
//! Malformed rows are skipped server-side; the reply is a summary string.

use chrono::NaiveDate;
use reqwest::multipart::{Form, Part};

use crate::api::models::WeatherData;
use crate::client::{ApiClient, ApiError, ApiResult};

const BASE: &str = "/weather-data";

#[derive(Debug, Clone, Copy)]
pub struct WeatherRecords<'a> {
    api: &'a ApiClient,
}

impl<'a> WeatherRecords<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn get(&self, id: i64) -> ApiResult<WeatherData> {
        self.api.get(&format!("{}/{}", BASE, id)).await
    }

    pub async fn count(&self) -> ApiResult<u64> {
        self.api.get(&format!("{}/count", BASE)).await
    }

    pub async fn create(&self, record: &WeatherData) -> ApiResult<WeatherData> {
        self.api.post(BASE, record).await
    }

    pub async fn update(&self, id: i64, record: &WeatherData) -> ApiResult<WeatherData> {
        self.api.put(&format!("{}/{}", BASE, id), record).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("{}/{}", BASE, id)).await
    }

    /// Observations for `city_id` between two inclusive `yyyy-MM-dd` dates.
    ///
    /// Both dates are parsed and ordered locally; nothing is sent when either
    /// is not a real calendar date or the range is reversed.
    pub async fn by_city(&self, city_id: i64, start: &str, end: &str) -> ApiResult<Vec<WeatherData>> {
        let (start, end) = check_range(start, end)?;
        let (start, end) = (
            start.format(DATE_FORMAT).to_string(),
            end.format(DATE_FORMAT).to_string(),
        );
        self.api
            .get_with_query(
                &format!("{}/city/{}", BASE, city_id),
                &[("startDate", start.as_str()), ("endDate", end.as_str())],
            )
            .await
    }

    /// Upload a CSV file; resolves to the backend's import summary.
    pub async fn upload_csv(&self, file_name: &str, contents: Vec<u8>) -> ApiResult<String> {
        if contents.is_empty() {
            return Err(ApiError::InvalidArgument("upload file is empty".into()));
        }
        let part = Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str("text/csv")
            .map_err(|e| ApiError::InvalidArgument(e.to_string()))?;
        let form = Form::new().part("file", part);

        self.api.send_multipart(&format!("{}/upload", BASE), form).await
    }
}

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `yyyy-MM-dd` calendar date.
pub fn parse_date(value: &str) -> ApiResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| ApiError::InvalidArgument(format!("'{}' is not a yyyy-MM-dd date", value)))
}

fn check_range(start: &str, end: &str) -> ApiResult<(NaiveDate, NaiveDate)> {
    let (start, end) = (parse_date(start)?, parse_date(end)?);
    if start > end {
        return Err(ApiError::InvalidArgument(format!(
            "start date {} is after end date {}",
            start, end
        )));
    }
    Ok((start, end))
}
