//! Weather observations for one city over a date range.
//!
//! Parameters: `city` (id), `start`, `end` (yyyy-MM-dd, inclusive).

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

use crate::api::WeatherData;
use crate::client::ApiResult;
use crate::views::table::{self, cell};
use crate::views::{LoadError, View, ViewContext};

#[derive(Debug, Default)]
pub struct WeatherDataListView;

/// Fetch the records selected by the `city`, `start` and `end` parameters.
pub(crate) async fn fetch_range(ctx: &ViewContext) -> ApiResult<Vec<WeatherData>> {
    let city = ctx.int_param("city")?;
    let start = ctx.param("start")?;
    let end = ctx.param("end")?;
    ctx.api.weather().by_city(city, start, end).await
}

impl View for WeatherDataListView {
    fn title(&self) -> &'static str {
        "Weather Data"
    }

    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>> {
        async move {
            let records = fetch_range(ctx).await?;
            let rows: Vec<Vec<String>> = records
                .iter()
                .map(|r| {
                    vec![
                        r.date.to_string(),
                        cell(r.temperature),
                        cell(r.humidity),
                        cell(r.weather.as_deref()),
                        cell(r.wind_direction.as_deref()),
                        cell(r.wind_speed),
                    ]
                })
                .collect();
            Ok(table::render(
                &["Date", "Temp", "Humidity", "Weather", "Wind", "Speed"],
                &rows,
            ))
        }
        .boxed()
    }
}

pub fn load() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> {
    async {
        tracing::debug!(view = "weather-data", "Loading view");
        Ok(Arc::new(WeatherDataListView) as Arc<dyn View>)
    }
    .boxed()
}
