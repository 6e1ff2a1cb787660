//! Temperature trend for one city over a date range.
//!
//! Same parameters as the weather data page. Renders one line per date
//! followed by min/max/average of the temperatures that were reported.

use std::sync::Arc;

use chrono::NaiveDate;
use futures_util::future::{BoxFuture, FutureExt};

use crate::api::WeatherData;
use crate::client::ApiResult;
use crate::views::weather_list::fetch_range;
use crate::views::{LoadError, View, ViewContext};

#[derive(Debug, Default)]
pub struct WeatherTrendView;

/// Summary over the reported temperatures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendSummary {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub samples: usize,
}

/// Date-ordered `(date, temperature)` points, skipping records without a temperature.
pub fn points(records: &[WeatherData]) -> Vec<(NaiveDate, f64)> {
    let mut points: Vec<(NaiveDate, f64)> = records
        .iter()
        .filter_map(|r| r.temperature.map(|t| (r.date, t)))
        .collect();
    points.sort_by_key(|(date, _)| *date);
    points
}

pub fn summarize(points: &[(NaiveDate, f64)]) -> Option<TrendSummary> {
    if points.is_empty() {
        return None;
    }
    let temps = points.iter().map(|(_, t)| *t);
    let min = temps.clone().fold(f64::INFINITY, f64::min);
    let max = temps.clone().fold(f64::NEG_INFINITY, f64::max);
    let sum: f64 = temps.sum();
    Some(TrendSummary {
        min,
        max,
        average: sum / points.len() as f64,
        samples: points.len(),
    })
}

impl View for WeatherTrendView {
    fn title(&self) -> &'static str {
        "Weather Trend"
    }

    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>> {
        async move {
            let records = fetch_range(ctx).await?;
            let points = points(&records);

            let mut out = String::new();
            for (date, temp) in &points {
                out.push_str(&format!("{}  {:>6.1}\n", date, temp));
            }
            match summarize(&points) {
                Some(s) => out.push_str(&format!(
                    "\nmin {:.1}  max {:.1}  avg {:.1}  ({} days)\n",
                    s.min, s.max, s.average, s.samples
                )),
                None => out.push_str("(no temperature data)\n"),
            }
            Ok(out)
        }
        .boxed()
    }
}

pub fn load() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> {
    async {
        tracing::debug!(view = "weather-trend", "Loading view");
        Ok(Arc::new(WeatherTrendView) as Arc<dyn View>)
    }
    .boxed()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
    }

    fn record(date: NaiveDate, temperature: Option<f64>) -> WeatherData {
        WeatherData {
            date,
            temperature,
            ..WeatherData::default()
        }
    }

    #[test]
    fn test_points_are_date_ordered_and_skip_gaps() {
        let records = vec![
            record(day(3), Some(9.0)),
            record(day(1), Some(11.0)),
            record(day(2), None),
        ];
        assert_eq!(points(&records), vec![(day(1), 11.0), (day(3), 9.0)]);
    }

    #[test]
    fn test_summary() {
        let s = summarize(&[(day(1), 10.0), (day(2), 14.0), (day(3), 12.0)]).unwrap();
        assert_eq!(s.min, 10.0);
        assert_eq!(s.max, 14.0);
        assert_eq!(s.average, 12.0);
        assert_eq!(s.samples, 3);
        assert!(summarize(&[]).is_none());
    }
}
