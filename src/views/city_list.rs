//! City listing.

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

use crate::api::City;
use crate::client::ApiResult;
use crate::views::table::{self, cell};
use crate::views::{LoadError, View, ViewContext};

#[derive(Debug, Default)]
pub struct CityListView;

fn rows(cities: &[City]) -> Vec<Vec<String>> {
    cities
        .iter()
        .map(|c| {
            vec![
                cell(c.id),
                c.name.clone(),
                cell(c.province.as_deref()),
                cell(c.description.as_deref()),
            ]
        })
        .collect()
}

impl View for CityListView {
    fn title(&self) -> &'static str {
        "Cities"
    }

    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>> {
        async move {
            let cities = ctx.api.cities().list().await?;
            Ok(table::render(
                &["ID", "Name", "Province", "Description"],
                &rows(&cities),
            ))
        }
        .boxed()
    }
}

pub fn load() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> {
    async {
        tracing::debug!(view = "cities", "Loading view");
        Ok(Arc::new(CityListView) as Arc<dyn View>)
    }
    .boxed()
}
