//! Landing page: headline counts.

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

use crate::client::ApiResult;
use crate::views::{LoadError, View, ViewContext};

#[derive(Debug, Default)]
pub struct HomeView;

impl View for HomeView {
    fn title(&self) -> &'static str {
        "Weather Data Console"
    }

    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>> {
        async move {
            let cities = ctx.api.cities().count().await?;
            let records = ctx.api.weather().count().await?;
            Ok(format!(
                "{}\n\ncities:           {}\nweather records:  {}\n",
                self.title(),
                cities,
                records
            ))
        }
        .boxed()
    }
}

pub fn load() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> {
    async {
        tracing::debug!(view = "home", "Loading view");
        Ok(Arc::new(HomeView) as Arc<dyn View>)
    }
    .boxed()
}
