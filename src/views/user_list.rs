//! User listing.

use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};

use crate::client::ApiResult;
use crate::views::table::{self, cell};
use crate::views::{LoadError, View, ViewContext};

#[derive(Debug, Default)]
pub struct UserListView;

impl View for UserListView {
    fn title(&self) -> &'static str {
        "Users"
    }

    fn render<'a>(&'a self, ctx: &'a ViewContext) -> BoxFuture<'a, ApiResult<String>> {
        async move {
            let users = ctx.api.users().list().await?;
            let rows: Vec<Vec<String>> = users
                .iter()
                .map(|u| vec![cell(u.id), cell(u.username.as_deref()), cell(u.email.as_deref())])
                .collect();
            Ok(table::render(&["ID", "Username", "Email"], &rows))
        }
        .boxed()
    }
}

pub fn load() -> BoxFuture<'static, Result<Arc<dyn View>, LoadError>> {
    async {
        tracing::debug!(view = "users", "Loading view");
        Ok(Arc::new(UserListView) as Arc<dyn View>)
    }
    .boxed()
}
