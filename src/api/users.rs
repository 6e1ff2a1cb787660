//! `/users` resource.

use crate::api::models::User;
use crate::client::{ApiClient, ApiResult};

const BASE: &str = "/users";

#[derive(Debug, Clone, Copy)]
pub struct Users<'a> {
    api: &'a ApiClient,
}

impl<'a> Users<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<User>> {
        self.api.get(BASE).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<User> {
        self.api.get(&format!("{}/{}", BASE, id)).await
    }

    pub async fn create(&self, user: &User) -> ApiResult<User> {
        self.api.post(BASE, user).await
    }

    pub async fn update(&self, id: i64, user: &User) -> ApiResult<User> {
        self.api.put(&format!("{}/{}", BASE, id), user).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("{}/{}", BASE, id)).await
    }
}
