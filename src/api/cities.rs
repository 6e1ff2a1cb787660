//! `/cities` resource.

use crate::api::models::City;
use crate::client::{ApiClient, ApiResult};

const BASE: &str = "/cities";

/// City management calls.
#[derive(Debug, Clone, Copy)]
pub struct Cities<'a> {
    api: &'a ApiClient,
}

impl<'a> Cities<'a> {
    pub fn new(api: &'a ApiClient) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> ApiResult<Vec<City>> {
        self.api.get(BASE).await
    }

    pub async fn get(&self, id: i64) -> ApiResult<City> {
        self.api.get(&format!("{}/{}", BASE, id)).await
    }

    pub async fn count(&self) -> ApiResult<u64> {
        self.api.get(&format!("{}/count", BASE)).await
    }

    pub async fn create(&self, city: &City) -> ApiResult<City> {
        self.api.post(BASE, city).await
    }

    pub async fn update(&self, id: i64, city: &City) -> ApiResult<City> {
        self.api.put(&format!("{}/{}", BASE, id), city).await
    }

    pub async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete(&format!("{}/{}", BASE, id)).await
    }
}
