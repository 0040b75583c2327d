use scriptorium_core::Page;
use serde::de::IgnoredAny;

use crate::error::Result;
use crate::types::{
    CreateReleaseOrderRequest, CreatedId, ReleaseOrder, ReleaseOrderListParams, ReviewDecision,
    UpdateReleaseOrderRequest,
};
use crate::ApiClient;

impl ApiClient {
    pub async fn list_release_orders(&self, params: &ReleaseOrderListParams) -> Result<Page<ReleaseOrder>> {
        self.get_with("/release/orders", params).await
    }

    pub async fn get_release_order(&self, id: &str) -> Result<ReleaseOrder> {
        self.get(&format!("/release/order/{id}")).await
    }

    pub async fn create_release_order(&self, req: &CreateReleaseOrderRequest) -> Result<CreatedId> {
        self.post("/release/order", req).await
    }

    pub async fn update_release_order(&self, id: &str, req: &UpdateReleaseOrderRequest) -> Result<ReleaseOrder> {
        self.put(&format!("/release/order/{id}"), req).await
    }

    pub async fn delete_release_order(&self, id: &str) -> Result<()> {
        self.delete::<IgnoredAny>(&format!("/release/order/{id}")).await.map(drop)
    }

    /// Move a draft order into review
    pub async fn submit_release_order(&self, id: &str) -> Result<()> {
        self.post_empty::<IgnoredAny>(&format!("/release/order/{id}/submit"))
            .await
            .map(drop)
    }

    pub async fn review_release_order(&self, id: &str, decision: &ReviewDecision) -> Result<()> {
        self.post::<_, IgnoredAny>(&format!("/release/order/{id}/review"), decision)
            .await
            .map(drop)
    }

    /// Start publishing an approved order
    pub async fn execute_release(&self, id: &str) -> Result<()> {
        self.post_empty::<IgnoredAny>(&format!("/release/order/{id}/execute"))
            .await
            .map(drop)
    }
}
