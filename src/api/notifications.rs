//! Notification Endpoints

use super::{encode_path_segment, ApiClient};
use crate::error::ApiResult;
use crate::models::Notification;

impl ApiClient {
    pub async fn list_notifications(&self) -> ApiResult<Vec<Notification>> {
        self.request("GET", "/api/notifications").await
    }

    pub async fn delete_notification(&self, notification_id: &str) -> ApiResult<()> {
        let path = format!("/api/notifications/{}", encode_path_segment(notification_id));
        self.request_no_content("DELETE", &path).await
    }
}
