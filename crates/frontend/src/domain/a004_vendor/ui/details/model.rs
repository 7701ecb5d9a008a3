use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<Vendor>, String> {
    get_json("/api/vendor").await
}

/// Administrators only; other users get a 403 message back
pub async fn save_form(dto: &VendorDto) -> Result<Vendor, String> {
    post_json("/api/vendor", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/vendor/{}", id)).await
}
