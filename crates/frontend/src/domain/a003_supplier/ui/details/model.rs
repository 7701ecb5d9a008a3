use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<Supplier>, String> {
    get_json("/api/supplier").await
}

pub async fn save_form(dto: &SupplierDto) -> Result<Supplier, String> {
    post_json("/api/supplier", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/supplier/{}", id)).await
}
