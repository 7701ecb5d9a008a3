use contracts::domain::a001_category::aggregate::{Category, CategoryDto};

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<Category>, String> {
    get_json("/api/category").await
}

pub async fn save_form(dto: &CategoryDto) -> Result<Category, String> {
    post_json("/api/category", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/category/{}", id)).await
}
