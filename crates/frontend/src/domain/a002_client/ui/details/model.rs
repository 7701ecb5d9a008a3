use contracts::domain::a002_client::aggregate::{Client, ClientDto};

use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<Client>, String> {
    get_json("/api/client").await
}

pub async fn save_form(dto: &ClientDto) -> Result<Client, String> {
    post_json("/api/client", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/client/{}", id)).await
}
