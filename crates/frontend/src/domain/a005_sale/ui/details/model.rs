use contracts::domain::a005_sale::aggregate::{Sale, SaleDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::RecordStatus;

use crate::domain::a002_client::ui::details::model as client_model;
use crate::domain::a004_vendor::ui::details::model as vendor_model;
use crate::shared::api_utils::{delete, get_json, post_json};

pub async fn fetch_all() -> Result<Vec<Sale>, String> {
    get_json("/api/sale").await
}

pub async fn save_form(dto: &SaleDto) -> Result<Sale, String> {
    post_json("/api/sale", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/sale/{}", id)).await
}

/// Names of the active clients and vendors for the form suggestions
pub async fn fetch_name_suggestions() -> Result<(Vec<String>, Vec<String>), String> {
    let clients = client_model::fetch_all()
        .await?
        .into_iter()
        .filter(|c| c.status == RecordStatus::Active)
        .map(|c| c.description().to_string())
        .collect();
    let vendors = vendor_model::fetch_all()
        .await?
        .into_iter()
        .filter(|v| v.status == RecordStatus::Active)
        .map(|v| v.description().to_string())
        .collect();
    Ok((clients, vendors))
}
