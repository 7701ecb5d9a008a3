use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};

use crate::shared::api_utils::{delete, post_json};

pub async fn save_form(dto: &ExpenseDto) -> Result<Expense, String> {
    post_json("/api/expense", dto).await
}

pub async fn delete_by_id(id: &str) -> Result<(), String> {
    delete(&format!("/api/expense/{}", id)).await
}
