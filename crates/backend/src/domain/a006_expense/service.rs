use super::repository;
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a006_expense::aggregate::{Expense, ExpenseDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{ExpenseCategory, PaymentMethod};
use uuid::Uuid;

async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Expense::generate_code(seq);
        if !repository::code_exists(&code).await? {
            return Ok(code);
        }
        seq += 1;
    }
}

async fn ensure_code_free(code: &str) -> ServiceResult<()> {
    if repository::code_exists(code).await? {
        return Err(code_taken(code));
    }
    Ok(())
}

pub async fn create(dto: ExpenseDto) -> ServiceResult<Expense> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Expense::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Expense {} registered ({})", aggregate.base.code, aggregate.amount);
    Ok(aggregate)
}

pub async fn update(dto: ExpenseDto) -> ServiceResult<Expense> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Expense::element_name()))?;

    let previous_code = aggregate.base.code.clone();
    aggregate.update(&dto);
    if aggregate.base.code != previous_code {
        ensure_code_free(&aggregate.base.code).await?;
    }
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    Ok(aggregate)
}

pub async fn save(dto: ExpenseDto) -> ServiceResult<Expense> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Expense::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Expense>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|e| !e.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Expense>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    use ExpenseCategory::*;
    use PaymentMethod::*;

    let data = [
        ("2024-03-01", "Arriendo del local", Rent, 2_500_000.0, Transfer, "Administración"),
        ("2024-03-03", "Pago de energía", Services, 320_000.0, Transfer, "Administración"),
        ("2024-03-04", "Compra de bolsas y empaques", Purchases, 85_000.0, Cash, "Laura Martínez"),
        ("2024-03-15", "Nómina primera quincena", Payroll, 3_200_000.0, Transfer, "Contabilidad"),
        ("2024-03-18", "Pago de agua", Services, 110_000.0, Card, "Administración"),
        ("2024-03-20", "Mantenimiento nevera", Other, 150_000.0, Cash, "Andrés Gómez"),
    ];

    for (expense_date, concept, category, amount, payment_method, responsible) in data {
        let dto = ExpenseDto {
            expense_date: expense_date.into(),
            concept: concept.into(),
            category,
            amount,
            payment_method,
            responsible: responsible.into(),
            ..Default::default()
        };
        let mut aggregate = Expense::new_for_insert(next_code().await?, &dto);
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
