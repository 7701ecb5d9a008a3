use super::repository;
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a001_category::aggregate::{Category, CategoryDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::RecordStatus;
use uuid::Uuid;

/// Next free `CAT-0000` code
async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Category::generate_code(seq);
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

pub async fn create(dto: CategoryDto) -> ServiceResult<Category> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Category::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Category {} created", aggregate.base.code);
    Ok(aggregate)
}

pub async fn update(dto: CategoryDto) -> ServiceResult<Category> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Category::element_name()))?;

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

/// Create when the form carries no id, replace the stored record otherwise
pub async fn save(dto: CategoryDto) -> ServiceResult<Category> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

/// Soft delete, refused while products are still filed under the category
pub async fn delete(id: Uuid) -> ServiceResult<()> {
    let aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Category::element_name()))?;

    aggregate
        .ensure_can_delete()
        .map_err(ServiceError::Conflict)?;

    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Category::element_name()));
    }
    tracing::info!("Category {} deleted", aggregate.base.code);
    Ok(())
}

/// Live (not deleted) category by id
pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Category>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|c| !c.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Category>> {
    repository::list_all().await
}

/// Sample categories shown on a fresh install
pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("Bebidas", "Gaseosas, jugos y agua", 45, RecordStatus::Active),
        ("Lácteos", "Leche, quesos y yogures", 28, RecordStatus::Active),
        ("Panadería", "Pan fresco y repostería", 15, RecordStatus::Active),
        ("Aseo personal", "Jabones, champú y cuidado personal", 32, RecordStatus::Active),
        ("Snacks", "Papas, galletas y dulces", 0, RecordStatus::Inactive),
    ];

    for (name, description, product_count, status) in data {
        let dto = CategoryDto {
            name: name.into(),
            description: Some(description.into()),
            status,
            ..Default::default()
        };
        let mut aggregate = Category::new_for_insert(next_code().await?, &dto);
        aggregate.product_count = product_count;
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
