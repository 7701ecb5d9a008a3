use super::repository;
use crate::domain::a005_sale;
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a004_vendor::aggregate::{Vendor, VendorDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Vendor::generate_code(seq);
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

/// Totals are matched by name, so a new or renamed record picks up the
/// completed sales already filed under its name.
async fn reload_with_totals(id: Uuid) -> ServiceResult<Vendor> {
    a005_sale::service::recalculate_totals().await?;
    get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Vendor::element_name()))
}

pub async fn create(dto: VendorDto) -> ServiceResult<Vendor> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Vendor::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Vendor {} created", aggregate.base.code);
    reload_with_totals(aggregate.base.id.value()).await
}

pub async fn update(dto: VendorDto) -> ServiceResult<Vendor> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Vendor::element_name()))?;

    let previous_code = aggregate.base.code.clone();
    aggregate.update(&dto);
    if aggregate.base.code != previous_code {
        ensure_code_free(&aggregate.base.code).await?;
    }
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    reload_with_totals(id).await
}

pub async fn save(dto: VendorDto) -> ServiceResult<Vendor> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Vendor::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Vendor>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|v| !v.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Vendor>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("Laura Martínez", "1.020.304.050", "laura.martinez@tienda.com", "320 111 2233", 5.0, "2021-02-15"),
        ("Andrés Gómez", "79.888.777", "andres.gomez@tienda.com", "311 444 5566", 4.5, "2022-07-01"),
        ("Diana López", "1.030.555.666", "diana.lopez@tienda.com", "318 777 8899", 6.0, "2023-03-20"),
    ];

    for (name, document_id, email, phone, commission_rate, hire_date) in data {
        let dto = VendorDto {
            name: name.into(),
            document_id: document_id.into(),
            email: email.into(),
            phone: Some(phone.into()),
            commission_rate,
            hire_date: Some(hire_date.into()),
            ..Default::default()
        };
        let mut aggregate = Vendor::new_for_insert(next_code().await?, &dto);
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
