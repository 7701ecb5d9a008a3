use super::repository;
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a003_supplier::aggregate::{Supplier, SupplierDto};
use contracts::domain::common::AggregateRoot;
use uuid::Uuid;

async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Supplier::generate_code(seq);
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

pub async fn create(dto: SupplierDto) -> ServiceResult<Supplier> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Supplier::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Supplier {} created", aggregate.base.code);
    Ok(aggregate)
}

pub async fn update(dto: SupplierDto) -> ServiceResult<Supplier> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Supplier::element_name()))?;

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

pub async fn save(dto: SupplierDto) -> ServiceResult<Supplier> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Supplier::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Supplier>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|s| !s.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Supplier>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("Distribuidora Andina S.A.", "900.123.456-7", "Carlos Pérez", "ventas@andina.com", "601 234 5678", "Bebidas"),
        ("Lácteos del Valle", "800.987.654-3", "Lucía Ramírez", "pedidos@lacteosvalle.com", "602 876 5432", "Lácteos"),
        ("Panificadora La Espiga", "901.555.222-1", "Jorge Castro", "contacto@laespiga.com", "604 111 2233", "Panadería"),
        ("Higiene Total Ltda.", "830.444.111-9", "Sandra Mejía", "comercial@higienetotal.com", "601 999 8877", "Aseo personal"),
    ];

    for (company_name, tax_id, contact_name, email, phone, supplied_category) in data {
        let dto = SupplierDto {
            company_name: company_name.into(),
            tax_id: tax_id.into(),
            contact_name: contact_name.into(),
            email: email.into(),
            phone: Some(phone.into()),
            supplied_category: Some(supplied_category.into()),
            ..Default::default()
        };
        let mut aggregate = Supplier::new_for_insert(next_code().await?, &dto);
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
