use super::repository;
use crate::domain::a005_sale;
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a002_client::aggregate::{Client, ClientDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::ClientType;
use uuid::Uuid;

async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Client::generate_code(seq);
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
async fn reload_with_totals(id: Uuid) -> ServiceResult<Client> {
    a005_sale::service::recalculate_totals().await?;
    get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Client::element_name()))
}

pub async fn create(dto: ClientDto) -> ServiceResult<Client> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Client::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    tracing::info!("Client {} created", aggregate.base.code);
    reload_with_totals(aggregate.base.id.value()).await
}

pub async fn update(dto: ClientDto) -> ServiceResult<Client> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Client::element_name()))?;

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

pub async fn save(dto: ClientDto) -> ServiceResult<Client> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Client::element_name()));
    }
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Client>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|c| !c.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Client>> {
    repository::list_all().await
}

pub async fn insert_test_data() -> anyhow::Result<()> {
    let data = [
        ("María González", "52.345.678", "maria.gonzalez@correo.com", "300 123 4567", "Calle 45 #12-30", ClientType::Person),
        ("Juan Pérez", "80.123.456", "juan.perez@correo.com", "310 987 6543", "Carrera 7 #80-15", ClientType::Person),
        ("Comercial Ruiz S.A.S.", "900.456.789-1", "compras@comercialruiz.com", "601 345 6789", "Av. 68 #23-40", ClientType::Company),
        ("Ana Torres", "1.020.304.050", "ana.torres@correo.com", "315 222 3344", "Calle 100 #15-20", ClientType::Person),
        ("Restaurante El Sabor", "901.234.567-3", "pedidos@elsabor.com", "604 555 1212", "Calle 10 #43-12", ClientType::Company),
    ];

    for (name, document_id, email, phone, address, client_type) in data {
        let dto = ClientDto {
            name: name.into(),
            document_id: document_id.into(),
            email: email.into(),
            phone: Some(phone.into()),
            address: Some(address.into()),
            client_type,
            ..Default::default()
        };
        let mut aggregate = Client::new_for_insert(next_code().await?, &dto);
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    Ok(())
}
