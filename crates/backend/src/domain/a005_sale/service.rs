use super::repository;
use crate::domain::{a002_client, a004_vendor};
use crate::shared::error::{code_taken, parse_id, ServiceError, ServiceResult};
use contracts::domain::a005_sale::aggregate::{completed_totals, name_key, Sale, SaleDto};
use contracts::domain::common::AggregateRoot;
use contracts::enums::{PaymentMethod, SaleStatus};
use uuid::Uuid;

async fn next_code() -> anyhow::Result<String> {
    let mut seq = repository::count_all().await? + 1;
    loop {
        let code = Sale::generate_code(seq);
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

pub async fn create(dto: SaleDto) -> ServiceResult<Sale> {
    dto.validate().map_err(ServiceError::Validation)?;

    let code = match dto.code.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        Some(code) => {
            ensure_code_free(code).await?;
            code.to_string()
        }
        None => next_code().await?,
    };
    let mut aggregate = Sale::new_for_insert(code, &dto);
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::insert(&aggregate).await?;
    recalculate_totals().await?;
    tracing::info!("Sale {} registered ({})", aggregate.base.code, aggregate.total);
    Ok(aggregate)
}

pub async fn update(dto: SaleDto) -> ServiceResult<Sale> {
    let id = parse_id(dto.id.as_deref().unwrap_or_default())?;
    let mut aggregate = get_by_id(id)
        .await?
        .ok_or(ServiceError::NotFound(Sale::element_name()))?;

    let previous_code = aggregate.base.code.clone();
    aggregate.update(&dto);
    if aggregate.base.code != previous_code {
        ensure_code_free(&aggregate.base.code).await?;
    }
    aggregate.validate().map_err(ServiceError::Validation)?;
    aggregate.before_write();

    repository::update(&aggregate).await?;
    recalculate_totals().await?;
    Ok(aggregate)
}

pub async fn save(dto: SaleDto) -> ServiceResult<Sale> {
    if dto.id.as_deref().map_or(false, |id| !id.trim().is_empty()) {
        update(dto).await
    } else {
        create(dto).await
    }
}

pub async fn delete(id: Uuid) -> ServiceResult<()> {
    if !repository::soft_delete(id).await? {
        return Err(ServiceError::NotFound(Sale::element_name()));
    }
    recalculate_totals().await?;
    Ok(())
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Sale>> {
    Ok(repository::get_by_id(id)
        .await?
        .filter(|s| !s.base.metadata.is_deleted))
}

pub async fn list_all() -> anyhow::Result<Vec<Sale>> {
    repository::list_all().await
}

/// Rewrite `total_purchases` of clients and `total_sales` of vendors from the
/// completed sales, matching them by name.
pub async fn recalculate_totals() -> anyhow::Result<()> {
    let sales = repository::list_all().await?;
    let by_client = completed_totals(&sales, |s| s.client_name.as_str());
    let by_vendor = completed_totals(&sales, |s| s.vendor_name.as_str());

    for client in a002_client::repository::list_all().await? {
        let total = by_client
            .get(&name_key(&client.base.description))
            .copied()
            .unwrap_or(0.0);
        if (client.total_purchases - total).abs() > f64::EPSILON {
            a002_client::repository::set_total_purchases(client.base.id.value(), total).await?;
        }
    }

    for vendor in a004_vendor::repository::list_all().await? {
        let total = by_vendor
            .get(&name_key(&vendor.base.description))
            .copied()
            .unwrap_or(0.0);
        if (vendor.total_sales - total).abs() > f64::EPSILON {
            a004_vendor::repository::set_total_sales(vendor.base.id.value(), total).await?;
        }
    }

    Ok(())
}

/// Sample sales matching the sample clients and vendors
pub async fn insert_test_data() -> anyhow::Result<()> {
    use PaymentMethod::*;
    use SaleStatus::*;

    let data = [
        ("2024-03-01", "María González", "Laura Martínez", "2x Arroz 1kg, 1x Aceite 1L", 45_000.0, Cash, Completed),
        ("2024-03-02", "Juan Pérez", "Andrés Gómez", "1x Leche x6, 2x Pan tajado", 38_500.0, Card, Completed),
        ("2024-03-05", "Comercial Ruiz S.A.S.", "Laura Martínez", "Pedido mayorista de bebidas", 1_250_000.0, Transfer, Completed),
        ("2024-03-08", "Ana Torres", "Diana López", "Productos de aseo personal", 87_300.0, Card, Pending),
        ("2024-03-10", "Restaurante El Sabor", "Andrés Gómez", "Lácteos para cocina", 420_000.0, Transfer, Completed),
        ("2024-03-12", "María González", "Diana López", "Snacks surtidos", 23_900.0, Cash, Cancelled),
    ];

    for (sale_date, client_name, vendor_name, items, total, payment_method, status) in data {
        let dto = SaleDto {
            sale_date: sale_date.into(),
            client_name: client_name.into(),
            vendor_name: vendor_name.into(),
            items_description: items.into(),
            total,
            payment_method,
            status,
            ..Default::default()
        };
        let mut aggregate = Sale::new_for_insert(next_code().await?, &dto);
        aggregate.before_write();
        repository::insert(&aggregate).await?;
    }

    recalculate_totals().await
}
