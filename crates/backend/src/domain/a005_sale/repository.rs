use chrono::Utc;
use contracts::domain::a005_sale::aggregate::{Sale, SaleId};
use contracts::domain::common::{BaseAggregate, EntityMetadata};
use contracts::enums::{PaymentMethod, SaleStatus};
use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "a005_sale")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub code: String,
    pub description: String,
    pub comment: Option<String>,
    pub sale_date: String,
    pub client_name: String,
    pub vendor_name: String,
    pub total: f64,
    pub payment_method: String,
    pub status: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Sale {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Sale {
            base: BaseAggregate::with_metadata(
                SaleId(uuid),
                m.code,
                m.description,
                m.comment,
                metadata,
            ),
            sale_date: m.sale_date,
            client_name: m.client_name,
            vendor_name: m.vendor_name,
            total: m.total,
            payment_method: PaymentMethod::from_code(&m.payment_method).unwrap_or_default(),
            status: SaleStatus::from_code(&m.status).unwrap_or_default(),
        }
    }
}

fn to_active(aggregate: &Sale) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.value().to_string()),
        code: Set(aggregate.base.code.clone()),
        description: Set(aggregate.base.description.clone()),
        comment: Set(aggregate.base.comment.clone()),
        sale_date: Set(aggregate.sale_date.clone()),
        client_name: Set(aggregate.client_name.clone()),
        vendor_name: Set(aggregate.vendor_name.clone()),
        total: Set(aggregate.total),
        payment_method: Set(aggregate.payment_method.code().to_string()),
        status: Set(aggregate.status.code().to_string()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Live sales, newest first
pub async fn list_all() -> anyhow::Result<Vec<Sale>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::SaleDate)
        .order_by_desc(Column::Code)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Live sales with `sale_date` inside the (inclusive) range; open bounds
/// are skipped
pub async fn list_by_date_range(
    date_from: Option<&str>,
    date_to: Option<&str>,
) -> anyhow::Result<Vec<Sale>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(from) = date_from.filter(|d| !d.trim().is_empty()) {
        query = query.filter(Column::SaleDate.gte(from.trim()));
    }
    if let Some(to) = date_to.filter(|d| !d.trim().is_empty()) {
        query = query.filter(Column::SaleDate.lte(to.trim()));
    }
    let items = query
        .order_by_desc(Column::SaleDate)
        .order_by_desc(Column::Code)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Sale>> {
    let result = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(result.map(Into::into))
}

pub async fn insert(aggregate: &Sale) -> anyhow::Result<Uuid> {
    to_active(aggregate).insert(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Sale) -> anyhow::Result<()> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .filter(Column::Id.eq(id.to_string()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}

pub async fn count_all() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn code_exists(code: &str) -> anyhow::Result<bool> {
    let found = Entity::find()
        .filter(Column::Code.eq(code))
        .count(conn())
        .await?;
    Ok(found > 0)
}
