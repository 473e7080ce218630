use chrono::{NaiveDate, Utc};
use contracts::domain::a001_organization::aggregate::OrganizationId;
use contracts::domain::a002_billing::aggregate::{Billing, BillingId};
use contracts::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a002_billing")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub cost: i64,
    pub due_date: String,
    pub category: String,
    pub paid_status: bool,
    pub organization_id: Option<String>,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Billing {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());
        let due_date =
            NaiveDate::parse_from_str(&m.due_date, "%Y-%m-%d").unwrap_or_default();
        let organization_id = m
            .organization_id
            .as_deref()
            .and_then(|s| Uuid::parse_str(s).ok())
            .map(OrganizationId::new);

        Billing {
            base: BaseAggregate::with_metadata(BillingId(uuid), metadata),
            cost: m.cost,
            due_date,
            category: m.category,
            paid_status: m.paid_status,
            organization_id,
        }
    }
}

fn to_active_model(aggregate: &Billing) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.as_string()),
        cost: Set(aggregate.cost),
        due_date: Set(aggregate.due_date.format("%Y-%m-%d").to_string()),
        category: Set(aggregate.category.clone()),
        paid_status: Set(aggregate.paid_status),
        organization_id: Set(aggregate.organization_id.map(|id| id.as_string())),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all() -> anyhow::Result<Vec<Billing>> {
    let items: Vec<Billing> = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_desc(Column::DueDate)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Billing>> {
    let found = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(found.filter(|m| !m.is_deleted).map(Into::into))
}

pub async fn insert(aggregate: &Billing) -> anyhow::Result<Uuid> {
    let model = to_active_model(aggregate);
    Entity::insert(model).exec(conn()).await?;
    Ok(aggregate.base.id.value())
}

pub async fn update(aggregate: &Billing) -> anyhow::Result<()> {
    let model = to_active_model(aggregate);
    Entity::update(model).exec(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: Uuid) -> anyhow::Result<bool> {
    let found = Entity::find_by_id(id.to_string()).one(conn()).await?;
    match found {
        Some(model) => {
            let mut active: ActiveModel = model.into();
            active.is_deleted = Set(true);
            active.updated_at = Set(Some(Utc::now()));
            Entity::update(active).exec(conn()).await?;
            Ok(true)
        }
        None => Ok(false),
    }
}
