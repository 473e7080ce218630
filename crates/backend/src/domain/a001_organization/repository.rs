use chrono::Utc;
use contracts::domain::a001_organization::aggregate::{Organization, OrganizationId};
use contracts::domain::common::{AggregateId, BaseAggregate, EntityMetadata};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_organization")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Organization {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let uuid = Uuid::parse_str(&m.id).unwrap_or_else(|_| Uuid::new_v4());

        Organization {
            base: BaseAggregate::with_metadata(OrganizationId(uuid), metadata),
            name: m.name,
        }
    }
}

fn to_active_model(aggregate: &Organization) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.base.id.as_string()),
        name: Set(aggregate.name.clone()),
        is_deleted: Set(aggregate.base.metadata.is_deleted),
        created_at: Set(Some(aggregate.base.metadata.created_at)),
        updated_at: Set(Some(aggregate.base.metadata.updated_at)),
        version: Set(aggregate.base.metadata.version),
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_all(name_filter: Option<&str>) -> anyhow::Result<Vec<Organization>> {
    let mut query = Entity::find().filter(Column::IsDeleted.eq(false));
    if let Some(name) = name_filter {
        if !name.trim().is_empty() {
            query = query.filter(Column::Name.contains(name.trim()));
        }
    }
    let items: Vec<Organization> = query
        .order_by_asc(Column::Name)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: Uuid) -> anyhow::Result<Option<Organization>> {
    let found = Entity::find_by_id(id.to_string()).one(conn()).await?;
    Ok(found.filter(|m| !m.is_deleted).map(Into::into))
}

pub async fn insert(aggregate: &Organization) -> anyhow::Result<Uuid> {
    let model = to_active_model(aggregate);
    Entity::insert(model).exec(conn()).await?;
    Ok(aggregate.base.id.value())
}
