//! SeaORM repository implementation shared by every table

use super::mapper::StoredEntity;
use crate::contract::{EntityId, Record};
use crate::domain::repository::{Direction, EntityRepository, SortOrder};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sea_orm::{
    DatabaseConnection, EntityTrait, IdenStatic, IntoActiveModel, Iterable, Order,
    PrimaryKeyTrait, QueryOrder,
};
use std::marker::PhantomData;
use std::sync::Arc;

pub struct SeaOrmRepository<E> {
    db: Arc<DatabaseConnection>,
    _entity: PhantomData<fn() -> E>,
}

impl<E> SeaOrmRepository<E> {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> EntityRepository<E::Record> for SeaOrmRepository<E>
where
    E: StoredEntity,
    E::Model: IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: Send,
    <E::PrimaryKey as PrimaryKeyTrait>::ValueType: From<EntityId>,
{
    async fn save(&self, record: &E::Record) -> Result<E::Record> {
        let active = E::to_active_model(record);
        let model = match record.id() {
            None => E::insert(active).exec_with_returning(&*self.db).await?,
            // Full replace of every column
            Some(_) => E::update(active).exec(&*self.db).await?,
        };

        Ok(E::into_record(model))
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<E::Record>> {
        let result = E::find_by_id(id).one(&*self.db).await?;
        Ok(result.map(E::into_record))
    }

    async fn find_all(&self, sort: Option<&SortOrder>) -> Result<Vec<E::Record>> {
        let mut query = E::find();

        if let Some(sort) = sort {
            let order = match sort.direction {
                Direction::Asc => Order::Asc,
                Direction::Desc => Order::Desc,
            };
            query = query.order_by(column::<E>(&sort.property)?, order);
        }

        let results = query
            .order_by(column::<E>("id")?, Order::Asc)
            .all(&*self.db)
            .await?;

        Ok(results.into_iter().map(E::into_record).collect())
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool> {
        let found = E::find_by_id(id).one(&*self.db).await?;
        Ok(found.is_some())
    }

    async fn delete_by_id(&self, id: EntityId) -> Result<bool> {
        let result = E::delete_by_id(id).exec(&*self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

/// Resolve a wire (camelCase) property to its column
fn column<E: EntityTrait>(property: &str) -> Result<E::Column> {
    let name = column_name(property);
    E::Column::iter()
        .find(|column| column.as_str() == name)
        .ok_or_else(|| anyhow!("no column '{}' for property '{}'", name, property))
}

fn column_name(property: &str) -> String {
    let mut name = String::with_capacity(property.len() + 4);
    for ch in property.chars() {
        if ch.is_ascii_uppercase() {
            name.push('_');
            name.push(ch.to_ascii_lowercase());
        } else {
            name.push(ch);
        }
    }
    name
}
