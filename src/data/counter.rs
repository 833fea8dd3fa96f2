use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseTransaction, DbErr, EntityTrait, IntoActiveModel,
    QuerySelect,
};

/// Queries for the global counter table.
///
/// The counter hands out strictly increasing sequence numbers, one stream per key.
/// Values are never reused, even when the caller's surrounding work is rolled back,
/// which leaves gaps in issued codes and keeps allocation simple.
///
/// Construction requires a [`DatabaseTransaction`] rather than a plain connection:
/// the read and the write must sit inside one transaction for the exclusive row
/// lock to serialize concurrent allocators.
pub struct CounterRepository<'a> {
    db: &'a DatabaseTransaction,
}

impl<'a> CounterRepository<'a> {
    /// Creates a new instance of [`CounterRepository`]
    pub fn new(db: &'a DatabaseTransaction) -> Self {
        Self { db }
    }

    /// Increments the counter for `key` and returns the new value
    ///
    /// The first call for an unseen key creates the row and returns 1. The counter
    /// row is read with an exclusive lock, so two transactions allocating from the
    /// same key always observe distinct, consecutive values.
    pub async fn next(&self, key: &str) -> Result<i64, DbErr> {
        let counter = entity::prelude::GlobalCounter::find_by_id(key)
            .lock_exclusive()
            .one(self.db)
            .await?;

        match counter {
            Some(counter) => {
                let value = counter.value + 1;

                let mut counter_am = counter.into_active_model();
                counter_am.value = ActiveValue::Set(value);
                counter_am.update(self.db).await?;

                Ok(value)
            }
            None => {
                let counter = entity::global_counter::ActiveModel {
                    key: ActiveValue::Set(key.to_string()),
                    value: ActiveValue::Set(1),
                };
                counter.insert(self.db).await?;

                Ok(1)
            }
        }
    }

    /// Gets the current value of the counter for `key` without advancing it
    pub async fn current(&self, key: &str) -> Result<Option<i64>, DbErr> {
        let counter = entity::prelude::GlobalCounter::find_by_id(key)
            .one(self.db)
            .await?;

        Ok(counter.map(|counter| counter.value))
    }
}
