use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::income::{IncomeEntry, IncomeRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::IncomeEntryDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::income_entries;

pub struct IncomeRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl IncomeRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        IncomeRepository { pool, writer }
    }
}

#[async_trait]
impl IncomeRepositoryTrait for IncomeRepository {
    fn list_income(&self, user_id: &str) -> Result<Vec<IncomeEntry>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = income_entries::table
            .filter(income_entries::user_id.eq(user_id))
            .order((
                income_entries::received_on.desc(),
                income_entries::created_at.desc(),
            ))
            .select(IncomeEntryDB::as_select())
            .load::<IncomeEntryDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(IncomeEntry::from).collect())
    }

    fn get_income(&self, user_id: &str, income_id: &str) -> Result<IncomeEntry> {
        let mut conn = get_connection(&self.pool)?;
        income_entries::table
            .filter(income_entries::id.eq(income_id))
            .filter(income_entries::user_id.eq(user_id))
            .select(IncomeEntryDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .map(IncomeEntry::from)
            .ok_or_else(|| Error::not_found("Income", income_id))
    }

    async fn insert_income(&self, entry: IncomeEntry) -> Result<IncomeEntry> {
        let row = IncomeEntryDB::from(entry);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<IncomeEntry> {
                let stored = diesel::insert_into(income_entries::table)
                    .values(&row)
                    .returning(IncomeEntryDB::as_returning())
                    .get_result(conn)
                    .into_core()?;
                Ok(IncomeEntry::from(stored))
            })
            .await
    }

    async fn update_income(&self, entry: IncomeEntry) -> Result<IncomeEntry> {
        let row = IncomeEntryDB::from(entry);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<IncomeEntry> {
                diesel::update(
                    income_entries::table
                        .filter(income_entries::id.eq(&row.id))
                        .filter(income_entries::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(IncomeEntryDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .map(IncomeEntry::from)
                .ok_or_else(|| Error::not_found("Income", row.id.clone()))
            })
            .await
    }

    async fn delete_income(&self, user_id: &str, income_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let income_id = income_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    income_entries::table
                        .filter(income_entries::id.eq(income_id))
                        .filter(income_entries::user_id.eq(user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seed_user, setup_db, ts};

    fn entry(id: &str, day: u32, recurring: bool) -> IncomeEntry {
        IncomeEntry {
            id: id.to_string(),
            user_id: "u1".to_string(),
            description: id.to_string(),
            amount: 100.0,
            received_on: ts(day).date(),
            category_id: Some("salary".to_string()),
            is_recurring: recurring,
            notes: None,
            created_at: ts(1),
            updated_at: ts(1),
        }
    }

    #[tokio::test]
    async fn lists_by_received_date_descending() {
        let db = setup_db();
        seed_user(&db, "u1").await;
        let repo = IncomeRepository::new(db.pool.clone(), db.writer.clone());

        repo.insert_income(entry("early", 3, true)).await.unwrap();
        repo.insert_income(entry("late", 25, false)).await.unwrap();

        let list = repo.list_income("u1").unwrap();
        let ids: Vec<&str> = list.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
        assert!(list[1].is_recurring);

        let moved = IncomeEntry {
            received_on: ts(28).date(),
            ..list[1].clone()
        };
        repo.update_income(moved).await.unwrap();
        assert_eq!(repo.list_income("u1").unwrap()[0].id, "early");
    }
}
