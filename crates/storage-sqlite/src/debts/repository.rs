use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::debts::{Debt, DebtRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::DebtDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::debts;

pub struct DebtRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DebtRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DebtRepository { pool, writer }
    }
}

#[async_trait]
impl DebtRepositoryTrait for DebtRepository {
    fn list_debts(&self, user_id: &str) -> Result<Vec<Debt>> {
        let mut conn = get_connection(&self.pool)?;
        debts::table
            .filter(debts::user_id.eq(user_id))
            .order(debts::created_at.desc())
            .select(DebtDB::as_select())
            .load::<DebtDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Debt::try_from)
            .collect()
    }

    fn get_debt(&self, user_id: &str, debt_id: &str) -> Result<Debt> {
        let mut conn = get_connection(&self.pool)?;
        debts::table
            .filter(debts::id.eq(debt_id))
            .filter(debts::user_id.eq(user_id))
            .select(DebtDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::not_found("Debt", debt_id))
            .and_then(Debt::try_from)
    }

    async fn insert_debt(&self, debt: Debt) -> Result<Debt> {
        let row = DebtDB::from(debt);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Debt> {
                diesel::insert_into(debts::table)
                    .values(&row)
                    .returning(DebtDB::as_returning())
                    .get_result(conn)
                    .into_core()
                    .and_then(Debt::try_from)
            })
            .await
    }

    async fn update_debt(&self, debt: Debt) -> Result<Debt> {
        let row = DebtDB::from(debt);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Debt> {
                diesel::update(
                    debts::table
                        .filter(debts::id.eq(&row.id))
                        .filter(debts::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(DebtDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .ok_or_else(|| Error::not_found("Debt", row.id.clone()))
                .and_then(Debt::try_from)
            })
            .await
    }

    async fn delete_debt(&self, user_id: &str, debt_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let debt_id = debt_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    debts::table
                        .filter(debts::id.eq(debt_id))
                        .filter(debts::user_id.eq(user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
