use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::bills::{Bill, BillRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::BillDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::bills;

pub struct BillRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl BillRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        BillRepository { pool, writer }
    }
}

#[async_trait]
impl BillRepositoryTrait for BillRepository {
    fn list_bills(&self, user_id: &str) -> Result<Vec<Bill>> {
        let mut conn = get_connection(&self.pool)?;
        bills::table
            .filter(bills::user_id.eq(user_id))
            .order(bills::created_at.desc())
            .select(BillDB::as_select())
            .load::<BillDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Bill::try_from)
            .collect()
    }

    fn get_bill(&self, user_id: &str, bill_id: &str) -> Result<Bill> {
        let mut conn = get_connection(&self.pool)?;
        bills::table
            .filter(bills::id.eq(bill_id))
            .filter(bills::user_id.eq(user_id))
            .select(BillDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::not_found("Bill", bill_id))
            .and_then(Bill::try_from)
    }

    async fn insert_bill(&self, bill: Bill) -> Result<Bill> {
        let row = BillDB::from(bill);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bill> {
                diesel::insert_into(bills::table)
                    .values(&row)
                    .returning(BillDB::as_returning())
                    .get_result(conn)
                    .into_core()
                    .and_then(Bill::try_from)
            })
            .await
    }

    async fn update_bill(&self, bill: Bill) -> Result<Bill> {
        let row = BillDB::from(bill);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Bill> {
                diesel::update(
                    bills::table
                        .filter(bills::id.eq(&row.id))
                        .filter(bills::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(BillDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .ok_or_else(|| Error::not_found("Bill", row.id.clone()))
                .and_then(Bill::try_from)
            })
            .await
    }

    async fn delete_bill(&self, user_id: &str, bill_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let bill_id = bill_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    bills::table
                        .filter(bills::id.eq(bill_id))
                        .filter(bills::user_id.eq(user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }
}
