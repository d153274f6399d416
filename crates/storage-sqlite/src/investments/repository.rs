use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::investments::{Investment, InvestmentRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::InvestmentDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::investments;

pub struct InvestmentRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl InvestmentRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        InvestmentRepository { pool, writer }
    }
}

#[async_trait]
impl InvestmentRepositoryTrait for InvestmentRepository {
    fn list_investments(&self, user_id: &str) -> Result<Vec<Investment>> {
        let mut conn = get_connection(&self.pool)?;
        investments::table
            .filter(investments::user_id.eq(user_id))
            .order((
                investments::invested_on.desc(),
                investments::created_at.desc(),
            ))
            .select(InvestmentDB::as_select())
            .load::<InvestmentDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Investment::try_from)
            .collect()
    }

    fn get_investment(&self, user_id: &str, investment_id: &str) -> Result<Investment> {
        let mut conn = get_connection(&self.pool)?;
        investments::table
            .filter(investments::id.eq(investment_id))
            .filter(investments::user_id.eq(user_id))
            .select(InvestmentDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::not_found("Investment", investment_id))
            .and_then(Investment::try_from)
    }

    async fn insert_investment(&self, investment: Investment) -> Result<Investment> {
        let row = InvestmentDB::from(investment);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::insert_into(investments::table)
                    .values(&row)
                    .returning(InvestmentDB::as_returning())
                    .get_result(conn)
                    .into_core()
                    .and_then(Investment::try_from)
            })
            .await
    }

    async fn update_investment(&self, investment: Investment) -> Result<Investment> {
        let row = InvestmentDB::from(investment);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Investment> {
                diesel::update(
                    investments::table
                        .filter(investments::id.eq(&row.id))
                        .filter(investments::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(InvestmentDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .ok_or_else(|| Error::not_found("Investment", row.id.clone()))
                .and_then(Investment::try_from)
            })
            .await
    }

    async fn delete_investment(&self, user_id: &str, investment_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let investment_id = investment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    investments::table
                        .filter(investments::id.eq(investment_id))
                        .filter(investments::user_id.eq(user_id)),
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
    use finboard_core::investments::InvestmentKind;

    fn investment(id: &str, kind: InvestmentKind, day: u32) -> Investment {
        Investment {
            id: id.to_string(),
            user_id: "u1".to_string(),
            name: id.to_string(),
            kind,
            invested_amount: 1000.0,
            current_value: Some(0.0),
            invested_on: ts(day).date(),
            maturity_date: None,
            expected_return: Some(12.0),
            notes: None,
            created_at: ts(1),
            updated_at: ts(1),
        }
    }

    #[tokio::test]
    async fn lists_by_investment_date_descending() {
        let db = setup_db();
        seed_user(&db, "u1").await;
        let repo = InvestmentRepository::new(db.pool.clone(), db.writer.clone());

        repo.insert_investment(investment("older", InvestmentKind::FixedIncome, 2))
            .await
            .unwrap();
        repo.insert_investment(investment("newer", InvestmentKind::Crypto, 20))
            .await
            .unwrap();

        let list = repo.list_investments("u1").unwrap();
        assert_eq!(list[0].id, "newer");
        assert_eq!(list[0].kind, InvestmentKind::Crypto);
        assert_eq!(list[1].kind, InvestmentKind::FixedIncome);
        // A recorded zero value is kept distinct from "not recorded".
        assert_eq!(list[1].current_value, Some(0.0));
    }
}
