use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::SqliteConnection;

use finboard_core::dreams::{Dream, DreamContribution, DreamRepositoryTrait};
use finboard_core::{Error, Result};

use super::model::{DreamContributionDB, DreamDB};
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::IntoCore;
use crate::schema::{dream_contributions, dreams};

pub struct DreamRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl DreamRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        DreamRepository { pool, writer }
    }
}

#[async_trait]
impl DreamRepositoryTrait for DreamRepository {
    fn list_dreams(&self, user_id: &str) -> Result<Vec<Dream>> {
        let mut conn = get_connection(&self.pool)?;
        dreams::table
            .filter(dreams::user_id.eq(user_id))
            .order(dreams::created_at.desc())
            .select(DreamDB::as_select())
            .load::<DreamDB>(&mut conn)
            .into_core()?
            .into_iter()
            .map(Dream::try_from)
            .collect()
    }

    fn get_dream(&self, user_id: &str, dream_id: &str) -> Result<Dream> {
        let mut conn = get_connection(&self.pool)?;
        dreams::table
            .filter(dreams::id.eq(dream_id))
            .filter(dreams::user_id.eq(user_id))
            .select(DreamDB::as_select())
            .first(&mut conn)
            .optional()
            .into_core()?
            .ok_or_else(|| Error::not_found("Dream", dream_id))
            .and_then(Dream::try_from)
    }

    fn list_contributions(&self, dream_id: &str) -> Result<Vec<DreamContribution>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = dream_contributions::table
            .filter(dream_contributions::dream_id.eq(dream_id))
            .order((
                dream_contributions::contributed_on.desc(),
                dream_contributions::created_at.desc(),
            ))
            .select(DreamContributionDB::as_select())
            .load::<DreamContributionDB>(&mut conn)
            .into_core()?;
        Ok(rows.into_iter().map(DreamContribution::from).collect())
    }

    async fn insert_dream(&self, dream: Dream) -> Result<Dream> {
        let row = DreamDB::from(dream);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dream> {
                diesel::insert_into(dreams::table)
                    .values(&row)
                    .returning(DreamDB::as_returning())
                    .get_result(conn)
                    .into_core()
                    .and_then(Dream::try_from)
            })
            .await
    }

    async fn update_dream(&self, dream: Dream) -> Result<Dream> {
        let row = DreamDB::from(dream);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dream> {
                diesel::update(
                    dreams::table
                        .filter(dreams::id.eq(&row.id))
                        .filter(dreams::user_id.eq(&row.user_id)),
                )
                .set(&row)
                .returning(DreamDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .ok_or_else(|| Error::not_found("Dream", row.id.clone()))
                .and_then(Dream::try_from)
            })
            .await
    }

    async fn delete_dream(&self, user_id: &str, dream_id: &str) -> Result<usize> {
        let user_id = user_id.to_string();
        let dream_id = dream_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                diesel::delete(
                    dreams::table
                        .filter(dreams::id.eq(dream_id))
                        .filter(dreams::user_id.eq(user_id)),
                )
                .execute(conn)
                .into_core()
            })
            .await
    }

    async fn insert_contribution(
        &self,
        user_id: &str,
        contribution: DreamContribution,
    ) -> Result<Dream> {
        let user_id = user_id.to_string();
        let row = DreamContributionDB::from(contribution);
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dream> {
                let updated = diesel::update(
                    dreams::table
                        .filter(dreams::id.eq(&row.dream_id))
                        .filter(dreams::user_id.eq(&user_id)),
                )
                .set((
                    dreams::saved_amount.eq(dreams::saved_amount + row.amount),
                    dreams::updated_at.eq(row.created_at),
                ))
                .returning(DreamDB::as_returning())
                .get_result(conn)
                .optional()
                .into_core()?
                .ok_or_else(|| Error::not_found("Dream", row.dream_id.clone()))?;

                diesel::insert_into(dream_contributions::table)
                    .values(&row)
                    .execute(conn)
                    .into_core()?;

                Dream::try_from(updated)
            })
            .await
    }
}
