use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use log::debug;
use uuid::Uuid;

use super::dreams_model::{
    Dream, DreamContribution, DreamsOverview, NewDream, NewDreamContribution,
};
use super::dreams_traits::{DreamRepositoryTrait, DreamServiceTrait};
use crate::errors::{Error, Result};

pub struct DreamService {
    repository: Arc<dyn DreamRepositoryTrait>,
}

impl DreamService {
    pub fn new(repository: Arc<dyn DreamRepositoryTrait>) -> Self {
        DreamService { repository }
    }
}

#[async_trait]
impl DreamServiceTrait for DreamService {
    fn list_dreams(&self, user_id: &str) -> Result<Vec<Dream>> {
        self.repository.list_dreams(user_id)
    }

    fn get_overview(&self, user_id: &str) -> Result<DreamsOverview> {
        let dreams = self.repository.list_dreams(user_id)?;
        Ok(DreamsOverview::from_dreams(&dreams))
    }

    fn list_contributions(&self, user_id: &str, dream_id: &str) -> Result<Vec<DreamContribution>> {
        self.repository.get_dream(user_id, dream_id)?;
        self.repository.list_contributions(dream_id)
    }

    async fn create_dream(&self, user_id: &str, input: NewDream) -> Result<Dream> {
        input.validate()?;
        let now = Utc::now().naive_utc();
        let dream = Dream {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            title: input.title.trim().to_string(),
            description: input.description,
            target_amount: input.target_amount,
            saved_amount: input.saved_amount,
            monthly_contribution: input.monthly_contribution,
            target_date: input.target_date,
            priority: input.priority,
            status: input.status,
            category: input.category,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        };
        self.repository.insert_dream(dream).await
    }

    async fn update_dream(
        &self,
        user_id: &str,
        dream_id: &str,
        changes: NewDream,
    ) -> Result<Dream> {
        changes.validate()?;
        let existing = self.repository.get_dream(user_id, dream_id)?;
        let dream = Dream {
            title: changes.title.trim().to_string(),
            description: changes.description,
            target_amount: changes.target_amount,
            saved_amount: changes.saved_amount,
            monthly_contribution: changes.monthly_contribution,
            target_date: changes.target_date,
            priority: changes.priority,
            status: changes.status,
            category: changes.category,
            image_url: changes.image_url,
            updated_at: Utc::now().naive_utc(),
            ..existing
        };
        self.repository.update_dream(dream).await
    }

    async fn delete_dream(&self, user_id: &str, dream_id: &str) -> Result<()> {
        match self.repository.delete_dream(user_id, dream_id).await? {
            0 => Err(Error::not_found("Dream", dream_id)),
            _ => Ok(()),
        }
    }

    async fn add_contribution(
        &self,
        user_id: &str,
        dream_id: &str,
        input: NewDreamContribution,
    ) -> Result<Dream> {
        input.validate()?;
        self.repository.get_dream(user_id, dream_id)?;
        let now = Utc::now().naive_utc();
        let contribution = DreamContribution {
            id: Uuid::new_v4().to_string(),
            dream_id: dream_id.to_string(),
            amount: input.amount,
            contributed_on: input.contributed_on.unwrap_or_else(|| now.date()),
            notes: input.notes,
            created_at: now,
        };
        debug!("Adding {} to dream {}", contribution.amount, dream_id);
        self.repository
            .insert_contribution(user_id, contribution)
            .await
    }
}
