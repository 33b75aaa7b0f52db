use std::collections::HashMap;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::entries::model::{parse_created_at, FoodEntryRecord};
use crate::error::StoreError;
use crate::profiles::model::NutritionProfile;

/// Port to the external record store that owns profiles and food entries.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<NutritionProfile>, StoreError>;
    async fn upsert_profile(&self, profile: &NutritionProfile) -> Result<(), StoreError>;
    /// Newest first, at most `limit` rows.
    async fn list_entries(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<FoodEntryRecord>, StoreError>;
    /// Entries with `start <= created_at < end`.
    async fn list_entries_between(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<FoodEntryRecord>, StoreError>;
    async fn insert_entry(&self, record: FoodEntryRecord) -> Result<(), StoreError>;
    /// Returns `false` when the user has no entry with that id.
    async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<bool, StoreError>;
}

/// In-process store for local runs and tests.
#[derive(Default)]
pub struct MemoryStore {
    profiles: RwLock<HashMap<Uuid, NutritionProfile>>,
    entries: RwLock<HashMap<Uuid, Vec<FoodEntryRecord>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn created_at(r: &FoodEntryRecord) -> Option<OffsetDateTime> {
    parse_created_at(&r.created_at)
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn get_profile(&self, user_id: Uuid) -> Result<Option<NutritionProfile>, StoreError> {
        Ok(self.profiles.read().await.get(&user_id).cloned())
    }

    async fn upsert_profile(&self, profile: &NutritionProfile) -> Result<(), StoreError> {
        self.profiles
            .write()
            .await
            .insert(profile.id, profile.clone());
        Ok(())
    }

    async fn list_entries(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> Result<Vec<FoodEntryRecord>, StoreError> {
        let mut rows = self
            .entries
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default();
        // unparseable timestamps sort last
        rows.sort_by_key(|r| std::cmp::Reverse(created_at(r)));
        rows.truncate(limit);
        Ok(rows)
    }

    async fn list_entries_between(
        &self,
        user_id: Uuid,
        start: OffsetDateTime,
        end: OffsetDateTime,
    ) -> Result<Vec<FoodEntryRecord>, StoreError> {
        let guard = self.entries.read().await;
        let Some(rows) = guard.get(&user_id) else {
            return Ok(Vec::new());
        };
        // rows whose time cannot be read are passed on for the caller to reject
        Ok(rows
            .iter()
            .filter(|r| created_at(r).map_or(true, |t| start <= t && t < end))
            .cloned()
            .collect())
    }

    async fn insert_entry(&self, record: FoodEntryRecord) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .entry(record.user_id)
            .or_default()
            .push(record);
        Ok(())
    }

    async fn delete_entry(&self, user_id: Uuid, entry_id: Uuid) -> Result<bool, StoreError> {
        let mut guard = self.entries.write().await;
        let Some(rows) = guard.get_mut(&user_id) else {
            return Ok(false);
        };
        let before = rows.len();
        rows.retain(|r| r.id != entry_id);
        Ok(rows.len() != before)
    }
}
