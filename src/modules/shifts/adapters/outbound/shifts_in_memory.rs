// In memory shift store.
//
// Purpose
// - Serve the read and write ports without a database.
//
// Responsibilities
// - Keep shift records keyed by id, so listing returns them in fetch order.
// - Hand out increasing ids on insert.

use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::shift::{NewShift, ShiftRecord};
use crate::modules::shifts::use_cases::view_week::queries_port::ShiftQueries;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    rows: BTreeMap<i64, ShiftRecord>,
    last_id: i64,
}

#[derive(Default)]
pub struct InMemoryShifts {
    store: RwLock<Store>,
    is_offline: bool,
}

impl InMemoryShifts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    /// Load already-identified records, e.g. ingested from an export.
    pub async fn seed(&self, records: impl IntoIterator<Item = ShiftRecord>) {
        let mut store = self.store.write().await;
        for record in records {
            store.last_id = store.last_id.max(record.id);
            store.rows.insert(record.id, record);
        }
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Shift store offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ShiftQueries for InMemoryShifts {
    async fn list_by_branch(&self, branch_id: i64) -> anyhow::Result<Vec<ShiftRecord>> {
        self.ensure_online()?;
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|r| r.branch_id == branch_id)
            .cloned()
            .collect())
    }

    async fn list_by_employee(
        &self,
        branch_id: i64,
        user_id: &str,
    ) -> anyhow::Result<Vec<ShiftRecord>> {
        self.ensure_online()?;
        let store = self.store.read().await;
        Ok(store
            .rows
            .values()
            .filter(|r| r.branch_id == branch_id && r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn get(&self, shift_id: i64) -> anyhow::Result<Option<ShiftRecord>> {
        self.ensure_online()?;
        Ok(self.store.read().await.rows.get(&shift_id).cloned())
    }
}

#[async_trait::async_trait]
impl ShiftRepository for InMemoryShifts {
    async fn insert(&self, shift: NewShift) -> anyhow::Result<ShiftRecord> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| anyhow::anyhow!("Shift ids exhausted"))?;
        store.last_id = id;
        let record = shift.into_record(id);
        store.rows.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, shift_id: i64, shift: NewShift) -> anyhow::Result<Option<ShiftRecord>> {
        self.ensure_online()?;
        let mut store = self.store.write().await;
        let Some(existing) = store.rows.get_mut(&shift_id) else {
            return Ok(None);
        };
        let employee_name = existing.employee_name.take();
        let mut record = shift.into_record(shift_id);
        record.employee_name = employee_name;
        *existing = record.clone();
        Ok(Some(record))
    }

    async fn delete(&self, shift_id: i64) -> anyhow::Result<bool> {
        self.ensure_online()?;
        Ok(self.store.write().await.rows.remove(&shift_id).is_some())
    }
}
