use crate::modules::shifts::core::shift::{NewShift, ShiftRecord};
use async_trait::async_trait;

#[async_trait]
pub trait ShiftRepository: Send + Sync {
    async fn insert(&self, shift: NewShift) -> anyhow::Result<ShiftRecord>;

    /// `None` when no shift has this id.
    async fn update(&self, shift_id: i64, shift: NewShift) -> anyhow::Result<Option<ShiftRecord>>;

    /// `false` when no shift has this id.
    async fn delete(&self, shift_id: i64) -> anyhow::Result<bool>;
}
