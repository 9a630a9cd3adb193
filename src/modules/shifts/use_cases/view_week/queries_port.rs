use crate::modules::shifts::core::shift::ShiftRecord;
use async_trait::async_trait;

/// Read side of the shift store. Lists come back in fetch (id) order and may
/// cover more than the week a view displays.
#[async_trait]
pub trait ShiftQueries {
    async fn list_by_branch(&self, branch_id: i64) -> anyhow::Result<Vec<ShiftRecord>>;

    async fn list_by_employee(
        &self,
        branch_id: i64,
        user_id: &str,
    ) -> anyhow::Result<Vec<ShiftRecord>>;

    async fn get(&self, shift_id: i64) -> anyhow::Result<Option<ShiftRecord>>;
}
