use crate::modules::shifts::adapters::outbound::shift_repository::ShiftRepository;
use crate::modules::shifts::core::shift::ShiftRecord;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::decide::decide_schedule;
use crate::modules::shifts::use_cases::schedule_shift::decision::Decision;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("shift {0} not found")]
    NotFound(i64),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub struct ScheduleShiftHandler<TRepository>
where
    TRepository: ShiftRepository + Send + Sync + 'static,
{
    repository: Arc<TRepository>,
}

impl<TRepository> ScheduleShiftHandler<TRepository>
where
    TRepository: ShiftRepository + Send + Sync + 'static,
{
    pub fn new(repository: Arc<TRepository>) -> Self {
        Self { repository }
    }

    pub async fn schedule(&self, command: ScheduleShift) -> Result<ShiftRecord, ApplicationError> {
        match decide_schedule(command) {
            Decision::Accepted { shift } => {
                let record = self.repository.insert(shift).await.inspect_err(|e| {
                    tracing::error!(error = %e, "failed to store shift");
                })?;
                tracing::info!(
                    shift_id = record.id,
                    branch_id = record.branch_id,
                    period = %record.period(),
                    "shift scheduled"
                );
                Ok(record)
            }
            Decision::Rejected { reason } => {
                tracing::info!(%reason, "shift rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }

    pub async fn reschedule(
        &self,
        shift_id: i64,
        command: ScheduleShift,
    ) -> Result<ShiftRecord, ApplicationError> {
        match decide_schedule(command) {
            Decision::Accepted { shift } => {
                let updated = self
                    .repository
                    .update(shift_id, shift)
                    .await
                    .inspect_err(|e| {
                        tracing::error!(shift_id, error = %e, "failed to update shift");
                    })?;
                let record = updated.ok_or(ApplicationError::NotFound(shift_id))?;
                tracing::info!(shift_id, "shift rescheduled");
                Ok(record)
            }
            Decision::Rejected { reason } => {
                tracing::info!(shift_id, %reason, "reschedule rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }

    pub async fn remove(&self, shift_id: i64) -> Result<(), ApplicationError> {
        let removed = self.repository.delete(shift_id).await.inspect_err(|e| {
            tracing::error!(shift_id, error = %e, "failed to delete shift");
        })?;
        if !removed {
            return Err(ApplicationError::NotFound(shift_id));
        }
        tracing::info!(shift_id, "shift removed");
        Ok(())
    }
}
