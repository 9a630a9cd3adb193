use crate::modules::shifts::core::position::Position;
use crate::modules::shifts::core::shift::NewShift;
use crate::modules::shifts::use_cases::schedule_shift::command::ScheduleShift;
use crate::modules::shifts::use_cases::schedule_shift::decision::{DecideError, Decision};

/// Write-path validation. The read path never re-checks any of this.
pub fn decide_schedule(command: ScheduleShift) -> Decision {
    let user_id = command.user_id.trim();
    if user_id.is_empty() {
        return Decision::Rejected {
            reason: DecideError::MissingEmployee,
        };
    }
    if command.end_time <= command.start_time {
        return Decision::Rejected {
            reason: DecideError::InvalidInterval,
        };
    }
    let Some(position) = Position::from_label(&command.position) else {
        return Decision::Rejected {
            reason: DecideError::UnknownPosition(command.position),
        };
    };
    let notes = command
        .notes
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    Decision::Accepted {
        shift: NewShift {
            user_id: user_id.to_string(),
            branch_id: command.branch_id,
            start_time: command.start_time,
            end_time: command.end_time,
            position,
            notes,
        },
    }
}
