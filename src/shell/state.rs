use crate::modules::shifts::adapters::outbound::shifts_in_memory::InMemoryShifts;
use crate::modules::shifts::use_cases::schedule_shift::handler::ScheduleShiftHandler;
use crate::modules::shifts::use_cases::view_week::handler::WeekViewHandler;
use crate::shell::config::WeekDefaults;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub week_view: Arc<WeekViewHandler>,
    pub schedule_handler: Arc<ScheduleShiftHandler<InMemoryShifts>>,
    pub weeks: WeekDefaults,
}

impl AppState {
    pub fn in_memory(store: Arc<InMemoryShifts>, weeks: WeekDefaults) -> Self {
        Self {
            week_view: Arc::new(WeekViewHandler::new(store.clone())),
            schedule_handler: Arc::new(ScheduleShiftHandler::new(store)),
            weeks,
        }
    }
}
