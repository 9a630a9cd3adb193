use async_graphql::{EmptyMutation, EmptySubscription, Schema};

pub use crate::modules::shifts::use_cases::view_week::inbound::graphql::QueryRoot;
pub use crate::shell::state::AppState;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(state)
        .finish()
}
