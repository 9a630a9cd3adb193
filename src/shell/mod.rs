// Composition root for the shifts service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the shift store and wire it into the use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
