// Composition root for the users service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory user store.
// - Wire the route table onto the store.

pub mod config;
pub mod http;
pub mod state;
