// Composition root for the users registry.
//
// - Read config from environment.
// - Install the tracing subscriber.
// - Build the registry for the selected profile and expose the HTTP router.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;
