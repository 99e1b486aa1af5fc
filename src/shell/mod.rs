// Composition root for the demo binary.
//
// Responsibilities
// - Read config from environment.
// - Install the tracing subscriber.
// - Generate producer traffic to seed a store.

pub mod config;
pub mod seed;
pub mod telemetry;
