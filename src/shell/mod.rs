// Composition root for the bookings bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations.
// - Wire implementations into the wizard handler and expose it over HTTP.

pub mod config;
pub mod http;
pub mod state;
