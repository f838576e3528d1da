pub mod handlers;
pub mod router;
pub mod server;
pub mod telemetry;
