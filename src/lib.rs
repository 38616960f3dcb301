pub mod config;
pub mod controller;
pub mod mixer;
pub mod remote;
pub mod status;
pub mod telemetry;
pub mod transport;

pub use controller::SessionController;
pub use remote::{decode, Button};
pub use status::StatusLine;
