//! Application module
//!
//! Application-level wiring: command-line settings, logging setup, fatal
//! error reporting and runtime initialization.

pub mod config;
pub mod error_handling;
pub mod logging;
pub mod runtime;

pub use config::AppConfig;
pub use error_handling::handle_fatal_error;
pub use logging::init_logging;
pub use runtime::{initialize_app, load_runtime, Runtime};
