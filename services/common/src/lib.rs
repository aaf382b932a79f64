mod env;
mod net;
mod telemetry;

pub use env::{env_or, parse_or, require_var, EnvError};
pub use net::{bind_listener, shutdown_signal};
pub use telemetry::{init_tracing, TracingGuards};
