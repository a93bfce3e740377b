mod config;
mod logging;
mod signals;

pub use config::{load_config, resolve_answer_address, CliOverrides};
pub use logging::init_logging;
pub use signals::cancel_on_signal;
