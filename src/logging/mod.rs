mod install_logging;
mod log_level;

pub use install_logging::*;
pub use log_level::*;
