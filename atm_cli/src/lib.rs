pub mod logic;

/// Default log filter when `RUST_LOG` isn't set
pub const DEFAULT_LOG_FILTER: &str = "atm=warn";
