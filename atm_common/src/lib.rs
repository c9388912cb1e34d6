pub mod cli;
pub mod config;
pub mod errors;
pub mod input;
pub mod policy;
pub mod session;
pub mod tx;
pub mod validation;

pub use config::AtmConfig;
pub use input::{InputSource, LineSource};
pub use policy::{AccountPolicy, AccountType, PolicyTable};
pub use session::{PinAttempt, PinGate, Receipt, Session};
