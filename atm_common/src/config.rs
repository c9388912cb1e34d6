use crate::policy::PolicyTable;
use serde::{Deserialize, Serialize};

/// The PIN that unlocks a session by default
pub const DEFAULT_PIN: i64 = 1234;

/// How many PIN attempts are allowed before the card is blocked
pub const DEFAULT_MAX_PIN_ATTEMPTS: u8 = 3;

/// **Session configuration**
///
/// Passed explicitly to everything that needs a threshold or the PIN.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct AtmConfig {
    pub pin: i64,
    pub max_pin_attempts: u8,
    pub policies: PolicyTable,
}

impl Default for AtmConfig {
    fn default() -> Self {
        AtmConfig {
            pin: DEFAULT_PIN,
            max_pin_attempts: DEFAULT_MAX_PIN_ATTEMPTS,
            policies: PolicyTable::default(),
        }
    }
}
