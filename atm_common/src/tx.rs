use crate::policy::AccountType;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// **A transaction type**
///
/// A session performs exactly one of these.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
pub enum Tx {
    Deposit { account: AccountType, amount: Decimal },
    Withdraw { account: AccountType, amount: Decimal },
}

impl Tx {
    pub fn kind(&self) -> TxKind {
        match self {
            Tx::Deposit { .. } => TxKind::Deposit,
            Tx::Withdraw { .. } => TxKind::Withdraw,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            Tx::Deposit { amount, .. } | Tx::Withdraw { amount, .. } => *amount,
        }
    }
}

/// The transaction menu's choices, in menu order
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TxKind {
    Withdraw,
    Deposit,
}

impl TxKind {
    /// Maps a menu number to a transaction kind.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(TxKind::Withdraw),
            2 => Some(TxKind::Deposit),
            _ => None,
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxKind::Withdraw => write!(f, "Withdrawal"),
            TxKind::Deposit => write!(f, "Deposit"),
        }
    }
}
