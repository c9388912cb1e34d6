use crate::tx::TxKind;
use rust_decimal::Decimal;
use thiserror::Error;

/// **An application-specific error type**
///
/// Every variant ends the session. The `Display` text is what the user sees.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum AtmError {
    #[error("Card Blocked! Please contact the bank.")]
    CardBlocked,

    #[error("Invalid account type.")]
    InvalidAccountType,

    #[error("Invalid balance entered.")]
    InvalidBalance,

    #[error("Invalid transaction type.")]
    InvalidTransactionType,

    #[error("Invalid amount entered.")]
    InvalidAmount,

    #[error("{0} amount must be positive.")]
    NonPositiveAmount(TxKind),

    #[error("Minimum balance of {minimum:.2} must be maintained.")]
    MinimumBalance { minimum: Decimal },

    #[error("Maximum withdrawal limit is {limit:.2} per transaction.")]
    WithdrawalLimit { limit: Decimal },

    #[error("Only one transaction is allowed per session.")]
    TransactionCompleted,

    #[error("No more input; session ended.")]
    InputClosed,
}

impl AtmError {
    /// Business-rule rejections of a withdrawal, as opposed to bad input.
    pub fn is_withdrawal_rule(&self) -> bool {
        matches!(
            self,
            AtmError::MinimumBalance { .. } | AtmError::WithdrawalLimit { .. }
        )
    }
}
