/// Prompts

pub const PIN_PROMPT: &str = "Enter your 4-digit PIN: ";
pub const ACCOUNT_PROMPT: &str = "Enter your choice (1-3): ";
pub const BALANCE_PROMPT: &str = "Enter your current balance: ";
pub const TX_PROMPT: &str = "Enter your choice (1 or 2): ";
pub const WITHDRAW_PROMPT: &str = "Enter withdrawal amount: ";
pub const DEPOSIT_PROMPT: &str = "Enter deposit amount: ";

/// Menu headers

pub const ACCOUNT_MENU_HEADER: &str = "---SELECT ACCOUNT TYPE---";
pub const TX_MENU_HEADER: &str = "---TRANSACTION TYPE---";

/// Messages

pub const PIN_VERIFIED: &str = "PIN verified successfully!";
pub const PIN_NOT_A_NUMBER: &str = "Invalid input. Please enter a 4-digit PIN.";
pub const WITHDRAW_FAILED: &str = "Transaction failed! Withdrawal not allowed.";
pub const WITHDRAW_OK: &str = "Withdrawal successful!";
pub const DEPOSIT_OK: &str = "Deposit successful!";
