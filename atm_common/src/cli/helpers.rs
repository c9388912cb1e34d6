//! Text that console front ends print
//!
//! Kept here, away from any I/O, so the exact wording is unit-tested once.

use crate::cli::constants::*;
use crate::policy::AccountType;
use crate::tx::TxKind;
use rust_decimal::Decimal;

/// **Renders an amount the way every message shows it: two decimals.**
pub fn fmt_amount(amount: Decimal) -> String {
    format!("{:.2}", amount)
}

/// **The account type menu, one line per category, header first**
pub fn account_menu() -> Vec<String> {
    let mut lines = vec![ACCOUNT_MENU_HEADER.to_string()];
    lines.extend(
        AccountType::ALL
            .iter()
            .enumerate()
            .map(|(i, account)| format!("{}.{} Account", i + 1, account)),
    );
    lines
}

/// **The transaction menu, header first**
pub fn tx_menu() -> Vec<String> {
    let mut lines = vec![TX_MENU_HEADER.to_string()];
    lines.extend(
        [TxKind::Withdraw, TxKind::Deposit]
            .iter()
            .enumerate()
            .map(|(i, kind)| format!("{}. {}", i + 1, tx_menu_label(*kind))),
    );
    lines
}

fn tx_menu_label(kind: TxKind) -> &'static str {
    match kind {
        TxKind::Withdraw => "Withdraw",
        TxKind::Deposit => "Deposit",
    }
}

pub fn account_selected(account: AccountType) -> String {
    format!("{} Account selected.", account)
}

pub fn incorrect_pin(remaining: u8) -> String {
    format!("Incorrect PIN. {} attempt(s) remaining.", remaining)
}

pub fn penalty_charged(penalty: Decimal) -> String {
    format!("Penalty of {} charged for low balance.", fmt_amount(penalty))
}

pub fn updated_balance(balance: Decimal) -> String {
    format!("Updated balance: {}", fmt_amount(balance))
}

pub fn remaining_balance(balance: Decimal) -> String {
    format!("Remaining balance: {}", fmt_amount(balance))
}

pub fn current_balance(balance: Decimal) -> String {
    format!("Current balance: {}", fmt_amount(balance))
}

pub fn below_minimum_note(minimum: Decimal) -> String {
    format!(
        "Note: Your balance is still below the minimum required ({}).",
        fmt_amount(minimum)
    )
}

/// The amount prompt for the chosen transaction
pub fn amount_prompt(kind: TxKind) -> &'static str {
    match kind {
        TxKind::Withdraw => WITHDRAW_PROMPT,
        TxKind::Deposit => DEPOSIT_PROMPT,
    }
}
