//! The console session: prompts, answers, messages
//!
//! Every stage either moves the session forward or prints why it can't and
//! ends it. Only the PIN gate retries.

use atm_common::cli::constants::*;
use atm_common::cli::helpers::*;
use atm_common::errors::AtmError;
use atm_common::input::{InputError, InputSource};
use atm_common::tx::TxKind;
use atm_common::validation::{parse_balance, parse_decimal, parse_int};
use atm_common::{AccountType, AtmConfig, PinAttempt, PinGate, Receipt, Session};
use rust_decimal::Decimal;
use std::io::{self, Write};
use thiserror::Error;

/// **Why a console session ended without a transaction**
#[derive(Debug, Error)]
pub enum CliError {
    /// The user was told why; see [`AtmError`].
    #[error("{0}")]
    Session(#[from] AtmError),

    #[error("console output failed: {0}")]
    Io(#[from] io::Error),
}

impl CliError {
    /// The session error, if this wasn't a console failure
    pub fn session_error(&self) -> Option<&AtmError> {
        match self {
            CliError::Session(err) => Some(err),
            CliError::Io(_) => None,
        }
    }
}

/// **Runs one complete ATM session.**
///
/// Reads answers from `input` and writes prompts and messages to `out`.
///
/// Returns the receipt of the one transaction made.
///
/// # Errors
/// - Any terminal condition, already reported to the user, `CliError::Session`;
/// - Writing to `out` failed, `CliError::Io`.
pub fn run_session<I, W>(config: &AtmConfig, input: &mut I, out: &mut W) -> Result<Receipt, CliError>
where
    I: InputSource,
    W: Write,
{
    log::info!("Session started");

    let pin_attempts_used = verify_pin(config, input, out)?;
    let account_type = select_account_type(input, out)?;
    let mut session = open_session(config, account_type, pin_attempts_used, input, out)?;
    let kind = select_tx_kind(input, out)?;
    let receipt = process_tx(&mut session, kind, input, out)?;

    log::info!(
        "{} account: {} of {} completed",
        receipt.account_type,
        receipt.tx.kind(),
        fmt_amount(receipt.tx.amount())
    );

    Ok(receipt)
}

/// **PIN gate**
///
/// Returns the number of failed attempts before the PIN was verified.
fn verify_pin<I: InputSource, W: Write>(
    config: &AtmConfig,
    input: &mut I,
    out: &mut W,
) -> Result<u8, CliError> {
    let mut gate = PinGate::new(config);

    while !gate.is_blocked() {
        let token = ask(input, out, PIN_PROMPT)?;

        match gate.attempt(&token)? {
            PinAttempt::Verified => {
                writeln!(out, "{PIN_VERIFIED}\n")?;
                return Ok(gate.attempts_used());
            }
            PinAttempt::NotANumber { remaining } => {
                log::warn!("Non-numeric PIN entered; {} attempt(s) left", remaining);
                writeln!(out, "{PIN_NOT_A_NUMBER}")?;
            }
            PinAttempt::Incorrect { remaining } => {
                log::warn!("Incorrect PIN entered; {} attempt(s) left", remaining);
                if remaining > 0 {
                    writeln!(out, "{}\n", incorrect_pin(remaining))?;
                }
            }
        }
    }

    log::warn!("Card blocked after {} failed PIN attempts", gate.attempts_used());
    abort(out, AtmError::CardBlocked)
}

/// **Account selector**
///
/// A single chance; there is no retry.
fn select_account_type<I: InputSource, W: Write>(
    input: &mut I,
    out: &mut W,
) -> Result<AccountType, CliError> {
    for line in account_menu() {
        writeln!(out, "{line}")?;
    }

    let token = ask(input, out, ACCOUNT_PROMPT)?;

    match parse_int(&token).and_then(AccountType::from_choice) {
        Some(account_type) => {
            log::info!("{} account selected", account_type);
            writeln!(out, "{}\n", account_selected(account_type))?;
            Ok(account_type)
        }
        None => abort(out, AtmError::InvalidAccountType),
    }
}

/// **Balance intake**
///
/// Opens the session, which charges any low-balance penalty, and shows it.
fn open_session<'a, I: InputSource, W: Write>(
    config: &'a AtmConfig,
    account_type: AccountType,
    pin_attempts_used: u8,
    input: &mut I,
    out: &mut W,
) -> Result<Session<'a>, CliError> {
    let token = ask(input, out, BALANCE_PROMPT)?;

    let balance = match parse_balance(&token) {
        Some(balance) => balance,
        None => return abort(out, AtmError::InvalidBalance),
    };

    let session = match Session::open(config, account_type, balance, pin_attempts_used) {
        Ok(session) => session,
        Err(err) => return abort(out, err),
    };

    if let Some(penalty) = session.penalty() {
        log::info!("Low-balance penalty of {} charged", fmt_amount(penalty));
        writeln!(out, "{}", penalty_charged(penalty))?;
        writeln!(out, "{}\n", updated_balance(session.balance()))?;
    }

    Ok(session)
}

/// **Transaction menu**
///
/// A single chance; there is no retry.
fn select_tx_kind<I: InputSource, W: Write>(input: &mut I, out: &mut W) -> Result<TxKind, CliError> {
    writeln!(out)?;
    for line in tx_menu() {
        writeln!(out, "{line}")?;
    }

    let token = ask(input, out, TX_PROMPT)?;

    match parse_int(&token).and_then(TxKind::from_choice) {
        Some(kind) => Ok(kind),
        None => abort(out, AtmError::InvalidTransactionType),
    }
}

/// **Reads the amount and applies the account's rules to the transaction**
///
/// A rejected withdrawal also shows the unchanged balance.
fn process_tx<I: InputSource, W: Write>(
    session: &mut Session<'_>,
    kind: TxKind,
    input: &mut I,
    out: &mut W,
) -> Result<Receipt, CliError> {
    let token = ask(input, out, amount_prompt(kind))?;

    let amount = match parse_decimal(&token) {
        Some(amount) => amount,
        None => return abort(out, AtmError::InvalidAmount),
    };

    let receipt = match session.transact(kind, amount) {
        Ok(receipt) => receipt,
        Err(err) if err.is_withdrawal_rule() => {
            log::warn!("{} rejected: {}", kind, err);
            writeln!(out, "{WITHDRAW_FAILED}")?;
            writeln!(out, "{err}")?;
            writeln!(out, "{}", current_balance(session.balance()))?;
            return Err(err.into());
        }
        Err(err) => {
            log::warn!("{} rejected: {}", kind, err);
            return abort(out, err);
        }
    };

    match kind {
        TxKind::Withdraw => {
            writeln!(out, "{WITHDRAW_OK}")?;
            writeln!(out, "{}", remaining_balance(receipt.balance))?;
        }
        TxKind::Deposit => {
            writeln!(out, "{DEPOSIT_OK}")?;
            writeln!(out, "{}", updated_balance(receipt.balance))?;
            if receipt.below_minimum {
                let minimum = session.policy().minimum_balance.unwrap_or(Decimal::ZERO);
                writeln!(out, "{}", below_minimum_note(minimum))?;
            }
        }
    }

    Ok(receipt)
}

/// **Writes `prompt` and reads the next answer.**
///
/// Running out of input ends the session.
fn ask<I: InputSource, W: Write>(input: &mut I, out: &mut W, prompt: &str) -> Result<String, CliError> {
    write!(out, "{prompt}")?;
    out.flush()?;

    match input.next_token() {
        Ok(token) => Ok(token),
        Err(err) => {
            if let InputError::Io(msg) = &err {
                log::error!("Failed to read input: {}", msg);
            }
            writeln!(out)?;
            abort(out, AtmError::InputClosed)
        }
    }
}

/// Tells the user why the session ends, and ends it.
fn abort<T, W: Write>(out: &mut W, err: AtmError) -> Result<T, CliError> {
    writeln!(out, "{err}")?;
    Err(CliError::Session(err))
}
