//! The PIN gate and the single-transaction session that follows it

use crate::config::AtmConfig;
use crate::errors::AtmError;
use crate::policy::{AccountPolicy, AccountType, PolicyTable};
use crate::tx::{Tx, TxKind};
use crate::validation::parse_int;
use rust_decimal::Decimal;

/// **The result of a single PIN attempt that didn't block the card**
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PinAttempt {
    Verified,
    /// The token wasn't an integer; the attempt is consumed anyway.
    NotANumber { remaining: u8 },
    Incorrect { remaining: u8 },
}

/// **Bounded PIN verification**
///
/// Every failed attempt, numeric or not, uses up one of the
/// `max_pin_attempts` from the configuration.
#[derive(Debug)]
pub struct PinGate<'a> {
    config: &'a AtmConfig,
    attempts_used: u8,
}

impl<'a> PinGate<'a> {
    pub fn new(config: &'a AtmConfig) -> Self {
        PinGate {
            config,
            attempts_used: 0,
        }
    }

    pub fn attempts_used(&self) -> u8 {
        self.attempts_used
    }

    pub fn remaining(&self) -> u8 {
        self.config.max_pin_attempts.saturating_sub(self.attempts_used)
    }

    pub fn is_blocked(&self) -> bool {
        self.remaining() == 0
    }

    /// Checks one typed answer against the configured PIN.
    ///
    /// # Errors
    /// - No attempts left, `AtmError::CardBlocked`
    pub fn attempt(&mut self, token: &str) -> Result<PinAttempt, AtmError> {
        if self.is_blocked() {
            return Err(AtmError::CardBlocked);
        }

        match parse_int(token) {
            Some(pin) if pin == self.config.pin => Ok(PinAttempt::Verified),
            Some(_) => {
                self.attempts_used += 1;
                Ok(PinAttempt::Incorrect {
                    remaining: self.remaining(),
                })
            }
            None => {
                self.attempts_used += 1;
                Ok(PinAttempt::NotANumber {
                    remaining: self.remaining(),
                })
            }
        }
    }
}

/// **Summary of a completed session**
#[derive(Clone, Debug, PartialEq)]
pub struct Receipt {
    pub account_type: AccountType,
    pub tx: Tx,
    /// Low-balance penalty charged when the session was opened
    pub penalty: Option<Decimal>,
    pub balance: Decimal,
    /// The balance is still below the category's minimum after a deposit.
    pub below_minimum: bool,
}

/// **One customer session after the PIN gate**
///
/// Holds the chosen account category and the running balance.
/// Allows exactly one successful transaction; rejected ones leave
/// the balance untouched.
#[derive(Debug)]
pub struct Session<'a> {
    policies: &'a PolicyTable,
    account_type: AccountType,
    balance: Decimal,
    pin_attempts_used: u8,
    penalty: Option<Decimal>,
    tx: Option<Tx>,
}

impl<'a> Session<'a> {
    /// Opens a session with an accepted opening balance.
    ///
    /// A low-balance penalty, if the category has one, is charged right away,
    /// regardless of which transaction follows.
    ///
    /// # Errors
    /// - Negative opening balance, `AtmError::InvalidBalance`
    pub fn open(
        config: &'a AtmConfig,
        account_type: AccountType,
        balance: Decimal,
        pin_attempts_used: u8,
    ) -> Result<Self, AtmError> {
        if balance < Decimal::ZERO {
            return Err(AtmError::InvalidBalance);
        }

        let mut session = Session {
            policies: &config.policies,
            account_type,
            balance,
            pin_attempts_used,
            penalty: None,
            tx: None,
        };

        if let Some(penalty) = session.policy().penalty_for(balance) {
            session.balance -= penalty;
            session.penalty = Some(penalty);
            log::debug!("{} account charged a penalty of {:.2}", account_type, penalty);
        }

        Ok(session)
    }

    pub fn account_type(&self) -> AccountType {
        self.account_type
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn pin_attempts_used(&self) -> u8 {
        self.pin_attempts_used
    }

    /// The penalty charged on opening, if any
    pub fn penalty(&self) -> Option<Decimal> {
        self.penalty
    }

    pub fn policy(&self) -> &'a AccountPolicy {
        self.policies.policy(self.account_type)
    }

    /// Performs the transaction of the given kind and summarizes the session.
    ///
    /// # Errors
    /// See [`Session::withdraw`] and [`Session::deposit`].
    pub fn transact(&mut self, kind: TxKind, amount: Decimal) -> Result<Receipt, AtmError> {
        let tx = match kind {
            TxKind::Withdraw => self.withdraw(amount)?,
            TxKind::Deposit => self.deposit(amount)?,
        };

        Ok(self.receipt(tx))
    }

    /// Withdraws `amount` if the category's rules allow it.
    ///
    /// # Errors
    /// - A transaction was already made, `AtmError::TransactionCompleted`;
    /// - Zero or negative amount, `AtmError::NonPositiveAmount`;
    /// - Amount above the category's cap, `AtmError::WithdrawalLimit`;
    /// - Resulting balance below the category's minimum, `AtmError::MinimumBalance`.
    pub fn withdraw(&mut self, amount: Decimal) -> Result<Tx, AtmError> {
        self.ensure_no_tx()?;

        if amount <= Decimal::ZERO {
            return Err(AtmError::NonPositiveAmount(TxKind::Withdraw));
        }

        let policy = self.policy();

        if let Some(limit) = policy.withdrawal_cap {
            if amount > limit {
                return Err(AtmError::WithdrawalLimit { limit });
            }
        }

        let new_balance = self
            .balance
            .checked_sub(amount)
            .ok_or(AtmError::InvalidAmount)?;

        if let Some(minimum) = policy.minimum_balance {
            if new_balance < minimum {
                return Err(AtmError::MinimumBalance { minimum });
            }
        }

        self.balance = new_balance;
        Ok(self.record(Tx::Withdraw {
            account: self.account_type,
            amount,
        }))
    }

    /// Deposits `amount`. No penalty is charged again, whatever the result.
    ///
    /// # Errors
    /// - A transaction was already made, `AtmError::TransactionCompleted`;
    /// - Zero or negative amount, `AtmError::NonPositiveAmount`;
    /// - The balance can't represent the sum, `AtmError::InvalidAmount`.
    pub fn deposit(&mut self, amount: Decimal) -> Result<Tx, AtmError> {
        self.ensure_no_tx()?;

        if amount <= Decimal::ZERO {
            return Err(AtmError::NonPositiveAmount(TxKind::Deposit));
        }

        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(AtmError::InvalidAmount)?;

        Ok(self.record(Tx::Deposit {
            account: self.account_type,
            amount,
        }))
    }

    fn ensure_no_tx(&self) -> Result<(), AtmError> {
        match self.tx {
            Some(_) => Err(AtmError::TransactionCompleted),
            None => Ok(()),
        }
    }

    fn record(&mut self, tx: Tx) -> Tx {
        self.tx = Some(tx.clone());
        tx
    }

    fn receipt(&self, tx: Tx) -> Receipt {
        let below_minimum =
            tx.kind() == TxKind::Deposit && self.policy().advises_below_minimum(self.balance);

        Receipt {
            account_type: self.account_type,
            tx,
            penalty: self.penalty,
            balance: self.balance,
            below_minimum,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(n: i64) -> Decimal {
        Decimal::from(n)
    }

    #[test]
    fn pin_verified_on_each_attempt() {
        let config = AtmConfig::default();

        for k in 0..3 {
            let mut gate = PinGate::new(&config);
            for _ in 0..k {
                assert!(matches!(
                    gate.attempt("1111"),
                    Ok(PinAttempt::Incorrect { .. })
                ));
            }
            assert_eq!(gate.attempt("1234"), Ok(PinAttempt::Verified));
            assert_eq!(gate.attempts_used(), k);
        }
    }

    #[test]
    fn pin_blocked_after_three_failures() {
        let config = AtmConfig::default();
        let mut gate = PinGate::new(&config);

        assert_eq!(
            gate.attempt("0000"),
            Ok(PinAttempt::Incorrect { remaining: 2 })
        );
        assert_eq!(
            gate.attempt("abcd"),
            Ok(PinAttempt::NotANumber { remaining: 1 })
        );
        assert_eq!(
            gate.attempt("4321"),
            Ok(PinAttempt::Incorrect { remaining: 0 })
        );
        assert!(gate.is_blocked());
        assert_eq!(gate.attempts_used(), 3);

        // Even the right PIN is refused now.
        assert_eq!(gate.attempt("1234"), Err(AtmError::CardBlocked));
        assert_eq!(gate.attempts_used(), 3);
    }

    #[test]
    fn pin_from_config() {
        let config = AtmConfig {
            pin: 9876,
            ..AtmConfig::default()
        };
        let mut gate = PinGate::new(&config);
        assert!(matches!(
            gate.attempt("1234"),
            Ok(PinAttempt::Incorrect { .. })
        ));
        assert_eq!(gate.attempt("9876"), Ok(PinAttempt::Verified));
    }

    #[test]
    fn open_rejects_negative_balance() {
        let config = AtmConfig::default();
        let session = Session::open(&config, AccountType::Savings, dec(-1), 0);
        assert_eq!(session.unwrap_err(), AtmError::InvalidBalance);
    }

    #[test]
    fn current_penalty_applied_on_open() {
        let config = AtmConfig::default();
        let session = Session::open(&config, AccountType::Current, dec(4000), 1).unwrap();

        assert_eq!(session.penalty(), Some(dec(200)));
        assert_eq!(session.balance(), dec(3800));
        assert_eq!(session.pin_attempts_used(), 1);
    }

    #[test]
    fn no_penalty_at_or_above_minimum() {
        let config = AtmConfig::default();
        let session = Session::open(&config, AccountType::Current, dec(5000), 0).unwrap();
        assert_eq!(session.penalty(), None);
        assert_eq!(session.balance(), dec(5000));

        let session = Session::open(&config, AccountType::Savings, dec(100), 0).unwrap();
        assert_eq!(session.penalty(), None);
        assert_eq!(session.balance(), dec(100));
    }

    #[test]
    fn savings_withdrawal_below_minimum_rejected() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Savings, dec(1500), 0).unwrap();

        assert_eq!(
            session.withdraw(dec(600)),
            Err(AtmError::MinimumBalance { minimum: dec(1000) })
        );
        assert_eq!(session.balance(), dec(1500));
    }

    #[test]
    fn savings_withdrawal_ok() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Savings, dec(2000), 0).unwrap();

        let receipt = session.transact(TxKind::Withdraw, dec(500)).unwrap();
        assert_eq!(
            receipt.tx,
            Tx::Withdraw {
                account: AccountType::Savings,
                amount: dec(500)
            }
        );
        assert_eq!(receipt.balance, dec(1500));
        assert!(!receipt.below_minimum);
    }

    #[test]
    fn savings_withdrawal_down_to_minimum_ok() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Savings, dec(2000), 0).unwrap();
        assert!(session.withdraw(dec(1000)).is_ok());
        assert_eq!(session.balance(), dec(1000));
    }

    #[test]
    fn current_withdrawal_below_minimum_rejected() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Current, dec(6000), 0).unwrap();

        assert_eq!(
            session.withdraw(dec(1001)),
            Err(AtmError::MinimumBalance { minimum: dec(5000) })
        );
        assert_eq!(session.balance(), dec(6000));
        assert!(session.withdraw(dec(1000)).is_ok());
        assert_eq!(session.balance(), dec(5000));
    }

    #[test]
    fn salary_cap_regardless_of_balance() {
        let config = AtmConfig::default();
        let mut session =
            Session::open(&config, AccountType::Salary, dec(1_000_000), 0).unwrap();

        assert_eq!(
            session.withdraw(dec(30000)),
            Err(AtmError::WithdrawalLimit { limit: dec(25000) })
        );
        assert_eq!(session.balance(), dec(1_000_000));
    }

    #[test]
    fn salary_has_no_minimum() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Salary, dec(20000), 0).unwrap();

        assert!(session.withdraw(dec(20000)).is_ok());
        assert_eq!(session.balance(), Decimal::ZERO);
    }

    #[test]
    fn salary_cap_is_inclusive() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Salary, dec(30000), 0).unwrap();
        assert!(session.withdraw(dec(25000)).is_ok());
        assert_eq!(session.balance(), dec(5000));
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Savings, dec(3000), 0).unwrap();

        assert_eq!(
            session.deposit(dec(-5)),
            Err(AtmError::NonPositiveAmount(TxKind::Deposit))
        );
        assert_eq!(
            session.deposit(Decimal::ZERO),
            Err(AtmError::NonPositiveAmount(TxKind::Deposit))
        );
        assert_eq!(
            session.withdraw(Decimal::ZERO),
            Err(AtmError::NonPositiveAmount(TxKind::Withdraw))
        );
        assert_eq!(session.balance(), dec(3000));
    }

    #[test]
    fn rejections_never_mutate_balance() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Savings, dec(1500), 0).unwrap();

        for _ in 0..5 {
            assert!(session.withdraw(dec(600)).is_err());
            assert!(session.deposit(dec(-1)).is_err());
            assert_eq!(session.balance(), dec(1500));
        }
    }

    #[test]
    fn current_deposit_below_minimum_advises() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Current, dec(4000), 0).unwrap();

        let receipt = session.transact(TxKind::Deposit, dec(500)).unwrap();
        assert_eq!(receipt.penalty, Some(dec(200)));
        assert_eq!(receipt.balance, dec(4300));
        assert!(receipt.below_minimum);
    }

    #[test]
    fn current_deposit_reaching_minimum_no_advisory() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Current, dec(4000), 0).unwrap();

        let receipt = session.transact(TxKind::Deposit, dec(1200)).unwrap();
        assert_eq!(receipt.balance, dec(5000));
        assert!(!receipt.below_minimum);
    }

    #[test]
    fn only_one_transaction_per_session() {
        let config = AtmConfig::default();
        let mut session = Session::open(&config, AccountType::Salary, dec(100), 0).unwrap();

        assert!(session.deposit(dec(50)).is_ok());
        assert_eq!(session.deposit(dec(50)), Err(AtmError::TransactionCompleted));
        assert_eq!(session.withdraw(dec(10)), Err(AtmError::TransactionCompleted));
        assert_eq!(session.balance(), dec(150));
    }
}
