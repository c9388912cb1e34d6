//! Per-account-category transaction rules
//!
//! The rules are plain data: each [`AccountType`] maps to one [`AccountPolicy`]
//! inside a [`PolicyTable`]. Adding a rule to a category is a matter of
//! filling in a field, not of adding a branch to the session logic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// **The account category chosen for the session**
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum AccountType {
    Savings,
    Current,
    Salary,
}

impl AccountType {
    /// All categories, in menu order
    pub const ALL: [AccountType; 3] = [
        AccountType::Savings,
        AccountType::Current,
        AccountType::Salary,
    ];

    /// Maps a menu number (1-based) to a category.
    pub fn from_choice(choice: i64) -> Option<Self> {
        match choice {
            1 => Some(AccountType::Savings),
            2 => Some(AccountType::Current),
            3 => Some(AccountType::Salary),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            AccountType::Savings => "Savings",
            AccountType::Current => "Current",
            AccountType::Salary => "Salary",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// **Transaction rules of a single account category**
///
/// Every rule is optional; a category without any is unrestricted.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct AccountPolicy {
    /// Floor that a withdrawal must not breach
    pub minimum_balance: Option<Decimal>,
    /// Flat charge at session start when the balance is below `minimum_balance`
    pub low_balance_penalty: Option<Decimal>,
    /// Per-transaction withdrawal ceiling
    pub withdrawal_cap: Option<Decimal>,
}

impl AccountPolicy {
    /// The penalty owed for holding `balance`, if any.
    ///
    /// Requires both a minimum balance and a penalty to be configured.
    pub fn penalty_for(&self, balance: Decimal) -> Option<Decimal> {
        match (self.minimum_balance, self.low_balance_penalty) {
            (Some(minimum), Some(penalty)) if balance < minimum => Some(penalty),
            _ => None,
        }
    }

    /// Whether a deposit that leaves `balance` behind deserves the below-minimum note.
    ///
    /// Only categories that charge a low-balance penalty get the note.
    pub fn advises_below_minimum(&self, balance: Decimal) -> bool {
        self.low_balance_penalty.is_some()
            && self.minimum_balance.is_some_and(|minimum| balance < minimum)
    }
}

/// **The lookup table from account category to its policy**
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct PolicyTable {
    pub savings: AccountPolicy,
    pub current: AccountPolicy,
    pub salary: AccountPolicy,
}

impl PolicyTable {
    pub fn policy(&self, account: AccountType) -> &AccountPolicy {
        match account {
            AccountType::Savings => &self.savings,
            AccountType::Current => &self.current,
            AccountType::Salary => &self.salary,
        }
    }
}

impl Default for PolicyTable {
    fn default() -> Self {
        PolicyTable {
            savings: AccountPolicy {
                minimum_balance: Some(Decimal::from(1000)),
                ..AccountPolicy::default()
            },
            current: AccountPolicy {
                minimum_balance: Some(Decimal::from(5000)),
                low_balance_penalty: Some(Decimal::from(200)),
                ..AccountPolicy::default()
            },
            salary: AccountPolicy {
                withdrawal_cap: Some(Decimal::from(25000)),
                ..AccountPolicy::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_choice() {
        assert_eq!(AccountType::from_choice(1), Some(AccountType::Savings));
        assert_eq!(AccountType::from_choice(2), Some(AccountType::Current));
        assert_eq!(AccountType::from_choice(3), Some(AccountType::Salary));
        assert_eq!(AccountType::from_choice(0), None);
        assert_eq!(AccountType::from_choice(4), None);
        assert_eq!(AccountType::from_choice(-1), None);
    }

    #[test]
    fn test_all_in_menu_order() {
        for (i, account) in AccountType::ALL.iter().enumerate() {
            assert_eq!(AccountType::from_choice(i as i64 + 1), Some(*account));
        }
    }

    #[test]
    fn test_default_table() {
        let table = PolicyTable::default();

        let savings = table.policy(AccountType::Savings);
        assert_eq!(savings.minimum_balance, Some(Decimal::from(1000)));
        assert_eq!(savings.low_balance_penalty, None);
        assert_eq!(savings.withdrawal_cap, None);

        let current = table.policy(AccountType::Current);
        assert_eq!(current.minimum_balance, Some(Decimal::from(5000)));
        assert_eq!(current.low_balance_penalty, Some(Decimal::from(200)));

        let salary = table.policy(AccountType::Salary);
        assert_eq!(salary.minimum_balance, None);
        assert_eq!(salary.withdrawal_cap, Some(Decimal::from(25000)));
    }

    #[test]
    fn test_penalty_only_below_minimum() {
        let table = PolicyTable::default();
        let current = table.policy(AccountType::Current);

        assert_eq!(current.penalty_for(Decimal::from(4000)), Some(Decimal::from(200)));
        assert_eq!(current.penalty_for(Decimal::from(4999)), Some(Decimal::from(200)));
        assert_eq!(current.penalty_for(Decimal::from(5000)), None);

        // Savings has a minimum but no penalty.
        let savings = table.policy(AccountType::Savings);
        assert_eq!(savings.penalty_for(Decimal::from(10)), None);
    }

    #[test]
    fn test_advisory() {
        let table = PolicyTable::default();
        assert!(table
            .policy(AccountType::Current)
            .advises_below_minimum(Decimal::from(4300)));
        assert!(!table
            .policy(AccountType::Current)
            .advises_below_minimum(Decimal::from(5000)));
        assert!(!table
            .policy(AccountType::Savings)
            .advises_below_minimum(Decimal::from(500)));
        assert!(!table
            .policy(AccountType::Salary)
            .advises_below_minimum(Decimal::ZERO));
    }
}
