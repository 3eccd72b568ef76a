use rust_decimal::Decimal;

use crate::account::{AccountError, BankAccount};
use crate::history::{EntryKind, HistoryEntry};

/// One monetary movement and the rule for applying it to an account.
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transaction {
    Deposit(Decimal),
    Withdrawal(Decimal),
}

impl Transaction {
    pub fn amount(&self) -> Decimal {
        match self {
            Self::Deposit(amount) | Self::Withdrawal(amount) => *amount,
        }
    }

    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Deposit(_) => EntryKind::Deposit,
            Self::Withdrawal(_) => EntryKind::Withdrawal,
        }
    }

    /// Runs the matching account mutator and, only when it succeeds,
    /// records the movement in the account's history. On failure nothing
    /// changes and nothing is recorded.
    pub fn apply<A: BankAccount>(&self, account: &mut A) -> Result<(), AccountError> {
        match self {
            Self::Deposit(amount) => account.deposit(*amount)?,
            Self::Withdrawal(amount) => account.withdraw(*amount)?,
        }
        account
            .history_mut()
            .record(HistoryEntry::new(self.kind(), self.amount()));
        Ok(())
    }
}
