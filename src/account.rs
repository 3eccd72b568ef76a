use rust_decimal::Decimal;
use thiserror::Error;

use crate::client::TaxId;
use crate::history::History;

pub type AccountNumber = u32;

/// The only branch this ledger serves.
pub const BRANCH_CODE: &str = "0001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AccountError {
    #[error("invalid amount")]
    InvalidAmount,
    #[error("insufficient balance")]
    InsufficientBalance,
    #[error("exceeds withdrawal limit")]
    ExceedsWithdrawalLimit,
    #[error("daily withdrawal limit exceeded")]
    DailyWithdrawalLimitExceeded,
}

/// Mutating interface shared by the base account rules and the checking
/// specialization. `deposit` and `withdraw` validate and move the balance
/// only; recording the movement in the history is the transaction's job.
pub trait BankAccount {
    fn balance(&self) -> Decimal;
    fn history(&self) -> &History;
    fn history_mut(&mut self) -> &mut History;
    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError>;
    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError>;
}

/// Base account: a balance that never goes negative, its owner's tax id
/// and the append-only history of completed movements.
#[derive(Debug)]
pub struct Account {
    number: AccountNumber,
    balance: Decimal,
    owner: TaxId,
    history: History,
}

impl Account {
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self {
            number,
            balance: Decimal::ZERO,
            owner,
            history: History::default(),
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn branch_code(&self) -> &'static str {
        BRANCH_CODE
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }
}

impl BankAccount for Account {
    fn balance(&self) -> Decimal {
        self.balance
    }

    fn history(&self) -> &History {
        &self.history
    }

    fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        self.balance += amount;
        Ok(())
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount <= Decimal::ZERO {
            return Err(AccountError::InvalidAmount);
        }
        if amount > self.balance {
            return Err(AccountError::InsufficientBalance);
        }
        self.balance -= amount;
        Ok(())
    }
}

/// Checking account: the base rules plus a per-transaction withdrawal
/// limit and a withdrawal-count cap checked before the base validation.
///
/// The cap counts withdrawals over the account's entire history, not the
/// current day, matching the behavior the branch has always had.
#[derive(Debug)]
pub struct CheckingAccount {
    base: Account,
    per_transaction_limit: Decimal,
    daily_withdrawal_cap: usize,
}

impl CheckingAccount {
    pub fn new(number: AccountNumber, owner: TaxId) -> Self {
        Self::with_limits(number, owner, Decimal::from(500), 3)
    }

    pub fn with_limits(
        number: AccountNumber,
        owner: TaxId,
        per_transaction_limit: Decimal,
        daily_withdrawal_cap: usize,
    ) -> Self {
        Self {
            base: Account::new(number, owner),
            per_transaction_limit,
            daily_withdrawal_cap,
        }
    }

    pub fn number(&self) -> AccountNumber {
        self.base.number()
    }

    pub fn branch_code(&self) -> &'static str {
        self.base.branch_code()
    }

    pub fn owner(&self) -> &str {
        self.base.owner()
    }

    pub fn per_transaction_limit(&self) -> Decimal {
        self.per_transaction_limit
    }

    pub fn daily_withdrawal_cap(&self) -> usize {
        self.daily_withdrawal_cap
    }
}

impl BankAccount for CheckingAccount {
    fn balance(&self) -> Decimal {
        self.base.balance()
    }

    fn history(&self) -> &History {
        self.base.history()
    }

    fn history_mut(&mut self) -> &mut History {
        self.base.history_mut()
    }

    fn deposit(&mut self, amount: Decimal) -> Result<(), AccountError> {
        self.base.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), AccountError> {
        if amount > self.per_transaction_limit {
            return Err(AccountError::ExceedsWithdrawalLimit);
        }
        if self.base.history().withdrawal_count() >= self.daily_withdrawal_cap {
            return Err(AccountError::DailyWithdrawalLimitExceeded);
        }
        self.base.withdraw(amount)
    }
}
