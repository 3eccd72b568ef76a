use thiserror::Error;

use crate::account::{AccountError, AccountNumber, CheckingAccount};
use crate::client::Client;
use crate::transaction::Transaction;

pub mod in_memory;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DirectoryError {
    #[error("client not found")]
    ClientNotFound,
    #[error("client has no account")]
    ClientHasNoAccount,
    #[error("client with this tax id already exists")]
    DuplicateTaxId,
}

/// Everything an interactive operation can fail with, lookup or business
/// rule. Both sides render their own message.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error(transparent)]
    Directory(#[from] DirectoryError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// Lookup and registration surface of the branch registry.
pub trait Directory {
    fn find_client_by_tax_id(&self, tax_id: &str) -> Option<&Client>;

    /// First account in the client's list.
    fn primary_account_of(&self, client: &Client) -> Option<AccountNumber>;

    fn account(&self, number: AccountNumber) -> Option<&CheckingAccount>;

    fn account_mut(&mut self, number: AccountNumber) -> Option<&mut CheckingAccount>;

    /// Branch-wide, monotonically increasing.
    fn next_account_number(&mut self) -> AccountNumber;

    /// Rejects a tax id that is already registered; the directory is left
    /// untouched in that case.
    fn register_client(&mut self, client: Client) -> Result<(), DirectoryError>;

    fn register_account(&mut self, account: CheckingAccount);

    fn link_account_to_client(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
    ) -> Result<(), DirectoryError>;

    /// Resolves the account a statement for `tax_id` reads from.
    fn primary_account(&self, tax_id: &str) -> Result<&CheckingAccount, DirectoryError> {
        let client = self
            .find_client_by_tax_id(tax_id)
            .ok_or(DirectoryError::ClientNotFound)?;
        let number = self
            .primary_account_of(client)
            .ok_or(DirectoryError::ClientHasNoAccount)?;
        self.account(number).ok_or(DirectoryError::ClientHasNoAccount)
    }

    fn primary_account_mut(
        &mut self,
        tax_id: &str,
    ) -> Result<&mut CheckingAccount, DirectoryError> {
        let client = self
            .find_client_by_tax_id(tax_id)
            .ok_or(DirectoryError::ClientNotFound)?;
        let number = self
            .primary_account_of(client)
            .ok_or(DirectoryError::ClientHasNoAccount)?;
        self.account_mut(number)
            .ok_or(DirectoryError::ClientHasNoAccount)
    }

    /// Applies `transaction` to the primary account of `tax_id`.
    fn execute(&mut self, tax_id: &str, transaction: Transaction) -> Result<(), OperationError> {
        let account = self.primary_account_mut(tax_id)?;
        transaction.apply(account)?;
        Ok(())
    }
}
