use std::collections::{BTreeMap, HashMap, hash_map::Entry};

use crate::account::{AccountNumber, CheckingAccount};
use crate::client::{Client, TaxId};

use super::{Directory, DirectoryError};

/// Process-lifetime registry. Nothing here survives a restart.
#[derive(Default)]
pub struct InMemoryDirectory {
    clients: HashMap<TaxId, Client>,
    // keyed by account number so listings come out in opening order
    accounts: BTreeMap<AccountNumber, CheckingAccount>,
    last_account_number: AccountNumber,
}

impl InMemoryDirectory {
    /// Accounts in account-number order.
    pub fn accounts(&self) -> impl Iterator<Item = &CheckingAccount> {
        self.accounts.values()
    }
}

impl Directory for InMemoryDirectory {
    fn find_client_by_tax_id(&self, tax_id: &str) -> Option<&Client> {
        self.clients.get(tax_id)
    }

    fn primary_account_of(&self, client: &Client) -> Option<AccountNumber> {
        client.primary_account()
    }

    fn account(&self, number: AccountNumber) -> Option<&CheckingAccount> {
        self.accounts.get(&number)
    }

    fn account_mut(&mut self, number: AccountNumber) -> Option<&mut CheckingAccount> {
        self.accounts.get_mut(&number)
    }

    fn next_account_number(&mut self) -> AccountNumber {
        self.last_account_number += 1;
        self.last_account_number
    }

    fn register_client(&mut self, client: Client) -> Result<(), DirectoryError> {
        match self.clients.entry(client.tax_id().to_owned()) {
            Entry::Occupied(_) => Err(DirectoryError::DuplicateTaxId),
            Entry::Vacant(slot) => {
                slot.insert(client);
                Ok(())
            }
        }
    }

    fn register_account(&mut self, account: CheckingAccount) {
        self.accounts.insert(account.number(), account);
    }

    fn link_account_to_client(
        &mut self,
        tax_id: &str,
        number: AccountNumber,
    ) -> Result<(), DirectoryError> {
        let client = self
            .clients
            .get_mut(tax_id)
            .ok_or(DirectoryError::ClientNotFound)?;
        client.add_account(number);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use crate::account::{AccountError, BankAccount};
    use crate::directory::OperationError;
    use crate::transaction::Transaction;

    use super::*;

    fn client(name: &str, tax_id: &str) -> Client {
        Client::new(
            name.to_owned(),
            "10-10-1980".to_owned(),
            tax_id.to_owned(),
            "Rua A, 123".to_owned(),
        )
    }

    fn directory_with_account(tax_id: &str) -> InMemoryDirectory {
        let mut dir = InMemoryDirectory::default();
        dir.register_client(client("Joana Lima", tax_id)).unwrap();
        let number = dir.next_account_number();
        dir.register_account(CheckingAccount::new(number, tax_id.to_owned()));
        dir.link_account_to_client(tax_id, number).unwrap();
        dir
    }

    #[test]
    fn duplicate_tax_id_is_rejected() {
        let mut dir = InMemoryDirectory::default();
        dir.register_client(client("Joana Lima", "111")).unwrap();
        let err = dir
            .register_client(client("Someone Else", "111"))
            .unwrap_err();
        assert_eq!(err, DirectoryError::DuplicateTaxId);

        // the original registration is untouched
        let found = dir.find_client_by_tax_id("111").unwrap();
        assert_eq!(found.name(), "Joana Lima");
    }

    #[test]
    fn account_numbers_increase_monotonically() {
        let mut dir = InMemoryDirectory::default();
        assert_eq!(dir.next_account_number(), 1);
        assert_eq!(dir.next_account_number(), 2);
        assert_eq!(dir.next_account_number(), 3);
    }

    #[test]
    fn resolution_failures() {
        let mut dir = InMemoryDirectory::default();
        assert_eq!(
            dir.primary_account_mut("999").unwrap_err(),
            DirectoryError::ClientNotFound
        );

        dir.register_client(client("Joana Lima", "111")).unwrap();
        assert_eq!(
            dir.primary_account_mut("111").unwrap_err(),
            DirectoryError::ClientHasNoAccount
        );
    }

    #[test]
    fn execute_applies_to_the_primary_account() {
        let mut dir = directory_with_account("111");
        dir.execute("111", Transaction::Deposit(Decimal::from(100)))
            .unwrap();
        dir.execute("111", Transaction::Withdrawal(Decimal::from(30)))
            .unwrap();

        let acc = dir.primary_account("111").unwrap();
        assert_eq!(acc.balance(), Decimal::from(70));
        assert_eq!(acc.history().len(), 2);
    }

    #[test]
    fn execute_surfaces_both_error_kinds() {
        let mut dir = directory_with_account("111");
        let err = dir
            .execute("999", Transaction::Deposit(Decimal::from(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            OperationError::Directory(DirectoryError::ClientNotFound)
        ));

        let err = dir
            .execute("111", Transaction::Withdrawal(Decimal::from(1)))
            .unwrap_err();
        assert!(matches!(
            err,
            OperationError::Account(AccountError::InsufficientBalance)
        ));
    }

    #[test]
    fn accounts_listing_follows_opening_order() {
        let mut dir = InMemoryDirectory::default();
        for tax_id in ["111", "222"] {
            dir.register_client(client("Owner", tax_id)).unwrap();
            let number = dir.next_account_number();
            dir.register_account(CheckingAccount::new(number, tax_id.to_owned()));
            dir.link_account_to_client(tax_id, number).unwrap();
        }
        let numbers: Vec<_> = dir.accounts().map(CheckingAccount::number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }
}
