use crate::account::AccountNumber;

/// National taxpayer number, the unique key for a client.
pub type TaxId = String;

/// A registered customer of the branch.
///
/// The client only keeps the numbers of the accounts it owns; the account
/// entities themselves live in the directory. The first number in the list
/// is the client's primary account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    name: String,
    birth_date: String,
    tax_id: TaxId,
    address: String,
    accounts: Vec<AccountNumber>,
}

impl Client {
    pub fn new(name: String, birth_date: String, tax_id: TaxId, address: String) -> Self {
        Self {
            name,
            birth_date,
            tax_id,
            address,
            accounts: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form "dd-mm-yyyy".
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    pub fn tax_id(&self) -> &str {
        &self.tax_id
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn accounts(&self) -> &[AccountNumber] {
        &self.accounts
    }

    pub fn primary_account(&self) -> Option<AccountNumber> {
        self.accounts.first().copied()
    }

    pub(crate) fn add_account(&mut self, number: AccountNumber) {
        self.accounts.push(number);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> Client {
        Client::new(
            "Joana Lima".to_owned(),
            "02-04-1991".to_owned(),
            "111".to_owned(),
            "Rua A, 123".to_owned(),
        )
    }

    #[test]
    fn new_client_owns_no_accounts() {
        let client = client();
        assert!(client.accounts().is_empty());
        assert_eq!(client.primary_account(), None);
    }

    #[test]
    fn primary_account_is_the_first_linked() {
        let mut client = client();
        client.add_account(7);
        client.add_account(9);
        assert_eq!(client.primary_account(), Some(7));
        assert_eq!(client.accounts(), &[7, 9]);
    }
}
