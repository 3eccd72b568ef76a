//! Interactive console surface. Generic over input/output so the
//! integration test can script a whole session against in-memory buffers.
//!
//! All domain failures are rendered here through the error types' own
//! `Display` messages; the core modules never print anything.

use std::io::{BufRead, Write};

use anyhow::Result;
use rust_decimal::Decimal;
use tracing::info;

use crate::account::{BankAccount, CheckingAccount};
use crate::client::Client;
use crate::directory::{Directory, DirectoryError, in_memory::InMemoryDirectory};
use crate::transaction::Transaction;
use menu::{MENU, MenuOption};

pub mod menu;

pub struct Service<'w, R, W: 'w> {
    pub input: R,
    pub output: &'w mut W,
}

impl<'w, R, W> Service<'w, R, W>
where
    R: BufRead,
    W: Write + 'w,
{
    pub fn run(mut self) -> Result<()> {
        let mut directory = InMemoryDirectory::default();

        loop {
            write!(self.output, "{MENU}")?;
            self.output.flush()?;
            let Some(choice) = self.read_line()? else {
                break;
            };
            match MenuOption::parse(&choice) {
                Some(MenuOption::Deposit) => self.deposit(&mut directory)?,
                Some(MenuOption::Withdraw) => self.withdraw(&mut directory)?,
                Some(MenuOption::Statement) => self.statement(&directory)?,
                Some(MenuOption::NewAccount) => self.new_account(&mut directory)?,
                Some(MenuOption::ListAccounts) => self.list_accounts(&directory)?,
                Some(MenuOption::NewClient) => self.new_client(&mut directory)?,
                Some(MenuOption::Quit) => break,
                None => writeln!(self.output, "invalid option")?,
            }
        }
        Ok(())
    }

    /// `None` means the reader hit end of input, which ends the session
    /// like `q` does.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_owned()))
    }

    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;
        self.read_line()
    }

    fn deposit(&mut self, directory: &mut InMemoryDirectory) -> Result<()> {
        info!(operation = "deposit", "operation invoked");
        self.transact(directory, Transaction::Deposit, "deposit completed")
    }

    fn withdraw(&mut self, directory: &mut InMemoryDirectory) -> Result<()> {
        info!(operation = "withdraw", "operation invoked");
        self.transact(directory, Transaction::Withdrawal, "withdrawal completed")
    }

    /// Shared flow of the two transaction operations: the amount is only
    /// asked for once the client is known, and parsing happens here so the
    /// core only ever sees valid decimals.
    fn transact(
        &mut self,
        directory: &mut InMemoryDirectory,
        make: fn(Decimal) -> Transaction,
        done: &str,
    ) -> Result<()> {
        let Some(tax_id) = self.prompt("Tax id")? else {
            return Ok(());
        };
        if directory.find_client_by_tax_id(&tax_id).is_none() {
            writeln!(self.output, "{}", DirectoryError::ClientNotFound)?;
            return Ok(());
        }
        let Some(raw) = self.prompt("Amount")? else {
            return Ok(());
        };
        let Ok(amount) = raw.parse::<Decimal>() else {
            writeln!(self.output, "invalid amount")?;
            return Ok(());
        };
        match directory.execute(&tax_id, make(amount)) {
            Ok(()) => writeln!(self.output, "{done}")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn statement(&mut self, directory: &InMemoryDirectory) -> Result<()> {
        info!(operation = "statement", "operation invoked");
        let Some(tax_id) = self.prompt("Tax id")? else {
            return Ok(());
        };
        match directory.primary_account(&tax_id) {
            Ok(account) => {
                for entry in account.history().iter() {
                    writeln!(
                        self.output,
                        "{}  {}  {:.2}",
                        entry.formatted_timestamp(),
                        entry.kind(),
                        entry.amount()
                    )?;
                }
                writeln!(self.output, "Balance: {:.2}", account.balance())?;
            }
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }

    fn new_account(&mut self, directory: &mut InMemoryDirectory) -> Result<()> {
        info!(operation = "new_account", "operation invoked");
        let Some(tax_id) = self.prompt("Owner tax id")? else {
            return Ok(());
        };
        if directory.find_client_by_tax_id(&tax_id).is_none() {
            writeln!(self.output, "{}", DirectoryError::ClientNotFound)?;
            return Ok(());
        }
        let number = directory.next_account_number();
        directory.register_account(CheckingAccount::new(number, tax_id.clone()));
        if let Err(err) = directory.link_account_to_client(&tax_id, number) {
            writeln!(self.output, "{err}")?;
            return Ok(());
        }
        writeln!(self.output, "account created")?;
        Ok(())
    }

    fn list_accounts(&mut self, directory: &InMemoryDirectory) -> Result<()> {
        info!(operation = "list_accounts", "operation invoked");
        for account in directory.accounts() {
            let owner = directory
                .find_client_by_tax_id(account.owner())
                .map_or("unknown", Client::name);
            writeln!(
                self.output,
                "{}  {:>4}  {}  {:.2}",
                account.branch_code(),
                account.number(),
                owner,
                account.balance()
            )?;
        }
        Ok(())
    }

    fn new_client(&mut self, directory: &mut InMemoryDirectory) -> Result<()> {
        info!(operation = "new_client", "operation invoked");
        let Some(name) = self.prompt("Name")? else {
            return Ok(());
        };
        let Some(birth_date) = self.prompt("Birth date (dd-mm-yyyy)")? else {
            return Ok(());
        };
        let Some(address) = self.prompt("Address")? else {
            return Ok(());
        };
        let Some(tax_id) = self.prompt("Tax id")? else {
            return Ok(());
        };
        match directory.register_client(Client::new(name, birth_date, tax_id, address)) {
            Ok(()) => writeln!(self.output, "client created")?,
            Err(err) => writeln!(self.output, "{err}")?,
        }
        Ok(())
    }
}
