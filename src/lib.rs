/// Customer identity and the ordered list of accounts a customer owns.
pub mod client;

/// Append-only per-account transaction log, with restartable statement
/// iteration and a same-UTC-day filter.
pub mod history;

/// Balance rules for the base account, plus the checking specialization
/// with its per-transaction limit and withdrawal-count cap.
pub mod account;

/// Deposit/withdrawal transactions. A transaction mutates an account and,
/// only on success, records itself in the account's history.
pub mod transaction;

/// Branch registry interface, plus "in memory" implementation.
/// Resolves clients by tax id and accounts by number, hands out account
/// numbers, and executes transactions against a client's primary account.
pub mod directory;

/// Ideally, this module would live in its own crate, as a way to
/// bootstrap the core logic within the binary. However, the integration
/// test drives it too, so it lives here.
pub mod bin_utils;
