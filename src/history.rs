use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// Timestamp rendering used by statements.
pub const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryKind::Deposit => "deposit",
            EntryKind::Withdrawal => "withdrawal",
        })
    }
}

/// One completed movement on an account. Created only as the side effect
/// of a successful transaction application, immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    kind: EntryKind,
    amount: Decimal,
    timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    pub fn new(kind: EntryKind, amount: Decimal) -> Self {
        Self::at(kind, amount, Utc::now())
    }

    pub fn at(kind: EntryKind, amount: Decimal, timestamp: DateTime<Utc>) -> Self {
        Self {
            kind,
            amount,
            timestamp,
        }
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Append-only log of completed transactions for one account.
/// Entries are never mutated or removed once recorded.
#[derive(Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order. Every call starts a fresh traversal,
    /// so a statement can be produced any number of times.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Entries recorded on the current UTC date, insertion order preserved.
    pub fn todays_entries(&self) -> Vec<&HistoryEntry> {
        let today = Utc::now().date_naive();
        self.entries
            .iter()
            .filter(|entry| entry.timestamp.date_naive() == today)
            .collect()
    }

    /// Completed withdrawals over the whole log, not just the current day.
    pub fn withdrawal_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| entry.kind == EntryKind::Withdrawal)
            .count()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
