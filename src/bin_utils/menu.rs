/// Keys of the interactive command surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Deposit,
    Withdraw,
    Statement,
    NewAccount,
    ListAccounts,
    NewClient,
    Quit,
}

impl MenuOption {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "d" => Some(Self::Deposit),
            "s" => Some(Self::Withdraw),
            "e" => Some(Self::Statement),
            "nc" => Some(Self::NewAccount),
            "lc" => Some(Self::ListAccounts),
            "nu" => Some(Self::NewClient),
            "q" => Some(Self::Quit),
            _ => None,
        }
    }
}

pub const MENU: &str = "\
[d]  deposit
[s]  withdraw
[e]  statement
[nc] new account
[lc] list accounts
[nu] new client
[q]  quit
=> ";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_parse() {
        assert_eq!(MenuOption::parse("d"), Some(MenuOption::Deposit));
        assert_eq!(MenuOption::parse("s"), Some(MenuOption::Withdraw));
        assert_eq!(MenuOption::parse("e"), Some(MenuOption::Statement));
        assert_eq!(MenuOption::parse("nc"), Some(MenuOption::NewAccount));
        assert_eq!(MenuOption::parse("lc"), Some(MenuOption::ListAccounts));
        assert_eq!(MenuOption::parse("nu"), Some(MenuOption::NewClient));
        assert_eq!(MenuOption::parse("q"), Some(MenuOption::Quit));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(MenuOption::parse(" d \n"), Some(MenuOption::Deposit));
    }

    #[test]
    fn unknown_keys_do_not_parse() {
        assert_eq!(MenuOption::parse("x"), None);
        assert_eq!(MenuOption::parse(""), None);
        assert_eq!(MenuOption::parse("dd"), None);
    }
}
