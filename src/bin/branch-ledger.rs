use std::io::{stderr, stdin, stdout};

use anyhow::Result;
use branch_ledger::bin_utils::Service;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // operation log goes to stderr so it never interleaves with prompts
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(stderr)
        .init();

    let mut output = stdout();
    Service {
        input: stdin().lock(),
        output: &mut output,
    }
    .run()
}
