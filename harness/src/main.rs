//! Driver binary.
//!
//! Hosts the token program on an in-process bank, runs the fixed
//! scenario once, and exits 0 on success. Any step failure is printed
//! and the process exits 1; the run is all-or-nothing.

use std::process;

use log::{error, info};
use solana_program_test::{processor, ProgramTest};
use spl_token::processor::Processor;
use token_proxy_harness::{driver, HarnessError, TokenClient};

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    match run().await {
        Ok(()) => process::exit(0),
        Err(err) => {
            error!("{err}");
            process::exit(1);
        }
    }
}

async fn run() -> Result<(), HarnessError> {
    let program_test = ProgramTest::new("spl_token", spl_token::id(), processor!(Processor::process));
    let (banks, payer, _recent_blockhash) = program_test.start().await;
    let mut client = TokenClient::new(banks, payer);

    info!("starting proxy flow");
    let outcome = driver::run(&mut client).await?;
    info!(
        "done: from={} to={} supply={} authority={}",
        outcome.from_balance, outcome.to_balance, outcome.supply, outcome.mint_authority
    );

    Ok(())
}
