//! Kodegen Bundler Unity - headless Unity build runner.
//!
//! This binary finds the Unity editor matching a project's pinned version,
//! runs it in batch mode and prints the resulting build log.

use kodegen_bundler_unity::cli;
use std::process;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Initialize logging
    env_logger::init();

    let exit_code = cli::run().await;

    process::exit(exit_code);
}
