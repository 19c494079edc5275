use clap::Parser;
use wealth_audit::cli::{self, Cli};

#[tokio::main]
async fn main() {
    if let Err(err) = cli::run(Cli::parse()).await {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}
