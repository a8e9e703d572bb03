use algo_toolkit::app::{run_app, Cli};
use clap::Parser;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run_app(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
