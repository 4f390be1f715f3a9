mod budget;
mod models;
mod run;
mod store;
mod ui;

use anyhow::Result;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("--help" | "-h" | "help") => {
            print_usage();
            Ok(())
        }
        Some("--version" | "-V" | "version") => {
            println!("timebudget {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(other) => {
            print_usage();
            anyhow::bail!("Unknown argument: {other}");
        }
        None => {
            let mut store = store::Store::new();
            run::as_tui(&mut store)
        }
    }
}

fn print_usage() {
    println!("TimeBudget — monthly time budgeting in the terminal");
    println!();
    println!("Usage: timebudget");
    println!();
    println!("Launches the interactive TUI. State lives in memory for the session;");
    println!("nothing is written to disk.");
    println!();
    println!("Options:");
    println!("  --help, -h       Show this help");
    println!("  --version, -V    Show version");
}
