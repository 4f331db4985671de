use clap::Parser;
use snowbill::cli::{args::Args, commands};
use std::process;

fn main() {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    match commands::run(args) {
        Ok(_stats) => {
            // Success - stats have already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            // Error occurred - print to stderr and exit with error code
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("Snowbill - Snow Service Invoice Generator");
    println!("=========================================");
    println!();
    println!("Turn a customer roster CSV into plowing and sanding invoices for");
    println!("the service dates you choose, with a billing summary report.");
    println!();
    println!("USAGE:");
    println!("    snowbill <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    invoice     Generate invoices for one or more service dates (main command)");
    println!("    summary     Print per-customer totals without writing invoices");
    println!("    validate    Check a roster CSV for malformed columns and missing fields");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Bill a single storm:");
    println!("    snowbill invoice roster.csv 01-15-2025");
    println!();
    println!("    # Bill two dates onto one invoice per customer, with JSON export:");
    println!("    snowbill invoice roster.csv 01-15-2025 01-18-2025 --format both");
    println!();
    println!("    # Preview totals without writing anything:");
    println!("    snowbill summary roster.csv 01-15-2025");
    println!();
    println!("    # Check the roster before the first run of the season:");
    println!("    snowbill validate roster.csv");
    println!();
    println!("For detailed help on any command, use:");
    println!("    snowbill <COMMAND> --help");
}
