use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser, Debug)]
#[command(name = "takehome", version, author, about = "Calculate UK take-home pay")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Income tax, NI, student loan and take-home pay for one salary
    Calculate(cmd::calculate::CalculateCommand),
    /// Tax saved by a voluntary pension contribution
    Savings(cmd::savings::SavingsCommand),
    /// Evaluate a range of salaries
    Sweep(cmd::sweep::SweepCommand),
    /// Print the constants table as JSON
    Constants(cmd::constants::ConstantsCommand),
    /// Print JSON Schema for input files
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    match Cli::parse().command {
        Command::Calculate(cmd) => cmd.exec(),
        Command::Savings(cmd) => cmd.exec(),
        Command::Sweep(cmd) => cmd.exec(),
        Command::Constants(cmd) => cmd.exec(),
        Command::Schema(cmd) => cmd.exec(),
    }
}
