use crate::demo::{run_vehicle_report, VehicleReportArgs};
use crate::server;
use carfacts::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "UK Vehicle Lookup",
    about = "Run the vehicle lookup service or render reports from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Vehicle reference lookups
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand,
    },
}

#[derive(Subcommand, Debug)]
enum VehicleCommand {
    /// Render the full reference report for one make and model
    Report(VehicleReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Vehicle {
            command: VehicleCommand::Report(args),
        } => run_vehicle_report(args),
    }
}
