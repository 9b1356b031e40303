use crate::lookup::{run_geo_lookup, run_representatives_lookup, GeoArgs, RepresentativesArgs};
use crate::server;
use civic_connect::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Civic Connect",
    about = "Serve and query civic engagement data from the command line",
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
    /// Resolve place and jurisdiction metadata for a ZIP code
    Geo(GeoArgs),
    /// Resolve elected representatives for a ZIP code or street address
    Representatives(RepresentativesArgs),
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
        Command::Geo(args) => run_geo_lookup(args),
        Command::Representatives(args) => run_representatives_lookup(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_defaults_to_serve() {
        let cli = Cli::try_parse_from(["civic-connect-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn representatives_accepts_zip_and_address() {
        let cli = Cli::try_parse_from([
            "civic-connect-api",
            "representatives",
            "--zip",
            "77002",
            "--address",
            "901 Bagby St",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Representatives(args)) => {
                assert_eq!(args.zip.as_deref(), Some("77002"));
                assert_eq!(args.address.as_deref(), Some("901 Bagby St"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["civic-connect-api", "serve", "--port", "9090"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => assert_eq!(args.port, Some(9090)),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
