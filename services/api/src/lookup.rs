use std::sync::Arc;

use civic_connect::civic::geo;
use civic_connect::civic::representatives::{
    GoogleCivicClient, LocationQuery, RepresentativeResolver,
};
use civic_connect::config::AppConfig;
use civic_connect::error::AppError;
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct GeoArgs {
    /// ZIP code to resolve
    #[arg(long)]
    pub(crate) zip: String,
}

#[derive(Args, Debug, Default)]
pub(crate) struct RepresentativesArgs {
    /// ZIP code; also selects synthetic data when the live source is unavailable
    #[arg(long)]
    pub(crate) zip: Option<String>,
    /// Street address; takes precedence over the ZIP code for live lookups
    #[arg(long)]
    pub(crate) address: Option<String>,
}

pub(crate) fn run_geo_lookup(args: GeoArgs) -> Result<(), AppError> {
    let record = geo::resolve(&args.zip)?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

pub(crate) async fn run_representatives_lookup(args: RepresentativesArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let client = GoogleCivicClient::from_config(&config.civic)?;
    let resolver = RepresentativeResolver::new(client.map(Arc::new), config.civic.timeout);

    let query = LocationQuery {
        zip: args.zip,
        address: args.address,
    };
    let result = resolver.resolve(&query).await?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    if let Some(error) = &result.error {
        eprintln!("served {} data: {}", result.source.label(), error);
    }
    Ok(())
}
