use std::sync::Arc;

use wayfarer::api::DynMaps;
use wayfarer::config::Config;
use wayfarer::engine::Planner;
use wayfarer::error::Error;
use wayfarer::external::google_maps::GoogleMaps;
use wayfarer::server::serve;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;
    tracing::info!(?config, "loaded configuration");

    let maps = Arc::new(GoogleMaps::new(&config)) as DynMaps;
    let planner = Planner::new(maps);

    serve(planner, config.addr).await
}
