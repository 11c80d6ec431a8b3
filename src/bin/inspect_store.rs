use std::error::Error;
use std::path::PathBuf;

use climate_api::config::DatabaseConfig;
use climate_api::ClimateStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Path to the store file
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("Resources/hawaii.sqlite"));

    println!("Inspecting climate store: {}", path.display());

    let store = ClimateStore::connect(&DatabaseConfig {
        path,
        max_connections: 1,
    })
    .await?;

    println!("\n=== STORE INFORMATION ===");

    let counts = store.counts().await?;
    println!("\nRows:");
    println!("  station     = {}", counts.stations);
    println!("  measurement = {}", counts.measurements);

    let range = store.date_range().await?;
    println!("\nDate range:");
    println!(
        "  {} .. {}",
        range.first.as_deref().unwrap_or("-"),
        range.last.as_deref().unwrap_or("-")
    );

    println!("\nStations:");
    for station in store.station_details().await? {
        println!(
            "  {} {} (lat {:.4}, lon {:.4}, elev {:.1})",
            station.station, station.name, station.latitude, station.longitude, station.elevation
        );
    }

    if let Some(busiest) = store.most_active_station().await? {
        println!("\nMost active station: {}", busiest);
    }

    println!("\nLatest measurements:");
    for m in store.latest_measurements(5).await? {
        println!(
            "  {} {} prcp={} tobs={}",
            m.date,
            m.station,
            m.prcp.map_or("-".to_string(), |v| v.to_string()),
            m.tobs.map_or("-".to_string(), |v| v.to_string())
        );
    }

    store.close().await;
    Ok(())
}
