use climate_stats::{ClimateError, ClimateStats, Settings};

#[tokio::main]
async fn main() -> Result<(), ClimateError> {
    // Set RUST_LOG=info (or debug) to see load and query messages
    env_logger::init();

    let settings = Settings::from_env()?;
    let climate = ClimateStats::from_settings(&settings).await?;

    let stations = climate.stations().list().await?;
    let ids: Vec<String> = stations.iter().map(|s| s.id.clone()).collect();
    println!("{} stations: {:?}", stations.len(), ids);

    let analytics = climate
        .analytics()
        .stations(&ids)
        .year_from(1960)
        .year_to(2019)
        .call()
        .await?;

    println!(
        "Period {}-{}",
        analytics.year_range.0, analytics.year_range.1
    );
    for s in &analytics.stations {
        println!(
            "{:<20} mean {:>6.2}°C  std {:>5.2}  hottest {} ({:.2}°C)  coldest {} ({:.2}°C)  coverage {}%",
            s.station_name,
            s.mean_temp,
            s.std_temp,
            s.hottest_year,
            s.hottest_year_temp,
            s.coldest_year,
            s.coldest_year_temp,
            s.data_coverage
        );
    }

    Ok(())
}
