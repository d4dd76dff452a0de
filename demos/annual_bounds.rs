use climate_stats::api::parse_station_ids;
use climate_stats::{ClimateError, ClimateStats, Settings};
use std::env;

/// Usage: cargo run --example annual_bounds -- 66062,86071 [year_from] [year_to]
#[tokio::main]
async fn main() -> Result<(), ClimateError> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let ids = parse_station_ids(&args.next().unwrap_or_else(|| "66062".to_string()));
    let year_from = args.next().and_then(|y| y.parse().ok());
    let year_to = args.next().and_then(|y| y.parse().ok());

    let climate = ClimateStats::from_settings(&Settings::from_env()?).await?;
    let result = climate
        .annual()
        .stations(&ids)
        .maybe_year_from(year_from)
        .maybe_year_to(year_to)
        .call()
        .await;

    let annual = match result {
        Ok(annual) => annual,
        Err(e) => {
            // Shape an HTTP layer would return.
            eprintln!(
                "{} {}",
                e.status_code(),
                serde_json::to_string_pretty(&e.to_body()).unwrap_or_default()
            );
            return Err(e);
        }
    };

    for station in &annual.stations {
        println!("{} ({})", station.station_name, station.station_id);
        for p in &station.data {
            println!(
                "  {}  {:>6.2}  [{:>6.2}, {:>6.2}]  min {:>6.2}  max {:>6.2}",
                p.year, p.mean, p.lower_bound, p.upper_bound, p.min_temp, p.max_temp
            );
        }
    }
    println!("longest series: {} years", annual.total_years);
    Ok(())
}
