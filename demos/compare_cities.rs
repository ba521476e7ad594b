//! Compares the current weather of a few cities and prints last week's
//! maximum temperatures for each of them.
//!
//! Run with `RUST_LOG=info cargo run --example compare_cities` to see the
//! requests being made.

use chrono::{Duration, Utc};
use futures_util::future::join_all;
use open_meteo::{Location, OpenMeteo, OpenMeteoError, Options};

const CITIES: [(&str, Location); 5] = [
    ("Amsterdam", Location::new(52.3738, 4.8910)),
    ("Berlin", Location::new(52.5200, 13.4050)),
    ("New York", Location::new(40.7128, -74.0060)),
    ("Tokyo", Location::new(35.6762, 139.6503)),
    ("Sydney", Location::new(-33.8688, 151.2093)),
];

#[tokio::main]
async fn main() -> Result<(), OpenMeteoError> {
    env_logger::init();

    let forecast_client = OpenMeteo::new()?;
    let air_client = OpenMeteo::builder()
        .base_url("https://air-quality-api.open-meteo.com/v1/air-quality")
        .build()?;
    let archive_client = OpenMeteo::builder()
        .base_url("https://archive-api.open-meteo.com/v1/archive")
        .build()?;

    // --- Current weather, fetched concurrently ---
    let forecasts = join_all(
        CITIES
            .iter()
            .map(|(_, location)| forecast_client.forecast().location(*location).call()),
    )
    .await;

    let mut ranking = Vec::new();
    for ((name, _), result) in CITIES.iter().zip(forecasts) {
        match result {
            Ok(forecast) => {
                if let Some(current) = forecast.current_weather {
                    ranking.push((*name, current));
                }
            }
            Err(e) => eprintln!("{name}: {e}"),
        }
    }
    ranking.sort_by(|a, b| b.1.temperature.total_cmp(&a.1.temperature));

    println!("--- Warmest to coldest ---");
    for (rank, (name, current)) in ranking.iter().enumerate() {
        let condition = current
            .condition()
            .map(|c| format!("{c:?}"))
            .unwrap_or_else(|| "unknown".to_string());
        println!(
            "{:>2}. {:<10} {:>5.1} °C  wind {:>5.1} km/h  {}",
            rank + 1,
            name,
            current.temperature,
            current.windspeed,
            condition
        );
    }

    // --- Air quality ---
    println!("\n--- Air quality ---");
    for (name, location) in CITIES {
        match air_client.air_quality().location(location).call().await {
            Ok(air) => println!(
                "{name:<10} PM10 {:?}  PM2.5 {:?}  O3 {:?}  NO2 {:?}",
                air.pm10, air.pm2_5, air.o3, air.no2
            ),
            Err(e) => eprintln!("{name}: {e}"),
        }
    }

    // --- Last seven days ---
    let end = Utc::now().date_naive() - Duration::days(2);
    let start = end - Duration::days(6);
    let options = Options::builder()
        .start_date(start.format("%Y-%m-%d").to_string())
        .end_date(end.format("%Y-%m-%d").to_string())
        .daily_metrics(vec!["temperature_2m_max".to_string()])
        .timezone("UTC")
        .build();

    println!("\n--- Daily maximum temperature, {start} to {end} ---");
    for (name, location) in CITIES {
        let history = archive_client
            .historical()
            .location(location)
            .options(&options)
            .call()
            .await?;
        let row: Vec<String> = history
            .daily
            .temperature_2m_max
            .iter()
            .map(|t| if t.is_nan() { "  -  ".to_string() } else { format!("{t:>5.1}") })
            .collect();
        println!("{name:<10} {}", row.join(" "));
    }

    Ok(())
}
