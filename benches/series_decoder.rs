use criterion::{black_box, criterion_group, criterion_main, Criterion};
use open_meteo::series::body::parse_forecast_body;
use open_meteo::series::decoder::{decode_group_str, HOURLY};
use open_meteo::{Location, OpenMeteo};
use std::fmt::Write;
use std::time::Duration;

const METRICS: [&str; 5] = [
    "temperature_2m",
    "relative_humidity_2m",
    "precipitation",
    "wind_speed_10m",
    "cloud_cover",
];

/// One year of hourly samples for every metric in `METRICS`.
fn hourly_group(hours: usize) -> String {
    let start = chrono::NaiveDate::from_ymd_opt(2023, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let mut json = String::from("{\"time\":[");
    for h in 0..hours {
        let t = start + chrono::Duration::hours(h as i64);
        if h > 0 {
            json.push(',');
        }
        write!(json, "\"{}\"", t.format("%Y-%m-%dT%H:%M")).unwrap();
    }
    json.push(']');
    for (m, name) in METRICS.iter().enumerate() {
        write!(json, ",\"{name}\":[").unwrap();
        for h in 0..hours {
            if h > 0 {
                json.push(',');
            }
            if h % 97 == 0 {
                json.push_str("null");
            } else {
                write!(json, "{:.1}", (h * (m + 1)) as f64 / 10.0).unwrap();
            }
        }
        json.push(']');
    }
    json.push('}');
    json
}

fn bench_decoding(c: &mut Criterion) {
    let group = hourly_group(8760);
    let body = format!(
        "{{\"latitude\":52.52,\"longitude\":13.41,\"timezone\":\"GMT\",\"hourly\":{group}}}"
    );

    c.bench_function("decode_hourly_group", |b| {
        b.iter(|| decode_group_str(&HOURLY, black_box(&group)))
    });
    c.bench_function("parse_forecast_body", |b| {
        b.iter(|| parse_forecast_body(black_box(body.as_bytes())))
    });
}

fn bench_cached_get(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let client = OpenMeteo::builder()
        .base_url("http://127.0.0.1:9/v1/forecast")
        .cache_ttl(Duration::from_secs(3600))
        .build()
        .unwrap();
    let location = Location::new(52.52, 13.41);
    let key = format!(
        "http://127.0.0.1:9/v1/forecast?latitude={:.6}&longitude={:.6}&current_weather=true",
        location.latitude(),
        location.longitude()
    );
    client
        .cache()
        .put(key, hourly_group(24).into_bytes(), Duration::from_secs(3600));

    c.bench_function("cached_get", |b| {
        b.to_async(&runtime)
            .iter(|| async { client.get().location(location).call().await.unwrap() })
    });
}

criterion_group!(benches, bench_decoding, bench_cached_get);
criterion_main!(benches);
