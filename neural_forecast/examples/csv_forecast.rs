use chrono::NaiveDate;
use neural_forecast::synthetic;
use neural_forecast::{CsvPriceSource, NeuralPredictor, PriceSource, TrainingConfig};
use std::io::Write;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Neural Forecast: CSV Source Example");
    println!("===================================\n");

    // Write a small per-symbol CSV so the example is self-contained; a real
    // host would point the source at its own data directory
    let dir = std::env::temp_dir().join("neural_forecast_example");
    std::fs::create_dir_all(&dir)?;
    write_sample_csv(&dir.join("DEMO.csv"))?;

    let source = CsvPriceSource::new(&dir);
    let history = source.fetch_price_series("DEMO")?;
    println!("Loaded {} points for DEMO from {:?}\n", history.len(), dir);

    let predictor = NeuralPredictor::new(TrainingConfig {
        max_epochs: 500,
        seed: Some(7),
        ..TrainingConfig::default()
    })?;
    let model = predictor.train(&history)?;

    let result = model.forecast(&history, 5)?;
    println!("{}", result.to_json()?);

    Ok(())
}

/// Generate a synthetic history and dump it in the source's CSV layout.
fn write_sample_csv(path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let history = synthetic::noisy_series(start, 60, 80.0, 0.4, 0.9, 11)?;

    let mut file = std::fs::File::create(path)?;
    writeln!(file, "date,close,open,high,low,volume")?;
    for point in &history {
        writeln!(
            file,
            "{},{},,,,{}",
            point.date,
            point.price,
            point.volume.unwrap_or(0.0)
        )?;
    }
    Ok(())
}
