use chrono::NaiveDate;
use neural_forecast::synthetic;
use neural_forecast::{NeuralPredictor, TrainingConfig};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("Neural Forecast: Basic Forecasting Example");
    println!("==========================================\n");

    // Create sample data: an upward trend with seeded Gaussian noise
    println!("Creating sample data...");
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    let history = synthetic::noisy_series(start, 90, 100.0, 0.6, 1.2, 42)?;
    println!(
        "Sample data created: {} points, {} through {}\n",
        history.len(),
        history.first().unwrap().date,
        history.last().unwrap().date
    );

    // Train with the default architecture, seeded for reproducibility
    println!("Training model...");
    let predictor = NeuralPredictor::new(TrainingConfig {
        seed: Some(42),
        ..TrainingConfig::default()
    })?;
    let model = predictor.train(&history)?;
    println!(
        "Model trained: mse {:.6} after {} epochs\n",
        model.training_error(),
        model.iterations()
    );

    // Forecast a week ahead
    let result = model.forecast(&history, 7)?;

    println!("Current price: {:.2}", result.current_price);
    println!("Confidence:    {:.0}%\n", result.confidence * 100.0);
    println!("Forecast:");
    for (date, price) in result.future_dates.iter().zip(result.future_prices.iter()) {
        println!("  {}: {:.2}", date, price);
    }

    Ok(())
}
