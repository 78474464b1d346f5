//! Model training
//!
//! Drives epoch-wise online SGD over supervised samples built from a price
//! history: each sample pairs a window of normalized prices plus the
//! rescaled indicator set at an index with the normalized price at that
//! index. Training stops early once the epoch mean squared error drops
//! below the configured threshold, and otherwise runs out the epoch budget.

use crate::data::{self, PricePoint};
use crate::error::{ForecastError, Result};
use crate::features::{self, FeatureVector, FEATURE_COUNT};
use crate::network::NeuralNetwork;
use crate::scaling::PriceScaler;
use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Minimum number of supervised samples a history must yield.
const MIN_TRAINING_SAMPLES: usize = 10;

/// How often the epoch loop logs progress.
const LOG_EVERY_EPOCHS: usize = 100;

/// Training hyperparameters.
///
/// Defaults: a 10-price window, three hidden layers of 32/16/8 neurons,
/// learning rate 0.01, up to 2000 epochs with an early-stop threshold of
/// 0.001.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingConfig {
    /// Number of trailing normalized prices fed as direct inputs
    pub window_length: usize,
    /// Widths of the hidden layers, input to output
    pub hidden_layers: Vec<usize>,
    /// Fixed SGD learning rate
    pub learning_rate: f64,
    /// Epoch budget
    pub max_epochs: usize,
    /// Epoch MSE below which training stops early
    pub error_threshold: f64,
    /// Seed for weight initialization and epoch shuffling. `None` draws
    /// from entropy, making training non-reproducible; tests should pin it.
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            window_length: 10,
            hidden_layers: vec![32, 16, 8],
            learning_rate: 0.01,
            max_epochs: 2000,
            error_threshold: 0.001,
            seed: None,
        }
    }
}

impl TrainingConfig {
    fn validate(&self) -> Result<()> {
        if self.window_length == 0 {
            return Err(ForecastError::InvalidParameter(
                "Window length must be greater than zero".to_string(),
            ));
        }
        if self.hidden_layers.iter().any(|&width| width == 0) {
            return Err(ForecastError::InvalidParameter(
                "Hidden layer widths must be greater than zero".to_string(),
            ));
        }
        if !self.learning_rate.is_finite() || self.learning_rate <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Learning rate must be positive and finite".to_string(),
            ));
        }
        if self.max_epochs == 0 {
            return Err(ForecastError::InvalidParameter(
                "Epoch budget must be greater than zero".to_string(),
            ));
        }
        if !self.error_threshold.is_finite() || self.error_threshold < 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Error threshold must be non-negative and finite".to_string(),
            ));
        }
        Ok(())
    }
}

/// Cooperative cancellation handle checked once per epoch.
///
/// Clones share the same flag, so a host can hand one clone to the training
/// task and keep another to cancel from elsewhere. Cancellation surfaces as
/// [`ForecastError::Cancelled`]; no partial model is produced.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a token in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation at the next epoch boundary.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// One supervised sample: a flattened input row and its target price, both
/// in normalized units. Built, consumed and dropped inside a training run.
struct TrainingSample {
    input: Vec<f64>,
    target: f64,
}

/// A trained model: the network plus everything needed to forecast with it.
///
/// Immutable once training returns; retraining produces a new model rather
/// than mutating an old one, so concurrent forecasts against one model are
/// safe.
#[derive(Debug, Clone)]
pub struct Model {
    pub(crate) network: NeuralNetwork,
    pub(crate) scaler: PriceScaler,
    pub(crate) window_length: usize,
    pub(crate) training_error: f64,
    pub(crate) iterations: usize,
}

impl Model {
    /// Mean squared error of the final training epoch.
    pub fn training_error(&self) -> f64 {
        self.training_error
    }

    /// Number of epochs actually run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Window length the model was trained with.
    pub fn window_length(&self) -> usize {
        self.window_length
    }

    /// The min-max scaler fitted on the training history.
    pub fn scaler(&self) -> &PriceScaler {
        &self.scaler
    }
}

/// Factory for trained models.
///
/// Stateless between calls: every [`train`](NeuralPredictor::train) starts
/// from fresh weights and returns an independent [`Model`].
#[derive(Debug, Clone)]
pub struct NeuralPredictor {
    config: TrainingConfig,
}

impl NeuralPredictor {
    /// Create a predictor with a validated configuration.
    pub fn new(config: TrainingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this predictor trains with.
    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Train a model on a price history.
    pub fn train(&self, history: &[PricePoint]) -> Result<Model> {
        self.train_with_cancel(history, &CancelToken::new())
    }

    /// Train a model, checking `token` once per epoch.
    pub fn train_with_cancel(&self, history: &[PricePoint], token: &CancelToken) -> Result<Model> {
        data::validate_history(history)?;

        let prices = data::prices(history);
        let scaler = match PriceScaler::fit(&prices) {
            Ok(scaler) => scaler,
            Err(_) => {
                return Err(ForecastError::InsufficientData(format!(
                    "Not enough data to build training sequences. Need at least {} price points, have {}.",
                    self.config.window_length + MIN_TRAINING_SAMPLES,
                    history.len()
                )))
            }
        };
        let normalized = scaler.normalize_all(&prices);
        let indicators = features::technical_indicators(history)?;

        let samples = build_samples(&normalized, &indicators, self.config.window_length);
        if samples.len() < MIN_TRAINING_SAMPLES {
            return Err(ForecastError::InsufficientData(format!(
                "Not enough data to build training sequences. Need at least {} price points, have {}.",
                self.config.window_length + MIN_TRAINING_SAMPLES,
                history.len()
            )));
        }

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut architecture = vec![self.config.window_length + FEATURE_COUNT];
        architecture.extend_from_slice(&self.config.hidden_layers);
        architecture.push(1);
        let mut network = NeuralNetwork::new(&architecture, self.config.learning_rate, &mut rng)?;

        debug!(
            "training on {} samples, architecture {:?}",
            samples.len(),
            architecture
        );

        let mut order: Vec<usize> = (0..samples.len()).collect();
        let mut training_error = 0.0;
        let mut iterations = 0;

        for epoch in 0..self.config.max_epochs {
            if token.is_cancelled() {
                return Err(ForecastError::Cancelled);
            }

            // Full-sequence reshuffle each epoch, not mini-batch sampling
            order.shuffle(&mut rng);

            let mut total_error = 0.0;
            for &index in &order {
                let sample = &samples[index];
                let outputs = network.train_sample(&sample.input, &[sample.target]);
                let error = sample.target - outputs[0];
                total_error += error * error;
            }

            training_error = total_error / samples.len() as f64;
            iterations = epoch + 1;

            if epoch % LOG_EVERY_EPOCHS == 0 {
                debug!("epoch {}: mse {:.6}", epoch, training_error);
            }

            if training_error < self.config.error_threshold {
                debug!(
                    "converged at epoch {} with mse {:.6}",
                    epoch, training_error
                );
                break;
            }
        }

        debug!(
            "training finished: mse {:.6} after {} epochs",
            training_error, iterations
        );

        Ok(Model {
            network,
            scaler,
            window_length: self.config.window_length,
            training_error,
            iterations,
        })
    }
}

/// Build one sample per index `i >= window_length`: the window of
/// normalized prices ending at `i - 1` plus the rescaled indicator set at
/// `i`, targeting the normalized price at `i`.
fn build_samples(
    normalized: &[f64],
    indicators: &[FeatureVector],
    window_length: usize,
) -> Vec<TrainingSample> {
    if normalized.len() <= window_length {
        return Vec::new();
    }

    let mut samples = Vec::with_capacity(normalized.len() - window_length);
    for i in window_length..normalized.len() {
        let mut input = normalized[i - window_length..i].to_vec();
        input.extend_from_slice(&features::rescale_features(&indicators[i]));
        samples.push(TrainingSample {
            input,
            target: normalized[i],
        });
    }
    samples
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_samples_shapes() {
        let normalized: Vec<f64> = (0..15).map(|i| i as f64 / 14.0).collect();
        let indicators = vec![[1.0, 1.0, 1.0, 0.0, 0.0, 1.0]; 15];

        let samples = build_samples(&normalized, &indicators, 10);

        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0].input.len(), 10 + FEATURE_COUNT);
        assert_eq!(samples[0].target, normalized[10]);
    }

    #[test]
    fn test_build_samples_short_history() {
        let normalized = vec![0.5; 8];
        let indicators = vec![[1.0; FEATURE_COUNT]; 8];

        assert!(build_samples(&normalized, &indicators, 10).is_empty());
    }

    #[test]
    fn test_config_validation() {
        assert!(NeuralPredictor::new(TrainingConfig {
            window_length: 0,
            ..TrainingConfig::default()
        })
        .is_err());

        assert!(NeuralPredictor::new(TrainingConfig {
            learning_rate: -1.0,
            ..TrainingConfig::default()
        })
        .is_err());

        assert!(NeuralPredictor::new(TrainingConfig {
            hidden_layers: vec![8, 0],
            ..TrainingConfig::default()
        })
        .is_err());

        assert!(NeuralPredictor::new(TrainingConfig::default()).is_ok());
    }
}
