//! Hand-rolled feedforward neural network
//!
//! A stack of fully-connected layers trained with plain online SGD. The
//! architecture is a caller-supplied list of layer widths; activations are
//! assigned by position (first hidden layer `tanh`, interior hidden layers
//! `relu`, output layer `sigmoid`). Forward and backward passes thread
//! per-layer output and delta vectors through the functions instead of
//! storing scratch state on the neurons, so a trained network can serve
//! concurrent inference without locking.

use crate::error::{ForecastError, Result};
use rand::Rng;

/// Activation function of a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Hyperbolic tangent, used by the first hidden layer
    Tanh,
    /// Rectified linear unit, used by interior hidden layers
    Relu,
    /// Logistic sigmoid, used by the output layer to bound output to (0, 1)
    Sigmoid,
}

impl Activation {
    /// Apply the activation to a pre-activation sum.
    pub fn apply(self, x: f64) -> f64 {
        match self {
            Activation::Tanh => x.tanh(),
            Activation::Relu => x.max(0.0),
            // The exponent argument is clamped to avoid overflow; saturation
            // at the clamp bound is indistinguishable from saturation at the
            // true asymptote in f64.
            Activation::Sigmoid => 1.0 / (1.0 + (-x.clamp(-500.0, 500.0)).exp()),
        }
    }

    /// Derivative expressed in terms of the neuron's *output*, not its
    /// pre-activation sum. This simplification is consistent across the
    /// whole system.
    pub fn derivative(self, output: f64) -> f64 {
        match self {
            Activation::Tanh => 1.0 - output * output,
            Activation::Relu => {
                if output > 0.0 {
                    1.0
                } else {
                    0.0
                }
            }
            Activation::Sigmoid => output * (1.0 - output),
        }
    }
}

/// A single neuron: one weight per input plus a bias.
#[derive(Debug, Clone)]
struct Neuron {
    weights: Vec<f64>,
    bias: f64,
}

impl Neuron {
    /// Glorot-style initialization: uniform weights scaled by
    /// `sqrt(2 / input_size)`, with a small random bias offset.
    fn new(input_size: usize, rng: &mut impl Rng) -> Self {
        let scale = (2.0 / input_size as f64).sqrt();
        Self {
            weights: (0..input_size)
                .map(|_| (rng.gen::<f64>() - 0.5) * scale)
                .collect(),
            bias: (rng.gen::<f64>() - 0.5) * 0.1,
        }
    }

    fn weighted_sum(&self, inputs: &[f64]) -> f64 {
        self.bias
            + inputs
                .iter()
                .zip(self.weights.iter())
                .map(|(input, weight)| input * weight)
                .sum::<f64>()
    }
}

/// A fully-connected layer with a shared activation.
#[derive(Debug, Clone)]
struct Layer {
    neurons: Vec<Neuron>,
    activation: Activation,
}

impl Layer {
    fn new(neuron_count: usize, input_size: usize, activation: Activation, rng: &mut impl Rng) -> Self {
        Self {
            neurons: (0..neuron_count)
                .map(|_| Neuron::new(input_size, rng))
                .collect(),
            activation,
        }
    }

    fn forward(&self, inputs: &[f64]) -> Vec<f64> {
        self.neurons
            .iter()
            .map(|neuron| self.activation.apply(neuron.weighted_sum(inputs)))
            .collect()
    }
}

/// A feedforward network of fully-connected layers.
#[derive(Debug, Clone)]
pub struct NeuralNetwork {
    layers: Vec<Layer>,
    learning_rate: f64,
}

impl NeuralNetwork {
    /// Build a network from an architecture of layer widths
    /// `[input, hidden.., output]`, drawing initial weights from `rng`.
    pub fn new(architecture: &[usize], learning_rate: f64, rng: &mut impl Rng) -> Result<Self> {
        if architecture.len() < 2 {
            return Err(ForecastError::InvalidParameter(
                "Architecture needs at least an input and an output width".to_string(),
            ));
        }
        if architecture.iter().any(|&width| width == 0) {
            return Err(ForecastError::InvalidParameter(
                "Layer widths must be greater than zero".to_string(),
            ));
        }
        if !learning_rate.is_finite() || learning_rate <= 0.0 {
            return Err(ForecastError::InvalidParameter(
                "Learning rate must be positive and finite".to_string(),
            ));
        }

        let last = architecture.len() - 1;
        let layers = (1..architecture.len())
            .map(|position| {
                let activation = if position == last {
                    Activation::Sigmoid
                } else if position == 1 {
                    Activation::Tanh
                } else {
                    Activation::Relu
                };
                Layer::new(
                    architecture[position],
                    architecture[position - 1],
                    activation,
                    rng,
                )
            })
            .collect();

        Ok(Self {
            layers,
            learning_rate,
        })
    }

    /// Width of the input layer.
    pub fn input_size(&self) -> usize {
        self.layers[0].neurons[0].weights.len()
    }

    /// Run a forward pass and return the output layer's values.
    pub fn forward(&self, inputs: &[f64]) -> Vec<f64> {
        let mut outputs = inputs.to_vec();
        for layer in &self.layers {
            outputs = layer.forward(&outputs);
        }
        outputs
    }

    /// Forward pass caching every layer's output vector, the input first.
    fn forward_cached(&self, inputs: &[f64]) -> Vec<Vec<f64>> {
        let mut cached = Vec::with_capacity(self.layers.len() + 1);
        let mut current = inputs.to_vec();
        for layer in &self.layers {
            let next = layer.forward(&current);
            cached.push(current);
            current = next;
        }
        cached.push(current);
        cached
    }

    /// One online SGD step on a single sample: forward pass, delta
    /// backpropagation, immediate weight update. Returns the outputs the
    /// pass produced before the update, so callers can accumulate error
    /// without a second forward pass.
    pub fn train_sample(&mut self, inputs: &[f64], targets: &[f64]) -> Vec<f64> {
        let cached = self.forward_cached(inputs);
        let last = self.layers.len() - 1;
        let outputs = cached[last + 1].clone();

        let mut deltas: Vec<Vec<f64>> = vec![Vec::new(); self.layers.len()];

        // Output-layer deltas: (target - output) * f'(output)
        let output_activation = self.layers[last].activation;
        let output_deltas: Vec<f64> = cached[last + 1]
            .iter()
            .enumerate()
            .map(|(i, &output)| (targets[i] - output) * output_activation.derivative(output))
            .collect();
        deltas[last] = output_deltas;

        // Hidden-layer deltas, right to left, propagated through the next
        // layer's weights
        for layer_index in (0..last).rev() {
            let activation = self.layers[layer_index].activation;
            let next_layer = &self.layers[layer_index + 1];
            let next_deltas = &deltas[layer_index + 1];
            let layer_deltas: Vec<f64> = cached[layer_index + 1]
                .iter()
                .enumerate()
                .map(|(i, &output)| {
                    let propagated: f64 = next_layer
                        .neurons
                        .iter()
                        .zip(next_deltas.iter())
                        .map(|(neuron, &delta)| delta * neuron.weights[i])
                        .sum();
                    propagated * activation.derivative(output)
                })
                .collect();
            deltas[layer_index] = layer_deltas;
        }

        // Immediate per-sample update: w += lr * delta * input, b += lr * delta
        for (layer_index, layer) in self.layers.iter_mut().enumerate() {
            let layer_inputs = &cached[layer_index];
            for (neuron, &delta) in layer.neurons.iter_mut().zip(deltas[layer_index].iter()) {
                for (weight, &input) in neuron.weights.iter_mut().zip(layer_inputs.iter()) {
                    *weight += self.learning_rate * delta * input;
                }
                neuron.bias += self.learning_rate * delta;
            }
        }

        outputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_sigmoid_bounds_and_overflow() {
        let sigmoid = Activation::Sigmoid;

        assert!((sigmoid.apply(0.0) - 0.5).abs() < 1e-12);
        // Extreme arguments saturate instead of overflowing
        assert_eq!(sigmoid.apply(1e6), 1.0);
        assert_eq!(sigmoid.apply(-1e6), 0.0);
    }

    #[test]
    fn test_derivatives_in_terms_of_output() {
        // sigmoid' = y(1-y)
        assert!((Activation::Sigmoid.derivative(0.5) - 0.25).abs() < 1e-12);
        // tanh' = 1 - y^2
        assert!((Activation::Tanh.derivative(0.5) - 0.75).abs() < 1e-12);
        // relu' = 1 for positive output, 0 otherwise
        assert_eq!(Activation::Relu.derivative(2.0), 1.0);
        assert_eq!(Activation::Relu.derivative(0.0), 0.0);
    }

    #[test]
    fn test_invalid_architectures_rejected() {
        let mut rng = StdRng::seed_from_u64(1);

        assert!(NeuralNetwork::new(&[4], 0.01, &mut rng).is_err());
        assert!(NeuralNetwork::new(&[4, 0, 1], 0.01, &mut rng).is_err());
        assert!(NeuralNetwork::new(&[4, 2, 1], 0.0, &mut rng).is_err());
    }

    #[test]
    fn test_forward_output_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(2);
        let network = NeuralNetwork::new(&[3, 4, 1], 0.01, &mut rng).unwrap();

        let outputs = network.forward(&[0.2, 0.5, 0.8]);
        assert_eq!(outputs.len(), 1);
        assert!(outputs[0] > 0.0 && outputs[0] < 1.0);
    }

    #[test]
    fn test_same_seed_same_network() {
        let mut rng_a = StdRng::seed_from_u64(7);
        let mut rng_b = StdRng::seed_from_u64(7);
        let network_a = NeuralNetwork::new(&[3, 4, 1], 0.01, &mut rng_a).unwrap();
        let network_b = NeuralNetwork::new(&[3, 4, 1], 0.01, &mut rng_b).unwrap();

        assert_eq!(
            network_a.forward(&[0.1, 0.2, 0.3]),
            network_b.forward(&[0.1, 0.2, 0.3])
        );
    }

    #[test]
    fn test_training_moves_output_toward_target() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut network = NeuralNetwork::new(&[2, 4, 1], 0.1, &mut rng).unwrap();

        let inputs = [0.3, 0.7];
        let target = 0.9;

        let before = (target - network.forward(&inputs)[0]).abs();
        for _ in 0..200 {
            network.train_sample(&inputs, &[target]);
        }
        let after = (target - network.forward(&inputs)[0]).abs();

        assert!(after < before);
    }
}
