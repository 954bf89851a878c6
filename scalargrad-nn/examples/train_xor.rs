// Trains a small MLP on XOR: tanh hidden layer, sigmoid output, MSE loss,
// plain SGD. The graph is rebuilt from the persistent parameter leaves on
// every forward pass; only the parameters survive between steps.

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::Value;
use scalargrad_nn::losses::mse_loss;
use scalargrad_nn::optim::{Optimizer, Sgd};
use scalargrad_nn::{Activation, Mlp, Module};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(7);
    let mlp = Mlp::new(
        &mut rng,
        2,
        &[(8, Activation::Tanh), (1, Activation::Sigmoid)],
    )?;
    let mut sgd = Sgd::new(mlp.parameters(), 0.5);

    let samples: [([f64; 2], f64); 4] = [
        ([0.0, 0.0], 0.0),
        ([0.0, 1.0], 1.0),
        ([1.0, 0.0], 1.0),
        ([1.0, 1.0], 0.0),
    ];

    for epoch in 0..2000 {
        let mut predictions = Vec::with_capacity(samples.len());
        let mut targets = Vec::with_capacity(samples.len());
        for (input, target) in &samples {
            let inputs: Vec<Value> = input.iter().copied().map(Value::from).collect();
            let outputs = mlp.forward(&inputs)?;
            predictions.push(outputs[0].clone());
            targets.push(Value::from(*target));
        }
        let loss = mse_loss(&predictions, &targets)?;

        sgd.zero_grad();
        loss.backward();
        sgd.step();

        if epoch % 200 == 0 {
            println!("epoch {epoch:4}  loss {:.6}", loss.data());
        }
    }

    for (input, target) in &samples {
        let inputs: Vec<Value> = input.iter().copied().map(Value::from).collect();
        let outputs = mlp.forward(&inputs)?;
        println!("{input:?} -> {:.3} (target {target})", outputs[0].data());
    }
    Ok(())
}
