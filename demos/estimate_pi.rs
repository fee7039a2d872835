// Estimate π with Buffon's needle and with a midpoint Riemann sum.
//
// Run with `RUST_LOG=debug` to see per-run crossing counts.
use buffon::prelude::*;
use std::f64::consts::PI;

fn main() {
    env_logger::init();

    let mut rng = rand::thread_rng();

    let experiment = Experiment::reference().unwrap();
    let result = experiment.run(&mut rng);
    println!(
        "needles: {} crossings of {} -> π_est: {}, absolute error: {}",
        result.crossings(),
        result.trials(),
        result.estimate(),
        (result.estimate() - PI).abs()
    );

    // The distribution of many small experiments, largest first
    let estimates = experiment.estimates(1_000, &mut rng);
    let summary = Summary::from_estimates(&estimates).unwrap();
    println!(
        "1000 runs: mean {:.5}, std {:.5}, range [{:.5}, {:.5}]",
        summary.mean,
        summary.std(),
        summary.min,
        summary.max
    );

    for sampling in [Sampling::Left, Sampling::Right, Sampling::Midpoint] {
        let q =
            riemann_with(|x| 4.0 / (1.0 + x * x), 0.0, 1.0, 200_000, sampling);
        println!(
            "riemann ({sampling}): {q}, absolute error: {:+e}",
            (q - PI).abs()
        );
    }
}
