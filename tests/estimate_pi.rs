use buffon::prelude::*;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;
use std::f64::consts::PI;

#[test]
fn reference_experiment_of_500_needles_is_plausible() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
    let experiment = Experiment::reference().unwrap();

    let estimates = experiment.estimates(100, &mut rng);
    let within = estimates
        .iter()
        .filter(|&&est| (est - PI).abs() <= 0.5)
        .count();

    // a 500 needle run lands within 0.5 of π roughly 93% of the time
    assert!(within >= 80, "only {within} of 100 runs within 0.5 of π");
}

#[test]
fn estimates_feed_a_descending_plot() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0xABCD);
    let experiment = Experiment::reference().unwrap().with_trials(100);
    let estimates = experiment.estimates(50, &mut rng);

    assert_eq!(estimates.len(), 50);
    assert!(estimates.windows(2).all(|w| w[0] >= w[1]));
    assert!(estimates.iter().all(|&est| est >= 0.0));
}

#[test]
fn needles_and_crossings_are_available_for_drawing() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x5678);
    let experiment = Experiment::reference().unwrap();
    let result = experiment.run(&mut rng);

    assert_eq!(result.segments().count(), experiment.trials());
    assert_eq!(result.crossing_segments().count(), result.crossings());
    result.needles().iter().for_each(|drop| {
        assert_eq!(drop.crosses, experiment.grid().crosses(drop.segment));
    });
}

#[test]
fn both_methods_agree_on_pi() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x1234);
    let needles = Experiment::reference()
        .unwrap()
        .with_trials(100_000)
        .run(&mut rng)
        .estimate();
    let riemann = estimate_pi_riemann(200_000);

    assert::close(riemann, PI, 1E-6);
    assert::close(needles, riemann, 0.1);
}

#[test]
fn custom_needle_and_grid_are_independent() {
    let mut rng = Xoshiro256Plus::seed_from_u64(0x9876);
    let grid = Grid::new(20.0, 31).unwrap();
    let dropper = NeedleDropper::with_rotation(
        12.0,
        600.0,
        400.0,
        Rotation::UniformAngle,
    )
    .unwrap();
    let experiment = Experiment::new(100_000, dropper, grid);

    assert::close(experiment.ratio(), 0.6, 1E-12);
    let result = experiment.run(&mut rng);
    assert::close(result.estimate(), PI, 0.1);
}
