use std::time::Instant;

use crate::simulation::engine::GenMean;
use crate::simulation::event::Event;
use crate::simulation::grid::Grid;
use crate::simulation::nucleon::GaussianNucleon;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Nucleon, Nucleus};
use crate::simulation::thickness::{compute_nuclear_thickness, compute_nuclear_thickness_naive};

/// Helper to build a nucleus of `n` participants spread over a disc of radius ~5
fn make_nucleus(n: usize, shift: f64) -> Nucleus {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // deterministic positions, no rand needed
            Nucleon::new(
                (i_f * 0.37).sin() * 5.0 + shift,
                (i_f * 0.13).cos() * 5.0,
                true,
            )
        })
        .collect()
}

fn make_profile() -> GaussianNucleon {
    GaussianNucleon::new(0.5, 3.0).expect("benchmark profile")
}

/// Time subgrid deposition against the naive cell-outer loop
pub fn bench_thickness() {
    let ns = [10, 25, 50, 100, 200, 400];
    let profile = make_profile();

    for n in ns {
        let nucleus = make_nucleus(n, 0.0);
        let mut fast = Grid::new(100, 0.2);
        let mut slow = Grid::new(100, 0.2);

        // Warm up
        compute_nuclear_thickness(&nucleus, &profile, &mut fast);
        compute_nuclear_thickness_naive(&nucleus, &profile, &mut slow);

        let t0 = Instant::now();
        compute_nuclear_thickness(&nucleus, &profile, &mut fast);
        let dt_fast = t0.elapsed().as_secs_f64();

        let t1 = Instant::now();
        compute_nuclear_thickness_naive(&nucleus, &profile, &mut slow);
        let dt_slow = t1.elapsed().as_secs_f64();

        println!("N = {n:4}, subgrid = {:8.6} s, naive = {:8.6} s", dt_fast, dt_slow);
    }
}

/// Time full events for shrinking cell widths
/// Paste output directly into a spreadsheet to graph
pub fn bench_event() {
    println!("dxy,nsteps,ms_per_event");

    let profile = make_profile();
    let nucleus_a = make_nucleus(200, -1.0);
    let nucleus_b = make_nucleus(200, 1.0);
    let steps = 10;

    for &dxy in &[0.4, 0.2, 0.1, 0.05] {
        let params = match Parameters::new(1.0, dxy, 10.0) {
            Ok(p) => p,
            Err(e) => {
                println!("skipping dxy = {dxy}: {e}");
                continue;
            }
        };
        let mut event = Event::new(params, GenMean::Geometric, false);

        // Warm-up one event
        event.compute(&nucleus_a, &nucleus_b, &profile);

        let t0 = Instant::now();
        for _ in 0..steps {
            event.compute(&nucleus_a, &nucleus_b, &profile);
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{},{:.6}", dxy, event.nsteps(), ms);
    }
}
