pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Nucleon, Nucleus, NVec2};
pub use simulation::params::Parameters;
pub use simulation::engine::{GenMean, TINY};
pub use simulation::grid::Grid;
pub use simulation::nucleon::{Boundary, NucleonCommon, GaussianNucleon};
pub use simulation::thickness::{compute_nuclear_thickness, compute_nuclear_thickness_naive, compute_reduced_thickness, Reduction};
pub use simulation::observables::{compute_observables, Harmonic, Observables};
pub use simulation::event::Event;
pub use simulation::scenario::Scenario;

pub use configuration::config::{EventConfig, NucleonConfig, NucleonEntry, ScenarioConfig};

pub use error::{EventError, EventResult};

pub use benchmark::benchmark::{bench_event, bench_thickness};
