//! Build a fully-initialized event scenario from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle:
//! - the `Event` with its grids allocated
//! - the nucleon profile shared by both nuclei
//! - the two nuclei

use crate::configuration::config::{NucleonEntry, ScenarioConfig};
use crate::error::EventResult;
use crate::simulation::event::Event;
use crate::simulation::nucleon::GaussianNucleon;
use crate::simulation::states::{Nucleon, Nucleus};

pub struct Scenario {
    pub event: Event,
    pub nucleon: GaussianNucleon,
    pub nucleus_a: Nucleus,
    pub nucleus_b: Nucleus,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> EventResult<Self> {
        let event = Event::from_config(&cfg.event)?;
        let nucleon = GaussianNucleon::new(cfg.nucleon.width, cfg.nucleon.truncation)?;

        // NucleonEntry -> runtime Nucleon using nalgebra vectors
        let to_nucleus = |entries: &[NucleonEntry]| -> Nucleus {
            entries
                .iter()
                .map(|e| Nucleon::new(e.x[0], e.x[1], e.participant))
                .collect()
        };

        Ok(Self {
            event,
            nucleon,
            nucleus_a: to_nucleus(&cfg.nucleus_a),
            nucleus_b: to_nucleus(&cfg.nucleus_b),
        })
    }

    /// Compute the event for the configured nuclei
    pub fn run(&mut self) -> &Event {
        self.event.compute(&self.nucleus_a, &self.nucleus_b, &self.nucleon);
        &self.event
    }
}
