pub mod states;
pub mod params;
pub mod engine;
pub mod grid;
pub mod nucleon;
pub mod thickness;
pub mod observables;
pub mod event;
pub mod scenario;
