//! Nucleon and nucleus state consumed by the thickness accumulator
//!
//! Positions are transverse-plane `NVec2` in the same physical units as the
//! grid. Only participants contribute thickness; spectators stay in the
//! nucleus but are skipped by the accumulator.

use nalgebra::Vector2;
pub type NVec2 = Vector2<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Nucleon {
    pub position: NVec2, // transverse position
    pub participant: bool, // took part in at least one inelastic collision
}

impl Nucleon {
    pub fn new(x: f64, y: f64, participant: bool) -> Self {
        Self {
            position: NVec2::new(x, y),
            participant,
        }
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position.y
    }

    #[inline]
    pub fn is_participant(&self) -> bool {
        self.participant
    }
}

/// Ordered collection of nucleons belonging to one nucleus
#[derive(Debug, Clone, Default)]
pub struct Nucleus {
    nucleons: Vec<Nucleon>,
}

impl Nucleus {
    pub fn new(nucleons: Vec<Nucleon>) -> Self {
        Self { nucleons }
    }

    pub fn len(&self) -> usize {
        self.nucleons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nucleons.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Nucleon> {
        self.nucleons.iter()
    }

    /// Number of participants in this nucleus
    pub fn participants(&self) -> usize {
        self.nucleons.iter().filter(|n| n.is_participant()).count()
    }
}

impl FromIterator<Nucleon> for Nucleus {
    fn from_iter<I: IntoIterator<Item = Nucleon>>(iter: I) -> Self {
        Self {
            nucleons: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Nucleus {
    type Item = &'a Nucleon;
    type IntoIter = std::slice::Iter<'a, Nucleon>;

    fn into_iter(self) -> Self::IntoIter {
        self.nucleons.iter()
    }
}
