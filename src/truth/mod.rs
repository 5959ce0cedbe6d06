//! Monte Carlo truth information: particles, vertices and embedding flags

mod container;
mod particle;
mod vtx_point;

pub use container::{EmbedFlagMap, InsertError, ParticleMap, TruthInfoContainer, VtxMap};
pub use particle::Particle;
pub use vtx_point::VtxPoint;
