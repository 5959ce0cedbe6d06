//! Monte Carlo truth container.
//!
//! Owns every simulated particle and vertex of one event, keyed by track id
//! and vertex id, plus the embedding flags that mark entries coming from an
//! embedded signal source. Primary entries have positive ids, secondaries
//! are numbered zero or below.

use std::collections::BTreeMap;
use std::fmt;
use std::io::{self, Write};

use log::{error, warn};
use serde::{Deserialize, Serialize};

use super::{Particle, VtxPoint};

pub type ParticleMap = BTreeMap<i32, Particle>;
pub type VtxMap = BTreeMap<i32, VtxPoint>;
/// Embedding flag per id. Absent ids are not embedded (flag 0).
pub type EmbedFlagMap = BTreeMap<i32, i32>;

/// Rejected insertion: the id was already taken.
///
/// The container never takes ownership of a rejected entity; it comes back
/// here for the caller to keep or drop.
#[derive(Debug, Clone, PartialEq)]
pub struct InsertError<T> {
    id: i32,
    entity: T,
}

impl<T> InsertError<T> {
    /// The id that was already present.
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn entity(&self) -> &T {
        &self.entity
    }

    pub fn into_inner(self) -> T {
        self.entity
    }
}

impl<T> fmt::Display for InsertError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "id {} is already in use", self.id)
    }
}

impl<T: fmt::Debug> std::error::Error for InsertError<T> {}

/// Particles, vertices and embedding flags of one event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TruthInfoContainer {
    particles: ParticleMap,
    vertices: VtxMap,
    particle_embed_flags: EmbedFlagMap,
    vertex_embed_flags: EmbedFlagMap,
}

impl TruthInfoContainer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops all particles and vertices and clears both flag maps.
    pub fn reset(&mut self) {
        self.particles.clear();
        self.vertices.clear();
        self.particle_embed_flags.clear();
        self.vertex_embed_flags.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
            && self.vertices.is_empty()
            && self.particle_embed_flags.is_empty()
            && self.vertex_embed_flags.is_empty()
    }

    // ---- particles ----

    /// Stores `particle` under `track_id`.
    ///
    /// An id already in use is rejected and the particle is handed back in
    /// the error; the stored particle is left untouched. The particle's own
    /// track id field is not modified.
    pub fn add_particle(
        &mut self,
        track_id: i32,
        particle: Particle,
    ) -> Result<&mut Particle, InsertError<Particle>> {
        if self.particles.contains_key(&track_id) {
            error!(
                "TruthInfoContainer::add_particle - Attempt to add particle \
                 with existing trackid {}: {} id {}, p = [{}, {}, {}], parent ID {}",
                track_id,
                particle.name(),
                particle.track_id(),
                particle.px(),
                particle.py(),
                particle.pz(),
                particle.parent_id()
            );
            return Err(InsertError {
                id: track_id,
                entity: particle,
            });
        }
        Ok(self.particles.entry(track_id).or_insert(particle))
    }

    pub fn get_particle(&self, track_id: i32) -> Option<&Particle> {
        self.particles.get(&track_id)
    }

    pub fn get_particle_mut(&mut self, track_id: i32) -> Option<&mut Particle> {
        self.particles.get_mut(&track_id)
    }

    /// Like [`get_particle`](Self::get_particle), but ids `<= 0` are never primary.
    pub fn get_primary_particle(&self, track_id: i32) -> Option<&Particle> {
        if track_id <= 0 {
            return None;
        }
        self.particles.get(&track_id)
    }

    /// Removes the particle, handing it back. Dropping it destroys it.
    pub fn delete_particle(&mut self, track_id: i32) -> Option<Particle> {
        self.particles.remove(&track_id)
    }

    pub fn particles(&self) -> impl DoubleEndedIterator<Item = (i32, &Particle)> + '_ {
        self.particles.iter().map(|(k, v)| (*k, v))
    }

    pub fn primary_particles(&self) -> impl DoubleEndedIterator<Item = (i32, &Particle)> + '_ {
        self.particles.range(1..).map(|(k, v)| (*k, v))
    }

    pub fn secondary_particles(&self) -> impl DoubleEndedIterator<Item = (i32, &Particle)> + '_ {
        self.particles.range(..=0).map(|(k, v)| (*k, v))
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Highest track id, or 0 if there is none above 0.
    pub fn max_trk_index(&self) -> i32 {
        max_index(&self.particles)
    }

    /// Lowest track id, or 0 if there is none below 0.
    pub fn min_trk_index(&self) -> i32 {
        min_index(&self.particles)
    }

    // ---- vertices ----

    /// Stores `vtx` under `id` and sets its id field to `id`.
    ///
    /// On an id clash the existing vertex and the whole container are dumped
    /// to the log before the new vertex is rejected and handed back.
    pub fn add_vertex(
        &mut self,
        id: i32,
        mut vtx: VtxPoint,
    ) -> Result<&mut VtxPoint, InsertError<VtxPoint>> {
        if let Some(existing) = self.vertices.get(&id) {
            warn!("trying to add existing vtx {} vtx pos: {}", id, existing);
            warn!("{}", self);
            error!(
                "TruthInfoContainer::add_vertex - Attempt to add vertex with existing id {}",
                id
            );
            return Err(InsertError { id, entity: vtx });
        }
        vtx.set_id(id);
        Ok(self.vertices.entry(id).or_insert(vtx))
    }

    pub fn get_vtx(&self, id: i32) -> Option<&VtxPoint> {
        self.vertices.get(&id)
    }

    pub fn get_vtx_mut(&mut self, id: i32) -> Option<&mut VtxPoint> {
        self.vertices.get_mut(&id)
    }

    pub fn get_primary_vtx(&self, id: i32) -> Option<&VtxPoint> {
        if id <= 0 {
            return None;
        }
        self.vertices.get(&id)
    }

    pub fn delete_vtx(&mut self, id: i32) -> Option<VtxPoint> {
        self.vertices.remove(&id)
    }

    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = (i32, &VtxPoint)> + '_ {
        self.vertices.iter().map(|(k, v)| (*k, v))
    }

    pub fn primary_vertices(&self) -> impl DoubleEndedIterator<Item = (i32, &VtxPoint)> + '_ {
        self.vertices.range(1..).map(|(k, v)| (*k, v))
    }

    pub fn secondary_vertices(&self) -> impl DoubleEndedIterator<Item = (i32, &VtxPoint)> + '_ {
        self.vertices.range(..=0).map(|(k, v)| (*k, v))
    }

    pub fn vtx_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn max_vtx_index(&self) -> i32 {
        max_index(&self.vertices)
    }

    pub fn min_vtx_index(&self) -> i32 {
        min_index(&self.vertices)
    }

    // ---- embedding flags ----

    pub fn set_particle_embed(&mut self, track_id: i32, flag: i32) {
        self.particle_embed_flags.insert(track_id, flag);
    }

    pub fn set_vertex_embed(&mut self, vtx_id: i32, flag: i32) {
        self.vertex_embed_flags.insert(vtx_id, flag);
    }

    /// Embedding flag of a track, 0 if it was never flagged.
    pub fn is_embedded(&self, track_id: i32) -> i32 {
        self.particle_embed_flags.get(&track_id).copied().unwrap_or(0)
    }

    /// Embedding flag of a vertex, 0 if it was never flagged.
    pub fn is_embedded_vtx(&self, vtx_id: i32) -> i32 {
        self.vertex_embed_flags.get(&vtx_id).copied().unwrap_or(0)
    }

    pub fn particle_embed_flags(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.particle_embed_flags.iter().map(|(k, v)| (*k, *v))
    }

    pub fn vertex_embed_flags(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.vertex_embed_flags.iter().map(|(k, v)| (*k, *v))
    }

    /// Writes the full listing (see the `Display` impl) to `out`.
    pub fn identify(&self, out: &mut impl Write) -> io::Result<()> {
        write!(out, "{}", self)
    }
}

fn max_index<V>(map: &BTreeMap<i32, V>) -> i32 {
    map.keys().next_back().copied().unwrap_or(0).max(0)
}

fn min_index<V>(map: &BTreeMap<i32, V>) -> i32 {
    map.keys().next().copied().unwrap_or(0).min(0)
}

impl fmt::Display for TruthInfoContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "---particlemap--------------------------")?;
        for (id, particle) in &self.particles {
            writeln!(f, "particle id {}", id)?;
            writeln!(f, "{}", particle)?;
        }

        writeln!(f, "---vtxmap-------------------------------")?;
        for (id, vtx) in &self.vertices {
            writeln!(f, "vtx id: {}", id)?;
            writeln!(f, "{}", vtx)?;
        }

        writeln!(f, "---list of embedded track flags-------------------")?;
        for (id, flag) in &self.particle_embed_flags {
            writeln!(f, "embedded track id: {} flag: {}", id, flag)?;
        }

        writeln!(f, "---list of embedded vtx flags-------------------")?;
        for (id, flag) in &self.vertex_embed_flags {
            writeln!(f, "embedded vertex id: {} flag: {}", id, flag)?;
        }
        Ok(())
    }
}
