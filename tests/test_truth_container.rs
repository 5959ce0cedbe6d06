//! Truth container: ownership, duplicate rejection, bounds and embedding flags

use detsim::{Particle, ThreeVector, TruthInfoContainer, VtxPoint};

fn particle(name: &str, track_id: i32) -> Particle {
    let mut p = Particle::new(name, 13, ThreeVector::new(0.3, -0.1, 2.0));
    p.set_track_id(track_id);
    p
}

fn vertex(z: f64) -> VtxPoint {
    VtxPoint::new(ThreeVector::new(0.0, 0.0, z), 0.0)
}

#[test]
fn test_add_and_get_particle() {
    let mut truth = TruthInfoContainer::new();
    let stored = truth.add_particle(1, particle("mu-", 1)).expect("fresh id");
    stored.set_parent_id(0);

    let p = truth.get_particle(1).expect("particle stored");
    assert_eq!(p.name(), "mu-");
    assert!(truth.get_particle(2).is_none());
}

#[test]
fn test_duplicate_particle_rejected() {
    let mut truth = TruthInfoContainer::new();
    truth.add_particle(3, particle("mu-", 3)).expect("fresh id");

    let err = truth.add_particle(3, particle("mu+", 99)).unwrap_err();
    assert_eq!(err.id(), 3);
    // Ownership of the rejected particle comes back to the caller
    let rejected = err.into_inner();
    assert_eq!(rejected.name(), "mu+");
    assert_eq!(rejected.track_id(), 99);

    // Original untouched
    assert_eq!(truth.particle_count(), 1);
    assert_eq!(truth.get_particle(3), Some(&particle("mu-", 3)));
}

#[test]
fn test_add_particle_keeps_track_id_field() {
    // Unlike vertices, the particle's own id is not overwritten
    let mut truth = TruthInfoContainer::new();
    truth.add_particle(8, particle("e-", 42)).expect("fresh id");
    assert_eq!(truth.get_particle(8).map(Particle::track_id), Some(42));
}

#[test]
fn test_primary_lookups_reject_non_positive_ids() {
    let mut truth = TruthInfoContainer::new();
    truth
        .add_particle(0, particle("gamma", 0))
        .expect("fresh id");
    truth
        .add_particle(-5, particle("gamma", -5))
        .expect("fresh id");
    truth.add_particle(2, particle("e-", 2)).expect("fresh id");
    truth.add_vertex(-5, vertex(1.0)).expect("fresh id");
    truth.add_vertex(1, vertex(0.0)).expect("fresh id");

    assert!(truth.get_particle(0).is_some());
    assert!(truth.get_primary_particle(0).is_none());
    assert!(truth.get_primary_particle(-5).is_none());
    assert!(truth.get_primary_particle(2).is_some());

    assert!(truth.get_vtx(-5).is_some());
    assert!(truth.get_primary_vtx(-5).is_none());
    assert!(truth.get_primary_vtx(1).is_some());
}

#[test]
fn test_add_vertex_assigns_id() {
    let mut truth = TruthInfoContainer::new();
    let mut vtx = vertex(12.0);
    vtx.set_id(77);

    let stored = truth.add_vertex(4, vtx).expect("fresh id");
    assert_eq!(stored.id(), 4);
    assert_eq!(truth.get_vtx(4).map(VtxPoint::id), Some(4));
}

#[test]
fn test_duplicate_vertex_rejected() {
    let mut truth = TruthInfoContainer::new();
    truth.add_vertex(1, vertex(5.0)).expect("fresh id");

    let mut clash = vertex(-5.0);
    clash.set_id(123);
    let err = truth.add_vertex(1, clash).unwrap_err();
    // Rejected vertex keeps its own id, stored one is unchanged
    assert_eq!(err.entity().id(), 123);
    assert_eq!(truth.get_vtx(1).map(VtxPoint::z), Some(5.0));
    assert_eq!(truth.vtx_count(), 1);
}

#[test]
fn test_index_bounds() {
    let mut truth = TruthInfoContainer::new();
    for id in [-3, 0, 5, 10] {
        truth
            .add_particle(id, particle("pi+", id))
            .expect("fresh id");
    }
    assert_eq!(truth.max_trk_index(), 10);
    assert_eq!(truth.min_trk_index(), -3);

    let mut negative = TruthInfoContainer::new();
    for id in [-3, -1] {
        negative
            .add_particle(id, particle("pi+", id))
            .expect("fresh id");
        negative.add_vertex(id, vertex(0.0)).expect("fresh id");
    }
    assert_eq!(negative.max_trk_index(), 0);
    assert_eq!(negative.min_trk_index(), -3);
    assert_eq!(negative.max_vtx_index(), 0);
    assert_eq!(negative.min_vtx_index(), -3);

    let mut positive = TruthInfoContainer::new();
    for id in [2, 4] {
        positive
            .add_particle(id, particle("pi+", id))
            .expect("fresh id");
        positive.add_vertex(id, vertex(0.0)).expect("fresh id");
    }
    assert_eq!(positive.min_trk_index(), 0);
    assert_eq!(positive.max_trk_index(), 4);
    assert_eq!(positive.min_vtx_index(), 0);
    assert_eq!(positive.max_vtx_index(), 4);
}

#[test]
fn test_embedding_flags() {
    let mut truth = TruthInfoContainer::new();
    truth.set_particle_embed(1, 2);
    truth.set_vertex_embed(-4, 1);

    assert_eq!(truth.is_embedded(1), 2);
    assert_eq!(truth.is_embedded(2), 0);
    assert_eq!(truth.is_embedded_vtx(-4), 1);
    assert_eq!(truth.is_embedded_vtx(1), 0);
    // Flags are independent of the entity maps
    assert!(truth.get_particle(1).is_none());
}

#[test]
fn test_delete_entries() {
    let mut truth = TruthInfoContainer::new();
    truth.add_particle(1, particle("e-", 1)).expect("fresh id");
    truth.add_particle(2, particle("e+", 2)).expect("fresh id");
    truth.add_vertex(1, vertex(0.0)).expect("fresh id");

    let removed = truth.delete_particle(1).expect("present");
    assert_eq!(removed.name(), "e-");
    assert!(truth.get_particle(1).is_none());
    assert!(truth.get_particle(2).is_some());
    assert!(truth.delete_particle(1).is_none());

    assert!(truth.delete_vtx(1).is_some());
    assert_eq!(truth.vtx_count(), 0);
    // The freed id can be reused
    truth
        .add_particle(1, particle("gamma", 1))
        .expect("id freed");
}

#[test]
fn test_reset() {
    let mut truth = TruthInfoContainer::new();
    truth
        .add_particle(-2, particle("e-", -2))
        .expect("fresh id");
    truth.add_particle(6, particle("e+", 6)).expect("fresh id");
    truth.add_vertex(3, vertex(1.0)).expect("fresh id");
    truth.set_particle_embed(6, 1);
    truth.set_vertex_embed(3, 1);

    truth.reset();
    assert!(truth.is_empty());
    assert_eq!(truth.particle_count(), 0);
    assert_eq!(truth.vtx_count(), 0);
    assert_eq!(truth.particle_embed_flags().count(), 0);
    assert_eq!(truth.vertex_embed_flags().count(), 0);
    assert_eq!(truth.max_trk_index(), 0);
    assert_eq!(truth.min_trk_index(), 0);
    assert_eq!(truth.max_vtx_index(), 0);
    assert_eq!(truth.min_vtx_index(), 0);

    // Idempotent
    truth.reset();
    assert!(truth.is_empty());
}

#[test]
fn test_identify() {
    let mut truth = TruthInfoContainer::new();
    truth.add_particle(1, particle("mu-", 1)).expect("fresh id");
    truth.add_vertex(1, vertex(2.5)).expect("fresh id");
    truth.set_particle_embed(1, 3);

    let mut out = Vec::new();
    truth.identify(&mut out).expect("Failed to write");
    let text = String::from_utf8(out).expect("utf8");

    let particles = text.find("---particlemap").expect("particle section");
    let vertices = text.find("---vtxmap").expect("vertex section");
    let flags = text
        .find("embedded track id: 1 flag: 3")
        .expect("flag line");
    assert!(particles < vertices && vertices < flags);
    assert!(text.contains("particle id 1"));
    assert!(text.contains("name: mu-"));
    assert!(text.contains("vtx id: 1 x: 0 y: 0 z: 2.5 t: 0"));
}

#[test]
fn test_serde_round_trip() {
    let mut truth = TruthInfoContainer::new();
    truth
        .add_particle(-1, particle("e-", -1))
        .expect("fresh id");
    truth.add_vertex(2, vertex(4.0)).expect("fresh id");
    truth.set_vertex_embed(2, 1);

    let json = serde_json::to_string(&truth).expect("serialize");
    let back: TruthInfoContainer = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, truth);
}
