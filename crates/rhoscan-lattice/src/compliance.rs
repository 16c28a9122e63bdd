//! Geometry compliance test helpers.
//!
//! These functions verify that a [`LatticeGeometry`] satisfies the
//! addressing and traversal contract. Reused across the geometry and sweep
//! test modules for 1D, 2D and 3D lattices.

use crate::dimensionality::{Axis, Dimensionality};
use crate::geometry::{LatticeCoord, LatticeGeometry, BOUNDARIES, HALO};
use crate::sweep::Face;
use std::collections::HashSet;

/// Assert `coordinate(index(c)) == c` for every halo-inclusive coordinate,
/// masked to the active dimensionality.
pub fn assert_round_trip(g: &LatticeGeometry) {
    for c in g.with_halo() {
        let masked = c.masked(g.dimensionality());
        let offset = g.index(masked.x, masked.y, masked.z);
        assert!(
            offset < g.system_size(),
            "offset {offset} of {masked} exceeds system size {}",
            g.system_size()
        );
        assert_eq!(g.coordinate(offset), masked, "round trip failed for {masked}");
    }
}

/// Assert the interior sweep visits `MX*MY*MZ` distinct cells in `[1, M]`.
pub fn assert_interior_coverage(g: &LatticeGeometry) {
    let mut seen = HashSet::new();
    g.skip_bounds(|x, y, z| {
        let c = LatticeCoord::new(x, y, z);
        for axis in Axis::ALL {
            let v = c.get(axis);
            assert!(
                (HALO..=g.extent(axis)).contains(&v),
                "interior cell {c} outside [1, {}] on {axis}",
                g.extent(axis)
            );
        }
        assert!(seen.insert(c), "interior cell {c} visited twice");
    });
    assert_eq!(seen.len(), g.extents().interior_cells());
}

/// Assert the halo-inclusive sweep visits every `[0, M+1]` cell exactly once.
pub fn assert_halo_coverage(g: &LatticeGeometry) {
    let mut seen = HashSet::new();
    g.system_plus_bounds(|x, y, z| {
        let c = LatticeCoord::new(x, y, z);
        for axis in Axis::ALL {
            assert!(c.get(axis) <= g.extent(axis) + HALO, "cell {c} past halo");
        }
        assert!(seen.insert(c), "cell {c} visited twice");
    });
    assert_eq!(seen.len(), g.system_size());
}

/// Assert that in 3D every flat offset is reached by exactly one cell.
pub fn assert_offsets_bijective(g: &LatticeGeometry) {
    if g.dimensionality() != Dimensionality::Three {
        return;
    }
    let mut hits = vec![false; g.system_size()];
    for c in g.with_halo() {
        let offset = g.index(c.x, c.y, c.z);
        assert!(!hits[offset], "offset {offset} aliased by {c}");
        hits[offset] = true;
    }
    assert!(hits.iter().all(|&h| h));
}

/// Assert each face sweeps the product of the other two halo spans.
pub fn assert_face_coverage(g: &LatticeGeometry) {
    for face in Face::ALL {
        let fixed = face.axis();
        let expected: usize = Axis::ALL
            .iter()
            .filter(|&&a| a != fixed)
            .map(|&a| g.extent(a) + BOUNDARIES)
            .product();
        let cells: HashSet<LatticeCoord> = g.face(face).collect();
        assert_eq!(cells.len(), expected, "{face:?} cell count");
    }
}

/// Run all compliance checks.
pub fn run_full_compliance(g: &LatticeGeometry) {
    assert_round_trip(g);
    assert_interior_coverage(g);
    assert_halo_coverage(g);
    assert_offsets_bijective(g);
    assert_face_coverage(g);
}
