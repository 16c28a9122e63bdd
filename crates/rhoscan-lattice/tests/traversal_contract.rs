//! Traversal and addressing contract exercised through the public API.

use proptest::prelude::*;
use rhoscan_lattice::{
    BoundaryMode, Dimensionality, Extents, Face, LatticeCoord, LatticeError, LatticeGeometry,
};
use std::collections::HashSet;

#[test]
fn worked_stride_example() {
    let g = LatticeGeometry::new(Extents::new(4, 5, 6), Dimensionality::Three).unwrap();
    assert_eq!(g.jumps(), (56, 8, 1));
    assert_eq!(g.system_size(), 336);
}

#[test]
fn raw_dimensionality_is_validated() {
    let err = Dimensionality::try_from(0u8)
        .and_then(|d| LatticeGeometry::new(Extents::default(), d))
        .unwrap_err();
    assert_eq!(err, LatticeError::UnsupportedDimensionality { value: 0 });
    assert!(err.to_string().contains("unsupported dimensionality 0"));
}

#[test]
fn writer_style_halo_stamp() {
    // Stamp every face with 1.0 and check only halo cells were touched.
    let g = LatticeGeometry::new(Extents::new(3, 3, 3), Dimensionality::Three).unwrap();
    let mut field = vec![0.0f64; g.system_size()];
    for face in Face::ALL {
        g.boundary(face, |x, y, z| field[g.index(x, y, z)] = 1.0);
    }
    let mut interior_sum = 0.0;
    g.skip_bounds(|x, y, z| interior_sum += field[g.index(x, y, z)]);
    assert_eq!(interior_sum, 0.0);
    let stamped = field.iter().filter(|&&v| v == 1.0).count();
    assert_eq!(stamped, g.system_size() - 27);
}

proptest! {
    #[test]
    fn skip_bounds_covers_interior(mx in 0usize..7, my in 0usize..7, mz in 0usize..7) {
        let g = LatticeGeometry::new(Extents::new(mx, my, mz), Dimensionality::Three).unwrap();
        let mut seen = HashSet::new();
        g.skip_bounds(|x, y, z| {
            assert!((1..=mx).contains(&x) && (1..=my).contains(&y) && (1..=mz).contains(&z));
            seen.insert((x, y, z));
        });
        prop_assert_eq!(seen.len(), mx * my * mz);
    }

    #[test]
    fn system_plus_bounds_covers_halo(mx in 0usize..7, my in 0usize..7, mz in 0usize..7) {
        let g = LatticeGeometry::new(Extents::new(mx, my, mz), Dimensionality::Three).unwrap();
        let cells: Vec<LatticeCoord> = g.sweep(BoundaryMode::WithBounds).collect();
        let distinct: HashSet<_> = cells.iter().copied().collect();
        prop_assert_eq!(cells.len(), (mx + 2) * (my + 2) * (mz + 2));
        prop_assert_eq!(distinct.len(), cells.len());
        prop_assert!(cells.iter().all(|c| c.x <= mx + 1 && c.y <= my + 1 && c.z <= mz + 1));
    }

    #[test]
    fn round_trip_3d(mx in 0usize..9, my in 0usize..9, mz in 0usize..9) {
        let g = LatticeGeometry::new(Extents::new(mx, my, mz), Dimensionality::Three).unwrap();
        for c in g.with_halo() {
            prop_assert_eq!(g.coordinate(g.index(c.x, c.y, c.z)), c);
        }
    }
}
