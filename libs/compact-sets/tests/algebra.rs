use std::sync::Arc;

use compact_sets::{
    empty, intersection, interval, singleton, union, Compact, CompactBuilder, CompactSet, Path,
};
use exact_real::{Dyadic, Real};

const PRECISIONS: [i64; 3] = [-4, -10, -30];

fn q(n: i64, d: i64) -> Real {
    Real::ratio(n, d).unwrap()
}

// Every point is at least 2^-2 away from every endpoint, so membership is
// definite at all tested precisions.
fn points() -> Vec<Real> {
    vec![Real::from(-1), q(1, 4), q(3, 4), q(3, 2), Real::from(3)]
}

fn unit() -> Compact<1> {
    interval(Real::from(0), Real::from(1)).unwrap()
}

fn overlapping() -> Compact<1> {
    interval(q(1, 2), Real::from(2)).unwrap()
}

#[test]
fn union_and_intersection_follow_their_operands() {
    let (a, b) = (unit(), overlapping());
    let either = union(a.clone(), b.clone());
    let both = intersection(a.clone(), b.clone());
    for x in points() {
        for p in PRECISIONS {
            let point = [x.clone()];
            let in_a = a.member(&point, p).unwrap();
            let in_b = b.member(&point, p).unwrap();
            assert_eq!(either.member(&point, p).unwrap(), in_a || in_b);
            assert_eq!(both.member(&point, p).unwrap(), in_a && in_b);
        }
    }
}

#[test]
fn laws_with_the_empty_set() {
    let a = unit();
    let with_empty = union(a.clone(), empty::<1>());
    let against_empty = intersection(a.clone(), empty::<1>());
    for x in points() {
        for p in PRECISIONS {
            let point = [x.clone()];
            assert_eq!(with_empty.member(&point, p).unwrap(), a.member(&point, p).unwrap());
            assert!(!against_empty.member(&point, p).unwrap());
        }
    }
}

#[test]
fn commutative_and_idempotent() {
    let (a, b) = (unit(), overlapping());
    let ab = union(a.clone(), b.clone());
    let ba = union(b.clone(), a.clone());
    let a_and_b = intersection(a.clone(), b.clone());
    let b_and_a = intersection(b, a.clone());
    let a_and_a = intersection(a.clone(), a.clone());
    let a_or_a = union(a.clone(), a.clone());
    for x in points() {
        for p in PRECISIONS {
            let point = [x.clone()];
            assert_eq!(ab.member(&point, p).unwrap(), ba.member(&point, p).unwrap());
            assert_eq!(a_and_b.member(&point, p).unwrap(), b_and_a.member(&point, p).unwrap());
            assert_eq!(a_and_a.member(&point, p).unwrap(), a.member(&point, p).unwrap());
            assert_eq!(a_or_a.member(&point, p).unwrap(), a.member(&point, p).unwrap());
        }
    }
}

#[test]
fn expected_memberships() {
    let a = unit();
    let expected = [false, true, true, false, false];
    for (x, want) in points().into_iter().zip(expected) {
        for p in PRECISIONS {
            assert_eq!(a.member(&[x.clone()], p).unwrap(), want);
        }
    }
}

#[test]
fn far_points_stay_outside_at_finer_precision() {
    let far = [Real::from(3), Real::from(-2)];
    let point = singleton([Real::from(0), Real::from(0)]);
    let disc = CompactBuilder::default().ball([Real::from(0), Real::from(0)], Real::from(1));
    let path = Path::new(|t: &Real| [t.clone(), t.clone()]);
    for p in [-1, -2, -4, -6] {
        assert!(!point.member(&far, p).unwrap(), "singleton at p = {p}");
        assert!(!disc.member(&far, p).unwrap(), "ball at p = {p}");
        assert!(!path.member(&far, p).unwrap(), "path at p = {p}");
    }
    for p in [-10, -20, -40] {
        assert!(!point.member(&far, p).unwrap(), "singleton at p = {p}");
        assert!(!disc.member(&far, p).unwrap(), "ball at p = {p}");
    }
}

fn diagonal() -> Arc<Path<2>> {
    Arc::new(Path::new(|t: &Real| [t.clone(), t.clone()]))
}

#[test]
fn laws_hold_for_a_path() {
    let path = diagonal();
    let disc = CompactBuilder::default().ball([Real::from(2), Real::from(2)], q(1, 2));
    let laws: Vec<(&str, Compact<2>)> = vec![
        ("path ∪ path", union(Arc::clone(&path), Arc::clone(&path))),
        ("path ∩ path", intersection(Arc::clone(&path), Arc::clone(&path))),
        ("path ∪ ∅", union(Arc::clone(&path), empty::<2>())),
    ];
    let path_or_disc = union(Arc::clone(&path), disc.clone());
    let disc_or_path = union(disc.clone(), Arc::clone(&path));
    let path_and_disc = intersection(Arc::clone(&path), disc.clone());
    let disc_and_path = intersection(disc.clone(), Arc::clone(&path));
    let nothing = intersection(Arc::clone(&path), empty::<2>());

    let points = [
        [q(1, 2), q(1, 2)],
        [q(1, 4), q(1, 4)],
        [Real::from(2), Real::from(2)],
        [Real::from(3), Real::from(-2)],
    ];
    for point in &points {
        for p in [-2, -4] {
            let on_path = path.member(point, p).unwrap();
            for (name, set) in &laws {
                assert_eq!(set.member(point, p).unwrap(), on_path, "{name} at p = {p}");
            }
            assert!(!nothing.member(point, p).unwrap());
            assert_eq!(
                path_or_disc.member(point, p).unwrap(),
                disc_or_path.member(point, p).unwrap()
            );
            assert_eq!(
                path_and_disc.member(point, p).unwrap(),
                disc_and_path.member(point, p).unwrap()
            );
        }
    }
    assert!(path.member(&points[0], -4).unwrap());
    assert!(!path.member(&points[3], -4).unwrap());
    assert!(path_or_disc.member(&points[2], -4).unwrap());
}

// Offsets k/4 · 2^p beyond either endpoint of [0, 1].
fn near_boundary(p: i64) -> Vec<Real> {
    [1, 2, 4, 6, 8, 12]
        .into_iter()
        .flat_map(|k| {
            let offset = Dyadic::new(k, p - 2);
            [
                Real::exact(&Dyadic::one() + &offset),
                Real::exact(-offset),
            ]
        })
        .collect()
}

#[test]
fn rejection_near_the_boundary_persists_at_finer_precision() {
    let a = unit();
    for coarse in -8..=-4 {
        for x in near_boundary(coarse) {
            let point = [x];
            let mut rejected = false;
            for p in (-12..=coarse).rev() {
                let member = a.member(&point, p).unwrap();
                assert!(!(rejected && member), "readmitted at p = {p} after rejection at a coarser precision");
                rejected |= !member;
            }
        }
    }
}

#[test]
fn points_within_the_margin_are_members() {
    let a = unit();
    for p in -8..=-4 {
        let points = near_boundary(p);
        // k = 1 and k = 2 lie strictly inside the margin, k = 4 on its edge
        for x in &points[..4] {
            assert!(a.member(&[x.clone()], p).unwrap(), "p = {p}");
        }
        for x in &points[4..6] {
            assert!(!a.member(&[x.clone()], p).unwrap(), "p = {p}");
        }
    }
}
