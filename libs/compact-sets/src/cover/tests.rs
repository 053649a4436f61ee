use std::sync::Arc;
use std::thread;

use super::*;

fn q(n: i64, d: i64) -> Real {
    Real::ratio(n, d).unwrap()
}

fn diagonal() -> Path<2> {
    Path::new(|t: &Real| [t.clone(), t.clone()])
}

#[test]
fn diagonal_path_contains_its_points() {
    let path = diagonal();
    for p in [-2, -4, -6] {
        assert!(path.member(&[q(1, 2), q(1, 2)], p).unwrap(), "p = {p}");
        assert!(path.member(&[q(1, 3), q(1, 3)], p).unwrap(), "p = {p}");
        assert!(!path.member(&[Real::from(2), Real::from(2)], p).unwrap(), "p = {p}");
    }
}

#[test]
fn points_beyond_the_margin_are_rejected() {
    // distance to the diagonal is 2^-2 / sqrt(2), well past 1.5 * 2^-4
    let path = diagonal();
    assert!(!path.member(&[q(1, 2), q(3, 4)], -4).unwrap());
}

#[test]
fn resolution_is_reused_for_coarser_queries() {
    let path = diagonal();
    assert_eq!(path.generation(), 0);
    assert_eq!(path.resolution(), None);

    path.member(&[q(1, 2), q(1, 2)], -6).unwrap();
    let first = path.resolution().unwrap();
    assert_eq!(first.precision, -6);
    assert_eq!(path.generation(), 1);

    path.member(&[q(1, 2), q(1, 2)], -6).unwrap();
    path.member(&[q(1, 4), q(1, 4)], -3).unwrap();
    assert_eq!(path.generation(), 1);
    assert_eq!(path.resolution(), Some(first));

    path.member(&[q(1, 2), q(1, 2)], -8).unwrap();
    let finer = path.resolution().unwrap();
    assert_eq!(path.generation(), 2);
    assert!(finer.step <= first.step);
}

#[test]
fn refinement_runs_once_across_threads() {
    let path = Arc::new(diagonal());
    thread::scope(|scope| {
        for _ in 0..2 {
            let path = Arc::clone(&path);
            scope.spawn(move || {
                assert!(path.member(&[q(1, 4), q(1, 4)], -5).unwrap());
            });
        }
    });
    assert_eq!(path.generation(), 1);
}

#[test]
fn one_dimensional_path() {
    let doubled = Path::new(|t: &Real| [t.scale(1)]);
    assert!(doubled.member(&[q(3, 2)], -4).unwrap());
    assert!(!doubled.member(&[Real::from(3)], -4).unwrap());
}

#[test]
fn unit_square_surface() {
    let square = Surface::new(|u: &Real, v: &Real| [u.clone(), v.clone()]);
    assert!(square.member(&[q(1, 3), q(2, 3)], -2).unwrap());
    assert!(!square.member(&[Real::from(2), Real::from(2)], -2).unwrap());
}

#[test]
fn surface_resolution_is_reused_for_coarser_queries() {
    let square = Surface::new(|u: &Real, v: &Real| [u.clone(), v.clone()]);
    square.member(&[q(1, 3), q(2, 3)], -3).unwrap();
    let first = square.resolution().unwrap();
    assert_eq!(square.generation(), 1);

    square.member(&[q(1, 3), q(2, 3)], -3).unwrap();
    square.member(&[Real::from(2), Real::from(2)], -2).unwrap();
    assert_eq!(square.generation(), 1);
    assert_eq!(square.resolution(), Some(first));
}

#[test]
fn sheared_surface_depends_on_both_parameters() {
    let sheared = Surface::new(|u: &Real, v: &Real| [u.clone(), u + v]);
    assert!(sheared.member(&[q(1, 2), Real::from(1)], -3).unwrap());
    assert!(!sheared.member(&[Real::from(1), Real::from(-1)], -3).unwrap());
}

#[test]
fn point_at_checks_the_parameter_domain() {
    let path = diagonal();
    let image = path.point_at(&[Dyadic::new(1, -2)]).unwrap();
    assert_eq!(image[0].as_exact(), Some(&Dyadic::new(1, -2)));
    assert_eq!(
        path.point_at(&[Dyadic::new(3, -1)]).unwrap_err(),
        CompactError::OutsideDomain { coordinate: 0 }
    );

    let surface = from_continuous_map(|uv: &[Real; 2]| [uv[0].clone(), uv[1].clone()]);
    assert_eq!(
        surface.point_at(&[Dyadic::zero(), Dyadic::from(-1)]).unwrap_err(),
        CompactError::OutsideDomain { coordinate: 1 }
    );
}

#[test]
fn with_config_validates() {
    let config = SolverConfig::default().with_max_mesh_level(99);
    assert!(matches!(
        diagonal().with_config(config),
        Err(CompactError::InvalidConfig(_))
    ));
}

#[test]
fn shallow_mesh_limit_surfaces_as_unattainable() {
    let path = diagonal()
        .with_config(SolverConfig::default().with_max_mesh_level(2))
        .unwrap();
    let err = path.member(&[q(1, 2), q(1, 2)], -8).unwrap_err();
    assert!(matches!(err, CompactError::PrecisionUnattainable { .. }));
    assert_eq!(path.generation(), 0);
}
