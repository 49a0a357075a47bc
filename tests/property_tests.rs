//! Property tests for coordinate-wise arithmetic.

use ndpoint::{Point, Vector};
use proptest::prelude::*;

// Integer coordinates keep equality exact.
fn axes_pair() -> impl Strategy<Value = (Vec<i64>, Vec<i64>)> {
    (0usize..8).prop_flat_map(|n| {
        (
            prop::collection::vec(-1_000_000i64..1_000_000, n),
            prop::collection::vec(-1_000_000i64..1_000_000, n),
        )
    })
}

proptest! {
    #[test]
    fn point_plus_vector_is_coordinate_sum((a, b) in axes_pair()) {
        let p = Point::new(a.clone()) + Vector::new(b.clone());
        for i in 0..a.len() {
            prop_assert_eq!(p[i], a[i] + b[i]);
        }
    }

    #[test]
    fn displacement_is_other_minus_self((a, b) in axes_pair()) {
        let d = Point::new(a.clone()).displacement_to(&Point::new(b.clone())).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(d[i], b[i] - a[i]);
        }
        let d = Vector::new(a.clone()).displacement_to(&Vector::new(b.clone())).unwrap();
        for i in 0..a.len() {
            prop_assert_eq!(d[i], b[i] - a[i]);
        }
    }

    #[test]
    fn vector_addition_commutes((a, b) in axes_pair()) {
        let (u, v) = (Vector::new(a), Vector::new(b));
        prop_assert_eq!(&u + &v, &v + &u);
    }

    #[test]
    fn zero_is_identity((a, _) in axes_pair()) {
        let v = Vector::new(a);
        prop_assert_eq!(&v + &Vector::zeros(v.dim()), v);
    }

    #[test]
    fn translating_by_displacement_reaches_target((a, b) in axes_pair()) {
        let (p, q) = (Point::new(a), Point::new(b));
        let d = p.displacement_to(&q).unwrap();
        prop_assert_eq!(&p + &d, q);
    }

    #[test]
    fn mismatch_is_rejected(a in prop::collection::vec(-100i64..100, 0..6), extra in 1usize..4) {
        let p = Point::new(a.clone());
        let v = Vector::<i64>::zeros(a.len() + extra);
        prop_assert!(p.try_add(&v).is_err());
        let padded = p.add_padded(&v);
        prop_assert_eq!(padded.len(), a.len() + extra);
        prop_assert!(padded[a.len()..].iter().all(Option::is_none));
    }
}
