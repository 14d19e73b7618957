//! Normalize magnitude bound: `Vector::normalize` always produces either the
//! zero vector (for near-zero input) or a vector of magnitude ~1, never NaN
//! or a magnitude drifting away from unit length.

use noema::Vector;
use proptest::prelude::*;

proptest! {
    #[test]
    fn normalize_is_unit_or_zero(values in prop::collection::vec(-1000.0..1000.0f64, 1..20)) {
        let v = Vector::from_vec(values);
        let n = v.normalize();
        prop_assert!(n.as_slice().iter().all(|x| x.is_finite()));

        let mag = n.magnitude();
        let is_unit = (mag - 1.0).abs() < 1e-6;
        let is_zero = n.as_slice().iter().all(|x| *x == 0.0);
        prop_assert!(is_unit || is_zero, "normalized magnitude {mag} is neither ~1 nor 0");
    }

    #[test]
    fn normalize_is_idempotent_on_already_unit_vectors(values in prop::collection::vec(-1000.0..1000.0f64, 1..20)) {
        let v = Vector::from_vec(values);
        let once = v.normalize();
        let twice = once.normalize();
        for (a, b) in once.as_slice().iter().zip(twice.as_slice()) {
            prop_assert!((a - b).abs() < 1e-9);
        }
    }
}
