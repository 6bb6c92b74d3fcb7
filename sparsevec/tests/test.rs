use std::collections::{BTreeMap, HashMap};

use rstest::*;

use sparsevec::{SparseVector, SparseVectorError};

#[fixture]
fn example() -> SparseVector {
    SparseVector::from(HashMap::from([(0, 5.0), (2, -12.0), (42, 0.0)]))
}

mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    #[rstest]
    fn test_dense_operands_of_every_shape(example: SparseVector) {
        let array: [f64; 3] = [10.0, 0.0, -1.0];
        let vector: Vec<f64> = vec![10.0, 0.0, -1.0];
        let mut buffer = vec![0.0f32; 100];
        buffer[0] = 10.0;
        buffer[2] = -1.0;

        assert_eq!(example.dot(&array), 62.0);
        assert_eq!(example.dot(&vector), 62.0);
        assert_eq!(example.dot(&vector[..]), 62.0);
        assert_eq!(example.dot(&buffer), 62.0);
    }

    #[rstest]
    fn test_add_to_then_dot(example: SparseVector) {
        let mut dense = vec![0.0f64; 43];
        example.add_scaled_to(&mut dense, 2.0);
        assert_eq!(dense[0], 10.0);
        assert_eq!(dense[2], -24.0);
        assert_eq!(dense[42], 0.0);

        // dot with its own doubled copy is twice the squared L2 norm
        assert_eq!(example.dot(&dense), 2.0 * example.l2sq());
    }

    #[rstest]
    fn test_sdot_is_symmetric_on_random_like_inputs() {
        let a: SparseVector = (0..1_000u32).step_by(3).map(|i| (i, i as f64)).collect();
        let b: SparseVector = (0..1_000u32).step_by(5).map(|i| (i, 1.0)).collect();

        // common indices are the multiples of 15
        let expected: f64 = (0..1_000u32).step_by(15).map(|i| i as f64).sum();
        assert_eq!(a.sdot(&b), expected);
        assert_eq!(b.sdot(&a), expected);
    }

    #[rstest]
    fn test_round_trip_through_map(example: SparseVector) {
        let map: BTreeMap<u32, f64> = example.to_map();
        let rebuilt = SparseVector::from(map);
        assert_eq!(rebuilt.indices(), example.indices());
        assert_eq!(rebuilt.values(), example.values());
    }

    #[rstest]
    fn test_lp_error_surface() {
        let sv = SparseVector::new();
        assert_eq!(sv.lp(-1.0), Err(SparseVectorError::InvalidExponent(-1.0)));
        assert_eq!(sv.lp(1.0), Ok(0.0));
    }

    #[rstest]
    fn test_shared_across_threads(example: SparseVector) {
        let dense: [f64; 3] = [10.0, 0.0, -1.0];
        let results: Vec<f64> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| example.dot(&dense)))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert_eq!(results, vec![62.0; 4]);
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn test_serde_round_trip(example: SparseVector) {
        let json = serde_json::to_string(&example).unwrap();
        let parsed: SparseVector = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, example);
    }
}
