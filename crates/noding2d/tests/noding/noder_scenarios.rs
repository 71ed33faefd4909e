use super::string;
use approx::assert_relative_eq;
use noding2d::math::Point;
use noding2d::noding::snap::SnappingNoder;
use noding2d::noding::snapround::SnapRoundingNoder;
use noding2d::noding::{
    FastNodingValidator, IteratedNoder, McIndexNoder, Noder, NodingError, ScaledNoder,
    SegmentString, SimpleNoder, ValidatingNoder,
};
use noding2d::utils::PrecisionModel;

#[test]
fn crossing_diagonals_are_split_at_their_crossing() {
    let input = || {
        vec![
            string(&[[0.0, 0.0], [10.0, 10.0]], 'a'),
            string(&[[0.0, 10.0], [10.0, 0.0]], 'b'),
        ]
    };
    let center = Point::new(5.0, 5.0);

    let noders: Vec<Box<dyn Noder<char>>> = vec![
        Box::new(SimpleNoder::<char>::default()),
        Box::new(McIndexNoder::<char>::default()),
        Box::new(IteratedNoder::<char>::default()),
        Box::new(SnappingNoder::<char>::new(1.0e-6)),
        Box::new(SnapRoundingNoder::<char>::new(PrecisionModel::fixed(1.0)).unwrap()),
    ];

    for mut noder in noders {
        let result = noder.node(input()).unwrap();
        assert_eq!(result.len(), 4);
        assert!(result
            .iter()
            .all(|s| s.point(0) == center || s.point(s.len() - 1) == center));
        assert_eq!(result.iter().filter(|s| *s.data() == 'a').count(), 2);
        assert_eq!(result.iter().filter(|s| *s.data() == 'b').count(), 2);
    }
}

#[test]
fn iterated_noding_of_noded_input_takes_one_pass() {
    let input = vec![
        string(&[[0.0, 0.0], [5.0, 5.0]], 0),
        string(&[[5.0, 5.0], [10.0, 10.0]], 1),
        string(&[[0.0, 10.0], [5.0, 5.0], [10.0, 0.0]], 2),
    ];

    let mut noder = IteratedNoder::default();
    noder.compute_nodes(input).unwrap();
    assert_eq!(noder.iteration_count(), 1);
}

#[test]
fn iterated_noding_of_crossing_input_converges() {
    let input = vec![
        string(&[[0.0, 0.0], [10.0, 10.0]], 0),
        string(&[[0.0, 10.0], [10.0, 0.0]], 1),
        string(&[[0.0, 3.0], [10.0, 3.0]], 2),
    ];

    let mut noder = IteratedNoder::new(PrecisionModel::fixed(1.0));
    let result = noder.node(input).unwrap();
    assert!(noder.iteration_count() >= 2);
    assert!(FastNodingValidator::new(&result).is_valid());
}

#[test]
fn unit_scale_keeps_coordinates_bit_identical() {
    let input = vec![
        string(&[[0.1, 0.7], [3.3, 1.9]], 0),
        string(&[[0.25, 2.0], [0.25, -1.0]], 1),
    ];
    let expected: Vec<_> = McIndexNoder::default()
        .node(input.clone())
        .unwrap()
        .into_iter()
        .map(|s| s.into_points())
        .collect();

    let mut noder = ScaledNoder::new(McIndexNoder::default(), 1.0).unwrap();
    assert!(noder.is_integer_precision());
    let result: Vec<_> = noder
        .node(input)
        .unwrap()
        .into_iter()
        .map(|s| s.into_points())
        .collect();

    assert_eq!(result.len(), expected.len());
    for (a, b) in result.iter().flatten().zip(expected.iter().flatten()) {
        assert_eq!(a.x.to_bits(), b.x.to_bits());
        assert_eq!(a.y.to_bits(), b.y.to_bits());
    }
}

#[test]
fn scaled_snap_rounding() {
    let input = vec![
        string(&[[0.0, 0.0], [1.0, 0.3]], 0),
        string(&[[0.0, 0.3], [1.0, 0.0]], 1),
    ];

    let inner = SnapRoundingNoder::new(PrecisionModel::fixed(1.0)).unwrap();
    let mut noder = ScaledNoder::new(inner, 10.0).unwrap();
    let result = noder.node(input).unwrap();

    assert_eq!(result.len(), 4);
    assert!(FastNodingValidator::new(&result).is_valid());
    for pt in result.iter().flat_map(|s| s.points()) {
        assert_relative_eq!((pt.x * 10.0).round(), pt.x * 10.0, epsilon = 1.0e-9);
        assert_relative_eq!((pt.y * 10.0).round(), pt.y * 10.0, epsilon = 1.0e-9);
    }
}

#[test]
fn invalid_configurations_are_rejected() {
    assert!(matches!(
        ScaledNoder::new(McIndexNoder::<()>::default(), 0.0),
        Err(NodingError::ScaleFactor(_))
    ));
    assert!(matches!(
        SnapRoundingNoder::<()>::new(PrecisionModel::Floating),
        Err(NodingError::ScaleFactor(_))
    ));
}

#[test]
fn validating_a_correct_noder() {
    let input = vec![
        string(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0]], 0),
        string(&[[5.0, -5.0], [5.0, 5.0], [15.0, 5.0]], 1),
    ];

    let mut noder = ValidatingNoder::new(McIndexNoder::default());
    let result = noder.node(input).unwrap();
    assert_eq!(result.len(), 6);
}

#[test]
fn snapping_nodes_vertices_close_to_segments() {
    let near = Point::new(5.0, 1.0e-9);
    let input = vec![
        string(&[[0.0, 0.0], [10.0, 0.0]], 0),
        string(&[[near.x, near.y], [5.0, 10.0]], 1),
    ];

    let result = SnappingNoder::new(1.0e-6).node(input).unwrap();
    assert_eq!(result.len(), 3);

    // The horizontal chain is split at the nearby vertex, which is not moved.
    let split: Vec<_> = result.iter().filter(|s| *s.data() == 0).collect();
    assert_eq!(split.len(), 2);
    assert_eq!(split[0].point(1), near);
    assert_eq!(split[1].point(0), near);
}
