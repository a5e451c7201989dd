use vgmirror3d::math::{Point, Real};
use vgmirror3d::mirror::{mirror_weights, Axis, MatchingStrategy, MirrorParams};
use vgmirror3d::weights::{VertexGroup, WeightChannel};

/// Pairs of mirror vertices: even indices on the negative side, odd indices
/// on the positive side.
fn mirror_pairs() -> Vec<Point<Real>> {
    vec![
        Point::new(-1.0, 0.5, 0.0),
        Point::new(1.0, 0.5, 0.0),
        Point::new(-2.0, -0.25, 1.0),
        Point::new(2.0, -0.25, 1.0),
        Point::new(-0.5, 3.0, -1.5),
        Point::new(0.5, 3.0, -1.5),
    ]
}

/// Relabeling the two sides is symmetric: seeding the negative side and
/// mirroring with `negative = true` must produce the mirror image of seeding
/// the positive side and mirroring with `negative = false`.
#[test]
fn direction_flag_relabels_the_sides() {
    for strategy in [MatchingStrategy::BruteForce, MatchingStrategy::Bucketed] {
        let vertices = mirror_pairs();

        let mut seeded_negative = VertexGroup::from_weights(
            "deform",
            [(0, 0.1), (2, 0.6), (4, 0.9)],
        );
        let mut seeded_positive = VertexGroup::from_weights(
            "deform",
            [(1, 0.1), (3, 0.6), (5, 0.9)],
        );

        let params = MirrorParams {
            axis: Axis::X,
            margin: 1.0e-4,
            negative: true,
            strategy,
            resolution: 8,
        };
        let forward = mirror_weights(&vertices, &mut seeded_negative, &params).unwrap();

        let params = MirrorParams {
            negative: false,
            ..params
        };
        let backward = mirror_weights(&vertices, &mut seeded_positive, &params).unwrap();

        assert_eq!(forward, backward);

        // Every vertex ends with the weight its mirror image got in the
        // opposite run.
        for pair in 0..3u32 {
            let negative_vertex = 2 * pair;
            let positive_vertex = 2 * pair + 1;

            assert_eq!(
                seeded_negative.weight(positive_vertex),
                seeded_positive.weight(negative_vertex),
            );
            assert_eq!(
                seeded_negative.weight(negative_vertex),
                seeded_positive.weight(positive_vertex),
            );
        }
    }
}

#[test]
fn both_strategies_agree_on_a_clean_symmetric_mesh() {
    let vertices = mirror_pairs();
    let seed = [(0u32, 0.2), (2, 0.4), (4, 0.8)];

    let mut brute = VertexGroup::from_weights("deform", seed);
    let mut bucketed = VertexGroup::from_weights("deform", seed);

    let params = MirrorParams {
        axis: Axis::X,
        margin: 1.0e-4,
        negative: true,
        strategy: MatchingStrategy::BruteForce,
        resolution: 8,
    };
    let _ = mirror_weights(&vertices, &mut brute, &params).unwrap();

    let params = MirrorParams {
        strategy: MatchingStrategy::Bucketed,
        ..params
    };
    let _ = mirror_weights(&vertices, &mut bucketed, &params).unwrap();

    for i in 0..vertices.len() as u32 {
        assert_eq!(brute.weight(i), bucketed.weight(i));
    }
}
