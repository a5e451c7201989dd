use crate::math::{Point, Real, DIM};
use crate::mirror::symmetry::{plane_side, PlaneSide};
use crate::mirror::weight_mirror::MirrorOutcome;
use crate::mirror::MirrorParams;
use crate::utils::hashmap::HashMap;
use crate::utils::hashset::HashSet;
use crate::weights::WeightChannel;
use na::distance_squared;

#[derive(Default)]
struct Bucket {
    negative: Vec<u32>,
    positive: Vec<u32>,
}

/// Mirrors weights by bucketing vertices on their quantized squared distance
/// to a reference point lying in the symmetry plane.
///
/// Mirror-image vertices are equidistant from any point of the plane, so true
/// pairs are highly likely to share a bucket. A bucket holding exactly one
/// vertex per side resolves as a pair; ambiguous buckets are retried on the
/// next pass with a new reference point taken from the unresolved vertices.
/// The loop stops once every vertex is resolved, or as soon as a pass makes
/// no progress — whatever is still unresolved at that point is left unmatched
/// and untouched.
///
/// The bucket key is an exact quantization of `distance² · 2^resolution`, not
/// a margin-aware comparison: two vertices within `margin` of perfect
/// symmetry can still land in adjacent buckets and stay unmatched. Raising
/// `resolution` narrows the buckets, trading fewer false collisions for more
/// of those near-boundary misses.
pub fn mirror_bucketed<W: WeightChannel>(
    vertices: &[Point<Real>],
    channel: &mut W,
    params: &MirrorParams,
) -> MirrorOutcome {
    let axis = params.axis.index();
    let mut outcome = MirrorOutcome::default();

    // On-plane vertices have no distinct mirror partner; they never enter a
    // bucket and are never written.
    let mut working: Vec<u32> = (0..vertices.len() as u32)
        .filter(|&i| plane_side(vertices[i as usize][axis], params.margin) != PlaneSide::OnPlane)
        .collect();

    if working.is_empty() {
        return outcome;
    }

    // Initial reference point in the plane: the maximum observed coordinate
    // along the two free axes, zero along the symmetry axis.
    let mut reference = Point::origin();
    for k in 0..DIM {
        if k != axis {
            reference[k] = vertices
                .iter()
                .fold(Real::MIN, |max, pt| max.max(pt[k]));
        }
    }

    let scale = (1u64 << params.resolution) as Real;

    loop {
        outcome.passes += 1;

        let mut buckets: HashMap<i64, Bucket> = HashMap::default();
        for &i in &working {
            let d2 = distance_squared(&vertices[i as usize], &reference);
            let key = (d2 * scale).round() as i64;
            let bucket = buckets.entry(key).or_default();

            match plane_side(vertices[i as usize][axis], params.margin) {
                PlaneSide::Negative => bucket.negative.push(i),
                PlaneSide::Positive => bucket.positive.push(i),
                PlaneSide::OnPlane => unreachable!("on-plane vertices are filtered out"),
            }
        }

        let mut resolved: HashSet<u32> = HashSet::default();
        for bucket in buckets.values() {
            if let ([negative], [positive]) = (&bucket.negative[..], &bucket.positive[..]) {
                let (source, target) = if params.negative {
                    (*negative, *positive)
                } else {
                    (*positive, *negative)
                };

                match channel.weight(source) {
                    Ok(weight) => {
                        channel.set_weight(target, weight);
                        outcome.matched += 1;
                    }
                    Err(_) => {
                        channel.set_weight(target, 0.0);
                        outcome.defaulted += 1;
                    }
                }

                let _ = resolved.insert(*negative);
                let _ = resolved.insert(*positive);
            }
        }

        // Rebuild in ascending index order so the next reference point (and
        // therefore the whole run) is independent of hash iteration order.
        let next: Vec<u32> = working
            .iter()
            .copied()
            .filter(|i| !resolved.contains(i))
            .collect();

        if next.is_empty() {
            break;
        }
        if next.len() == working.len() {
            // Fixed point: the remaining buckets are permanently ambiguous.
            outcome.unmatched = next.len();
            break;
        }

        working = next;

        // Move the reference to the first unresolved vertex, projected onto
        // the plane, and retry the leftovers.
        reference = vertices[working[0] as usize];
        reference[axis] = 0.0;
    }

    outcome
}
