use crate::math::{Point, Real};
use crate::mirror::symmetry::{is_mirror_pair, plane_side, PlaneSide};
use crate::mirror::weight_mirror::MirrorOutcome;
use crate::mirror::MirrorParams;
use crate::weights::WeightChannel;

/// Mirrors weights by scanning the vertices once and pairing each one against
/// the still-unmatched vertices of the opposite side.
///
/// Vertices are visited in ascending index order. A source-side vertex with
/// no stored weight is skipped entirely. A target-side vertex with no pending
/// symmetric source is written the `0.0` default and kept pending, since a
/// later source vertex may still resolve it. When several pending candidates
/// are symmetric to the same vertex, the earliest-visited one wins.
///
/// Worst case `O(n²)` when few matches resolve early; this search is exact
/// and never misses a pair accepted by [`is_mirror_pair`].
pub fn mirror_brute_force<W: WeightChannel>(
    vertices: &[Point<Real>],
    channel: &mut W,
    params: &MirrorParams,
) -> MirrorOutcome {
    let axis = params.axis.index();
    let source_side = if params.negative {
        PlaneSide::Negative
    } else {
        PlaneSide::Positive
    };

    // Visited vertices still waiting for a partner. Every pending source
    // carries the weight read when it was visited; source-side vertices are
    // never written during the scan, so the stored value cannot go stale.
    let mut pending_sources: Vec<(u32, Real)> = Vec::new();
    let mut pending_targets: Vec<u32> = Vec::new();

    let mut matched = 0;

    for (index, point) in vertices.iter().enumerate() {
        let index = index as u32;
        let side = plane_side(point[axis], params.margin);

        if side == PlaneSide::OnPlane {
            continue;
        }

        if side == source_side {
            let Ok(weight) = channel.weight(index) else {
                // Nothing to propagate from this vertex; it never goes
                // pending either.
                continue;
            };

            let found = pending_targets
                .iter()
                .position(|&t| is_mirror_pair(params.axis, params.margin, &vertices[t as usize], point));

            match found {
                Some(slot) => {
                    let target = pending_targets.remove(slot);
                    channel.set_weight(target, weight);
                    matched += 1;
                }
                None => pending_sources.push((index, weight)),
            }
        } else {
            let found = pending_sources
                .iter()
                .position(|&(s, _)| is_mirror_pair(params.axis, params.margin, &vertices[s as usize], point));

            match found {
                Some(slot) => {
                    let (_, weight) = pending_sources.remove(slot);
                    channel.set_weight(index, weight);
                    matched += 1;
                }
                None => {
                    channel.set_weight(index, 0.0);
                    pending_targets.push(index);
                }
            }
        }
    }

    MirrorOutcome {
        matched,
        defaulted: pending_targets.len(),
        unmatched: pending_sources.len() + pending_targets.len(),
        passes: 1,
    }
}
