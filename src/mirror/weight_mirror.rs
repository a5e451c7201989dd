use crate::math::{Point, Real};
use crate::mirror::brute_force::mirror_brute_force;
use crate::mirror::bucketed::mirror_bucketed;
use crate::mirror::{MatchingStrategy, MirrorParams};
use crate::weights::{NoActiveChannel, VertexGroupSet, WeightChannel};

/// A problem with a weight-mirroring request, detected before any weight is
/// written.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum MirrorError {
    /// No weight channel is active on the mesh.
    #[error(transparent)]
    NoActiveChannel(#[from] NoActiveChannel),
    /// The margin must be finite and non-negative.
    #[error("the mirror margin must be finite and non-negative, got {0}.")]
    InvalidMargin(Real),
    /// The bucket resolution lies outside the accepted range.
    #[error("the bucket resolution must lie within [1, 30], got {0}.")]
    InvalidResolution(u32),
}

/// Counters describing what one mirroring pass did.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MirrorOutcome {
    /// Mirror pairs that received a mirrored weight copy.
    pub matched: usize,
    /// Target-side vertices whose final write was the `0.0` fallback, either
    /// because their pair's source carried no weight or because no source
    /// ever showed up.
    pub defaulted: usize,
    /// Vertices that finished the pass without a symmetric partner. For the
    /// brute-force matcher the target-side portion of these holds the `0.0`
    /// fallback; the bucketed matcher leaves all of them untouched.
    pub unmatched: usize,
    /// Refinement passes executed. Always `1` for the brute-force matcher.
    pub passes: usize,
}

/// Mirrors the weights of `channel` across a symmetry plane of the mesh.
///
/// The configuration is validated first; nothing is written when it is
/// rejected. The pass itself runs to completion synchronously and mutates
/// `channel` in place as pairs resolve, with no rollback on interruption —
/// any undo guarantee belongs to the host. Vertices left without a partner
/// are reported through the returned [`MirrorOutcome`] and a `log::warn!`.
pub fn mirror_weights<W: WeightChannel>(
    vertices: &[Point<Real>],
    channel: &mut W,
    params: &MirrorParams,
) -> Result<MirrorOutcome, MirrorError> {
    params.validate()?;

    let outcome = match params.strategy {
        MatchingStrategy::BruteForce => mirror_brute_force(vertices, channel, params),
        MatchingStrategy::Bucketed => mirror_bucketed(vertices, channel, params),
    };

    if outcome.unmatched > 0 {
        log::warn!(
            "weight mirroring left {} of {} vertices without a symmetric partner",
            outcome.unmatched,
            vertices.len()
        );
    }

    Ok(outcome)
}

/// Mirrors the weights of the mesh's active channel.
///
/// Fails with [`MirrorError::NoActiveChannel`] before touching any weight if
/// no channel is active.
pub fn mirror_active_group(
    vertices: &[Point<Real>],
    groups: &mut VertexGroupSet,
    params: &MirrorParams,
) -> Result<MirrorOutcome, MirrorError> {
    let channel = groups.active_mut()?;
    mirror_weights(vertices, channel, params)
}
