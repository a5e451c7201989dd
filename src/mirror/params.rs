use crate::math::Real;
use crate::mirror::weight_mirror::MirrorError;

/// The smallest accepted bucket quantization exponent.
pub const MIN_RESOLUTION: u32 = 1;
/// The largest accepted bucket quantization exponent.
pub const MAX_RESOLUTION: u32 = 30;

/// The coordinate axis perpendicular to the symmetry plane.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Mirror across the `x = 0` plane.
    X,
    /// Mirror across the `y = 0` plane.
    Y,
    /// Mirror across the `z = 0` plane.
    Z,
}

impl Axis {
    /// The coordinate offset of this axis.
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }
}

/// Selects how mirror-image vertex pairs are searched for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MatchingStrategy {
    /// Exact pairwise search against the pending vertices. Quadratic in the
    /// worst case, but never misses a pair the symmetry predicate accepts.
    BruteForce,
    /// Quantized-distance bucketing with iterative refinement. Usually much
    /// faster, at the cost of possibly leaving near-boundary pairs unmatched.
    Bucketed,
}

/// Configuration of one weight-mirroring operation.
///
/// An immutable value passed to the operation at call time; nothing here is
/// persisted between calls.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MirrorParams {
    /// The axis perpendicular to the symmetry plane.
    pub axis: Axis,
    /// Tolerance for the coordinate equality checks. Two coordinates are
    /// considered equal when their absolute difference is strictly below
    /// this value.
    pub margin: Real,
    /// When `true`, weights flow from the negative-axis side to the positive
    /// side; when `false`, from positive to negative.
    pub negative: bool,
    /// The pair-search strategy to run.
    pub strategy: MatchingStrategy,
    /// Bucket quantization exponent in `[MIN_RESOLUTION, MAX_RESOLUTION]`.
    /// Squared distances are scaled by `2^resolution` before rounding to a
    /// bucket key. Only used by [`MatchingStrategy::Bucketed`].
    pub resolution: u32,
}

impl Default for MirrorParams {
    fn default() -> Self {
        Self {
            axis: Axis::X,
            margin: 1.0e-5,
            negative: false,
            strategy: MatchingStrategy::BruteForce,
            resolution: 10,
        }
    }
}

impl MirrorParams {
    /// Checks that this configuration is usable, without mutating anything.
    pub fn validate(&self) -> Result<(), MirrorError> {
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(MirrorError::InvalidMargin(self.margin));
        }

        if self.strategy == MatchingStrategy::Bucketed
            && (self.resolution < MIN_RESOLUTION || self.resolution > MAX_RESOLUTION)
        {
            return Err(MirrorError::InvalidResolution(self.resolution));
        }

        Ok(())
    }
}
