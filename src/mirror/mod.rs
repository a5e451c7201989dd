//! Mirroring of per-vertex weights across a symmetry plane of the mesh.

pub use self::brute_force::mirror_brute_force;
pub use self::bucketed::mirror_bucketed;
pub use self::params::{
    Axis, MatchingStrategy, MirrorParams, MAX_RESOLUTION, MIN_RESOLUTION,
};
pub use self::symmetry::{is_mirror_pair, plane_side, select_side, PlaneSide};
pub use self::weight_mirror::{
    mirror_active_group, mirror_weights, MirrorError, MirrorOutcome,
};

mod brute_force;
mod bucketed;
mod params;
mod symmetry;
mod weight_mirror;
