//! Per-vertex scalar weight channels and their access contract.

pub use self::group_set::{NoActiveChannel, VertexGroupSet};
pub use self::vertex_group::{NoWeightAssigned, VertexGroup, WeightChannel};

mod group_set;
mod vertex_group;
