use crate::math::Real;
use crate::utils::hashmap::HashMap;

/// Error returned when reading a vertex that was never assigned a weight in
/// the channel.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("the vertex {0} has no weight assigned in this channel.")]
pub struct NoWeightAssigned(pub u32);

/// Read/write access to a scalar per-vertex weight channel.
///
/// A channel is a partial mapping from vertex index to a weight,
/// conventionally in `[0, 1]` (the range is not enforced here). Absent
/// entries mean "no weight assigned". Writing is always an unconditional
/// overwrite; no blend or accumulate mode exists at this level.
pub trait WeightChannel {
    /// The weight stored for `vertex`, or [`NoWeightAssigned`] if that vertex
    /// was never written.
    fn weight(&self, vertex: u32) -> Result<Real, NoWeightAssigned>;

    /// Overwrites the weight stored for `vertex`.
    fn set_weight(&mut self, vertex: u32, weight: Real);
}

/// A named, sparsely populated weight channel.
///
/// This is the in-memory channel representation used by the tests and by
/// hosts that don't bring their own storage. Hosts with native vertex-group
/// storage implement [`WeightChannel`] directly instead.
#[derive(Clone, Debug, Default)]
pub struct VertexGroup {
    name: String,
    weights: HashMap<u32, Real>,
}

impl VertexGroup {
    /// Creates an empty channel with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            weights: HashMap::default(),
        }
    }

    /// Creates a channel pre-populated from `(vertex, weight)` pairs.
    pub fn from_weights(
        name: impl Into<String>,
        weights: impl IntoIterator<Item = (u32, Real)>,
    ) -> Self {
        Self {
            name: name.into(),
            weights: weights.into_iter().collect(),
        }
    }

    /// The channel name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of vertices with an assigned weight.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no vertex has an assigned weight.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Iterates over the assigned `(vertex, weight)` pairs, in no particular
    /// order.
    pub fn assigned(&self) -> impl Iterator<Item = (u32, Real)> + '_ {
        self.weights.iter().map(|(&vertex, &weight)| (vertex, weight))
    }
}

impl WeightChannel for VertexGroup {
    fn weight(&self, vertex: u32) -> Result<Real, NoWeightAssigned> {
        self.weights
            .get(&vertex)
            .copied()
            .ok_or(NoWeightAssigned(vertex))
    }

    fn set_weight(&mut self, vertex: u32, weight: Real) {
        let _ = self.weights.insert(vertex, weight);
    }
}
