use crate::weights::VertexGroup;

/// Error returned when an operation needs an active weight channel but none
/// is set on the mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
#[error("no weight channel is active on this mesh.")]
pub struct NoActiveChannel;

/// The ordered list of weight channels attached to one mesh, with at most one
/// of them active.
///
/// Channel lifecycle (creation, deletion, renaming) belongs to the host; this
/// type only tracks which channel the next operation applies to. The first
/// channel pushed becomes active by default, matching the usual host
/// behavior of activating a freshly created group.
#[derive(Clone, Debug, Default)]
pub struct VertexGroupSet {
    groups: Vec<VertexGroup>,
    active: Option<usize>,
}

impl VertexGroupSet {
    /// Creates an empty channel list with no active channel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a channel and returns its index. The first channel appended
    /// becomes the active one.
    pub fn push(&mut self, group: VertexGroup) -> usize {
        self.groups.push(group);
        let index = self.groups.len() - 1;
        if self.active.is_none() {
            self.active = Some(index);
        }
        index
    }

    /// Makes the channel at `index` the active one.
    ///
    /// # Panics
    /// Panics if `index` is out of range.
    pub fn set_active(&mut self, index: usize) {
        assert!(index < self.groups.len(), "channel index out of range");
        self.active = Some(index);
    }

    /// Clears the active channel without removing any channel.
    pub fn clear_active(&mut self) {
        self.active = None;
    }

    /// The number of channels.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether the list contains no channel.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The channel at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&VertexGroup> {
        self.groups.get(index)
    }

    /// The active channel.
    pub fn active(&self) -> Result<&VertexGroup, NoActiveChannel> {
        self.active
            .and_then(|i| self.groups.get(i))
            .ok_or(NoActiveChannel)
    }

    /// The active channel, mutably.
    pub fn active_mut(&mut self) -> Result<&mut VertexGroup, NoActiveChannel> {
        match self.active {
            Some(i) => self.groups.get_mut(i).ok_or(NoActiveChannel),
            None => Err(NoActiveChannel),
        }
    }
}
