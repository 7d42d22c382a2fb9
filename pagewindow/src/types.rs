use alloc::string::String;

/// The scroll trend driving which edge of the window is extended or trimmed.
///
/// `Stop` is the post-upward-step cooldown, cleared only by a fresh scroll
/// observation. It is distinct from "no scroll yet", which defaults to `Down`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Default for Direction {
    fn default() -> Self {
        Self::Down
    }
}

/// The edge of the visual list a mount or evict touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Edge {
    Top,
    Bottom,
}

/// One image extracted from an archive.
///
/// Page numbers are 1-based and contiguous; `source_index` is the opaque key
/// the page source uses for random-access slice fetches.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page {
    pub page_number: usize,
    pub name: String,
    pub source_index: usize,
}

impl Page {
    pub fn new(page_number: usize, name: impl Into<String>, source_index: usize) -> Self {
        Self {
            page_number,
            name: name.into(),
            source_index,
        }
    }
}

/// A request to materialize one page at an edge of the visual list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MountRequest {
    pub page_number: usize,
    pub edge: Edge,
}

/// A request to destroy one mounted page and release its backing resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EvictRequest {
    pub page_number: usize,
    pub edge: Edge,
}

/// The structural changes produced by one policy step.
///
/// At most one mount and at most one evict per step; both may be present in
/// the same step (the window bound is soft, see [`crate::Pager::step`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepOutcome {
    pub mount: Option<MountRequest>,
    pub evict: Option<EvictRequest>,
}

impl StepOutcome {
    pub fn is_noop(&self) -> bool {
        self.mount.is_none() && self.evict.is_none()
    }
}
