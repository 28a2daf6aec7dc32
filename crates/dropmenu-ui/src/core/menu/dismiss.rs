//! Outside-pointer dismissal decision, kept DOM-free.

/// Where a document-level pointer event landed relative to a menu region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerOrigin {
    /// Target is the region or one of its descendants.
    Inside,
    /// Target is elsewhere in the document.
    Outside,
    /// Target is not a DOM node or the region is not mounted.
    Unknown,
}

impl PointerOrigin {
    /// Classify from a containment check, `None` when it could not be performed.
    #[must_use]
    pub const fn from_containment(contains: Option<bool>) -> Self {
        match contains {
            Some(true) => Self::Inside,
            Some(false) => Self::Outside,
            None => Self::Unknown,
        }
    }
}

/// Whether a pointer event should close an open overlay.
///
/// Unknown targets count as outside, matching `Node.contains(null) == false`.
#[must_use]
pub const fn dismisses(open: bool, origin: PointerOrigin) -> bool {
    open && !matches!(origin, PointerOrigin::Inside)
}
