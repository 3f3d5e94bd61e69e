//! Pointer-capability detection and rendering-strategy selection.
//!
//! Terminals cannot self-report whether the primary pointing mechanism is
//! coarse (touch-like) or fine, so the capability query is a collaborator the
//! host supplies via [`PointerQuery`]. Returning `None` models a host where
//! the query is unavailable.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerClass {
    /// Precise positioning (mouse, trackpad).
    Fine,
    /// Imprecise positioning (touch).
    Coarse,
}

pub trait PointerQuery {
    fn pointer_class(&self) -> Option<PointerClass>;
}

impl<F> PointerQuery for F
where
    F: Fn() -> Option<PointerClass>,
{
    fn pointer_class(&self) -> Option<PointerClass> {
        self()
    }
}

/// Rendering strategy, fixed for the widget's whole lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Explicit previous/next controls driving an index.
    Pointer,
    /// Snap-aligned scrolling with no controls and no index.
    Touch,
}

/// Chooses the strategy exactly once, at mount time.
///
/// `with_controls` forces [`Strategy::Pointer`] regardless of the device. An
/// unavailable query (`None`) also falls back to Pointer, which always
/// renders visible controls.
pub fn select_strategy(query: &dyn PointerQuery, with_controls: bool) -> Strategy {
    if with_controls {
        return Strategy::Pointer;
    }
    match query.pointer_class() {
        Some(PointerClass::Coarse) => Strategy::Touch,
        Some(PointerClass::Fine) | None => Strategy::Pointer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coarse_pointer_selects_touch() {
        let q = || Some(PointerClass::Coarse);
        assert_eq!(select_strategy(&q, false), Strategy::Touch);
    }

    #[test]
    fn fine_pointer_selects_pointer() {
        let q = || Some(PointerClass::Fine);
        assert_eq!(select_strategy(&q, false), Strategy::Pointer);
    }

    #[test]
    fn with_controls_overrides_coarse_device() {
        let q = || Some(PointerClass::Coarse);
        assert_eq!(select_strategy(&q, true), Strategy::Pointer);
    }

    #[test]
    fn missing_query_falls_back_to_pointer() {
        let q = || None;
        assert_eq!(select_strategy(&q, false), Strategy::Pointer);
    }
}
