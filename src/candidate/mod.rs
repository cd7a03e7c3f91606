//! Match rectangles and the deduplicating registry.

pub(crate) mod rect;
pub(crate) mod registry;
