// Hit-testing the marker against the gallery slots.
use crate::types::{HoverState, Point, Rect};

/// First slot (in catalog order) whose base-size rectangle contains `p`.
/// Slots are expected to be the unclipped, un-enlarged output of `layout`,
/// so this frame's hover never depends on how the previous frame was drawn.
pub fn resolve_hover(p: Point, slots: &[Rect]) -> HoverState {
    slots.iter().position(|r| r.contains(p))
}
