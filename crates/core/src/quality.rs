//! Quality bounds shared by every item category.

/// Upper bound for the quality of ordinary (non-legendary) items.
///
/// Only enforced when an item is constructed and as the guard in front of
/// Aged Brie's increase. Rule outputs are not re-clamped.
pub const MAX_QUALITY: i32 = 50;

/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// Caps `quality` at [`MAX_QUALITY`].
///
/// There is no lower bound: negative input passes through unchanged.
pub fn cap_quality(quality: i32) -> i32 {
    quality.min(MAX_QUALITY)
}
