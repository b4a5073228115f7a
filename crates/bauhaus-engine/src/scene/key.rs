/// Z-ordering layer for draw items.
///
/// Higher values appear on top of lower values.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Default)]
pub struct ZIndex(pub i32);

/// Stable sort key for draw items.
///
/// Field order drives the derived ordering:
/// 1) `z` ascending (back-to-front)
/// 2) `order` ascending (insertion order within a layer)
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct SortKey {
    pub z: ZIndex,
    pub order: u32,
}

impl SortKey {
    #[inline]
    pub const fn new(z: ZIndex, order: u32) -> Self {
        Self { z, order }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layer_dominates_insertion_order() {
        let back_late = SortKey::new(ZIndex(0), 9);
        let front_early = SortKey::new(ZIndex(1), 0);
        assert!(back_late < front_early);
    }

    #[test]
    fn insertion_order_breaks_ties() {
        assert!(SortKey::new(ZIndex(2), 1) < SortKey::new(ZIndex(2), 2));
    }
}
