use crate::coords::Rotation;

use super::{DrawCmd, SortKey, ZIndex};

/// A single draw item: sort key + command + rigid rotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawItem {
    pub key: SortKey,
    pub cmd: DrawCmd,
    /// Rotation applied to the whole command. `None` = drawn as recorded.
    pub rotation: Option<Rotation>,
}

/// Recorded draw stream for one rendered frame.
///
/// - `push()` is O(1)
/// - paint-order iteration reuses an internal index buffer
///
/// # Rotation groups
///
/// Use [`push_rotation`](Self::push_rotation) / [`pop_rotation`](Self::pop_rotation)
/// to rotate a run of commands as one rigid unit:
///
/// ```
/// # use bauhaus_engine::coords::{Rotation, Vec2};
/// # use bauhaus_engine::scene::DrawList;
/// let mut list = DrawList::new();
/// list.push_rotation(Rotation::new(90.0, Vec2::new(50.0, 50.0)));
/// // ... push the needle ...
/// list.pop_rotation();
/// ```
///
/// Nested rotations about the same pivot add up. A nested rotation about a
/// different pivot replaces the outer one for its children.
#[derive(Debug, Default)]
pub struct DrawList {
    items: Vec<DrawItem>,
    next_order: u32,

    sorted_indices: Vec<usize>,
    sorted_dirty: bool,

    /// Top is the effective rotation for newly pushed items.
    rotation_stack: Vec<Rotation>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items and the rotation stack. Keeps allocated capacity.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
        self.next_order = 0;
        self.sorted_dirty = true;
        self.sorted_indices.clear();
        self.rotation_stack.clear();
    }

    /// Returns items in insertion order.
    #[inline]
    pub fn items(&self) -> &[DrawItem] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pushes a draw command with the given z-index.
    ///
    /// The item inherits the current rotation from the rotation stack.
    #[inline]
    pub fn push(&mut self, z: ZIndex, cmd: DrawCmd) {
        let order = self.next_order;
        self.next_order = self.next_order.wrapping_add(1);

        self.items.push(DrawItem {
            key: SortKey::new(z, order),
            cmd,
            rotation: self.rotation_stack.last().copied(),
        });

        self.sorted_dirty = true;
    }

    /// Begins a rotation group. Calls must be balanced with [`pop_rotation`](Self::pop_rotation).
    #[inline]
    pub fn push_rotation(&mut self, rotation: Rotation) {
        let effective = match self.rotation_stack.last() {
            Some(parent) if parent.pivot == rotation.pivot => {
                Rotation::new(parent.degrees + rotation.degrees, rotation.pivot)
            }
            _ => rotation,
        };
        self.rotation_stack.push(effective);
    }

    /// Ends the most recent rotation group.
    ///
    /// # Panics
    /// Panics (debug only) if called without a matching `push_rotation`.
    #[inline]
    pub fn pop_rotation(&mut self) {
        debug_assert!(
            !self.rotation_stack.is_empty(),
            "pop_rotation called without matching push_rotation"
        );
        self.rotation_stack.pop();
    }

    /// Iterates items in paint order (back-to-front) without cloning commands.
    pub fn iter_in_paint_order(&mut self) -> impl Iterator<Item = &DrawItem> {
        if self.sorted_dirty {
            self.rebuild_sorted_indices();
        }

        self.sorted_indices.iter().map(|&i| &self.items[i])
    }

    /// Number of recorded commands of the given [`DrawCmd::kind`].
    pub fn count_kind(&self, kind: &str) -> usize {
        self.items.iter().filter(|it| it.cmd.kind() == kind).count()
    }

    fn rebuild_sorted_indices(&mut self) {
        self.sorted_indices.clear();
        self.sorted_indices.extend(0..self.items.len());

        let items = &self.items;
        self.sorted_indices.sort_by_key(|&i| items[i].key);

        self.sorted_dirty = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::paint::Color;
    use crate::scene::CircleCmd;

    fn dot(list: &mut DrawList, z: i32, x: f32) {
        list.push_circle(ZIndex(z), CircleCmd::solid(Vec2::new(x, 0.0), 1.0, Color::black()));
    }

    fn xs(list: &mut DrawList) -> Vec<f32> {
        list.iter_in_paint_order()
            .map(|it| match &it.cmd {
                DrawCmd::Circle(c) => c.center.x,
                _ => unreachable!(),
            })
            .collect()
    }

    #[test]
    fn paint_order_is_z_then_insertion() {
        let mut list = DrawList::new();
        dot(&mut list, 2, 0.0);
        dot(&mut list, 0, 1.0);
        dot(&mut list, 2, 2.0);
        dot(&mut list, 1, 3.0);
        assert_eq!(xs(&mut list), vec![1.0, 3.0, 0.0, 2.0]);
    }

    #[test]
    fn rotation_applies_only_inside_group() {
        let pivot = Vec2::new(5.0, 5.0);
        let mut list = DrawList::new();
        dot(&mut list, 0, 0.0);
        list.push_rotation(Rotation::new(30.0, pivot));
        dot(&mut list, 0, 1.0);
        list.push_rotation(Rotation::new(15.0, pivot));
        dot(&mut list, 0, 2.0);
        list.pop_rotation();
        list.pop_rotation();
        dot(&mut list, 0, 3.0);

        let rot: Vec<Option<f32>> =
            list.items().iter().map(|it| it.rotation.map(|r| r.degrees)).collect();
        assert_eq!(rot, vec![None, Some(30.0), Some(45.0), None]);
    }

    #[test]
    fn clear_resets_everything() {
        let mut list = DrawList::new();
        list.push_rotation(Rotation::new(10.0, Vec2::zero()));
        dot(&mut list, 0, 0.0);
        list.clear();
        assert!(list.is_empty());
        dot(&mut list, 0, 1.0);
        assert_eq!(list.items()[0].rotation, None);
        assert_eq!(list.items()[0].key.order, 0);
    }
}
