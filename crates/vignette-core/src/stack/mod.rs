//! Stack groups and transfers between them
//!
//! A [`StackGroup`] is an ordered pile of entities sharing one local origin.
//! [`StackTable`] owns several groups plus the entities currently flying
//! between them in root space.

mod transfer;

pub use transfer::{Flight, FlightId, Placement, StackTable};

use crate::geometry::Point;

/// Ordered pile of entities anchored at a root-space origin
///
/// Slot `i` sits `i * slot_step` above the origin. Entities are pushed and
/// popped at the top only, so indices stay contiguous.
#[derive(Debug, Clone)]
pub struct StackGroup<E> {
    origin: Point,
    slot_step: f64,
    entities: Vec<E>,
}

impl<E> StackGroup<E> {
    pub fn new(origin: Point, slot_step: f64) -> Self {
        Self {
            origin,
            slot_step,
            entities: Vec::new(),
        }
    }

    /// Put an entity on top; returns its slot index
    pub fn push(&mut self, entity: E) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn pop(&mut self) -> Option<E> {
        self.entities.pop()
    }

    pub fn peek(&self) -> Option<&E> {
        self.entities.last()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn slot_step(&self) -> f64 {
        self.slot_step
    }

    /// Local offset of slot `index`
    #[inline]
    pub fn slot_offset(&self, index: usize) -> Point {
        Point::new(0.0, -(index as f64) * self.slot_step)
    }

    #[inline]
    pub fn to_global(&self, local: Point) -> Point {
        self.origin + local
    }

    #[inline]
    pub fn to_local(&self, global: Point) -> Point {
        global - self.origin
    }

    /// Entities bottom to top with their root-space positions
    pub fn iter(&self) -> impl Iterator<Item = (&E, Point)> + '_ {
        self.entities
            .iter()
            .enumerate()
            .map(move |(index, entity)| (entity, self.to_global(self.slot_offset(index))))
    }

    pub fn clear(&mut self) {
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop_top_only() {
        let mut group = StackGroup::new(Point::new(100.0, 400.0), 1.0);
        assert_eq!(group.push('a'), 0);
        assert_eq!(group.push('b'), 1);
        assert_eq!(group.peek(), Some(&'b'));
        assert_eq!(group.pop(), Some('b'));
        assert_eq!(group.len(), 1);
        assert_eq!(group.pop(), Some('a'));
        assert_eq!(group.pop(), None);
    }

    #[test]
    fn test_slots_stack_upwards() {
        let mut group = StackGroup::new(Point::new(100.0, 400.0), 2.0);
        for i in 0..3 {
            group.push(i);
        }

        let positions: Vec<Point> = group.iter().map(|(_, p)| p).collect();
        assert_eq!(
            positions,
            vec![
                Point::new(100.0, 400.0),
                Point::new(100.0, 398.0),
                Point::new(100.0, 396.0),
            ]
        );
    }

    #[test]
    fn test_local_global_roundtrip() {
        let group: StackGroup<()> = StackGroup::new(Point::new(250.0, 400.0), 1.0);
        let local = Point::new(3.0, -7.0);
        let global = group.to_global(local);
        assert_eq!(global, Point::new(253.0, 393.0));
        assert_eq!(group.to_local(global), local);
    }
}
