//! Moving the top entity of one group onto another
//!
//! A transfer detaches the entity, flies it in root space along a straight
//! line driven by a single 0..1 tween, then pushes it onto the target group
//! where its local offset is derived from the slot it lands in.
//!
//! Flights heading to the same group attach in launch order. A flight that
//! arrives early waits at its reserved end point until every flight launched
//! before it has attached, so the slot it reserved is the slot it gets.

use tracing::debug;

use super::StackGroup;
use crate::animation::timing::is_valid_span;
use crate::animation::TweenScheduler;
use crate::geometry::Point;
use crate::{Error, Result};

/// Identifies one entity in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightId(u64);

/// Entity detached from its group and held in root space
#[derive(Debug, Clone)]
pub struct Flight<E> {
    pub id: FlightId,
    pub entity: E,
    pub source: usize,
    pub target: usize,
    pub start: Point,
    pub end: Point,
    /// Current root-space position
    pub position: Point,
    /// Reached `end` and waiting for earlier flights to the same group
    pub arrived: bool,
}

/// Where an entity currently is, for rendering
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement<'a, E> {
    pub entity: &'a E,
    /// Root-space position
    pub position: Point,
    /// Paint order; higher is drawn later
    pub z: usize,
    /// Owning group, `None` while flying
    pub group: Option<usize>,
}

impl<E> Placement<'_, E> {
    #[inline]
    pub fn in_flight(&self) -> bool {
        self.group.is_none()
    }
}

/// Groups plus the entities flying between them
#[derive(Debug, Clone)]
pub struct StackTable<E> {
    groups: Vec<StackGroup<E>>,
    flights: Vec<Flight<E>>,
    next_flight: u64,
}

impl<E> Default for StackTable<E> {
    fn default() -> Self {
        Self {
            groups: Vec::new(),
            flights: Vec::new(),
            next_flight: 0,
        }
    }
}

impl<E: 'static> StackTable<E> {
    pub fn new(groups: Vec<StackGroup<E>>) -> Self {
        Self {
            groups,
            ..Self::default()
        }
    }

    pub fn group(&self, index: usize) -> Option<&StackGroup<E>> {
        self.groups.get(index)
    }

    pub fn group_mut(&mut self, index: usize) -> Option<&mut StackGroup<E>> {
        self.groups.get_mut(index)
    }

    pub fn groups(&self) -> &[StackGroup<E>] {
        &self.groups
    }

    pub fn flights(&self) -> &[Flight<E>] {
        &self.flights
    }

    pub fn flight(&self, id: FlightId) -> Option<&Flight<E>> {
        self.flights.iter().find(|flight| flight.id == id)
    }

    /// Number of flights heading to `target`
    pub fn inbound(&self, target: usize) -> usize {
        self.flights.iter().filter(|flight| flight.target == target).count()
    }

    /// Start moving the top entity of `source` onto `target`
    ///
    /// Returns `Ok(None)` when the source group is empty. The entity leaves
    /// its group immediately, so it can never be transferred twice at once.
    pub fn transfer(
        &mut self,
        tweens: &mut TweenScheduler<StackTable<E>>,
        source: usize,
        target: usize,
        duration: f64,
    ) -> Result<Option<FlightId>> {
        if source >= self.groups.len() {
            return Err(Error::UnknownGroup(source));
        }
        if target >= self.groups.len() {
            return Err(Error::UnknownGroup(target));
        }
        if source == target {
            return Err(Error::SameGroup(source));
        }
        if !is_valid_span(duration) {
            return Err(Error::InvalidDuration(duration));
        }

        let source_group = &mut self.groups[source];
        let Some(top) = source_group.len().checked_sub(1) else {
            return Ok(None);
        };
        let start = source_group.to_global(source_group.slot_offset(top));
        let Some(entity) = source_group.pop() else {
            return Ok(None);
        };

        // Reserve the slot above every flight already heading there
        let slot = self.groups[target].len() + self.inbound(target);
        let target_group = &self.groups[target];
        let end = target_group.to_global(target_group.slot_offset(slot));

        let id = FlightId(self.next_flight);
        self.next_flight += 1;
        self.flights.push(Flight {
            id,
            entity,
            source,
            target,
            start,
            end,
            position: start,
            arrived: false,
        });

        let scheduled = tweens.schedule(
            0.0,
            1.0,
            duration,
            move |table: &mut StackTable<E>, p| table.set_progress(id, p),
            move |table: &mut StackTable<E>| table.land(id),
        );
        if let Err(e) = scheduled {
            // Put the entity back where it came from
            if let Some(flight) = self.flights.pop() {
                self.groups[source].push(flight.entity);
            }
            return Err(e);
        }

        debug!(flight = id.0, source, target, slot, "Stack transfer started");
        Ok(Some(id))
    }

    fn set_progress(&mut self, id: FlightId, p: f64) {
        if let Some(flight) = self.flights.iter_mut().find(|flight| flight.id == id) {
            flight.position = flight.start.lerp(flight.end, p);
        }
    }

    /// Mark a flight as arrived and attach whatever can attach
    fn land(&mut self, id: FlightId) {
        let Some(flight) = self.flights.iter_mut().find(|flight| flight.id == id) else {
            return;
        };
        flight.arrived = true;
        flight.position = flight.end;
        let target = flight.target;
        self.attach_arrived(target);
    }

    /// Push arrived flights onto `target` while the oldest inbound one has arrived
    fn attach_arrived(&mut self, target: usize) {
        // `flights` stays in launch order: pushes append, removals keep order
        while let Some(index) = self.flights.iter().position(|flight| flight.target == target) {
            if !self.flights[index].arrived {
                break;
            }
            let flight = self.flights.remove(index);
            let Some(group) = self.groups.get_mut(target) else {
                return;
            };
            let slot = group.push(flight.entity);
            debug!(flight = flight.id.0, target, slot, "Stack transfer landed");
        }
    }

    /// Every entity with its root-space position and paint order
    ///
    /// Grouped entities come first, group by group and bottom to top, then
    /// flights in launch order so they paint over the piles.
    pub fn placements(&self) -> Vec<Placement<'_, E>> {
        let mut placed = Vec::with_capacity(self.len());

        for (group_index, group) in self.groups.iter().enumerate() {
            for (entity, position) in group.iter() {
                placed.push(Placement {
                    entity,
                    position,
                    z: placed.len(),
                    group: Some(group_index),
                });
            }
        }
        for flight in &self.flights {
            placed.push(Placement {
                entity: &flight.entity,
                position: flight.position,
                z: placed.len(),
                group: None,
            });
        }

        placed
    }

    /// Total number of entities, grouped or flying
    pub fn len(&self) -> usize {
        self.groups.iter().map(StackGroup::len).sum::<usize>() + self.flights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entity and flight; groups themselves are kept
    pub fn clear(&mut self) {
        for group in &mut self.groups {
            group.clear();
        }
        self.flights.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_with(cards: usize) -> StackTable<usize> {
        let mut source = StackGroup::new(Point::new(100.0, 400.0), 1.0);
        for card in 0..cards {
            source.push(card);
        }
        StackTable::new(vec![
            source,
            StackGroup::new(Point::new(400.0, 400.0), 2.0),
            StackGroup::new(Point::new(700.0, 400.0), 2.0),
        ])
    }

    #[test]
    fn test_transfer_starts_at_current_position() {
        let mut table = table_with(3);
        let mut tweens = TweenScheduler::new();

        let id = table.transfer(&mut tweens, 0, 1, 1.0).unwrap().unwrap();
        let flight = table.flight(id).unwrap();
        assert_eq!(flight.entity, 2);
        assert_eq!(flight.start, Point::new(100.0, 398.0));
        assert_eq!(flight.position, flight.start);
        assert_eq!(flight.end, Point::new(400.0, 400.0));
        assert_eq!(table.group(0).unwrap().len(), 2);
    }

    #[test]
    fn test_transfer_moves_linearly_and_lands() {
        let mut table = table_with(1);
        let mut tweens = TweenScheduler::new();
        let id = table.transfer(&mut tweens, 0, 2, 2.0).unwrap().unwrap();

        tweens.advance(1.0, &mut table);
        assert_eq!(table.flight(id).unwrap().position, Point::new(400.0, 400.0));

        tweens.advance(1.0, &mut table);
        assert!(table.flight(id).is_none());
        assert!(table.group(0).unwrap().is_empty());
        assert_eq!(table.group(2).unwrap().peek(), Some(&0));

        let placed = table.placements();
        assert_eq!(placed.len(), 1);
        assert_eq!(placed[0].position, Point::new(700.0, 400.0));
        assert_eq!(placed[0].group, Some(2));
    }

    #[test]
    fn test_concurrent_flights_reserve_distinct_slots() {
        let mut table = table_with(3);
        let mut tweens = TweenScheduler::new();

        let first = table.transfer(&mut tweens, 0, 1, 1.0).unwrap().unwrap();
        tweens.advance(0.5, &mut table);
        let second = table.transfer(&mut tweens, 0, 1, 1.0).unwrap().unwrap();

        assert_eq!(table.inbound(1), 2);
        let first_end = table.flight(first).unwrap().end;
        let second_end = table.flight(second).unwrap().end;
        assert_eq!(first_end, Point::new(400.0, 400.0));
        assert_eq!(second_end, Point::new(400.0, 398.0));

        tweens.advance(1.0, &mut table);
        let landed: Vec<Point> = table.group(1).unwrap().iter().map(|(_, p)| p).collect();
        assert_eq!(landed, vec![first_end, second_end]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_overtaking_flight_waits_at_its_slot() {
        let mut table = table_with(3);
        let mut tweens = TweenScheduler::new();

        let slow = table.transfer(&mut tweens, 0, 1, 2.0).unwrap().unwrap();
        tweens.advance(0.5, &mut table);
        let fast = table.transfer(&mut tweens, 0, 1, 0.5).unwrap().unwrap();
        let slow_end = table.flight(slow).unwrap().end;
        let fast_end = table.flight(fast).unwrap().end;

        // The fast card arrives first and holds its reserved end point
        tweens.advance(0.5, &mut table);
        let waiting = table.flight(fast).unwrap();
        assert!(waiting.arrived);
        assert_eq!(waiting.position, fast_end);
        assert!(table.group(1).unwrap().is_empty());

        tweens.advance(0.5, &mut table);
        assert_eq!(table.flight(fast).unwrap().position, fast_end);

        tweens.advance(0.5, &mut table);
        assert!(table.flights().is_empty());
        let landed: Vec<(usize, Point)> = table
            .group(1)
            .unwrap()
            .iter()
            .map(|(card, p)| (*card, p))
            .collect();
        assert_eq!(landed, vec![(2, slow_end), (1, fast_end)]);
    }

    #[test]
    fn test_flights_to_other_groups_do_not_wait() {
        let mut table = table_with(3);
        let mut tweens = TweenScheduler::new();

        table.transfer(&mut tweens, 0, 1, 2.0).unwrap();
        let fast = table.transfer(&mut tweens, 0, 2, 0.5).unwrap().unwrap();
        tweens.advance(0.5, &mut table);

        assert!(table.flight(fast).is_none());
        assert_eq!(table.group(2).unwrap().peek(), Some(&1));
        assert_eq!(table.inbound(1), 1);
    }

    #[test]
    fn test_transfer_errors() {
        let mut table = table_with(2);
        let mut tweens = TweenScheduler::new();

        assert!(matches!(
            table.transfer(&mut tweens, 0, 7, 1.0),
            Err(Error::UnknownGroup(7))
        ));
        assert!(matches!(
            table.transfer(&mut tweens, 9, 1, 1.0),
            Err(Error::UnknownGroup(9))
        ));
        assert!(matches!(
            table.transfer(&mut tweens, 1, 1, 1.0),
            Err(Error::SameGroup(1))
        ));
        assert!(matches!(
            table.transfer(&mut tweens, 0, 1, 0.0),
            Err(Error::InvalidDuration(_))
        ));
        // Nothing moved on error
        assert_eq!(table.group(0).unwrap().len(), 2);
        assert!(tweens.is_empty());
    }

    #[test]
    fn test_empty_source_is_none() {
        let mut table = table_with(0);
        let mut tweens = TweenScheduler::new();
        assert!(table.transfer(&mut tweens, 0, 1, 1.0).unwrap().is_none());
        assert!(tweens.is_empty());
    }

    #[test]
    fn test_clear_during_flight_stops_updates() {
        let mut table = table_with(2);
        let mut tweens = TweenScheduler::new();
        table.transfer(&mut tweens, 0, 1, 1.0).unwrap();
        tweens.advance(0.5, &mut table);

        tweens.clear();
        table.clear();
        tweens.advance(1.0, &mut table);

        assert!(table.is_empty());
        assert!(table.flights().is_empty());
        assert!(table.placements().is_empty());
    }

    #[test]
    fn test_flights_paint_above_groups() {
        let mut table = table_with(2);
        let mut tweens = TweenScheduler::new();
        table.transfer(&mut tweens, 0, 1, 1.0).unwrap();

        let placed = table.placements();
        assert_eq!(placed.len(), 2);
        assert!(!placed[0].in_flight());
        assert!(placed[1].in_flight());
        assert!(placed[1].z > placed[0].z);
    }
}
