use tracing::{debug, info};

use super::{Scene, SceneKind};
use crate::animation::timing::millis_to_secs;
use crate::animation::{Pulse, TimerId, Timers, TweenScheduler};
use crate::config::CardsConfig;
use crate::geometry::{Point, SCENE_WIDTH};
use crate::stack::{FlightId, StackGroup, StackTable};
use crate::Result;

const SOURCE_STACK: usize = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    pub id: usize,
}

/// Card as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardView {
    pub id: usize,
    /// Root-space centre of the card
    pub position: Point,
    pub z: usize,
    pub in_flight: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CardsEvent {
    MoveTopCard,
}

/// "Ace of Shadows": cards fly one by one from the first stack to the others
#[derive(Debug)]
pub struct CardsScene {
    config: CardsConfig,
    table: StackTable<Card>,
    tweens: TweenScheduler<StackTable<Card>>,
    timers: Timers<CardsEvent>,
    move_timer: Option<TimerId>,
    interval_ms: u64,
    active_stack: usize,
    moves: usize,
    title_pulse: Pulse,
    disposed: bool,
}

/// Horizontal stack positions centred in the scene
fn stack_origins(count: usize, top: f64, spacing: f64) -> Vec<Point> {
    if count == 0 {
        return Vec::new();
    }
    let n = count as f64;
    let available = SCENE_WIDTH - (n + 1.0) * spacing;
    let stack_width = available / n;
    let start_x = (SCENE_WIDTH - ((n - 1.0) * spacing + n * stack_width)) / 2.0;

    (0..count)
        .map(|i| Point::new(start_x + i as f64 * (stack_width + spacing), top))
        .collect()
}

impl CardsScene {
    pub fn new(config: &CardsConfig) -> Result<Self> {
        let origins = stack_origins(config.stacks_amount, config.stacks_top, config.min_stack_spacing);
        let mut groups: Vec<StackGroup<Card>> = origins
            .into_iter()
            .enumerate()
            .map(|(i, origin)| {
                let step = if i == SOURCE_STACK {
                    config.source_offset
                } else {
                    config.target_offset
                };
                StackGroup::new(origin, step)
            })
            .collect();

        if let Some(source) = groups.get_mut(SOURCE_STACK) {
            for id in 0..config.cards_amount {
                source.push(Card { id });
            }
        }

        let interval_ms = config
            .interval_ms
            .clamp(config.min_interval_ms, config.max_interval_ms.max(config.min_interval_ms));
        let mut timers = Timers::new();
        let move_timer = timers.every(millis_to_secs(interval_ms), CardsEvent::MoveTopCard)?;

        info!(
            "Cards scene: {} cards, {} stacks, {}ms interval",
            config.cards_amount, config.stacks_amount, interval_ms
        );

        Ok(Self {
            config: config.clone(),
            table: StackTable::new(groups),
            tweens: TweenScheduler::new(),
            timers,
            move_timer: Some(move_timer),
            interval_ms,
            active_stack: SOURCE_STACK,
            moves: 0,
            title_pulse: Pulse::title(),
            disposed: false,
        })
    }

    /// Send the top card of the first stack to the next target stack
    ///
    /// Targets cycle through every stack but the first. Returns `Ok(None)`
    /// once the first stack is empty or when there is nowhere to move to.
    pub fn transfer_top_card(&mut self) -> Result<Option<FlightId>> {
        let stacks = self.table.groups().len();
        if self.disposed || stacks < 2 {
            return Ok(None);
        }
        if self.table.group(SOURCE_STACK).map_or(true, StackGroup::is_empty) {
            return Ok(None);
        }

        self.active_stack += 1;
        if self.active_stack >= stacks {
            self.active_stack = 1;
        }

        let duration = millis_to_secs(self.duration_ms());
        let flight = self
            .table
            .transfer(&mut self.tweens, SOURCE_STACK, self.active_stack, duration)?;
        if flight.is_some() {
            self.moves += 1;
            debug!(target_stack = self.active_stack, moves = self.moves, "Top card moved");
        }
        Ok(flight)
    }

    /// Change the delay between moves
    ///
    /// Values outside the configured range are rejected and return `false`.
    /// Flights already under way keep their duration; the move timer
    /// restarts its phase.
    pub fn set_interval(&mut self, interval_ms: u64) -> bool {
        if interval_ms < self.config.min_interval_ms || interval_ms > self.config.max_interval_ms {
            return false;
        }
        let Some(timer) = self.move_timer else {
            return false;
        };

        match self.timers.set_interval(timer, millis_to_secs(interval_ms)) {
            Ok(true) => {
                self.interval_ms = interval_ms;
                info!("Card interval set to {}ms", interval_ms);
                true
            }
            _ => false,
        }
    }

    /// Shorten the move interval by one step
    pub fn faster(&mut self) -> bool {
        let step = self.config.speed_step_ms;
        match self.interval_ms.checked_sub(step) {
            Some(interval) => self.set_interval(interval),
            None => false,
        }
    }

    /// Lengthen the move interval by one step
    pub fn slower(&mut self) -> bool {
        self.set_interval(self.interval_ms.saturating_add(self.config.speed_step_ms))
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// A flight always lasts two move intervals
    pub fn duration_ms(&self) -> u64 {
        self.interval_ms * 2
    }

    /// Every card with its root-space position and paint order
    pub fn cards(&self) -> Vec<CardView> {
        self.table
            .placements()
            .into_iter()
            .map(|placed| CardView {
                id: placed.entity.id,
                position: placed.position,
                z: placed.z,
                in_flight: placed.in_flight(),
            })
            .collect()
    }

    /// Stack origins in root space
    pub fn stack_positions(&self) -> Vec<Point> {
        self.table.groups().iter().map(StackGroup::origin).collect()
    }

    /// Number of cards resting on each stack
    pub fn stack_sizes(&self) -> Vec<usize> {
        self.table.groups().iter().map(StackGroup::len).collect()
    }

    pub fn cards_in_flight(&self) -> usize {
        self.table.flights().len()
    }

    pub fn moves(&self) -> usize {
        self.moves
    }

    fn handle(&mut self, event: CardsEvent) {
        match event {
            CardsEvent::MoveTopCard => {
                if let Err(e) = self.transfer_top_card() {
                    tracing::warn!("Card transfer failed: {}", e);
                }
            }
        }
    }
}

impl Scene for CardsScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Cards
    }

    fn title_scale(&self) -> f64 {
        self.title_pulse.value()
    }

    fn advance(&mut self, delta: f64) {
        if self.disposed {
            return;
        }
        self.tweens.advance(delta, &mut self.table);
        self.title_pulse.advance(delta);
        for event in self.timers.advance(delta) {
            self.handle(event);
        }
    }

    fn dispose(&mut self) {
        self.tweens.clear();
        self.timers.clear();
        self.move_timer = None;
        self.table.clear();
        self.disposed = true;
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scene() -> CardsScene {
        CardsScene::new(&CardsConfig::default()).unwrap()
    }

    #[test]
    fn test_stacks_centred() {
        let origins = stack_origins(4, 400.0, 100.0);
        let xs: Vec<f64> = origins.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![100.0, 375.0, 650.0, 925.0]);
        assert!(origins.iter().all(|p| p.y == 400.0));
    }

    #[test]
    fn test_initial_deal() {
        let scene = scene();
        assert_eq!(scene.stack_sizes(), vec![144, 0, 0, 0]);

        let cards = scene.cards();
        assert_eq!(cards.len(), 144);
        let top = cards.last().unwrap();
        assert_eq!(top.id, 143);
        assert_eq!(top.position, Point::new(100.0, 400.0 - 143.0));
        assert!(!top.in_flight);
    }

    #[test]
    fn test_transfer_starts_where_card_rests() {
        let mut scene = scene();
        let before = *scene.cards().last().unwrap();

        scene.transfer_top_card().unwrap().unwrap();
        let flying: Vec<CardView> = scene.cards().into_iter().filter(|c| c.in_flight).collect();
        assert_eq!(flying.len(), 1);
        assert_eq!(flying[0].id, before.id);
        assert_eq!(flying[0].position, before.position);
    }

    #[test]
    fn test_timer_moves_card_and_it_lands() {
        let mut scene = scene();

        scene.advance(1.0);
        assert_eq!(scene.cards_in_flight(), 1);
        assert_eq!(scene.stack_sizes()[0], 143);

        // Halfway through the two-second flight
        scene.advance(0.5);
        scene.advance(0.5);
        let flying = scene.cards().into_iter().find(|c| c.id == 143).unwrap();
        assert!(flying.in_flight);
        let start = Point::new(100.0, 257.0);
        let end = Point::new(375.0, 400.0);
        assert!((flying.position.x - (start.x + end.x) / 2.0).abs() < 1e-9);

        scene.advance(1.0);
        let landed = scene.cards().into_iter().find(|c| c.id == 143).unwrap();
        assert!(!landed.in_flight);
        assert_eq!(landed.position, end);
        assert_eq!(scene.stack_sizes()[1], 1);
    }

    #[test]
    fn test_targets_cycle_past_source() {
        let mut scene = scene();
        for _ in 0..4 {
            scene.transfer_top_card().unwrap();
        }
        scene.advance(10.0);
        scene.advance(0.0);
        // 1, 2, 3, 1
        let sizes = scene.stack_sizes();
        assert_eq!(&sizes[1..], &[2, 1, 1]);
    }

    #[test]
    fn test_overlapping_flights_land_on_distinct_slots() {
        let mut scene = CardsScene::new(&CardsConfig {
            stacks_amount: 2,
            ..CardsConfig::default()
        })
        .unwrap();

        // Interval 1s, flight 2s: a second card leaves before the first lands
        scene.advance(1.0);
        scene.advance(1.0);
        assert_eq!(scene.cards_in_flight(), 2);

        scene.advance(1.0);
        scene.advance(1.0);
        let landed: Vec<Point> = scene
            .cards()
            .into_iter()
            .filter(|c| !c.in_flight && (c.id == 143 || c.id == 142))
            .map(|c| c.position)
            .collect();
        assert_eq!(landed.len(), 2);
        assert_ne!(landed[0], landed[1]);
    }

    #[test]
    fn test_faster_card_lands_where_it_waited() {
        let mut scene = CardsScene::new(&CardsConfig {
            stacks_amount: 2,
            ..CardsConfig::default()
        })
        .unwrap();
        let card = |scene: &CardsScene, id: usize| {
            scene.cards().into_iter().find(|c| c.id == id).unwrap()
        };

        // Card 143 leaves on a four-second flight
        assert!(scene.set_interval(2000));
        scene.advance(2.0);
        assert!(card(&scene, 143).in_flight);

        // Card 142 leaves on a 0.4s flight and overtakes it
        assert!(scene.set_interval(200));
        scene.advance(0.2);
        scene.advance(0.2);
        scene.advance(0.2);
        let parked = card(&scene, 142);
        assert!(parked.in_flight);
        assert_eq!(scene.stack_sizes()[1], 0);

        scene.advance(0.2);
        assert_eq!(card(&scene, 142).position, parked.position);

        for _ in 0..25 {
            scene.advance(0.2);
        }
        let slow = card(&scene, 143);
        let fast = card(&scene, 142);
        assert!(!slow.in_flight);
        assert!(!fast.in_flight);
        assert_eq!(fast.position, parked.position);
        assert_ne!(slow.position, fast.position);
    }

    #[test]
    fn test_speed_bounds() {
        let mut scene = scene();
        assert!(!scene.set_interval(100));
        assert!(!scene.set_interval(2200));
        assert!(scene.set_interval(600));
        assert_eq!(scene.interval_ms(), 600);
        assert_eq!(scene.duration_ms(), 1200);

        assert!(scene.set_interval(200));
        assert!(!scene.faster());
        assert_eq!(scene.interval_ms(), 200);

        assert!(scene.set_interval(2000));
        assert!(!scene.slower());
        assert!(scene.faster());
        assert_eq!(scene.interval_ms(), 1800);
    }

    #[test]
    fn test_speed_change_restarts_timer() {
        let mut scene = scene();
        scene.advance(0.9);
        assert!(scene.set_interval(400));
        scene.advance(0.3);
        assert_eq!(scene.moves(), 0);
        scene.advance(0.15);
        assert_eq!(scene.moves(), 1);
    }

    #[test]
    fn test_empty_source_stops_moving() {
        let mut scene = CardsScene::new(&CardsConfig {
            cards_amount: 1,
            ..CardsConfig::default()
        })
        .unwrap();
        assert!(scene.transfer_top_card().unwrap().is_some());
        assert!(scene.transfer_top_card().unwrap().is_none());
        assert_eq!(scene.moves(), 1);
    }

    #[test]
    fn test_dispose_during_flight() {
        let mut scene = scene();
        scene.advance(1.0);
        scene.advance(0.5);
        assert_eq!(scene.cards_in_flight(), 1);

        scene.dispose();
        assert!(scene.is_disposed());
        assert!(scene.cards().is_empty());

        scene.advance(5.0);
        assert!(scene.cards().is_empty());
        assert_eq!(scene.moves(), 1);
        assert!(!scene.set_interval(400));
    }
}
