//! Kitchen session rules: lifecycle, countdown, food, customers and scoring.
//!
//! Engine-free. The session is driven by [`Session::advance`] with an explicit
//! time step and mutated by the interaction operations. Every visible change is
//! reported as a [`SessionEvent`], drained by the caller with
//! [`Session::drain_events`]. Entities never appear here, only ids and slots.

mod kinds;
mod schedule;

use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

pub use kinds::{CustomerId, CustomerKind, CustomerSlot, FoodId, FoodKind, FoodSlot};
pub use schedule::{Respawn, RespawnQueue, Scheduled};

// === Constants ===

/// Customers allowed in the kitchen at once.
pub const MAX_CUSTOMERS: usize = 4;

/// Points for serving a customer exactly what they asked for.
pub const CORRECT_ORDER_POINTS: i32 = 10;

/// Points lost for serving the wrong dish.
pub const WRONG_ORDER_PENALTY: i32 = 5;

/// Points lost for throwing food in the trash.
pub const DISCARD_PENALTY: i32 = 1;

/// Length of a session in seconds.
pub const SESSION_SECONDS: u32 = 60;

/// Grace period before food can be picked up.
pub const INTRO_GRACE: Duration = Duration::from_millis(500);

/// Delay before a collected food is replaced on its cabinet.
pub const FOOD_COOLDOWN: Duration = Duration::from_millis(2000);

/// Delay before a served customer is replaced.
pub const CUSTOMER_COOLDOWN: Duration = Duration::from_millis(5000);

const ONE_SECOND: Duration = Duration::from_secs(1);

// === Types ===

/// Fixed timings of a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRules {
    pub duration_secs: u32,
    pub intro_grace: Duration,
    pub food_cooldown: Duration,
    pub customer_cooldown: Duration,
}

impl Default for SessionRules {
    fn default() -> Self {
        Self {
            duration_secs: SESSION_SECONDS,
            intro_grace: INTRO_GRACE,
            food_cooldown: FOOD_COOLDOWN,
            customer_cooldown: CUSTOMER_COOLDOWN,
        }
    }
}

/// Lifecycle of one playthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionPhase {
    /// Just started: food cannot be collected yet.
    #[default]
    Intro,
    /// Countdown running, collection allowed.
    Active,
    /// Time is up. Nothing changes any more.
    Ended,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodItem {
    pub id: FoodId,
    pub slot: FoodSlot,
    pub kind: FoodKind,
    pub carried: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Customer {
    pub id: CustomerId,
    pub slot: CustomerSlot,
    pub kind: CustomerKind,
    pub wants: FoodKind,
}

/// Result of handing carried food to a customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServeOutcome {
    Correct,
    Wrong,
}

impl ServeOutcome {
    /// Score change for this outcome.
    #[must_use]
    pub const fn points(self) -> i32 {
        match self {
            Self::Correct => CORRECT_ORDER_POINTS,
            Self::Wrong => -WRONG_ORDER_PENALTY,
        }
    }
}

/// A change the presentation layer has to mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    PhaseChanged(SessionPhase),
    TimeChanged(u32),
    ScoreChanged(i32),
    FoodSpawned(FoodItem),
    FoodCollected(FoodId),
    /// Carried food was handed to a customer; both are gone.
    FoodServed {
        food: FoodId,
        customer: CustomerId,
        outcome: ServeOutcome,
    },
    FoodDiscarded(FoodId),
    CustomerSpawned(Customer),
}

// === Session ===

#[derive(Debug)]
pub struct Session {
    rules: SessionRules,
    phase: SessionPhase,
    score: i32,
    time_remaining: u32,
    elapsed: Duration,
    next_tick: Option<Duration>,
    foods: Vec<FoodItem>,
    customers: Vec<Customer>,
    respawns: RespawnQueue,
    next_id: u32,
    rng: StdRng,
    events: Vec<SessionEvent>,
}

/// Which clock entry fires next inside [`Session::advance`].
enum Deadline {
    Lifecycle(Duration),
    Respawn(Duration),
}

impl Session {
    /// Start a session in [`SessionPhase::Intro`].
    ///
    /// The starting score and time are reported as the first events so a fresh
    /// display can be driven entirely from the event stream.
    #[must_use]
    pub fn new(rules: SessionRules, rng: StdRng) -> Self {
        let time_remaining = rules.duration_secs;
        let mut session = Self {
            rules,
            phase: SessionPhase::Intro,
            score: 0,
            time_remaining,
            elapsed: Duration::ZERO,
            next_tick: None,
            foods: Vec::new(),
            customers: Vec::new(),
            respawns: RespawnQueue::default(),
            next_id: 0,
            rng,
            events: Vec::new(),
        };
        session.events.push(SessionEvent::ScoreChanged(0));
        session.events.push(SessionEvent::TimeChanged(time_remaining));
        session
    }

    /// Deterministic session, for tests and replays.
    #[must_use]
    pub fn with_seed(rules: SessionRules, seed: u64) -> Self {
        Self::new(rules, StdRng::seed_from_u64(seed))
    }

    // === Queries ===

    #[must_use]
    pub const fn rules(&self) -> &SessionRules {
        &self.rules
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn score(&self) -> i32 {
        self.score
    }

    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Time on the session clock.
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub fn collection_allowed(&self) -> bool {
        self.phase == SessionPhase::Active
    }

    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    #[must_use]
    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    #[must_use]
    pub fn food(&self, id: FoodId) -> Option<&FoodItem> {
        self.foods.iter().find(|food| food.id == id)
    }

    #[must_use]
    pub fn customer(&self, id: CustomerId) -> Option<&Customer> {
        self.customers.iter().find(|customer| customer.id == id)
    }

    /// The food attached to the chef, if any.
    #[must_use]
    pub fn carried(&self) -> Option<&FoodItem> {
        self.foods.iter().find(|food| food.carried)
    }

    /// Respawns waiting for their cooldown, in firing order.
    #[must_use]
    pub fn pending_respawns(&self) -> Vec<Scheduled> {
        self.respawns.pending()
    }

    pub fn drain_events(&mut self) -> std::vec::Drain<'_, SessionEvent> {
        self.events.drain(..)
    }

    // === Clock ===

    /// Move the session clock forward by `dt`.
    ///
    /// The grace period, countdown ticks and respawns are processed in
    /// due-time order, so one large step behaves like many small ones.
    /// Lifecycle deadlines win ties against respawns: a respawn due on the
    /// final second is cancelled by the end of the session.
    pub fn advance(&mut self, dt: Duration) {
        if self.phase == SessionPhase::Ended {
            return;
        }
        let target = self.elapsed + dt;

        while let Some(deadline) = self.next_deadline() {
            match deadline {
                Deadline::Lifecycle(due) if due <= target => {
                    self.elapsed = due;
                    self.step_lifecycle();
                }
                Deadline::Respawn(due) if due <= target => {
                    self.elapsed = due;
                    if let Some(entry) = self.respawns.pop_due(due) {
                        self.fire(entry.respawn);
                    }
                }
                _ => break,
            }
            if self.phase == SessionPhase::Ended {
                return;
            }
        }
        self.elapsed = target;
    }

    fn next_deadline(&self) -> Option<Deadline> {
        let lifecycle = match self.phase {
            SessionPhase::Intro => Some(self.rules.intro_grace),
            SessionPhase::Active => self.next_tick,
            SessionPhase::Ended => None,
        };
        match (lifecycle, self.respawns.next_due()) {
            (Some(tick), Some(respawn)) if respawn < tick => Some(Deadline::Respawn(respawn)),
            (Some(tick), _) => Some(Deadline::Lifecycle(tick)),
            (None, Some(respawn)) => Some(Deadline::Respawn(respawn)),
            (None, None) => None,
        }
    }

    fn step_lifecycle(&mut self) {
        match self.phase {
            SessionPhase::Intro => self.activate(),
            SessionPhase::Active => self.tick_second(),
            SessionPhase::Ended => {}
        }
    }

    fn activate(&mut self) {
        self.phase = SessionPhase::Active;
        self.events
            .push(SessionEvent::PhaseChanged(SessionPhase::Active));
        if self.time_remaining == 0 {
            self.end();
        } else {
            self.next_tick = Some(self.elapsed + ONE_SECOND);
        }
    }

    fn tick_second(&mut self) {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.events
            .push(SessionEvent::TimeChanged(self.time_remaining));
        if self.time_remaining == 0 {
            self.end();
        } else {
            self.next_tick = self.next_tick.map(|tick| tick + ONE_SECOND);
        }
    }

    /// Freeze the session and cancel everything still scheduled.
    fn end(&mut self) {
        self.phase = SessionPhase::Ended;
        self.next_tick = None;
        self.respawns.clear();
        self.events
            .push(SessionEvent::PhaseChanged(SessionPhase::Ended));
    }

    fn fire(&mut self, respawn: Respawn) {
        match respawn {
            Respawn::Food(slot) => {
                self.spawn_food(slot);
            }
            Respawn::Customer(slot) => {
                self.spawn_customer(slot);
            }
        }
    }

    const fn allocate_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    // === Food ===

    /// Put a random food on a cabinet. `None` once the session has ended.
    pub fn spawn_food(&mut self, slot: FoodSlot) -> Option<FoodId> {
        let kind = FoodKind::random(&mut self.rng);
        self.spawn_food_of(slot, kind)
    }

    /// Put a specific food on a cabinet.
    pub fn spawn_food_of(&mut self, slot: FoodSlot, kind: FoodKind) -> Option<FoodId> {
        if self.phase == SessionPhase::Ended {
            return None;
        }
        let food = FoodItem {
            id: FoodId(self.allocate_id()),
            slot,
            kind,
            carried: false,
        };
        self.foods.push(food);
        self.events.push(SessionEvent::FoodSpawned(food));
        Some(food.id)
    }

    /// Pick a food up off its cabinet.
    ///
    /// No-op (returns `false`) outside [`SessionPhase::Active`], while something
    /// is already carried, or when `id` is not lying on a cabinet. On success the
    /// replacement for its slot is scheduled right away.
    pub fn collect_food(&mut self, id: FoodId) -> bool {
        if !self.collection_allowed() || self.carried().is_some() {
            return false;
        }
        let Some(food) = self.foods.iter_mut().find(|food| food.id == id) else {
            return false;
        };
        food.carried = true;
        let slot = food.slot;

        self.respawns
            .push(self.elapsed + self.rules.food_cooldown, Respawn::Food(slot));
        self.events.push(SessionEvent::FoodCollected(id));
        true
    }

    /// Throw the carried food in the trash, for a one point penalty.
    pub fn discard_carried(&mut self) -> Option<FoodId> {
        if self.phase != SessionPhase::Active {
            return None;
        }
        let food = self.take_carried()?;
        self.score -= DISCARD_PENALTY;
        self.events.push(SessionEvent::FoodDiscarded(food.id));
        self.events.push(SessionEvent::ScoreChanged(self.score));
        Some(food.id)
    }

    fn take_carried(&mut self) -> Option<FoodItem> {
        let index = self.foods.iter().position(|food| food.carried)?;
        Some(self.foods.swap_remove(index))
    }

    // === Customers ===

    /// Seat a random customer with a random order.
    ///
    /// Dropped (returns `None`) when [`MAX_CUSTOMERS`] are already waiting or
    /// the session has ended.
    pub fn spawn_customer(&mut self, slot: CustomerSlot) -> Option<CustomerId> {
        let kind = CustomerKind::random(&mut self.rng);
        let wants = FoodKind::random(&mut self.rng);
        self.spawn_customer_of(slot, kind, wants)
    }

    pub fn spawn_customer_of(
        &mut self,
        slot: CustomerSlot,
        kind: CustomerKind,
        wants: FoodKind,
    ) -> Option<CustomerId> {
        if self.phase == SessionPhase::Ended || self.customers.len() >= MAX_CUSTOMERS {
            return None;
        }
        let customer = Customer {
            id: CustomerId(self.allocate_id()),
            slot,
            kind,
            wants,
        };
        self.customers.push(customer);
        self.events.push(SessionEvent::CustomerSpawned(customer));
        Some(customer.id)
    }

    /// Hand the carried food to a customer.
    ///
    /// The food is consumed whatever the outcome and the customer leaves; a
    /// replacement is scheduled for the same slot. Without carried food, or
    /// outside [`SessionPhase::Active`], nothing happens.
    pub fn serve_customer(&mut self, id: CustomerId) -> Option<ServeOutcome> {
        if self.phase != SessionPhase::Active || self.carried().is_none() {
            return None;
        }
        let index = self
            .customers
            .iter()
            .position(|customer| customer.id == id)?;
        let customer = self.customers.swap_remove(index);
        let food = self.take_carried()?;

        let outcome = if food.kind == customer.wants {
            ServeOutcome::Correct
        } else {
            ServeOutcome::Wrong
        };
        self.score += outcome.points();
        self.respawns.push(
            self.elapsed + self.rules.customer_cooldown,
            Respawn::Customer(customer.slot),
        );

        self.events.push(SessionEvent::FoodServed {
            food: food.id,
            customer: customer.id,
            outcome,
        });
        self.events.push(SessionEvent::ScoreChanged(self.score));
        Some(outcome)
    }
}
