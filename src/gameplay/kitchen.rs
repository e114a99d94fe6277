//! Session driver: creates the session, runs its clock from frame time, and
//! republishes its events as [`SessionUpdate`] messages.

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::session::{Session, SessionEvent, SessionPhase, SessionRules};
use super::{chef, level};
use crate::menus::Menu;
use crate::screens::GameState;
use crate::{GameSet, gameplay_running};

// === Resources ===

/// Timings used for new sessions.
#[derive(Resource, Debug, Clone, Default, Deref, DerefMut)]
pub struct KitchenRules(pub SessionRules);

/// The running session. Present only while `GameState::Kitchen` is active.
#[derive(Resource, Debug, Deref, DerefMut)]
pub struct KitchenSession(pub Session);

// === Messages ===

/// One session change, in the order the session reported it.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq, Deref)]
pub struct SessionUpdate(pub SessionEvent);

/// Throw the current session away and start a fresh one.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RestartSession;

// === Components ===

/// Marker for entities owned by one session. Despawned on restart.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct SessionEntity;

// === Systems ===

/// Fresh session with every cabinet stocked and every counter spot taken.
fn start_session(
    mut commands: Commands,
    rules: Res<KitchenRules>,
    leftovers: Query<Entity, With<SessionEntity>>,
) {
    for entity in &leftovers {
        commands.entity(entity).despawn();
    }

    let mut session = Session::new(rules.0.clone(), StdRng::from_os_rng());
    for slot in level::food_slots() {
        session.spawn_food(slot);
    }
    for slot in level::customer_slots() {
        session.spawn_customer(slot);
    }
    chef::spawn_chef(&mut commands);

    info!(
        "kitchen session started: {} s on the clock",
        rules.duration_secs
    );
    commands.insert_resource(KitchenSession(session));
}

/// Drop the session when leaving the kitchen.
fn end_session(mut commands: Commands) {
    commands.remove_resource::<KitchenSession>();
}

/// Feed the session clock with the frame's virtual time.
fn advance_session(time: Res<Time>, mut session: ResMut<KitchenSession>) {
    session.advance(time.delta());
}

/// Republish everything the session reported as `SessionUpdate` messages.
fn publish_session_events(
    mut session: ResMut<KitchenSession>,
    mut updates: MessageWriter<SessionUpdate>,
) {
    for event in session.drain_events() {
        log_event(&event);
        updates.write(SessionUpdate(event));
    }
}

fn log_event(event: &SessionEvent) {
    match event {
        SessionEvent::PhaseChanged(phase) => info!("session phase: {phase:?}"),
        SessionEvent::FoodServed {
            customer, outcome, ..
        } => info!("customer {} served: {outcome:?}", customer.0),
        SessionEvent::FoodDiscarded(food) => info!("food {} thrown away", food.0),
        other => debug!("session event: {other:?}"),
    }
}

/// Shows the game over overlay once the session reports its end.
fn open_game_over(
    mut updates: MessageReader<SessionUpdate>,
    mut next_menu: ResMut<NextState<Menu>>,
) {
    for update in updates.read() {
        if **update == SessionEvent::PhaseChanged(SessionPhase::Ended) {
            next_menu.set(Menu::GameOver);
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<SessionEntity>()
        .init_resource::<KitchenRules>()
        .add_message::<SessionUpdate>()
        .add_message::<RestartSession>();

    app.add_systems(OnEnter(GameState::Kitchen), start_session);
    app.add_systems(OnExit(GameState::Kitchen), end_session);

    app.add_systems(
        Update,
        (
            start_session
                .run_if(in_state(GameState::Kitchen).and(on_message::<RestartSession>)),
            advance_session.run_if(gameplay_running.and(resource_exists::<KitchenSession>)),
        )
            .chain()
            .in_set(GameSet::Clock),
    );
    app.add_systems(
        Update,
        publish_session_events
            .in_set(GameSet::Sync)
            .run_if(in_state(GameState::Kitchen).and(resource_exists::<KitchenSession>)),
    );
    app.add_systems(
        Update,
        open_game_over
            .in_set(GameSet::Presentation)
            .run_if(in_state(GameState::Kitchen)),
    );
}
