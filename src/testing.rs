//! Testing utilities for Bevy systems.

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use crate::gameplay::session::{Session, SessionEvent, SessionRules};
use crate::gameplay::{KitchenSession, RestartSession, SessionUpdate};
use crate::menus::Menu;
use crate::screens::GameState;

/// Headless app with states, session messages and keyboard input resources.
pub fn create_base_test_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins);
    app.add_plugins(StatesPlugin);
    app.init_state::<GameState>();
    app.init_state::<Menu>();
    app.add_message::<SessionUpdate>();
    app.add_message::<RestartSession>();
    app.init_resource::<ButtonInput<KeyCode>>();
    app
}

/// Move to `GameState::Kitchen` and let `OnEnter` commands apply.
pub fn transition_to_kitchen(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Kitchen);
    app.update();
    app.update();
}

/// Deterministic session with default rules and its start-up events drained.
pub fn quiet_session(seed: u64) -> Session {
    let mut session = Session::with_seed(SessionRules::default(), seed);
    session.drain_events().for_each(drop);
    session
}

/// Session already past its grace period.
pub fn active_session(seed: u64) -> Session {
    let mut session = quiet_session(seed);
    session.advance(SessionRules::default().intro_grace);
    session.drain_events().for_each(drop);
    session
}

pub fn insert_session(app: &mut App, session: Session) {
    app.insert_resource(KitchenSession(session));
}

/// Write a session event as if the session had just reported it.
pub fn publish(app: &mut App, event: SessionEvent) {
    app.world_mut().write_message(SessionUpdate(event));
}

pub fn session(app: &App) -> &Session {
    &app.world().resource::<KitchenSession>().0
}

/// Asserts the number of entities matching a query filter.
pub fn assert_entity_count<F: QueryFilter>(app: &mut App, expected: usize) {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    let count = query.iter(app.world()).count();
    assert_eq!(
        count,
        expected,
        "expected {expected} entities matching {}, found {count}",
        std::any::type_name::<F>()
    );
}
