//! Integration tests: screens, overlays and gameplay wired together.

mod session_flow;
mod state_transitions;

use bevy::input::InputPlugin;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use cook_off_showdown::GameSet;
use cook_off_showdown::gameplay::KitchenSession;
use cook_off_showdown::screens::GameState;

/// Headless game without physics or windowing.
pub fn create_game_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin, InputPlugin));
    app.configure_sets(
        Update,
        (
            GameSet::Input,
            GameSet::Clock,
            GameSet::Sync,
            GameSet::Interaction,
            GameSet::Presentation,
        )
            .chain(),
    );
    app.add_plugins((
        cook_off_showdown::theme::plugin,
        cook_off_showdown::screens::plugin,
        cook_off_showdown::menus::plugin,
        cook_off_showdown::gameplay::plugin,
    ));
    app
}

pub fn enter_kitchen(app: &mut App) {
    app.world_mut()
        .resource_mut::<NextState<GameState>>()
        .set(GameState::Kitchen);
    app.update();
    app.update();
}

pub fn session_mut(app: &mut App) -> Mut<'_, KitchenSession> {
    app.world_mut().resource_mut::<KitchenSession>()
}

pub fn count<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> usize {
    let mut query = app.world_mut().query_filtered::<Entity, F>();
    query.iter(app.world()).count()
}
