//! Cook-off Showdown game library.

#[cfg(feature = "dev")]
mod dev_tools;
pub mod gameplay;
pub mod menus;
pub mod screens;
#[cfg(test)]
pub(crate) mod testing;
pub mod theme;
pub(crate) mod third_party;

use bevy::prelude::*;

use crate::menus::Menu;
use crate::screens::GameState;

// === Z Layers ===

pub const Z_BACKGROUND: f32 = -10.0;
pub const Z_PROPS: f32 = 0.0;
pub const Z_FOOD: f32 = 1.0;
pub const Z_CUSTOMER: f32 = 2.0;
pub const Z_CHEF: f32 = 3.0;
/// Carried food is drawn over the chef.
pub const Z_CARRIED: f32 = 4.0;

/// Per-frame ordering of gameplay systems in `Update`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    /// Keyboard input and chef movement.
    Input,
    /// Advance the session clock.
    Clock,
    /// Publish session changes as messages.
    Sync,
    /// Contacts between the chef and food, customers and the trash bin.
    Interaction,
    /// Mirror session state into entities and text.
    Presentation,
}

/// Run condition: the kitchen is on screen and no overlay is open.
pub fn gameplay_running(
    game_state: Option<Res<State<GameState>>>,
    menu: Option<Res<State<Menu>>>,
) -> bool {
    matches!(
        (game_state.as_deref().map(State::get), menu.as_deref().map(State::get)),
        (Some(GameState::Kitchen), Some(Menu::None))
    )
}

/// Root plugin: everything except the window and the default engine plugins.
pub fn plugin(app: &mut App) {
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
        third_party::plugin,
        theme::plugin,
        screens::plugin,
        menus::plugin,
        gameplay::plugin,
    ));

    #[cfg(feature = "dev")]
    app.add_plugins(dev_tools::plugin);

    app.add_systems(Startup, spawn_camera);
}

/// Spawns the global 2D camera. Persists across all states (do NOT add `DespawnOnExit`).
fn spawn_camera(mut commands: Commands) {
    commands.spawn((Name::new("Camera"), Camera2d));
}
