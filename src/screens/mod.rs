//! Screen states and their plugins.
//!
//! A screen owns the world underneath any overlay: the welcome backdrop or the
//! kitchen. Overlays live in [`crate::menus`].

mod kitchen;
mod loading;
mod welcome;

use bevy::prelude::*;

/// Primary game states.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum GameState {
    /// Initial loading state.
    #[default]
    Loading,
    /// Title screen with the welcome menu.
    Welcome,
    /// Active kitchen gameplay.
    Kitchen,
}

pub fn plugin(app: &mut App) {
    app.init_state::<GameState>();
    app.add_plugins((loading::plugin, welcome::plugin, kitchen::plugin));
}
