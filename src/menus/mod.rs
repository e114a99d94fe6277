//! Menu overlays that can appear on top of any screen.
//!
//! The `Menu` state is orthogonal to `GameState`: menus are overlays, not
//! screens. `Menu::Welcome` and `Menu::HowToPlay` sit over the welcome screen,
//! `Menu::GameOver` over the kitchen once the session has ended.

mod game_over;
mod how_to_play;
mod welcome;

use bevy::prelude::*;

/// Menu overlay states. Orthogonal to `GameState`.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[states(scoped_entities)]
pub enum Menu {
    /// No menu overlay is active.
    #[default]
    None,
    /// Title, Start and How to Play.
    Welcome,
    /// Instructions panel with a Back button.
    HowToPlay,
    /// Final score and Restart, shown when time runs out.
    GameOver,
}

pub fn plugin(app: &mut App) {
    app.init_state::<Menu>();
    app.add_plugins((welcome::plugin, how_to_play::plugin, game_over::plugin));

    // Pause/unpause virtual time when any menu overlay opens/closes.
    // This stops physics (avian2d runs in FixedPostUpdate, which accumulates from Time<Virtual>)
    // and the session clock.
    app.add_systems(OnExit(Menu::None), pause_virtual_time);
    app.add_systems(OnEnter(Menu::None), unpause_virtual_time);
}

fn pause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.pause();
}

fn unpause_virtual_time(mut time: ResMut<Time<Virtual>>) {
    time.unpause();
}
