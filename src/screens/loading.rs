//! Loading screen plugin.
//!
//! Everything is drawn from plain shapes and text, so there is nothing to wait
//! for: the screen hands over to the welcome screen on the first frame.

use bevy::prelude::*;

use super::GameState;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Loading), setup_loading_screen)
        .add_systems(
            Update,
            check_loading_complete.run_if(in_state(GameState::Loading)),
        );
}

fn setup_loading_screen(mut commands: Commands) {
    commands.spawn((
        crate::theme::widget::ui_root("Loading Screen"),
        DespawnOnExit(GameState::Loading),
        children![crate::theme::widget::header("Loading...")],
    ));
}

fn check_loading_complete(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Welcome);
}
