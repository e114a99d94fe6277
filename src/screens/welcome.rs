//! Welcome screen: kitchen backdrop under the welcome menu.

use bevy::prelude::*;

use super::GameState;
use crate::menus::Menu;
use crate::theme::palette;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(
        OnEnter(GameState::Welcome),
        (spawn_backdrop, open_welcome_menu),
    );
    app.add_systems(OnExit(GameState::Welcome), close_menu);
}

fn spawn_backdrop(mut commands: Commands) {
    commands.spawn((
        Name::new("Welcome Backdrop"),
        Sprite::from_color(palette::WELCOME_BACKDROP, Vec2::new(800.0, 600.0)),
        Transform::from_xyz(0.0, 0.0, crate::Z_BACKGROUND),
        DespawnOnExit(GameState::Welcome),
    ));
}

fn open_welcome_menu(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::Welcome);
}

fn close_menu(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::None);
}
