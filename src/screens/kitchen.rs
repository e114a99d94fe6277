//! Kitchen screen: makes sure no overlay is left open when play starts.
//!
//! The level, the chef and the session itself are built by
//! [`crate::gameplay`] plugins hooked on `OnEnter(GameState::Kitchen)`.

use bevy::prelude::*;

use super::GameState;
use crate::menus::Menu;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(GameState::Kitchen), close_menus);
}

fn close_menus(mut next_menu: ResMut<NextState<Menu>>) {
    next_menu.set(Menu::None);
}
