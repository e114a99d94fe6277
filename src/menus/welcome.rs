//! Welcome menu: title, subtitle, Start and How to Play.

use bevy::prelude::*;

use super::Menu;
use crate::screens::GameState;
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::Welcome), spawn_welcome_menu);
}

fn spawn_welcome_menu(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("Welcome Menu"),
        DespawnOnExit(Menu::Welcome),
        children![
            widget::title(
                "Cook-off\nShowdown",
                palette::FONT_SIZE_TITLE,
                palette::HEADER_TEXT,
            ),
            widget::title(
                "Welcome to your\nnew kitchen!",
                palette::FONT_SIZE_SUBTITLE,
                palette::BODY_TEXT,
            ),
            widget::button(
                "Start Game",
                |_: On<Pointer<Click>>,
                 mut next_game: ResMut<NextState<GameState>>,
                 mut next_menu: ResMut<NextState<Menu>>| {
                    next_game.set(GameState::Kitchen);
                    next_menu.set(Menu::None);
                },
            ),
            widget::button(
                "How to Play",
                |_: On<Pointer<Click>>, mut next_menu: ResMut<NextState<Menu>>| {
                    next_menu.set(Menu::HowToPlay);
                },
            ),
        ],
    ));
}
