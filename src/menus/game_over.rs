//! Game over overlay: final score and a Restart button.

use bevy::prelude::*;

use super::Menu;
use crate::gameplay::{KitchenSession, RestartSession};
use crate::theme::{palette, widget};

pub(super) fn plugin(app: &mut App) {
    app.register_type::<FinalScoreText>();
    app.add_systems(OnEnter(Menu::GameOver), spawn_game_over_screen);
}

fn spawn_game_over_screen(mut commands: Commands, session: Option<Res<KitchenSession>>) {
    let score = session.map_or(0, |session| session.score());

    commands.spawn((
        widget::ui_root("Game Over Screen"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::GameOver),
        children![(
            widget::panel("Game Over Panel", 500.0, 300.0),
            children![
                widget::title("GAME OVER", palette::FONT_SIZE_HEADER, palette::GAME_OVER_TEXT),
                (
                    Name::new("Final Score"),
                    FinalScoreText,
                    Text::new(format!("Your Score: {score}")),
                    TextFont::from_font_size(palette::FONT_SIZE_LABEL),
                    TextColor(palette::HEADER_TEXT),
                ),
                widget::button(
                    "Restart",
                    |_: On<Pointer<Click>>,
                     mut restart: MessageWriter<RestartSession>,
                     mut next_menu: ResMut<NextState<Menu>>| {
                        restart.write(RestartSession);
                        next_menu.set(Menu::None);
                    },
                ),
            ],
        )],
    ));
}

/// Marker for the final score line.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct FinalScoreText;
