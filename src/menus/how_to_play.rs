//! How to Play overlay: instructions panel and a Back button.

use bevy::prelude::*;

use super::Menu;
use crate::theme::{palette, widget};

const INSTRUCTIONS: &str = "\
Goal: serve your customers correctly\nand earn points!

Controls:
Left / Right arrows: move the chef
Up arrow: jump
Grab a dish and carry it to the customer.

Careful: every customer wants one specific dish.";

pub(super) fn plugin(app: &mut App) {
    app.add_systems(OnEnter(Menu::HowToPlay), spawn_how_to_play);
}

fn spawn_how_to_play(mut commands: Commands) {
    commands.spawn((
        widget::ui_root("How To Play Screen"),
        BackgroundColor(palette::OVERLAY_BACKGROUND),
        GlobalZIndex(1),
        DespawnOnExit(Menu::HowToPlay),
        children![(
            widget::panel("Instructions Panel", 650.0, 400.0),
            children![
                widget::title(INSTRUCTIONS, palette::FONT_SIZE_BODY, palette::HEADER_TEXT),
                widget::button(
                    "Back",
                    |_: On<Pointer<Click>>, mut next_menu: ResMut<NextState<Menu>>| {
                        next_menu.set(Menu::Welcome);
                    },
                ),
            ],
        )],
    ));
}
