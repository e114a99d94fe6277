//! Button hover/press visual feedback.

use bevy::picking::hover::Hovered;
use bevy::prelude::*;
use bevy::ui::Pressed;

use super::palette;

/// Background colors for the idle, hovered and pressed states of a button.
/// Add alongside `Button` and `BackgroundColor` on clickable UI elements.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
#[require(Hovered)]
pub struct InteractionPalette {
    pub none: Color,
    pub hovered: Color,
    pub pressed: Color,
}

impl InteractionPalette {
    /// The menu button colors.
    pub const BUTTON: Self = Self {
        none: palette::BUTTON_BACKGROUND,
        hovered: palette::BUTTON_HOVERED_BACKGROUND,
        pressed: palette::BUTTON_PRESSED_BACKGROUND,
    };

    /// Color for a pressed/hovered combination. Pressed wins over hovered.
    #[must_use]
    pub const fn pick(&self, pressed: bool, hovered: bool) -> Color {
        match (pressed, hovered) {
            (true, _) => self.pressed,
            (false, true) => self.hovered,
            (false, false) => self.none,
        }
    }
}

fn apply_interaction_palette(
    mut palette_query: Query<
        (
            Has<Pressed>,
            &Hovered,
            &InteractionPalette,
            &mut BackgroundColor,
        ),
        Changed<Interaction>,
    >,
) {
    for (pressed, Hovered(hovered), palette, mut background) in &mut palette_query {
        *background = palette.pick(pressed, *hovered).into();
    }
}

pub fn plugin(app: &mut App) {
    app.register_type::<InteractionPalette>();
    app.add_systems(Update, apply_interaction_palette);
}
