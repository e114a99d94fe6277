//! Color constants and font size tokens for consistent theming.

use bevy::prelude::*;

// === Text Colors ===

/// Header/title text color (white).
pub const HEADER_TEXT: Color = Color::WHITE;

/// Body/subtitle text color (light gray).
pub const BODY_TEXT: Color = Color::srgb(0.85, 0.85, 0.85);

/// "GAME OVER" title.
pub const GAME_OVER_TEXT: Color = Color::srgb(1.0, 0.0, 0.0);

/// Button label text color.
pub const BUTTON_TEXT: Color = Color::srgb(0.925, 0.925, 0.925);

/// Background of the score and timer read-outs.
pub const HUD_BACKGROUND: Color = Color::srgb(0.2, 0.2, 0.2);

// === UI Backgrounds ===

/// Semi-transparent dark overlay for modal screens.
pub const OVERLAY_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.8);

/// Panel background (near black, mostly opaque).
pub const PANEL_BACKGROUND: Color = Color::srgba(0.0, 0.0, 0.0, 0.7);

/// Panel border (warm gray, semi-transparent).
pub const PANEL_BORDER: Color = Color::srgba(0.6, 0.5, 0.45, 0.8);

// === Button Colors ===

pub const BUTTON_BACKGROUND: Color = Color::srgb(0.15, 0.55, 0.2);
pub const BUTTON_HOVERED_BACKGROUND: Color = Color::srgb(0.2, 0.7, 0.3);
pub const BUTTON_PRESSED_BACKGROUND: Color = Color::srgb(0.1, 0.4, 0.15);

// === Kitchen ===

pub const WELCOME_BACKDROP: Color = Color::srgb(0.45, 0.3, 0.25);
/// Peach tint of the kitchen wall.
pub const KITCHEN_BACKGROUND: Color = Color::srgb(1.0, 0.702, 0.655);
pub const FLOOR_CABINET: Color = Color::srgb(0.2, 0.2, 0.2);
pub const CABINET: Color = Color::srgb(0.55, 0.35, 0.2);
pub const TABLE: Color = Color::srgb(0.65, 0.45, 0.25);
pub const TRASH_BIN: Color = Color::srgb(0.35, 0.4, 0.4);
pub const CHEF: Color = Color::srgb(0.95, 0.95, 0.95);
pub const CHEF_HAT: Color = Color::srgb(0.8, 0.15, 0.15);
pub const KITCHEN_LABEL: Color = Color::WHITE;

// === Font Size Tokens ===

pub const FONT_SIZE_TITLE: f32 = 64.0;
pub const FONT_SIZE_HEADER: f32 = 48.0;
pub const FONT_SIZE_SUBTITLE: f32 = 38.0;
pub const FONT_SIZE_LABEL: f32 = 32.0;
pub const FONT_SIZE_BUTTON: f32 = 28.0;
pub const FONT_SIZE_BODY: f32 = 20.0;
pub const FONT_SIZE_SMALL: f32 = 14.0;
