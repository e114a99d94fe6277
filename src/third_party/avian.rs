//! Avian2d physics configuration for the side-on kitchen.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 300.0;

/// Typical object size in pixels, used by avian to scale its tolerances.
const LENGTH_UNIT: f32 = 32.0;

// === Collision Layers ===

/// Physics collision layers.
///
/// - **Body**: solid things: the chef, cabinets, the table, walls.
/// - **Trigger**: sensors the chef walks through: food, customers, the trash bin.
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum CollisionLayer {
    #[default]
    Body,
    Trigger,
}

impl CollisionLayer {
    /// Layers of a solid prop. Blocks bodies, ignores triggers.
    #[must_use]
    pub fn solid() -> CollisionLayers {
        CollisionLayers::new(Self::Body, Self::Body)
    }

    /// Layers of a sensor that only reacts to bodies.
    #[must_use]
    pub fn trigger() -> CollisionLayers {
        CollisionLayers::new(Self::Trigger, Self::Body)
    }

    /// Layers of the chef: stands on solids and touches triggers.
    #[must_use]
    pub fn chef() -> CollisionLayers {
        CollisionLayers::new(Self::Body, [Self::Body, Self::Trigger])
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(PhysicsPlugins::default().with_length_unit(LENGTH_UNIT));
    app.insert_resource(Gravity(Vec2::NEG_Y * GRAVITY));
}
