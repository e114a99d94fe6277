//! Trash bin in the lower right corner. Carried food dropped in it is lost.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::chef::Chef;
use super::kitchen::KitchenSession;
use super::level::FLOOR_TOP;
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_PROPS, gameplay_running};

pub const TRASH_SIZE: Vec2 = Vec2::new(32.0, 32.0);
pub const TRASH_POSITION: Vec2 = Vec2::new(350.0, FLOOR_TOP + TRASH_SIZE.y / 2.0);

#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TrashBin;

/// Sensor in the bottom-right corner of the kitchen.
fn spawn_trash_bin(mut commands: Commands) {
    commands.spawn((
        Name::new("Trash Bin"),
        TrashBin,
        Sprite::from_color(palette::TRASH_BIN, TRASH_SIZE),
        Transform::from_translation(TRASH_POSITION.extend(Z_PROPS)),
        DespawnOnExit(GameState::Kitchen),
        RigidBody::Static,
        Collider::rectangle(TRASH_SIZE.x, TRASH_SIZE.y),
        Sensor,
        CollisionLayer::trigger(),
    ));
}

/// Touching the bin while carrying throws the food away.
fn discard_on_contact(
    chef: Query<&CollidingEntities, With<Chef>>,
    bins: Query<(), With<TrashBin>>,
    mut session: ResMut<KitchenSession>,
) {
    if session.carried().is_none() {
        return;
    }
    let Ok(contacts) = chef.single() else {
        return;
    };
    if contacts.iter().any(|&entity| bins.contains(entity)) {
        session.discard_carried();
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<TrashBin>();

    app.add_systems(OnEnter(GameState::Kitchen), spawn_trash_bin);
    app.add_systems(
        Update,
        discard_on_contact
            .in_set(GameSet::Interaction)
            .run_if(gameplay_running.and(resource_exists::<KitchenSession>)),
    );
}
