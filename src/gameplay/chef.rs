//! The chef: spawning, arrow-key movement, jumping, and freezing at game over.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::kitchen::{KitchenSession, SessionEntity, SessionUpdate};
use super::level;
use super::session::{SessionEvent, SessionPhase};
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_CHEF, gameplay_running};

// === Constants ===

pub const CHEF_SIZE: Vec2 = Vec2::new(32.0, 48.0);

/// Horizontal walking speed.
pub const CHEF_SPEED: f32 = 160.0;

/// Upward speed at the start of a jump.
pub const CHEF_JUMP_SPEED: f32 = 330.0;

const CHEF_BOUNCE: f32 = 0.2;

/// Gap under the chef's feet that still counts as standing.
const GROUND_TOLERANCE: f32 = 2.0;

/// Thickness of the strip cast down from the chef's soles.
const FOOT_HEIGHT: f32 = 2.0;

/// Center of the foot strip, flush with the bottom edge of the chef.
const FOOT_ORIGIN: Vec2 = Vec2::new(0.0, (FOOT_HEIGHT - CHEF_SIZE.y) / 2.0);

const HAT_HEIGHT: f32 = 10.0;

// === Components ===

/// Marker for the player-controlled chef.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Chef;

/// Present while the chef stands on something solid.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Grounded;

/// Spawn the chef at the start position with its physics body.
pub fn spawn_chef(commands: &mut Commands) -> Entity {
    commands
        .spawn((
            Name::new("Chef"),
            Chef,
            SessionEntity,
            Sprite::from_color(palette::CHEF, CHEF_SIZE),
            Transform::from_translation(level::CHEF_START.extend(Z_CHEF)),
            DespawnOnExit(GameState::Kitchen),
            children![(
                Name::new("Chef Hat"),
                Sprite::from_color(palette::CHEF_HAT, Vec2::new(CHEF_SIZE.x, HAT_HEIGHT)),
                Transform::from_xyz(0.0, (CHEF_SIZE.y - HAT_HEIGHT) / 2.0, 0.1),
            )],
        ))
        .insert((
            RigidBody::Dynamic,
            Collider::rectangle(CHEF_SIZE.x, CHEF_SIZE.y),
            CollisionLayer::chef(),
            Restitution::new(CHEF_BOUNCE),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::ZERO,
            CollidingEntities::default(),
            ground_caster(),
        ))
        .id()
}

fn foot_shape() -> Collider {
    Collider::rectangle(CHEF_SIZE.x * 0.9, FOOT_HEIGHT)
}

/// Only the soles look for ground, so a ceiling touching the chef's head
/// never counts as standing.
fn ground_caster() -> ShapeCaster {
    ShapeCaster::new(foot_shape(), FOOT_ORIGIN, 0.0, Dir2::NEG_Y)
        .with_max_distance(GROUND_TOLERANCE)
        .with_query_filter(SpatialQueryFilter::from_mask(CollisionLayer::Body))
}

/// Walking velocity for the held arrow keys. Left wins when both are held.
#[must_use]
pub const fn horizontal_velocity(left: bool, right: bool) -> f32 {
    if left {
        -CHEF_SPEED
    } else if right {
        CHEF_SPEED
    } else {
        0.0
    }
}

// === Systems ===

/// Track whether the foot caster touches something solid.
fn update_grounded(
    mut commands: Commands,
    chefs: Query<(Entity, &ShapeHits, Has<Grounded>), With<Chef>>,
) {
    for (entity, hits, was_grounded) in &chefs {
        let grounded = hits.iter().next().is_some();
        if grounded && !was_grounded {
            commands.entity(entity).insert(Grounded);
        } else if !grounded && was_grounded {
            commands.entity(entity).remove::<Grounded>();
        }
    }
}

/// The only place keyboard input touches the chef. Ignored once time is up.
fn move_chef(
    keyboard: Res<ButtonInput<KeyCode>>,
    session: Option<Res<KitchenSession>>,
    mut chef: Query<(&mut LinearVelocity, Has<Grounded>), With<Chef>>,
) {
    if session.is_some_and(|session| session.phase() == SessionPhase::Ended) {
        return;
    }
    let Ok((mut velocity, grounded)) = chef.single_mut() else {
        return;
    };

    velocity.x = horizontal_velocity(
        keyboard.pressed(KeyCode::ArrowLeft),
        keyboard.pressed(KeyCode::ArrowRight),
    );
    if keyboard.pressed(KeyCode::ArrowUp) && grounded {
        velocity.y = CHEF_JUMP_SPEED;
    }
}

/// Stop the chef dead when the session ends mid-movement.
fn freeze_chef(
    mut updates: MessageReader<SessionUpdate>,
    mut chef: Query<&mut LinearVelocity, With<Chef>>,
) {
    for update in updates.read() {
        if **update == SessionEvent::PhaseChanged(SessionPhase::Ended) {
            for mut velocity in &mut chef {
                velocity.0 = Vec2::ZERO;
            }
        }
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Chef>().register_type::<Grounded>();

    app.add_systems(
        Update,
        (update_grounded, move_chef)
            .chain()
            .in_set(GameSet::Input)
            .run_if(gameplay_running),
    );
    app.add_systems(
        Update,
        freeze_chef
            .in_set(GameSet::Presentation)
            .run_if(in_state(GameState::Kitchen)),
    );
}
