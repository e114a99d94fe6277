//! Kitchen level: walls, floor, cabinets, table, and the food/customer slots.
//!
//! World coordinates: origin at the screen center, y up, 800x600 visible.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::session::{CustomerSlot, FoodSlot};
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{Z_BACKGROUND, Z_PROPS};

// === Layout ===

pub const ARENA_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Height the chef stands at on the floor cabinet.
pub const FLOOR_TOP: f32 = -260.0;
const FLOOR_THICKNESS: f32 = 40.0;
const WALL_THICKNESS: f32 = 20.0;

pub const CABINET_SIZE: Vec2 = Vec2::new(110.0, 24.0);

/// Cabinet centers, one food slot each.
pub const FOOD_CABINETS: [Vec2; 4] = [
    Vec2::new(290.0, 15.0),
    Vec2::new(-300.0, 15.0),
    Vec2::new(0.0, 130.0),
    Vec2::new(0.0, -100.0),
];

/// How far above its cabinet's center a food floats.
pub const FOOD_LIFT: f32 = 50.0;

/// Where customers wait, one customer slot each.
pub const CUSTOMER_SPOTS: [Vec2; 1] = [Vec2::new(0.0, -200.0)];

pub const TABLE_SIZE: Vec2 = Vec2::new(60.0, 30.0);
pub const TABLE_POSITION: Vec2 = Vec2::new(-350.0, FLOOR_TOP + TABLE_SIZE.y / 2.0);

pub const CHEF_START: Vec2 = Vec2::new(-200.0, -150.0);

/// Rise from the floor to the top of the lowest cabinet.
pub const LOWEST_CLIMB: f32 = FOOD_CABINETS[3].y + CABINET_SIZE.y / 2.0 - FLOOR_TOP;

// === Slots ===

#[must_use]
pub fn food_slots() -> impl Iterator<Item = FoodSlot> {
    (0..FOOD_CABINETS.len()).map(FoodSlot)
}

#[must_use]
pub fn customer_slots() -> impl Iterator<Item = CustomerSlot> {
    (0..CUSTOMER_SPOTS.len()).map(CustomerSlot)
}

/// Resting position of the food for a slot.
#[must_use]
pub fn food_position(slot: FoodSlot) -> Option<Vec2> {
    FOOD_CABINETS
        .get(slot.0)
        .map(|cabinet| *cabinet + Vec2::Y * FOOD_LIFT)
}

#[must_use]
pub fn customer_position(slot: CustomerSlot) -> Option<Vec2> {
    CUSTOMER_SPOTS.get(slot.0).copied()
}

// === Components ===

/// Marker for cabinets (including the floor cabinet).
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Cabinet;

/// The table prop. Solid, but nothing can be placed on it.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Table;

// === Systems ===

/// Static, colored, solid rectangle.
fn solid(name: &'static str, color: Color, size: Vec2, center: Vec2) -> impl Bundle {
    (
        Name::new(name),
        Sprite::from_color(color, size),
        Transform::from_translation(center.extend(Z_PROPS)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayer::solid(),
        DespawnOnExit(GameState::Kitchen),
    )
}

/// Invisible solid boundary.
fn wall(name: &'static str, size: Vec2, center: Vec2) -> impl Bundle {
    (
        Name::new(name),
        Transform::from_translation(center.extend(Z_PROPS)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayer::solid(),
        DespawnOnExit(GameState::Kitchen),
    )
}

/// Build the kitchen on entering it.
fn spawn_level(mut commands: Commands) {
    commands.spawn((
        Name::new("Kitchen Background"),
        Sprite::from_color(palette::KITCHEN_BACKGROUND, ARENA_SIZE),
        Transform::from_xyz(0.0, 0.0, Z_BACKGROUND),
        DespawnOnExit(GameState::Kitchen),
    ));

    commands.spawn((
        solid(
            "Floor Cabinet",
            palette::FLOOR_CABINET,
            Vec2::new(ARENA_SIZE.x, FLOOR_THICKNESS),
            Vec2::new(0.0, FLOOR_TOP - FLOOR_THICKNESS / 2.0),
        ),
        Cabinet,
    ));
    for center in FOOD_CABINETS {
        commands.spawn((
            solid("Cabinet", palette::CABINET, CABINET_SIZE, center),
            Cabinet,
        ));
    }
    commands.spawn((
        solid("Table", palette::TABLE, TABLE_SIZE, TABLE_POSITION),
        Table,
    ));

    let half = ARENA_SIZE / 2.0;
    let offset = WALL_THICKNESS / 2.0;
    commands.spawn(wall(
        "Left Wall",
        Vec2::new(WALL_THICKNESS, ARENA_SIZE.y),
        Vec2::new(-half.x - offset, 0.0),
    ));
    commands.spawn(wall(
        "Right Wall",
        Vec2::new(WALL_THICKNESS, ARENA_SIZE.y),
        Vec2::new(half.x + offset, 0.0),
    ));
    commands.spawn(wall(
        "Ceiling",
        Vec2::new(ARENA_SIZE.x, WALL_THICKNESS),
        Vec2::new(0.0, half.y + offset),
    ));
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Cabinet>().register_type::<Table>();
    app.add_systems(OnEnter(GameState::Kitchen), spawn_level);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{assert_entity_count, create_base_test_app, transition_to_kitchen};
    use pretty_assertions::assert_eq;

    #[test]
    fn every_slot_has_a_position() {
        assert_eq!(food_slots().count(), FOOD_CABINETS.len());
        for slot in food_slots() {
            assert!(food_position(slot).is_some());
        }
        for slot in customer_slots() {
            assert!(customer_position(slot).is_some());
        }
        assert_eq!(food_position(FoodSlot(FOOD_CABINETS.len())), None);
    }

    #[test]
    fn food_floats_above_its_cabinet() {
        let position = food_position(FoodSlot(0)).unwrap();
        assert_eq!(position, Vec2::new(290.0, 65.0));
    }

    #[test]
    fn slots_are_inside_the_arena() {
        let half = ARENA_SIZE / 2.0;
        let inside = |p: Vec2| p.x.abs() < half.x && p.y.abs() < half.y;
        assert!(food_slots().filter_map(food_position).all(inside));
        assert!(customer_slots().filter_map(customer_position).all(inside));
    }

    #[test]
    fn level_spawns_floor_cabinets_and_table() {
        let mut app = create_base_test_app();
        app.add_plugins(plugin);
        transition_to_kitchen(&mut app);

        assert_entity_count::<With<Cabinet>>(&mut app, FOOD_CABINETS.len() + 1);
        assert_entity_count::<With<Table>>(&mut app, 1);
    }

    #[test]
    fn level_despawns_when_leaving_kitchen() {
        let mut app = create_base_test_app();
        app.add_plugins(plugin);
        transition_to_kitchen(&mut app);

        app.world_mut()
            .resource_mut::<NextState<GameState>>()
            .set(GameState::Welcome);
        app.update();

        assert_entity_count::<With<Cabinet>>(&mut app, 0);
        assert_entity_count::<With<RigidBody>>(&mut app, 0);
    }
}
