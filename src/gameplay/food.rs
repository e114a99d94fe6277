//! Food on the cabinets and in the chef's hands.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::chef::Chef;
use super::kitchen::{KitchenSession, SessionEntity, SessionUpdate};
use super::level;
use super::session::{FoodId, FoodKind, SessionEvent};
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_CARRIED, Z_FOOD, gameplay_running};

// === Constants ===

pub const FOOD_SIZE: Vec2 = Vec2::new(28.0, 28.0);

/// Where carried food hovers relative to the chef's center.
pub const CARRY_OFFSET: Vec2 = Vec2::new(0.0, 30.0);

/// Share of the remaining distance carried food covers each frame.
pub const CARRY_SMOOTHING: f32 = 0.2;

const CARRIED_ALPHA: f32 = 0.5;

// === Components ===

/// A food item of the session, on a cabinet or carried.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Dish(pub FoodId);

/// The dish is in the chef's hands: no collider, dimmed, follows the chef.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Carried;

#[must_use]
pub const fn food_color(kind: FoodKind) -> Color {
    match kind {
        FoodKind::Pizza => Color::srgb(0.95, 0.6, 0.15),
        FoodKind::Burger => Color::srgb(0.55, 0.3, 0.1),
        FoodKind::Fries => Color::srgb(1.0, 0.85, 0.2),
        FoodKind::Donut => Color::srgb(0.95, 0.45, 0.7),
        FoodKind::Salad => Color::srgb(0.3, 0.75, 0.25),
    }
}

#[must_use]
pub fn carry_target(chef: Vec2) -> Vec2 {
    chef + CARRY_OFFSET
}

/// One frame of easing toward `target`.
#[must_use]
pub fn ease_toward(current: Vec2, target: Vec2) -> Vec2 {
    current.lerp(target, CARRY_SMOOTHING)
}

// === Systems ===

/// Put a dish on its cabinet for every food the session spawns.
fn spawn_dishes(mut commands: Commands, mut updates: MessageReader<SessionUpdate>) {
    for update in updates.read() {
        let SessionEvent::FoodSpawned(food) = **update else {
            continue;
        };
        let Some(position) = level::food_position(food.slot) else {
            warn!("food {} has no cabinet for slot {}", food.id.0, food.slot.0);
            continue;
        };
        commands.spawn((
            Name::new(format!("{} Dish", food.kind.display_name())),
            Dish(food.id),
            SessionEntity,
            Sprite::from_color(food_color(food.kind), FOOD_SIZE),
            Transform::from_translation(position.extend(Z_FOOD)),
            DespawnOnExit(GameState::Kitchen),
            RigidBody::Static,
            Collider::rectangle(FOOD_SIZE.x, FOOD_SIZE.y),
            Sensor,
            CollisionLayer::trigger(),
            children![(
                Text2d::new(food.kind.display_name()),
                TextFont::from_font_size(palette::FONT_SIZE_SMALL),
                TextColor(palette::KITCHEN_LABEL),
                Transform::from_xyz(0.0, FOOD_SIZE.y / 2.0 + 10.0, 0.1),
            )],
        ));
    }
}

/// Dim the collected dish and turn it into cargo.
fn pick_up_dishes(
    mut commands: Commands,
    mut updates: MessageReader<SessionUpdate>,
    mut dishes: Query<(Entity, &Dish, &mut Sprite, &mut Transform)>,
) {
    for update in updates.read() {
        let SessionEvent::FoodCollected(id) = **update else {
            continue;
        };
        for (entity, dish, mut sprite, mut transform) in &mut dishes {
            if dish.0 != id {
                continue;
            }
            sprite.color = sprite.color.with_alpha(CARRIED_ALPHA);
            transform.translation.z = Z_CARRIED;
            commands
                .entity(entity)
                .remove::<(RigidBody, Collider, Sensor)>()
                .insert(Carried);
        }
    }
}

/// Served or thrown away: the dish is gone.
fn clear_dishes(
    mut commands: Commands,
    mut updates: MessageReader<SessionUpdate>,
    dishes: Query<(Entity, &Dish)>,
) {
    for update in updates.read() {
        let gone = match **update {
            SessionEvent::FoodServed { food, .. } | SessionEvent::FoodDiscarded(food) => food,
            _ => continue,
        };
        for (entity, dish) in &dishes {
            if dish.0 == gone {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Touching a dish on a cabinet picks it up, if the session allows it.
fn collect_on_contact(
    chef: Query<&CollidingEntities, With<Chef>>,
    dishes: Query<&Dish, Without<Carried>>,
    mut session: ResMut<KitchenSession>,
) {
    let Ok(contacts) = chef.single() else {
        return;
    };
    for dish in contacts.iter().filter_map(|&entity| dishes.get(entity).ok()) {
        if session.collect_food(dish.0) {
            break;
        }
    }
}

/// Ease carried food toward the spot above the chef's head.
fn follow_chef(
    chef: Query<&Transform, With<Chef>>,
    mut carried: Query<&mut Transform, (With<Carried>, Without<Chef>)>,
) {
    let Ok(chef) = chef.single() else {
        return;
    };
    let target = carry_target(chef.translation.truncate());
    for mut transform in &mut carried {
        let eased = ease_toward(transform.translation.truncate(), target);
        transform.translation = eased.extend(transform.translation.z);
    }
}

// === Plugin ===

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Dish>().register_type::<Carried>();

    app.add_systems(
        Update,
        collect_on_contact
            .in_set(GameSet::Interaction)
            .run_if(gameplay_running.and(resource_exists::<KitchenSession>)),
    );
    app.add_systems(
        Update,
        (
            (spawn_dishes, pick_up_dishes, clear_dishes)
                .chain()
                .run_if(in_state(GameState::Kitchen)),
            follow_chef.run_if(gameplay_running),
        )
            .chain()
            .in_set(GameSet::Presentation),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gameplay::session::{CustomerId, FoodItem, FoodSlot, ServeOutcome, Session};
    use crate::testing::{
        active_session, assert_entity_count, create_base_test_app, insert_session, publish,
        quiet_session, session,
    };
    use pretty_assertions::assert_eq;

    fn create_dish_test_app() -> App {
        let mut app = create_base_test_app();
        app.add_systems(Update, (spawn_dishes, pick_up_dishes, clear_dishes).chain());
        app
    }

    fn spawn_event(id: u32, slot: usize) -> SessionEvent {
        SessionEvent::FoodSpawned(FoodItem {
            id: FoodId(id),
            slot: FoodSlot(slot),
            kind: FoodKind::Pizza,
            carried: false,
        })
    }

    fn dish_entity(app: &mut App, id: FoodId) -> Entity {
        let mut query = app.world_mut().query::<(Entity, &Dish)>();
        query
            .iter(app.world())
            .find(|(_, dish)| dish.0 == id)
            .map(|(entity, _)| entity)
            .unwrap()
    }

    #[test]
    fn spawned_food_appears_above_its_cabinet() {
        let mut app = create_dish_test_app();
        publish(&mut app, spawn_event(0, 2));
        app.update();

        let entity = dish_entity(&mut app, FoodId(0));
        let transform = app.world().get::<Transform>(entity).unwrap();
        assert_eq!(
            transform.translation.truncate(),
            level::food_position(FoodSlot(2)).unwrap()
        );
        assert!(app.world().get::<Sensor>(entity).is_some());
    }

    #[test]
    fn food_for_unknown_slot_is_skipped() {
        let mut app = create_dish_test_app();
        publish(&mut app, spawn_event(0, 99));
        app.update();
        assert_entity_count::<With<Dish>>(&mut app, 0);
    }

    #[test]
    fn collected_food_is_dimmed_and_loses_its_collider() {
        let mut app = create_dish_test_app();
        publish(&mut app, spawn_event(0, 0));
        app.update();
        publish(&mut app, SessionEvent::FoodCollected(FoodId(0)));
        app.update();

        let entity = dish_entity(&mut app, FoodId(0));
        assert!(app.world().get::<Carried>(entity).is_some());
        assert!(app.world().get::<Collider>(entity).is_none());
        let sprite = app.world().get::<Sprite>(entity).unwrap();
        assert_eq!(sprite.color.alpha(), CARRIED_ALPHA);
    }

    #[test]
    fn served_and_discarded_food_is_despawned() {
        let mut app = create_dish_test_app();
        publish(&mut app, spawn_event(0, 0));
        publish(&mut app, spawn_event(1, 1));
        app.update();
        assert_entity_count::<With<Dish>>(&mut app, 2);

        publish(
            &mut app,
            SessionEvent::FoodServed {
                food: FoodId(0),
                customer: CustomerId(7),
                outcome: ServeOutcome::Correct,
            },
        );
        publish(&mut app, SessionEvent::FoodDiscarded(FoodId(1)));
        app.update();
        assert_entity_count::<With<Dish>>(&mut app, 0);
    }

    fn create_contact_test_app(mut session: Session) -> (App, FoodId) {
        let mut app = create_base_test_app();
        let id = session.spawn_food(FoodSlot(0)).unwrap();
        insert_session(&mut app, session);
        app.add_systems(Update, collect_on_contact);

        let dish = app.world_mut().spawn(Dish(id)).id();
        let mut contacts = CollidingEntities::default();
        contacts.insert(dish);
        app.world_mut().spawn((Chef, contacts));
        (app, id)
    }

    #[test]
    fn touching_food_picks_it_up() {
        let (mut app, id) = create_contact_test_app(active_session(3));
        app.update();
        assert_eq!(session(&app).carried().map(|food| food.id), Some(id));
    }

    #[test]
    fn touching_food_during_intro_does_nothing() {
        let (mut app, _) = create_contact_test_app(quiet_session(3));
        app.update();
        assert!(session(&app).carried().is_none());
    }

    #[test]
    fn easing_covers_a_fifth_of_the_gap() {
        let eased = ease_toward(Vec2::ZERO, Vec2::new(10.0, -5.0));
        assert!((eased - Vec2::new(2.0, -1.0)).length() < 1e-5);
    }

    #[test]
    fn carried_food_drifts_toward_the_chef() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_systems(Update, follow_chef);
        app.world_mut()
            .spawn((Chef, Transform::from_xyz(100.0, 0.0, 0.0)));
        let dish = app
            .world_mut()
            .spawn((Carried, Transform::from_xyz(0.0, 0.0, Z_CARRIED)))
            .id();

        let target = carry_target(Vec2::new(100.0, 0.0));
        let mut last_gap = target.length();
        for _ in 0..10 {
            app.update();
            let position = app.world().get::<Transform>(dish).unwrap().translation;
            let gap = (target - position.truncate()).length();
            assert!(gap < last_gap);
            assert_eq!(position.z, Z_CARRIED);
            last_gap = gap;
        }
        // Eased, not snapped.
        assert!(last_gap > 0.0);
    }
}
