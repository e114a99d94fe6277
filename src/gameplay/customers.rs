//! Customers waiting at the counter and serving them.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::chef::Chef;
use super::kitchen::{KitchenSession, SessionEntity, SessionUpdate};
use super::level;
use super::session::{Customer, CustomerId, CustomerKind, SessionEvent};
use crate::screens::GameState;
use crate::theme::palette;
use crate::third_party::CollisionLayer;
use crate::{GameSet, Z_CUSTOMER, gameplay_running};

pub const CUSTOMER_SIZE: Vec2 = Vec2::new(36.0, 44.0);

const ORDER_LABEL_OFFSET: f32 = 32.0;

/// A waiting customer.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Reflect)]
#[reflect(Component)]
pub struct Patron(pub CustomerId);

#[must_use]
pub const fn customer_color(kind: CustomerKind) -> Color {
    match kind {
        CustomerKind::Dog => Color::srgb(0.7, 0.5, 0.3),
        CustomerKind::Cat => Color::srgb(0.55, 0.55, 0.6),
        CustomerKind::Rabbit => Color::srgb(0.92, 0.9, 0.88),
        CustomerKind::Fox => Color::srgb(0.9, 0.45, 0.15),
    }
}

#[must_use]
pub fn order_label(customer: &Customer) -> String {
    format!(
        "{} wants {}",
        customer.kind.display_name(),
        customer.wants.display_name()
    )
}

/// Seat a labelled customer at the spot the session picked.
fn seat_customers(mut commands: Commands, mut updates: MessageReader<SessionUpdate>) {
    for update in updates.read() {
        let SessionEvent::CustomerSpawned(customer) = **update else {
            continue;
        };
        let Some(position) = level::customer_position(customer.slot) else {
            warn!(
                "customer {} has no spot for slot {}",
                customer.id.0, customer.slot.0
            );
            continue;
        };
        commands.spawn((
            Name::new(format!("{} Customer", customer.kind.display_name())),
            Patron(customer.id),
            SessionEntity,
            Sprite::from_color(customer_color(customer.kind), CUSTOMER_SIZE),
            Transform::from_translation(position.extend(Z_CUSTOMER)),
            DespawnOnExit(GameState::Kitchen),
            RigidBody::Static,
            Collider::rectangle(CUSTOMER_SIZE.x, CUSTOMER_SIZE.y),
            Sensor,
            CollisionLayer::trigger(),
            children![(
                Text2d::new(order_label(&customer)),
                TextFont::from_font_size(palette::FONT_SIZE_SMALL),
                TextColor(palette::KITCHEN_LABEL),
                Transform::from_xyz(0.0, ORDER_LABEL_OFFSET, 0.1),
            )],
        ));
    }
}

/// Served customers leave.
fn dismiss_customers(
    mut commands: Commands,
    mut updates: MessageReader<SessionUpdate>,
    patrons: Query<(Entity, &Patron)>,
) {
    for update in updates.read() {
        let SessionEvent::FoodServed { customer, .. } = **update else {
            continue;
        };
        for (entity, patron) in &patrons {
            if patron.0 == customer {
                commands.entity(entity).despawn();
            }
        }
    }
}

/// Touching a customer hands over whatever the chef carries.
fn serve_on_contact(
    chef: Query<&CollidingEntities, With<Chef>>,
    patrons: Query<&Patron>,
    mut session: ResMut<KitchenSession>,
) {
    if session.carried().is_none() {
        return;
    }
    let Ok(contacts) = chef.single() else {
        return;
    };
    for patron in contacts.iter().filter_map(|&entity| patrons.get(entity).ok()) {
        if session.serve_customer(patron.0).is_some() {
            break;
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<Patron>();

    app.add_systems(
        Update,
        serve_on_contact
            .in_set(GameSet::Interaction)
            .run_if(gameplay_running.and(resource_exists::<KitchenSession>)),
    );
    app.add_systems(
        Update,
        (seat_customers, dismiss_customers)
            .chain()
            .in_set(GameSet::Presentation)
            .run_if(in_state(GameState::Kitchen)),
    );
}
