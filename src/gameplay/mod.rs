//! Gameplay: the kitchen session and the entities that mirror it.
//!
//! [`session`] holds the rules and knows nothing about Bevy. The other modules
//! drive it from the frame clock, turn its events into entities, and feed
//! chef contacts back into it.

mod chef;
mod customers;
mod food;
mod hud;
mod kitchen;
pub mod level;
pub mod session;
mod trash;

use bevy::prelude::*;

pub use chef::{CHEF_JUMP_SPEED, CHEF_SPEED, Chef, Grounded, spawn_chef};
pub use customers::Patron;
pub use food::{Carried, Dish};
pub use hud::{ScoreDisplay, TimerDisplay};
pub use kitchen::{KitchenRules, KitchenSession, RestartSession, SessionEntity, SessionUpdate};
pub use trash::TrashBin;

pub fn plugin(app: &mut App) {
    app.add_plugins((
        kitchen::plugin,
        level::plugin,
        chef::plugin,
        food::plugin,
        customers::plugin,
        trash::plugin,
        hud::plugin,
    ));
}
