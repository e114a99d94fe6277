//! Tests for screen and overlay transitions.

use bevy::prelude::*;
use cook_off_showdown::menus::Menu;
use cook_off_showdown::screens::GameState;
use pretty_assertions::assert_eq;

use crate::{create_game_app, enter_kitchen};

fn game_state(app: &App) -> GameState {
    *app.world().resource::<State<GameState>>().get()
}

fn menu(app: &App) -> Menu {
    *app.world().resource::<State<Menu>>().get()
}

#[test]
fn game_initializes_in_loading_state() {
    let app = create_game_app();
    assert_eq!(game_state(&app), GameState::Loading);
}

#[test]
fn loading_hands_over_to_welcome_menu() {
    let mut app = create_game_app();
    app.update();
    app.update();
    app.update();

    assert_eq!(game_state(&app), GameState::Welcome);
    assert_eq!(menu(&app), Menu::Welcome);
}

#[test]
fn how_to_play_returns_to_welcome() {
    let mut app = create_game_app();
    app.update();
    app.update();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<Menu>>()
        .set(Menu::HowToPlay);
    app.update();
    assert_eq!(menu(&app), Menu::HowToPlay);

    app.world_mut()
        .resource_mut::<NextState<Menu>>()
        .set(Menu::Welcome);
    app.update();
    assert_eq!(menu(&app), Menu::Welcome);
    assert_eq!(game_state(&app), GameState::Welcome);
}

#[test]
fn starting_the_game_closes_every_overlay() {
    let mut app = create_game_app();
    app.update();
    app.update();
    app.update();

    enter_kitchen(&mut app);
    assert_eq!(game_state(&app), GameState::Kitchen);
    assert_eq!(menu(&app), Menu::None);
    assert!(!app.world().resource::<Time<Virtual>>().is_paused());
}
