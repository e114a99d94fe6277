//! A full session played through the ECS: pickup, service, time up, restart.

use avian2d::prelude::LinearVelocity;
use bevy::prelude::*;
use cook_off_showdown::gameplay::session::{
    CORRECT_ORDER_POINTS, CUSTOMER_COOLDOWN, INTRO_GRACE, SessionPhase, WRONG_ORDER_PENALTY,
};
use cook_off_showdown::gameplay::{
    Carried, Chef, Dish, Patron, RestartSession, ScoreDisplay, TimerDisplay,
};
use cook_off_showdown::menus::Menu;
use pretty_assertions::assert_eq;

use crate::{count, create_game_app, enter_kitchen, session_mut};

fn text_of<F: bevy::ecs::query::QueryFilter>(app: &mut App) -> String {
    let mut query = app.world_mut().query_filtered::<&Text, F>();
    query.single(app.world()).unwrap().0.clone()
}

fn menu(app: &App) -> Menu {
    *app.world().resource::<State<Menu>>().get()
}

#[test]
fn kitchen_opens_stocked() {
    let mut app = create_game_app();
    enter_kitchen(&mut app);

    assert_eq!(count::<With<Chef>>(&mut app), 1);
    assert_eq!(count::<With<Dish>>(&mut app), 4);
    assert_eq!(count::<With<Patron>>(&mut app), 1);
    assert_eq!(text_of::<With<ScoreDisplay>>(&mut app), "Score: 0");
    assert_eq!(text_of::<With<TimerDisplay>>(&mut app), "Time: 60 s");
}

#[test]
fn session_components_show_up_in_the_inspector() {
    let app = create_game_app();
    let registry = app.world().resource::<AppTypeRegistry>().read();
    for type_id in [
        std::any::TypeId::of::<Dish>(),
        std::any::TypeId::of::<Patron>(),
        std::any::TypeId::of::<Carried>(),
    ] {
        assert!(registry.get_type_data::<ReflectComponent>(type_id).is_some());
    }
}

#[test]
fn pickup_and_service_are_mirrored_in_the_world() {
    let mut app = create_game_app();
    enter_kitchen(&mut app);

    let expected = {
        let mut session = session_mut(&mut app);
        session.advance(INTRO_GRACE);
        let food = session.foods()[0];
        let customer = session.customers()[0];
        assert!(session.collect_food(food.id));
        if food.kind == customer.wants {
            CORRECT_ORDER_POINTS
        } else {
            -WRONG_ORDER_PENALTY
        }
    };
    app.update();
    assert_eq!(count::<With<Carried>>(&mut app), 1);

    let customer = session_mut(&mut app).customers()[0].id;
    assert!(session_mut(&mut app).serve_customer(customer).is_some());
    app.update();

    assert_eq!(count::<With<Carried>>(&mut app), 0);
    assert_eq!(count::<With<Dish>>(&mut app), 3);
    assert_eq!(count::<With<Patron>>(&mut app), 0);
    assert_eq!(
        text_of::<With<ScoreDisplay>>(&mut app),
        format!("Score: {expected}")
    );

    // Both cooldowns have passed: the cabinet is restocked and a new customer waits.
    session_mut(&mut app).advance(CUSTOMER_COOLDOWN);
    app.update();
    assert_eq!(count::<With<Dish>>(&mut app), 4);
    assert_eq!(count::<With<Patron>>(&mut app), 1);
}

#[test]
fn time_up_freezes_the_chef_and_opens_game_over() {
    let mut app = create_game_app();
    enter_kitchen(&mut app);

    let mut chefs = app.world_mut().query_filtered::<Entity, With<Chef>>();
    let chef = chefs.single(app.world()).unwrap();
    app.world_mut().get_mut::<LinearVelocity>(chef).unwrap().0 = Vec2::new(160.0, 50.0);

    session_mut(&mut app).advance(std::time::Duration::from_secs(120));
    app.update();
    app.update();

    assert_eq!(menu(&app), Menu::GameOver);
    assert_eq!(app.world().get::<LinearVelocity>(chef).unwrap().0, Vec2::ZERO);
    assert_eq!(text_of::<With<TimerDisplay>>(&mut app), "Time: 0 s");
    assert!(app.world().resource::<Time<Virtual>>().is_paused());

    let mut texts = app.world_mut().query::<&Text>();
    assert!(
        texts
            .iter(app.world())
            .any(|text| text.0.starts_with("Your Score: "))
    );
}

#[test]
fn restart_starts_a_fresh_session_in_place() {
    let mut app = create_game_app();
    enter_kitchen(&mut app);
    session_mut(&mut app).advance(std::time::Duration::from_secs(120));
    app.update();
    app.update();
    assert_eq!(menu(&app), Menu::GameOver);

    app.world_mut().write_message(RestartSession);
    app.world_mut()
        .resource_mut::<NextState<Menu>>()
        .set(Menu::None);
    app.update();
    app.update();

    assert_eq!(menu(&app), Menu::None);
    assert_eq!(session_mut(&mut app).phase(), SessionPhase::Intro);
    assert_eq!(count::<With<Chef>>(&mut app), 1);
    assert_eq!(count::<With<Dish>>(&mut app), 4);
    assert_eq!(count::<With<Patron>>(&mut app), 1);
    assert_eq!(text_of::<With<ScoreDisplay>>(&mut app), "Score: 0");
    assert_eq!(text_of::<With<TimerDisplay>>(&mut app), "Time: 60 s");
}
