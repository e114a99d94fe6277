//! Score and countdown read-outs in the top-left corner.

use bevy::prelude::*;

use super::kitchen::{KitchenRules, SessionUpdate};
use super::session::SessionEvent;
use crate::GameSet;
use crate::screens::GameState;
use crate::theme::widget;

/// Marker for the score text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct ScoreDisplay;

/// Marker for the countdown text.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct TimerDisplay;

fn score_text(score: i32) -> String {
    format!("Score: {score}")
}

fn time_text(seconds: u32) -> String {
    format!("Time: {seconds} s")
}

/// Score in the top-left corner, remaining time under it.
fn spawn_hud(mut commands: Commands, rules: Res<KitchenRules>) {
    commands.spawn((
        Name::new("Score Display"),
        ScoreDisplay,
        widget::hud_text(score_text(0), 0),
        DespawnOnExit(GameState::Kitchen),
    ));
    commands.spawn((
        Name::new("Timer Display"),
        TimerDisplay,
        widget::hud_text(time_text(rules.duration_secs), 1),
        DespawnOnExit(GameState::Kitchen),
    ));
}

/// Rewrite the read-outs from score and time changes.
fn update_hud(
    mut updates: MessageReader<SessionUpdate>,
    mut score: Single<&mut Text, (With<ScoreDisplay>, Without<TimerDisplay>)>,
    mut timer: Single<&mut Text, (With<TimerDisplay>, Without<ScoreDisplay>)>,
) {
    for update in updates.read() {
        match **update {
            SessionEvent::ScoreChanged(points) => **score = Text::new(score_text(points)),
            SessionEvent::TimeChanged(seconds) => **timer = Text::new(time_text(seconds)),
            _ => {}
        }
    }
}

pub(super) fn plugin(app: &mut App) {
    app.register_type::<ScoreDisplay>()
        .register_type::<TimerDisplay>();

    app.add_systems(OnEnter(GameState::Kitchen), spawn_hud);
    app.add_systems(
        Update,
        update_hud
            .in_set(GameSet::Presentation)
            .run_if(in_state(GameState::Kitchen)),
    );
}
