//! Development tools, only included with the `dev` feature.
//!
//! - `F1` toggles the world inspector.
//! - `F2` fast-forwards the running session.

use std::time::Duration;

use bevy::input::common_conditions::{input_just_pressed, input_toggle_active};
use bevy::prelude::*;
use bevy_inspector_egui::bevy_egui::EguiPlugin;
use bevy_inspector_egui::quick::WorldInspectorPlugin;

use crate::gameplay::KitchenSession;
use crate::{GameSet, gameplay_running};

const INSPECTOR_KEY: KeyCode = KeyCode::F1;
const FAST_FORWARD_KEY: KeyCode = KeyCode::F2;

/// Session time skipped per fast-forward key press.
const FAST_FORWARD_STEP: Duration = Duration::from_secs(10);

fn fast_forward_session(mut session: ResMut<KitchenSession>) {
    session.advance(FAST_FORWARD_STEP);
    debug!(
        "fast-forwarded session, {} s left",
        session.time_remaining()
    );
}

pub(super) fn plugin(app: &mut App) {
    app.add_plugins(EguiPlugin::default());
    app.add_plugins(WorldInspectorPlugin::new().run_if(input_toggle_active(false, INSPECTOR_KEY)));

    app.add_systems(
        Update,
        fast_forward_session
            .in_set(GameSet::Clock)
            .run_if(
                gameplay_running
                    .and(resource_exists::<KitchenSession>)
                    .and(input_just_pressed(FAST_FORWARD_KEY)),
            ),
    );
}
