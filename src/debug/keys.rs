use bevy::prelude::*;
use bevy_rapier2d::render::DebugRenderContext;

/// F3 toggles the rapier collider wireframe.
pub fn debug_key_input_system(
    keys: Res<ButtonInput<KeyCode>>,
    ctx: Option<ResMut<DebugRenderContext>>,
) {
    if !keys.just_pressed(KeyCode::F3) {
        return;
    }
    let Some(mut ctx) = ctx else {
        return;
    };
    ctx.enabled = !ctx.enabled;
    info!(
        "Rapier wireframe {}",
        if ctx.enabled { "enabled" } else { "disabled" }
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn f3_toggles_wireframe() {
        let mut app = App::new();
        app.insert_resource(ButtonInput::<KeyCode>::default());
        app.insert_resource(DebugRenderContext {
            enabled: false,
            ..Default::default()
        });
        app.add_systems(Update, debug_key_input_system);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::F3);
        app.update();
        assert!(app.world().resource::<DebugRenderContext>().enabled);

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .clear();
        app.update();
        assert!(app.world().resource::<DebugRenderContext>().enabled);
    }
}
