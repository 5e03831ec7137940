//! Looping background music and fire-and-forget sound effects.

use bevy::audio::Volume;
use bevy::prelude::*;

use crate::app::state::AppState;
use crate::core::assets::{load_optional, AssetRoot, MissingAssets};
use crate::core::config::GameConfig;
use crate::core::events::{PlayerCrashed, PlayerJumped};

#[derive(Resource, Debug, Default, Clone)]
pub struct GameAudioAssets {
    pub background: Option<Handle<AudioSource>>,
    pub jump: Option<Handle<AudioSource>>,
    pub collision: Option<Handle<AudioSource>>,
}

/// The looping music entity; present only while playing.
#[derive(Component)]
pub struct BackgroundMusic;

pub struct GameAudioPlugin;

impl Plugin for GameAudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameAudioAssets>().add_systems(
            Update,
            (
                load_audio_assets.run_if(resource_changed::<GameConfig>),
                sync_background_music,
                play_jump_sound,
                play_collision_sound,
            )
                .chain(),
        );
    }
}

fn load_audio_assets(
    cfg: Res<GameConfig>,
    server: Res<AssetServer>,
    root: Res<AssetRoot>,
    mut missing: ResMut<MissingAssets>,
    mut assets: ResMut<GameAudioAssets>,
    mut commands: Commands,
    q_music: Query<Entity, With<BackgroundMusic>>,
) {
    let next = if cfg.audio.enabled {
        let a = &cfg.audio;
        GameAudioAssets {
            background: load_optional(&server, &root, &mut missing, &a.background, "music"),
            jump: load_optional(&server, &root, &mut missing, &a.jump, "jump sound"),
            collision: load_optional(&server, &root, &mut missing, &a.collision, "collision sound"),
        }
    } else {
        GameAudioAssets::default()
    };
    if assets.background != next.background {
        // Restart with the new track (or silence).
        for e in &q_music {
            commands.entity(e).despawn();
        }
    }
    *assets = next;
}

/// Music loops while `Playing` and is stopped on any prompt.
pub fn sync_background_music(
    mut commands: Commands,
    state: Res<State<AppState>>,
    cfg: Res<GameConfig>,
    assets: Res<GameAudioAssets>,
    q_music: Query<Entity, With<BackgroundMusic>>,
) {
    let playing = matches!(state.get(), AppState::Playing) && cfg.audio.enabled;
    match (playing, q_music.is_empty(), &assets.background) {
        (true, true, Some(track)) => {
            debug!(target: "audio", "Background music start");
            commands.spawn((
                Name::new("BackgroundMusic"),
                BackgroundMusic,
                AudioPlayer::new(track.clone()),
                PlaybackSettings::LOOP.with_volume(Volume::Linear(cfg.audio.volume)),
            ));
        }
        (false, false, _) => {
            debug!(target: "audio", "Background music stop");
            for e in &q_music {
                commands.entity(e).despawn();
            }
        }
        _ => {}
    }
}

fn play_one_shot(commands: &mut Commands, handle: &Handle<AudioSource>, volume: f32) {
    commands.spawn((
        AudioPlayer::new(handle.clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(volume)),
    ));
}

fn play_jump_sound(
    mut commands: Commands,
    mut events: EventReader<PlayerJumped>,
    cfg: Res<GameConfig>,
    assets: Res<GameAudioAssets>,
) {
    if events.read().count() == 0 {
        return;
    }
    if let (true, Some(handle)) = (cfg.audio.enabled, &assets.jump) {
        play_one_shot(&mut commands, handle, cfg.audio.volume);
    }
}

fn play_collision_sound(
    mut commands: Commands,
    mut events: EventReader<PlayerCrashed>,
    cfg: Res<GameConfig>,
    assets: Res<GameAudioAssets>,
) {
    if events.read().count() == 0 {
        return;
    }
    if let (true, Some(handle)) = (cfg.audio.enabled, &assets.collision) {
        play_one_shot(&mut commands, handle, cfg.audio.volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::state::app::StatesPlugin;

    fn music_count(app: &mut App) -> usize {
        let world = app.world_mut();
        world.query::<&BackgroundMusic>().iter(world).count()
    }

    #[test]
    fn music_follows_playing_state() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(GameConfig::default());
        app.insert_resource(GameAudioAssets {
            background: Some(Handle::default()),
            ..Default::default()
        });
        app.init_state::<AppState>();
        app.add_systems(Update, sync_background_music);

        app.update();
        assert_eq!(music_count(&mut app), 1);
        app.update();
        assert_eq!(music_count(&mut app), 1, "music must not stack");

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::GameOver);
        app.update();
        assert_eq!(music_count(&mut app), 0);

        app.world_mut()
            .resource_mut::<NextState<AppState>>()
            .set(AppState::Playing);
        app.update();
        assert_eq!(music_count(&mut app), 1);
    }

    #[test]
    fn missing_track_stays_silent() {
        let mut app = App::new();
        app.add_plugins((MinimalPlugins, StatesPlugin));
        app.insert_resource(GameConfig::default());
        app.init_resource::<GameAudioAssets>();
        app.init_state::<AppState>();
        app.add_systems(Update, sync_background_music);
        app.update();
        assert_eq!(music_count(&mut app), 0);
    }

    const JUMP: Handle<AudioSource> = Handle::weak_from_u128(0x6a75_6d70);
    const CRASH: Handle<AudioSource> = Handle::weak_from_u128(0x6372_6173);

    fn effects_app(enabled: bool) -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(crate::core::events::GameEventsPlugin);
        let mut cfg = GameConfig::default();
        cfg.audio.enabled = enabled;
        app.insert_resource(cfg);
        app.insert_resource(GameAudioAssets {
            background: None,
            jump: Some(JUMP),
            collision: Some(CRASH),
        });
        app.add_systems(Update, (play_jump_sound, play_collision_sound));
        app
    }

    fn one_shots(app: &mut App) -> Vec<Handle<AudioSource>> {
        let world = app.world_mut();
        world
            .query_filtered::<&AudioPlayer, Without<BackgroundMusic>>()
            .iter(world)
            .map(|p| p.0.clone())
            .collect()
    }

    #[test]
    fn events_spawn_one_shot_players() {
        let mut app = effects_app(true);
        app.update();
        assert!(one_shots(&mut app).is_empty());

        app.world_mut().send_event(PlayerJumped);
        app.update();
        assert_eq!(one_shots(&mut app), vec![JUMP]);

        app.world_mut().send_event(PlayerCrashed {
            contact: crate::core::level::BandContact::Bottom,
        });
        app.update();
        let played = one_shots(&mut app);
        assert_eq!(played.len(), 2);
        assert!(played.contains(&CRASH));
    }

    #[test]
    fn disabled_audio_plays_nothing() {
        let mut app = effects_app(false);
        app.world_mut().send_event(PlayerJumped);
        app.world_mut().send_event(PlayerCrashed {
            contact: crate::core::level::BandContact::Top,
        });
        app.update();
        assert!(one_shots(&mut app).is_empty());
    }
}
