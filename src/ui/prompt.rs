//! Modal yes/no prompts shown when a run ends.
//!
//! `Y` / `Enter` answer yes, `N` / `Escape` answer no. A "no" always quits.

use bevy::prelude::*;
use bevy::ui::{AlignItems, FlexDirection, JustifyContent, Node};

use crate::app::state::AppState;
use crate::core::level::{CurrentLevel, LevelAdvance, LevelCatalog};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    GameOver,
    LevelComplete,
    Victory,
}

impl PromptKind {
    pub fn from_state(state: AppState) -> Option<Self> {
        match state {
            AppState::Playing => None,
            AppState::GameOver => Some(Self::GameOver),
            AppState::LevelComplete => Some(Self::LevelComplete),
            AppState::Victory => Some(Self::Victory),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::GameOver => "Game Over!",
            Self::LevelComplete | Self::Victory => "You win!",
        }
    }

    pub fn question(&self) -> &'static str {
        match self {
            Self::GameOver => "Do you want to start again?",
            Self::LevelComplete => "Next Level?",
            Self::Victory => "All levels cleared. Play again from the start?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    RestartLevel,
    NextLevel,
    RestartCampaign,
    Quit,
}

pub fn resolve_prompt(kind: PromptKind, yes: bool) -> PromptOutcome {
    if !yes {
        return PromptOutcome::Quit;
    }
    match kind {
        PromptKind::GameOver => PromptOutcome::RestartLevel,
        PromptKind::LevelComplete => PromptOutcome::NextLevel,
        PromptKind::Victory => PromptOutcome::RestartCampaign,
    }
}

/// Yes / no from this frame's key presses; yes wins if both are pressed.
fn read_answer(keys: &ButtonInput<KeyCode>) -> Option<bool> {
    if keys.any_just_pressed([KeyCode::KeyY, KeyCode::Enter, KeyCode::NumpadEnter]) {
        Some(true)
    } else if keys.any_just_pressed([KeyCode::KeyN, KeyCode::Escape]) {
        Some(false)
    } else {
        None
    }
}

pub struct PromptPlugin;

impl Plugin for PromptPlugin {
    fn build(&self, app: &mut App) {
        for state in [AppState::GameOver, AppState::LevelComplete, AppState::Victory] {
            app.add_systems(OnEnter(state), spawn_prompt_ui)
                .add_systems(OnExit(state), despawn_prompt_ui);
        }
        app.add_systems(
            Update,
            handle_prompt_input.run_if(|state: Res<State<AppState>>| state.is_prompt()),
        );
    }
}

#[derive(Component)]
pub struct PromptUiRoot;

fn spawn_prompt_ui(mut commands: Commands, state: Res<State<AppState>>) {
    let Some(kind) = PromptKind::from_state(*state.get()) else {
        return;
    };
    info!(target: "prompt", "{} {}", kind.title(), kind.question());
    commands
        .spawn((
            Name::new("PromptUi"),
            PromptUiRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.02, 0.02, 0.05, 0.75)),
            GlobalZIndex(10),
        ))
        .with_children(|p| {
            p.spawn((
                Text::new(kind.title()),
                TextFont {
                    font_size: 48.0,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
            p.spawn((Text::new(kind.question()), TextColor(Color::WHITE)));
            p.spawn((
                Text::new("[Y] Yes    [N] No"),
                TextColor(Color::srgb(0.7, 0.7, 0.75)),
            ));
        });
}

fn despawn_prompt_ui(mut commands: Commands, q_root: Query<Entity, With<PromptUiRoot>>) {
    for e in &q_root {
        commands.entity(e).despawn();
    }
}

pub fn handle_prompt_input(
    keys: Res<ButtonInput<KeyCode>>,
    state: Res<State<AppState>>,
    catalog: Res<LevelCatalog>,
    mut current: ResMut<CurrentLevel>,
    mut next_state: ResMut<NextState<AppState>>,
    mut exit: EventWriter<AppExit>,
) {
    let Some(kind) = PromptKind::from_state(*state.get()) else {
        return;
    };
    let Some(yes) = read_answer(&keys) else {
        return;
    };
    let outcome = resolve_prompt(kind, yes);
    info!(target: "prompt", "{:?} answered {} -> {:?}", kind, if yes { "yes" } else { "no" }, outcome);
    match outcome {
        PromptOutcome::RestartLevel => next_state.set(AppState::Playing),
        PromptOutcome::NextLevel => {
            current.0 = match current.advance(catalog.len()) {
                LevelAdvance::Next(i) => i,
                // The catalog shrank under us (hot reload); start over.
                LevelAdvance::Finished => 0,
            };
            next_state.set(AppState::Playing);
        }
        PromptOutcome::RestartCampaign => {
            current.0 = 0;
            next_state.set(AppState::Playing);
        }
        PromptOutcome::Quit => {
            exit.write(AppExit::Success);
        }
    }
}
