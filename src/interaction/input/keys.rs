use bevy::prelude::*;

use crate::core::config::GameConfig;

/// Key that triggers a jump, resolved from `jump.key` in the config.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct JumpBinding(pub KeyCode);

impl Default for JumpBinding {
    fn default() -> Self {
        Self(KeyCode::KeyW)
    }
}

impl JumpBinding {
    /// Parse the configured name; unknown names fall back to W with a warning.
    pub fn from_config(cfg: &GameConfig) -> Self {
        match parse_keycode(&cfg.jump.key) {
            Ok(k) => Self(k),
            Err(e) => {
                warn!(target: "input", "jump.key: {e}; using W");
                Self::default()
            }
        }
    }
}

/// Accepts single letters ("W"), `Key`-prefixed letters ("KeyW"), digits ("1", "Digit1")
/// and a handful of named keys.
pub fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let name = name.trim();
    let letter = name.strip_prefix("Key").unwrap_or(name);
    if letter.len() == 1 {
        if let Some(k) = letter_key(letter.chars().next().unwrap_or(' ')) {
            return Ok(k);
        }
    }
    let digit = name.strip_prefix("Digit").unwrap_or(name);
    if digit.len() == 1 {
        if let Some(k) = digit_key(digit.chars().next().unwrap_or(' ')) {
            return Ok(k);
        }
    }
    let kc = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "ArrowUp" | "Up" => KeyCode::ArrowUp,
        "ArrowDown" | "Down" => KeyCode::ArrowDown,
        "ArrowLeft" | "Left" => KeyCode::ArrowLeft,
        "ArrowRight" | "Right" => KeyCode::ArrowRight,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ShiftRight" => KeyCode::ShiftRight,
        "ControlLeft" => KeyCode::ControlLeft,
        other => return Err(format!("Unsupported KeyCode '{other}'")),
    };
    Ok(kc)
}

fn letter_key(c: char) -> Option<KeyCode> {
    use KeyCode::*;
    let k = match c.to_ascii_uppercase() {
        'A' => KeyA, 'B' => KeyB, 'C' => KeyC, 'D' => KeyD, 'E' => KeyE, 'F' => KeyF,
        'G' => KeyG, 'H' => KeyH, 'I' => KeyI, 'J' => KeyJ, 'K' => KeyK, 'L' => KeyL,
        'M' => KeyM, 'N' => KeyN, 'O' => KeyO, 'P' => KeyP, 'Q' => KeyQ, 'R' => KeyR,
        'S' => KeyS, 'T' => KeyT, 'U' => KeyU, 'V' => KeyV, 'W' => KeyW, 'X' => KeyX,
        'Y' => KeyY, 'Z' => KeyZ,
        _ => return None,
    };
    Some(k)
}

fn digit_key(c: char) -> Option<KeyCode> {
    use KeyCode::*;
    let k = match c {
        '0' => Digit0, '1' => Digit1, '2' => Digit2, '3' => Digit3, '4' => Digit4,
        '5' => Digit5, '6' => Digit6, '7' => Digit7, '8' => Digit8, '9' => Digit9,
        _ => return None,
    };
    Some(k)
}

pub struct JumpBindingPlugin;

impl Plugin for JumpBindingPlugin {
    fn build(&self, app: &mut App) {
        let binding = app
            .world()
            .get_resource::<GameConfig>()
            .map(JumpBinding::from_config)
            .unwrap_or_default();
        app.insert_resource(binding).add_systems(
            PreUpdate,
            sync_binding.run_if(resource_changed::<GameConfig>),
        );
    }
}

fn sync_binding(cfg: Res<GameConfig>, mut binding: ResMut<JumpBinding>) {
    let next = JumpBinding::from_config(&cfg);
    if *binding != next {
        info!(target: "input", "Jump key -> {:?}", next.0);
        *binding = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_digits_and_names() {
        assert_eq!(parse_keycode("W"), Ok(KeyCode::KeyW));
        assert_eq!(parse_keycode("w"), Ok(KeyCode::KeyW));
        assert_eq!(parse_keycode("KeyJ"), Ok(KeyCode::KeyJ));
        assert_eq!(parse_keycode("Digit7"), Ok(KeyCode::Digit7));
        assert_eq!(parse_keycode("Space"), Ok(KeyCode::Space));
        assert_eq!(parse_keycode(" ArrowUp "), Ok(KeyCode::ArrowUp));
    }

    #[test]
    fn unknown_names_error() {
        assert!(parse_keycode("Hyper").is_err());
        assert!(parse_keycode("").is_err());
        assert!(parse_keycode("KeyWW").is_err());
    }

    #[test]
    fn config_fallback_is_w() {
        let mut cfg = GameConfig::default();
        cfg.jump.key = "NotAKey".into();
        assert_eq!(JumpBinding::from_config(&cfg), JumpBinding(KeyCode::KeyW));
        cfg.jump.key = "Space".into();
        assert_eq!(JumpBinding::from_config(&cfg), JumpBinding(KeyCode::Space));
    }
}
