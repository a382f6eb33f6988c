//! Compact action scripts: `s0 i1 x2 e`.
//!
//! `s`, `i` and `x` play the card at the given hand index as Strike,
//! Influence or Sacrifice; `e` ends the turn. Tokens are separated by
//! whitespace or commas.

use anyhow::{Context, bail};
use combat_core::PlayerAction;

pub fn parse_script(script: &str) -> anyhow::Result<Vec<PlayerAction>> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(parse_token)
        .collect()
}

fn parse_token(token: &str) -> anyhow::Result<PlayerAction> {
    let lower = token.to_ascii_lowercase();
    if lower == "e" || lower == "end" {
        return Ok(PlayerAction::EndTurn);
    }

    let mut chars = lower.chars();
    let head = chars.next();
    let hand_index: usize = chars
        .as_str()
        .parse()
        .with_context(|| format!("invalid hand index in action '{}'", token))?;

    Ok(match head {
        Some('s') => PlayerAction::Strike { hand_index },
        Some('i') => PlayerAction::Influence { hand_index },
        Some('x') => PlayerAction::Sacrifice { hand_index },
        _ => bail!("unknown action '{}' (expected s<N>, i<N>, x<N> or e)", token),
    })
}

/// Short form of an action, the inverse of the script syntax.
pub fn format_action(action: &PlayerAction) -> String {
    match action {
        PlayerAction::Strike { hand_index } => format!("s{}", hand_index),
        PlayerAction::Influence { hand_index } => format!("i{}", hand_index),
        PlayerAction::Sacrifice { hand_index } => format!("x{}", hand_index),
        PlayerAction::EndTurn => "e".to_string(),
    }
}
