//! Text rendering of combat events and summaries.

use combat_core::{CombatEvent, CombatSnapshot, ImpactReport};

pub fn describe(event: &CombatEvent) -> String {
    match event {
        CombatEvent::CombatStarted {
            seed,
            disposition,
            thresholds,
        } => format!(
            "combat started (seed {}, disposition {:+}, survival <= {}, desperation >= {})",
            seed, disposition, thresholds.survival, thresholds.desperation
        ),
        CombatEvent::HandDrawn { drawn, reshuffled } => {
            let suffix = if *reshuffled { " after reshuffling the discard" } else { "" };
            format!("drew {} card(s){}", drawn, suffix)
        }
        CombatEvent::FateReshuffled { cards } => format!("fate deck reshuffled ({} cards)", cards),
        CombatEvent::FateDrawn { resolution } => {
            let keyword = resolution
                .keyword
                .map(|k| format!(" [{}]", k))
                .unwrap_or_default();
            let critical = if resolution.is_critical { " critical" } else { "" };
            format!(
                "fate: {} {:+}{}{}",
                resolution.card.suit, resolution.value, keyword, critical
            )
        }
        CombatEvent::PlayerAttacked(report) => impact("strike", report),
        CombatEvent::PlayerInfluenced(report) => impact("influence", report),
        CombatEvent::EchoRepeated(report) => impact("echo", report),
        CombatEvent::EchoSuppressed { kind } => format!("echo suppressed after {}", kind),
        CombatEvent::DefendStripped => "shadow strips the enemy's defend".to_string(),
        CombatEvent::BacklashCancelled {
            backlash,
            enemy_attack_delta,
        } => format!(
            "ward cancels backlash ({} damage, {:+} enemy attack)",
            backlash, enemy_attack_delta
        ),
        CombatEvent::HeroBacklash { damage, health } => {
            format!("backlash: hero takes {} (health {})", damage, health)
        }
        CombatEvent::EnemyEmpowered { pending_bonus } => {
            format!("enemy attack {:+} next turn", pending_bonus)
        }
        CombatEvent::HeroSacrificed {
            card,
            healed,
            health,
            enemy_attack_buff,
            extra_exhausted,
        } => {
            let extra = if extra_exhausted.is_empty() {
                String::new()
            } else {
                let ids: Vec<String> = extra_exhausted.iter().map(ToString::to_string).collect();
                format!(", also exhausted {}", ids.join(" "))
            };
            format!(
                "sacrificed {}: healed {} (health {}), enemy attack buff {}{}",
                card, healed, health, enemy_attack_buff, extra
            )
        }
        CombatEvent::TurnEnded { energy } => format!("turn ended with {} energy", energy),
        CombatEvent::EnemyModeChanged(change) => format!(
            "enemy mode {} -> {} (swing {})",
            change.from, change.to, change.swing
        ),
        CombatEvent::EnemyAttacked { damage, health } => {
            format!("enemy attacks for {} (health {})", damage, health)
        }
        CombatEvent::EnemyRecovered {
            amount,
            disposition,
        } => format!("enemy recovers {} (disposition {:+})", amount, disposition),
        CombatEvent::EnemyRitual { attack_buff } => {
            format!("enemy ritual (attack buff {})", attack_buff)
        }
        CombatEvent::EnemyGuarded { intent } => format!("enemy holds its {}", intent),
        CombatEvent::EnemyHesitated { intent } => format!("enemy hesitates ({} stripped)", intent),
        CombatEvent::IntentTelegraphed { intent, mode } => {
            format!("enemy intends to {} ({})", intent, mode)
        }
        CombatEvent::RoundAdvanced { round, energy } => {
            format!("-- round {} (energy {}) --", round, energy)
        }
        CombatEvent::CombatEnded { outcome } => format!("combat ended: {}", outcome),
    }
}

fn impact(label: &str, report: &ImpactReport) -> String {
    let mut line = format!(
        "{} {}: power {} -> impact {} (disposition {:+} -> {:+})",
        label,
        report.card,
        report.power.effective_power,
        report.impact,
        report.disposition_before,
        report.disposition_after
    );
    if report.guard > 0 {
        line.push_str(&format!(", guard {}", report.guard));
    }
    if report.multiplier != 1.0 {
        line.push_str(&format!(", x{}", report.multiplier));
    }
    line
}

pub fn summary(snapshot: &CombatSnapshot) -> String {
    format!(
        "round {} | {} | disposition {:+} | health {} | energy {} | enemy {} / {}",
        snapshot.round,
        snapshot.phase,
        snapshot.disposition,
        snapshot.hero_health,
        snapshot.hero_energy,
        snapshot.enemy_mode,
        snapshot.enemy_intent
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use combat_core::{CombatOutcome, VictoryKind};

    #[test]
    fn ended_mentions_outcome() {
        let line = describe(&CombatEvent::CombatEnded {
            outcome: CombatOutcome::Victory(VictoryKind::Subjugated),
        });
        assert_eq!(line, "combat ended: victory (subjugated)");
    }

    #[test]
    fn hand_drawn_mentions_reshuffle() {
        let line = describe(&CombatEvent::HandDrawn {
            drawn: 2,
            reshuffled: true,
        });
        assert!(line.contains("reshuffling"));
    }
}
