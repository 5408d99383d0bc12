//! Feedback dispatch
//!
//! The simulation reports what happened as `GameEvent`s; mapping those to
//! sound or HUD effects is the host's job. The sink trait keeps that flow
//! one-way: a missing or failing sink can never touch the simulation.

use crate::sim::GameEvent;

/// Consumer of one-shot simulation events
pub trait FeedbackSink {
    fn on_event(&mut self, event: GameEvent);
}

/// Sink that drops every event
#[derive(Debug, Default)]
pub struct NullFeedback;

impl FeedbackSink for NullFeedback {
    fn on_event(&mut self, _event: GameEvent) {}
}

/// Cue name an audio collaborator would map to a sample or synth patch
pub fn cue_name(event: GameEvent) -> &'static str {
    match event {
        GameEvent::CoinCollected => "coin_pickup",
        GameEvent::LevelUp => "level_up",
        GameEvent::LifeLost => "life_lost",
        GameEvent::GameOver => "game_over",
    }
}

/// Sink that logs a named cue per event, standing in for an audio channel
#[derive(Debug, Default)]
pub struct LogFeedback;

impl FeedbackSink for LogFeedback {
    fn on_event(&mut self, event: GameEvent) {
        log::info!("feedback cue: {}", cue_name(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_EVENTS: [GameEvent; 4] = [
        GameEvent::CoinCollected,
        GameEvent::LevelUp,
        GameEvent::LifeLost,
        GameEvent::GameOver,
    ];

    #[test]
    fn test_every_event_has_a_distinct_cue() {
        let names: Vec<_> = ALL_EVENTS.iter().map(|&e| cue_name(e)).collect();
        for (i, a) in names.iter().enumerate() {
            for b in &names[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_sinks_accept_every_event() {
        let mut null = NullFeedback;
        let mut logger = LogFeedback;
        for event in ALL_EVENTS {
            null.on_event(event);
            logger.on_event(event);
        }
    }
}
