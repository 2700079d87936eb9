//! The village center, where the ritual is under way.

use bg_core::{GameState, Reply, Term, Verb};

use super::flags::HIDING;

/// Health lost when the villagers drag you out of the bushes.
const CAUGHT_DAMAGE: i32 = 50;

/// Health lost walking up to the villagers. Always fatal from full health.
const MOB_DAMAGE: i32 = 100;

pub(super) fn center(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "You've reached the village center. A large group of villagers in dark robes are gathered around a massive bonfire, performing a ritual that makes the air itself feel wrong. They're chanting in an unknown language that hurts your ears. The air feels heavy with an unnatural energy that seems connected to the temple. You can hide behind some bushes or try to leave.",
            state,
        ),
        Verb::Hide if state.has_flag(HIDING) => Reply::new(
            "You shift deeper into the bushes and a branch snaps. The chanting stops. Hands tear the leaves apart and drag you into the firelight, where the villagers beat you before flinging you back into the dark.",
            state.without_flag(HIDING).damaged(CAUGHT_DAMAGE),
        ),
        Verb::Hide => Reply::new(
            "You hide behind the bushes and observe the ritual from a safe distance. The chanting grows louder, and the fire changes color, casting shadows that move in impossible ways...",
            state.with_flag(HIDING),
        ),
        Verb::Leave => Reply::new(
            "You try to quietly leave, but some villagers spot you. Their eyes glow with an unnatural light, and you realize with horror that the ritual has already changed them into something else...",
            state.killed(),
        ),
        _ => Reply::unchanged(
            "You can look around (\"look\"), examine the ritual (\"look ritual\"), hide in the bushes (\"hide\"), or attempt to leave (\"leave\"). Be careful with your choices!",
            state,
        ),
    }
}

pub(super) fn ritual(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "Villagers in dark robes are performing some kind of ritual around a large bonfire. They seem to be chanting in an ancient language, their voices creating patterns in the air. In the center, there's a complex symbol drawn on the ground that pulses with the same energy you felt in the temple.",
            state,
        ),
        _ => Reply::unchanged(
            "You can observe the ritual from a distance (\"look ritual\"), but getting closer might be dangerous. Consider hiding (\"hide\") or trying to leave (\"leave\").",
            state,
        ),
    }
}

pub(super) fn villagers(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Approach | Verb::Talk | Verb::Join => Reply::new(
            "The villagers spot you and stop chanting. Their eyes glow with an unnatural light, and you realize they're no longer entirely human. They surround you before you can escape...",
            state.damaged(MOB_DAMAGE),
        ),
        _ => Reply::unchanged(
            "The villagers seem dangerous. You might want to hide (\"hide\") or observe from a safe distance (\"look ritual\").",
            state,
        ),
    }
}
