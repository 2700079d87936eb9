//! The ride out and the village outskirts.

use bg_core::term::mentions;
use bg_core::{GameState, Reply, Term, Verb};

use super::rooms::{OUTSKIRTS, TEMPLE_ENTRANCE, VILLAGE_CENTER};

pub(super) fn on_the_way(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The auto rattles along the dark road. The sun has set completely. Through the dense trees, you catch glimpses of distant fires in the village. Strange symbols seem to glow faintly on some of the trees. The driver is unusually quiet, his hands trembling slightly on the steering wheel.",
            state,
        ),
        Verb::Talk | Verb::Ask | Verb::Chat => Reply::new(
            "The driver ignores you completely, his knuckles white on the steering wheel. You notice he's wearing some kind of protective amulet. He suddenly stops the auto near the outskirts of Benagram village, practically pushing you out. \"This is as far as I go. The old temple... it's not safe after dark.\"",
            state.moved_to(OUTSKIRTS),
        ),
        Verb::Wait => Reply::new(
            "The journey continues in silence.... Strange whispers seem to come from the forest. You arrive at the outskirts of Benagram village, the auto driver refusing to go any further.",
            state.moved_to(OUTSKIRTS),
        ),
        _ => Reply::unchanged(
            "During the journey, you can look around (\"look\"), try to talk to the driver (\"talk\"), or simply wait (\"wait\") until you arrive.",
            state,
        ),
    }
}

pub(super) fn outskirts(verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The auto driver has fled, leaving you at the village entrance. Multiple fires burn in the distance, forming an unsettling pattern. The village seems deserted, but you can hear chanting from somewhere deeper in. A narrow path leads towards the center, while an overgrown trail branches east towards what appears to be an ancient temple.",
            state,
        ),
        Verb::Go if mentions(params, &["east", "temple"]) => Reply::new(
            "You follow the overgrown path east towards the temple...",
            state.moved_to(TEMPLE_ENTRANCE),
        ),
        Verb::Go => Reply::new(
            "You cautiously walk down the path towards the village center...",
            state.moved_to(VILLAGE_CENTER),
        ),
        _ => Reply::unchanged(
            "You can look around (\"look\"), examine the fires (\"look fires\"), go to the village center (\"go\") or head east to the temple (\"go east\").",
            state,
        ),
    }
}

pub(super) fn fires(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "Multiple bonfires burn in the distance, forming a strange pattern when viewed together. You can hear faint chanting carried by the wind, mixed with other, less natural sounds.",
            state,
        ),
        _ => Reply::unchanged(
            "The fires are too far to interact with directly. You can look at them (\"look fires\") or try going deeper into the village (\"go\"). To the east, you notice the crumbling spire of what must be the old temple.",
            state,
        ),
    }
}
