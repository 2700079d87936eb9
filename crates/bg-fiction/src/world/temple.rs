//! The old temple and the road out.

use bg_core::term::mentions;
use bg_core::{GameState, Reply, Term, Verb};

use super::items::{ARTIFACT, CHARM, SUNGLASSES};
use super::rooms::{DAWN_ROAD, OUTSKIRTS, TEMPLE_ENTRANCE, TEMPLE_INTERIOR};

/// Health lost grabbing the artifact unprotected.
const ALTAR_BURN: i32 = 30;

pub(super) fn entrance(verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "You stand before an ancient temple, its architecture unlike anything you've seen before. Strange symbols cover its walls, and the air feels thick with an otherworldly presence. The entrance is partially blocked but passable. You can hear the village chanting in the distance.",
            state,
        ),
        Verb::Enter => enter_temple(state),
        Verb::Go | Verb::Leave if mentions(params, &["west", "back", "village", "outskirts"]) => {
            Reply::new(
                "You push back through the undergrowth to the village outskirts.",
                state.moved_to(OUTSKIRTS),
            )
        }
        _ => Reply::unchanged(
            "You can look around (\"look\"), examine the temple (\"look temple\"), enter it (\"enter\"), or return to the village outskirts (\"go back\").",
            state,
        ),
    }
}

pub(super) fn temple(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The temple is ancient, its stone walls covered in strange symbols that seem to shift when you're not looking directly at them. The entrance is partially blocked by fallen debris, but there's enough space to squeeze through.",
            state,
        ),
        Verb::Enter => enter_temple(state),
        _ => Reply::unchanged(
            "The temple radiates an unnatural energy. You can enter (\"enter temple\") if you dare, or examine it more closely (\"look temple\").",
            state,
        ),
    }
}

fn enter_temple(state: &GameState) -> Reply {
    Reply::new(
        "Gathering your courage, you squeeze through the temple entrance...",
        state.moved_to(TEMPLE_INTERIOR),
    )
}

pub(super) fn interior(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The temple interior is dimly lit by an otherworldly glow. Ancient symbols cover the walls, and at the center stands a black stone altar. The air thrums with energy, and you can hear whispers that seem to come from nowhere and everywhere.",
            state,
        ),
        Verb::Leave | Verb::Exit | Verb::Go if state.has_item(ARTIFACT) => Reply::new(
            "Clutching the artifact, you run. Behind you the chanting breaks into screams, and the glow in the temple dies. You do not stop running until the sky turns grey.",
            state.moved_to(DAWN_ROAD),
        ),
        Verb::Leave | Verb::Exit | Verb::Go => Reply::new(
            "You squeeze back out through the debris into the night air.",
            state.moved_to(TEMPLE_ENTRANCE),
        ),
        _ => Reply::unchanged(
            "You can look around (\"look\"), examine the altar (\"look altar\"), or try to leave (\"leave\") before it's too late.",
            state,
        ),
    }
}

/// Shared by the altar and the artifact resting on it.
pub(super) fn altar(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look if state.has_item(ARTIFACT) => Reply::unchanged(
            "The altar is bare now. The carvings have stopped moving.",
            state,
        ),
        Verb::Look => Reply::unchanged(
            "The altar is made of black stone, covered in intricate carvings that seem to move in your peripheral vision. A strange artifact rests upon it, pulsing with an inner light.",
            state,
        ),
        Verb::Take if state.has_item(ARTIFACT) => {
            Reply::unchanged("There is nothing left on the altar to take.", state)
        }
        Verb::Take if state.has_all(&[CHARM, SUNGLASSES]) => Reply::new(
            "You slip on your sunglasses and close your fist around the charm. The artifact flares, but the light slides off you. It is cold and heavy in your hand.",
            state.with_item(ARTIFACT),
        ),
        Verb::Take => Reply::new(
            "The moment your fingers touch the artifact, searing light pours into your eyes and the stone burns your hand. You stagger back. You will need some protection before you try that again.",
            state.damaged(ALTAR_BURN),
        ),
        _ => Reply::unchanged(
            "The altar emanates a powerful energy. You can examine it (\"look altar\") or try to take the artifact (\"take artifact\"), though that might be dangerous.",
            state,
        ),
    }
}

pub(super) fn dawn_road(_verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    Reply::unchanged(
        "The sun rises over an empty road. Benagram is a smudge of smoke behind you, and the artifact in your bag has gone quiet. Whatever the village was waiting for, it will have to keep waiting. THE END.",
        state,
    )
}
