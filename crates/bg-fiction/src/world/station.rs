//! The town: station platform, street, and bus stand.

use bg_core::term::mentions;
use bg_core::{GameState, Reply, Term, Verb};

use super::flags::TALKED_TO_OLD_WOMAN;
use super::items::{CHARM, RUPEE_NOTE_100};
use super::rooms::{BUS_STAND, ON_THE_WAY, STREET};

pub(super) fn train_station(verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "You can see a train parked at the platform. The doors are closed. The exit is to the west.",
            state,
        ),
        Verb::Go if mentions(params, &["west"]) => Reply::new(
            "You exit the train station and find yourself on the street. There is an auto in front of you and a bus stand a little further down the road.",
            state.moved_to(STREET),
        ),
        Verb::Go => Reply::unchanged(
            "The only way out is west. Try \"go west\" to leave the station.",
            state,
        ),
        _ => Reply::unchanged(
            "You can try looking around (\"look\") or going west (\"go west\") to exit the station.",
            state,
        ),
    }
}

pub(super) fn train(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The train is a standard commuter train. Dirty and old.",
            state,
        ),
        Verb::Door | Verb::Enter | Verb::Exit => Reply::unchanged(
            "You try to open the train door, but it is locked. Maybe you should try heading west towards the exit.",
            state,
        ),
        _ => Reply::unchanged(
            "The train is locked and immobile. You can look at it or try going west towards the exit.",
            state,
        ),
    }
}

pub(super) fn street(verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "You can see a bus parked at the bus stand. There is an auto in front of you. The sun is getting low in the sky, casting an eerie red glow over everything.",
            state,
        ),
        Verb::Go if mentions(params, &["bus"]) => {
            Reply::new("You walk towards the bus stand.", state.moved_to(BUS_STAND))
        }
        Verb::Go => Reply::unchanged(
            "You can go to the bus stand (\"go bus\") or interact with the auto and its driver.",
            state,
        ),
        _ => Reply::unchanged(
            "You can look around (\"look\"), go to the bus stand (\"go bus\"), or interact with the auto and its driver (try \"talk driver\" or \"look auto\").",
            state,
        ),
    }
}

/// Shared by the auto and its driver.
pub(super) fn auto(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The auto is parked in the street. It is old and dirty. The driver looks at you scarily.",
            state,
        ),
        Verb::Go | Verb::Talk | Verb::Approach | Verb::Ask | Verb::Shout => Reply::unchanged(
            "The driver looks at you angrily and says \"100 Rupees to go to benagram village. Take it or leave it. But I warn you, no one goes there after sunset. Not since the incident with the old temple.\"",
            state,
        ),
        Verb::Board => Reply::unchanged(
            "The auto driver pushes you out of the auto and says \"Pay up the 100 Rupees! You board after you pay.\"",
            state,
        ),
        Verb::Pay | Verb::Take if state.has_item(RUPEE_NOTE_100) => Reply::new(
            "You board the auto and pay the driver 100 Rupees. The driver mutters \"Your funeral...\" under his breath as he starts driving. The sun is setting, casting long shadows across the road...",
            state.without_item(RUPEE_NOTE_100).moved_to(ON_THE_WAY),
        ),
        Verb::Pay | Verb::Take => Reply::unchanged(
            "You don't have any 100 Rupee Notes. You might want to look around for other transportation options or try to find some money.",
            state,
        ),
        Verb::Bargain => Reply::new(
            "The auto driver curses you and stomps on the gas pedal. The auto speeds up and you are knocked away. You hobble towards the bus stand.",
            state.damaged(20).moved_to(BUS_STAND),
        ),
        _ => Reply::unchanged(
            "The auto driver seems uninterested in that. Try talking to him, looking at the auto, or paying the fare if you have enough money.",
            state,
        ),
    }
}

pub(super) fn bus_stand(verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "The bus stand is nearly empty. A single bus is parked here. You can go back to the street. An old woman in the corner is muttering something about \"the ritual\" and \"the temple\".",
            state,
        ),
        Verb::Go | Verb::Leave if mentions(params, &["street", "back", "auto"]) => Reply::new(
            "You walk back up the road to the street. The auto is still waiting.",
            state.moved_to(STREET),
        ),
        Verb::Go => Reply::unchanged(
            "The only way from here is back to the street (\"go back\").",
            state,
        ),
        _ => Reply::unchanged(
            "You can look around (\"look\"), check the bus (\"look bus\"), or try to board it (\"board bus\"). You might also want to talk to the old woman (\"talk woman\") or go back to check the auto (\"go back\").",
            state,
        ),
    }
}

pub(super) fn bus(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Board => Reply::unchanged(
            "The conductor looks at you nervously and says \"Last bus left an hour ago. Next bus to Benagram is tomorrow morning. Strange place, that village... Not since they found those markings in the old temple. Best stay away, if you ask me.\"",
            state,
        ),
        _ => Reply::unchanged(
            "The bus isn't going anywhere today. You could try looking around (\"look\") or checking if the auto is still available.",
            state,
        ),
    }
}

pub(super) fn old_woman(verb: &Verb, state: &GameState, _params: &[Term]) -> Reply {
    match verb {
        Verb::Look => Reply::unchanged(
            "A tiny old woman wrapped in a faded shawl. Her lips never stop moving, and her eyes never leave the road to Benagram.",
            state,
        ),
        Verb::Talk | Verb::Approach if state.has_flag(TALKED_TO_OLD_WOMAN) => Reply::unchanged(
            "The old woman clutches your sleeve. \"Keep the charm close, and keep your eyes covered when the stone wakes.\" She says nothing more.",
            state,
        ),
        Verb::Talk | Verb::Approach => Reply::new(
            "The old woman grips your wrist with surprising strength. \"You are going to Benagram? Then listen. The temple keeps something that should never have been woken. The villagers chant for it every night now. If you must go inside, do not look straight at the stone on the altar.\" She presses a small knotted charm into your palm.",
            state.with_item(CHARM).with_flag(TALKED_TO_OLD_WOMAN),
        ),
        _ => Reply::unchanged(
            "The old woman ignores that. You could look at her (\"look woman\") or talk to her (\"talk woman\").",
            state,
        ),
    }
}
