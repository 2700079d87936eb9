//! Capability keys binding rooms and objects to their verb logic.

use bg_core::{GameState, Reply, Term, Verb};

use super::{journey, station, temple, village};

/// Capability key naming the verb logic attached to a room or object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Behavior {
    /// The station platform.
    TrainStation,
    /// The locked commuter train.
    Train,
    /// The street outside the station.
    Street,
    /// The auto and its driver.
    Auto,
    /// The bus stand.
    BusStand,
    /// The parked bus.
    Bus,
    /// The old woman muttering at the bus stand.
    OldWoman,
    /// The ride to Benagram.
    Journey,
    /// The village outskirts.
    Outskirts,
    /// The distant bonfires.
    Fires,
    /// Outside the temple.
    TempleEntrance,
    /// The temple building.
    Temple,
    /// Inside the temple.
    TempleInterior,
    /// The altar and the artifact resting on it.
    Altar,
    /// The village center.
    VillageCenter,
    /// The ritual around the bonfire.
    Ritual,
    /// The robed villagers.
    Villagers,
    /// The epilogue.
    DawnRoad,
    /// Declines every verb.
    #[cfg(test)]
    Silent,
}

impl Behavior {
    /// Respond to `verb` given the current state and the full command.
    ///
    /// Never mutates `state`; the reply carries the next state.
    pub fn handle(self, verb: &Verb, state: &GameState, params: &[Term]) -> Reply {
        match self {
            Self::TrainStation => station::train_station(verb, state, params),
            Self::Train => station::train(verb, state, params),
            Self::Street => station::street(verb, state, params),
            Self::Auto => station::auto(verb, state, params),
            Self::BusStand => station::bus_stand(verb, state, params),
            Self::Bus => station::bus(verb, state, params),
            Self::OldWoman => station::old_woman(verb, state, params),
            Self::Journey => journey::on_the_way(verb, state, params),
            Self::Outskirts => journey::outskirts(verb, state, params),
            Self::Fires => journey::fires(verb, state, params),
            Self::TempleEntrance => temple::entrance(verb, state, params),
            Self::Temple => temple::temple(verb, state, params),
            Self::TempleInterior => temple::interior(verb, state, params),
            Self::Altar => temple::altar(verb, state, params),
            Self::VillageCenter => village::center(verb, state, params),
            Self::Ritual => village::ritual(verb, state, params),
            Self::Villagers => village::villagers(verb, state, params),
            Self::DawnRoad => temple::dawn_road(verb, state, params),
            #[cfg(test)]
            Self::Silent => Reply::decline(state),
        }
    }
}
