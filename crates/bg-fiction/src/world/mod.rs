//! The static room and object catalog.
//!
//! Rooms and objects are plain records naming a [`Behavior`]; the verb
//! logic lives in the per-area modules. Several objects may share one
//! behavior (the auto and its driver answer identically).

mod behavior;
mod journey;
mod station;
mod temple;
mod village;

use std::collections::HashSet;

use bg_core::{BgError, BgResult};

pub use behavior::Behavior;

/// Room names used by the canonical world.
pub mod rooms {
    /// Where every game starts.
    pub const TRAIN_STATION: &str = "Train Station";
    /// Outside the station.
    pub const STREET: &str = "Street";
    /// The deserted bus stand.
    pub const BUS_STAND: &str = "Bus Stand";
    /// Riding the auto at dusk.
    pub const ON_THE_WAY: &str = "On the way to Benagram";
    /// The edge of the village.
    pub const OUTSKIRTS: &str = "Benagram Outskirts";
    /// Outside the old temple.
    pub const TEMPLE_ENTRANCE: &str = "Temple Entrance";
    /// Inside the old temple.
    pub const TEMPLE_INTERIOR: &str = "Temple Interior";
    /// The ritual at the heart of the village.
    pub const VILLAGE_CENTER: &str = "Village Center";
    /// Epilogue after escaping with the artifact.
    pub const DAWN_ROAD: &str = "Dawn Road";
}

/// Item names handlers check for or hand out.
pub mod items {
    /// Fare for the auto.
    pub const RUPEE_NOTE_100: &str = "100 Rupee Note";
    /// Part of the starting kit; shields the eyes at the altar.
    pub const SUNGLASSES: &str = "sunglasses";
    /// Given by the old woman.
    pub const CHARM: &str = "charm";
    /// Taken from the temple altar.
    pub const ARTIFACT: &str = "artifact";
}

/// Story flags handlers set and test.
pub mod flags {
    /// The old woman has told her story.
    pub const TALKED_TO_OLD_WOMAN: &str = "Talked to old woman";
    /// The player is crouched in the bushes at the village center.
    pub const HIDING: &str = "Hiding in bushes";
}

/// An interactive thing inside a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Object {
    /// Name the player uses to refer to it. Unique within its room.
    pub name: String,
    /// How it responds to verbs.
    pub behavior: Behavior,
}

impl Object {
    /// Create an object.
    pub fn new(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            behavior,
        }
    }
}

/// A location in the world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    /// Unique room name; game state refers to rooms by it.
    pub name: String,
    /// Objects in the room, in catalog order.
    pub objects: Vec<Object>,
    /// How the room itself responds to verbs.
    pub behavior: Behavior,
}

impl Room {
    /// Create a room with no objects.
    pub fn new(name: impl Into<String>, behavior: Behavior) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            behavior,
        }
    }

    /// Add an object.
    pub fn with_object(mut self, object: Object) -> Self {
        self.objects.push(object);
        self
    }

    /// Find an object by exact name.
    pub fn object(&self, name: &str) -> Option<&Object> {
        self.objects.iter().find(|o| o.name == name)
    }
}

/// The full catalog of rooms, queried by name.
#[derive(Debug, Clone)]
pub struct World {
    rooms: Vec<Room>,
}

impl World {
    /// Build a world, rejecting duplicate room names and duplicate object
    /// names within a room.
    pub fn from_rooms(rooms: Vec<Room>) -> BgResult<Self> {
        let mut seen = HashSet::new();
        for room in &rooms {
            if !seen.insert(room.name.as_str()) {
                return Err(BgError::DuplicateRoom(room.name.clone()));
            }
            let mut objects = HashSet::new();
            for object in &room.objects {
                if !objects.insert(object.name.as_str()) {
                    return Err(BgError::DuplicateObject {
                        room: room.name.clone(),
                        object: object.name.clone(),
                    });
                }
            }
        }
        Ok(Self { rooms })
    }

    /// The Benagram adventure.
    pub fn benagram() -> BgResult<Self> {
        use rooms::*;

        let rooms = vec![
            Room::new(TRAIN_STATION, Behavior::TrainStation)
                .with_object(Object::new("train", Behavior::Train)),
            Room::new(STREET, Behavior::Street)
                .with_object(Object::new("auto", Behavior::Auto))
                .with_object(Object::new("driver", Behavior::Auto)),
            Room::new(BUS_STAND, Behavior::BusStand)
                .with_object(Object::new("bus", Behavior::Bus))
                .with_object(Object::new("woman", Behavior::OldWoman)),
            Room::new(ON_THE_WAY, Behavior::Journey),
            Room::new(OUTSKIRTS, Behavior::Outskirts)
                .with_object(Object::new("fires", Behavior::Fires)),
            Room::new(TEMPLE_ENTRANCE, Behavior::TempleEntrance)
                .with_object(Object::new("temple", Behavior::Temple)),
            Room::new(TEMPLE_INTERIOR, Behavior::TempleInterior)
                .with_object(Object::new("altar", Behavior::Altar))
                .with_object(Object::new("artifact", Behavior::Altar)),
            Room::new(VILLAGE_CENTER, Behavior::VillageCenter)
                .with_object(Object::new("ritual", Behavior::Ritual))
                .with_object(Object::new("villagers", Behavior::Villagers)),
            Room::new(DAWN_ROAD, Behavior::DawnRoad),
        ];

        Self::from_rooms(rooms)
    }

    /// Look a room up by name.
    pub fn room(&self, name: &str) -> Option<&Room> {
        self.rooms.iter().find(|r| r.name == name)
    }

    /// Look a room up by name, failing if it does not exist.
    pub fn require_room(&self, name: &str) -> BgResult<&Room> {
        self.room(name)
            .ok_or_else(|| BgError::UnknownRoom(name.to_string()))
    }

    /// Whether a room with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.room(name).is_some()
    }

    /// All rooms in catalog order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_world_is_well_formed() {
        let world = World::benagram().unwrap();
        assert_eq!(world.rooms().len(), 9);
    }

    #[test]
    fn lookup_by_name() {
        let world = World::benagram().unwrap();
        assert!(world.contains("Train Station"));
        assert!(world.contains("On the way to Benagram"));
        assert!(!world.contains("train station"));
        assert!(matches!(
            world.require_room("Atlantis"),
            Err(BgError::UnknownRoom(name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn auto_and_driver_share_behavior() {
        let world = World::benagram().unwrap();
        let street = world.room(rooms::STREET).unwrap();
        assert_eq!(
            street.object("auto").unwrap().behavior,
            street.object("driver").unwrap().behavior
        );
    }

    #[test]
    fn duplicate_room_rejected() {
        let rooms = vec![
            Room::new("A", Behavior::DawnRoad),
            Room::new("A", Behavior::DawnRoad),
        ];
        assert!(matches!(
            World::from_rooms(rooms),
            Err(BgError::DuplicateRoom(name)) if name == "A"
        ));
    }

    #[test]
    fn duplicate_object_rejected() {
        let rooms = vec![
            Room::new("A", Behavior::DawnRoad)
                .with_object(Object::new("x", Behavior::Train))
                .with_object(Object::new("x", Behavior::Bus)),
        ];
        assert!(matches!(
            World::from_rooms(rooms),
            Err(BgError::DuplicateObject { .. })
        ));
    }

    #[test]
    fn every_destination_exists() {
        use bg_core::{GameState, Term, Verb};

        // Drive every behavior with every verb category and a spread of
        // direction words; no reply may name a room outside the catalog.
        let world = World::benagram().unwrap();
        let verbs = [
            "look", "go", "talk", "approach", "board", "pay", "take", "bargain", "open", "enter",
            "exit", "wait", "hide", "leave", "inventory", "dance",
        ];
        let params = [
            "west", "east", "north", "south", "bus", "back", "street", "village", "auto",
        ];
        let mut state = GameState::initial().with_item("charm");
        state.flags.insert("Hiding in bushes".to_string());
        for room in world.rooms() {
            let here = state.moved_to(&room.name);
            let behaviors = std::iter::once(room.behavior)
                .chain(room.objects.iter().map(|o| o.behavior));
            for behavior in behaviors {
                for verb in verbs {
                    for param in params {
                        let terms = [Term::verb(verb), Term::noun(param)];
                        let reply = behavior.handle(&Verb::parse(verb), &here, &terms);
                        assert!(
                            world.contains(&reply.state.current_room),
                            "{behavior:?} {verb} {param} -> {}",
                            reply.state.current_room
                        );
                    }
                }
            }
        }
    }
}
