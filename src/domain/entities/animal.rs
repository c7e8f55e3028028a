//! Animal entity: the closed family of species handled by the registry.

use serde::Serialize;
use std::fmt;

/// Species accepted by the registry.
///
/// The set is closed: adding a species means adding a variant here, a label
/// in [`crate::domain::dispatch`] and a sound below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Species {
    Alpaca,
    Bird,
    Cat,
    Dog,
    Fish,
}

impl Species {
    /// All species in display order.
    pub const ALL: [Species; 5] = [
        Species::Alpaca,
        Species::Bird,
        Species::Cat,
        Species::Dog,
        Species::Fish,
    ];

    /// Case-sensitive label used on the wire and in storage.
    pub fn label(self) -> &'static str {
        match self {
            Species::Alpaca => "Alpaca",
            Species::Bird => "Bird",
            Species::Cat => "Cat",
            Species::Dog => "Dog",
            Species::Fish => "Fish",
        }
    }

    /// The fixed sound of this species.
    pub fn sound(self) -> &'static str {
        match self {
            Species::Alpaca => "Yeeeeeet!",
            Species::Bird => "Tweet tweet",
            Species::Cat => "Meow meow",
            Species::Dog => "Woof woof",
            Species::Fish => "Blub blub",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fields shared by every species.
///
/// Values are expected to be validated by the caller; a profile does not
/// check its own contents.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile {
    pub name: String,
    pub age: f64,
    pub enclosure: String,
}

impl Profile {
    pub fn new(name: impl Into<String>, age: f64, enclosure: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            age,
            enclosure: enclosure.into(),
        }
    }
}

/// One animal, tagged by species.
#[derive(Debug, Clone, PartialEq)]
pub enum Animal {
    Alpaca(Profile),
    Bird(Profile),
    Cat(Profile),
    Dog(Profile),
    Fish(Profile),
}

impl Animal {
    pub fn alpaca(profile: Profile) -> Self {
        Self::Alpaca(profile)
    }

    pub fn bird(profile: Profile) -> Self {
        Self::Bird(profile)
    }

    pub fn cat(profile: Profile) -> Self {
        Self::Cat(profile)
    }

    pub fn dog(profile: Profile) -> Self {
        Self::Dog(profile)
    }

    pub fn fish(profile: Profile) -> Self {
        Self::Fish(profile)
    }

    pub fn species(&self) -> Species {
        match self {
            Animal::Alpaca(_) => Species::Alpaca,
            Animal::Bird(_) => Species::Bird,
            Animal::Cat(_) => Species::Cat,
            Animal::Dog(_) => Species::Dog,
            Animal::Fish(_) => Species::Fish,
        }
    }

    pub fn profile(&self) -> &Profile {
        match self {
            Animal::Alpaca(p)
            | Animal::Bird(p)
            | Animal::Cat(p)
            | Animal::Dog(p)
            | Animal::Fish(p) => p,
        }
    }

    /// Consumes the animal and returns its profile.
    pub fn into_profile(self) -> Profile {
        match self {
            Animal::Alpaca(p)
            | Animal::Bird(p)
            | Animal::Cat(p)
            | Animal::Dog(p)
            | Animal::Fish(p) => p,
        }
    }

    /// Returns the fixed sound of this animal's species.
    pub fn make_sound(&self) -> &'static str {
        self.species().sound()
    }

    /// Human-readable summary of all four fields.
    ///
    /// Format: `Name: {name}, Age: {age}, Species: {species}, Enclosure: {enclosure}`.
    pub fn describe(&self) -> String {
        let profile = self.profile();
        format!(
            "Name: {}, Age: {}, Species: {}, Enclosure: {}",
            profile.name,
            profile.age,
            self.species(),
            profile.enclosure
        )
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
