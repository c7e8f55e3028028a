//! Species label dispatch.
//!
//! The only place where a runtime label (form value, stored column) is turned
//! into a [`Species`] or an [`Animal`] variant. Matching is exact and
//! case-sensitive.

use std::str::FromStr;

use crate::domain::entities::{Animal, Profile, Species};

/// Label did not match any known species.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized species: {label:?}")]
pub struct UnrecognizedSpecies {
    pub label: String,
}

impl FromStr for Species {
    type Err = UnrecognizedSpecies;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        match label {
            "Alpaca" => Ok(Species::Alpaca),
            "Bird" => Ok(Species::Bird),
            "Cat" => Ok(Species::Cat),
            "Dog" => Ok(Species::Dog),
            "Fish" => Ok(Species::Fish),
            _ => Err(UnrecognizedSpecies {
                label: label.to_string(),
            }),
        }
    }
}

/// Builds the animal variant named by `label`.
///
/// # Errors
///
/// Returns [`UnrecognizedSpecies`] if `label` is not one of the five species
/// labels. The profile is dropped and nothing is built.
///
/// # Examples
///
/// ```
/// use zoo_registry::domain::dispatch::dispatch;
/// use zoo_registry::domain::entities::Profile;
///
/// let animal = dispatch("Dog", Profile::new("Rex", 3.0, "East Yard")).unwrap();
/// assert_eq!(animal.make_sound(), "Woof woof");
/// assert!(dispatch("Unicorn", Profile::new("Sparkle", 1.0, "Meadow")).is_err());
/// ```
pub fn dispatch(label: &str, profile: Profile) -> Result<Animal, UnrecognizedSpecies> {
    let animal = match label.parse::<Species>()? {
        Species::Alpaca => Animal::alpaca(profile),
        Species::Bird => Animal::bird(profile),
        Species::Cat => Animal::cat(profile),
        Species::Dog => Animal::dog(profile),
        Species::Fish => Animal::fish(profile),
    };

    Ok(animal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> Profile {
        Profile::new("Rex", 3.0, "East Yard")
    }

    #[test]
    fn test_dispatch_known_labels() {
        let expected = [
            ("Alpaca", "Yeeeeeet!"),
            ("Bird", "Tweet tweet"),
            ("Cat", "Meow meow"),
            ("Dog", "Woof woof"),
            ("Fish", "Blub blub"),
        ];

        for (label, sound) in expected {
            let animal = dispatch(label, profile()).unwrap();
            assert_eq!(animal.species().label(), label);
            assert_eq!(animal.make_sound(), sound);
            assert_eq!(animal.profile(), &profile());
        }
    }

    #[test]
    fn test_dispatch_is_case_sensitive() {
        for label in ["dog", "DOG", " Dog", "Dog ", "fish"] {
            let err = dispatch(label, profile()).unwrap_err();
            assert_eq!(err.label, label);
        }
    }

    #[test]
    fn test_dispatch_unknown_label() {
        let err = dispatch("Unicorn", profile()).unwrap_err();
        assert_eq!(
            err,
            UnrecognizedSpecies {
                label: "Unicorn".to_string()
            }
        );
        assert_eq!(err.to_string(), "unrecognized species: \"Unicorn\"");
    }

    #[test]
    fn test_dispatch_empty_label() {
        assert!(dispatch("", profile()).is_err());
    }

    #[test]
    fn test_species_parse_round_trips_labels() {
        for species in Species::ALL {
            assert_eq!(species.label().parse::<Species>(), Ok(species));
        }
    }

    #[test]
    fn test_end_to_end_dog() {
        let animal = dispatch("Dog", profile()).unwrap();
        assert_eq!(animal.make_sound(), "Woof woof");
        assert_eq!(
            animal.describe(),
            "Name: Rex, Age: 3, Species: Dog, Enclosure: East Yard"
        );
    }
}
