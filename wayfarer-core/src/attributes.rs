//! Boolean destination attributes.
//!
//! Each attribute is tri-state: `Some(true)`, `Some(false)`, or `None` when
//! the source data does not say. The [`Attribute`] enum lists every field so
//! comparisons iterate a typed list instead of looking fields up by name.

use thiserror::Error;

/// One of the fourteen boolean attributes a destination may carry.
///
/// # Examples
/// ```
/// use wayfarer_core::Attribute;
///
/// assert_eq!(Attribute::ALL.len(), 14);
/// assert_eq!(Attribute::FastInternet.as_str(), "fastInternet");
/// assert_eq!("lowRacism".parse::<Attribute>(), Ok(Attribute::LowRacism));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Generally safe for visitors.
    Safe,
    /// Reliable, fast internet access.
    FastInternet,
    /// Good air quality.
    CleanAir,
    /// Less visited but rewarding.
    HiddenGem,
    /// Widely visited.
    Popular,
    /// Suitable for families with children.
    FamilyFriendly,
    /// Notable cuisine.
    AmazingFood,
    /// Active nightlife.
    Nightlife,
    /// Good for dating.
    GreatForDating,
    /// Environmentally conscious.
    EcoFriendly,
    /// Welcoming to dogs.
    DogFriendly,
    /// Welcoming to LGBTQ travellers.
    LgbtqFriendly,
    /// Low reported racism.
    LowRacism,
    /// Welcoming to Muslim travellers.
    MuslimFriendly,
}

impl Attribute {
    /// Every attribute in declaration order.
    pub const ALL: [Self; 14] = [
        Self::Safe,
        Self::FastInternet,
        Self::CleanAir,
        Self::HiddenGem,
        Self::Popular,
        Self::FamilyFriendly,
        Self::AmazingFood,
        Self::Nightlife,
        Self::GreatForDating,
        Self::EcoFriendly,
        Self::DogFriendly,
        Self::LgbtqFriendly,
        Self::LowRacism,
        Self::MuslimFriendly,
    ];

    /// Return the attribute's field name as used in destination records.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Safe => "safe",
            Self::FastInternet => "fastInternet",
            Self::CleanAir => "cleanAir",
            Self::HiddenGem => "hiddenGem",
            Self::Popular => "popular",
            Self::FamilyFriendly => "familyFriendly",
            Self::AmazingFood => "amazingFood",
            Self::Nightlife => "nightlife",
            Self::GreatForDating => "greatForDating",
            Self::EcoFriendly => "ecofriendly",
            Self::DogFriendly => "dogfriendly",
            Self::LgbtqFriendly => "lgbtqfriendly",
            Self::LowRacism => "lowRacism",
            Self::MuslimFriendly => "muslimfriendly",
        }
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown attribute name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown destination attribute '{name}'")]
pub struct ParseAttributeError {
    /// The rejected input.
    pub name: String,
}

impl std::str::FromStr for Attribute {
    type Err = ParseAttributeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|attribute| attribute.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseAttributeError { name: s.to_owned() })
    }
}

/// Tri-state values for every [`Attribute`].
///
/// # Examples
/// ```
/// use wayfarer_core::{Attribute, Attributes};
///
/// let attributes = Attributes::default()
///     .with(Attribute::Nightlife, true)
///     .with(Attribute::Safe, false);
/// assert_eq!(attributes.get(Attribute::Nightlife), Some(true));
/// assert_eq!(attributes.get(Attribute::Safe), Some(false));
/// assert_eq!(attributes.get(Attribute::CleanAir), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct Attributes {
    /// See [`Attribute::Safe`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub safe: Option<bool>,
    /// See [`Attribute::FastInternet`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub fast_internet: Option<bool>,
    /// See [`Attribute::CleanAir`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub clean_air: Option<bool>,
    /// See [`Attribute::HiddenGem`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub hidden_gem: Option<bool>,
    /// See [`Attribute::Popular`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub popular: Option<bool>,
    /// See [`Attribute::FamilyFriendly`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub family_friendly: Option<bool>,
    /// See [`Attribute::AmazingFood`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub amazing_food: Option<bool>,
    /// See [`Attribute::Nightlife`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub nightlife: Option<bool>,
    /// See [`Attribute::GreatForDating`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub great_for_dating: Option<bool>,
    /// See [`Attribute::EcoFriendly`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "ecofriendly", skip_serializing_if = "Option::is_none")
    )]
    pub eco_friendly: Option<bool>,
    /// See [`Attribute::DogFriendly`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "dogfriendly", skip_serializing_if = "Option::is_none")
    )]
    pub dog_friendly: Option<bool>,
    /// See [`Attribute::LgbtqFriendly`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "lgbtqfriendly", skip_serializing_if = "Option::is_none")
    )]
    pub lgbtq_friendly: Option<bool>,
    /// See [`Attribute::LowRacism`].
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub low_racism: Option<bool>,
    /// See [`Attribute::MuslimFriendly`].
    #[cfg_attr(
        feature = "serde",
        serde(rename = "muslimfriendly", skip_serializing_if = "Option::is_none")
    )]
    pub muslim_friendly: Option<bool>,
}

impl Attributes {
    /// Return the value recorded for `attribute`.
    #[must_use]
    pub const fn get(&self, attribute: Attribute) -> Option<bool> {
        match attribute {
            Attribute::Safe => self.safe,
            Attribute::FastInternet => self.fast_internet,
            Attribute::CleanAir => self.clean_air,
            Attribute::HiddenGem => self.hidden_gem,
            Attribute::Popular => self.popular,
            Attribute::FamilyFriendly => self.family_friendly,
            Attribute::AmazingFood => self.amazing_food,
            Attribute::Nightlife => self.nightlife,
            Attribute::GreatForDating => self.great_for_dating,
            Attribute::EcoFriendly => self.eco_friendly,
            Attribute::DogFriendly => self.dog_friendly,
            Attribute::LgbtqFriendly => self.lgbtq_friendly,
            Attribute::LowRacism => self.low_racism,
            Attribute::MuslimFriendly => self.muslim_friendly,
        }
    }

    /// Record a value for `attribute`, or clear it with `None`.
    pub const fn set(&mut self, attribute: Attribute, value: Option<bool>) {
        let slot = match attribute {
            Attribute::Safe => &mut self.safe,
            Attribute::FastInternet => &mut self.fast_internet,
            Attribute::CleanAir => &mut self.clean_air,
            Attribute::HiddenGem => &mut self.hidden_gem,
            Attribute::Popular => &mut self.popular,
            Attribute::FamilyFriendly => &mut self.family_friendly,
            Attribute::AmazingFood => &mut self.amazing_food,
            Attribute::Nightlife => &mut self.nightlife,
            Attribute::GreatForDating => &mut self.great_for_dating,
            Attribute::EcoFriendly => &mut self.eco_friendly,
            Attribute::DogFriendly => &mut self.dog_friendly,
            Attribute::LgbtqFriendly => &mut self.lgbtq_friendly,
            Attribute::LowRacism => &mut self.low_racism,
            Attribute::MuslimFriendly => &mut self.muslim_friendly,
        };
        *slot = value;
    }

    /// Set `attribute` while returning `self` for chaining.
    #[must_use]
    pub const fn with(mut self, attribute: Attribute, value: bool) -> Self {
        self.set(attribute, Some(value));
        self
    }

    /// Iterate over the attributes that carry a value.
    #[must_use]
    pub fn known(&self) -> impl Iterator<Item = (Attribute, bool)> + '_ {
        Attribute::ALL
            .into_iter()
            .filter_map(|attribute| self.get(attribute).map(|value| (attribute, value)))
    }
}
