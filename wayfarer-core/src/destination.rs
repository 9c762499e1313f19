//! Countries, cities and the descriptive profile they share.

use std::borrow::Cow;

use crate::{Attribute, Attributes, RatingScale, Ratings, TagSet};

/// Identifier of a destination, unique within its collection.
pub type DestinationId = u64;

/// Which kind of destination a comparison or lookup concerns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum DestinationKind {
    /// Country-to-country comparison.
    #[default]
    Country,
    /// City-to-city comparison.
    City,
}

impl DestinationKind {
    /// Return the kind as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Country => "country",
            Self::City => "city",
        }
    }
}

impl std::fmt::Display for DestinationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for DestinationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "country" => Ok(Self::Country),
            "city" => Ok(Self::City),
            _ => Err(format!("unknown destination kind '{s}'")),
        }
    }
}

/// Descriptive data shared by countries and cities.
///
/// Every field is optional in the source data; empty tag lists and `None`
/// values simply contribute nothing to similarity.
///
/// # Examples
/// ```
/// use wayfarer_core::{Attribute, DestinationProfile};
///
/// let profile = DestinationProfile::default()
///     .with_mood(["beach", "Party"])
///     .with_weekly_budget(850.0)
///     .with_attribute(Attribute::Nightlife, true);
/// assert!(profile.mood_tags().contains("party"));
/// assert_eq!(profile.weekly_budget, Some(850.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct DestinationProfile {
    /// Free-text descriptors of the destination's character.
    pub mood: Vec<String>,
    /// Free-text descriptors of the trips the destination suits.
    #[cfg_attr(feature = "serde", serde(rename = "vacationgoal"))]
    pub vacation_goals: Vec<String>,
    /// Ratings on the canonical `0..=5` scale.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub ratings: Ratings,
    /// Estimated cost of a week's stay in the reference currency.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub weekly_budget: Option<f32>,
    /// Tri-state boolean attributes.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub attributes: Attributes,
}

impl DestinationProfile {
    /// Mood tags as a case-insensitive set.
    #[must_use]
    pub fn mood_tags(&self) -> TagSet {
        TagSet::from_tags(&self.mood)
    }

    /// Vacation-goal tags as a case-insensitive set.
    #[must_use]
    pub fn vacation_goal_tags(&self) -> TagSet {
        TagSet::from_tags(&self.vacation_goals)
    }

    /// Replace the mood tags.
    #[must_use]
    pub fn with_mood<I, S>(mut self, mood: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mood = mood.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the vacation-goal tags.
    #[must_use]
    pub fn with_vacation_goals<I, S>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vacation_goals = goals.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the ratings.
    #[must_use]
    pub fn with_ratings(mut self, ratings: Ratings) -> Self {
        self.ratings = ratings;
        self
    }

    /// Set the weekly budget.
    #[must_use]
    pub fn with_weekly_budget(mut self, budget: f32) -> Self {
        self.weekly_budget = Some(budget);
        self
    }

    /// Set a boolean attribute.
    #[must_use]
    pub fn with_attribute(mut self, attribute: Attribute, value: bool) -> Self {
        self.attributes = self.attributes.with(attribute, value);
        self
    }
}

/// Behaviour shared by every destination kind.
pub trait Destination {
    /// Identifier unique within the destination's collection.
    fn id(&self) -> DestinationId;

    /// Display name.
    fn name(&self) -> &str;

    /// Explicit slug, if the record carries one.
    fn explicit_slug(&self) -> Option<&str>;

    /// Descriptive profile compared by the scorer.
    fn profile(&self) -> &DestinationProfile;

    /// URL slug: the explicit slug when present, otherwise derived from the
    /// name with [`slugify`].
    fn slug(&self) -> Cow<'_, str> {
        self.explicit_slug()
            .map_or_else(|| Cow::Owned(slugify(self.name())), Cow::Borrowed)
    }
}

/// A country record.
///
/// # Examples
/// ```
/// use wayfarer_core::{Country, Destination};
///
/// let country = Country::new(1, "New Zealand")
///     .with_continent("Oceania")
///     .with_mood(["outdoors"]);
/// assert_eq!(country.slug(), "new-zealand");
/// assert_eq!(country.continent.as_deref(), Some("Oceania"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Country {
    /// Unique identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Optional explicit URL slug.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub slug: Option<String>,
    /// Continent the country belongs to.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub continent: Option<String>,
    /// Shared descriptive data.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: DestinationProfile,
}

/// A city record linked to its country by identifier.
///
/// # Examples
/// ```
/// use wayfarer_core::{City, Destination};
///
/// let city = City::new(10, "Kyoto", 1).with_mood(["historic"]);
/// assert_eq!(city.country, 1);
/// assert_eq!(city.slug(), "kyoto");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    /// Unique identifier.
    pub id: DestinationId,
    /// Display name.
    pub name: String,
    /// Optional explicit URL slug.
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Option::is_none")
    )]
    pub slug: Option<String>,
    /// Identifier of the parent [`Country`].
    pub country: DestinationId,
    /// Shared descriptive data.
    #[cfg_attr(feature = "serde", serde(flatten))]
    pub profile: DestinationProfile,
}

impl Country {
    /// Construct a country with an empty profile.
    #[must_use]
    pub fn new(id: DestinationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
            continent: None,
            profile: DestinationProfile::default(),
        }
    }

    /// Set the continent.
    #[must_use]
    pub fn with_continent(mut self, continent: impl Into<String>) -> Self {
        self.continent = Some(continent.into());
        self
    }
}

impl City {
    /// Construct a city belonging to `country` with an empty profile.
    #[must_use]
    pub fn new(id: DestinationId, name: impl Into<String>, country: DestinationId) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
            country,
            profile: DestinationProfile::default(),
        }
    }
}

/// Builder methods forwarding to [`DestinationProfile`].
macro_rules! profile_builders {
    ($ty:ty) => {
        impl $ty {
            /// Set an explicit URL slug.
            #[must_use]
            pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
                self.slug = Some(slug.into());
                self
            }

            /// Replace the whole descriptive profile.
            #[must_use]
            pub fn with_profile(mut self, profile: DestinationProfile) -> Self {
                self.profile = profile;
                self
            }

            /// Replace the mood tags.
            #[must_use]
            pub fn with_mood<I, S>(mut self, mood: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.profile = self.profile.with_mood(mood);
                self
            }

            /// Replace the vacation-goal tags.
            #[must_use]
            pub fn with_vacation_goals<I, S>(mut self, goals: I) -> Self
            where
                I: IntoIterator<Item = S>,
                S: Into<String>,
            {
                self.profile = self.profile.with_vacation_goals(goals);
                self
            }

            /// Replace the ratings.
            #[must_use]
            pub fn with_ratings(mut self, ratings: Ratings) -> Self {
                self.profile.ratings = ratings;
                self
            }

            /// Set the weekly budget.
            #[must_use]
            pub fn with_weekly_budget(mut self, budget: f32) -> Self {
                self.profile.weekly_budget = Some(budget);
                self
            }

            /// Set a boolean attribute.
            #[must_use]
            pub fn with_attribute(mut self, attribute: Attribute, value: bool) -> Self {
                self.profile.attributes = self.profile.attributes.with(attribute, value);
                self
            }

            /// Convert ratings recorded on `scale` to the canonical scale in
            /// place.
            pub fn rescale_ratings(&mut self, scale: RatingScale) {
                self.profile.ratings = self.profile.ratings.rescaled(scale);
            }
        }

        impl Destination for $ty {
            fn id(&self) -> DestinationId {
                self.id
            }

            fn name(&self) -> &str {
                &self.name
            }

            fn explicit_slug(&self) -> Option<&str> {
                self.slug.as_deref()
            }

            fn profile(&self) -> &DestinationProfile {
                &self.profile
            }
        }
    };
}

profile_builders!(Country);
profile_builders!(City);

/// Derive a URL slug from a display name.
///
/// Letters and digits are lowercased and kept; every other run of characters
/// becomes a single `-`. Leading and trailing separators are dropped.
///
/// # Examples
/// ```
/// use wayfarer_core::slugify;
///
/// assert_eq!(slugify("Bosnia & Herzegovina"), "bosnia-herzegovina");
/// assert_eq!(slugify("  São Paulo "), "são-paulo");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.extend(ch.to_lowercase());
        } else {
            pending_separator = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Japan", "japan")]
    #[case("United States of America", "united-states-of-america")]
    #[case("Côte d'Ivoire", "côte-d-ivoire")]
    #[case("--Oddly--Punctuated--", "oddly-punctuated")]
    #[case("", "")]
    fn slugify_cases(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(slugify(name), expected);
    }

    #[rstest]
    fn explicit_slug_wins() {
        let country = Country::new(1, "United Kingdom").with_slug("uk");
        assert_eq!(country.slug(), "uk");
    }

    #[rstest]
    fn builders_populate_profile() {
        let city = City::new(5, "Lisbon", 2)
            .with_mood(["historic"])
            .with_vacation_goals(["food"])
            .with_weekly_budget(700.0)
            .with_attribute(Attribute::Safe, true);
        assert_eq!(city.profile.mood, vec!["historic".to_owned()]);
        assert_eq!(city.profile.vacation_goals, vec!["food".to_owned()]);
        assert_eq!(city.profile.weekly_budget, Some(700.0));
        assert_eq!(city.profile.attributes.get(Attribute::Safe), Some(true));
    }

    #[rstest]
    fn rescale_ratings_updates_profile() {
        let mut country = Country::new(1, "Peru").with_ratings(Ratings::uniform(60.0));
        country.rescale_ratings(RatingScale::Percent);
        assert_eq!(country.profile.ratings.overall, Some(3.0));
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_flat_country_record() {
        let country: Country = serde_json::from_str(
            r#"{
                "id": 7,
                "name": "Thailand",
                "continent": "Asia",
                "mood": ["beach", "party"],
                "vacationgoal": ["relaxation"],
                "overallRating": 4.5,
                "weeklyBudget": 650,
                "nightlife": true,
                "dogfriendly": false
            }"#,
        )
        .expect("valid country record");
        assert_eq!(country.id, 7);
        assert_eq!(country.continent.as_deref(), Some("Asia"));
        assert_eq!(country.profile.vacation_goals, vec!["relaxation".to_owned()]);
        assert_eq!(country.profile.ratings.overall, Some(4.5));
        assert_eq!(country.profile.ratings.cost, None);
        assert_eq!(country.profile.weekly_budget, Some(650.0));
        assert_eq!(
            country.profile.attributes.get(Attribute::Nightlife),
            Some(true)
        );
        assert_eq!(
            country.profile.attributes.get(Attribute::DogFriendly),
            Some(false)
        );
    }

    #[cfg(feature = "serde")]
    #[rstest]
    fn deserialises_minimal_city_record() {
        let city: City =
            serde_json::from_str(r#"{"id": 3, "name": "Osaka", "country": 7}"#).expect("valid city");
        assert_eq!(city.country, 7);
        assert!(city.profile.mood.is_empty());
        assert!(city.profile.ratings.is_empty());
    }
}
