//! Read-only access to destination collections.
//!
//! The similarity engine never queries a database. Callers hand it
//! materialised collections through a [`DestinationStore`]; [`Catalog`] is the
//! in-memory implementation, validating identifiers and numeric fields when it
//! is built.

use std::collections::HashMap;

use log::warn;
use thiserror::Error;

use crate::{City, CityContext, Country, Destination, DestinationId, DestinationKind};

/// Errors raised while assembling a [`Catalog`].
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two countries share an identifier.
    #[error("country id {id} appears more than once")]
    DuplicateCountryId {
        /// The repeated identifier.
        id: DestinationId,
    },
    /// Two cities share an identifier.
    #[error("city id {id} appears more than once")]
    DuplicateCityId {
        /// The repeated identifier.
        id: DestinationId,
    },
    /// A rating was negative or not finite.
    #[error("{kind} {id} has invalid {field} {value}")]
    InvalidRating {
        /// Kind of the offending destination.
        kind: DestinationKind,
        /// Identifier of the offending destination.
        id: DestinationId,
        /// Record field name of the rating.
        field: &'static str,
        /// The rejected value.
        value: f32,
    },
    /// A weekly budget was negative or not finite.
    #[error("{kind} {id} has invalid weeklyBudget {value}")]
    InvalidBudget {
        /// Kind of the offending destination.
        kind: DestinationKind,
        /// Identifier of the offending destination.
        id: DestinationId,
        /// The rejected value.
        value: f32,
    },
    /// Decoding a JSON catalogue failed.
    #[cfg(feature = "serde")]
    #[error("failed to parse destination catalogue")]
    Parse {
        /// Source error from `serde_json`.
        #[source]
        source: serde_json::Error,
    },
}

/// Read-only source of countries and cities.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single store can
/// back concurrent ranking requests. Lookups default to linear scans over
/// [`countries`](Self::countries) and [`cities`](Self::cities); implementors
/// with indexes should override them.
pub trait DestinationStore: Send + Sync {
    /// Every known country.
    fn countries(&self) -> &[Country];

    /// Every known city.
    fn cities(&self) -> &[City];

    /// Find a country by identifier.
    fn country(&self, id: DestinationId) -> Option<&Country> {
        self.countries().iter().find(|country| country.id == id)
    }

    /// Find a city by identifier.
    fn city(&self, id: DestinationId) -> Option<&City> {
        self.cities().iter().find(|city| city.id == id)
    }

    /// Find a country by URL slug.
    fn country_by_slug(&self, slug: &str) -> Option<&Country> {
        self.countries().iter().find(|country| country.slug() == slug)
    }

    /// Find a city by URL slug.
    fn city_by_slug(&self, slug: &str) -> Option<&City> {
        self.cities().iter().find(|city| city.slug() == slug)
    }

    /// Find a country by display name, ignoring case.
    fn country_by_name(&self, name: &str) -> Option<&Country> {
        let wanted = name.to_lowercase();
        self.countries()
            .iter()
            .find(|country| country.name.to_lowercase() == wanted)
    }

    /// Find a city by display name, ignoring case.
    fn city_by_name(&self, name: &str) -> Option<&City> {
        let wanted = name.to_lowercase();
        self.cities()
            .iter()
            .find(|city| city.name.to_lowercase() == wanted)
    }

    /// Iterate over the cities of a country.
    fn cities_in(&self, country: DestinationId) -> Box<dyn Iterator<Item = &City> + '_> {
        Box::new(self.cities().iter().filter(move |city| city.country == country))
    }

    /// Pair a city with its parent country, if the store knows it.
    fn city_context<'a>(&'a self, city: &'a City) -> CityContext<'a> {
        CityContext::new(city, self.country(city.country))
    }
}

/// Validated in-memory destination store.
///
/// # Examples
/// ```
/// use wayfarer_core::{Catalog, City, Country, DestinationStore};
///
/// # fn main() -> Result<(), wayfarer_core::CatalogError> {
/// let catalog = Catalog::new(
///     vec![Country::new(1, "Japan").with_continent("Asia")],
///     vec![City::new(10, "Kyoto", 1)],
/// )?;
/// assert_eq!(catalog.city_by_slug("kyoto").map(|city| city.id), Some(10));
/// assert_eq!(catalog.city_context(&catalog.cities()[0]).continent(), Some("Asia"));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    countries: Vec<Country>,
    cities: Vec<City>,
    country_index: HashMap<DestinationId, usize>,
    city_index: HashMap<DestinationId, usize>,
}

impl Catalog {
    /// Build a catalogue, rejecting duplicate identifiers and invalid
    /// numeric fields.
    ///
    /// Cities whose parent country is missing are accepted and logged; the
    /// ranking layer excludes them from city results.
    ///
    /// # Errors
    /// Returns [`CatalogError`] for duplicate identifiers, negative or
    /// non-finite ratings, and negative or non-finite weekly budgets.
    pub fn new(countries: Vec<Country>, cities: Vec<City>) -> Result<Self, CatalogError> {
        let country_index = index_by_id(&countries, |id| CatalogError::DuplicateCountryId { id })?;
        let city_index = index_by_id(&cities, |id| CatalogError::DuplicateCityId { id })?;
        for country in &countries {
            validate_numbers(DestinationKind::Country, country)?;
        }
        for city in &cities {
            validate_numbers(DestinationKind::City, city)?;
        }

        let orphans = cities
            .iter()
            .filter(|city| !country_index.contains_key(&city.country))
            .count();
        if orphans > 0 {
            warn!("{orphans} cities reference unknown countries and will not appear in city rankings");
        }

        Ok(Self {
            countries,
            cities,
            country_index,
            city_index,
        })
    }

    /// Decode a catalogue from a JSON object with `countries` and `cities`
    /// arrays, then validate it with [`Catalog::new`].
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and propagates
    /// validation failures.
    #[cfg(feature = "serde")]
    pub fn from_json_reader<R: std::io::Read>(reader: R) -> Result<Self, CatalogError> {
        #[derive(serde::Deserialize)]
        struct Snapshot {
            #[serde(default)]
            countries: Vec<Country>,
            #[serde(default)]
            cities: Vec<City>,
        }

        let snapshot: Snapshot =
            serde_json::from_reader(reader).map_err(|source| CatalogError::Parse { source })?;
        Self::new(snapshot.countries, snapshot.cities)
    }

    /// Convert every rating in the catalogue from `scale` to the canonical
    /// `0..=5` scale.
    #[must_use]
    pub fn with_rating_scale(mut self, scale: crate::RatingScale) -> Self {
        for country in &mut self.countries {
            country.rescale_ratings(scale);
        }
        for city in &mut self.cities {
            city.rescale_ratings(scale);
        }
        self
    }

    /// Number of countries.
    #[must_use]
    pub const fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Number of cities.
    #[must_use]
    pub const fn city_count(&self) -> usize {
        self.cities.len()
    }
}

impl DestinationStore for Catalog {
    fn countries(&self) -> &[Country] {
        &self.countries
    }

    fn cities(&self) -> &[City] {
        &self.cities
    }

    fn country(&self, id: DestinationId) -> Option<&Country> {
        self.country_index
            .get(&id)
            .and_then(|&position| self.countries.get(position))
    }

    fn city(&self, id: DestinationId) -> Option<&City> {
        self.city_index
            .get(&id)
            .and_then(|&position| self.cities.get(position))
    }
}

fn index_by_id<D: Destination>(
    items: &[D],
    duplicate: impl Fn(DestinationId) -> CatalogError,
) -> Result<HashMap<DestinationId, usize>, CatalogError> {
    let mut index = HashMap::with_capacity(items.len());
    for (position, item) in items.iter().enumerate() {
        if index.insert(item.id(), position).is_some() {
            return Err(duplicate(item.id()));
        }
    }
    Ok(index)
}

fn validate_numbers<D: Destination>(kind: DestinationKind, item: &D) -> Result<(), CatalogError> {
    let profile = item.profile();
    for (field, value) in profile.ratings.named() {
        if let Some(rating) = value.filter(|rating| !is_non_negative(*rating)) {
            return Err(CatalogError::InvalidRating {
                kind,
                id: item.id(),
                field,
                value: rating,
            });
        }
    }
    if let Some(budget) = profile
        .weekly_budget
        .filter(|budget| !is_non_negative(*budget))
    {
        return Err(CatalogError::InvalidBudget {
            kind,
            id: item.id(),
            value: budget,
        });
    }
    Ok(())
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
