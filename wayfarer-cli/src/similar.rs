//! Similar command implementation for the Wayfarer CLI.

use std::io::{BufReader, Write};

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use log::{debug, trace};
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use wayfarer_core::{
    Catalog, Destination, DestinationId, DestinationKind, DestinationStore, RatingScale, Similar,
};
use wayfarer_scorer::{DestinationScorer, RankingOptions, SimilarityRanker};

use crate::fs::{file_is_file, open_utf8_file};
use crate::{
    ARG_DATASET, ARG_KIND, ARG_LIMIT, ARG_MIN_SIMILARITY, ARG_RATING_SCALE, ARG_TARGET, CliError,
    ENV_DATASET, ENV_TARGET,
};

/// CLI arguments for the `similar` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Rank the destinations in a JSON dataset by similarity to a \
                 target country or city. The target is matched by id, then \
                 slug, then case-insensitive name. Options can come from CLI \
                 flags, configuration files, or environment variables.",
    about = "Rank destinations by similarity to a target"
)]
#[ortho_config(prefix = "WAYFARER")]
pub(crate) struct SimilarArgs {
    /// Identifier, slug or name of the target destination.
    #[arg(value_name = "target")]
    #[serde(default)]
    pub(crate) target: Option<String>,
    /// Whether the target is a country or a city (default: country).
    #[arg(long = ARG_KIND, value_name = "country|city")]
    #[serde(default)]
    pub(crate) kind: Option<DestinationKind>,
    /// Path to a JSON dataset with `countries` and `cities` arrays.
    #[arg(long = ARG_DATASET, value_name = "path")]
    #[serde(default)]
    pub(crate) dataset: Option<Utf8PathBuf>,
    /// Maximum number of results (default: 12).
    #[arg(long = ARG_LIMIT, value_name = "n")]
    #[serde(default)]
    pub(crate) limit: Option<usize>,
    /// Candidates must score above this similarity (default: 0.05).
    #[arg(long = ARG_MIN_SIMILARITY, value_name = "score")]
    #[serde(default)]
    pub(crate) min_similarity: Option<f32>,
    /// Scale the dataset's ratings are recorded on (default: five).
    #[arg(long = ARG_RATING_SCALE, value_name = "five|percent")]
    #[serde(default)]
    pub(crate) rating_scale: Option<RatingScale>,
}

impl SimilarArgs {
    pub(crate) fn into_config(self) -> Result<SimilarConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        SimilarConfig::try_from(merged)
    }
}

/// Resolved `similar` command configuration.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SimilarConfig {
    /// Identifier, slug or name of the target.
    pub(crate) target: String,
    /// Kind of destination to rank.
    pub(crate) kind: DestinationKind,
    /// Path to the JSON dataset.
    pub(crate) dataset: Utf8PathBuf,
    /// Scale the dataset's ratings are recorded on.
    pub(crate) rating_scale: RatingScale,
    /// Limit and threshold applied to the ranking.
    pub(crate) options: RankingOptions,
}

impl SimilarConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.dataset, ARG_DATASET)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<SimilarArgs> for SimilarConfig {
    type Error = CliError;

    fn try_from(args: SimilarArgs) -> Result<Self, Self::Error> {
        let target = args.target.ok_or(CliError::MissingArgument {
            field: ARG_TARGET,
            env: ENV_TARGET,
        })?;
        let dataset = args.dataset.ok_or(CliError::MissingArgument {
            field: ARG_DATASET,
            env: ENV_DATASET,
        })?;

        let mut requested = RankingOptions::default();
        if let Some(limit) = args.limit {
            requested = requested.with_limit(limit);
        }
        if let Some(value) = args.min_similarity {
            requested = requested.with_min_similarity(value);
        }
        let options = requested
            .validate()
            .map_err(CliError::InvalidRankingOptions)?;

        Ok(Self {
            target,
            kind: args.kind.unwrap_or_default(),
            dataset,
            rating_scale: args.rating_scale.unwrap_or_default(),
            options,
        })
    }
}

/// One ranked destination as printed by the CLI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RankedDestination {
    /// Destination identifier.
    pub(crate) id: DestinationId,
    /// Display name.
    pub(crate) name: String,
    /// Similarity in `0.0..=1.0`.
    pub(crate) similarity: f32,
    /// Similarity as a rounded percentage.
    pub(crate) match_percent: u8,
}

impl<D: Destination> From<Similar<&D>> for RankedDestination {
    fn from(hit: Similar<&D>) -> Self {
        Self {
            id: hit.entity.id(),
            name: hit.entity.name().to_owned(),
            similarity: hit.similarity,
            match_percent: hit.match_percent(),
        }
    }
}

pub(super) fn run_similar(args: SimilarArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_similar_with(args, &mut stdout)
}

pub(super) fn run_similar_with(args: SimilarArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = resolve_similar_config(args)?;
    let catalog = load_catalog(&config.dataset, config.rating_scale)?;
    let ranking = rank(&catalog, &config)?;
    write_ranking(writer, &ranking)
}

fn resolve_similar_config(args: SimilarArgs) -> Result<SimilarConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads and validates a JSON dataset, converting ratings from `scale`.
pub(super) fn load_catalog(path: &Utf8Path, scale: RatingScale) -> Result<Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenDataset {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json_reader(BufReader::new(file)).map_err(|source| {
        CliError::LoadDataset {
            path: path.to_path_buf(),
            source,
        }
    })?;
    debug!(
        "loaded {} countries and {} cities from {path}",
        catalog.country_count(),
        catalog.city_count()
    );
    Ok(catalog.with_rating_scale(scale))
}

/// Ranks the configured target against the rest of `catalog`.
pub(super) fn rank(
    catalog: &Catalog,
    config: &SimilarConfig,
) -> Result<Vec<RankedDestination>, CliError> {
    let ranker = SimilarityRanker::new(DestinationScorer::default()).with_options(config.options);
    let options = ranker.options();
    debug!(
        "keeping up to {} results above {} with {:?} tag overlap",
        options.limit,
        options.min_similarity,
        ranker.scorer().set_overlap()
    );
    trace!("similarity weights: {:?}", ranker.scorer().weights());
    let ranking = match config.kind {
        DestinationKind::Country => {
            let target = find_target(
                &config.target,
                config.kind,
                |id| catalog.country(id),
                |slug| catalog.country_by_slug(slug),
                |name| catalog.country_by_name(name),
            )?;
            debug!("ranking countries similar to {}", target.name);
            ranker
                .similar_countries_in(target, catalog)
                .into_iter()
                .map(RankedDestination::from)
                .collect()
        }
        DestinationKind::City => {
            let target = find_target(
                &config.target,
                config.kind,
                |id| catalog.city(id),
                |slug| catalog.city_by_slug(slug),
                |name| catalog.city_by_name(name),
            )?;
            debug!("ranking cities similar to {}", target.name);
            ranker
                .similar_cities_in(target, catalog)
                .into_iter()
                .map(RankedDestination::from)
                .collect()
        }
    };
    Ok(ranking)
}

/// Resolve `target` as an identifier, then a slug, then a name.
pub(super) fn find_target<'a, D>(
    target: &str,
    kind: DestinationKind,
    by_id: impl Fn(DestinationId) -> Option<&'a D>,
    by_slug: impl Fn(&str) -> Option<&'a D>,
    by_name: impl Fn(&str) -> Option<&'a D>,
) -> Result<&'a D, CliError> {
    let trimmed = target.trim();
    trimmed
        .parse::<DestinationId>()
        .ok()
        .and_then(&by_id)
        .or_else(|| by_slug(trimmed))
        .or_else(|| by_name(trimmed))
        .ok_or_else(|| CliError::UnknownTarget {
            kind,
            target: target.to_owned(),
        })
}

fn write_ranking(writer: &mut dyn Write, ranking: &[RankedDestination]) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(ranking).map_err(CliError::SerialiseRanking)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<SimilarConfig, CliError> {
    let merged = SimilarArgs::merge_from_layers(layers).map_err(CliError::from)?;
    SimilarConfig::try_from(merged)
}
