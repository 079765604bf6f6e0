//! Command implementations for the TastyPair CLI.

use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::AggregatorConfig;
use crate::error::{Result, TastyPairError};
use crate::menu::source::{JsonFileSource, LoadReport};
use crate::menu::venue::Venue;
use crate::pairing::aggregator::PairingAggregator;
use crate::pairing::item::ItemTokenSet;
use crate::pairing::snapshot::PairingSnapshot;

/// Number of most frequent ingredients listed in summaries.
const TOP_INGREDIENTS: usize = 10;

/// Execute a CLI command.
pub fn execute_command(args: TastyPairArgs) -> Result<()> {
    match args.command() {
        Command::Aggregate(aggregate_args) => aggregate(aggregate_args, &args),
        Command::Tokens(tokens_args) => dump_tokens(tokens_args, &args),
        Command::Recommend(recommend_args) => recommend(recommend_args, &args),
    }
}

/// Build the aggregator configuration from the config file and flags.
fn load_config(args: &AggregateArgs, cli_args: &TastyPairArgs) -> Result<AggregatorConfig> {
    let mut config = match &cli_args.config {
        Some(path) => {
            info!("Loading configuration from: {}", path.display());
            AggregatorConfig::from_file(path)?
        }
        None => AggregatorConfig::default(),
    };

    if args.parallel {
        config.parallel = true;
    }
    if let Some(threads) = args.threads {
        if threads == 0 {
            return Err(TastyPairError::invalid_argument(
                "--threads must be greater than 0",
            ));
        }
        config.parallel = true;
        config.num_threads = Some(threads);
    }

    config.validate()?;
    Ok(config)
}

fn load_venues(input: &Path) -> Result<(Vec<Venue>, LoadReport)> {
    info!("Reading venues from: {}", input.display());
    let (venues, report) = JsonFileSource::new(input).load()?;
    if report.skipped > 0 {
        warn!(
            "{} of {} venues were malformed and skipped",
            report.skipped,
            report.decoded + report.skipped
        );
    }
    Ok((venues, report))
}

/// Aggregate a venue dump and emit the pairings.
fn aggregate(args: AggregateArgs, cli_args: &TastyPairArgs) -> Result<()> {
    let config = load_config(&args, cli_args)?;
    let start_time = Instant::now();

    let (venues, report) = load_venues(&args.input)?;
    let aggregator = PairingAggregator::new(config)?;
    let (store, stats) = aggregator.aggregate_with_stats(&venues);
    let snapshot = store.snapshot();

    match &args.output {
        Some(path) => {
            snapshot.save(path, cli_args.pretty)?;
            info!("Pairings written to: {}", path.display());
        }
        None if cli_args.output_format == OutputFormat::Json => {
            return output_snapshot(&snapshot, cli_args);
        }
        None => {}
    }

    let summary = AggregationSummary {
        input: args.input.to_string_lossy().to_string(),
        output: args.output.as_ref().map(|p| p.to_string_lossy().to_string()),
        venues: stats.venues,
        skipped_venues: report.skipped,
        items: stats.items,
        empty_items: stats.empty_items,
        distinct_ingredients: snapshot.ingredients.len(),
        total_ingredients: snapshot.total_ingredients,
        total_pairings: snapshot.total_pairings,
        duration_ms: start_time.elapsed().as_millis() as u64,
        top_ingredients: top_ingredients(&snapshot, TOP_INGREDIENTS),
    };

    output_result(&summary, cli_args)
}

/// Print the token set of every item, like a debugging dump of the corpus.
fn dump_tokens(args: TokensArgs, cli_args: &TastyPairArgs) -> Result<()> {
    let (venues, _) = load_venues(&args.input)?;
    let limit = args.limit.unwrap_or(usize::MAX);

    let items: Vec<ItemTokens> = venues
        .iter()
        .flat_map(|venue| venue.items().map(move |item| (venue, item)))
        .map(|(venue, item)| ItemTokens {
            venue: venue.label().to_string(),
            item: item.name.clone(),
            tokens: ItemTokenSet::from_item(item).into_vec(),
        })
        .filter(|entry| !(args.skip_empty && entry.tokens.is_empty()))
        .take(limit)
        .collect();

    output_result(&items, cli_args)
}

/// Recommend ingredients for the chosen foods.
fn recommend(args: RecommendArgs, cli_args: &TastyPairArgs) -> Result<()> {
    if args.limit == 0 {
        return Err(TastyPairError::invalid_argument(
            "--limit must be greater than 0",
        ));
    }

    info!("Loading pairings from: {}", args.pairings.display());
    let snapshot = PairingSnapshot::load(&args.pairings)?;
    let recommendations = snapshot.recommend(&args.foods, args.limit);

    output_result(
        &RecommendationResults {
            chosen: args.foods,
            recommendations,
        },
        cli_args,
    )
}

/// The most frequent ingredients, ties broken alphabetically.
fn top_ingredients(snapshot: &PairingSnapshot, limit: usize) -> Vec<(String, u64)> {
    let mut ranked: Vec<(String, u64)> = snapshot
        .ingredients
        .iter()
        .map(|(token, count)| (token.clone(), *count))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.truncate(limit);
    ranked
}
