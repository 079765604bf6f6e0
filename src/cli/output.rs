//! Output formatting for CLI commands.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, TastyPairArgs};
use crate::error::Result;
use crate::pairing::snapshot::PairingSnapshot;
use crate::recommend::Recommendation;

/// Summary of an aggregation run.
#[derive(Debug, Serialize, Deserialize)]
pub struct AggregationSummary {
    pub input: String,
    pub output: Option<String>,
    pub venues: usize,
    pub skipped_venues: usize,
    pub items: usize,
    pub empty_items: usize,
    pub distinct_ingredients: usize,
    pub total_ingredients: u64,
    pub total_pairings: u64,
    pub duration_ms: u64,
    pub top_ingredients: Vec<(String, u64)>,
}

/// Token set of one menu item.
#[derive(Debug, Serialize, Deserialize)]
pub struct ItemTokens {
    pub venue: String,
    pub item: Option<String>,
    pub tokens: Vec<String>,
}

/// Result of a recommendation query.
#[derive(Debug, Serialize, Deserialize)]
pub struct RecommendationResults {
    pub chosen: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

/// Output a result in the requested format.
pub fn output_result<T: Serialize + HumanOutput>(result: &T, args: &TastyPairArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.output_format {
        OutputFormat::Json => write_json(&mut out, result, args.pretty),
        OutputFormat::Human => result.write_human(&mut out),
    }
}

/// Write a snapshot as JSON to standard output.
pub fn output_snapshot(snapshot: &PairingSnapshot, args: &TastyPairArgs) -> Result<()> {
    let stdout = io::stdout();
    snapshot.write_json(stdout.lock(), args.pretty)
}

fn write_json<W: Write, T: Serialize>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Types that can render themselves for a terminal.
pub trait HumanOutput {
    /// Write a human-readable rendering.
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanOutput for AggregationSummary {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Aggregation Summary:")?;
        writeln!(out, "════════════════════")?;
        writeln!(out, "Input: {}", self.input)?;
        if let Some(output) = &self.output {
            writeln!(out, "Output: {output}")?;
        }
        writeln!(out, "Venues: {} ({} skipped)", self.venues, self.skipped_venues)?;
        writeln!(out, "Items: {} ({} without tokens)", self.items, self.empty_items)?;
        writeln!(out, "Distinct ingredients: {}", self.distinct_ingredients)?;
        writeln!(out, "Total ingredients: {}", self.total_ingredients)?;
        writeln!(out, "Total pairings: {}", self.total_pairings)?;
        writeln!(out, "Time: {}ms", self.duration_ms)?;

        if !self.top_ingredients.is_empty() {
            writeln!(out)?;
            writeln!(out, "Top ingredients:")?;
            writeln!(out, "────────────────")?;
            for (ingredient, count) in &self.top_ingredients {
                writeln!(out, "  {ingredient} ({count})")?;
            }
        }
        Ok(())
    }
}

impl HumanOutput for Vec<ItemTokens> {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for entry in self {
            let item = entry.item.as_deref().unwrap_or("<unnamed item>");
            writeln!(out, "[{}] {}: {}", entry.venue, item, entry.tokens.join(" "))?;
        }
        writeln!(out)?;
        writeln!(out, "Items: {}", self.len())?;
        Ok(())
    }
}

impl HumanOutput for RecommendationResults {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Chosen: {}", self.chosen.join(", "))?;
        writeln!(out)?;

        if self.recommendations.is_empty() {
            writeln!(out, "No recommendations found.")?;
            return Ok(());
        }

        writeln!(out, "Recommended pairings:")?;
        writeln!(out, "═════════════════════")?;
        for (i, recommendation) in self.recommendations.iter().enumerate() {
            writeln!(
                out,
                "{:>3}. {} (score: {}, seen in {} items)",
                i + 1,
                recommendation.ingredient,
                recommendation.score,
                recommendation.frequency
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<T: HumanOutput>(value: &T) -> String {
        let mut buf = Vec::new();
        value.write_human(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_recommendations_human() {
        let results = RecommendationResults {
            chosen: vec!["tomato".to_string()],
            recommendations: vec![Recommendation {
                ingredient: "basil".to_string(),
                score: 2,
                frequency: 3,
            }],
        };
        let text = render(&results);
        assert!(text.contains("Chosen: tomato"));
        assert!(text.contains("1. basil (score: 2, seen in 3 items)"));
    }

    #[test]
    fn test_empty_recommendations_human() {
        let results = RecommendationResults {
            chosen: vec!["durian".to_string()],
            recommendations: Vec::new(),
        };
        assert!(render(&results).contains("No recommendations found."));
    }

    #[test]
    fn test_item_tokens_human() {
        let items = vec![ItemTokens {
            venue: "v1".to_string(),
            item: None,
            tokens: vec!["lime".to_string(), "soda".to_string()],
        }];
        let text = render(&items);
        assert!(text.contains("[v1] <unnamed item>: lime soda"));
        assert!(text.contains("Items: 1"));
    }

    #[test]
    fn test_write_json() {
        let mut buf = Vec::new();
        write_json(&mut buf, &vec![("salt", 1)], false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[[\"salt\",1]]\n");
    }
}
