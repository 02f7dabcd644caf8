//! Statistics report over the full IMDb dumps.
//!
//! Loads both tables unfiltered and prints three Markdown tables: rating
//! activity per title type, genre counts, and a histogram of movie
//! runtimes bucketed to the nearest ten minutes.

use std::collections::HashMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use imdb_tsv::ingestion::{load_title_basics, load_title_ratings, LoadOptions};
use imdb_tsv::types::Title;

/// Print summary statistics for the IMDb dataset dumps.
#[derive(Parser, Debug)]
#[command(name = "printstats")]
struct Cli {
    /// Path to the title.basics dump
    #[arg(long, default_value = "data/title.basics.tsv.gz")]
    basics: PathBuf,

    /// Path to the title.ratings dump
    #[arg(long, default_value = "data/title.ratings.tsv.gz")]
    ratings: PathBuf,
}

/// Runtimes at or above this many minutes share one open-ended bucket.
const RUNTIME_CAP: i32 = 300;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let titles = load_title_basics(
        &cli.basics,
        // The report only needs type, year, runtime and genres.
        LoadOptions::default().with_projection(|t: Title| Title {
            id: t.id,
            title_type: t.title_type,
            start_year: t.start_year,
            runtime_minutes: t.runtime_minutes,
            genres: t.genres,
            ..Title::default()
        }),
    )?;

    let ratings = load_title_ratings(&cli.ratings, LoadOptions::default())?;

    // Rating activity per title type, over rated titles only.
    let mut counts: HashMap<&str, u64> = HashMap::new();
    let mut rating_sums: HashMap<&str, f64> = HashMap::new();
    let mut vote_sums: HashMap<&str, u64> = HashMap::new();
    for (id, rating) in &ratings {
        let Some(title) = titles.get(id) else {
            continue;
        };
        let t = title.title_type.as_str();
        *counts.entry(t).or_default() += 1;
        *rating_sums.entry(t).or_default() += rating.average_rating;
        *vote_sums.entry(t).or_default() += rating.num_votes;
    }

    let mut by_count: Vec<(&str, u64)> = counts.iter().map(|(&t, &n)| (t, n)).collect();
    by_count.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("### Type Counts and Ratings");
    println!();
    println!("| Title Type | Count | Average Rating | Average Number of Votes |");
    println!("|------------|-------|----------------|-------------------------|");
    for (title_type, count) in &by_count {
        let mean_rating = rating_sums[title_type] / *count as f64;
        let mean_votes = vote_sums[title_type] as f64 / *count as f64;
        println!("| {title_type} | {count} | {mean_rating:.2} | {mean_votes:.0} |");
    }
    println!();

    // Genre counts across all titles.
    let mut genre_counts: HashMap<&str, u64> = HashMap::new();
    for title in titles.values() {
        for genre in &title.genres {
            *genre_counts.entry(genre.as_str()).or_default() += 1;
        }
    }
    let mut genres: Vec<(&str, u64)> = genre_counts.into_iter().collect();
    genres.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

    println!("### Genre Counts");
    println!();
    println!("| Genre | Count |");
    println!("|-------|-------|");
    for (genre, count) in &genres {
        println!("| {genre} | {count} |");
    }
    println!();

    // Movie runtimes, bucketed to the nearest ten minutes.
    let mut runtime_counts: HashMap<i32, u64> = HashMap::new();
    for title in titles.values() {
        if title.title_type != "movie" {
            continue;
        }
        let Some(runtime) = title.runtime_minutes else {
            continue;
        };
        if runtime <= 0 {
            continue;
        }
        *runtime_counts
            .entry(runtime_bucket(runtime))
            .or_default() += 1;
    }
    let mut buckets: Vec<(i32, u64)> = runtime_counts.into_iter().collect();
    buckets.sort_unstable_by_key(|&(bucket, _)| bucket);

    println!("### Movie Runtimes");
    println!();
    println!("| Runtime (minutes) | Count |");
    println!("|-------------------|-------|");
    for (bucket, count) in &buckets {
        if *bucket >= RUNTIME_CAP {
            println!("| {RUNTIME_CAP}+ | {count} |");
        } else {
            println!("| {bucket} | {count} |");
        }
    }
    println!();

    Ok(())
}

fn runtime_bucket(runtime: i32) -> i32 {
    let rounded = (runtime + 5) / 10 * 10;
    rounded.min(RUNTIME_CAP)
}
