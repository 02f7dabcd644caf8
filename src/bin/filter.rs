//! Reference CLI: filter the IMDb dumps and print a ranked report.
//!
//! All flag validation (year range, enumeration membership, rating/vote
//! floors) happens here; the loaders only run the predicate they are
//! given. The valid-title-type and valid-genre lists are owned by this
//! layer, not by the library.

use std::path::PathBuf;

use anyhow::{bail, Result};
use chrono::Datelike;
use clap::Parser;

use imdb_tsv::ingestion::{load_title_basics, load_title_ratings, LoadOptions};
use imdb_tsv::ranking::{top_rated, top_voted};
use imdb_tsv::types::{Rating, Title};

/// Title types accepted by `--title-type`.
const VALID_TITLE_TYPES: &[&str] = &[
    "movie",
    "short",
    "tvEpisode",
    "tvMiniSeries",
    "tvMovie",
    "tvPilot",
    "tvSeries",
    "tvShort",
    "tvSpecial",
    "video",
    "videoGame",
];

/// Genres accepted by `--genre`.
const VALID_GENRES: &[&str] = &[
    "Action",
    "Adult",
    "Adventure",
    "Animation",
    "Biography",
    "Comedy",
    "Crime",
    "Documentary",
    "Drama",
    "Family",
    "Fantasy",
    "Film-Noir",
    "Game-Show",
    "History",
    "Horror",
    "Music",
    "Musical",
    "Mystery",
    "News",
    "Reality-TV",
    "Romance",
    "Sci-Fi",
    "Short",
    "Sport",
    "Talk-Show",
    "Thriller",
    "War",
    "Western",
];

/// Filter IMDb titles and print them ranked by rating or votes.
#[derive(Parser, Debug)]
#[command(name = "filter")]
struct Cli {
    /// Minimum start year (1900 through the current year)
    #[arg(short = 'y', long)]
    min_year: Option<i32>,

    /// Keep only titles of this type
    #[arg(short = 't', long)]
    title_type: Option<String>,

    /// Keep only titles carrying this genre
    #[arg(short = 'g', long)]
    genre: Option<String>,

    /// Minimum average rating (0 through 10)
    #[arg(short = 'r', long, default_value_t = 0.0)]
    min_rating: f64,

    /// Minimum number of votes
    #[arg(short = 'v', long, default_value_t = 0)]
    min_votes: u64,

    /// Include only adult titles
    #[arg(short = 'a', long)]
    adult: bool,

    /// Order by vote count instead of rating
    #[arg(short = 's', long)]
    sort_by_votes: bool,

    /// Path to the title.basics dump
    #[arg(long, default_value = "data/title.basics.tsv.gz")]
    basics: PathBuf,

    /// Path to the title.ratings dump
    #[arg(long, default_value = "data/title.ratings.tsv.gz")]
    ratings: PathBuf,
}

fn validate(cli: &Cli) -> Result<()> {
    if let Some(min_year) = cli.min_year {
        let this_year = chrono::Utc::now().year();
        if !(1900..=this_year).contains(&min_year) {
            bail!("year not within range: {min_year}");
        }
    }
    if let Some(title_type) = &cli.title_type {
        if !VALID_TITLE_TYPES.contains(&title_type.as_str()) {
            bail!(
                "title type not valid; must be one of: {}",
                VALID_TITLE_TYPES.join(", ")
            );
        }
    }
    if let Some(genre) = &cli.genre {
        if !VALID_GENRES.contains(&genre.as_str()) {
            bail!("genre not valid; must be one of: {}", VALID_GENRES.join(", "));
        }
    }
    if !(0.0..=10.0).contains(&cli.min_rating) {
        bail!("rating not in range 0 to 10");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    validate(&cli)?;

    let titles = load_title_basics(
        &cli.basics,
        LoadOptions::default()
            .with_predicate(|t: &Title| {
                if let Some(min_year) = cli.min_year {
                    match t.start_year {
                        Some(year) if year >= min_year => {}
                        _ => return false,
                    }
                }
                if let Some(title_type) = &cli.title_type {
                    if t.title_type != *title_type {
                        return false;
                    }
                }
                if let Some(genre) = &cli.genre {
                    if !t.genres.iter().any(|g| g == genre) {
                        return false;
                    }
                }
                if cli.adult && !t.is_adult {
                    return false;
                }
                true
            })
            // Keep only the fields the report prints.
            .with_projection(|t: Title| Title {
                id: t.id,
                title_type: t.title_type,
                primary_title: t.primary_title,
                start_year: t.start_year,
                genres: t.genres,
                ..Title::default()
            }),
    )?;

    let ratings = load_title_ratings(
        &cli.ratings,
        LoadOptions::default().with_predicate(|r: &Rating| {
            titles.contains_key(&r.id)
                && (cli.min_rating == 0.0 || r.average_rating >= cli.min_rating)
                && (cli.min_votes == 0 || r.num_votes >= cli.min_votes)
        }),
    )?;

    let ranked = if cli.sort_by_votes {
        top_voted(&ratings, 0)
    } else {
        top_rated(&ratings, 0)
    };

    for rating in &ranked {
        let title = &titles[&rating.id];
        let year = title
            .start_year
            .map(|y| y.to_string())
            .unwrap_or_default();
        let genres = if title.genres.is_empty() {
            String::new()
        } else {
            format!(" ({})", title.genres.join(", "))
        };
        println!(
            "{} ({}, {}): {:.1} * {}{}",
            title.primary_title, year, title.title_type, rating.average_rating, rating.num_votes, genres
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{validate, Cli};

    #[test]
    fn rejects_out_of_range_year() {
        let cli = Cli::parse_from(["filter", "--min-year", "1800"]);
        assert!(validate(&cli).unwrap_err().to_string().contains("year"));
    }

    #[test]
    fn rejects_unknown_title_type() {
        let cli = Cli::parse_from(["filter", "-t", "webSeries"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn rejects_unknown_genre() {
        let cli = Cli::parse_from(["filter", "-g", "Cyberpunk"]);
        assert!(validate(&cli).is_err());
    }

    #[test]
    fn accepts_known_enumeration_values() {
        let cli = Cli::parse_from([
            "filter", "-t", "movie", "-g", "Film-Noir", "-y", "1950", "-r", "7.5", "-v", "100",
        ]);
        assert!(validate(&cli).is_ok());
    }
}
