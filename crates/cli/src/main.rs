use anyhow::{Context, Result};
use catalog::{Category, Movie};
use clap::{Parser, Subcommand};
use colored::Colorize;
use filters::{
    CategoryFilters, CategoryList, Filterable, MatchFilter, MovieFilters, MovieList, RangeFilter,
};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// ReelFilter - filter a movie catalog from the command line
#[derive(Parser)]
#[command(name = "reel-filter")]
#[command(about = "Filter movies and categories by title, year, rating and awards", long_about = None)]
struct Cli {
    /// Path to a JSON file holding an array of records
    #[arg(short, long)]
    data: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter a list of movies
    Movies {
        /// Substring the title must contain (case-sensitive)
        #[arg(long)]
        title: Option<String>,

        /// Earliest release year (inclusive)
        #[arg(long, requires = "year_to")]
        year_from: Option<i32>,

        /// Latest release year (inclusive)
        #[arg(long, requires = "year_from")]
        year_to: Option<i32>,

        /// Lowest rating (inclusive)
        #[arg(long, requires = "rating_to")]
        rating_from: Option<f64>,

        /// Highest rating (inclusive)
        #[arg(long, requires = "rating_from")]
        rating_to: Option<f64>,

        /// Award the movie must have won (repeatable, all required)
        #[arg(long = "award")]
        awards: Vec<String>,

        /// Extra filters as JSON, merged after the flags
        #[arg(long)]
        filters: Option<String>,
    },

    /// Filter a list of categories
    Categories {
        /// Substring the name must contain (case-sensitive)
        #[arg(long)]
        name: Option<String>,

        /// Title of a movie the category must list (repeatable, all required)
        #[arg(long = "movie")]
        movies: Vec<String>,

        /// Extra filters as JSON, merged after the flags
        #[arg(long)]
        filters: Option<String>,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let start = Instant::now();
    let document = read_document(&cli.data)?;
    tracing::info!("Read {} in {:?}", cli.data.display(), start.elapsed());

    match cli.command {
        Commands::Movies {
            title,
            year_from,
            year_to,
            rating_from,
            rating_to,
            awards,
            filters,
        } => {
            let flags = movie_filters_from_flags(year_from, year_to, rating_from, rating_to, awards);
            handle_movies(&document, title, flags, filters.as_deref())?
        }
        Commands::Categories {
            name,
            movies,
            filters,
        } => handle_categories(&document, name, movies, filters.as_deref())?,
    }

    Ok(())
}

fn read_document(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file {}", path.display()))
}

/// Build the partial movie filter set described by the flags
fn movie_filters_from_flags(
    year_from: Option<i32>,
    year_to: Option<i32>,
    rating_from: Option<f64>,
    rating_to: Option<f64>,
    awards: Vec<String>,
) -> MovieFilters {
    let mut filters = MovieFilters::default();
    if let (Some(from), Some(to)) = (year_from, year_to) {
        filters = filters.with_year(RangeFilter::new(from, to));
    }
    if let (Some(from), Some(to)) = (rating_from, rating_to) {
        filters = filters.with_rating(RangeFilter::new(from, to));
    }
    if !awards.is_empty() {
        filters = filters.with_awards(awards);
    }
    filters
}

/// Handle the 'movies' command
fn handle_movies(
    document: &str,
    title: Option<String>,
    flags: MovieFilters,
    extra: Option<&str>,
) -> Result<()> {
    let movies = catalog::parse_movies(document).context("Failed to parse movie catalog")?;
    let mut list = MovieList::new(movies);

    if let Some(title) = title {
        list.apply_search_value(MatchFilter::new(title));
    }
    list.apply_filters_value(flags);
    if let Some(json) = extra {
        let extra: MovieFilters =
            serde_json::from_str(json).context("Failed to parse --filters as movie filters")?;
        list.apply_filters_value(extra);
    }

    print_movies(&list.get_filtered(), list.len());
    Ok(())
}

/// Handle the 'categories' command
fn handle_categories(
    document: &str,
    name: Option<String>,
    movies: Vec<String>,
    extra: Option<&str>,
) -> Result<()> {
    let categories =
        catalog::parse_categories(document).context("Failed to parse category catalog")?;
    let mut list = CategoryList::new(categories);

    if let Some(name) = name {
        list.apply_search_value(MatchFilter::new(name));
    }
    if !movies.is_empty() {
        list.apply_filters_value(CategoryFilters::default().with_titles(movies));
    }
    if let Some(json) = extra {
        let extra: CategoryFilters =
            serde_json::from_str(json).context("Failed to parse --filters as category filters")?;
        list.apply_filters_value(extra);
    }

    print_categories(&list.get_filtered(), list.len());
    Ok(())
}

fn print_movies(movies: &[&Movie], total: usize) {
    println!(
        "{}",
        format!("Movies ({} of {}):", movies.len(), total).bold().blue()
    );
    for (rank, movie) in movies.iter().enumerate() {
        let awards = if movie.awards.is_empty() {
            String::new()
        } else {
            format!(" [{}]", movie.awards.join(", "))
        };
        println!(
            "{}. {} ({}) - Rating: {:.1}{}",
            (rank + 1).to_string().green(),
            movie.title,
            movie.year,
            movie.rating,
            awards
        );
    }
}

fn print_categories(categories: &[&Category], total: usize) {
    println!(
        "{}",
        format!("Categories ({} of {}):", categories.len(), total)
            .bold()
            .blue()
    );
    for category in categories {
        println!("{}{}", "• ".green(), category.name);
        for movie in &category.movies {
            println!("    - {} ({})", movie.title, movie.year);
        }
    }
}
