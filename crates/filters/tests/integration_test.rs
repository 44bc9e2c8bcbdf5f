//! Integration tests for movie and category filtering.
//!
//! These tests drive the public collection API the way a caller would:
//! load records once, apply filters, read back the filtered view.

use catalog::{parse_categories, parse_movies, Category, Movie};
use filters::*;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}

fn create_movies() -> Vec<Movie> {
    vec![
        Movie::new("Arrival", 2016, 7.9).with_awards(["Oscar"]),
        Movie::new("Dune", 2021, 8.0),
        Movie::new("Blade Runner 2049", 2017, 8.0).with_awards(["Oscar", "BAFTA"]),
        Movie::new("Dune: Part Two", 2024, 8.5),
        Movie::new("Moon", 2009, 7.8).with_awards(["BAFTA"]),
    ]
}

fn titles<'a>(movies: &[&'a Movie]) -> Vec<&'a str> {
    movies.iter().map(|m| m.title.as_str()).collect()
}

/// True if `sub` appears in `all` in the same relative order
fn is_subsequence(sub: &[&Movie], all: &[Movie]) -> bool {
    let mut rest = all.iter();
    sub.iter()
        .all(|wanted| rest.by_ref().any(|movie| std::ptr::eq(movie, *wanted)))
}

#[test]
fn test_identity_without_filters() {
    init_tracing();
    let movies = create_movies();
    let list = MovieList::new(movies.clone());

    let filtered: Vec<Movie> = list.get_filtered().into_iter().cloned().collect();

    assert_eq!(filtered, movies);
}

#[test]
fn test_order_preserved() {
    init_tracing();
    let mut list = MovieList::new(create_movies());
    list.apply_filters_value(MovieFilters::default().with_rating(RangeFilter::new(7.9, 8.2)));

    let filtered = list.get_filtered();

    assert_eq!(titles(&filtered), vec!["Arrival", "Dune", "Blade Runner 2049"]);
    assert!(is_subsequence(&filtered, list.records()));
}

#[test]
fn test_conjunction_is_intersection() {
    let year = MovieFilters::default().with_year(RangeFilter::new(2015, 2022));
    let awards = MovieFilters::default().with_awards(["Oscar"]);

    let mut by_year = MovieList::new(create_movies());
    by_year.apply_filters_value(year.clone());
    let mut by_awards = MovieList::new(create_movies());
    by_awards.apply_filters_value(awards.clone());
    let mut both = MovieList::new(create_movies());
    both.apply_filters_value(year);
    both.apply_filters_value(awards);

    let year_titles = titles(&by_year.get_filtered());
    let award_titles = titles(&by_awards.get_filtered());
    let expected: Vec<&str> = year_titles
        .iter()
        .copied()
        .filter(|t| award_titles.contains(t))
        .collect();

    assert_eq!(titles(&both.get_filtered()), expected);
    assert_eq!(expected, vec!["Arrival", "Blade Runner 2049"]);
}

#[test]
fn test_range_single_value() {
    let mut list = MovieList::new(create_movies());
    list.apply_filters_value(MovieFilters::default().with_year(RangeFilter::exactly(2021)));

    assert_eq!(titles(&list.get_filtered()), vec!["Dune"]);
}

#[test]
fn test_inverted_range_is_empty() {
    let mut list = MovieList::new(create_movies());
    list.apply_filters_value(MovieFilters::default().with_rating(RangeFilter::new(10.0, 0.0)));

    assert!(list.get_filtered().is_empty());
}

#[test]
fn test_empty_required_values_matches_all() {
    let mut list = MovieList::new(create_movies());
    list.apply_filters_value(MovieFilters {
        awards: Some(ValueSearchFilter::default()),
        ..Default::default()
    });

    assert_eq!(list.get_filtered().len(), 5);
}

#[test]
fn test_merge_keeps_earlier_fields() {
    let mut list = MovieList::new(create_movies());

    list.apply_filters_value(MovieFilters::default().with_rating(RangeFilter::new(8.0, 10.0)));
    list.apply_filters_value(MovieFilters::default().with_year(RangeFilter::new(2020, 2022)));

    assert_eq!(list.filters().active_fields(), vec!["year", "rating"]);
    assert_eq!(titles(&list.get_filtered()), vec!["Dune"]);
}

#[test]
fn test_merge_overwrites_same_field() {
    let mut list = MovieList::new(create_movies());

    list.apply_filters_value(MovieFilters::default().with_year(RangeFilter::new(2000, 2010)));
    list.apply_filters_value(MovieFilters::default().with_year(RangeFilter::new(2020, 2030)));

    // Last write wins, ranges are not combined
    assert_eq!(titles(&list.get_filtered()), vec!["Dune", "Dune: Part Two"]);
}

#[test]
fn test_search_value_and_filters_together() {
    let mut list = MovieList::new(create_movies());

    list.apply_filters_value(MovieFilters::default().with_awards(["BAFTA"]));
    list.apply_search_value(MatchFilter::new("n"));

    // "Blade Runner 2049" and "Moon" have BAFTA; both contain "n"
    assert_eq!(titles(&list.get_filtered()), vec!["Blade Runner 2049", "Moon"]);

    // Primary update leaves the awards filter in place
    list.apply_search_value(MatchFilter::new("Moon"));
    assert_eq!(titles(&list.get_filtered()), vec!["Moon"]);
}

#[test]
fn test_substring_match() {
    let mut list = MovieList::new(vec![
        Movie::new("Dune", 2021, 8.0),
        Movie::new("Arrival", 2016, 7.9),
    ]);

    list.apply_search_value(MatchFilter::new("un"));

    assert_eq!(titles(&list.get_filtered()), vec!["Dune"]);
}

#[test]
fn test_movies_from_json_document() {
    init_tracing();
    let movies = parse_movies(
        r#"[
            {"title": "Arrival", "year": 2016, "rating": 7.9, "awards": ["Oscar"]},
            {"title": "Dune", "year": 2021, "rating": 8.0, "awards": []}
        ]"#,
    )
    .unwrap();
    let mut list = MovieList::new(movies);

    let update: MovieFilters =
        serde_json::from_str(r#"{"year": {"filter": 2018, "filterTo": 2025}}"#).unwrap();
    list.apply_filters_value(update);

    let filtered = list.get_filtered_movies();
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0], &Movie::new("Dune", 2021, 8.0));
}

fn create_categories() -> Vec<Category> {
    vec![
        Category::new("Sci-Fi", vec![Movie::new("Dune", 2021, 8.0)]),
        Category::new("Drama", vec![]),
        Category::new(
            "Sci-Fi Classics",
            vec![Movie::new("Alien", 1979, 8.5), Movie::new("Dune", 1984, 6.3)],
        ),
    ]
}

fn names<'a>(categories: &[&'a Category]) -> Vec<&'a str> {
    categories.iter().map(|c| c.name.as_str()).collect()
}

#[test]
fn test_categories_by_representative_movie() {
    let mut list = CategoryList::new(vec![
        Category::new("Sci-Fi", vec![Movie::new("Dune", 2021, 8.0)]),
        Category::new("Drama", vec![]),
    ]);

    list.apply_filters_value(
        CategoryFilters::default().with_movies(vec![Movie::new("Dune", 2021, 8.0)]),
    );

    assert_eq!(names(&list.get_filtered_categories()), vec!["Sci-Fi"]);
}

#[test]
fn test_categories_match_titles_only() {
    let mut list = CategoryList::new(create_categories());

    // Stored 1984 Dune differs in year and rating but shares the title
    list.apply_filters_value(CategoryFilters::default().with_titles(["Dune"]));

    assert_eq!(names(&list.get_filtered()), vec!["Sci-Fi", "Sci-Fi Classics"]);
}

#[test]
fn test_categories_name_and_movies_conjunctive() {
    let mut list = CategoryList::new(create_categories());

    list.apply_search_value(MatchFilter::new("Sci-Fi"));
    list.apply_filters_value(CategoryFilters::default().with_titles(["Alien"]));

    assert_eq!(names(&list.get_filtered()), vec!["Sci-Fi Classics"]);
}

#[test]
fn test_categories_from_json_document() {
    let categories = parse_categories(
        r#"[
            {"name": "Sci-Fi", "movies": [{"title": "Dune", "year": 2021, "rating": 8.0}]},
            {"name": "Drama", "movies": []}
        ]"#,
    )
    .unwrap();
    let mut list = CategoryList::new(categories);

    let update: CategoryFilters = serde_json::from_str(
        r#"{"movies": {"values": [{"title": "Dune", "year": 0, "rating": 0.0}]}}"#,
    )
    .unwrap();
    list.apply_filters_value(update);

    assert_eq!(names(&list.get_filtered()), vec!["Sci-Fi"]);
}
