use moviedb::{filter::BrowseState, filter::FilterState, filter::FilterUpdate, model::Movie};

use crate::{TestState, fake::create_fake_movie};

fn ids(movies: &[Movie]) -> Vec<i64> {
    movies.iter().map(|movie| movie.id).collect()
}

#[test]
fn should_return_all_movies_when_genre_filter_is_empty() {
    let state = TestState::new();
    let filter = FilterState::default();

    let filtered = filter.apply(state.catalog.movies());

    assert_eq!(ids(&filtered), ids(state.catalog.movies()));
}

#[test]
fn should_match_when_genre_ids_intersect_the_active_set() {
    let state = TestState::new();
    let mut filter = FilterState::default();
    filter.toggle_genre(28);

    let filtered = filter.apply(state.catalog.movies());

    assert!(!filtered.is_empty());
    for movie in &filtered {
        assert!(movie.genre_ids.contains(&28));
    }
    for movie in state.catalog.movies() {
        if movie.genre_ids.contains(&28) {
            assert!(filtered.iter().any(|candidate| candidate.id == movie.id));
        }
    }
}

#[test]
fn should_combine_selected_genres_as_any_match() {
    let state = TestState::new();
    let mut filter = FilterState::default();
    filter.toggle_genre(35);
    filter.toggle_genre(14);

    let filtered = filter.apply(state.catalog.movies());

    // Parasite (35) and Return of the King (14) both pass
    assert_eq!(ids(&filtered), vec![9, 10]);
}

#[test]
fn should_include_movie_when_year_is_inside_the_range() {
    let mut filter = FilterState::default();
    filter.set_year_range(1970, 2025).unwrap();

    let inside = create_fake_movie(1, "1994-09-23", 8.7, vec![18]);
    let undated = create_fake_movie(2, "", 8.7, vec![18]);

    let filtered = filter.apply(&[inside, undated]);

    // a missing date parses as year 0 and falls below the range floor
    assert_eq!(ids(&filtered), vec![1]);
}

#[test]
fn should_compare_rating_bounds_inclusively() {
    let movie = create_fake_movie(1, "1994-09-23", 8.7, vec![18]);

    let mut filter = FilterState::default();
    filter.set_rating_range(0.0, 10.0).unwrap();
    assert_eq!(filter.apply(std::slice::from_ref(&movie)).len(), 1);

    filter.set_rating_range(0.0, 8.7).unwrap();
    assert_eq!(filter.apply(std::slice::from_ref(&movie)).len(), 1);

    filter.set_rating_range(9.0, 10.0).unwrap();
    assert!(filter.apply(std::slice::from_ref(&movie)).is_empty());
}

#[test]
fn should_require_all_predicates_to_pass() {
    let mut filter = FilterState::default();
    filter.toggle_genre(18);
    filter.set_year_range(2000, 2010).unwrap();

    // genre matches but the year is outside the range
    let movie = create_fake_movie(1, "1994-09-23", 8.7, vec![18]);

    assert!(filter.apply(&[movie]).is_empty());
}

#[test]
fn should_preserve_source_order_when_filtering() {
    let state = TestState::new();
    let mut filter = FilterState::default();
    filter.toggle_genre(80);

    let filtered = filter.apply(state.catalog.movies());

    let mut sorted = ids(&filtered);
    sorted.sort_unstable();
    assert_eq!(ids(&filtered), sorted);
}

#[test]
fn should_apply_only_given_fields_when_updating_partially() {
    let mut filter = FilterState::default();
    filter.toggle_genre(28);

    filter
        .update(FilterUpdate {
            ratings: Some((5.0, 9.0)),
            ..FilterUpdate::default()
        })
        .unwrap();

    assert_eq!(filter.genre_ids(), &[28]);
    assert_eq!(filter.ratings(), (5.0, 9.0));
}

#[test]
fn should_filter_search_results_when_query_is_active() {
    let state = TestState::new();
    let mut browse = BrowseState::default();

    let results = state.catalog.search_movies("the");
    browse.set_search_results("the", results.clone());
    browse.filter.toggle_genre(80);

    let visible = browse.visible(state.catalog.movies());

    assert!(!visible.is_empty());
    for movie in &visible {
        assert!(results.iter().any(|candidate| candidate.id == movie.id));
        assert!(movie.genre_ids.contains(&80));
    }
}

#[test]
fn should_fall_back_to_catalog_when_search_is_cleared() {
    let state = TestState::new();
    let mut browse = BrowseState::default();

    browse.set_search_results("matrix", state.catalog.search_movies("matrix"));
    assert_eq!(browse.visible(state.catalog.movies()).len(), 1);

    browse.clear_search();

    assert!(browse.search_query().is_none());
    assert_eq!(
        browse.visible(state.catalog.movies()).len(),
        state.catalog.movies().len()
    );
}
