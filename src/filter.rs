use std::borrow::Cow;

use chrono::{Datelike, Utc};
use validator::{ValidationError, ValidationErrors};

use crate::{error::Error, model::Movie};

pub const YEAR_RANGE_FLOOR: i32 = 1970;
pub const RATING_RANGE: (f32, f32) = (0.0, 10.0);

#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    genre_ids: Vec<i64>,
    years: (i32, i32),
    ratings: (f32, f32),
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            genre_ids: Vec::new(),
            years: (YEAR_RANGE_FLOOR, Utc::now().year()),
            ratings: RATING_RANGE,
        }
    }
}

impl FilterState {
    pub fn genre_ids(&self) -> &[i64] {
        &self.genre_ids
    }

    pub fn years(&self) -> (i32, i32) {
        self.years
    }

    pub fn ratings(&self) -> (f32, f32) {
        self.ratings
    }

    pub fn toggle_genre(&mut self, genre_id: i64) {
        if let Some(position) = self.genre_ids.iter().position(|id| *id == genre_id) {
            self.genre_ids.remove(position);
        } else {
            self.genre_ids.push(genre_id);
        }
    }

    pub fn clear_genres(&mut self) {
        self.genre_ids.clear();
    }

    pub fn set_genres(&mut self, genre_ids: Vec<i64>) {
        self.genre_ids.clear();
        for genre_id in genre_ids {
            if !self.genre_ids.contains(&genre_id) {
                self.genre_ids.push(genre_id);
            }
        }
    }

    pub fn set_year_range(&mut self, from: i32, to: i32) -> Result<(), Error> {
        validate_ordered(from, to, "years")?;
        self.years = (from, to);

        Ok(())
    }

    pub fn set_rating_range(&mut self, from: f32, to: f32) -> Result<(), Error> {
        validate_ordered(from, to, "ratings")?;
        self.ratings = (from, to);

        Ok(())
    }

    pub fn update(&mut self, update: FilterUpdate) -> Result<(), Error> {
        if let Some(genre_ids) = update.genre_ids {
            self.set_genres(genre_ids);
        }
        if let Some((from, to)) = update.years {
            self.set_year_range(from, to)?;
        }
        if let Some((from, to)) = update.ratings {
            self.set_rating_range(from, to)?;
        }

        Ok(())
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        // an empty genre selection matches everything; otherwise any overlap counts
        let genre_match = self.genre_ids.is_empty()
            || movie
                .genre_ids
                .iter()
                .any(|genre_id| self.genre_ids.contains(genre_id));

        let year = movie.release_year();
        let year_match = year >= self.years.0 && year <= self.years.1;

        let rating_match =
            movie.vote_average >= self.ratings.0 && movie.vote_average <= self.ratings.1;

        genre_match && year_match && rating_match
    }

    pub fn apply(&self, movies: &[Movie]) -> Vec<Movie> {
        movies
            .iter()
            .filter(|movie| self.matches(movie))
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterUpdate {
    pub genre_ids: Option<Vec<i64>>,
    pub years: Option<(i32, i32)>,
    pub ratings: Option<(f32, f32)>,
}

fn validate_ordered<T: PartialOrd>(from: T, to: T, field: &'static str) -> Result<(), Error> {
    if from > to {
        let mut errors = ValidationErrors::new();
        errors.add(
            field,
            ValidationError::new("range_order")
                .with_message(Cow::from("Range start must not exceed range end")),
        );

        return Err(Error::Validation(errors));
    }

    Ok(())
}

#[derive(Debug, Default)]
pub struct BrowseState {
    pub filter: FilterState,
    search_query: String,
    search_results: Vec<Movie>,
}

impl BrowseState {
    pub fn search_query(&self) -> Option<&str> {
        if self.search_query.is_empty() {
            None
        } else {
            Some(&self.search_query)
        }
    }

    pub fn set_search_results(&mut self, query: &str, results: Vec<Movie>) {
        self.search_query = query.to_string();
        self.search_results = results;
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
        self.search_results.clear();
    }

    // while a search is active it replaces the catalog as the filter source
    pub fn visible(&self, movies: &[Movie]) -> Vec<Movie> {
        let source: &[Movie] = if self.search_query.is_empty() {
            movies
        } else {
            &self.search_results
        };

        self.filter.apply(source)
    }
}
