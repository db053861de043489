use crate::{
    error::Error,
    model::{Actor, Genre, Movie},
    storage::error::StorageError,
};

const MOVIES_JSON: &str = include_str!("../data/movies.json");
const GENRES_JSON: &str = include_str!("../data/genres.json");
const ACTORS_JSON: &str = include_str!("../data/actors.json");

pub struct Catalog {
    movies: Vec<Movie>,
    genres: Vec<Genre>,
    actors: Vec<Actor>,
    trending: Vec<Movie>,
}

impl Catalog {
    #[tracing::instrument(name = "load catalog", skip_all, fields(trending_size))]
    pub fn load(trending_size: usize) -> Result<Self, Error> {
        let movies: Vec<Movie> = serde_json::from_str(MOVIES_JSON).map_err(StorageError::Malformed)?;
        let genres: Vec<Genre> = serde_json::from_str(GENRES_JSON).map_err(StorageError::Malformed)?;
        let actors: Vec<Actor> = serde_json::from_str(ACTORS_JSON).map_err(StorageError::Malformed)?;

        // the source list never changes at runtime, so trending is fixed at load
        let trending = top_by_popularity(&movies, trending_size);

        Ok(Catalog {
            movies,
            genres,
            actors,
            trending,
        })
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn genres(&self) -> &[Genre] {
        &self.genres
    }

    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub fn trending(&self) -> &[Movie] {
        &self.trending
    }

    pub fn movie_by_id(&self, id: i64) -> Option<&Movie> {
        self.movies.iter().find(|movie| movie.id == id)
    }

    pub fn genre_by_id(&self, id: i64) -> Option<&Genre> {
        self.genres.iter().find(|genre| genre.id == id)
    }

    pub fn actor_by_id(&self, id: i64) -> Option<&Actor> {
        self.actors.iter().find(|actor| actor.id == id)
    }

    pub fn movies_by_ids(&self, ids: &[i64]) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|movie| ids.contains(&movie.id))
            .cloned()
            .collect()
    }

    #[tracing::instrument(name = "search movies", skip(self))]
    pub fn search_movies(&self, query: &str) -> Vec<Movie> {
        let needle = query.to_lowercase();
        self.movies
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    #[tracing::instrument(name = "search actors", skip(self))]
    pub fn search_actors(&self, query: &str) -> Vec<Actor> {
        let needle = query.to_lowercase();
        self.actors
            .iter()
            .filter(|actor| actor.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

fn top_by_popularity(movies: &[Movie], size: usize) -> Vec<Movie> {
    let mut ranked = movies.to_vec();
    ranked.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    ranked.truncate(size);

    ranked
}
