use rand::Rng;
use validator::Validate;

use crate::{
    catalog::Catalog,
    error::Error,
    model::{CastMember, Credits, CrewMember, Genre, Movie, MovieDetails, Paginated, Video, VideoList},
};

use super::PageQuery;

// the embedded dataset presents itself as five identical pages
const TOTAL_PAGES: i64 = 5;

const CREW_JOBS: [&str; 4] = ["Director", "Producer", "Writer", "Cinematographer"];

#[tracing::instrument(name = "list movies", skip_all)]
pub async fn list(catalog: &Catalog, query: PageQuery) -> Result<Paginated<Movie>, Error> {
    query.validate().map_err(Error::Validation)?;

    let results = catalog.movies().to_vec();
    let total_results = results.len() as i64 * TOTAL_PAGES;

    Ok(Paginated {
        page: query.page.unwrap_or(1),
        total_pages: TOTAL_PAGES,
        total_results,
        results,
    })
}

#[tracing::instrument(name = "search movies", skip_all, fields(query))]
pub async fn search(
    catalog: &Catalog,
    query: &str,
    page_query: PageQuery,
) -> Result<Paginated<Movie>, Error> {
    page_query.validate().map_err(Error::Validation)?;

    let results = catalog.search_movies(query);

    Ok(Paginated {
        page: page_query.page.unwrap_or(1),
        total_pages: 1,
        total_results: results.len() as i64,
        results,
    })
}

#[tracing::instrument(name = "list genres", skip_all)]
pub async fn genres(catalog: &Catalog) -> Vec<Genre> {
    catalog.genres().to_vec()
}

#[tracing::instrument(name = "movie details", skip_all, fields(movie_id))]
pub async fn details(catalog: &Catalog, movie_id: i64) -> Result<MovieDetails, Error> {
    let movie = catalog.movie_by_id(movie_id).ok_or(Error::NotFound)?.clone();

    let genres = movie
        .genre_ids
        .iter()
        .map(|genre_id| {
            catalog.genre_by_id(*genre_id).cloned().unwrap_or_else(|| Genre {
                id: *genre_id,
                name: "Unknown".to_string(),
            })
        })
        .collect();

    let mut rng = rand::rng();

    let cast: Vec<CastMember> = catalog
        .actors()
        .iter()
        .take(10)
        .map(|actor| CastMember {
            actor: actor.clone(),
            character: format!("Character {}", rng.random_range(0..100)),
        })
        .collect();

    let crew: Vec<CrewMember> = catalog
        .actors()
        .iter()
        .skip(10)
        .take(5)
        .map(|actor| CrewMember {
            id: actor.id,
            name: actor.name.clone(),
            job: CREW_JOBS[rng.random_range(0..CREW_JOBS.len())].to_string(),
            department: "Production".to_string(),
        })
        .collect();

    Ok(MovieDetails {
        movie,
        genres,
        runtime: rng.random_range(90..150),
        tagline: "A mock tagline for this movie".to_string(),
        status: "Released".to_string(),
        budget: rng.random_range(0..15_000) * 100_000,
        revenue: rng.random_range(0..50_000) * 100_000,
        credits: Credits { cast, crew },
        videos: VideoList {
            results: vec![
                Video {
                    id: "mock1".to_string(),
                    key: "dQw4w9WgXcQ".to_string(),
                    name: "Official Trailer".to_string(),
                    site: "YouTube".to_string(),
                    video_type: "Trailer".to_string(),
                },
                Video {
                    id: "mock2".to_string(),
                    key: "dQw4w9WgXcQ".to_string(),
                    name: "Teaser".to_string(),
                    site: "YouTube".to_string(),
                    video_type: "Teaser".to_string(),
                },
            ],
        },
    })
}
