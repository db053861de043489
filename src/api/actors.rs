use rand::Rng;
use validator::Validate;

use crate::{
    catalog::Catalog,
    error::Error,
    model::{Actor, ActorCredit, ActorCredits, ActorDetails, Paginated},
};

use super::PageQuery;

#[tracing::instrument(name = "search actors", skip_all, fields(query))]
pub async fn search(
    catalog: &Catalog,
    query: &str,
    page_query: PageQuery,
) -> Result<Paginated<Actor>, Error> {
    page_query.validate().map_err(Error::Validation)?;

    let results = catalog.search_actors(query);

    Ok(Paginated {
        page: page_query.page.unwrap_or(1),
        total_pages: 1,
        total_results: results.len() as i64,
        results,
    })
}

#[tracing::instrument(name = "actor details", skip_all, fields(actor_id))]
pub async fn details(catalog: &Catalog, actor_id: i64) -> Result<ActorDetails, Error> {
    let actor = catalog.actor_by_id(actor_id).ok_or(Error::NotFound)?.clone();

    let mut rng = rand::rng();
    let movies = catalog.movies();
    let credit_count = rng.random_range(3..=8).min(movies.len());

    let cast = rand::seq::index::sample(&mut rng, movies.len(), credit_count)
        .into_iter()
        .map(|index| {
            let movie = &movies[index];
            ActorCredit {
                id: movie.id,
                title: movie.title.clone(),
                poster_path: movie.poster_path.clone(),
                character: format!("Character in {}", movie.title),
                release_date: movie.release_date.clone(),
            }
        })
        .collect();

    Ok(ActorDetails {
        biography: format!(
            "This is a mock biography for {}. In a real application, this would contain the actor's actual biography pulled from an API.",
            actor.name
        ),
        actor,
        birthday: "1980-01-01".to_string(),
        place_of_birth: "Hollywood, CA".to_string(),
        movie_credits: ActorCredits { cast },
    })
}
