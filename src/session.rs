use std::{collections::HashMap, sync::Arc};

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::{
    auth::{LoginRequest, SignupRequest, error::AuthError},
    error::Error,
    filter::RATING_RANGE,
    model::{Preferences, PreferencesUpdate, ProfileUpdate, Review, User},
    storage::{Storage, error::StorageError},
};

pub const USER_STORAGE_KEY: &str = "moviedb_user";
pub const USERS_STORAGE_KEY: &str = "moviedb_users";

const SEED_USERS_JSON: &str = include_str!("../data/users.json");

pub struct Session {
    storage: Arc<dyn Storage>,
    users: Vec<User>,
    current: Option<User>,
}

impl Session {
    #[tracing::instrument(name = "restore session", skip_all)]
    pub fn restore(storage: Arc<dyn Storage>) -> Result<Self, Error> {
        let users: Vec<User> = match storage.load(USERS_STORAGE_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(StorageError::Malformed)?,
            None => {
                // first run: seed the demo account
                let seeded: Vec<User> =
                    serde_json::from_str(SEED_USERS_JSON).map_err(StorageError::Malformed)?;
                let raw = serde_json::to_string(&seeded).map_err(StorageError::Malformed)?;
                storage.save(USERS_STORAGE_KEY, &raw)?;
                seeded
            }
        };

        let current = match storage.load(USER_STORAGE_KEY)? {
            Some(raw) => Some(serde_json::from_str(&raw).map_err(StorageError::Malformed)?),
            None => None,
        };

        Ok(Session {
            storage,
            users,
            current,
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current.as_ref()
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub(crate) fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    #[tracing::instrument(name = "login", skip_all, fields(email = %request.email))]
    pub fn login(&mut self, request: LoginRequest) -> Result<(), Error> {
        request.validate().map_err(Error::Validation)?;

        // stored accounts keep no credential, so only the email is matched
        let user = self
            .users
            .iter()
            .find(|user| user.email == request.email)
            .cloned()
            .ok_or(Error::Auth(AuthError::UserNotFound))?;

        self.current = Some(user);
        self.persist_current()
    }

    #[tracing::instrument(name = "signup", skip_all, fields(email = %request.email))]
    pub fn signup(&mut self, request: SignupRequest) -> Result<(), Error> {
        request.validate().map_err(Error::Validation)?;

        if self.users.iter().any(|user| user.email == request.email) {
            return Err(Error::Auth(AuthError::EmailTaken));
        }

        let user = User {
            id: Uuid::new_v4().to_string(),
            profile_picture: Some(format!(
                "https://ui-avatars.com/api/?name={}&background=random",
                urlencoding::encode(&request.username)
            )),
            username: request.username,
            email: request.email,
            watchlist: Vec::new(),
            favorites: Vec::new(),
            favorite_actors: Vec::new(),
            ratings: HashMap::new(),
            reviews: Vec::new(),
            preferences: Preferences::default(),
        };

        self.users.push(user.clone());
        self.current = Some(user);
        self.persist_current()
    }

    #[tracing::instrument(name = "logout", skip_all)]
    pub fn logout(&mut self) -> Result<(), Error> {
        self.current = None;
        self.storage.clear(USER_STORAGE_KEY)?;

        Ok(())
    }

    #[tracing::instrument(name = "add to watchlist", skip(self))]
    pub fn add_to_watchlist(&mut self, movie_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| {
            if !user.watchlist.contains(&movie_id) {
                user.watchlist.push(movie_id);
            }
        })
    }

    #[tracing::instrument(name = "remove from watchlist", skip(self))]
    pub fn remove_from_watchlist(&mut self, movie_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| user.watchlist.retain(|id| *id != movie_id))
    }

    #[tracing::instrument(name = "add to favorites", skip(self))]
    pub fn add_to_favorites(&mut self, movie_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| {
            if !user.favorites.contains(&movie_id) {
                user.favorites.push(movie_id);
            }
        })
    }

    #[tracing::instrument(name = "remove from favorites", skip(self))]
    pub fn remove_from_favorites(&mut self, movie_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| user.favorites.retain(|id| *id != movie_id))
    }

    #[tracing::instrument(name = "add to favorite actors", skip(self))]
    pub fn add_to_favorite_actors(&mut self, actor_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| {
            if !user.favorite_actors.contains(&actor_id) {
                user.favorite_actors.push(actor_id);
            }
        })
    }

    #[tracing::instrument(name = "remove from favorite actors", skip(self))]
    pub fn remove_from_favorite_actors(&mut self, actor_id: i64) -> Result<(), Error> {
        self.mutate_current(|user| user.favorite_actors.retain(|id| *id != actor_id))
    }

    #[tracing::instrument(name = "rate movie", skip(self))]
    pub fn rate_movie(&mut self, movie_id: i64, rating: f32) -> Result<(), Error> {
        let rating = clamp_rating(rating);
        self.mutate_current(|user| {
            user.ratings.insert(movie_id, rating);
        })
    }

    #[tracing::instrument(name = "add review", skip(self, text))]
    pub fn add_review(&mut self, movie_id: i64, rating: f32, text: &str) -> Result<(), Error> {
        let rating = clamp_rating(rating);
        let review = Review {
            id: format!("rev-{}", Uuid::new_v4()),
            movie_id,
            rating,
            text: text.to_string(),
            date: today(),
        };

        // reviews and the flat ratings map are kept in sync on every write
        self.mutate_current(|user| {
            user.reviews.push(review);
            user.ratings.insert(movie_id, rating);
        })
    }

    #[tracing::instrument(name = "update review", skip(self, text))]
    pub fn update_review(&mut self, review_id: &str, rating: f32, text: &str) -> Result<(), Error> {
        let rating = clamp_rating(rating);
        self.mutate_current(|user| {
            let Some(review) = user.reviews.iter_mut().find(|review| review.id == review_id)
            else {
                // unknown review ids are ignored
                return;
            };

            review.rating = rating;
            review.text = text.to_string();
            review.date = today();
            let movie_id = review.movie_id;

            user.ratings.insert(movie_id, rating);
        })
    }

    #[tracing::instrument(name = "delete review", skip(self))]
    pub fn delete_review(&mut self, review_id: &str) -> Result<(), Error> {
        // the flat rating for the reviewed movie stays behind
        self.mutate_current(|user| user.reviews.retain(|review| review.id != review_id))
    }

    #[tracing::instrument(name = "update preferences", skip_all)]
    pub fn update_preferences(&mut self, update: PreferencesUpdate) -> Result<(), Error> {
        self.mutate_current(|user| user.preferences.merge(update))
    }

    #[tracing::instrument(name = "update profile", skip_all)]
    pub fn update_profile(&mut self, update: ProfileUpdate) -> Result<(), Error> {
        self.mutate_current(|user| user.merge_profile(update))
    }

    fn mutate_current(&mut self, apply: impl FnOnce(&mut User)) -> Result<(), Error> {
        let Some(user) = self.current.as_mut() else {
            // anonymous sessions skip the mutation entirely
            return Ok(());
        };

        apply(user);
        self.persist_current()
    }

    // every change is written through to the session record and mirrored
    // into the persisted user table
    fn persist_current(&mut self) -> Result<(), Error> {
        let Some(user) = &self.current else {
            return Ok(());
        };

        let raw = serde_json::to_string(user).map_err(StorageError::Malformed)?;
        self.storage.save(USER_STORAGE_KEY, &raw)?;

        if let Some(stored) = self
            .users
            .iter_mut()
            .find(|candidate| candidate.id == user.id)
        {
            *stored = user.clone();
        }

        let table = serde_json::to_string(&self.users).map_err(StorageError::Malformed)?;
        self.storage.save(USERS_STORAGE_KEY, &table)?;

        Ok(())
    }
}

fn clamp_rating(rating: f32) -> f32 {
    rating.clamp(RATING_RANGE.0, RATING_RANGE.1)
}

fn today() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}
