use std::collections::HashMap;

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub backdrop_path: Option<String>,
    pub overview: String,
    pub release_date: String,
    pub vote_average: f32,
    pub vote_count: i64,
    pub genre_ids: Vec<i64>,
    pub popularity: f32,
}

impl Movie {
    // missing or malformed release dates count as year 0
    pub fn release_year(&self) -> i32 {
        self.release_date
            .split('-')
            .next()
            .and_then(|part| part.parse().ok())
            .unwrap_or(0)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        if self.id != other.id {
            return false;
        }

        if self.title != other.title {
            return false;
        }

        if self.poster_path != other.poster_path {
            return false;
        }

        if self.backdrop_path != other.backdrop_path {
            return false;
        }

        if self.overview != other.overview {
            return false;
        }

        if self.release_date != other.release_date {
            return false;
        }

        if self.vote_average != other.vote_average {
            return false;
        }

        if self.vote_count != other.vote_count {
            return false;
        }

        if self.genre_ids != other.genre_ids {
            return false;
        }

        if self.popularity != other.popularity {
            return false;
        }

        true
    }
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
pub struct Actor {
    pub id: i64,
    pub name: String,
    pub profile_path: Option<String>,
    pub known_for_department: String,
    pub popularity: f32,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct MovieDetails {
    #[serde(flatten)]
    pub movie: Movie,
    pub genres: Vec<Genre>,
    pub runtime: i64,
    pub tagline: String,
    pub status: String,
    pub budget: i64,
    pub revenue: i64,
    pub credits: Credits,
    pub videos: VideoList,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Credits {
    pub cast: Vec<CastMember>,
    pub crew: Vec<CrewMember>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct CastMember {
    #[serde(flatten)]
    pub actor: Actor,
    pub character: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct CrewMember {
    pub id: i64,
    pub name: String,
    pub job: String,
    pub department: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct VideoList {
    pub results: Vec<Video>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct Video {
    pub id: String,
    pub key: String,
    pub name: String,
    pub site: String,
    #[serde(rename = "type")]
    pub video_type: String,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ActorDetails {
    #[serde(flatten)]
    pub actor: Actor,
    pub biography: String,
    pub birthday: String,
    pub place_of_birth: String,
    pub movie_credits: ActorCredits,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ActorCredits {
    pub cast: Vec<ActorCredit>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone)]
pub struct ActorCredit {
    pub id: i64,
    pub title: String,
    pub poster_path: Option<String>,
    pub character: String,
    pub release_date: String,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub movie_id: i64,
    pub rating: f32,
    pub text: String,
    pub date: String,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Eq, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    Grid,
    List,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub genres: Vec<i64>,
    pub dark_mode: bool,
    pub view_mode: ViewMode,
}

impl Default for Preferences {
    fn default() -> Self {
        Preferences {
            genres: Vec::new(),
            dark_mode: true,
            view_mode: ViewMode::Grid,
        }
    }
}

impl Preferences {
    pub fn merge(&mut self, update: PreferencesUpdate) {
        if let Some(genres) = update.genres {
            self.genres = genres;
        }
        if let Some(dark_mode) = update.dark_mode {
            self.dark_mode = dark_mode;
        }
        if let Some(view_mode) = update.view_mode {
            self.view_mode = view_mode;
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct PreferencesUpdate {
    pub genres: Option<Vec<i64>>,
    pub dark_mode: Option<bool>,
    pub view_mode: Option<ViewMode>,
}

#[derive(serde::Serialize, serde::Deserialize, PartialEq, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    pub profile_picture: Option<String>,
    pub watchlist: Vec<i64>,
    pub favorites: Vec<i64>,
    pub favorite_actors: Vec<i64>,
    pub ratings: HashMap<i64, f32>,
    pub reviews: Vec<Review>,
    pub preferences: Preferences,
}

impl User {
    pub fn merge_profile(&mut self, update: ProfileUpdate) {
        if let Some(username) = update.username {
            self.username = username;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(profile_picture) = update.profile_picture {
            self.profile_picture = Some(profile_picture);
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub username: Option<String>,
    pub email: Option<String>,
    pub profile_picture: Option<String>,
}

#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct Paginated<T> {
    pub results: Vec<T>,
    pub page: i64,
    pub total_pages: i64,
    pub total_results: i64,
}
