pub mod actors;
pub mod movies;

use serde_aux::field_attributes::deserialize_option_number_from_string;
use validator::Validate;

#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Validate)]
pub struct PageQuery {
    #[serde(default, deserialize_with = "deserialize_option_number_from_string")]
    #[validate(range(min = 1))]
    pub page: Option<i64>,
}
