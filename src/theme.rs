use crate::{error::Error, model::PreferencesUpdate, session::Session};

pub const THEME_STORAGE_KEY: &str = "moviedb_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Session {
    // an authenticated user's preference wins over the stored record
    #[tracing::instrument(name = "resolve theme", skip_all)]
    pub fn theme(&self) -> Result<Theme, Error> {
        if let Some(user) = self.current_user() {
            return Ok(if user.preferences.dark_mode {
                Theme::Dark
            } else {
                Theme::Light
            });
        }

        let theme = match self.storage().load(THEME_STORAGE_KEY)?.as_deref() {
            Some("dark") => Theme::Dark,
            Some(_) => Theme::Light,
            None => Theme::Dark,
        };

        Ok(theme)
    }

    #[tracing::instrument(name = "set theme", skip_all, fields(theme = theme.as_str()))]
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), Error> {
        self.storage().save(THEME_STORAGE_KEY, theme.as_str())?;

        self.update_preferences(PreferencesUpdate {
            dark_mode: Some(theme == Theme::Dark),
            ..PreferencesUpdate::default()
        })
    }

    pub fn toggle_theme(&mut self) -> Result<Theme, Error> {
        let next = match self.theme()? {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        };
        self.set_theme(next)?;

        Ok(next)
    }
}
