use std::sync::Arc;

use crate::{
    catalog::Catalog, configuration::Config, error::Error, session::Session,
    storage::FileStorage,
};

pub struct AppState {
    pub config: Config,
    pub catalog: Catalog,
    pub session: Session,
}

impl AppState {
    #[tracing::instrument(name = "init app state", skip_all)]
    pub fn init(config: Config) -> Result<Self, Error> {
        let catalog = Catalog::load(config.application.trending_size)?;
        let storage = Arc::new(FileStorage::new(&config.storage.data_dir)?);
        let session = Session::restore(storage)?;

        Ok(AppState {
            config,
            catalog,
            session,
        })
    }
}
