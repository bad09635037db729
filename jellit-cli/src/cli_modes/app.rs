use anyhow::{Context, Result};
use jellit_core::{
    Config, Error, RestAuth, RestClient, RestEntryStore, Session, SessionController,
};

use crate::Cli;

/// Everything a subcommand needs to reach the hosted backend.
pub struct App {
    pub config: Config,
    pub controller: SessionController<RestEntryStore>,
    pub auth: RestAuth,
}

impl App {
    /// Builds the clients from config, with command line and environment taking
    /// precedence. Nothing is sent yet.
    pub fn connect(cli: &Cli, config: Config) -> Result<Self> {
        let store_url = cli
            .store_url
            .clone()
            .or_else(|| config.store_url.clone())
            .context("no backend configured: set `store_url` in config.toml or JELLIT_STORE_URL")?;
        let anon_key = cli
            .anon_key
            .clone()
            .or_else(|| config.anon_key.clone())
            .context("no backend key configured: set `anon_key` in config.toml or JELLIT_ANON_KEY")?;

        let client = RestClient::new(store_url, anon_key)?;
        let controller =
            SessionController::new(RestEntryStore::new(client.clone()), config.week_start);
        Ok(Self {
            config,
            controller,
            auth: RestAuth::new(client),
        })
    }

    pub fn saved_session(&self) -> Option<Session> {
        Session::load_from(&self.config.session_file)
    }

    /// Restores the saved session and loads its entries. Fails when nobody is signed in.
    pub fn signed_in(&mut self) -> Result<()> {
        let session = self.saved_session().ok_or(Error::AuthenticationRequired)?;
        self.controller.on_owner_changed(Some(session))?;
        Ok(())
    }

    pub fn save_session(&self) -> Result<()> {
        if let Some(session) = self.controller.session() {
            session.save_to(&self.config.session_file)?;
            tracing::debug!(path = %self.config.session_file.display(), "session saved");
        }
        Ok(())
    }

    pub fn forget_session(&self) -> Result<()> {
        Session::clear_at(&self.config.session_file)
    }
}
