//! Session-scoped owner of the entry cache.

use chrono::{DateTime, TimeZone, Weekday};

use crate::auth::{AuthProvider, Credentials};
use crate::cache::EntryCache;
use crate::entry::Entry;
use crate::error::{Error, Operation};
use crate::insights::{Overview, Summary, summarize};
use crate::period::{Period, filter_period};
use crate::session::Session;
use crate::store::EntryStore;

/// Ties the signed-in identity to its entries.
///
/// Whenever the owner changes (sign in, sign up, sign out, a restored session) the
/// cache is thrown away and rebuilt for the new owner, or left empty when there is
/// none.
#[derive(Debug)]
pub struct SessionController<S> {
    cache: EntryCache<S>,
    week_start: Weekday,
}

impl<S: EntryStore> SessionController<S> {
    pub fn new(store: S, week_start: Weekday) -> Self {
        Self {
            cache: EntryCache::new(store),
            week_start,
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.cache.owner()
    }

    pub fn cache(&self) -> &EntryCache<S> {
        &self.cache
    }

    /// Mutable access for the write path (`create`, `update`, `delete`, `refresh`).
    pub fn cache_mut(&mut self) -> &mut EntryCache<S> {
        &mut self.cache
    }

    pub fn entries(&self) -> &[Entry] {
        self.cache.entries()
    }

    /// Installs `session` as the current identity. A different owner (or none) reloads
    /// the cache; the same owner with fresh tokens keeps it. A failed reload leaves the
    /// cache empty.
    pub fn on_owner_changed(&mut self, session: Option<Session>) -> Result<(), Error> {
        let previous = self.cache.owner().map(|s| s.owner_id().to_string());
        let next = session.as_ref().map(|s| s.owner_id().to_string());
        let owner_changed = previous != next;
        self.cache.set_owner(session);
        if !owner_changed && next.is_some() {
            return Ok(());
        }
        tracing::debug!(?previous, ?next, "owner changed");
        self.cache.clear();
        self.cache.load()
    }

    /// Installs a restored session without fetching its entries; the cache is left
    /// empty. For calls like sign-out that only need the identity.
    pub fn resume(&mut self, session: Session) {
        tracing::debug!(owner = session.owner_id(), "session resumed");
        self.cache.set_owner(Some(session));
        self.cache.clear();
    }

    pub fn sign_in<A: AuthProvider>(
        &mut self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<&Session, Error> {
        credentials.validate()?;
        let session = auth
            .sign_in(credentials)
            .map_err(Error::remote(Operation::SignIn))?;
        self.install(session)
    }

    pub fn sign_up<A: AuthProvider>(
        &mut self,
        auth: &A,
        credentials: &Credentials,
    ) -> Result<&Session, Error> {
        credentials.validate()?;
        let session = auth
            .sign_up(credentials)
            .map_err(Error::remote(Operation::SignUp))?;
        self.install(session)
    }

    /// Ends the session. The local identity is dropped even when the auth service
    /// can't be reached; that failure is still reported.
    pub fn sign_out<A: AuthProvider>(&mut self, auth: &A) -> Result<(), Error> {
        let remote = match self.cache.owner() {
            Some(session) => auth
                .sign_out(session)
                .map_err(Error::remote(Operation::SignOut)),
            None => Ok(()),
        };
        self.on_owner_changed(None)?;
        remote
    }

    /// Statistics over the current `period`, `None` when it holds no entries.
    pub fn summary<Tz: TimeZone>(&self, period: Period, now: &DateTime<Tz>) -> Option<Summary> {
        let window = filter_period(self.cache.entries(), period, self.week_start, now);
        summarize(&window)
    }

    /// This week's count and averages, zero when nothing was logged.
    pub fn overview<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Overview {
        let window = filter_period(self.cache.entries(), Period::Week, self.week_start, now);
        Overview::compute(window.iter().copied())
    }

    fn install(&mut self, session: Session) -> Result<&Session, Error> {
        self.on_owner_changed(Some(session))?;
        self.cache.owner().ok_or(Error::AuthenticationRequired)
    }
}
