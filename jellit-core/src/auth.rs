//! Email/password authentication against the hosted auth service.

use std::fmt;

use reqwest::Method;
use reqwest::blocking::RequestBuilder;
use serde::{Deserialize, Serialize};

use crate::error::{Error, RemoteError};
use crate::rest::RestClient;
use crate::session::{Session, SessionUser};

#[derive(Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into().trim().to_string(),
            password: password.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(Error::InvalidCredentials);
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// Who can sign a user in, create an account, or end a session.
pub trait AuthProvider {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, RemoteError>;
    fn sign_up(&self, credentials: &Credentials) -> Result<Session, RemoteError>;
    fn sign_out(&self, session: &Session) -> Result<(), RemoteError>;
}

/// The hosted auth service (`/auth/v1`).
#[derive(Debug, Clone)]
pub struct RestAuth {
    client: RestClient,
}

/// Sign-up answers with a bare user while the email still needs confirming.
#[derive(Deserialize)]
#[serde(untagged)]
enum SignUpResponse {
    Session(Session),
    Pending(SessionUser),
}

impl RestAuth {
    pub fn new(client: RestClient) -> Self {
        Self { client }
    }

    fn sign_in_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.client
            .request(Method::POST, "auth/v1/token", None)
            .query(&[("grant_type", "password")])
            .json(credentials)
    }

    fn sign_up_request(&self, credentials: &Credentials) -> RequestBuilder {
        self.client
            .request(Method::POST, "auth/v1/signup", None)
            .json(credentials)
    }

    fn sign_out_request(&self, session: &Session) -> RequestBuilder {
        self.client
            .request(Method::POST, "auth/v1/logout", Some(session))
    }
}

impl AuthProvider for RestAuth {
    fn sign_in(&self, credentials: &Credentials) -> Result<Session, RemoteError> {
        let body = self.client.send(self.sign_in_request(credentials))?;
        Ok(serde_json::from_str(&body)?)
    }

    fn sign_up(&self, credentials: &Credentials) -> Result<Session, RemoteError> {
        let body = self.client.send(self.sign_up_request(credentials))?;
        match serde_json::from_str(&body)? {
            SignUpResponse::Session(session) => Ok(session),
            SignUpResponse::Pending(user) => Err(RemoteError::ConfirmationPending {
                email: user.email.unwrap_or_else(|| credentials.email.clone()),
            }),
        }
    }

    fn sign_out(&self, session: &Session) -> Result<(), RemoteError> {
        self.client.send(self.sign_out_request(session))?;
        Ok(())
    }
}
