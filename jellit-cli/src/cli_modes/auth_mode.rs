use super::{App, prompt};
use crate::{cli::CredentialArgs, render::Renderer};
use anyhow::Result;
use jellit_core::{Config, Credentials, Error, RemoteError, Session};

pub fn sign_in(app: &mut App, renderer: &Renderer, args: &CredentialArgs) -> Result<()> {
    let credentials = credentials(args)?;
    app.controller.sign_in(&app.auth, &credentials)?;
    app.save_session()?;
    renderer.print_info(&format!(
        "Signed in as {}. {} entries.",
        credentials.email,
        app.controller.entries().len()
    ));
    Ok(())
}

pub fn sign_up(app: &mut App, renderer: &Renderer, args: &CredentialArgs) -> Result<()> {
    let credentials = credentials(args)?;
    let outcome = app
        .controller
        .sign_up(&app.auth, &credentials)
        .map(|_| ());
    match outcome {
        Ok(()) => {
            app.save_session()?;
            renderer.print_info(&format!("Welcome to Jellit, {}.", credentials.email));
            Ok(())
        }
        Err(Error::RemoteOperationFailed {
            source: RemoteError::ConfirmationPending { email },
            ..
        }) => {
            renderer.print_info(&format!(
                "Account created. Confirm it from the email sent to {email}, then run `jellit sign-in`."
            ));
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Forgets the saved session even when the auth service can't be told.
pub fn sign_out(app: &mut App, renderer: &Renderer) -> Result<()> {
    let Some(session) = app.saved_session() else {
        renderer.print_info("Not signed in.");
        return Ok(());
    };
    app.controller.resume(session);
    let remote = app.controller.sign_out(&app.auth);
    app.forget_session()?;
    remote?;
    renderer.print_info("Signed out.");
    Ok(())
}

/// Reads the saved session only; works without a configured backend.
pub fn whoami(config: &Config, renderer: &Renderer) -> Result<()> {
    match Session::load_from(&config.session_file) {
        Some(session) => {
            let who = session.user.email.as_deref().unwrap_or("anonymous user");
            renderer.print_info(&format!("{who} ({})", session.owner_id()));
        }
        None => renderer.print_info("Not signed in."),
    }
    Ok(())
}

fn credentials(args: &CredentialArgs) -> Result<Credentials> {
    let password = match &args.password {
        Some(password) => password.clone(),
        None => prompt::ask("Password: ")?,
    };
    let credentials = Credentials::new(args.email.as_str(), password);
    credentials.validate()?;
    Ok(credentials)
}
