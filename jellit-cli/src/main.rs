mod cli;
mod cli_modes;
mod logging;
mod render;

use anyhow::Result;
use cli::{Cli, Command};
use cli_modes::App;
use jellit_core::Config;
use render::{RenderOptions, Renderer};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("jellit: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::new();
    logging::init(cli.verbose);

    let config = Config::load()?;
    let renderer = Renderer::new(Some(RenderOptions {
        date_format: config.date_format.clone(),
        time_format: config.time_format.clone(),
        use_color: cli.color.use_color(),
    }));
    let command = cli.command.as_ref().unwrap_or(&Command::Dashboard);
    let mut app = match command {
        // Offline: only the saved session is read.
        Command::Whoami => return cli_modes::whoami(&config, &renderer),
        _ => App::connect(&cli, config)?,
    };

    match command {
        Command::Dashboard => cli_modes::dashboard(&mut app, &renderer),
        Command::Log(args) => cli_modes::log_entry(&mut app, &renderer, args),
        Command::History { limit } => cli_modes::history(&mut app, &renderer, *limit),
        Command::Edit(args) => cli_modes::edit_entry(&mut app, &renderer, args),
        Command::Delete { id, yes } => cli_modes::delete_entry(&mut app, &renderer, id, *yes),
        Command::Insights { period } => cli_modes::insights(&mut app, &renderer, *period),
        Command::SignIn(args) => cli_modes::sign_in(&mut app, &renderer, args),
        Command::SignUp(args) => cli_modes::sign_up(&mut app, &renderer, args),
        Command::SignOut => cli_modes::sign_out(&mut app, &renderer),
        Command::Whoami => cli_modes::whoami(&app.config, &renderer),
    }
}
