use clap::Parser;

use quizzao::cli::Cli;
use quizzao::model::QuizConfig;
use quizzao::service::QuizService;
use quizzao::state::{AppState, Theme};
use quizzao::tui;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let service = QuizService::new(&cli.backend)
        .map_err(|e| format!("Cannot create HTTP client: {}", e))?;

    let mut config = QuizConfig::default();
    if let Some(topic) = cli.topic {
        config.topic = topic;
    }

    let theme = if cli.dark { Theme::Dark } else { Theme::Light };
    let state = AppState::new(config, theme);

    tui::run_tui(state, service)
}
