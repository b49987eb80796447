use clap::Parser;

use crate::service::DEFAULT_BACKEND;

#[derive(Parser, Debug)]
#[command(name = "quizzao", version, about = "Terminal client for generated quizzes")]
pub struct Cli {
    /// Base URL of the quiz generation backend
    #[arg(long, value_name = "url", default_value = DEFAULT_BACKEND)]
    pub backend: String,

    /// Prefill the topic field
    #[arg(long, value_name = "topic")]
    pub topic: Option<String>,

    /// Start in the dark color palette
    #[arg(long)]
    pub dark: bool,
}
