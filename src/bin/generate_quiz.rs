use std::io::Write;
use std::{
    env,
    fs::{self, OpenOptions},
};

use anyhow::Context;
use dotenv::dotenv;
use serde::Serialize;
use smartque::{
    config::RequesterConfig,
    quiz::{Language, Level, QuizQuestion, QuizRequester},
    selection::SelectionState,
};

const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";
const DEFAULT_OUTPUT_DIR: &str = "output/quiz";

pub struct Config {
    pub selection: SelectionState,
    pub language: Language,
    pub output_dir: String,
}

fn parse_config(mut args: impl Iterator<Item = String>) -> anyhow::Result<Config> {
    let mut selection = SelectionState::new();
    selection.set_topic(args.next().context("topic is required, e.g. 'react'")?);
    selection.set_level(
        args.next()
            .context("level is required: beginner, intermediate or advanced")?,
    );

    let language = Language::from_code(&args.next().unwrap_or_default());
    let output_dir = args.next().unwrap_or(DEFAULT_OUTPUT_DIR.to_string());

    Ok(Config {
        selection,
        language,
        output_dir,
    })
}

#[derive(Serialize, Debug)]
struct QuizFile<'a> {
    topic: &'a str,
    level: Level,
    language: Language,
    questions: &'a [QuizQuestion],
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();
    pretty_env_logger::init();

    let config = match parse_config(env::args().skip(1)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Usage: cargo run --bin generate_quiz <topic> <level> [language] [output_dir]");
            return Err(e);
        }
    };

    let selections = config.selection.selections();
    let topic = selections.topic.as_deref().unwrap_or_default();
    let level: Level = selections
        .level
        .as_deref()
        .unwrap_or_default()
        .parse()
        .context("invalid level")?;

    let requester_config = RequesterConfig::from_env()
        .context("set OPENAI_API_KEY in the environment or in a .env file")?;
    let requester = QuizRequester::new(requester_config);

    let questions = requester
        .generate(topic, level, config.language)
        .context(format!("could not generate {} questions about {}", level, topic))?;

    create_output_dir(&config.output_dir).context("failed to create output directory")?;

    let mut slugger = github_slugger::Slugger::default();
    let path = format!(
        "{}/{}-{}.yaml",
        config.output_dir,
        slugger.slug(topic),
        level
    );
    let quiz = QuizFile {
        topic,
        level,
        language: config.language,
        questions: &questions,
    };
    write_quiz(&quiz, &path).context(format!("failed to write quiz to {}", path))?;

    println!(
        "created {BOLD}{}{RESET} questions in {BOLD}{}{RESET}",
        questions.len(),
        &path
    );

    Ok(())
}

fn write_quiz(quiz: &QuizFile, path: &str) -> anyhow::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .context("failed to open quiz file")?;

    let content = serde_yaml_ng::to_string(quiz).context("failed to serialize quiz")?;
    write!(file, "{}", content).context("failed to write quiz")?;

    Ok(())
}

// shared by every topic and level, existing files stay
fn create_output_dir(output_dir: &str) -> anyhow::Result<()> {
    fs::create_dir_all(output_dir)?;
    Ok(())
}
