use std::io::BufRead;

use clap::Parser;
use engine::{Engine, reply};

use crate::{
    error::Result,
    render::Renderer,
    settings::{Args, Settings},
};

mod error;
mod render;
mod settings;

fn main() -> Result<()> {
    let args = Args::parse();
    let settings = Settings::load(&args)?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "despesa={level},engine={level}",
            level = settings.level
        ))
        .with_writer(std::io::stderr)
        .init();

    if args.start_text {
        println!("{}", reply::START_TEXT);
        return Ok(());
    }
    if args.help_text {
        println!("{}", reply::HELP_TEXT);
        return Ok(());
    }

    let engine = Engine::builder().timezone(settings.tz()?).build();
    tracing::debug!("using timezone {}", settings.timezone);

    let messages = if args.messages.is_empty() {
        read_stdin()?
    } else {
        args.messages
    };

    let mut renderer = Renderer::new(settings.format, &settings.submitter, std::io::stdout().lock())?;
    for message in &messages {
        renderer.render(&engine.extract(message))?;
    }
    renderer.finish()?;

    tracing::info!("processed {} message(s)", messages.len());
    Ok(())
}

fn read_stdin() -> Result<Vec<String>> {
    let mut messages = Vec::new();
    for line in std::io::stdin().lock().lines() {
        let line = line?;
        if !line.trim().is_empty() {
            messages.push(line);
        }
    }
    Ok(messages)
}
