use anyhow::{bail, Context, Result};
use dotenvy::dotenv;
use showboard::catalog;
use showboard::config::Config;
use showboard::render::{self, IndicatorStyle, Page};
use showboard::telemetry::{self, CLI_DIRECTIVES};
use std::env;
use std::io::{self, Write};
use tracing::{debug, info};

struct Args {
    style: IndicatorStyle,
    heading: String,
}

/// Flags override `SHOWBOARD_STYLE` / `SHOWBOARD_HEADING` from the environment.
fn parse_args(defaults: &Config) -> Result<Args> {
    let mut parsed = Args {
        style: defaults.style,
        heading: defaults.heading.clone(),
    };
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--style" => {
                let value = args.next().context("--style needs a value (dot or star)")?;
                parsed.style = value.parse()?;
            }
            "--heading" => {
                parsed.heading = args.next().context("--heading needs a value")?;
            }
            other => bail!("Unknown argument '{}'", other),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let dotenv_result = dotenv();
    telemetry::init_tracing(CLI_DIRECTIVES);
    match dotenv_result {
        Ok(path) => debug!("Loaded environment from {:?}", path),
        Err(e) => debug!("No .env file loaded ({}) - relying on environment", e),
    }

    let defaults = Config::from_env()?;
    let args = parse_args(&defaults)?;
    let shows = catalog::shows().context("Built-in show list is invalid")?;
    info!("Rendering {} shows with style '{}'", shows.len(), args.style);

    let html = render::render_page(
        Page {
            heading: &args.heading,
            shows: &shows,
        },
        args.style,
    )
    .context("Failed to render page")?;
    io::stdout()
        .lock()
        .write_all(html.as_bytes())
        .context("Failed to write page to stdout")?;
    Ok(())
}
