//! argmerge demo: a tiny greeter configured through the full merge pipeline
//!
//! Sources are merged in ascending precedence — seeded defaults, then an
//! optional config file, then the environment, then the command line — and
//! the `name` parameter is mandatory. Run as:
//!
//! ```text
//! argmerge name=world greeting=hi repeat=2 shout
//! ```

use anyhow::{Context, Result};
use argmerge::{
    from_cmd_tokens, from_env, from_file, param, param_set, ConfigError, ParamSet, ParamSpec, Slot,
    SlotVisitor,
};
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_CONFIG: &str = "greet.conf";

param!(Config: String, "config", "Path to a KEY=VALUE settings file");
param!(Greeting: String, "greeting", "Greeting template");
param!(Name: String, "name", "Who to greet (mandatory)");
param!(Repeat: i64, "repeat", "How many times to greet");
param!(Shout: bool, "shout", "Uppercase the output");
param!(Verbose: bool, "verbose", "Enable verbose logging");

param_set! {
    struct GreetParams {
        config: Config,
        greeting: Greeting,
        name: Name,
        repeat: Repeat,
        shout: Shout,
        verbose: Verbose,
    }
}

struct PrintSlots;

impl SlotVisitor for PrintSlots {
    fn visit<P: ParamSpec>(&mut self, slot: &Slot<P>) {
        match slot.get() {
            Some(value) => println!("  {} = {}", P::NAME, value),
            None => println!("  {} = <unset>", P::NAME),
        }
    }
}

fn main() -> Result<()> {
    let cmd: GreetParams = from_cmd_tokens(std::env::args().skip(1))?;

    // RUST_LOG always takes precedence; `verbose` falls back to DEBUG.
    let filter = if cmd.get::<Verbose>().copied().unwrap_or(false) {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut params = GreetParams::default();
    params.set::<Greeting>("hello".to_string());
    params.set::<Repeat>(1);

    // A config file named on the command line must exist; the default path
    // is optional and silently skipped when absent.
    let (config_path, explicit) = match cmd.get::<Config>() {
        Some(path) => (path.clone(), true),
        None => (DEFAULT_CONFIG.to_string(), false),
    };
    match from_file::<GreetParams, _>(&config_path) {
        Ok(file) => params.merge(&file),
        Err(err @ ConfigError::SourceUnavailable { .. }) if !explicit => {
            tracing::debug!("no config file at {config_path}: {err}");
        }
        Err(err) => return Err(err).context("loading config file"),
    }

    params.merge(&from_env::<GreetParams>()?);
    params.merge(&cmd);
    params.check_mandatory::<(Name,)>()?;

    println!("parameters:");
    params.for_each(&mut PrintSlots);

    let greeting = params.require::<Greeting>()?.clone();
    let name = params.require::<Name>()?.clone();
    let mut line = format!("{greeting}, {name}!");
    if params.get::<Shout>().copied().unwrap_or(false) {
        line = line.to_uppercase();
    }
    let repeat = *params.require::<Repeat>()?;
    for _ in 0..repeat.max(1) {
        println!("{line}");
    }

    Ok(())
}
