//! seedstream - print reproducible random values and generator snapshots

mod args;

use std::io::{self, BufWriter, Write};

use anyhow::{Context, Error};
use seedstream_core_rs::{
    AnyGenerator, AnySerializer, Generator, GeneratorConfig, GeneratorSnapshot,
};

use crate::args::{command_parser, Command, GenerateParams, Output, SnapshotParams, Source};

fn main() -> Result<(), Error> {
    env_logger::init();

    let command = command_parser().run();

    let command_result = match &command {
        Command::Version => {
            println!("seedstream v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Command::Generate(params) => run_generate(params),
        Command::Snapshot(params) => run_snapshot(params),
    };

    if let Err(e) = command_result {
        eprintln!("Error: {}", e);
        for cause in e.chain().skip(1) {
            eprintln!("Caused by: {}", cause);
        }
        std::process::exit(1);
    }
    Ok(())
}

fn build_generator(params: &GenerateParams) -> Result<AnyGenerator, Error> {
    let generator = match &params.source {
        Source::Seed(seed) => GeneratorConfig::new(params.kind, Some(*seed))
            .build()
            .with_context(|| format!("Cannot seed {} with {}", params.kind, seed))?,
        Source::State(state) => AnySerializer::new(params.kind)
            .read_from_base64_string(state)
            .with_context(|| format!("Cannot restore {} from '{}'", params.kind, state))?,
        Source::Default => GeneratorConfig::new(params.kind, None).build()?,
    };
    log::debug!("built {} generator from {:?}", params.kind, params.source);
    Ok(generator)
}

fn run_generate(params: &GenerateParams) -> Result<(), Error> {
    let mut generator = build_generator(params)?;
    let mut out = BufWriter::new(io::stdout().lock());

    for _ in 0..params.count {
        match params.output {
            Output::Raw => writeln!(out, "{}", generator.generate())?,
            Output::Double => writeln!(out, "{}", generator.generate_double())?,
            Output::Range(bounds) => {
                let value = generator
                    .generate_in_range(bounds.lower, bounds.upper)
                    .context("Invalid --range")?;
                writeln!(out, "{}", value)?
            }
        }
    }

    if params.save {
        let state = AnySerializer::for_generator(&generator).write_to_base64_string(&generator)?;
        writeln!(out, "{}", state)?;
    }

    out.flush()?;
    log::info!("printed {} values from {}", params.count, params.kind);
    Ok(())
}

fn run_snapshot(params: &SnapshotParams) -> Result<(), Error> {
    let generator = GeneratorConfig::new(params.kind, params.seed)
        .build()
        .with_context(|| format!("Cannot build {} generator", params.kind))?;
    let snapshot = GeneratorSnapshot::capture(&generator)?;
    println!("{}", render_snapshot(&snapshot, params.pretty)?);
    Ok(())
}

fn render_snapshot(snapshot: &GeneratorSnapshot, pretty: bool) -> Result<String, Error> {
    if pretty {
        Ok(serde_json::to_string_pretty(snapshot)?)
    } else {
        Ok(snapshot.to_json()?)
    }
}
