use std::str::FromStr;

use bpaf::*;
use seedstream_core_rs::GeneratorKind;

/// Inclusive `LOWER,UPPER` bounds for `--range`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub lower: i64,
    pub upper: i64,
}

impl FromStr for Bounds {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let (lower, upper) = input
            .split_once(',')
            .ok_or_else(|| format!("Invalid range '{}'; expected LOWER,UPPER", input))?;
        let parse = |text: &str| {
            text.trim()
                .parse::<i64>()
                .map_err(|e| format!("Invalid bound '{}': {}", text, e))
        };
        Ok(Bounds {
            lower: parse(lower)?,
            upper: parse(upper)?,
        })
    }
}

/// Where the generator's starting state comes from
#[derive(Debug, Clone)]
pub enum Source {
    Seed(u64),
    State(String),
    Default,
}

/// What each drawn value is turned into before printing
#[derive(Debug, Clone, Copy)]
pub enum Output {
    Raw,
    Range(Bounds),
    Double,
}

#[derive(Debug, Clone)]
pub struct GenerateParams {
    pub kind: GeneratorKind,
    pub source: Source,
    pub count: usize,
    pub output: Output,
    pub save: bool,
}

#[derive(Debug, Clone)]
pub struct SnapshotParams {
    pub kind: GeneratorKind,
    pub seed: Option<u64>,
    pub pretty: bool,
}

#[derive(Debug, Clone)]
pub enum Command {
    Version,
    Generate(GenerateParams),
    Snapshot(SnapshotParams),
}

fn kind_parser() -> impl Parser<GeneratorKind> {
    long("kind")
        .short('k')
        .argument::<GeneratorKind>("KIND")
        .help("Generator: lcg, splitmix64, xoshiro, splittable or chacha20")
}

fn seed_parser() -> impl Parser<u64> {
    long("seed")
        .short('s')
        .argument::<u64>("SEED")
        .help("Seed for deterministic output")
}

fn source_parser() -> impl Parser<Source> {
    let seed = seed_parser().map(Source::Seed);
    let state = long("state")
        .argument::<String>("BASE64")
        .help("Resume from a state printed by --save")
        .map(Source::State);
    let default = pure(Source::Default);

    construct!([seed, state, default])
}

fn output_parser() -> impl Parser<Output> {
    let range = long("range")
        .short('r')
        .argument::<Bounds>("LOWER,UPPER")
        .help("Print integers in the inclusive range instead of raw values")
        .map(Output::Range);
    let double = long("double")
        .short('d')
        .help("Print doubles in [0, 1) instead of raw values")
        .req_flag(Output::Double);
    let raw = pure(Output::Raw);

    construct!([range, double, raw])
}

fn generate_parser() -> impl Parser<GenerateParams> {
    let kind = kind_parser();
    let source = source_parser();
    let count = long("count")
        .short('n')
        .argument::<usize>("COUNT")
        .help("Number of values to print")
        .fallback(1);
    let output = output_parser();
    let save = long("save")
        .help("Print the final generator state as base64 on the last line")
        .switch();

    construct!(GenerateParams {
        kind,
        source,
        count,
        output,
        save
    })
}

fn snapshot_parser() -> impl Parser<SnapshotParams> {
    let kind = kind_parser();
    let seed = seed_parser().optional();
    let pretty = long("pretty")
        .help("Indent the JSON document")
        .switch();

    construct!(SnapshotParams { kind, seed, pretty })
}

pub(crate) fn command_parser() -> OptionParser<Command> {
    let version = pure(Command::Version)
        .to_options()
        .command("version")
        .help("Display version information and exit");

    let generate = construct!(Command::Generate(generate_parser()))
        .to_options()
        .command("generate")
        .help("Print values from a generator");

    let snapshot = construct!(Command::Snapshot(snapshot_parser()))
        .to_options()
        .command("snapshot")
        .help("Print a JSON snapshot of a freshly built generator");

    construct!([version, generate, snapshot]).to_options()
}
