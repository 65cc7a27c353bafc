mod config;

use clap::Parser;
use config::{Config, OutputFormat};
use pareto_sampler::{ParetoSampler, RandSource, UniformSource};
use serde::ser::SerializeSeq;
use serde::{Serialize, Serializer};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG: &str = "pareto.toml";

/// Pareto sample generator — inverse-transform sampling over a seeded PRNG.
#[derive(Parser, Debug)]
#[command(name = "pareto-gen")]
struct Args {
    /// TOML config file
    #[arg(long, default_value = DEFAULT_CONFIG)]
    config: PathBuf,

    /// Scale (minimum value), overrides the config
    #[arg(long)]
    scale: Option<f64>,

    /// Shape (tail index), overrides the config
    #[arg(long)]
    shape: Option<f64>,

    /// Generator seed, overrides the config
    #[arg(long)]
    seed: Option<u64>,

    /// Number of samples to draw
    #[arg(long)]
    count: Option<usize>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,
}

/// Effective settings after applying CLI overrides on top of the config.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    scale: f64,
    shape: f64,
    seed: Option<u64>,
    count: usize,
    format: OutputFormat,
}

impl Settings {
    fn resolve(config: &Config, args: &Args) -> Self {
        Self {
            scale: args.scale.unwrap_or(config.pareto.scale),
            shape: args.shape.unwrap_or(config.pareto.shape),
            seed: args.seed.or(config.generator.seed),
            count: args.count.unwrap_or(config.output.count),
            format: args.format.unwrap_or(config.output.format),
        }
    }
}

#[derive(Serialize)]
struct Report<'a> {
    scale: f64,
    shape: f64,
    generator: String,
    #[serde(serialize_with = "serialize_samples")]
    samples: &'a [f64],
}

/// JSON has no literal for non-finite numbers, so those are written as the
/// strings `"inf"`, `"-inf"` and `"NaN"`, the same text plain output uses.
struct JsonSample(f64);

impl Serialize for JsonSample {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.0.is_finite() {
            serializer.serialize_f64(self.0)
        } else {
            serializer.collect_str(&self.0)
        }
    }
}

fn serialize_samples<S: Serializer>(samples: &&[f64], serializer: S) -> Result<S::Ok, S::Error> {
    let mut seq = serializer.serialize_seq(Some(samples.len()))?;
    for &value in samples.iter() {
        seq.serialize_element(&JsonSample(value))?;
    }
    seq.end()
}

/// Running min/max/mean over everything written.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Summary {
    count: usize,
    min: f64,
    max: f64,
    sum: f64,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            count: 0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            sum: 0.0,
        }
    }
}

impl Summary {
    fn record(&mut self, value: f64) {
        self.count += 1;
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
    }

    fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    fn log(&self) {
        if self.count == 0 {
            tracing::info!(count = 0, "no samples drawn");
            return;
        }
        tracing::info!(
            count = self.count,
            min = format!("{:.4}", self.min),
            max = format!("{:.4}", self.max),
            mean = format!("{:.4}", self.mean()),
            "summary"
        );
    }
}

fn load_config(args: &Args) -> Config {
    let path = args.config.as_path();
    if !path.exists() && path == Path::new(DEFAULT_CONFIG) {
        tracing::info!("no {DEFAULT_CONFIG} found, using defaults");
        return Config::default();
    }
    match Config::load(path) {
        Ok(c) => {
            tracing::info!(path = %path.display(), "loaded config");
            c
        }
        Err(e) => {
            tracing::error!(path = %path.display(), error = %e, "failed to load config, using defaults");
            Config::default()
        }
    }
}

fn draw<R: UniformSource>(sampler: &mut ParetoSampler<R>, count: usize) -> Vec<f64> {
    let mut samples = vec![0.0; count];
    sampler.fill(&mut samples);
    samples
}

/// Draw `count` samples and write them to `out`.
///
/// Plain output is streamed one value at a time. JSON is a single document,
/// so its samples are collected first.
fn emit<R: UniformSource>(
    out: &mut impl Write,
    format: OutputFormat,
    sampler: &mut ParetoSampler<R>,
    count: usize,
) -> io::Result<Summary> {
    let mut summary = Summary::default();
    match format {
        OutputFormat::Plain => {
            for _ in 0..count {
                let value = sampler.sample();
                writeln!(out, "{value}")?;
                summary.record(value);
            }
        }
        OutputFormat::Json => {
            let samples = draw(sampler, count);
            for &value in &samples {
                summary.record(value);
            }
            let report = Report {
                scale: sampler.scale(),
                shape: sampler.shape(),
                generator: sampler.source().describe(),
                samples: &samples,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
        }
    }
    out.flush()?;
    Ok(summary)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args);
    let settings = Settings::resolve(&config, &args);

    let source = match settings.seed {
        Some(seed) => RandSource::seed_from_u64(seed),
        None => RandSource::from_entropy(),
    };

    let mut sampler = match ParetoSampler::new(source, settings.scale, settings.shape) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!(error = %e, "invalid distribution parameters");
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(
        scale = settings.scale,
        shape = settings.shape,
        count = settings.count,
        sampler = %sampler,
        "pareto-gen starting"
    );

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match emit(&mut out, settings.format, &mut sampler, settings.count) {
        Ok(summary) => {
            summary.log();
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to write samples");
            ExitCode::FAILURE
        }
    }
}
