use anyhow::Result;
use cadence::{run, RunConfig};
use clap::Parser;
use log::info;
use std::path::PathBuf;

/// Train a tabular Q-learning agent on a corridor environment
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Configuration file in YAML; defaults are used if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Directory of logs and checkpoints
    #[arg(short, long, default_value = "logs")]
    logdir: PathBuf,

    /// Overrides the random seeds of the configuration
    #[arg(short, long)]
    seed: Option<i64>,

    /// Write metrics to TensorBoard in the log directory
    #[arg(short, long, default_value_t = false)]
    tensorboard: bool,

    /// Write the default configuration to the path of --config and exit
    #[arg(long, default_value_t = false)]
    write_default: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    if args.write_default {
        let path = args.config.unwrap_or_else(|| PathBuf::from("cadence.yaml"));
        RunConfig::default().save(&path)?;
        info!("Wrote the default configuration in {:?}", path);
        return Ok(());
    }

    let config = match &args.config {
        Some(path) => RunConfig::load(path)?,
        None => RunConfig::default(),
    };
    let config = match args.seed {
        Some(seed) => config.seed(seed),
        None => config,
    };

    let (train_logs, eval_logs) = run::train(&config, &args.logdir, args.tensorboard)?;
    run::write_logs(&args.logdir, &train_logs, &eval_logs)?;
    config.save(args.logdir.join("config.yaml"))?;

    Ok(())
}
