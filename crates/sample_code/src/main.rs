use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;

use sample_code::{run, SampleConfig};

fn setup_logging(verbose: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let matches = Command::new("sample_code")
        .version("0.1.0")
        .about("Samples code and injects the samples into a Reveal.js Markdown file")
        .arg(
            Arg::new("in_file")
                .long("in-file")
                .num_args(1)
                .value_parser(clap::value_parser!(PathBuf))
                .default_value("index.html.in")
                .help(
                    "The input file into which code samples are injected. This file must end \
                     in \".in\". The output file will be the same as the input, without the \".in\"",
                ),
        )
        .arg(
            Arg::new("cpp_root")
                .long("cpp-root")
                .num_args(1)
                .required(true)
                .value_parser(clap::value_parser!(PathBuf))
                .help("The path under which all samples may be found"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue)
                .default_value("false"),
        )
        .get_matches();

    let config = SampleConfig {
        template: matches
            .get_one::<PathBuf>("in_file")
            .cloned()
            .context("--in-file has a default value")?,
        root: matches
            .get_one::<PathBuf>("cpp_root")
            .cloned()
            .context("--cpp-root is required")?,
        verbose: matches.get_flag("verbose"),
    };

    setup_logging(config.verbose).context("Failed to setup logging")?;

    if let Err(err) = config.output_path() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }

    run(&config)?;
    Ok(())
}
