use std::fs;
use std::io::{self, Read};
use std::process;
use std::str::FromStr;

use clap::Parser;
use log::{debug, info, LevelFilter};

use scg2scs::{identifiers_json, parse_scg, translate, ScsWriteOptions};

/// scg2scs - Convert SCg element models (JSON) to SCs text
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON element model (stdin when omitted)
    input: Option<String>,

    /// Path to the output SCs file (stdout when omitted)
    #[arg(short, long)]
    output: Option<String>,

    /// Declare contour nodes inside their contour instead of the owning scope
    #[arg(long)]
    scoped_nodes: bool,

    /// Do not append nrel_main_idtf blocks
    #[arg(long)]
    no_main_identifiers: bool,

    /// Print the resolved identifier table as JSON instead of translating
    #[arg(long)]
    identifiers: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() {
    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {}. Using 'warn' instead.", args.log_level);
        LevelFilter::Warn
    });
    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> scg2scs::Result<()> {
    let input = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let graph = parse_scg(&input)?;
    info!(elements = graph.len(); "Element model loaded");

    let output = if args.identifiers {
        identifiers_json(&graph)?
    } else {
        let options = ScsWriteOptions {
            hoist_nested_nodes: !args.scoped_nodes,
            write_main_identifiers: !args.no_main_identifiers,
        };
        translate(&graph, Some(options))?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, output)?;
            info!(output_file = path.as_str(); "SCs written");
        }
        None => print!("{}", output),
    }
    Ok(())
}
