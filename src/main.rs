use std::path::PathBuf;
use std::process;

use clap::Parser;
use clap::error::ErrorKind;

use mapshade::{MapSource, RenderError, render_map, save_png};

#[derive(Parser, Debug)]
#[command(name = "mapshade")]
#[command(about = "Render an ASCII tile map into a shaded PNG")]
struct Args {
    /// Map file: `Key: value` settings followed by the tile rows
    config: PathBuf,

    /// Output PNG, overrides the file's `Output` setting
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            let _ = e.print();
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        process::exit(2);
    }
}

fn run(args: &Args) -> Result<(), RenderError> {
    let source = MapSource::read(&args.config)?;
    let output = args.output.clone().unwrap_or_else(|| source.config.output.clone());

    let raster = render_map(&source.grid, &source.config)?;
    save_png(&raster, &output)
}
