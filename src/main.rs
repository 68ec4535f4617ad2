extern crate manualj;

use clap::Parser;
use manualj::output::FileOutput;
use manualj::run_project;
use std::ffi::OsStr;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct ManualJArgs {
    /// Building descriptor JSON file
    input_file: String,
    /// Directory for report files (defaults to the input file's directory)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let args = ManualJArgs::parse();

    let input_file = args.input_file.as_str();
    let input_file_ext = Path::new(input_file).extension().and_then(OsStr::to_str);
    let input_file_stem = match input_file_ext {
        Some(ext) => &input_file[..(input_file.len() - ext.len() - 1)],
        None => input_file,
    };
    let output_dir = args.output_dir.unwrap_or_else(|| {
        Path::new(input_file)
            .parent()
            .unwrap_or(Path::new("."))
            .to_path_buf()
    });
    let file_stem = Path::new(input_file_stem)
        .file_name()
        .and_then(OsStr::to_str)
        .unwrap_or("manualj");

    let output = FileOutput::new(output_dir.clone(), format!("{file_stem}__{{}}"));

    run_project(BufReader::new(File::open(input_file)?), output)?;

    info!(
        "report files written to {}",
        output_dir.join(format!("{file_stem}__*")).display()
    );

    Ok(())
}
