use anyhow::Result;
use clap::Parser;
use dirdiff::areas::session::{CompareOptions, Session};
use dirdiff::artifacts::filter::ignore_filter::IgnoreFilter;
use dirdiff::artifacts::filter::prune_filter::PruneFilter;
use dirdiff::artifacts::progress::{ProgressSink, Silent, Spinner};
use dirdiff::commands::compare::RunOptions;
use dirdiff::commands::patch::{DEFAULT_DIFF_TOOL, PatchOptions};
use dirdiff::commands::render::RenderOptions;
use dirdiff::{ColorMode, parse_depth};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

const LOG_ENV: &str = "DIRDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compute the difference between two directory trees",
    long_about = "Compares two directory trees and prints every path that is present \
    in only one of them, differs in type, or differs in content. \
    Symlinks are compared by target and never followed.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The first tree")]
    path_a: PathBuf,
    #[arg(index = 2, help = "The second tree")]
    path_b: PathBuf,
    #[arg(short, long, help = "Do not show the progress indicator")]
    quiet: bool,
    #[arg(long, help = "Do not print the legend before the diff")]
    no_legend: bool,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to colorize the output")]
    color: ColorMode,
    #[arg(
        short,
        long = "ignore",
        value_name = "GLOB",
        help = "Leave matching paths out of the comparison (repeatable)"
    )]
    ignore: Vec<String>,
    #[arg(
        short,
        long = "prune",
        value_name = "GLOB",
        help = "Do not expand matching directories in the output (repeatable)"
    )]
    prune: Vec<String>,
    #[arg(long, help = "Expand version control directories such as .git")]
    no_default_prune: bool,
    #[arg(
        short = 'd',
        long,
        value_name = "N",
        value_parser = parse_depth,
        help = "Do not expand directories deeper than N levels"
    )]
    max_depth: Option<usize>,
    #[arg(long, help = "Compare contents even of hard-linked files")]
    paranoid: bool,
    #[arg(
        long,
        value_name = "N",
        value_parser = parse_depth,
        help = "Write a unified patch for every differing directory at depth N"
    )]
    patch_depth: Option<usize>,
    #[arg(
        long,
        value_name = "DIR",
        default_value = ".",
        help = "Where to write patch files"
    )]
    patch_dir: PathBuf,
    #[arg(
        long,
        value_name = "PROGRAM",
        default_value = DEFAULT_DIFF_TOOL,
        help = "Line-diff tool used for patches"
    )]
    diff_tool: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    cli.color.apply();

    let progress: Box<dyn ProgressSink> = if cli.quiet || !std::io::stderr().is_terminal() {
        Box::new(Silent)
    } else {
        Box::new(Spinner::stderr(vec![cli.path_a.clone(), cli.path_b.clone()]))
    };

    let options = RunOptions::new(
        CompareOptions::new(cli.paranoid, IgnoreFilter::new(&cli.ignore)?),
        RenderOptions::new(
            !cli.no_legend,
            PruneFilter::new(&cli.prune, !cli.no_default_prune, cli.max_depth)?,
        ),
        cli.patch_depth
            .map(|depth| PatchOptions::new(depth, cli.diff_tool.clone(), cli.patch_dir.clone())),
    );

    let session = Session::local(Box::new(std::io::stdout()), progress);
    session.run(&cli.path_a, &cli.path_b, &options)?;

    Ok(())
}
