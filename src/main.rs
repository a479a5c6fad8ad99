use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;

use bmml2dot::core::MockupAnalyzer;
use bmml2dot::formatters::DotFormatter;
use bmml2dot::logging::init_logging;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "bmml2dot",
    version,
    about = "Write the links between Balsamiq mockups as a Graphviz dot graph",
    after_help = "Example: bmml2dot mockups/*.bmml > links.dot && dot -Tpng links.dot > links.png"
)]
struct Cli {
    /// Mockup files, or directories to search for .bmml files
    #[arg(value_name = "INPUTS")]
    inputs: Vec<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    let analyzer = MockupAnalyzer::new()?;

    let stderr = io::stderr();
    let graph = analyzer.analyze(&cli.inputs, &mut stderr.lock())?;

    let stdout = io::stdout();
    DotFormatter::new().format_to_writer(&graph, &mut stdout.lock())?;

    Ok(())
}
