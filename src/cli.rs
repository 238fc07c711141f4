use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "rebuild-fixture", version)]
#[command(
    about = "Rebuild ./fixture: 30 timestamp-named directories filled with random trees \
                   of asterisk filler files."
)]
pub struct Cli {
    /// Log progress and a summary of the generated tree to stderr.
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}
