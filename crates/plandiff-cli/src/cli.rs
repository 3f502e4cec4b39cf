use clap::Parser;

#[derive(Parser)]
#[command(
    name = "plandiff",
    about = "Render a job plan diff document as an aligned, colorized report",
    version,
)]
pub struct Cli {
    /// Path to a JSON diff document; `-` or no path reads standard input
    pub input: Option<String>,

    /// Also render unchanged and added/deleted subtrees in full
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit plain text without ANSI color codes
    #[arg(long)]
    pub no_color: bool,
}
