// src/ui/cli.rs

use clap::Parser;
use std::path::PathBuf;

// ~~~ CLI Arguments ~~~
#[derive(Parser, Debug, Clone, Default)]
#[clap(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION")
)]
pub struct Cli {
    /// Directory to write the release notes into (default: system temp dir)
    #[clap(short = 'o', long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Read and store the API key at this path instead of ~/.relnotes/credentials.json
    #[clap(long = "credential-file", value_name = "PATH")]
    pub credential_file: Option<PathBuf>,

    /// Do not offer to copy the notes to the clipboard
    #[clap(long)]
    pub no_clipboard: bool,

    #[arg(long, hide = true)]
    pub clipboard_daemon: bool,
}
