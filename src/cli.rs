//! Command-line interface definition using clap.

use std::path::PathBuf;

use clap::Parser;

/// Produce a browsable HTML history of a WhatsApp conversation.
#[derive(Parser, Debug, Clone)]
#[command(name = "chatsheet")]
#[command(version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    chatsheet -i \"WhatsApp Chat with Alice.txt\" -o alice.html
    chatsheet -i _chat.txt -o index.html

Set RUST_LOG=debug to see which lines were read as continuations.")]
pub struct Args {
    /// Path to the exported chat (.txt)
    #[arg(short = 'i', value_name = "INPUT_FILE")]
    pub input: PathBuf,

    /// Path of the HTML file to write
    #[arg(short = 'o', value_name = "OUTPUT_FILE")]
    pub output: PathBuf,
}
