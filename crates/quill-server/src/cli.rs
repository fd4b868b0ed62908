use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "quill-server", about = "Quill blog server")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/quill.toml")]
    pub config: String,
}
