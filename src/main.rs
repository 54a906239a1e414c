use anyhow::Result;
use clap::Parser;
use pwa_icon_gen::icon_gen;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[clap(
    name = "pwa-icon-gen",
    about = "Generate the 192px and 512px gradient icons of the web app manifest"
)]
struct Args {
    /// Output directory.
    #[clap(short, long, value_name = "DIR", default_value = ".")]
    output: PathBuf,

    /// TrueType font file name (looked up in the system font directories) or path.
    /// The built-in bitmap font is used when it can't be loaded.
    #[clap(long, value_name = "FONT", default_value = icon_gen::DEFAULT_FONT)]
    font: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    icon_gen::generate_icons(icon_gen::Args {
        output: args.output,
        font: args.font,
    })
}
