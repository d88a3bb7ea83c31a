#![forbid(unsafe_code)]

use clap::Parser;
use std::path::PathBuf;

use splashpak::splash::{self, Config, Mode, DEFAULT_PIC_DIR};

#[derive(Debug, Parser)]
#[command(
    name = "splashpak",
    version,
    about = "SPLASH!! logo image unpack/repack tool",
    after_help = "Examples:\n  splashpak -i LOGO.img -d -o pic\n  splashpak -i LOGO.img -p pic -o new-logo.img"
)]
struct Cli {
    /// Input logo image.
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output image (repack, default new-logo.img) or directory (unpack, default --pic).
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Picture directory: replacement images for repack, destination for unpack.
    #[arg(short, long, default_value = DEFAULT_PIC_DIR)]
    pic: PathBuf,

    /// Extract the logo image instead of repacking it.
    #[arg(short, long, conflicts_with_all = ["info", "verify"])]
    decrypt: bool,

    /// Print the entry table and exit.
    #[arg(short = 'r', long, conflicts_with = "verify")]
    info: bool,

    /// Check every entry's bounds and pixel count.
    #[arg(long)]
    verify: bool,

    /// Debug logging; adds payload hashes to --info.
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn mode(&self) -> Mode {
        if self.decrypt {
            Mode::Unpack
        } else if self.info {
            Mode::Info {
                verbose: self.verbose,
            }
        } else if self.verify {
            Mode::Verify
        } else {
            Mode::Repack
        }
    }
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let mode = cli.mode();
    let res = Config::new(cli.input, cli.output, Some(cli.pic), mode)
        .and_then(|config| splash::run(&config));

    if let Err(e) = res {
        eprintln!("error: {e}");
        std::process::exit(e.errno());
    }
}
