//! tonebox - play notes from the keyboard through one effect
//!
//! Run with: cargo run -- [effect] [--scale]
//!
//! Effects: plain, piano, karplus, reverb, echo, pitch-low, pitch-high.
//! Set RUST_LOG=debug (or trace) for more detail on stderr.

mod app;
mod audio;
mod input;
mod ui;

use app::Tonebox;
use env_logger::{Builder, Env};
use tonebox::synth::EffectMode;

const USAGE: &str = "usage: tonebox [plain|piano|karplus|reverb|echo|pitch-low|pitch-high] [--scale]";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let mut effect = EffectMode::Plain;
    let mut scale = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--scale" => scale = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            name => effect = name.parse()?,
        }
    }

    let app = Tonebox::new().effect(effect);
    if scale {
        app.play_scale()
    } else {
        app.run()
    }
}
