// main.rs
//
// Writes the base and top of the enclosure as STL into the current directory.
// With no arguments the built-in Arduino Uno dimensions are used; a single
// argument names a JSON file overriding any of them.

use anyhow::{Context, bail};
use csg_enclosure::enclosure::{self, EnclosureParams};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("csg_enclosure=info"),
    )
    .init();

    let mut args = std::env::args().skip(1);
    let params = match (args.next(), args.next()) {
        (None, _) => EnclosureParams::default(),
        (Some(path), None) => EnclosureParams::from_json_file(&path)
            .with_context(|| format!("reading parameters from {path}"))?,
        (Some(_), Some(extra)) => {
            bail!("unexpected argument {extra:?}; usage: csg-enclosure [params.json]")
        },
    };

    enclosure::generate(&params, Path::new(".")).context("generating enclosure")?;

    println!(
        "STL files for Arduino Uno enclosure generated as 'arduino_enclosure_base.stl' and 'arduino_enclosure_top.stl'"
    );
    Ok(())
}
