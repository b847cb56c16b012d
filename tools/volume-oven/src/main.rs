mod description;

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use ard_texture3d::{
    log::{info, LevelFilter, LogSettings},
    save_load::prelude::*,
    textures::prelude::*,
};
use clap::{Parser, Subcommand, ValueEnum};

use crate::description::VolumeDescription;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
    /// Minimum level of logs to output.
    #[arg(long, default_value_t = LevelFilter::Info)]
    log_level: LevelFilter,
    /// Folder to write log files into.
    #[arg(long)]
    log_folder: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bake a volume description into a texture record.
    Bake {
        /// Path to the RON volume description.
        #[arg(short, long)]
        desc: PathBuf,
        /// Output path for the record.
        #[arg(short, long)]
        out: Option<PathBuf>,
        #[arg(short, long, value_enum, default_value_t = RecordFormat::Bincode)]
        format: RecordFormat,
    },
    /// Print the contents of a baked texture record.
    Inspect {
        path: PathBuf,
        #[arg(short, long, value_enum, default_value_t = RecordFormat::Bincode)]
        format: RecordFormat,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum RecordFormat {
    Ron,
    Bincode,
}

fn main() -> Result<()> {
    let args = Args::parse();

    ard_texture3d::log::init(&LogSettings {
        level: args.log_level,
        log_folder: args.log_folder,
    })?;

    match args.command {
        Command::Bake { desc, out, format } => bake(desc, out, format),
        Command::Inspect { path, format } => inspect(path, format),
    }
}

fn bake(desc_path: PathBuf, out: Option<PathBuf>, format: RecordFormat) -> Result<()> {
    info!("Loading description {}...", desc_path.display());
    let desc = fs::read_to_string(&desc_path)
        .with_context(|| format!("unable to read {}", desc_path.display()))?;
    let desc = ron::from_str::<VolumeDescription>(&desc)?;
    let texture = desc.build()?;

    let out_path = out.unwrap_or_else(|| desc_path.with_extension("ard_tex3d"));

    let data = match format {
        RecordFormat::Ron => save::<Ron, _>(&texture)?,
        RecordFormat::Bincode => save::<Bincode, _>(&texture)?,
    };
    fs::write(&out_path, data)
        .with_context(|| format!("unable to write {}", out_path.display()))?;

    info!("Baked {}", out_path.display());
    Ok(())
}

fn inspect(path: PathBuf, format: RecordFormat) -> Result<()> {
    let data = fs::read(&path).with_context(|| format!("unable to read {}", path.display()))?;

    let texture = match format {
        RecordFormat::Ron => load::<Ron, Texture3D>(&data)?,
        RecordFormat::Bincode => load::<Bincode, Texture3D>(&data)?,
    };

    info!("name: {}", texture.name().unwrap_or("<unnamed>"));
    info!(
        "kind: {:?} ({} slices)",
        texture.kind(),
        texture.kind().depth_or_layers()
    );
    for (axis, mode) in texture.wrap_state().iter() {
        if mode.uses_border() {
            info!("wrap {axis}: {mode} (samples border color)");
        } else {
            info!("wrap {axis}: {mode}");
        }
    }

    Ok(())
}
