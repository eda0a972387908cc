use clap::Args;
use doublezero_keypair::{generate_keypair, save_keypair_to_file, KeygenConfig, KeypairMaterial};
use std::{
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use super::display::{KeypairDisplay, OutputArgs};

#[derive(Args, Debug, Default)]
pub struct GenerateCliCommand {
    /// Save the new keypair to FILE (defaults to the configured outfile, keypair.json)
    #[arg(long, value_name = "FILE", conflicts_with = "keypair_file")]
    pub save: Option<Option<PathBuf>>,
    /// Ask whether to save the new keypair, and where (ignored with --save)
    #[arg(
        long,
        default_value_t = false,
        conflicts_with_all = ["keypair_file", "json", "json_compact"]
    )]
    pub interactive: bool,
}

impl GenerateCliCommand {
    pub fn execute<R: BufRead, W: Write>(
        self,
        config: &KeygenConfig,
        output: &OutputArgs,
        input: &mut R,
        out: &mut W,
    ) -> eyre::Result<()> {
        if !output.is_json() {
            writeln!(out, "=== Creating New Keypair ===")?;
        }

        let material = generate_keypair()?;

        let mut display = KeypairDisplay {
            pubkey: material.pubkey(),
            secret_base58: material.encoded_secret.clone(),
            saved_to: None,
        };
        output.write_text(&display, out)?;

        let destination = match self.save {
            Some(path) => Some(path.unwrap_or_else(|| config.default_outfile.clone())),
            None if self.interactive => prompt_destination(config, input, out)?,
            None => None,
        };

        if let Some(path) = destination {
            save(&material, &path, config, output, out)?;
            display.saved_to = Some(path.display().to_string());
        }

        output.write_json(&display, out)
    }
}

fn save<W: Write>(
    material: &KeypairMaterial,
    path: &Path,
    config: &KeygenConfig,
    output: &OutputArgs,
    out: &mut W,
) -> eyre::Result<()> {
    save_keypair_to_file(&material.to_bytes(), path, config.json_format)?;
    if !output.is_json() {
        writeln!(out, "Keypair saved to: {}", path.display())?;
    }
    Ok(())
}

fn read_answer<R: BufRead>(input: &mut R) -> eyre::Result<String> {
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}

/// Ask whether to save, then for a filename. `None` when the user declines.
fn prompt_destination<R: BufRead, W: Write>(
    config: &KeygenConfig,
    input: &mut R,
    out: &mut W,
) -> eyre::Result<Option<PathBuf>> {
    writeln!(out)?;
    write!(out, "Do you want to save this keypair to a file? (y/n): ")?;
    out.flush()?;

    let choice = read_answer(input)?;
    if !choice.eq_ignore_ascii_case("y") && !choice.eq_ignore_ascii_case("yes") {
        return Ok(None);
    }

    write!(
        out,
        "Enter filename (default: {}): ",
        config.default_outfile.display()
    )?;
    out.flush()?;

    let filename = read_answer(input)?;
    if filename.is_empty() {
        Ok(Some(config.default_outfile.clone()))
    } else {
        Ok(Some(PathBuf::from(filename)))
    }
}
