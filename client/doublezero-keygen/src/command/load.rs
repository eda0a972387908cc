use doublezero_keypair::load_keypair_from_file;
use std::{io::Write, path::PathBuf};

use super::display::{KeypairDisplay, OutputArgs};

#[derive(Debug)]
pub struct LoadCliCommand {
    /// Keypair file to load
    pub path: PathBuf,
}

impl LoadCliCommand {
    pub fn execute<W: Write>(self, output: &OutputArgs, out: &mut W) -> eyre::Result<()> {
        if !output.is_json() {
            writeln!(
                out,
                "=== Loading Keypair from File: {} ===",
                self.path.display()
            )?;
        }

        let material = load_keypair_from_file(&self.path)?;

        let display = KeypairDisplay {
            pubkey: material.pubkey(),
            secret_base58: material.encoded_secret,
            saved_to: None,
        };
        output.write_text(&display, out)?;
        output.write_json(&display, out)
    }
}
