use clap::Args;
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use std::io::Write;

#[derive(Args, Debug, Default)]
pub struct OutputArgs {
    /// Output as pretty JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
    /// Output as compact JSON
    #[arg(long, default_value_t = false, conflicts_with = "json")]
    pub json_compact: bool,
}

#[derive(Serialize, Debug)]
pub struct KeypairDisplay {
    #[serde(serialize_with = "serialize_pubkey_as_string")]
    pub pubkey: Pubkey,
    pub secret_base58: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub saved_to: Option<String>,
}

pub fn serialize_pubkey_as_string<S>(pubkey: &Pubkey, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&pubkey.to_string())
}

impl OutputArgs {
    pub fn is_json(&self) -> bool {
        self.json || self.json_compact
    }

    /// Write the human-readable key lines. No-op in JSON mode.
    pub fn write_text<W: Write>(&self, display: &KeypairDisplay, out: &mut W) -> eyre::Result<()> {
        if !self.is_json() {
            writeln!(out, "Public Key: {}", display.pubkey)?;
            writeln!(out, "Base58 Secret Key: {}", display.secret_base58)?;
        }
        Ok(())
    }

    /// Write the JSON document. No-op in text mode.
    pub fn write_json<W: Write>(&self, display: &KeypairDisplay, out: &mut W) -> eyre::Result<()> {
        let res = if self.json {
            serde_json::to_string_pretty(display)?
        } else if self.json_compact {
            serde_json::to_string(display)?
        } else {
            return Ok(());
        };

        writeln!(out, "{res}")?;
        Ok(())
    }
}
