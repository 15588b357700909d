use std::fs;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use specsync_syntax::ClassDecl;

use crate::args::Args;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Inspect {
    /// Path to a class declaration in JSON form.
    file: Utf8PathBuf,
}

impl Command for Inspect {
    fn execute(&self, _args: &Args) -> Result<Exit> {
        let raw = fs::read_to_string(&self.file)
            .with_context(|| format!("Failed to read {}", self.file))?;
        let class: ClassDecl = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse {}", self.file))?;

        match specsync_extract::extract_spec_model(&class) {
            Ok(model) => {
                println!("{}", serde_json::to_string_pretty(&model)?);
                Ok(Exit::success())
            }
            Err(err) => Ok(Exit::error().with_message(err.to_string())),
        }
    }
}
