use std::fs;
use std::sync::Arc;

use anyhow::Context;
use anyhow::Result;
use camino::Utf8PathBuf;
use clap::Parser;
use rustc_hash::FxHashMap;
use specsync_generate::ComponentClass;
use specsync_model::SpecIdentity;
use specsync_service::ComponentGenerateService;
use specsync_syntax::ClassDecl;

use crate::args::Args;
use crate::commands::Command;
use crate::exit::Exit;

#[derive(Debug, Parser)]
pub struct Generate {
    /// Class declaration snapshots in JSON form, replayed oldest first.
    #[arg(required = true)]
    files: Vec<Utf8PathBuf>,

    /// Print each committed component as JSON.
    #[arg(long)]
    emit: bool,
}

impl Command for Generate {
    fn execute(&self, _args: &Args) -> Result<Exit> {
        let service = ComponentGenerateService::new();
        let mut committed: FxHashMap<SpecIdentity, Arc<ComponentClass>> = FxHashMap::default();

        for file in &self.files {
            let raw =
                fs::read_to_string(file).with_context(|| format!("Failed to read {file}"))?;
            let class: ClassDecl =
                serde_json::from_str(&raw).with_context(|| format!("Failed to parse {file}"))?;

            match service.update_component_sync(&class) {
                Ok(component) => {
                    let verb = match committed.get(&component.spec) {
                        None => "generated",
                        Some(prev) if Arc::ptr_eq(prev, &component) => "reused",
                        Some(_) => "regenerated",
                    };
                    println!("{verb} {}", component.qualified_name);
                    if self.emit && verb != "reused" {
                        println!("{}", serde_json::to_string_pretty(&*component)?);
                    }
                    committed.insert(component.spec.clone(), component);
                }
                Err(err) => {
                    println!("failed {file}: {err}");
                }
            }
        }

        let stats = service.stats();
        println!(
            "{} generated, {} reused, {} failed",
            stats.regenerated, stats.reused, stats.failed
        );

        if stats.failed > 0 {
            let word = if stats.failed == 1 {
                "snapshot"
            } else {
                "snapshots"
            };
            Ok(Exit::error().with_message(format!("Failed to update {} {word}.", stats.failed)))
        } else {
            Ok(Exit::success())
        }
    }
}

#[cfg(test)]
mod tests {
    use std::process::Command as ProcessCommand;

    const COUNTER_V1: &str = r#"{
  "name": "CounterSpec",
  "qualified_name": "com.example.CounterSpec",
  "annotations": [{ "name": "LayoutSpec" }],
  "methods": [
    {
      "name": "onCreateLayout",
      "annotations": [{ "name": "OnCreateLayout" }],
      "params": [
        { "name": "c", "ty": "ComponentContext" },
        { "name": "count", "ty": "int", "annotations": [{ "name": "Prop" }] }
      ],
      "returns": "Component"
    }
  ]
}"#;

    // Same interface as V1: only docs and the method body differ.
    const COUNTER_V1_REFORMATTED: &str = r#"{
  "name": "CounterSpec",
  "qualified_name": "com.example.CounterSpec",
  "doc": "Counter row.",
  "annotations": [{ "name": "LayoutSpec" }],
  "methods": [
    {
      "name": "onCreateLayout",
      "annotations": [{ "name": "OnCreateLayout" }],
      "params": [
        { "name": "c", "ty": "ComponentContext" },
        { "name": "count", "ty": "int", "annotations": [{ "name": "Prop" }] }
      ],
      "returns": "Component",
      "body": "return Column.create(c).build();"
    }
  ]
}"#;

    // Adds a `step` prop, changing the interface.
    const COUNTER_V2: &str = r#"{
  "name": "CounterSpec",
  "qualified_name": "com.example.CounterSpec",
  "annotations": [{ "name": "LayoutSpec" }],
  "methods": [
    {
      "name": "onCreateLayout",
      "annotations": [{ "name": "OnCreateLayout" }],
      "params": [
        { "name": "c", "ty": "ComponentContext" },
        { "name": "count", "ty": "int", "annotations": [{ "name": "Prop" }] },
        { "name": "step", "ty": "int", "annotations": [{ "name": "Prop" }] }
      ],
      "returns": "Component"
    }
  ]
}"#;

    fn specsync_binary() -> std::path::PathBuf {
        let mut path = std::env::current_exe().unwrap();
        // test binary lives in target/debug/deps/specsync-HASH
        // actual binary is target/debug/specsync
        path.pop(); // remove the test binary name
        if path.ends_with("deps") {
            path.pop();
        }
        path.push("specsync");
        path
    }

    #[test]
    fn generate_replays_snapshots_and_reports_reuse() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("v1.json"), COUNTER_V1).unwrap();
        std::fs::write(dir.path().join("v1b.json"), COUNTER_V1_REFORMATTED).unwrap();
        std::fs::write(dir.path().join("v2.json"), COUNTER_V2).unwrap();

        let output = ProcessCommand::new(specsync_binary())
            .args(["generate", "v1.json", "v1b.json", "v2.json"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(
            output.status.success(),
            "Expected exit 0, got {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr),
        );
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("generated com.example.Counter"));
        assert!(stdout.contains("reused com.example.Counter"));
        assert!(stdout.contains("regenerated com.example.Counter"));
        assert!(stdout.contains("2 generated, 1 reused, 0 failed"));
    }

    #[test]
    fn generate_emits_committed_components() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("v1.json"), COUNTER_V1).unwrap();

        let output = ProcessCommand::new(specsync_binary())
            .args(["generate", "--emit", "v1.json"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert!(output.status.success());
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains(r#""qualified_name": "com.example.Counter""#));
        assert!(stdout.contains(r#""spec": "com.example.CounterSpec""#));
    }

    #[test]
    fn generate_reports_failed_snapshots_and_exits_one() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("plain.json"),
            r#"{ "name": "Plain", "qualified_name": "com.example.Plain" }"#,
        )
        .unwrap();
        std::fs::write(dir.path().join("v1.json"), COUNTER_V1).unwrap();

        let output = ProcessCommand::new(specsync_binary())
            .args(["generate", "plain.json", "v1.json"])
            .current_dir(dir.path())
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(1));
        let stdout = String::from_utf8_lossy(&output.stdout);
        assert!(stdout.contains("failed plain.json"));
        assert!(stdout.contains("generated com.example.Counter"));
        assert!(stdout.contains("1 generated, 0 reused, 1 failed"));
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Failed to update 1 snapshot."));
    }
}
