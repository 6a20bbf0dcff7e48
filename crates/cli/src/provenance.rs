use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::ffi::OsString;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::output::write_creating_dirs;

/// What produced an artifact: the subcommand and its parameters.
pub struct Payload {
    pub command: &'static str,
    pub params: Value,
}

impl Payload {
    pub fn new(command: &'static str, params: Value) -> Self {
        Self { command, params }
    }
}

/// Provenance document for `artifact` (or for no artifact, as printed by `cli report`).
#[track_caller]
pub fn document(artifact: Option<&Path>, payload: Payload) -> Value {
    let callsite = Location::caller();
    let outputs: Vec<String> = artifact
        .map(|a| a.to_string_lossy().into_owned())
        .into_iter()
        .collect();
    json!({
        "code_rev": current_git_rev(),
        "lib_version": grahamscan::VERSION,
        "callsite": {
            "file": callsite.file(),
            "line": callsite.line()
        },
        "command": payload.command,
        "params": payload.params,
        "outputs": outputs
    })
}

/// Write `<artifact stem>.provenance.json` next to `artifact`.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, payload: Payload) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let provenance_path = provenance_path(artifact);
    let doc = document(Some(artifact), payload);
    write_creating_dirs(&provenance_path, &serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing provenance for {}", artifact.display()))?;
    Ok(provenance_path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let stem = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    let mut name = stem;
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

pub fn current_git_rev() -> String {
    if let Some(from_env) = option_env!("GIT_COMMIT") {
        if !from_env.is_empty() {
            return from_env.to_string();
        }
    }
    if let Ok(env_override) = std::env::var("GIT_COMMIT") {
        if !env_override.is_empty() {
            return env_override;
        }
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn provenance_path_rewrites_extension() {
        let base = Path::new("/tmp/output/hull.json");
        assert_eq!(
            provenance_path(base),
            Path::new("/tmp/output/hull.provenance.json")
        );
    }

    #[test]
    fn write_sidecar_records_command_and_output() {
        let dir = tempdir().unwrap();
        let artifact = dir.path().join("nested").join("hull.json");
        let payload = Payload::new("hull", json!({"input": "pts.txt"}));
        let prov_path = write_sidecar(&artifact, payload).unwrap();
        assert!(prov_path.exists());
        let parsed: Value = serde_json::from_slice(&fs::read(prov_path).unwrap()).unwrap();
        assert_eq!(parsed["outputs"][0], artifact.to_string_lossy().as_ref());
        assert_eq!(parsed["command"], "hull");
        assert_eq!(parsed["params"]["input"], "pts.txt");
    }

    #[test]
    fn report_document_has_no_outputs() {
        let doc = document(None, Payload::new("report", json!({})));
        assert_eq!(doc["outputs"], json!([]));
        assert_eq!(doc["lib_version"], grahamscan::VERSION);
    }
}
