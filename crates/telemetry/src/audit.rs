//! Audit samples of pipeline output.

use serde::Serialize;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use tracing::info;

/// Append a pretty-printed JSON payload to the audit file, if one is set.
///
/// # Arguments
/// * `path` - Path to the audit file; `None` makes this a no-op
/// * `payload` - Serializable payload to write
pub fn write_audit_sample<P: AsRef<Path>, T: Serialize>(
    path: Option<P>,
    payload: &T,
) -> anyhow::Result<()> {
    let Some(audit_path) = path else {
        return Ok(());
    };

    let json = serde_json::to_string_pretty(payload)?;
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&audit_path)?;
    writeln!(file, "{}", json)?;
    info!("Wrote audit sample to {:?}", audit_path.as_ref());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct Sample {
        state_id: i64,
        units: usize,
    }

    #[test]
    fn test_samples_are_appended() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.jsonl");

        write_audit_sample(Some(&path), &Sample { state_id: 25, units: 3 }).unwrap();
        write_audit_sample(Some(&path), &Sample { state_id: 25, units: 4 }).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.matches("\"state_id\": 25").count(), 2);
        assert!(text.contains("\"units\": 4"));
    }

    #[test]
    fn test_no_path_is_noop() {
        write_audit_sample(None::<&Path>, &Sample { state_id: 25, units: 0 }).unwrap();
    }
}
