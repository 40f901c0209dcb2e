use anyhow::Result;

use crate::cli::ui::{status, warning};
use crate::config::{Config, ENV_SHARE_CMD};
use crate::export::{Exporter, NoShareTarget, ShareOutcome, ShareTarget};
use crate::store::{BlobStore, NoteStore};

/// Execute the export command
pub fn run_export<B: BlobStore>(store: &NoteStore<B>, config: &Config, share: bool) -> Result<()> {
    let exporter = Exporter::new(store, &config.export_dir, &config.share_dir);

    if !share {
        let exported = exporter.export_as_file()?;
        status(&format!("Saved export file: {}", exported.file_name));
        status(&format!("  {}", exported.path.display()));
        return Ok(());
    }

    let command = config.share_target();
    let target: &dyn ShareTarget = match &command {
        Some(cmd) => cmd,
        None => &NoShareTarget,
    };

    match exporter.share(target)? {
        ShareOutcome::Shared { path } => {
            status(&format!("Shared {}", path.display()));
        }
        ShareOutcome::Unavailable { path } => {
            warning(&format!(
                "Sharing is not available; set {} to enable it.",
                ENV_SHARE_CMD
            ));
            status(&format!("Export written to {}", path.display()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::SHARE_FILE_NAME;
    use crate::models::NoteCategory;
    use crate::store::MemoryBlobStore;

    #[test]
    fn test_export_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::rooted_at(dir.path());
        let store = NoteStore::new(MemoryBlobStore::new());
        store.save(NoteCategory::Life, "call grandma").unwrap();

        run_export(&store, &config, false).unwrap();

        let files: Vec<_> = std::fs::read_dir(&config.export_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().to_string())
            .collect();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("notes-export-"));
        assert!(files[0].ends_with(".txt"));
    }

    #[test]
    fn test_share_without_command_writes_share_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::rooted_at(dir.path());
        let store = NoteStore::new(MemoryBlobStore::new());

        run_export(&store, &config, true).unwrap();

        let text = std::fs::read_to_string(config.share_dir.join(SHARE_FILE_NAME)).unwrap();
        assert_eq!(text, "No notes available.");
    }
}
