use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tokio::fs;
use tracing::{info, warn};

/// Marker inside the names of in-flight temporary files.
pub(crate) const TMP_MARKER: &str = ".ncrafttmp.";

/// Removes temporary files older than `threshold` anywhere under `root`.
pub(crate) async fn purge_tmp(root: &Path, threshold: Duration) {
    let now = SystemTime::now();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];
    let (mut removed, mut failed) = (0_usize, 0_usize);

    while let Some(dir) = pending.pop() {
        let mut entries = match fs::read_dir(&dir).await {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %dir.display(), error = %e, "Cannot scan directory");
                continue;
            },
        };

        while let Ok(Some(entry)) = entries.next_entry().await {
            let Ok(file_type) = entry.file_type().await else { continue };
            let path = entry.path();

            if file_type.is_dir() {
                pending.push(path);
            } else if file_type.is_file() && is_tmp(&path) && is_stale(&path, now, threshold).await {
                match fs::remove_file(&path).await {
                    Ok(()) => removed += 1,
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "Cannot remove temporary file");
                        failed += 1;
                    },
                }
            }
        }
    }

    if removed > 0 || failed > 0 {
        info!(removed, failed, "Cleaned up temporary files");
    }
}

fn is_tmp(path: &Path) -> bool {
    path.file_name().and_then(|name| name.to_str()).is_some_and(|name| name.contains(TMP_MARKER))
}

async fn is_stale(path: &Path, now: SystemTime, threshold: Duration) -> bool {
    fs::metadata(path)
        .await
        .ok()
        .and_then(|meta| meta.modified().ok())
        .and_then(|modified| now.duration_since(modified).ok())
        .is_none_or(|age| age >= threshold)
}
