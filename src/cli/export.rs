use std::path::PathBuf;

use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::{
    config::Config,
    error,
    export::{self, ExportContext},
    success, warning,
};

/// Exports one playlist and writes the CSV to `output` or stdout.
pub async fn export(config: Config, url: String, output: Option<PathBuf>) {
    let ctx = match ExportContext::new(config) {
        Ok(ctx) => ctx,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let csv = match export::export_playlist(&ctx, &url).await {
        Ok(csv) => csv,
        Err(e) => {
            warning!("{}", e);
            error!("{}", e.public_message());
        }
    };

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                if let Err(e) = async_fs::create_dir_all(parent).await {
                    error!("Cannot create {}: {}", parent.display(), e);
                }
            }
            if let Err(e) = async_fs::write(&path, csv).await {
                error!("Cannot write {}: {}", path.display(), e);
            }
            success!("Playlist written to {}", path.display());
        }
        None => {
            if let Err(e) = write_csv(&mut tokio::io::stdout(), &csv).await {
                error!("Cannot write to stdout: {}", e);
            }
        }
    }
}

/// Writes the CSV text to `writer` and flushes it.
///
/// # Errors
///
/// Returns the first I/O error of either the write or the flush.
pub async fn write_csv<W>(writer: &mut W, csv: &str) -> std::io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    writer.write_all(csv.as_bytes()).await?;
    writer.flush().await
}
