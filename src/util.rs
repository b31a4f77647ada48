use std::path::Path;

/// Evaluate an expression and log its wall time at `debug` level.
#[macro_export]
macro_rules! profile(
  ($title: literal, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    tracing::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);

/// Human readable byte count, e.g. `12.34 KiB`.
pub fn human_size(bytes: u64) -> String {
  use humansize::{FileSize, file_size_opts as options};
  bytes.file_size(options::BINARY)
    .unwrap_or_else(|_| format!("{} B", bytes))
}

/// Create the parent directory of `path`, if it has one.
pub fn ensure_parent(path: &Path) -> std::io::Result<()> {
  match path.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
    _ => Ok(())
  }
}
