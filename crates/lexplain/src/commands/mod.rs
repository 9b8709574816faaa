//! Command implementations.

use anyhow::Context;
use camino::Utf8Path;

pub mod classify;
pub mod info;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod simplify;
pub mod terms;

/// Read a file and validate its size against the configured limit.
///
/// Combines the file-read and size-validation steps that every analysis
/// command needs.
pub fn read_input_file(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    // Preflight: check file size via metadata before reading into memory.
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_input_size(metadata.len() as usize, path.as_str(), max_bytes)?;

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Read raw bytes from a file with the same size preflight.
pub fn read_input_bytes(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<Vec<u8>> {
    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    check_input_size(metadata.len() as usize, path.as_str(), max_bytes)?;

    let content =
        std::fs::read(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

/// Fail when the input exceeds the configured byte limit.
pub fn check_input_size(size: usize, label: &str, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && size > max
    {
        anyhow::bail!("input too large: {label} is {size} bytes (limit: {max} bytes)");
    }
    Ok(())
}
