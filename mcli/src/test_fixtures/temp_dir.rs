// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use rand::Rng as _;
use std::path::PathBuf;

#[derive(Debug)]
pub struct TempDir {
    pub path: PathBuf,
}

/// Create a temporary directory. The directory is automatically deleted when the
/// [`TempDir`] struct is dropped.
pub fn create_temp_dir() -> miette::Result<TempDir> {
    let root = std::env::temp_dir();
    let suffix: u64 = rand::rng().random();
    let new_temp_dir = root.join(format!("mcli_test_{suffix:016x}"));
    std::fs::create_dir(&new_temp_dir).into_diagnostic()?;
    Ok(TempDir { path: new_temp_dir })
}

impl Drop for TempDir {
    fn drop(&mut self) { std::fs::remove_dir_all(&self.path).unwrap(); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_drop() {
        let temp_dir = create_temp_dir().unwrap();
        let copy_of_path = temp_dir.path.clone();
        assert!(copy_of_path.exists());

        drop(temp_dir);

        assert!(!copy_of_path.exists());
    }
}
