use anyhow::Context;
use std::{fs, path::Path};

pub struct Directories;
impl Directories {
    pub fn ensure_dir_exists<P: AsRef<Path>>(path: P) -> anyhow::Result<()> {
        fs::create_dir_all(path.as_ref())
            .map_err(|err| {
                tracing::error!("Cannot create {:?} dir: {:?}", path.as_ref(), err);
                err
            })
            .with_context(|| format!("Cannot create {:?} dir.", path.as_ref()))
    }

    /// Makes sure that the parent directory of the specified file exists.
    pub fn ensure_parent_dir_exists<P: AsRef<Path>>(file_path: P) -> anyhow::Result<()> {
        match file_path.as_ref().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => Self::ensure_dir_exists(parent),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Directories;
    use crate::tests::mock_dir;

    #[test]
    fn creates_nested_dirs() -> anyhow::Result<()> {
        let root = mock_dir("directories-nested")?;
        let nested = root.join("a").join("b");

        Directories::ensure_dir_exists(&nested)?;
        assert!(nested.is_dir());

        // Existing directory isn't an error.
        Directories::ensure_dir_exists(&nested)?;

        Ok(())
    }

    #[test]
    fn creates_parent_dir() -> anyhow::Result<()> {
        let root = mock_dir("directories-parent")?;
        let file_path = root.join("logs").join("notifyme.log");

        Directories::ensure_parent_dir_exists(&file_path)?;
        assert!(root.join("logs").is_dir());
        assert!(!file_path.exists());

        // Relative file names have no parent to create.
        Directories::ensure_parent_dir_exists("notifyme.log")?;

        Ok(())
    }
}
