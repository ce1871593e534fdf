//! Fixed file-system targets of a generated project

use crate::config::HookConfig;
use std::path::{Path, PathBuf};

/// Optional directories that are pruned when their answer is "no"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionalDir {
    Tests,
    Subtree,
    Assets,
    Documents,
}

impl OptionalDir {
    pub const ALL: [OptionalDir; 4] = [
        OptionalDir::Tests,
        OptionalDir::Subtree,
        OptionalDir::Assets,
        OptionalDir::Documents,
    ];

    /// Directory name relative to the project root
    pub fn dir_name(&self) -> &'static str {
        match self {
            OptionalDir::Tests => "tests",
            OptionalDir::Subtree => "subtree",
            OptionalDir::Assets => "assets",
            OptionalDir::Documents => "documents",
        }
    }

    /// Whether the user asked to keep this directory
    pub fn enabled(&self, config: &HookConfig) -> bool {
        match self {
            OptionalDir::Tests => config.use_tests,
            OptionalDir::Subtree => config.use_subtree,
            OptionalDir::Assets => config.use_assets,
            OptionalDir::Documents => config.use_documents,
        }
    }
}

/// Paths the hook may touch, anchored at the project root
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn optional_dir(&self, dir: OptionalDir) -> PathBuf {
        self.root.join(dir.dir_name())
    }

    /// CMake packaging support (`cmake/Config.cmake.in`)
    pub fn package_config_dir(&self) -> PathBuf {
        self.root.join("cmake")
    }

    pub fn readme(&self) -> PathBuf {
        self.root.join("README.md")
    }

    pub fn license(&self) -> PathBuf {
        self.root.join("LICENSE.txt")
    }

    /// Copy of the license shipped with the documents
    pub fn documents_license(&self) -> PathBuf {
        self.optional_dir(OptionalDir::Documents).join("LICENSE.txt")
    }

    /// Render `path` relative to the root for display
    pub fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.root).unwrap_or(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_paths() {
        let layout = ProjectLayout::new("/work/demo");

        assert_eq!(layout.readme(), PathBuf::from("/work/demo/README.md"));
        assert_eq!(layout.license(), PathBuf::from("/work/demo/LICENSE.txt"));
        assert_eq!(
            layout.documents_license(),
            PathBuf::from("/work/demo/documents/LICENSE.txt")
        );
        assert_eq!(layout.package_config_dir(), PathBuf::from("/work/demo/cmake"));
        assert_eq!(
            layout.optional_dir(OptionalDir::Subtree),
            PathBuf::from("/work/demo/subtree")
        );
    }

    #[test]
    fn test_relative_display() {
        let layout = ProjectLayout::new("/work/demo");
        let license = layout.documents_license();

        assert_eq!(layout.relative(&license), Path::new("documents/LICENSE.txt"));
        assert_eq!(layout.relative(Path::new("/elsewhere")), Path::new("/elsewhere"));
    }
}
