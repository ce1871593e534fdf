//! Untyped template context
//!
//! Answers arrive as already-rendered strings from the scaffolding tool, either
//! on the command line, through the environment, or in a context file. A
//! context file is YAML (JSON is accepted too) and may wrap its answers in a
//! `cookiecutter` key, the way the scaffolding tool writes replay files.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::path::Path;

/// Any scalar a context file may hold for an answer
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Int(i) => write!(f, "{}", i),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Str(s) => f.write_str(s),
        }
    }
}

fn scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|s| s.to_string()))
}

/// Rendered answers, each possibly missing
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawContext {
    #[serde(default, deserialize_with = "scalar")]
    pub use_tests: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub test_framework: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub use_subtree: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub use_assets: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub use_documents: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub add_readme_for_users: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub license: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub use_package_init: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub init_git: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub git_config_local: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub author_name: Option<String>,

    #[serde(default, deserialize_with = "scalar")]
    pub author_email: Option<String>,
}

/// Context file shapes: replay-style wrapper or a flat map
#[derive(Deserialize)]
#[serde(untagged)]
enum ContextFile {
    Wrapped { cookiecutter: RawContext },
    Flat(RawContext),
}

impl RawContext {
    /// Parse a context document (YAML or JSON)
    pub fn parse(content: &str) -> Result<Self> {
        let file: ContextFile =
            serde_yaml::from_str(content).context("Failed to parse template context")?;
        Ok(match file {
            ContextFile::Wrapped { cookiecutter } => cookiecutter,
            ContextFile::Flat(raw) => raw,
        })
    }

    /// Read and parse a context file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read context file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Invalid context file: {}", path.display()))
    }

    /// Layer `self` over `lower`: answers present here win, gaps fall through
    pub fn overlay(self, lower: RawContext) -> RawContext {
        RawContext {
            use_tests: self.use_tests.or(lower.use_tests),
            test_framework: self.test_framework.or(lower.test_framework),
            use_subtree: self.use_subtree.or(lower.use_subtree),
            use_assets: self.use_assets.or(lower.use_assets),
            use_documents: self.use_documents.or(lower.use_documents),
            add_readme_for_users: self.add_readme_for_users.or(lower.add_readme_for_users),
            license: self.license.or(lower.license),
            use_package_init: self.use_package_init.or(lower.use_package_init),
            init_git: self.init_git.or(lower.init_git),
            git_config_local: self.git_config_local.or(lower.git_config_local),
            author_name: self.author_name.or(lower.author_name),
            author_email: self.author_email.or(lower.author_email),
        }
    }
}
