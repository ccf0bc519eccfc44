// tests/integration_tests/common.rs
use anyhow::Result;
use pagegen::{Config, LineCounter, PageError};
use pagegen::config::{Inputs, LineCounterConfig, RenderConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEMPLATE: &str = "<p>SOURCE lines, MINIFIED_SIZE KB min, GZIP_SIZE KB gz, CLOCk loc</p>";

/// Line counter that always reports the same count.
pub struct StaticCounter(pub u64);

impl LineCounter for StaticCounter {
    fn count_code_lines(&self, _target: &Path) -> Result<u64, PageError> {
        Ok(self.0)
    }
}

pub fn create_test_file(dir: &Path, name: &str, content: &[u8]) -> Result<PathBuf> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// Lays out the editor sample inputs: a template, a listing, a 2 KiB
/// minified bundle and a 1 KiB gzip bundle.
pub fn setup_sample_directory(template: &str) -> Result<TempDir> {
    let dir = TempDir::new()?;

    create_test_file(dir.path(), "Sample.html.in", template.as_bytes())?;
    create_test_file(dir.path(), "Editor.jsx.bin", b"const x = 1;")?;
    create_test_file(dir.path(), "Editor.js", &[b'm'; 2048])?;
    create_test_file(dir.path(), "Editor.js.gz", &[0x1f; 1024])?;
    create_test_file(dir.path(), "src/Editor.jsx", b"const x = 1;\n")?;

    Ok(dir)
}

pub fn sample_config(dir: &Path) -> Config {
    Config {
        inputs: Inputs {
            template: dir.join("Sample.html.in"),
            source_listing: dir.join("Editor.jsx.bin"),
            minified_bundle: dir.join("Editor.js"),
            gzip_bundle: dir.join("Editor.js.gz"),
        },
        line_counter: LineCounterConfig {
            target: dir.join("src/Editor.jsx"),
            ..LineCounterConfig::default()
        },
        render: RenderConfig::default(),
    }
}

/// A `sh -c` script that prints a cloc-shaped CSV report with `count` in the
/// code column.
#[cfg(unix)]
pub fn fake_cloc_script(count: &str) -> String {
    format!(
        "printf '\\nfiles,language,blank,comment,code\\n1,JavaScript,3,4,{count}\\n'"
    )
}
