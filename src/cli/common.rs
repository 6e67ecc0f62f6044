//! Shared file handling for CLI commands.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::config::OutputConfig;
use crate::svg::SvgDocument;

/// Read and parse an SVG file.
pub fn load_svg(path: &Path) -> Result<SvgDocument> {
    let text =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    SvgDocument::parse(&text).with_context(|| format!("failed to parse {}", path.display()))
}

/// Resolve the message text from `--message`, `--file`, or stdin.
///
/// One trailing line ending is stripped from file and stdin input, so that
/// `echo secret | svgstego hide ...` hides `secret`.
pub fn read_message(message: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(message) = message {
        return Ok(message.to_owned());
    }

    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read message from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read message from stdin")?;
            buf
        }
    };

    Ok(strip_line_ending(text))
}

fn strip_line_ending(mut text: String) -> String {
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    text
}

/// Output path for `hide`: `<stem><suffix>.svg`, placed in `output.dir` or
/// next to the input.
pub fn derive_output_path(input: &Path, output: &OutputConfig) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    let name = format!("{stem}{}.svg", output.suffix);

    match &output.dir {
        Some(dir) => dir.join(name),
        None => input.with_file_name(name),
    }
}

/// Write `contents` to `path`, creating parent directories.
///
/// Refuses to replace an existing file unless `overwrite` is set.
pub fn write_output(path: &Path, contents: &str, overwrite: bool) -> Result<()> {
    if path.exists() && !overwrite {
        bail!(
            "{} already exists (use --force or set `output.overwrite`)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }

    fs::write(path, contents).with_context(|| format!("failed to write {}", path.display()))
}

/// Format count with noun, handling pluralization
///
/// - `plural_count(0, "file")` -> `"0 files"`
/// - `plural_count(1, "file")` -> `"1 file"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_derive_output_path() {
        let output = OutputConfig::default();
        assert_eq!(
            derive_output_path(Path::new("art/logo.svg"), &output),
            PathBuf::from("art/logo.stego.svg")
        );
        assert_eq!(
            derive_output_path(Path::new("logo"), &output),
            PathBuf::from("logo.stego.svg")
        );

        let output = OutputConfig {
            suffix: "-x".into(),
            dir: Some(PathBuf::from("/tmp/out")),
            overwrite: false,
        };
        assert_eq!(
            derive_output_path(Path::new("art/logo.svg"), &output),
            PathBuf::from("/tmp/out/logo-x.svg")
        );
    }

    #[test]
    fn test_read_message_sources() {
        assert_eq!(read_message(Some("inline\n"), None).unwrap(), "inline\n");

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("msg.txt");
        fs::write(&path, "from file\r\n").unwrap();
        assert_eq!(read_message(None, Some(&path)).unwrap(), "from file");

        fs::write(&path, "two\n\n").unwrap();
        assert_eq!(read_message(None, Some(&path)).unwrap(), "two\n");

        assert!(read_message(None, Some(&dir.path().join("missing"))).is_err());
    }

    #[test]
    fn test_write_output_overwrite_rules() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/out.svg");

        write_output(&path, "<svg/>", false).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");

        let err = write_output(&path, "<svg></svg>", false).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");

        write_output(&path, "<svg></svg>", true).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg></svg>");
    }

    #[test]
    fn test_load_svg_errors_name_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.svg");
        fs::write(&path, "<svg><rect></svg>").unwrap();

        let err = load_svg(&path).unwrap_err();
        assert!(format!("{err:#}").contains("broken.svg"));
        assert!(load_svg(&dir.path().join("absent.svg")).is_err());
    }

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "file"), "0 files");
        assert_eq!(plural_count(1, "file"), "1 file");
        assert_eq!(plural_count(2, "slot"), "2 slots");
    }
}
