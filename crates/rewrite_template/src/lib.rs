// crates/rewrite_template/src/lib.rs

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Applies `replacements` to a single line, in order.
///
/// Each pair replaces every occurrence of its placeholder; later pairs see the
/// output of earlier ones.
pub fn substitute_line(line: &str, replacements: &[(&str, &str)]) -> String {
    let mut line = line.to_string();
    for (old, new) in replacements {
        if line.contains(old) {
            line = line.replace(old, new);
        }
    }
    line
}

/// Streams `reader` to `writer` line by line, substituting placeholders on each line.
///
/// Line terminators are passed through untouched, so a file without a trailing
/// newline stays that way.
pub fn rewrite_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    replacements: &[(&str, &str)],
) -> Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        let read = reader.read_line(&mut line).context("Failed to read template line")?;
        if read == 0 {
            break;
        }
        writer
            .write_all(substitute_line(&line, replacements).as_bytes())
            .context("Failed to write rewritten line")?;
    }
    writer.flush().context("Failed to flush rewritten output")?;
    Ok(())
}

/// Copies the text file at `source` to `dest`, substituting placeholders per line.
pub fn rewrite_file(source: &Path, dest: &Path, replacements: &[(&str, &str)]) -> Result<()> {
    let input = File::open(source)
        .with_context(|| format!("Failed to open template {}", source.display()))?;
    let output = File::create(dest)
        .with_context(|| format!("Failed to create {}", dest.display()))?;
    rewrite_lines(BufReader::new(input), BufWriter::new(output), replacements)
        .with_context(|| format!("Failed to rewrite {} into {}", source.display(), dest.display()))
}

/// Byte-for-byte copy of `source` to `dest`.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest).with_context(|| {
        format!("Failed to copy {} to {}", source.display(), dest.display())
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_substitute_line_replaces_every_occurrence() {
        let out = substitute_line(
            "input: 'src/js/website.js', file: 'dist/js/website.js'",
            &[("website.js", "acme.js")],
        );
        assert_eq!(out, "input: 'src/js/acme.js', file: 'dist/js/acme.js'");
    }

    #[test]
    fn test_substitute_line_applies_pairs_in_order() {
        // The second pair sees the output of the first.
        let out = substitute_line("a.css", &[("a.css", "b.css"), ("b.css", "c.css")]);
        assert_eq!(out, "c.css");
    }

    #[test]
    fn test_substitute_line_without_placeholder_is_unchanged() {
        let out = substitute_line("  format: 'umd',\n", &[("website.js", "acme.js")]);
        assert_eq!(out, "  format: 'umd',\n");
    }

    #[test]
    fn test_rewrite_lines_preserves_terminators() {
        let input = "one website.js\r\ntwo\nthree website.js";
        let mut out = Vec::new();
        rewrite_lines(input.as_bytes(), &mut out, &[("website.js", "x.js")]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "one x.js\r\ntwo\nthree x.js"
        );
    }

    #[test]
    fn test_rewrite_file_html_template() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("index.html");
        let dest = dir.path().join("out.html");
        fs::write(
            &source,
            "<link href=\"css/website.css\">\n<script src=\"js/website.js\"></script>\n",
        )
        .unwrap();

        rewrite_file(
            &source,
            &dest,
            &[("website.css", "shop.css"), ("website.js", "shop.js")],
        )
        .unwrap();

        let written = fs::read_to_string(&dest).unwrap();
        assert_eq!(
            written,
            "<link href=\"css/shop.css\">\n<script src=\"js/shop.js\"></script>\n"
        );
        assert!(!written.contains("website."));
    }

    #[test]
    fn test_rewrite_file_missing_source() {
        let dir = tempdir().unwrap();
        let err = rewrite_file(
            &dir.path().join("nope.js"),
            &dir.path().join("out.js"),
            &[],
        )
        .unwrap_err();
        assert!(err.to_string().contains("Failed to open template"));
    }

    #[test]
    fn test_copy_file_is_byte_exact() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("project.mk");
        let dest = dir.path().join("makefile");
        let bytes = b"all:\n\t@echo website.js\n\xff";
        fs::write(&source, bytes).unwrap();

        copy_file(&source, &dest).unwrap();
        assert_eq!(fs::read(&dest).unwrap(), bytes);
    }
}
