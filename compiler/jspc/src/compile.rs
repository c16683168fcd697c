//! Template-to-file compilation.

use std::fs;
use std::path::{Path, PathBuf};

use jsp_scanner::{scan, ScanError};

use crate::error::CompileError;

/// Translate template text into Java source for `qualified_class`.
///
/// `scan` then `generate`; a scan failure aborts before generation
/// begins and no partial output exists.
///
/// # Errors
///
/// Returns the scanner's error unchanged when the template has an
/// unterminated block.
pub fn translate(source: &str, qualified_class: &str) -> Result<String, ScanError> {
    let tags = scan(source)?;
    Ok(jsp_codegen::generate(&tags, qualified_class))
}

/// Derive the qualified Java class name from a template path.
///
/// Strips the extension and turns path separators into `.`:
/// `demo/pages/Index.jsp` becomes `demo.pages.Index`. Run the compiler
/// from the source root so relative paths map to the intended package.
///
/// # Errors
///
/// The path must have an extension and be valid UTF-8.
pub fn qualified_class_for_path(path: &Path) -> Result<String, CompileError> {
    if path.extension().is_none() {
        return Err(CompileError::MissingExtension {
            path: path.to_path_buf(),
        });
    }
    let stem = path.with_extension("");
    let Some(stem) = stem.to_str() else {
        return Err(CompileError::NonUtf8Path {
            path: path.to_path_buf(),
        });
    };
    Ok(stem.replace(['/', '\\'], "."))
}

/// Compile one template file into a `.java` sibling.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Scan failures are reported with the template path and the 1-based
/// line/column of the offending open delimiter; nothing is written in
/// that case.
pub fn compile_file(path: &Path) -> Result<PathBuf, CompileError> {
    let qualified_class = qualified_class_for_path(path)?;

    let source = fs::read_to_string(path).map_err(|source| CompileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let java = translate(&source, &qualified_class).map_err(|scan_error| {
        let (line, column) = line_col(&source, scan_error.span.start as usize);
        CompileError::Scan {
            path: path.to_path_buf(),
            line,
            column,
            source: scan_error,
        }
    })?;

    let output = path.with_extension("java");
    fs::write(&output, java).map_err(|source| CompileError::Io {
        path: output.clone(),
        source,
    })?;

    tracing::debug!(
        input = %path.display(),
        output = %output.display(),
        class = %qualified_class,
        "compiled template"
    );
    Ok(output)
}

/// 1-based line and column of a byte offset.
///
/// The offset always points at an ASCII delimiter, so it falls on a
/// character boundary; the column counts bytes since the last newline.
#[allow(
    clippy::cast_possible_truncation,
    reason = "line/column counts are bounded by the u32 span offsets"
)]
fn line_col(source: &str, offset: usize) -> (u32, u32) {
    let clamped = offset.min(source.len());
    let prefix = &source[..clamped];
    let line = prefix.bytes().filter(|&byte| byte == b'\n').count() as u32 + 1;
    let column = prefix.rfind('\n').map_or(clamped, |nl| clamped - nl - 1) as u32 + 1;
    (line, column)
}
