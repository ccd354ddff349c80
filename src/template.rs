//! Placeholder expansion in the output template.
//!
//! A template is split into lines, keeping their endings. Lines containing
//! the placeholder token are replaced by one rendered line per collected
//! record; every other line is copied through untouched.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::collector::Collection;
use crate::error::Result;
use crate::renderer::TemplateRenderer;

/// One line of the output template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateLine {
    /// Copied to the output as is, line ending included
    Literal(String),
    /// Expanded per record; `prefix` is the text before the token
    Placeholder { prefix: String },
}

/// Splits `content` into template lines.
///
/// Only the leftmost occurrence of `placeholder` on a line counts; the
/// rest of that line is discarded.
pub fn parse_template(content: &str, placeholder: &str) -> Vec<TemplateLine> {
    content
        .split_inclusive('\n')
        .map(|line| match line.find(placeholder) {
            Some(index) => TemplateLine::Placeholder { prefix: line[..index].to_string() },
            None => TemplateLine::Literal(line.to_string()),
        })
        .collect()
}

/// Canonical compact JSON for `value`, with object keys sorted at every
/// level.
pub fn canonical_json(value: &serde_json::Value) -> Result<String> {
    Ok(serde_json::to_string(&sorted(value))?)
}

fn sorted(value: &serde_json::Value) -> serde_json::Value {
    match value {
        serde_json::Value::Object(obj) => {
            let mut entries: Vec<_> = obj.iter().collect();
            entries.sort_by(|(a, _), (b, _)| a.cmp(b));
            serde_json::Value::Object(
                entries.into_iter().map(|(k, v)| (k.clone(), sorted(v))).collect(),
            )
        }
        serde_json::Value::Array(arr) => {
            serde_json::Value::Array(arr.iter().map(sorted).collect())
        }
        _ => value.clone(),
    }
}

/// Expands `lines` against `collection`.
///
/// Each record line is rendered from `line_template` with `prefix`, `name`
/// and `data` (canonical JSON text) in the context. The line template is
/// compiled once, even when there is nothing to expand.
pub fn render_template(
    lines: &[TemplateLine],
    collection: &Collection,
    line_template: &str,
    engine: &dyn TemplateRenderer,
) -> Result<String> {
    let mut encoded = Vec::with_capacity(collection.len());
    for (name, record) in collection.iter() {
        encoded.push((name, canonical_json(&record.data)?));
    }

    let mut contexts = Vec::new();
    for line in lines {
        if let TemplateLine::Placeholder { prefix } = line {
            for (name, data) in &encoded {
                contexts.push(serde_json::json!({
                    "prefix": prefix,
                    "name": name,
                    "data": data,
                }));
            }
        }
    }
    let mut rendered = engine.render_all(line_template, &contexts)?.into_iter();

    let mut output = String::new();
    for line in lines {
        match line {
            TemplateLine::Literal(text) => output.push_str(text),
            TemplateLine::Placeholder { .. } => {
                for expanded in rendered.by_ref().take(encoded.len()) {
                    output.push_str(&expanded);
                }
            }
        }
    }
    Ok(output)
}

/// Writes `content` to `destination` through a temporary file in the same
/// directory, so a failed run never leaves a truncated artifact behind.
pub fn write_output(destination: &Path, content: &str) -> Result<()> {
    let parent = match destination.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;
    let mut file = output_file_builder().tempfile_in(parent)?;
    file.write_all(content.as_bytes())?;
    file.as_file().sync_all()?;
    // Overwriting keeps the mode of the artifact being replaced.
    if let Ok(existing) = fs::metadata(destination) {
        fs::set_permissions(file.path(), existing.permissions())?;
    }
    file.persist(destination).map_err(|e| e.error)?;
    Ok(())
}

/// New artifacts get 0666 minus the umask instead of the temp file
/// default of 0600.
#[cfg(unix)]
fn output_file_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = tempfile::Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn output_file_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
