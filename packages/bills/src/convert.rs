//! Conversion service that ties parsing, containerization, rewriting and
//! serialization together.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::config::ConvertOptions;
use crate::containerize::Containerizer;
use crate::error::Result;
use crate::registry::create_bill_registry;
use crate::rewrite::{RewriteEngine, RewriteSummary};
use crate::xml::{to_html, Document};

/// Convert bill XML to HTML.
///
/// # Arguments
/// * `xml` - Well-formed bill, resolution or amendment XML
/// * `options` - Conversion options; the customizer may be called once per element
///
/// # Returns
/// The HTML fragment rooted at the former root element
///
/// # Errors
/// Returns `XmlParse` for malformed input and `Customize` if the
/// customization callback fails. No partial output is produced.
///
/// # Examples
/// ```
/// use bills_html::{convert, ConvertOptions};
///
/// let mut options = ConvertOptions::new().with_blocks(true);
/// let html = convert("<section><text>Hello</text></section>", &mut options).unwrap();
/// assert_eq!(
///     html,
///     r#"<div class="section"><div class="p" data-block-id="1"><span class="text">Hello</span></div></div>"#
/// );
/// ```
pub fn convert(xml: &str, options: &mut ConvertOptions) -> Result<String> {
    let mut document = Document::parse(xml)?;
    convert_document(&mut document, options)?;
    to_html(&document)
}

/// Rewrite an already parsed document in place.
///
/// Runs the containerization pass when `options.blocks` is set, then the
/// rewrite pass against the resulting tree.
pub fn convert_document(
    document: &mut Document,
    options: &mut ConvertOptions,
) -> Result<RewriteSummary> {
    let registry = create_bill_registry();

    if options.blocks {
        Containerizer::with_default_rules().run(document, &registry);
    }

    RewriteEngine::new(registry).rewrite(document, options)
}

/// Convert an XML file and write the HTML next to it or to `output`.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then renames.
///
/// # Arguments
/// * `input` - Path to the bill XML
/// * `output` - Path of the HTML file to write
/// * `options` - Conversion options
pub fn convert_file(input: &Path, output: &Path, options: &mut ConvertOptions) -> Result<()> {
    let xml = fs::read_to_string(input)?;
    let html = convert(&xml, options)?;
    save_html(&html, output)
}

/// Write HTML to a file atomically.
pub fn save_html(html: &str, output: &Path) -> Result<()> {
    let file_name = output
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.html".to_string());
    let temp_file = output.with_file_name(format!(".{file_name}.tmp"));

    {
        let mut file = File::create(&temp_file)?;
        file.write_all(html.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output.exists() {
        fs::remove_file(output)?;
    }

    fs::rename(&temp_file, output)?;

    tracing::debug!(path = %output.display(), bytes = html.len(), "Wrote HTML");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConvertError;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_convert_without_blocks() {
        let html = convert(
            "<section><text>Hello</text></section>",
            &mut ConvertOptions::new(),
        )
        .unwrap();
        assert_eq!(
            html,
            r#"<div class="section"><span class="text">Hello</span></div>"#
        );
    }

    #[test]
    fn test_convert_enum_group_shares_block_id() {
        let mut options = ConvertOptions::new().with_blocks(true);
        let html = convert(
            "<bill><enum>1.</enum><header>Title</header><text>Body</text></bill>",
            &mut options,
        )
        .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="bill"><div class="p" data-block-id="1">"#,
                r#"<span class="enum">1.</span><span class="header">Title</span><span class="text">Body</span>"#,
                "</div></div>"
            )
        );
    }

    #[test]
    fn test_convert_synthetic_and_existing_paragraphs_share_sequence() {
        let mut options = ConvertOptions::new()
            .with_blocks(true)
            .with_block_id(|n| format!("sec-{n}"));
        let html = convert(
            "<legis-body><p>intro</p><section><text>a</text></section><p>outro</p></legis-body>",
            &mut options,
        )
        .unwrap();
        assert_eq!(
            html,
            concat!(
                r#"<div class="legis-body">"#,
                r#"<div class="p" data-block-id="sec-1">intro</div>"#,
                r#"<div class="section"><div class="p" data-block-id="sec-2"><span class="text">a</span></div></div>"#,
                r#"<div class="p" data-block-id="sec-3">outro</div>"#,
                "</div>"
            )
        );
    }

    #[test]
    fn test_convert_is_deterministic() {
        let xml = "<bill><official-title>T</official-title><section><text>a</text></section></bill>";
        let first = convert(xml, &mut ConvertOptions::new().with_blocks(true)).unwrap();
        let second = convert(xml, &mut ConvertOptions::new().with_blocks(true)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_convert_malformed_xml() {
        let result = convert("<bill><section></bill>", &mut ConvertOptions::new());
        assert!(matches!(result, Err(ConvertError::XmlParse(_))));
    }

    #[test]
    fn test_convert_metadata_root() {
        let result = convert("<metadata><title/></metadata>", &mut ConvertOptions::new());
        assert!(matches!(result, Err(ConvertError::EmptyDocument)));
    }

    #[test]
    fn test_convert_document_summary() {
        let mut doc =
            Document::parse("<bill><metadata/><section><text>a</text></section></bill>").unwrap();
        let summary =
            convert_document(&mut doc, &mut ConvertOptions::new().with_blocks(true)).unwrap();
        assert_eq!(summary.removed, 1);
        assert_eq!(summary.blocks, 1);
        assert_eq!(summary.elements, 4);
    }

    #[test]
    fn test_convert_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("hr1.xml");
        let output = dir.path().join("hr1.html");
        fs::write(&input, "<bill><section><text>a</text></section></bill>").unwrap();

        convert_file(&input, &output, &mut ConvertOptions::new()).unwrap();

        let html = fs::read_to_string(&output).unwrap();
        assert_eq!(
            html,
            r#"<div class="bill"><div class="section"><span class="text">a</span></div></div>"#
        );
        assert!(!dir.path().join(".hr1.html.tmp").exists());
    }

    #[test]
    fn test_convert_file_missing_input() {
        let dir = tempdir().unwrap();
        let result = convert_file(
            &dir.path().join("missing.xml"),
            &dir.path().join("out.html"),
            &mut ConvertOptions::new(),
        );
        assert!(matches!(result, Err(ConvertError::Io(_))));
    }
}
