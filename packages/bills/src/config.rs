//! Configuration constants and conversion options.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;

use crate::error::{ConvertError, Result};
use crate::registry::PreservedAttributes;
use crate::rewrite::{BlockIdFn, CustomizeResult, Customizer};
use crate::xml::{NodeRef, XmlNode};

/// Output tag for block elements.
pub const BLOCK_TAG: &str = "div";

/// Output tag for inline elements.
pub const INLINE_TAG: &str = "span";

/// Paragraph container tag. Every element originally named `p`, including
/// synthetic containers, receives a block id.
pub const PARAGRAPH_TAG: &str = "p";

/// Metadata element removed from the output.
pub const METADATA_TAG: &str = "metadata";

/// Cross-reference element that may carry a citation.
pub const EXTERNAL_XREF_TAG: &str = "external-xref";

/// Tags consulted by the containerization rules.
pub const ENUM_TAG: &str = "enum";
pub const HEADER_TAG: &str = "header";
pub const TEXT_TAG: &str = "text";
pub const SECTION_TAG: &str = "section";
pub const TITLE_TAG: &str = "title";

/// Attribute holding the original tag name.
pub const CLASS_ATTR: &str = "class";

/// Attribute holding the sequential block identifier.
pub const BLOCK_ID_ATTR: &str = "data-block-id";

/// Citation attributes.
pub const CITATION_TYPE_ATTR: &str = "data-citation-type";
pub const CITATION_ID_ATTR: &str = "data-citation-id";

/// Source attributes read by the citation extractor.
pub const LEGAL_DOC_ATTR: &str = "legal-doc";
pub const PARSABLE_CITE_ATTR: &str = "parsable-cite";

/// `legal-doc` value for the United States Code.
pub const USC_LEGAL_DOC: &str = "usc";

/// Placeholder for the block ordinal in a block id template.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TEMPLATE_PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{n\}").expect("valid regex"));

/// Options for a single conversion.
///
/// Each conversion takes its own options; the block counter and tree are
/// created per call and never shared.
#[derive(Default)]
pub struct ConvertOptions {
    /// Run the containerization pass before the rewrite.
    pub blocks: bool,

    /// Map block ordinals (starting at 1) to identifiers.
    pub block_id: Option<Box<BlockIdFn>>,

    /// Per-element callback that may edit the final attributes.
    pub customizer: Option<Box<dyn Customizer>>,
}

impl ConvertOptions {
    /// Create default options: no containerization, numeric block ids.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the containerization pass.
    #[must_use]
    pub fn with_blocks(mut self, blocks: bool) -> Self {
        self.blocks = blocks;
        self
    }

    /// Set the block id mapping.
    ///
    /// # Examples
    /// ```
    /// use bills_html::ConvertOptions;
    ///
    /// let options = ConvertOptions::new().with_block_id(|n| format!("sec-{n}"));
    /// assert!(options.block_id.is_some());
    /// ```
    #[must_use]
    pub fn with_block_id<F, T>(mut self, block_id: F) -> Self
    where
        F: Fn(usize) -> T + 'static,
        T: fmt::Display,
    {
        self.block_id = Some(Box::new(move |n| block_id(n).to_string()));
        self
    }

    /// Set a customization callback from a closure.
    #[must_use]
    pub fn with_customize_fn<F>(mut self, customize: F) -> Self
    where
        F: FnMut(NodeRef<'_, XmlNode>, &mut PreservedAttributes) -> CustomizeResult + 'static,
    {
        self.customizer = Some(Box::new(customize));
        self
    }

    /// Set a customization callback.
    #[must_use]
    pub fn with_customizer(mut self, customizer: impl Customizer + 'static) -> Self {
        self.customizer = Some(Box::new(customizer));
        self
    }
}

impl fmt::Debug for ConvertOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConvertOptions")
            .field("blocks", &self.blocks)
            .field("has_block_id", &self.block_id.is_some())
            .field("has_customizer", &self.customizer.is_some())
            .finish()
    }
}

/// Validate a block id template.
///
/// # Examples
/// ```
/// use bills_html::config::validate_block_id_template;
///
/// assert!(validate_block_id_template("sec-{n}").is_ok());
/// assert!(validate_block_id_template("sec-").is_err());
/// ```
pub fn validate_block_id_template(template: &str) -> Result<()> {
    if TEMPLATE_PLACEHOLDER.is_match(template) {
        Ok(())
    } else {
        Err(ConvertError::InvalidBlockIdTemplate(template.to_string()))
    }
}

/// Render a block id template for one ordinal.
///
/// # Examples
/// ```
/// use bills_html::config::render_block_id;
///
/// assert_eq!(render_block_id("sec-{n}", 4), "sec-4");
/// ```
#[must_use]
pub fn render_block_id(template: &str, ordinal: usize) -> String {
    TEMPLATE_PLACEHOLDER
        .replace_all(template, ordinal.to_string().as_str())
        .into_owned()
}

/// Options read from a YAML file.
///
/// Unrecognized keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OptionsFile {
    /// Run the containerization pass.
    pub blocks: bool,

    /// Block id template containing `{n}`.
    pub block_id_template: Option<String>,
}

impl OptionsFile {
    /// Parse options from YAML text. Empty text yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load options from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let yaml = fs::read_to_string(path)?;
        Self::from_yaml(&yaml)
    }

    /// Build conversion options.
    ///
    /// # Errors
    /// Returns `InvalidBlockIdTemplate` if the template lacks `{n}`.
    pub fn into_options(self) -> Result<ConvertOptions> {
        let mut options = ConvertOptions::new().with_blocks(self.blocks);
        if let Some(template) = self.block_id_template {
            validate_block_id_template(&template)?;
            options = options.with_block_id(move |n| render_block_id(&template, n));
        }
        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::new();
        assert!(!options.blocks);
        assert!(options.block_id.is_none());
        assert!(options.customizer.is_none());
    }

    #[test]
    fn test_with_block_id_stringifies() {
        let options = ConvertOptions::new().with_block_id(|n| n * 10);
        let block_id = options.block_id.unwrap();
        assert_eq!(block_id(3), "30");
    }

    #[test]
    fn test_options_debug() {
        let options = ConvertOptions::new()
            .with_blocks(true)
            .with_customize_fn(|_, _| Ok(()));
        let debug = format!("{options:?}");
        assert!(debug.contains("blocks: true"));
        assert!(debug.contains("has_customizer: true"));
    }

    #[test]
    fn test_validate_block_id_template() {
        assert!(validate_block_id_template("{n}").is_ok());
        assert!(validate_block_id_template("block-{n}-x").is_ok());
        assert!(validate_block_id_template("block-{N}").is_err());
        assert!(validate_block_id_template("").is_err());
    }

    #[test]
    fn test_render_block_id() {
        assert_eq!(render_block_id("{n}", 1), "1");
        assert_eq!(render_block_id("s{n}-{n}", 12), "s12-12");
    }

    #[test]
    fn test_options_file_from_yaml() {
        let file = OptionsFile::from_yaml("blocks: true\nblock_id_template: \"sec-{n}\"\n").unwrap();
        assert!(file.blocks);
        assert_eq!(file.block_id_template.as_deref(), Some("sec-{n}"));
    }

    #[test]
    fn test_options_file_ignores_unknown_keys() {
        let file = OptionsFile::from_yaml("blocks: true\nstylesheet: bill.css\n").unwrap();
        assert_eq!(
            file,
            OptionsFile {
                blocks: true,
                block_id_template: None
            }
        );
    }

    #[test]
    fn test_options_file_empty() {
        assert_eq!(OptionsFile::from_yaml("").unwrap(), OptionsFile::default());
    }

    #[test]
    fn test_options_file_invalid_yaml() {
        let result = OptionsFile::from_yaml("blocks: [unclosed");
        assert!(matches!(result, Err(ConvertError::OptionsFile(_))));
    }

    #[test]
    fn test_options_file_into_options() {
        let file = OptionsFile {
            blocks: true,
            block_id_template: Some("sec-{n}".to_string()),
        };
        let options = file.into_options().unwrap();
        assert!(options.blocks);
        assert_eq!((options.block_id.unwrap())(2), "sec-2");
    }

    #[test]
    fn test_options_file_into_options_bad_template() {
        let file = OptionsFile {
            blocks: false,
            block_id_template: Some("sec".to_string()),
        };
        assert!(matches!(
            file.into_options(),
            Err(ConvertError::InvalidBlockIdTemplate(_))
        ));
    }
}
