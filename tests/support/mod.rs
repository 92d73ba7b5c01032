use anyhow::Result;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Temporary service base directory with the `config/` subdirectory the
/// loader resolves file names against.
pub struct ConfigTree {
    root: TempDir,
}

impl ConfigTree {
    pub fn new() -> Result<Self> {
        let root = TempDir::new()?;
        fs::create_dir(root.path().join("config"))?;
        Ok(Self { root })
    }

    pub fn base(&self) -> &Path {
        self.root.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<()> {
        fs::write(self.root.path().join("config").join(name), contents)?;
        Ok(())
    }
}

/// A GetRecords document declaring one `Title` parameter backed by `field`,
/// one output format, and optional includes. Used where tests only care
/// about override/union behavior across an include chain.
pub fn records_doc(field: &str, format: &str, includes: &[&str]) -> String {
    let includes_xml: String = includes
        .iter()
        .map(|file| format!("  <Include>{file}</Include>\n"))
        .collect();
    format!(
        r#"<Configuration>
  <Operations>
    <Operation name="GetRecords">
      <Parameters>
        <Parameter name="Title" field="{field}" type="SupportedISOQueryables"/>
      </Parameters>
      <OutputFormat>
        <Format>{format}</Format>
      </OutputFormat>
      <ConstraintLanguage>
        <Value>CQL_TEXT</Value>
      </ConstraintLanguage>
      <Typenames>
        <Typename name="Record" prefix="csw" namespace="http://www.opengis.net/cat/csw/2.0.2"/>
      </Typenames>
    </Operation>
  </Operations>
{includes_xml}</Configuration>
"#
    )
}

/// A GetCapabilities document overriding the keyword count, with optional
/// includes.
pub fn capabilities_doc(count: &str, includes: &[&str]) -> String {
    let includes_xml: String = includes
        .iter()
        .map(|file| format!("  <Include>{file}</Include>\n"))
        .collect();
    format!(
        r#"<Configuration>
  <Operations>
    <Operation name="GetCapabilities">
      <NumberOfKeywords>{count}</NumberOfKeywords>
    </Operation>
  </Operations>
{includes_xml}</Configuration>
"#
    )
}
