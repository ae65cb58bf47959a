use crate::{models::ToolDescriptor, Error, Result};
use std::path::Path;
use std::str::FromStr;

/// How a tool list gets written out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Aligned plain-text columns, for terminals and `.txt` files
    Table,
    Json,
    Csv,
    Markdown,
}

impl ExportFormat {
    /// Guess the format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "txt" => Some(Self::Table),
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            "md" | "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Self::Table => "txt",
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Markdown => "md",
        }
    }
}

/// Format names as typed on the command line: `table`, `json`, `csv`, `md`
impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        if name.eq_ignore_ascii_case("table") {
            return Ok(Self::Table);
        }
        Self::from_extension(name).ok_or_else(|| {
            Error::ExportError(format!(
                "Unknown format '{}' (try table, json, csv or md)",
                name
            ))
        })
    }
}

/// Renders tool lists and writes them to disk
pub struct Exporter;

impl Exporter {
    /// Write to `path`, picking the format from its extension
    pub fn export_to_file<P: AsRef<Path>>(tools: &[&ToolDescriptor], path: P) -> Result<()> {
        let path = path.as_ref();
        let format = ExportFormat::from_path(path).ok_or_else(|| {
            Error::ExportError(format!(
                "Can't tell the format of {}; use .txt, .json, .csv or .md",
                path.display()
            ))
        })?;

        Self::export_to_file_with_format(tools, path, format)
    }

    pub fn export_to_file_with_format<P: AsRef<Path>>(
        tools: &[&ToolDescriptor],
        path: P,
        format: ExportFormat,
    ) -> Result<()> {
        let path = path.as_ref();
        let content = Self::render(tools, format)?;
        std::fs::write(path, content).map_err(|e| {
            Error::ExportError(format!("Failed to write {}: {}", path.display(), e))
        })?;
        tracing::debug!("Exported {} tools to {}", tools.len(), path.display());
        Ok(())
    }

    pub fn render(tools: &[&ToolDescriptor], format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Table => Ok(Self::to_table(tools)),
            ExportFormat::Json => Self::to_json(tools),
            ExportFormat::Csv => Ok(Self::to_csv(tools)),
            ExportFormat::Markdown => Ok(Self::to_markdown(tools)),
        }
    }

    /// One row per tool, featured ones starred
    pub fn to_table(tools: &[&ToolDescriptor]) -> String {
        let mut output = format!("{:>3}  {:<24} {:<12} {}\n", "ID", "NAME", "PLATFORM", "CATEGORY");
        for tool in tools {
            let star = if tool.featured { " ⭐" } else { "" };
            output.push_str(&format!(
                "{:>3}  {:<24} {:<12} {}{}\n",
                tool.id, tool.name, tool.platform, tool.category, star
            ));
        }
        output
    }

    pub fn to_json(tools: &[&ToolDescriptor]) -> Result<String> {
        Ok(serde_json::to_string_pretty(tools)?)
    }

    pub fn to_csv(tools: &[&ToolDescriptor]) -> String {
        let mut output = String::from("Id,Name,Platform,Category,Featured,Description\n");

        for tool in tools {
            output.push_str(&format!(
                "{},{},{},{},{},{}\n",
                tool.id,
                Self::escape_csv(&tool.name),
                Self::escape_csv(&tool.platform),
                Self::escape_csv(tool.category.label()),
                tool.featured,
                Self::escape_csv(&tool.description),
            ));
        }

        output
    }

    pub fn to_markdown(tools: &[&ToolDescriptor]) -> String {
        let mut output = String::new();

        output.push_str("# ToolHub Catalog\n\n");
        output.push_str(&format!("Total tools: {}\n\n", tools.len()));
        output.push_str("| | Tool | Platform | Category | Description |\n");
        output.push_str("|---|------|----------|----------|-------------|\n");

        for tool in tools {
            let name = if tool.featured {
                format!("**{}** ⭐", tool.name)
            } else {
                tool.name.clone()
            };
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                tool.icon,
                name,
                tool.platform,
                tool.category,
                tool.description.replace('|', "\\|"),
            ));
        }

        output
    }

    /// Quote a field when it would otherwise split the row
    fn escape_csv(field: &str) -> String {
        if field.contains([',', '"', '\n']) {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }
}
