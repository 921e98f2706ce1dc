use anyhow::Result;
use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    fs::{File, create_dir_all},
    io::Write,
    path::Path,
};
use tracing::info;

/// Unified output format for CLI exports
#[derive(Debug, Clone, Copy, ValueEnum, Serialize, Deserialize)]
pub enum OutputFormat {
    #[value(name = "csv")]
    Csv,
    #[value(name = "json")]
    Json,
    #[value(name = "json-pretty")]
    JsonPretty,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => write!(f, "csv"),
            Self::Json => write!(f, "json"),
            Self::JsonPretty => write!(f, "json-pretty"),
        }
    }
}

/// Trait for types that can be exported to various formats
pub trait Exportable {
    fn export(&self, format: OutputFormat) -> Result<String>;
}

/// Common output options for CLI commands
#[derive(Args, Debug, Clone)]
pub struct OutputOptions {
    /// Output format for exports
    #[arg(short = 'f', long, default_value = "json-pretty")]
    pub output_format: OutputFormat,

    /// Directory to export files
    #[arg(short = 'o', long, value_name = "DIR")]
    pub output_dir: Option<String>,

    /// Specific output file path
    #[arg(long, value_name = "FILE")]
    pub output_file: Option<String>,
}

impl OutputOptions {
    /// Whether an export target was requested
    pub fn has_target(&self) -> bool {
        self.output_file.is_some() || self.output_dir.is_some()
    }

    /// Write exportable data to file or stdout
    pub fn write<T: Exportable>(&self, data: &T, default_filename: &str) -> Result<()> {
        let content = data.export(self.output_format)?;

        if let Some(ref file_path) = self.output_file {
            // Write to specific file
            let path = Path::new(file_path);
            if let Some(parent) = path.parent() {
                create_dir_all(parent)?;
            }
            let mut file = File::create(path)?;
            file.write_all(content.as_bytes())?;
            info!("Exported to: {}", path.display());
        } else if let Some(ref dir) = self.output_dir {
            // Write to directory with default filename
            let dir_path = Path::new(dir);
            create_dir_all(dir_path)?;

            let extension = match self.output_format {
                OutputFormat::Csv => "csv",
                OutputFormat::Json | OutputFormat::JsonPretty => "json",
            };

            let filename = format!("{default_filename}.{extension}");
            let file_path = dir_path.join(filename);

            let mut file = File::create(&file_path)?;
            file.write_all(content.as_bytes())?;
            info!("Exported to: {}", file_path.display());
        } else {
            // Write to stdout
            println!("{content}");
        }

        Ok(())
    }
}

/// Serialize a collection of rows to a CSV string with a header row
pub fn collection_to_csv<T: Serialize>(items: &[T]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for item in items {
        writer.serialize(item)?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}

/// Serialize a value to a JSON string
pub fn to_json_string<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
