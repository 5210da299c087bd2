use std::path::{Path, PathBuf};

use log::info;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::banner::{BannerTables, OutputRecord};
use crate::errors::EmitError;
use crate::file_utils::FileManager;

/// Plain scalars a YAML 1.1 reader resolves to bool, null, number or timestamp
static YAML11_NON_STRING: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"y|Y|yes|Yes|YES|n|N|no|No|NO|true|True|TRUE|false|False|FALSE|on|On|ON|off|Off|OFF",
        r"|~|null|Null|NULL",
        r"|[-+]?0b[01_]+|[-+]?0x[0-9a-fA-F_]+|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])*",
        r"|[-+]?(?:[0-9][0-9_]*)?\.[0-9.]*(?:[eE][-+]?[0-9]+)?",
        r"|[-+]?[0-9][0-9_]*(?::[0-5]?[0-9])+\.[0-9_]*",
        r"|[-+]?\.(?:inf|Inf|INF)|\.(?:nan|NaN|NAN)",
        r"|[0-9]{4}-[0-9]{1,2}-[0-9]{1,2}",
        r"(?:(?:[Tt]|[ \t]+)[0-9]{1,2}:[0-9]{2}:[0-9]{2}(?:\.[0-9]*)?(?:[ \t]*Z|[ \t]*[-+][0-9]{1,2}(?::[0-9]{2})?)?)?",
        r"|<<|=",
        r")$"
    ))
    .unwrap()
});

/// One emitted line: indentation, optional sequence dash, optional mapping key, value
static SCALAR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^( *)((?:- )?(?:[a-z]+: )?)(.*)$").unwrap()
});

/// Render banner records as a block-style YAML sequence
pub fn to_yaml(records: &[OutputRecord]) -> Result<String, EmitError> {
    let yaml = serde_yaml::to_string(records)?;
    Ok(quote_yaml11_scalars(&yaml))
}

/// Single-quote plain scalars that YAML 1.1 readers would not load as strings.
///
/// serde_yaml only quotes what its own YAML 1.2 resolver treats as non-strings,
/// so values like `2025-02-02 10:00:00` or `yes` come out bare.
fn quote_yaml11_scalars(yaml: &str) -> String {
    let mut out = String::with_capacity(yaml.len() + 64);
    // Indent of a literal or folded block scalar whose body lines are skipped
    let mut block_indent: Option<usize> = None;

    for line in yaml.lines() {
        let indent = line.len() - line.trim_start_matches(' ').len();
        if let Some(parent) = block_indent {
            if indent > parent || line.trim().is_empty() {
                out.push_str(line);
                out.push('\n');
                continue;
            }
            block_indent = None;
        }

        match SCALAR_LINE.captures(line) {
            Some(caps) => {
                let value = &caps[3];
                if value.starts_with('|') || value.starts_with('>') {
                    block_indent = Some(indent);
                    out.push_str(line);
                } else if YAML11_NON_STRING.is_match(value) {
                    out.push_str(&caps[1]);
                    out.push_str(&caps[2]);
                    out.push('\'');
                    out.push_str(&value.replace('\'', "''"));
                    out.push('\'');
                } else {
                    out.push_str(line);
                }
            }
            None => out.push_str(line),
        }
        out.push('\n');
    }

    out
}

/// Write one YAML file, replacing any previous content
pub fn write_yaml<P: AsRef<Path>>(path: P, records: &[OutputRecord]) -> Result<(), EmitError> {
    let path = path.as_ref();
    let yaml = to_yaml(records)?;
    FileManager::write_to_file(path, &yaml).map_err(|e| EmitError::Write {
        path: path.display().to_string(),
        message: format!("{:#}", e),
    })
}

/// Destination files for one site's tables
#[derive(Debug, Clone, PartialEq)]
pub struct OutputPaths {
    pub characters: PathBuf,
    pub items: PathBuf,
}

/// Write both tables of a site to their files
pub fn write_tables(tables: &BannerTables, paths: &OutputPaths) -> Result<(), EmitError> {
    write_yaml(&paths.characters, &tables.characters)?;
    write_yaml(&paths.items, &tables.items)?;
    info!(
        "Wrote {} and {}",
        paths.characters.display(),
        paths.items.display()
    );
    Ok(())
}
