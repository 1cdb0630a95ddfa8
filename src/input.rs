use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::InputError;

/// Company names from newline-delimited text. Blank lines and `#` comments are skipped.
pub fn parse_company_list(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

pub fn read_company_list(path: &Path) -> Result<Vec<String>, InputError> {
    let raw = fs::read_to_string(path).map_err(|source| {
        if source.kind() == ErrorKind::NotFound {
            InputError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    let companies = parse_company_list(&raw);
    if companies.is_empty() {
        tracing::warn!("no companies found in {}", path.display());
    } else {
        tracing::info!("loaded {} companies from {}", companies.len(), path.display());
    }
    Ok(companies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skips_blank_and_comment_lines() {
        let raw = "# seed list\nAcme Inc\n\n   \n  Globex  \n#Initech\nUmbrella Corp\r\n";
        assert_eq!(
            parse_company_list(raw),
            vec!["Acme Inc", "Globex", "Umbrella Corp"]
        );
    }

    #[test]
    fn test_missing_file() {
        let err = read_company_list(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(matches!(err, InputError::NotFound { .. }));
    }
}
