//! Scanner module - Resolution of the files a run operates on

use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::ConfigError;

/// Read a manifest: one path per line, trimmed, blank lines dropped
pub fn read_manifest(path: &Path) -> Result<Vec<String>, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::ManifestRead {
        path: path.display().to_string(),
        source: e,
    })?;

    Ok(parse_manifest(&content))
}

/// Parse manifest content
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Keep only the paths that exist
pub fn existing(paths: &[String]) -> Vec<String> {
    paths
        .iter()
        .filter(|p| {
            let exists = Path::new(p.as_str()).exists();
            if !exists {
                debug!(path = %p, "Skipping missing supplementary file");
            }
            exists
        })
        .cloned()
        .collect()
}

/// Resolve the files to annotate.
///
/// Explicit paths win. Otherwise the manifest entries come first, followed by
/// the supplementary files that exist and are not already listed. Manifest
/// entries are kept even when missing so the driver can report them.
pub fn annotation_targets(config: &Config, explicit: &[String]) -> Result<Vec<String>, ConfigError> {
    if !explicit.is_empty() {
        return Ok(explicit.to_vec());
    }

    let mut targets = read_manifest(&config.manifest).map_err(|e| {
        warn!(manifest = %config.manifest.display(), "Cannot read manifest");
        e
    })?;
    for extra in existing(&config.supplementary_files) {
        if !targets.contains(&extra) {
            targets.push(extra);
        }
    }

    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_manifest_trims_and_drops_blank_lines() {
        let parsed = parse_manifest("  .env  \n\n\t\napp/.env.example\r\n");
        assert_eq!(parsed, vec![".env".to_string(), "app/.env.example".to_string()]);
    }

    #[test]
    fn test_existing_filters_missing() {
        let temp_dir = TempDir::new().unwrap();
        let present = temp_dir.path().join("present.conf");
        fs::write(&present, "").unwrap();

        let paths = vec![
            present.display().to_string(),
            temp_dir.path().join("absent.conf").display().to_string(),
        ];

        assert_eq!(existing(&paths), vec![present.display().to_string()]);
    }

    #[test]
    fn test_annotation_targets_manifest_then_supplementary() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let manifest = root.join("files.txt");
        let extra = root.join("redis.conf");
        fs::write(&manifest, "a/.env\nmissing/.env\n").unwrap();
        fs::write(&extra, "").unwrap();

        let config = Config {
            manifest,
            supplementary_files: vec![
                extra.display().to_string(),
                root.join("nope.conf").display().to_string(),
            ],
            ..Default::default()
        };

        let targets = annotation_targets(&config, &[]).unwrap();
        assert_eq!(
            targets,
            vec![
                "a/.env".to_string(),
                "missing/.env".to_string(),
                extra.display().to_string(),
            ]
        );
    }

    #[test]
    fn test_supplementary_file_listed_in_manifest_is_not_repeated() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let extra = root.join("docker-compose.yml");
        fs::write(&extra, "").unwrap();
        let manifest = root.join("files.txt");
        fs::write(&manifest, format!("{}\n", extra.display())).unwrap();

        let config = Config {
            manifest,
            supplementary_files: vec![extra.display().to_string()],
            ..Default::default()
        };

        let targets = annotation_targets(&config, &[]).unwrap();
        assert_eq!(targets, vec![extra.display().to_string()]);
    }

    #[test]
    fn test_explicit_targets_skip_manifest() {
        let config = Config {
            manifest: "/definitely/not/here.txt".into(),
            ..Default::default()
        };

        let targets = annotation_targets(&config, &["x.env".to_string()]).unwrap();
        assert_eq!(targets, vec!["x.env".to_string()]);
    }

    #[test]
    fn test_missing_manifest_is_an_error() {
        let config = Config {
            manifest: "/definitely/not/here.txt".into(),
            ..Default::default()
        };

        assert!(matches!(
            annotation_targets(&config, &[]),
            Err(ConfigError::ManifestRead { .. })
        ));
    }
}
