//! Target resolution
//!
//! Turns raw config sections into an ordered collection of build targets
//! and selects which of them an invocation actually builds.

use std::path::{Path, PathBuf};

use crate::core::settings::{self, Settings, TargetSection};
use crate::error::{BuildError, ConfigError};

/// Build strategy for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    /// Objects are handed to the external linker
    Executable,
    /// Objects are concatenated into a flat archive
    StaticLibrary,
}

/// A fully resolved build target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDescriptor {
    /// Target name; also names the object subdirectory and the artifact
    pub name: String,
    /// Build strategy
    pub kind: TargetKind,
    /// Source directory, relative to the project directory
    pub source_root: PathBuf,
}

impl TargetDescriptor {
    /// Finalize a descriptor from its raw config section.
    ///
    /// This is where an unrecognized `type` value surfaces, so the check
    /// happens when the target is reached, not at resolution time.
    pub fn from_section(name: &str, section: &TargetSection) -> Result<Self, BuildError> {
        let kind = match section.target_type.as_str() {
            "exec" => TargetKind::Executable,
            "static" => TargetKind::StaticLibrary,
            other => {
                return Err(BuildError::UnknownTargetType {
                    target: name.to_string(),
                    type_name: other.to_string(),
                })
            }
        };

        Ok(Self {
            name: name.to_string(),
            kind,
            source_root: section.source.clone(),
        })
    }
}

/// Resolve the ordered target collection for this invocation.
///
/// Explicit `[build.<name>]` sections are used exactly as declared; with
/// none present, a single default target is synthesized, named after the
/// project directory and rooted at `src`.
pub fn resolve_targets(
    project_dir: &Path,
    settings: &Settings,
) -> Result<Vec<(String, TargetSection)>, ConfigError> {
    if settings.build.targets.is_empty() {
        return Ok(vec![(
            default_target_name(project_dir),
            TargetSection {
                source: PathBuf::from("src"),
                target_type: settings::default_target_type(),
            },
        )]);
    }

    settings
        .build
        .targets
        .iter()
        .map(|(name, value)| {
            let section: TargetSection =
                value
                    .clone()
                    .try_into()
                    .map_err(|e: toml::de::Error| ConfigError::TargetSection {
                        name: name.clone(),
                        error: e.to_string(),
                    })?;
            Ok((name.clone(), section))
        })
        .collect()
}

/// Pick the targets to build, in build order.
///
/// An empty request selects every resolved target in declaration order.
/// Otherwise every requested name is validated up front; an unknown name
/// fails before any building starts.
pub fn select_targets<'a>(
    resolved: &'a [(String, TargetSection)],
    requested: &[String],
) -> Result<Vec<&'a (String, TargetSection)>, BuildError> {
    if requested.is_empty() {
        return Ok(resolved.iter().collect());
    }

    requested
        .iter()
        .map(|name| {
            resolved
                .iter()
                .find(|(candidate, _)| candidate == name)
                .ok_or_else(|| BuildError::TargetNotFound { name: name.clone() })
        })
        .collect()
}

fn default_target_name(project_dir: &Path) -> String {
    project_dir
        .file_name()
        .map_or_else(|| String::from("main"), |n| n.to_string_lossy().into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::Settings;
    use proptest::prelude::*;

    fn resolved_from(content: &str) -> Vec<(String, TargetSection)> {
        let settings = Settings::from_toml(content).expect("Failed to parse settings");
        resolve_targets(Path::new("/projects/demo"), &settings).expect("Failed to resolve targets")
    }

    #[test]
    fn test_explicit_targets_resolve_in_declaration_order() {
        let resolved = resolved_from(
            r#"
[build.game]
source = "game/src"

[build.engine]
source = "engine/src"
type = "static"
"#,
        );

        let names: Vec<&str> = resolved.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["game", "engine"]);
        assert_eq!(resolved[1].1.target_type, "static");
        assert_eq!(resolved[1].1.source, PathBuf::from("engine/src"));
    }

    #[test]
    fn test_default_target_synthesized_from_project_dir() {
        let settings = Settings::default();
        let resolved = resolve_targets(Path::new("/projects/demo"), &settings)
            .expect("Failed to resolve targets");

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, "demo");
        assert_eq!(resolved[0].1.source, PathBuf::from("src"));
        assert_eq!(resolved[0].1.target_type, "exec");
    }

    #[test]
    fn test_target_section_missing_source_is_a_config_error() {
        let settings = Settings::from_toml("[build.broken]\ntype = \"exec\"\n")
            .expect("Failed to parse settings");

        let result = resolve_targets(Path::new("/projects/demo"), &settings);

        assert!(matches!(
            result,
            Err(ConfigError::TargetSection { ref name, .. }) if name == "broken"
        ));
    }

    #[test]
    fn test_empty_request_selects_all_in_order() {
        let resolved = resolved_from(
            r#"
[build.b]
source = "b"

[build.a]
source = "a"
"#,
        );

        let selected = select_targets(&resolved, &[]).expect("Failed to select targets");

        let names: Vec<&str> = selected.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_requested_targets_come_back_in_request_order() {
        let resolved = resolved_from(
            r#"
[build.a]
source = "a"

[build.b]
source = "b"
"#,
        );

        let requested = vec!["b".to_string(), "a".to_string()];
        let selected = select_targets(&resolved, &requested).expect("Failed to select targets");

        let names: Vec<&str> = selected.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_unknown_requested_target_fails() {
        let resolved = resolved_from("[build.a]\nsource = \"a\"\n");

        let requested = vec!["a".to_string(), "missing".to_string()];
        let result = select_targets(&resolved, &requested);

        assert!(matches!(
            result,
            Err(BuildError::TargetNotFound { ref name }) if name == "missing"
        ));
    }

    #[test]
    fn test_descriptor_kinds() {
        let section = TargetSection {
            source: PathBuf::from("src"),
            target_type: "static".to_string(),
        };
        let descriptor =
            TargetDescriptor::from_section("mylib", &section).expect("Failed to build descriptor");
        assert_eq!(descriptor.kind, TargetKind::StaticLibrary);

        let section = TargetSection {
            source: PathBuf::from("src"),
            target_type: "exec".to_string(),
        };
        let descriptor =
            TargetDescriptor::from_section("game", &section).expect("Failed to build descriptor");
        assert_eq!(descriptor.kind, TargetKind::Executable);
    }

    #[test]
    fn test_unknown_type_is_rejected_with_its_name() {
        let section = TargetSection {
            source: PathBuf::from("src"),
            target_type: "shared".to_string(),
        };

        let result = TargetDescriptor::from_section("mylib", &section);

        assert!(matches!(
            result,
            Err(BuildError::UnknownTargetType { ref target, ref type_name })
                if target == "mylib" && type_name == "shared"
        ));
    }

    proptest! {
        /// Selecting a permutation of declared names yields exactly that
        /// permutation, independent of declaration order.
        #[test]
        fn prop_selection_preserves_request_order(
            mut names in proptest::collection::vec(crate::test_utils::generators::target_name(), 1..6)
        ) {
            names.sort();
            names.dedup();

            let resolved: Vec<(String, TargetSection)> = names
                .iter()
                .map(|n| {
                    (
                        n.clone(),
                        TargetSection {
                            source: PathBuf::from("src"),
                            target_type: "exec".to_string(),
                        },
                    )
                })
                .collect();

            let mut requested = names.clone();
            requested.reverse();

            let selected = select_targets(&resolved, &requested).expect("selection failed");
            let got: Vec<String> = selected.iter().map(|(n, _)| n.clone()).collect();
            prop_assert_eq!(got, requested);
        }
    }
}
