use std::path::Path;

use serde::de::DeserializeOwned;

use crate::{
    error::ManifestError,
    types::{ParsedManifest, SkillManifest},
};

/// Frontmatter delimiter; must open the file and close the frontmatter.
const DELIMITER: &str = "---";

/// Shortest description accepted, so listings stay useful.
pub const MIN_DESCRIPTION_CHARS: usize = 10;

/// Validate a skill name: lowercase ASCII letters, digits and hyphens, with at
/// least one letter.
pub fn validate_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && name.chars().any(|c| c.is_ascii_lowercase())
}

/// Read a SKILL.md from disk and validate it, including the rule that the
/// frontmatter `name` equals the parent directory name.
pub fn load_manifest(path: &Path) -> Result<ParsedManifest, ManifestError> {
    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let parsed = parse_manifest(&content)?;

    let directory = path
        .parent()
        .and_then(Path::file_name)
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if parsed.manifest.name != directory {
        return Err(ManifestError::NameDirectoryMismatch {
            name: parsed.manifest.name,
            directory,
        });
    }

    Ok(parsed)
}

/// Split SKILL.md content into validated frontmatter and trimmed body.
pub fn parse_manifest(content: &str) -> Result<ParsedManifest, ManifestError> {
    if !content.starts_with(DELIMITER) {
        return Err(ManifestError::MissingFrontmatter);
    }

    // Leading empty segment, frontmatter, body. The body may contain `---`.
    let mut parts = content.splitn(3, DELIMITER);
    let (Some(_), Some(frontmatter), Some(body)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(ManifestError::IncompleteFrontmatter);
    };

    let value: serde_yaml::Value =
        serde_yaml::from_str(frontmatter.trim()).map_err(ManifestError::MalformedFrontmatter)?;

    Ok(ParsedManifest {
        manifest: bind_manifest(value)?,
        body: body.trim().to_string(),
    })
}

fn bind_manifest(value: serde_yaml::Value) -> Result<SkillManifest, ManifestError> {
    let serde_yaml::Value::Mapping(mut fields) = value else {
        return Err(ManifestError::schema("frontmatter", "expected a mapping of fields"));
    };

    let name: String = take_field(&mut fields, "name")?
        .ok_or_else(|| ManifestError::schema("name", "missing required field"))?;
    if !validate_name(&name) {
        return Err(ManifestError::schema(
            "name",
            format!("\"{name}\" must be lowercase alphanumeric with hyphens"),
        ));
    }

    let description: String = take_field(&mut fields, "description")?
        .ok_or_else(|| ManifestError::schema("description", "missing required field"))?;
    if description.chars().count() < MIN_DESCRIPTION_CHARS {
        return Err(ManifestError::schema(
            "description",
            format!("must be at least {MIN_DESCRIPTION_CHARS} characters for discoverability"),
        ));
    }

    let allowed_tools = match take_field(&mut fields, "allowed_tools")? {
        Some(tools) => Some(tools),
        None => take_field(&mut fields, "allowed-tools")?,
    };

    Ok(SkillManifest {
        name,
        description,
        license: take_field(&mut fields, "license")?,
        allowed_tools,
        metadata: take_field(&mut fields, "metadata")?,
    })
}

/// Remove `field` from the mapping and bind it to `T`. Absent and `null`
/// both mean "not set".
fn take_field<T: DeserializeOwned>(
    fields: &mut serde_yaml::Mapping,
    field: &'static str,
) -> Result<Option<T>, ManifestError> {
    match fields.remove(field) {
        None | Some(serde_yaml::Value::Null) => Ok(None),
        Some(value) => serde_yaml::from_value(value)
            .map(Some)
            .map_err(|e| ManifestError::schema(field, e.to_string())),
    }
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    fn schema_field(err: ManifestError) -> &'static str {
        match err {
            ManifestError::SchemaViolation { field, .. } => field,
            other => panic!("expected SchemaViolation, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_full_manifest() {
        let content = r#"---
name: pdf
description: Extract text and tables from PDF files
license: Apache-2.0
allowed_tools:
  - bash
  - read
metadata:
  version: "1.2"
  author: docs-team
---

# PDF

Use `pdftotext` first.
"#;
        let parsed = parse_manifest(content).unwrap();
        let m = &parsed.manifest;
        assert_eq!(m.name, "pdf");
        assert_eq!(m.description, "Extract text and tables from PDF files");
        assert_eq!(m.license.as_deref(), Some("Apache-2.0"));
        assert_eq!(m.allowed_tools, Some(vec!["bash".into(), "read".into()]));
        let metadata = m.metadata.as_ref().unwrap();
        assert_eq!(metadata["version"], "1.2");
        assert_eq!(metadata["author"], "docs-team");
        assert_eq!(parsed.body, "# PDF\n\nUse `pdftotext` first.");
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let parsed =
            parse_manifest("---\nname: xlsx\ndescription: Spreadsheet helper\n---\nBody")
                .unwrap();
        assert!(parsed.manifest.license.is_none());
        assert!(parsed.manifest.allowed_tools.is_none());
        assert!(parsed.manifest.metadata.is_none());
    }

    #[test]
    fn test_allowed_tools_hyphenated_alias() {
        let content = "---\nname: git-skill\ndescription: Git helper skill\n\
                       allowed-tools: [Bash, Read]\n---\nBody.\n";
        let parsed = parse_manifest(content).unwrap();
        assert_eq!(
            parsed.manifest.allowed_tools,
            Some(vec!["Bash".into(), "Read".into()])
        );
    }

    #[test]
    fn test_body_may_contain_delimiter() {
        let content = "---\nname: notes\ndescription: Notes with rules\n---\nintro\n---\noutro\n";
        let parsed = parse_manifest(content).unwrap();
        assert_eq!(parsed.body, "intro\n---\noutro");
    }

    #[test]
    fn test_missing_frontmatter() {
        let err = parse_manifest("# No frontmatter\nJust markdown.").unwrap_err();
        assert!(matches!(err, ManifestError::MissingFrontmatter));
    }

    #[test]
    fn test_leading_whitespace_is_not_frontmatter() {
        let err = parse_manifest("\n---\nname: pdf\ndescription: long enough\n---\n").unwrap_err();
        assert!(matches!(err, ManifestError::MissingFrontmatter));
    }

    #[test]
    fn test_missing_closing_delimiter() {
        let err = parse_manifest("---\nname: test\nno closing\n").unwrap_err();
        assert!(matches!(err, ManifestError::IncompleteFrontmatter));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = parse_manifest("---\nname: [unclosed\n---\nbody").unwrap_err();
        assert!(matches!(err, ManifestError::MalformedFrontmatter(_)));
    }

    #[test]
    fn test_non_mapping_frontmatter() {
        let err = parse_manifest("---\n- just\n- a list\n---\nbody").unwrap_err();
        assert_eq!(schema_field(err), "frontmatter");
    }

    #[test]
    fn test_missing_name() {
        let err = parse_manifest("---\ndescription: no name given here\n---\n").unwrap_err();
        assert_eq!(schema_field(err), "name");
    }

    #[test]
    fn test_missing_description() {
        let err = parse_manifest("---\nname: pdf\n---\n").unwrap_err();
        assert_eq!(schema_field(err), "description");
    }

    #[rstest]
    #[case("Bad-Name")]
    #[case("has space")]
    #[case("under_score")]
    #[case("123")]
    #[case("\"-\"")]
    #[case("\"\"")]
    fn test_invalid_name_rejected(#[case] name: &str) {
        let content = format!("---\nname: {name}\ndescription: a valid description\n---\n");
        let err = parse_manifest(&content).unwrap_err();
        assert_eq!(schema_field(err), "name");
    }

    #[rstest]
    #[case("pdf", true)]
    #[case("ms-office-2", true)]
    #[case("a", true)]
    #[case("", false)]
    #[case("PDF", false)]
    #[case("42", false)]
    #[case("caf\u{e9}", false)]
    fn test_validate_name(#[case] name: &str, #[case] valid: bool) {
        assert_eq!(validate_name(name), valid);
    }

    #[test]
    fn test_description_length_boundary() {
        let nine = parse_manifest("---\nname: pdf\ndescription: \"123456789\"\n---\n").unwrap_err();
        assert_eq!(schema_field(nine), "description");

        let ten = parse_manifest("---\nname: pdf\ndescription: \"1234567890\"\n---\n").unwrap();
        assert_eq!(ten.manifest.description, "1234567890");
    }

    #[test]
    fn test_wrong_field_type_names_the_field() {
        let err = parse_manifest(
            "---\nname: pdf\ndescription: valid description\nallowed_tools: bash\n---\n",
        )
        .unwrap_err();
        assert_eq!(schema_field(err), "allowed_tools");

        let err = parse_manifest(
            "---\nname: pdf\ndescription: valid description\nmetadata: [a, b]\n---\n",
        )
        .unwrap_err();
        assert_eq!(schema_field(err), "metadata");
    }

    #[test]
    fn test_load_manifest_checks_directory_name() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("pdf");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            "---\nname: docx\ndescription: Word documents helper\n---\nBody",
        )
        .unwrap();

        match load_manifest(&dir.join("SKILL.md")).unwrap_err() {
            ManifestError::NameDirectoryMismatch { name, directory } => {
                assert_eq!(name, "docx");
                assert_eq!(directory, "pdf");
            },
            other => panic!("expected NameDirectoryMismatch, got {other:?}"),
        }
    }

    #[test]
    fn test_load_manifest_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("pdf");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(
            dir.join("SKILL.md"),
            "---\nname: pdf\ndescription: PDF manipulation toolkit\n---\n\n  Read the PDF.  \n",
        )
        .unwrap();

        let parsed = load_manifest(&dir.join("SKILL.md")).unwrap();
        assert_eq!(parsed.manifest.name, "pdf");
        assert_eq!(parsed.body, "Read the PDF.");
    }

    #[test]
    fn test_load_manifest_missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        let err = load_manifest(&tmp.path().join("nope/SKILL.md")).unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
    }
}
