use std::path::{Component, Path};

use crate::error::Result;

/// Namespace prefix shared by every generated identifier.
pub const TOOL_NAME_PREFIX: &str = "skills_";

/// Derive the tool identifier of a SKILL.md from its directory chain below
/// `root`.
///
/// Every directory component between the root and the file is kept,
/// hyphens become underscores and the parts are joined with `_`:
/// `<root>/tools/pdf-forms/SKILL.md` gives `skills_tools_pdf_forms`. The
/// same relative chain under two roots gives the same identifier.
pub fn generate_tool_name(skill_md: &Path, root: &Path) -> Result<String> {
    let relative = skill_md.strip_prefix(root)?;
    let components: Vec<String> = relative
        .parent()
        .into_iter()
        .flat_map(Path::components)
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().replace('-', "_")),
            _ => None,
        })
        .collect();
    Ok(format!("{TOOL_NAME_PREFIX}{}", components.join("_")))
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use {super::*, rstest::rstest};

    #[rstest]
    #[case("/r/pdf/SKILL.md", "skills_pdf")]
    #[case("/r/tools/pdf/SKILL.md", "skills_tools_pdf")]
    #[case("/r/ms-office/pdf-forms/SKILL.md", "skills_ms_office_pdf_forms")]
    #[case("/r/./a/./b/SKILL.md", "skills_a_b")]
    #[case("/r/SKILL.md", "skills_")]
    fn derives_identifier_from_relative_dirs(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(
            generate_tool_name(Path::new(path), Path::new("/r")).unwrap(),
            expected
        );
    }

    #[test]
    fn same_relative_chain_collides_across_roots() {
        let a =
            generate_tool_name(Path::new("/a/tools/pdf/SKILL.md"), Path::new("/a")).unwrap();
        let b =
            generate_tool_name(Path::new("/b/tools/pdf/SKILL.md"), Path::new("/b")).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn different_chains_with_same_leaf_differ() {
        let a =
            generate_tool_name(Path::new("/r/docs/pdf/SKILL.md"), Path::new("/r")).unwrap();
        let b =
            generate_tool_name(Path::new("/r/tools/pdf/SKILL.md"), Path::new("/r")).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn path_outside_root_is_an_error() {
        let result = generate_tool_name(Path::new("/elsewhere/pdf/SKILL.md"), Path::new("/r"));
        assert!(result.is_err());
    }
}
