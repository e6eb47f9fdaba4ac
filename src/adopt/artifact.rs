use lazy_static::lazy_static;
use regex::Regex;
use std::path::PathBuf;

lazy_static! {
    /// Runs of characters that are not legal in a configuration identifier
    static ref INVALID_ID_CHARS: Regex = Regex::new(r"[^a-z0-9_]+").unwrap();
}

/// A fully-specified configuration unit produced by an import.
///
/// Self-describing: the (type, id) pair derives the storage filename, the
/// error-marker filename and the state address, so the commit phase needs
/// nothing beyond the artifact itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigArtifact {
    pub resource_type: String,
    /// Configuration identifier, sanitized from the remote key
    pub resource_id: String,
    /// Attribute map, in declaration order
    pub attributes: Vec<(String, String)>,
}

impl ConfigArtifact {
    pub fn new(
        resource_type: impl Into<String>,
        resource_id: &str,
        attributes: Vec<(String, String)>,
    ) -> Self {
        Self {
            resource_type: resource_type.into(),
            resource_id: sanitize_identifier(resource_id),
            attributes,
        }
    }

    /// State address of this unit, `<type>.<id>`
    pub fn address(&self) -> String {
        format!("{}.{}", self.resource_type, self.resource_id)
    }

    /// Storage filename, derived deterministically from type and id
    pub fn file_name(&self) -> PathBuf {
        PathBuf::from(format!("{}.{}.tf", self.resource_type, self.resource_id))
    }

    /// Filename the artifact is preserved under when a verbose commit fails
    pub fn error_file_name(&self) -> PathBuf {
        PathBuf::from(format!(
            "{}.{}.tf.error",
            self.resource_type, self.resource_id
        ))
    }

    /// Render the artifact as an HCL resource block
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.attributes.len() + 2);
        lines.push(format!(
            "resource \"{}\" \"{}\" {{",
            self.resource_type, self.resource_id
        ));

        for (key, value) in &self.attributes {
            lines.push(format!("  {} = \"{}\"", key, escape_hcl(value)));
        }

        lines.push("}".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

/// Sanitize a remote key into a valid configuration identifier
fn sanitize_identifier(raw: &str) -> String {
    let lowered = raw.to_ascii_lowercase();
    let replaced = INVALID_ID_CHARS.replace_all(&lowered, "_");
    let trimmed = replaced.trim_matches('_');

    if trimmed.is_empty() {
        return "resource".to_string();
    }

    if trimmed.chars().next().unwrap().is_ascii_digit() {
        format!("r_{}", trimmed)
    } else {
        trimmed.to_string()
    }
}

fn escape_hcl(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_resource_block() {
        let artifact = ConfigArtifact::new(
            "aws_iam_role",
            "deploy",
            vec![("name".to_string(), "deploy".to_string())],
        );

        assert_eq!(
            artifact.render(),
            "resource \"aws_iam_role\" \"deploy\" {\n  name = \"deploy\"\n}\n"
        );
    }

    #[test]
    fn test_render_escapes_values() {
        let artifact = ConfigArtifact::new(
            "aws_iam_role",
            "deploy",
            vec![(
                "assume_role_policy".to_string(),
                "{\"Version\": \"2012-10-17\"}".to_string(),
            )],
        );

        assert!(artifact
            .render()
            .contains("assume_role_policy = \"{\\\"Version\\\": \\\"2012-10-17\\\"}\""));
    }

    #[test]
    fn test_filename_derivation() {
        let artifact = ConfigArtifact::new("aws_s3_bucket", "other-bucket", vec![]);

        assert_eq!(artifact.address(), "aws_s3_bucket.other_bucket");
        assert_eq!(
            artifact.file_name(),
            PathBuf::from("aws_s3_bucket.other_bucket.tf")
        );
        assert_eq!(
            artifact.error_file_name(),
            PathBuf::from("aws_s3_bucket.other_bucket.tf.error")
        );
    }

    #[test]
    fn test_sanitize_identifier() {
        assert_eq!(sanitize_identifier("my-bucket"), "my_bucket");
        assert_eq!(sanitize_identifier("My Bucket"), "my_bucket");
        assert_eq!(sanitize_identifier("example.org."), "example_org");
        assert_eq!(sanitize_identifier("123-logs"), "r_123_logs");
        assert_eq!(sanitize_identifier("---"), "resource");
    }
}
