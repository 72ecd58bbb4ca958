//! Template customization: placeholder substitution and comment stripping
//!
//! Substitution is line-oriented and exact: a line is rewritten only
//! when it is byte-for-byte the canonical unfilled assignment for a
//! known placeholder. Everything else in the file is preserved
//! unchanged, so unrelated content can never be corrupted by a
//! substring match.

/// A known placeholder slot in a shell template
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderSpec {
    /// Shell variable name, e.g. `CONTAINER_NAME`
    pub key: &'static str,
    /// Exact unfilled value marking the placeholder
    pub sentinel: &'static str,
}

impl PlaceholderSpec {
    /// The canonical unfilled assignment line
    pub fn unfilled_line(&self) -> String {
        format!("readonly {}=\"{}\"", self.key, self.sentinel)
    }

    /// The assignment line carrying a concrete value
    pub fn filled_line(&self, value: &str) -> String {
        format!("readonly {}=\"{}\"", self.key, value)
    }
}

/// All placeholders shipkit knows how to fill
pub const PLACEHOLDERS: [PlaceholderSpec; 4] = [
    PlaceholderSpec {
        key: "CONTAINER_NAME",
        sentinel: "your-container-name",
    },
    PlaceholderSpec {
        key: "IMAGE_NAME",
        sentinel: "your-image-name:latest",
    },
    PlaceholderSpec {
        key: "DISPLAY_NAME",
        sentinel: "Your Service",
    },
    PlaceholderSpec {
        key: "DOCKERFILE_PATH",
        sentinel: "./Dockerfile",
    },
];

/// Concrete values for every placeholder, gathered from the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    pub container_name: String,
    pub image_name: String,
    pub display_name: String,
    pub dockerfile_path: String,
}

impl Bindings {
    fn values(&self) -> [&str; 4] {
        [
            &self.container_name,
            &self.image_name,
            &self.display_name,
            &self.dockerfile_path,
        ]
    }

    /// (unfilled line, filled line) pairs in placeholder order.
    ///
    /// Values are inserted verbatim; no quote escaping is performed.
    pub fn replacement_lines(&self) -> Vec<(String, String)> {
        PLACEHOLDERS
            .iter()
            .zip(self.values())
            .map(|(spec, value)| (spec.unfilled_line(), spec.filled_line(value)))
            .collect()
    }
}

/// Whether customization applies to this template at all
pub fn applies_to(relative_path: &str) -> bool {
    relative_path.ends_with(".sh")
}

/// Fill placeholder assignment lines with concrete values.
///
/// Returns the rewritten text and the number of lines replaced. Lines
/// that are not exactly an unfilled assignment, and all line endings,
/// pass through untouched.
pub fn substitute(contents: &str, bindings: &Bindings) -> (String, usize) {
    let table = bindings.replacement_lines();
    let mut out = String::with_capacity(contents.len());
    let mut replaced = 0;

    for segment in contents.split_inclusive('\n') {
        let (body, ending) = split_line_ending(segment);
        match table.iter().find(|(unfilled, _)| body == unfilled.as_str()) {
            Some((_, filled)) => {
                out.push_str(filled);
                out.push_str(ending);
                replaced += 1;
            }
            None => out.push_str(segment),
        }
    }

    (out, replaced)
}

fn split_line_ending(segment: &str) -> (&str, &str) {
    if let Some(body) = segment.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = segment.strip_suffix('\n') {
        (body, "\n")
    } else {
        (segment, "")
    }
}

/// Strip inline `#` comments from a shell template.
///
/// A comment starts at a `#` that is followed by whitespace; the run
/// of whitespace before it is removed as well. Shebang lines are left
/// alone, and `#` immediately followed by a non-space character (as in
/// `${VAR#pattern}`) is not treated as a comment. Runs of blank lines
/// at the end of the file are collapsed to one.
pub fn strip_inline_comments(contents: &str) -> String {
    let mut lines: Vec<String> = contents
        .lines()
        .map(|line| {
            if line.trim_start().starts_with("#!") {
                line.to_string()
            } else {
                strip_line(line)
            }
        })
        .collect();

    while lines.len() > 1
        && lines[lines.len() - 1].trim().is_empty()
        && lines[lines.len() - 2].trim().is_empty()
    {
        lines.pop();
    }

    let mut out = lines.join("\n");
    if contents.ends_with('\n') {
        out.push('\n');
    }
    out
}

fn strip_line(line: &str) -> String {
    let mut chars = line.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if c == '#' {
            if let Some((_, next)) = chars.peek() {
                if next.is_whitespace() {
                    return line[..i].trim_end().to_string();
                }
            }
        }
    }
    line.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings() -> Bindings {
        Bindings {
            container_name: "webapp".to_string(),
            image_name: "webapp:1.2".to_string(),
            display_name: "Web App".to_string(),
            dockerfile_path: "./docker/Dockerfile".to_string(),
        }
    }

    #[test]
    fn substitute_fills_exact_sentinel_lines() {
        let input = "#!/bin/sh\nreadonly CONTAINER_NAME=\"your-container-name\"\necho run\n";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(
            output,
            "#!/bin/sh\nreadonly CONTAINER_NAME=\"webapp\"\necho run\n"
        );
        assert_eq!(replaced, 1);
    }

    #[test]
    fn substitute_fills_every_placeholder() {
        let input = "\
readonly CONTAINER_NAME=\"your-container-name\"
readonly IMAGE_NAME=\"your-image-name:latest\"
readonly DISPLAY_NAME=\"Your Service\"
readonly DOCKERFILE_PATH=\"./Dockerfile\"
";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(
            output,
            "\
readonly CONTAINER_NAME=\"webapp\"
readonly IMAGE_NAME=\"webapp:1.2\"
readonly DISPLAY_NAME=\"Web App\"
readonly DOCKERFILE_PATH=\"./docker/Dockerfile\"
"
        );
        assert_eq!(replaced, 4);
    }

    #[test]
    fn substitute_requires_full_line_match() {
        // Indented, suffixed, or partially matching lines stay as-is
        let input = "  readonly CONTAINER_NAME=\"your-container-name\"\n\
readonly CONTAINER_NAME=\"your-container-name\" # note\n\
CONTAINER_NAME=\"your-container-name\"\n";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(output, input);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn substitute_without_placeholders_is_byte_identical() {
        let input = "#!/bin/sh\necho \"your-container-name is mentioned here\"\n";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(output, input);
        assert_eq!(replaced, 0);
    }

    #[test]
    fn substitute_preserves_missing_trailing_newline() {
        let input = "readonly DISPLAY_NAME=\"Your Service\"";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(output, "readonly DISPLAY_NAME=\"Web App\"");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn substitute_preserves_crlf_endings() {
        let input = "readonly DISPLAY_NAME=\"Your Service\"\r\necho hi\r\n";
        let (output, replaced) = substitute(input, &bindings());
        assert_eq!(output, "readonly DISPLAY_NAME=\"Web App\"\r\necho hi\r\n");
        assert_eq!(replaced, 1);
    }

    #[test]
    fn substitute_inserts_values_verbatim() {
        let mut b = bindings();
        b.display_name = "He said \"hi\"".to_string();
        let (output, _) = substitute("readonly DISPLAY_NAME=\"Your Service\"\n", &b);
        assert_eq!(output, "readonly DISPLAY_NAME=\"He said \"hi\"\"\n");
    }

    #[test]
    fn applies_to_shell_templates_only() {
        assert!(applies_to("docker/start.sh"));
        assert!(!applies_to("docker/status.py"));
        assert!(!applies_to("docker/README.md"));
    }

    #[test]
    fn strip_removes_inline_comments() {
        let input = "#!/bin/sh\necho hi # greet the user\n";
        assert_eq!(strip_inline_comments(input), "#!/bin/sh\necho hi\n");
    }

    #[test]
    fn strip_removes_full_line_comments_but_keeps_the_line() {
        let input = "#!/bin/sh\n# a comment\necho hi\n";
        assert_eq!(strip_inline_comments(input), "#!/bin/sh\n\necho hi\n");
    }

    #[test]
    fn strip_keeps_shebang_and_parameter_expansion() {
        let input = "#!/usr/bin/env bash\necho ${FILE#prefix}\n";
        assert_eq!(strip_inline_comments(input), input);
    }

    #[test]
    fn strip_keeps_hash_without_following_space() {
        let input = "echo '#hashtag'\n";
        assert_eq!(strip_inline_comments(input), input);
    }

    #[test]
    fn strip_collapses_trailing_blank_lines() {
        let input = "echo hi\n\n\n\n";
        assert_eq!(strip_inline_comments(input), "echo hi\n\n");
    }

    #[test]
    fn stripped_placeholder_lines_still_substitute() {
        let input = "#!/bin/sh\nreadonly CONTAINER_NAME=\"your-container-name\" # fill me\n";
        let stripped = strip_inline_comments(input);
        let (output, replaced) = substitute(&stripped, &bindings());
        assert_eq!(output, "#!/bin/sh\nreadonly CONTAINER_NAME=\"webapp\"\n");
        assert_eq!(replaced, 1);
    }
}
