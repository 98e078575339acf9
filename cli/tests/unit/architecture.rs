//! Structural tests for architectural boundary enforcement.
//!
//! These tests scan source files to verify that the layer boundaries hold:
//! `domain/` is pure, `application/` talks to the outside only through
//! ports, and `infra/` never renders output.

use std::path::{Path, PathBuf};

/// Collect all `.rs` files under a directory recursively.
fn collect_rs_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_dir() {
                files.extend(collect_rs_files(&path));
            } else if path.extension().and_then(|e| e.to_str()) == Some("rs") {
                files.push(path);
            }
        }
    }
    files
}

fn src_dir(layer: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src").join(layer)
}

fn relative(file: &Path) -> String {
    file.strip_prefix(env!("CARGO_MANIFEST_DIR"))
        .unwrap_or(file)
        .display()
        .to_string()
}

/// Track brace depth and return whether a line is inside a `#[cfg(test)]` block.
struct CfgTestTracker {
    in_test_block: bool,
    brace_depth: i32,
    test_block_start_depth: i32,
}

impl CfgTestTracker {
    fn new() -> Self {
        Self {
            in_test_block: false,
            brace_depth: 0,
            test_block_start_depth: 0,
        }
    }

    /// Process a line and return `true` if it's inside a `#[cfg(test)]` block.
    fn process_line(&mut self, line: &str) -> bool {
        if line.trim().contains("#[cfg(test)]") {
            self.in_test_block = true;
            self.test_block_start_depth = self.brace_depth;
        }
        for ch in line.chars() {
            match ch {
                '{' => self.brace_depth += 1,
                '}' => {
                    self.brace_depth -= 1;
                    if self.in_test_block && self.brace_depth <= self.test_block_start_depth {
                        self.in_test_block = false;
                    }
                }
                _ => {}
            }
        }
        self.in_test_block
    }
}

/// Non-comment lines outside `#[cfg(test)]` blocks, with 1-based line numbers.
fn production_lines(path: &Path) -> Vec<(usize, String)> {
    let Ok(content) = std::fs::read_to_string(path) else {
        return Vec::new();
    };
    // Files declared only under `#[cfg(test)] mod x;` are test code.
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or_default();
    if name == "test_support.rs" || name == "tests.rs" {
        return Vec::new();
    }
    let mut tracker = CfgTestTracker::new();
    content
        .lines()
        .enumerate()
        .filter_map(|(i, line)| {
            let in_test = tracker.process_line(line);
            let trimmed = line.trim();
            if in_test || trimmed.starts_with("//") {
                None
            } else {
                Some((i + 1, line.to_string()))
            }
        })
        .collect()
}

fn violations_in(layer: &str, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for file in collect_rs_files(&src_dir(layer)) {
        let rel = relative(&file);
        for (lineno, line) in production_lines(&file) {
            if let Some(hit) = forbidden.iter().find(|f| line.contains(**f)) {
                violations.push(format!("{rel}:{lineno}: `{hit}`: {line}"));
            }
        }
    }
    violations
}

// ── Domain purity ─────────────────────────────────────────────────────────────

#[test]
fn domain_has_no_io_or_outer_layer_imports() {
    let violations = violations_in(
        "domain",
        &[
            "crate::infra",
            "crate::application",
            "crate::commands",
            "crate::output",
            "tokio",
            "std::fs",
            "std::process",
            "std::net",
        ],
    );
    assert!(
        violations.is_empty(),
        "domain/ must stay free of I/O and outer layers:\n{}",
        violations.join("\n")
    );
}

// ── Application layer boundary ───────────────────────────────────────────────

/// application/ must not import from infra/ or output/ layers.
#[test]
fn application_has_no_infra_or_output_imports() {
    let violations = violations_in(
        "application",
        &["crate::infra", "crate::output", "crate::commands"],
    );
    assert!(
        violations.is_empty(),
        "application/ must not import from infra/, output/ or commands/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn application_has_no_direct_process_or_terminal_io() {
    let violations = violations_in(
        "application",
        &[
            "tokio::process",
            "Command::new",
            "std::io::stdin",
            "tokio::io::stdin",
            "println!",
            "eprintln!",
        ],
    );
    assert!(
        violations.is_empty(),
        "application/ must reach processes and the terminal through ports:\n{}",
        violations.join("\n")
    );
}

// ── Infra layer boundary ──────────────────────────────────────────────────────

#[test]
fn infra_has_no_imports_from_commands_or_output() {
    let violations = violations_in("infra", &["crate::commands", "crate::output"]);
    assert!(
        violations.is_empty(),
        "infra/ must not import from commands/ or output/:\n{}",
        violations.join("\n")
    );
}

#[test]
fn infra_has_no_print_macros_outside_tests() {
    let violations = violations_in("infra", &["println!", "eprintln!"]);
    assert!(
        violations.is_empty(),
        "infra/ must not use println!/eprintln! outside #[cfg(test)]:\n{}",
        violations.join("\n")
    );
}

// ── Process spawning ──────────────────────────────────────────────────────────

#[test]
fn processes_are_spawned_only_in_infra() {
    let mut violations = Vec::new();
    for layer in ["domain", "application", "commands", "output"] {
        violations.extend(violations_in(
            layer,
            &["TokioCommandRunner::new", "Command::new"],
        ));
    }
    assert!(
        violations.is_empty(),
        "process spawning belongs in infra/:\n{}",
        violations.join("\n")
    );
}

// ── Confirmation ──────────────────────────────────────────────────────────────

/// Commands ask through the `ConfirmationPrompt` port, never by reading stdin.
#[test]
fn commands_use_standardized_confirmation() {
    let violations = violations_in("commands", &["read_line", "stdin()"]);
    assert!(
        violations.is_empty(),
        "commands/ must confirm through StdinPrompt:\n{}",
        violations.join("\n")
    );
}
