//! Parse unified diff format (as printed by `git diff` / `git show`).

use crate::model::{FileChange, FileStatus, Hunk};
use thiserror::Error;
use unidiff::{Hunk as UnidiffHunk, PatchSet, PatchedFile};

const DEV_NULL: &str = "/dev/null";
const GIT_HEADER: &str = "diff --git ";

/// Errors that can occur during diff parsing.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Failed to parse diff: {0}")]
    ParseFailed(String),
}

/// Parse a unified diff string into one [`FileChange`] per patched file.
///
/// Git patches are read one `diff --git` section at a time, so sections
/// without hunks (binary files, pure renames, mode changes) still produce a
/// [`FileChange`] with no hunks. Text without any `diff --git` line is read
/// as a plain `diff -u` patch.
///
/// Declared additions/deletions are the patch's own counts, not the
/// classifier's, so [`crate::verify_file`] can report where the two disagree.
///
/// # Example
/// ```
/// let files = gitlore_diff::parse_unified_diff(
///     "--- a/x.rs\n+++ b/x.rs\n@@ -1 +1 @@\n-old\n+new\n",
/// )?;
/// assert_eq!(files[0].path, "x.rs");
/// # Ok::<(), gitlore_diff::ParseError>(())
/// ```
pub fn parse_unified_diff(diff_text: &str) -> Result<Vec<FileChange>, ParseError> {
    let sections = git_sections(diff_text);

    let files = if sections.is_empty() {
        parse_patch_text(diff_text)?
    } else {
        let mut files = Vec::new();
        for section in sections {
            files.extend(parse_git_section(section)?);
        }
        files
    };

    log::debug!("Parsed {} file(s) from unified diff", files.len());
    Ok(files)
}

fn parse_patch_text(text: &str) -> Result<Vec<FileChange>, ParseError> {
    let mut patch_set = PatchSet::new();
    patch_set
        .parse(text)
        .map_err(|e| ParseError::ParseFailed(e.to_string()))?;

    Ok(patch_set.files().iter().map(parse_patched_file).collect())
}

/// Split `text` at each `diff --git` line. Anything before the first one
/// (e.g. a commit message) is skipped.
fn git_sections(text: &str) -> Vec<&str> {
    let mut starts = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if line.starts_with(GIT_HEADER) {
            starts.push(offset);
        }
        offset += line.len();
    }

    let ends = starts.iter().skip(1).copied().chain(std::iter::once(text.len()));
    starts
        .iter()
        .zip(ends)
        .map(|(&start, end)| &text[start..end])
        .collect()
}

fn parse_git_section(section: &str) -> Result<Vec<FileChange>, ParseError> {
    let files = parse_patch_text(section)?;
    if !files.is_empty() {
        return Ok(files);
    }

    let file = hunkless_file(section);
    match &file {
        Some(file) => log::debug!("{} has no hunks ({:?})", file.path, file.status),
        None => log::warn!("Skipping unreadable diff header: {:?}", section.lines().next()),
    }
    Ok(file.into_iter().collect())
}

/// Build a [`FileChange`] from a section's extended header alone.
///
/// `rename from`/`rename to` take precedence over the paths on the
/// `diff --git` line.
fn hunkless_file(section: &str) -> Option<FileChange> {
    let mut lines = section.lines();
    let (mut old_path, mut new_path) = lines.next().and_then(git_header_paths)?;
    let mut status = FileStatus::Modified;

    for line in lines {
        if line.starts_with("new file mode") {
            status = FileStatus::Added;
        } else if line.starts_with("deleted file mode") {
            status = FileStatus::Deleted;
        } else if let Some(from) = line.strip_prefix("rename from ") {
            old_path = from.to_string();
            status = FileStatus::Renamed;
        } else if let Some(to) = line.strip_prefix("rename to ") {
            new_path = to.to_string();
            status = FileStatus::Renamed;
        }
    }

    let file = match status {
        FileStatus::Deleted => FileChange::new(old_path),
        FileStatus::Renamed => FileChange::new(new_path).with_previous_path(old_path),
        _ => FileChange::new(new_path),
    };
    Some(file.with_status(status))
}

/// Old and new path from `diff --git a/X b/Y`.
fn git_header_paths(line: &str) -> Option<(String, String)> {
    let rest = line.strip_prefix(GIT_HEADER)?.trim_end();
    let (old, new) = rest.split_once(" b/")?;
    Some((clean_path(old), new.to_string()))
}

fn parse_patched_file(file: &PatchedFile) -> FileChange {
    let target = clean_path(&file.target_file);
    let source = clean_path(&file.source_file);
    let status = determine_status(&source, &target);

    let path = if status == FileStatus::Deleted {
        source.clone()
    } else {
        target
    };

    let mut change = FileChange::new(path).with_status(status);
    if status == FileStatus::Renamed {
        change.previous_path = Some(source);
    }

    change.hunks = file.hunks().iter().map(rebuild_hunk).collect();
    change.with_totals(file.added(), file.removed())
}

/// Reassemble the raw hunk text: header line followed by marker-prefixed lines.
fn rebuild_hunk(hunk: &UnidiffHunk) -> Hunk {
    let old_start = hunk.source_start as u32;
    let old_count = hunk.source_length as u32;
    let new_start = hunk.target_start as u32;
    let new_count = hunk.target_length as u32;

    let mut body = format!(
        "@@ -{},{} +{},{} @@",
        old_start, old_count, new_start, new_count
    );
    let section = hunk.section_header.trim();
    if !section.is_empty() {
        body.push(' ');
        body.push_str(section);
    }

    for line in hunk.lines() {
        body.push('\n');
        body.push_str(&line.line_type);
        body.push_str(&line.value);
    }

    Hunk::new(old_start, old_count, new_start, new_count, body)
}

fn determine_status(source: &str, target: &str) -> FileStatus {
    if source == DEV_NULL || source.is_empty() {
        FileStatus::Added
    } else if target == DEV_NULL || target.is_empty() {
        FileStatus::Deleted
    } else if source != target {
        FileStatus::Renamed
    } else {
        FileStatus::Modified
    }
}

/// Clean the path by removing a/b prefixes from git diff output.
fn clean_path(path: &str) -> String {
    let path = path.trim();

    if let Some(stripped) = path.strip_prefix("a/") {
        return stripped.to_string();
    }
    if let Some(stripped) = path.strip_prefix("b/") {
        return stripped.to_string();
    }

    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ClassifiedLine, LineKind};
    use crate::reconstruct::expand;
    use crate::present::present;
    use crate::summary::summarize;
    use crate::verify::{verify_file, verify_hunk, CountMismatch, Side};
    use pretty_assertions::assert_eq;

    const SAMPLE_DIFF: &str = r#"diff --git a/src/main.rs b/src/main.rs
index abc123..def456 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,4 @@ fn main()
 fn main() {
     println!("Hello");
+    println!("World");
 }
diff --git a/src/lib.rs b/src/lib.rs
index 111222..333444 100644
--- a/src/lib.rs
+++ b/src/lib.rs
@@ -10,5 +10,4 @@ impl Foo {
 impl Foo {
     fn bar(&self) {
-        // old comment
         self.do_thing();
     }
"#;

    #[test]
    fn test_parse_simple_diff() {
        let files = parse_unified_diff(SAMPLE_DIFF).unwrap();
        assert_eq!(files.len(), 2);

        let main = &files[0];
        assert_eq!(main.path, "src/main.rs");
        assert_eq!(main.status, FileStatus::Modified);
        assert_eq!(main.previous_path, None);
        assert_eq!((main.additions, main.deletions), (1, 0));
        assert_eq!(main.hunks.len(), 1);

        let hunk = &main.hunks[0];
        assert_eq!((hunk.old_start, hunk.old_line_count), (1, 3));
        assert_eq!((hunk.new_start, hunk.new_line_count), (1, 4));
        assert_eq!(hunk.header(), Some("@@ -1,3 +1,4 @@ fn main()"));

        let lib = &files[1];
        assert_eq!(lib.path, "src/lib.rs");
        assert_eq!((lib.additions, lib.deletions), (0, 1));
    }

    #[test]
    fn test_rebuilt_body_classifies_like_the_patch() {
        let files = parse_unified_diff(SAMPLE_DIFF).unwrap();
        let lines = expand(&files[0].hunks[0]);

        assert_eq!(lines[0].kind, LineKind::HunkHeader);
        assert_eq!(lines[1], ClassifiedLine::context("fn main() {", 1, 1));
        assert_eq!(
            lines[3],
            ClassifiedLine::addition("    println!(\"World\");", 3)
        );
        assert_eq!(lines[4], ClassifiedLine::context("}", 3, 4));

        let lines = expand(&files[1].hunks[0]);
        assert_eq!(
            lines[3],
            ClassifiedLine::deletion("        // old comment", 12)
        );
    }

    #[test]
    fn test_parsed_files_pass_verification() {
        for file in parse_unified_diff(SAMPLE_DIFF).unwrap() {
            assert_eq!(verify_file(&file), Ok(()));
        }
    }

    #[test]
    fn test_parse_new_file() {
        let diff = r#"diff --git a/new_file.rs b/new_file.rs
new file mode 100644
index 0000000..abc1234
--- /dev/null
+++ b/new_file.rs
@@ -0,0 +1,3 @@
+fn new_function() {
+    // new code
+}
"#;

        let files = parse_unified_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "new_file.rs");
        assert_eq!(files[0].status, FileStatus::Added);
        assert_eq!(files[0].previous_path, None);
        assert_eq!(files[0].additions, 3);
    }

    #[test]
    fn test_parse_deleted_file() {
        let diff = r#"diff --git a/old_file.rs b/old_file.rs
deleted file mode 100644
index abc1234..0000000
--- a/old_file.rs
+++ /dev/null
@@ -1,3 +0,0 @@
-fn old_function() {
-    // old code
-}
"#;

        let files = parse_unified_diff(diff).unwrap();
        assert_eq!(files.len(), 1);
        assert_eq!(files[0].path, "old_file.rs");
        assert_eq!(files[0].status, FileStatus::Deleted);
        assert_eq!(files[0].deletions, 3);
    }

    #[test]
    fn test_parse_renamed_file() {
        let diff = r#"diff --git a/old_name.rs b/new_name.rs
similarity index 95%
rename from old_name.rs
rename to new_name.rs
index abc123..def456 100644
--- a/old_name.rs
+++ b/new_name.rs
@@ -1,3 +1,3 @@
 fn example() {
-    // old
+    // new
 }
"#;

        let files = parse_unified_diff(diff).unwrap();
        assert_eq!(files.len(), 1);

        let file = &files[0];
        assert_eq!(file.path, "new_name.rs");
        assert_eq!(file.previous_path, Some("old_name.rs".to_string()));
        assert_eq!(file.status, FileStatus::Renamed);
        assert!(file.is_rename());
    }

    const MIXED_GIT_DIFF: &str = r#"commit 0123456789abcdef
Author: Dev <dev@example.com>

    Add logo, rename module

diff --git a/logo.png b/logo.png
new file mode 100644
index 0000000..1234567
Binary files /dev/null and b/logo.png differ
diff --git a/old.rs b/new.rs
similarity index 100%
rename from old.rs
rename to new.rs
diff --git a/run.sh b/run.sh
old mode 100644
new mode 100755
diff --git a/src/x.rs b/src/x.rs
index 1111111..2222222 100644
--- a/src/x.rs
+++ b/src/x.rs
@@ -1,2 +1,2 @@
-let a = 1;
+let a = 2;
 let b = 3;
diff --git a/assets/old.bin b/assets/old.bin
deleted file mode 100644
index 3333333..0000000
Binary files a/assets/old.bin and /dev/null differ
"#;

    #[test]
    fn test_sections_without_hunks_are_kept() {
        let files = parse_unified_diff(MIXED_GIT_DIFF).unwrap();

        let listing: Vec<_> = files
            .iter()
            .map(|f| (f.path.as_str(), f.status, f.hunks.len()))
            .collect();
        assert_eq!(
            listing,
            vec![
                ("logo.png", FileStatus::Added, 0),
                ("new.rs", FileStatus::Renamed, 0),
                ("run.sh", FileStatus::Modified, 0),
                ("src/x.rs", FileStatus::Modified, 1),
                ("assets/old.bin", FileStatus::Deleted, 0),
            ]
        );

        assert_eq!(files[1].previous_path, Some("old.rs".to_string()));
        assert!(files[1].is_rename());
        assert_eq!(files[0].previous_path, None);
        assert_eq!((files[0].additions, files[0].deletions), (0, 0));
    }

    #[test]
    fn test_sections_without_hunks_present_as_placeholders() {
        let files = parse_unified_diff(MIXED_GIT_DIFF).unwrap();

        let binary = present(&files[0]);
        assert!(!binary.has_textual_changes());

        let rename = present(&files[1]);
        assert!(!rename.has_textual_changes());
        assert_eq!(rename.display_path.to_string(), "old.rs → new.rs");

        let summary = summarize(&files);
        assert_eq!(summary.file_count, 5);
        assert_eq!((summary.total_additions, summary.total_deletions), (1, 1));
    }

    #[test]
    fn test_header_paths() {
        assert_eq!(
            git_header_paths("diff --git a/src/a.rs b/src/b.rs"),
            Some(("src/a.rs".to_string(), "src/b.rs".to_string()))
        );
        assert_eq!(git_header_paths("diff --git nonsense"), None);
        assert_eq!(hunkless_file("diff --git nonsense\n"), None);
    }

    #[test]
    fn test_declared_totals_come_from_the_patch() {
        // Deleting a SQL comment `-- drop me` yields the body line `--- drop me`,
        // which the classifier treats as file-header noise.
        let diff = r#"diff --git a/q.sql b/q.sql
index 1111111..2222222 100644
--- a/q.sql
+++ b/q.sql
@@ -1,3 +1,2 @@
 select 1;
--- drop me
 select 2;
"#;

        let files = parse_unified_diff(diff).unwrap();
        assert_eq!(files.len(), 1);

        let file = &files[0];
        assert_eq!((file.additions, file.deletions), (0, 1));
        assert_eq!(
            file.hunks[0].body,
            "@@ -1,3 +1,2 @@\n select 1;\n--- drop me\n select 2;"
        );
        assert_eq!(file.classified_totals(), (0, 0));

        assert_eq!(
            verify_hunk(&file.hunks[0]),
            Err(CountMismatch::HunkLines {
                old_start: 1,
                new_start: 1,
                side: Side::Old,
                declared: 3,
                classified: 2,
            })
        );
        assert!(verify_file(file).is_err());
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_unified_diff("").unwrap().is_empty());
    }

    #[test]
    fn test_clean_path() {
        assert_eq!(clean_path("a/src/main.rs"), "src/main.rs");
        assert_eq!(clean_path("b/src/main.rs"), "src/main.rs");
        assert_eq!(clean_path("src/main.rs"), "src/main.rs");
        assert_eq!(clean_path("/dev/null"), "/dev/null");
    }

    #[test]
    fn test_determine_status() {
        assert_eq!(determine_status(DEV_NULL, "a.rs"), FileStatus::Added);
        assert_eq!(determine_status("a.rs", DEV_NULL), FileStatus::Deleted);
        assert_eq!(determine_status("a.rs", "b.rs"), FileStatus::Renamed);
        assert_eq!(determine_status("a.rs", "a.rs"), FileStatus::Modified);
    }
}
