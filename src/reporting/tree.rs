//! # Directory Tree Module / 目录树模块
//!
//! ASCII rendering of a directory tree: the root first, children sorted
//! case-insensitively, directories suffixed with `/`.
//!
//! 目录树的 ASCII 渲染：根目录在前，子项不区分大小写排序，
//! 目录以 `/` 为后缀。

use std::fs;
use std::path::Path;

use crate::error::Result;

const ENTRY_PREFIX: &str = "|__";
const PARENT_LAST: &str = "    ";
const PARENT_CONTINUE: &str = "|   ";

/// Renders the tree under `root` as a multi-line string.
///
/// # Examples
///
/// ```text
/// project/
/// |__ README.md
/// |__ src/
///     |__ lib.rs
/// ```
///
/// # Errors
/// [`crate::Error::Io`] if a directory cannot be read.
pub fn directory_tree(root: &Path) -> Result<String> {
    let mut lines = vec![display_name(root)];
    render_children(root, "", &mut lines)?;
    Ok(lines.join("\n"))
}

/// Prints the tree to stdout.
pub fn print_directory_tree(root: &Path) -> Result<()> {
    println!("{}", directory_tree(root)?);
    Ok(())
}

fn display_name(path: &Path) -> String {
    let name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    if path.is_dir() { format!("{name}/") } else { name }
}

fn render_children(dir: &Path, prefix: &str, lines: &mut Vec<String>) -> Result<()> {
    let mut children: Vec<_> = fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .collect();
    children.sort_by_key(|path| path.to_string_lossy().to_lowercase());

    let count = children.len();
    for (index, child) in children.into_iter().enumerate() {
        let is_last = index + 1 == count;
        lines.push(format!("{prefix}{ENTRY_PREFIX} {}", display_name(&child)));

        if child.is_dir() {
            let child_prefix = format!(
                "{prefix}{}",
                if is_last { PARENT_LAST } else { PARENT_CONTINUE }
            );
            render_children(&child, &child_prefix, lines)?;
        }
    }
    Ok(())
}
