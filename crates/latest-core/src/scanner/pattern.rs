/// Glob detection and path normalisation helpers.
use glob::MatchOptions;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Characters that turn an argument into a glob pattern.
const GLOB_META: &[char] = &['*', '?', '['];

/// `*` never crosses `/` and never matches a leading dot, like a shell.
/// `**` as a whole component still recurses.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

pub fn is_glob(arg: &str) -> bool {
    arg.contains(GLOB_META)
}

/// Make `path` absolute and drop `.` / `..` components lexically.
///
/// Symlinks are not resolved, so the printed path is the one the user
/// (or the glob) named.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normal = PathBuf::with_capacity(absolute.as_os_str().len());
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normal.pop();
            }
            other => normal.push(other),
        }
    }
    Ok(normal)
}
