// DigitAtlas
// copyright zipxing@hotmail.com 2022～2025

//! Path helpers: project root lookup, absolute paths and `$HOME` expansion.

use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

/// Walk up from the current directory until a directory holding flag_file is found
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;

    for p in path.ancestors() {
        let has_flag = read_dir(p)?
            .filter_map(|e| e.ok())
            .any(|e| e.file_name() == *flag_file);
        if has_flag {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Root used for relative log paths: where Cargo.lock lives, else "."
pub fn get_root_path() -> PathBuf {
    get_project_root("Cargo.lock").unwrap_or_else(|_| PathBuf::from("."))
}

pub fn get_abs_path<P: AsRef<Path>>(fpath: P) -> PathBuf {
    let fpath = fpath.as_ref();
    if fpath.is_relative() {
        get_root_path().join(fpath)
    } else {
        fpath.to_path_buf()
    }
}

/// Expand a leading $HOME in path
pub fn expand_home(path: &str) -> String {
    if path.starts_with("$HOME") {
        if let Some(home) = env::var_os("HOME") {
            return path.replacen("$HOME", home.to_string_lossy().as_ref(), 1);
        }
    }
    path.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_path() {
        let abs = if cfg!(windows) { "C:\\fonts\\a.ttf" } else { "/fonts/a.ttf" };
        assert_eq!(get_abs_path(abs), PathBuf::from(abs));
        assert!(get_abs_path("log/atlas.log").ends_with("log/atlas.log"));
    }

    #[test]
    fn test_expand_home() {
        assert_eq!(expand_home("/usr/share/fonts"), "/usr/share/fonts");
        if let Some(home) = env::var_os("HOME") {
            let expanded = expand_home("$HOME/.fonts/a.ttf");
            assert!(expanded.starts_with(home.to_string_lossy().as_ref()));
            assert!(expanded.ends_with("/.fonts/a.ttf"));
        }
    }
}
