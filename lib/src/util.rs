//! Small standalone helpers: console input parsing, string editing, path
//! checks, sleep and local clock wrappers.

use std::fs::{self, File};
use std::io::{self, BufRead};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use chrono::Local;
use strum::{Display, EnumString};

pub mod term;

/// Block the current thread for `ms` milliseconds.
pub fn delay(ms: u64) {
    thread::sleep(Duration::from_millis(ms));
}

/// Parse whitespace-separated integers from a line, stopping at the first
/// token that is not an integer.
pub fn split_ints(line: &str) -> Vec<i64> {
    line.split_whitespace()
        .map_while(|w| w.parse().ok())
        .collect()
}

/// Split a line into whitespace-separated words.
pub fn split_words(line: &str) -> Vec<String> {
    line.split_whitespace().map(str::to_owned).collect()
}

/// Read one line from stdin and parse it with [`split_ints`].
pub fn read_ints() -> io::Result<Vec<i64>> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(split_ints(&line))
}

/// Read one line from stdin and split it with [`split_words`].
pub fn read_words() -> io::Result<Vec<String>> {
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(split_words(&line))
}

const TRIM_CHARS: &[char] = &[' ', '\t', '\n', '\r'];

/// Trim leading and trailing whitespace without reallocating.
pub fn trim_in_place(s: &mut String) {
    let end = s.trim_end_matches(TRIM_CHARS).len();
    s.truncate(end);
    let start = s.len() - s.trim_start_matches(TRIM_CHARS).len();
    s.drain(..start);
}

/// Remove every occurrence of `c` from `s`.
pub fn remove_char(s: &mut String, c: char) {
    s.retain(|sc| sc != c);
}

pub fn path_exists(path: &Path) -> bool {
    path.exists()
}

/// Whether a file called `name` exists inside `dir`.
pub fn file_exists_in(name: &str, dir: &Path) -> bool {
    dir.join(name).is_file()
}

/// Whether a directory called `name` exists inside `dir`.
pub fn dir_exists_in(name: &str, dir: &Path) -> bool {
    dir.join(name).is_dir()
}

#[derive(Clone, Copy, Debug, Display, EnumString, Eq, PartialEq)]
#[strum(serialize_all = "lowercase")]
pub enum PathKind {
    File,
    Dir,
    Missing,
}

pub fn path_kind(path: &Path) -> PathKind {
    if path.is_file() {
        PathKind::File
    } else if path.is_dir() {
        PathKind::Dir
    } else {
        PathKind::Missing
    }
}

/// The extension of `path`, without the leading dot.
pub fn file_extension(path: &Path) -> Option<&str> {
    path.extension().and_then(|e| e.to_str())
}

/// Create an empty file, truncating any existing one.
pub fn create_file(path: &Path) -> io::Result<()> {
    File::create(path).map(|_| ())
}

/// Create a directory, including missing parents.
pub fn create_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

pub fn temp_dir() -> PathBuf {
    std::env::temp_dir()
}

pub fn current_dir() -> io::Result<PathBuf> {
    std::env::current_dir()
}

/// The user's desktop directory.
pub fn desktop_dir() -> PathBuf {
    PathBuf::from(shellexpand::tilde("~/Desktop").into_owned())
}

/// Local wall-clock time as `HH:MM:SS`.
pub fn local_time() -> String {
    Local::now().format("%H:%M:%S").to_string()
}

/// Local date as `YYYY-MM-DD`.
pub fn local_date() -> String {
    Local::now().format("%Y-%m-%d").to_string()
}
