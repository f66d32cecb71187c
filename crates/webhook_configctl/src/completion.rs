//! Filesystem path completion for path prompts.

use std::{fs, path::Path};

#[cfg(test)]
#[path = "completion_tests.rs"]
mod tests;

/// Lists the paths that complete `partial`.
///
/// The directory part of `partial` (everything up to the last `/`, or the
/// current directory when there is none) is listed, and entries whose name
/// starts with the rest are returned as `<directory part><name>`.
/// Directories get a trailing `/`. Results are sorted; a directory that
/// cannot be read yields nothing.
pub fn path_suggestions(partial: &str) -> Vec<String> {
    let (dir, prefix) = match partial.rfind('/') {
        Some(pos) => partial.split_at(pos + 1),
        None => ("", partial),
    };
    let list_from = if dir.is_empty() { Path::new(".") } else { Path::new(dir) };

    let Ok(entries) = fs::read_dir(list_from) else {
        return Vec::new();
    };

    let mut suggestions: Vec<String> = entries
        .filter_map(Result::ok)
        .filter_map(|entry| {
            let name = entry.file_name().into_string().ok()?;
            if !name.starts_with(prefix) {
                return None;
            }
            let mut suggestion = format!("{dir}{name}");
            if entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
                suggestion.push('/');
            }
            Some(suggestion)
        })
        .collect();
    suggestions.sort();
    suggestions
}

/// Completes `input` to the single matching path, or to the longest prefix
/// shared by all matches when that extends the input.
pub fn complete_path(input: &str) -> Option<String> {
    let suggestions = path_suggestions(input);
    match suggestions.as_slice() {
        [] => None,
        [only] => Some(only.clone()),
        [first, rest @ ..] => {
            let shared = rest
                .iter()
                .fold(first.as_str(), |acc, other| common_prefix(acc, other));
            (shared.len() > input.len()).then(|| shared.to_string())
        }
    }
}

fn common_prefix<'a>(a: &'a str, b: &str) -> &'a str {
    let len = a
        .char_indices()
        .zip(b.chars())
        .take_while(|((_, x), y)| x == y)
        .last()
        .map(|((i, c), _)| i + c.len_utf8())
        .unwrap_or(0);
    &a[..len]
}

/// Tab completion for `dialoguer` path inputs.
pub struct PathCompletion;

impl dialoguer::Completion for PathCompletion {
    fn get(&self, input: &str) -> Option<String> {
        complete_path(input)
    }
}
