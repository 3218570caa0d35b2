use std::ffi::OsString;
use std::path::PathBuf;

use predicates::Predicate;
use predicates::function::function;
use predicates::str::PredicateStrExt;
use tempfile::TempDir;

/// Returns the path of a file in the temp dir, and its file name, the file is not created.
pub fn build_temp_file(temp_dir: &TempDir, prefix: &str, extension: &str) -> (PathBuf, OsString) {
    let file_name = OsString::from(format!("{}.{}", prefix, extension));

    let mut path = PathBuf::from(temp_dir.path());
    path.push(&file_name);

    (path, file_name)
}

/// Splits arguments given as 'name value' pairs into individual arguments.
pub fn prepare_args(args: Vec<&str>) -> Vec<String> {
    args.iter()
        .flat_map(|arg| arg.split(' '))
        .filter(|arg| !arg.is_empty())
        .map(String::from)
        .collect()
}

/// A predicate which always passes, but prints the content, useful for debugging failing tests.
pub fn print(label: &str) -> impl Predicate<[u8]> {
    let label = label.to_string();
    function(move |content: &str| {
        println!("{}:\n{}", label, content);
        true
    })
    .from_utf8()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prepare_args_splits_pairs() {
        let args = prepare_args(vec!["--unit feet", "calculate", "-vvv"]);

        assert_eq!(args, vec!["--unit", "feet", "calculate", "-vvv"]);
    }

    #[test]
    fn build_temp_file_is_inside_temp_dir() {
        let temp_dir = tempfile::tempdir().unwrap();

        let (path, file_name) = build_temp_file(&temp_dir, "trace", "log");

        assert_eq!(file_name, OsString::from("trace.log"));
        assert!(path.starts_with(temp_dir.path()));
        assert!(!path.exists());
    }
}
