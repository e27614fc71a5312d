//! Import candidates among the files currently open in the editor.

use super::groups::{compatible_extensions, extension_of};

/// Source of the paths currently open in the editor.
pub trait OpenFiles {
    fn open_files(&self) -> Vec<String>;
}

impl OpenFiles for [String] {
    fn open_files(&self) -> Vec<String> {
        self.to_vec()
    }
}

impl OpenFiles for Vec<String> {
    fn open_files(&self) -> Vec<String> {
        self.clone()
    }
}

impl OpenFiles for [&str] {
    fn open_files(&self) -> Vec<String> {
        self.iter().map(|path| path.to_string()).collect()
    }
}

/// Open files whose extension is compatible with the extension of `path`.
pub fn find_matching_open_files<G, O>(groups: &[G], path: &str, open: &O) -> Vec<String>
where
    G: AsRef<[String]>,
    O: OpenFiles + ?Sized,
{
    let supported = compatible_extensions(groups, extension_of(path));
    open.open_files()
        .into_iter()
        .filter(|candidate| supported.iter().any(|ext| ext == extension_of(candidate)))
        .collect()
}
