//! Batch driver: finds messages through index files and feeds their links
//! to a [`LinkCollector`].
//!
//! A data dump is a root directory with one subdirectory per source. Each
//! subdirectory holds `index*.txt` files that list message files, one path
//! per line, relative to the index file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::collector::LinkCollector;
use crate::config::is_index_file;
use crate::error::{HarvesterError, Result};
use crate::harvester::extract_file;

/// How the batch driver reacts to a failing document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Abort the batch on the first failing document instead of skipping it.
    pub fail_fast: bool,
}

/// A document that was skipped.
#[derive(Debug)]
pub struct DocumentFailure {
    pub path: PathBuf,
    pub error: HarvesterError,
}

/// Outcome of a batch run.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Documents attempted.
    pub documents: usize,
    /// Links written.
    pub links: usize,
    pub failures: Vec<DocumentFailure>,
}

impl BatchReport {
    /// Number of documents whose links were written.
    #[must_use]
    pub fn succeeded(&self) -> usize {
        self.documents - self.failures.len()
    }

    /// `true` if no document failed.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Read the document paths listed in an index file.
///
/// Paths are resolved against the directory of the index file. Surrounding
/// whitespace is trimmed and blank lines are ignored.
pub fn read_index(index_path: &Path) -> Result<Vec<PathBuf>> {
    let content = fs::read_to_string(index_path)
        .map_err(|e| HarvesterError::from(e).in_document(index_path))?;
    let base = index_path.parent().unwrap_or_else(|| Path::new(""));

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| base.join(line))
        .collect())
}

/// Find the index files directly inside `dir`, sorted by name.
pub fn discover_index_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut index_files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let is_index = entry
            .file_name()
            .to_str()
            .is_some_and(is_index_file);
        if is_index && path.is_file() {
            index_files.push(path);
        }
    }
    index_files.sort();
    Ok(index_files)
}

/// Find every document listed by the index files of a data dump.
///
/// Index files directly in `root` come first, then those of each
/// subdirectory in name order. Within an index file the listed order is kept.
pub fn discover_documents(root: &Path) -> Result<Vec<PathBuf>> {
    let mut directories = vec![root.to_path_buf()];

    let mut subdirectories = Vec::new();
    for entry in fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() {
            subdirectories.push(path);
        }
    }
    subdirectories.sort();
    directories.extend(subdirectories);

    let mut documents = Vec::new();
    for dir in directories {
        for index_file in discover_index_files(&dir)? {
            tracing::info!(index = %index_file.display(), "Reading index");
            documents.extend(read_index(&index_file)?);
        }
    }
    Ok(documents)
}

/// Extract the links of each document and hand them to `collector`.
///
/// Documents are independent: a document's links are written only after the
/// whole document was decoded, so a failing document contributes no output.
/// `on_document` is called after every attempted document.
///
/// # Errors
/// With `fail_fast`, the error of the first failing document. Otherwise only
/// errors writing to the sink.
pub fn harvest_documents<W, F>(
    paths: &[PathBuf],
    collector: &mut LinkCollector<W>,
    options: BatchOptions,
    mut on_document: F,
) -> Result<BatchReport>
where
    W: Write,
    F: FnMut(&Path),
{
    let mut report = BatchReport::default();

    for path in paths {
        report.documents += 1;
        let outcome = extract_file(path);
        on_document(path.as_path());

        match outcome {
            Ok(links) => {
                report.links += collector.write_links(&links)?;
                tracing::info!(path = %path.display(), links = links.len(), "Harvested document");
            }
            Err(error) if options.fail_fast => return Err(error),
            Err(error) => {
                tracing::warn!(path = %path.display(), error = %error, "Skipping document");
                report.failures.push(DocumentFailure {
                    path: path.clone(),
                    error,
                });
            }
        }
    }

    collector.flush()?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn message(urls: &[&str]) -> String {
        let links: String = urls
            .iter()
            .map(|url| {
                format!(
                    r#"<xzufi:link><xzufi:typ listURI="urn:xoev-de:fim:codeliste:onlinedienstlinktyp"><code>01</code></xzufi:typ><xzufi:link>{url}</xzufi:link></xzufi:link>"#
                )
            })
            .collect();
        format!(
            r#"<xzufi:transfer.operation.040102 xmlns:xzufi="http://xoev.de/schemata/xzufi/2_2_0" xzufiVersion="2.2.0"><xzufi:nachrichtenkopf/><xzufi:schreibe><xzufi:onlinedienst><xzufi:id>1</xzufi:id><xzufi:bezeichnung>D</xzufi:bezeichnung>{links}</xzufi:onlinedienst></xzufi:schreibe></xzufi:transfer.operation.040102>"#
        )
    }

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn dump() -> TempDir {
        let root = tempfile::tempdir().unwrap();
        let amt24 = root.path().join("amt24");
        let service_bw = root.path().join("service-bw");
        fs::create_dir_all(amt24.join("data")).unwrap();
        fs::create_dir_all(&service_bw).unwrap();

        write(&amt24.join("data"), "1.xml", &message(&["https://a1", "https://a2"]));
        write(&amt24, "2.xml", &message(&["https://a3"]));
        write(&amt24, "index.txt", "data/1.xml\n\n  2.xml  \n");
        write(&amt24, "notes.txt", "not an index");

        write(&service_bw, "b.xml", &message(&["https://b1"]));
        write(&service_bw, "index_1.txt", "b.xml\n");
        root
    }

    #[test]
    fn test_read_index_resolves_relative_paths() {
        let root = dump();
        let amt24 = root.path().join("amt24");

        let documents = read_index(&amt24.join("index.txt")).unwrap();
        assert_eq!(documents, vec![amt24.join("data/1.xml"), amt24.join("2.xml")]);
    }

    #[test]
    fn test_discover_index_files() {
        let root = dump();
        let index_files = discover_index_files(&root.path().join("amt24")).unwrap();
        assert_eq!(index_files, vec![root.path().join("amt24/index.txt")]);
    }

    #[test]
    fn test_discover_documents_in_directory_order() {
        let root = dump();
        let documents = discover_documents(root.path()).unwrap();

        assert_eq!(
            documents,
            vec![
                root.path().join("amt24/data/1.xml"),
                root.path().join("amt24/2.xml"),
                root.path().join("service-bw/b.xml"),
            ]
        );
    }

    #[test]
    fn test_harvest_documents() {
        let root = dump();
        let documents = discover_documents(root.path()).unwrap();
        let mut collector = LinkCollector::new(Vec::new());
        let mut seen = 0;

        let report =
            harvest_documents(&documents, &mut collector, BatchOptions::default(), |_| seen += 1)
                .unwrap();

        assert_eq!(seen, 3);
        assert_eq!(report.documents, 3);
        assert_eq!(report.links, 4);
        assert!(report.is_success());
        assert_eq!(
            String::from_utf8(collector.into_inner()).unwrap(),
            "https://a1\nhttps://a2\nhttps://a3\nhttps://b1\n"
        );
    }

    #[test]
    fn test_failing_document_is_skipped_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "good.xml", &message(&["https://ok"]));
        let bad = write(
            dir.path(),
            "bad.xml",
            &message(&["https://partial"])
                .replace("</xzufi:schreibe>", "<xzufi:formular/></xzufi:schreibe>"),
        );
        let mut collector = LinkCollector::new(Vec::new());

        let report = harvest_documents(
            &[bad.clone(), good],
            &mut collector,
            BatchOptions::default(),
            |_| {},
        )
        .unwrap();

        assert_eq!(report.succeeded(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].path, bad);
        assert!(matches!(
            report.failures[0].error,
            HarvesterError::Document { .. }
        ));
        assert_eq!(String::from_utf8(collector.into_inner()).unwrap(), "https://ok\n");
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let good = write(dir.path(), "good.xml", &message(&["https://ok"]));
        let missing = dir.path().join("missing.xml");
        let mut collector = LinkCollector::new(Vec::new());

        let err = harvest_documents(
            &[missing, good],
            &mut collector,
            BatchOptions { fail_fast: true },
            |_| {},
        )
        .unwrap_err();

        assert!(err.to_string().contains("missing.xml"));
        assert_eq!(collector.written(), 0);
    }
}
