//! Links from documented symbols to their declarations in a source repository.
//!
//! Source-reference files are produced by a separate indexing step and have this shape:
//!
//! ```xml
//! <source>
//!   <repository type="git" url="https://github.com/acme/widgets" version="1.2.0" commit="4f1c2e">
//!     <members>
//!       <member name="T:Acme.Widget">
//!         <locations>
//!           <location path="src/Widget.cs" line="12" />
//!         </locations>
//!       </member>
//!     </members>
//!   </repository>
//! </source>
//! ```
//!
//! One file may describe several repository snapshots (one per released version); the page
//! writer lists every version a symbol appears in.

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
};

use crate::{model::xml::XmlElement, Result};

/// A located declaration of a symbol in one repository snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    /// Version the snapshot was taken for
    pub version: String,
    /// Repository-relative path of the file
    pub path: String,
    /// One-based line of the declaration
    pub line: u32,
    /// Browsable URL of the declaration
    pub url: String,
}

/// Repository snapshot as declared by a `<repository>` element
#[derive(Debug, Clone, PartialEq, Eq)]
struct Repository {
    url: String,
    version: String,
    branch: Option<String>,
    commit: Option<String>,
}

impl Repository {
    fn from_element(element: &XmlElement, file: &Path) -> Result<Repository> {
        let url = element.attribute("url").ok_or_else(|| {
            malformed_error!("{}: <repository> without url", file.display())
        })?;
        if let Some(kind) = element.attribute("type") {
            if kind != "git" {
                log::warn!("{}: unknown repository type '{kind}'", file.display());
            }
        }

        Ok(Repository {
            url: url.trim_end_matches('/').to_string(),
            version: element.attribute("version").unwrap_or_default().to_string(),
            branch: element.attribute("branch").map(str::to_string),
            commit: element.attribute("commit").map(str::to_string),
        })
    }

    fn reference(&self) -> &str {
        self.commit
            .as_deref()
            .or(self.branch.as_deref())
            .unwrap_or(&self.version)
    }

    fn url_for(&self, path: &str, line: u32) -> String {
        let path = path.replace('\\', "/");
        format!(
            "{}/blob/{}/{}#L{}",
            self.url,
            self.reference(),
            path.trim_start_matches('/'),
            line
        )
    }
}

/// Source references loaded from one or more files, keyed by documentation comment ID
#[derive(Debug, Clone, Default)]
pub struct SourceReferenceProvider {
    files: Vec<PathBuf>,
    references: HashMap<String, Vec<SourceReference>>,
}

impl SourceReferenceProvider {
    /// Loads every file in `paths`
    ///
    /// # Errors
    /// Returns [`crate::Error::FileError`] for unreadable files, [`crate::Error::Xml`] for
    /// malformed XML and [`crate::Error::Malformed`] for files that do not follow the schema.
    pub fn load<I, P>(paths: I) -> Result<SourceReferenceProvider>
    where
        I: IntoIterator<Item = P>,
        P: AsRef<Path>,
    {
        let mut provider = SourceReferenceProvider::default();
        for path in paths {
            let path = path.as_ref();
            let text = std::fs::read_to_string(path)?;
            provider.add(&text, path)?;
            log::debug!("loaded source references from {}", path.display());
        }
        Ok(provider)
    }

    /// Parses the content of one source-reference file; `path` is only used in errors
    ///
    /// # Errors
    /// See [`SourceReferenceProvider::load`].
    pub fn add(&mut self, text: &str, path: &Path) -> Result<()> {
        let root = XmlElement::parse(text).map_err(|error| error.at(path))?;
        if root.name != "source" {
            return Err(malformed_error!(
                "{}: expected <source> root element, found <{}>",
                path.display(),
                root.name
            ));
        }

        for element in root.elements_named("repository") {
            let repository = Repository::from_element(element, path)?;
            let Some(members) = element.element("members") else {
                continue;
            };

            for member in members.elements_named("member") {
                let Some(name) = member.attribute("name") else {
                    log::warn!("{}: skipping <member> without name", path.display());
                    continue;
                };
                let Some(locations) = member.element("locations") else {
                    continue;
                };

                for location in locations.elements_named("location") {
                    let Some(file) = location.attribute("path") else {
                        log::warn!("{}: skipping <location> without path", path.display());
                        continue;
                    };
                    let line = match location.attribute("line") {
                        Some(line) => line.trim().parse::<u32>().map_err(|_| {
                            malformed_error!("{}: invalid line '{}'", path.display(), line)
                        })?,
                        None => 1,
                    };

                    self.references
                        .entry(name.to_string())
                        .or_default()
                        .push(SourceReference {
                            version: repository.version.clone(),
                            path: file.to_string(),
                            line,
                            url: repository.url_for(file, line),
                        });
                }
            }
        }

        self.files.push(path.to_path_buf());
        Ok(())
    }

    /// Returns the files loaded so far
    #[must_use]
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Returns the references of the symbol with documentation comment ID `comment_id`
    #[must_use]
    pub fn get_source_references(&self, comment_id: &str) -> &[SourceReference] {
        self.references
            .get(comment_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = r#"<source>
  <repository type="git" url="https://github.com/acme/widgets/" version="1.2.0" commit="4f1c2e">
    <members>
      <member name="T:Acme.Widget">
        <locations><location path="src\Widget.cs" line="12" /></locations>
      </member>
    </members>
  </repository>
  <repository url="https://github.com/acme/widgets" version="1.1.0" branch="release">
    <members>
      <member name="T:Acme.Widget">
        <locations><location path="/src/Widget.cs" line="9" /></locations>
      </member>
    </members>
  </repository>
</source>"#;

    #[test]
    fn builds_urls() {
        let mut provider = SourceReferenceProvider::default();
        provider.add(SOURCE, Path::new("source.xml")).unwrap();

        let references = provider.get_source_references("T:Acme.Widget");
        assert_eq!(references.len(), 2);
        assert_eq!(
            references[0].url,
            "https://github.com/acme/widgets/blob/4f1c2e/src/Widget.cs#L12"
        );
        assert_eq!(
            references[1].url,
            "https://github.com/acme/widgets/blob/release/src/Widget.cs#L9"
        );
        assert_eq!(references[1].version, "1.1.0");
        assert!(provider.get_source_references("T:Acme.Other").is_empty());
    }

    #[test]
    fn rejects_bad_line() {
        let mut provider = SourceReferenceProvider::default();
        let result = provider.add(
            r#"<source><repository url="u"><members><member name="T:A"><locations><location path="a" line="x"/></locations></member></members></repository></source>"#,
            Path::new("source.xml"),
        );
        assert!(matches!(result, Err(crate::Error::Malformed { .. })));
    }
}
