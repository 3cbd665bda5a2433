//! Page paths, link targets and anchors.
//!
//! Every documented symbol owns a folder; its page is the [`DocumentationUrlProvider::get_file_name`]
//! file inside it. Folders mirror the symbol's position: namespace segments, then containing
//! types, then the type or member name.
//!
//! | Symbol                                     | Folders                                |
//! |--------------------------------------------|----------------------------------------|
//! | namespace `Acme.Data`                      | `Acme/Data`                            |
//! | type `Acme.Data.Repository<T>`             | `Acme/Data/Repository-1`               |
//! | constructor of `Repository<T>`             | `Acme/Data/Repository-1/-ctor`         |
//! | indexer of `Repository<T>`                 | `Acme/Data/Repository-1/Item`          |
//! | `IReader<T>.Read` implemented explicitly   | `Acme/Data/Repository-1/Acme-Data-IReader-T-Read` |
//! | type `Widget` in the global namespace      | `_Global/Widget`                       |
//!
//! Symbols of other assemblies are linked through [`ExternalUrlProvider`]s, the first provider
//! that knows a symbol wins.

use crate::{
    generator::DocumentationFileKind,
    symbols::{documentation_comment_id, MethodKind, SymbolId, SymbolKind, SymbolRegistry},
};

/// Folder of the global namespace
pub const GLOBAL_NAMESPACE_FOLDER: &str = "_Global";

/// Folder of the constructors of a type
pub const CONSTRUCTOR_FOLDER: &str = "-ctor";

/// Folder of the page listing the extended external types
pub const EXTENSIONS_FOLDER: &str = "_Extensions";

/// Folder of the object model page
pub const OBJECT_MODEL_FOLDER: &str = "_ObjectModel";

/// Anchor at the top of every page when scrolling to content is enabled
pub const TOP_FRAGMENT: &str = "top";

/// Resolves links to symbols outside the documented assemblies
pub trait ExternalUrlProvider: Send + Sync {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Returns the URL of the page documenting the symbol with these folders
    fn create_url(&self, folders: &[String]) -> Option<String>;
}

/// Links to the .NET API browser for `System` and `Microsoft` namespaces
#[derive(Debug, Clone, Copy, Default)]
pub struct MicrosoftDocsUrlProvider;

impl MicrosoftDocsUrlProvider {
    /// Base URL of the API browser
    pub const BASE_URL: &'static str = "https://docs.microsoft.com/en-us/dotnet/api/";
}

impl ExternalUrlProvider for MicrosoftDocsUrlProvider {
    fn name(&self) -> &str {
        "Microsoft Docs"
    }

    fn create_url(&self, folders: &[String]) -> Option<String> {
        match folders.first().map(String::as_str) {
            Some("System" | "Microsoft") => {}
            _ => return None,
        }

        let path: Vec<String> = folders.iter().map(|folder| folder.to_lowercase()).collect();
        Some(format!("{}{}", Self::BASE_URL, path.join(".")))
    }
}

/// Path and link scheme of a page layout
///
/// Only the file name and the external providers vary between layouts; folders, fragments and
/// relative links are shared.
pub trait DocumentationUrlProvider: Send + Sync {
    /// File name of a page of the given kind
    fn get_file_name(&self, kind: DocumentationFileKind) -> &str;

    /// Providers consulted for external symbols, in order
    fn external_providers(&self) -> &[Box<dyn ExternalUrlProvider>];

    /// Returns the folders of `symbol`, outermost first
    ///
    /// Assemblies, parameters, type parameters and accessors have no page and return `None`.
    fn get_folders(&self, registry: &SymbolRegistry, symbol: SymbolId) -> Option<Vec<String>> {
        get_folders(registry, symbol)
    }

    /// Returns the URL of an external symbol, if a provider knows it
    fn get_external_url(&self, folders: &[String]) -> Option<String> {
        self.external_providers()
            .iter()
            .find_map(|provider| provider.create_url(folders))
    }

    /// Returns `true` if an external provider can link `symbol`
    fn has_external_url(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool {
        self.get_folders(registry, symbol)
            .is_some_and(|folders| self.get_external_url(&folders).is_some())
    }

    /// Relative URL from the page of `containing_folders` to the page of `folders`
    ///
    /// Without containing folders the URL is relative to the root. A link to the current page
    /// is the bare fragment.
    fn get_local_url(
        &self,
        folders: &[String],
        containing_folders: Option<&[String]>,
        fragment: Option<&str>,
    ) -> String {
        let file_name = self.get_file_name(DocumentationFileKind::Type);
        let fragment = fragment.unwrap_or_default();

        let Some(containing) = containing_folders else {
            return format!("{}{fragment}", join_path(file_name, folders, '/'));
        };

        if containing == folders {
            return if fragment.is_empty() {
                format!("./{file_name}")
            } else {
                fragment.to_string()
            };
        }

        let common = folders
            .iter()
            .zip(containing)
            .take_while(|(x, y)| x == y)
            .count();

        let mut url = match containing.len() - common {
            0 => String::from("./"),
            up => "../".repeat(up),
        };
        for folder in &folders[common..] {
            url.push_str(folder);
            url.push('/');
        }
        url.push_str(file_name);
        url.push_str(fragment);
        url
    }

    /// URL of the root page from a page `depth` folders below it
    fn get_url_to_root(&self, depth: usize, separator: char, scroll_to_content: bool) -> String {
        let mut url = if depth == 0 {
            format!(".{separator}")
        } else {
            format!("..{separator}").repeat(depth)
        };
        url.push_str(self.get_file_name(DocumentationFileKind::Root));
        if scroll_to_content {
            url.push('#');
            url.push_str(TOP_FRAGMENT);
        }
        url
    }
}

/// Layout writing one `README.md` per folder
pub struct MarkdownUrlProvider {
    external_providers: Vec<Box<dyn ExternalUrlProvider>>,
}

impl std::fmt::Debug for MarkdownUrlProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.external_providers.iter().map(|provider| provider.name()).collect();
        f.debug_struct("MarkdownUrlProvider")
            .field("external_providers", &names)
            .finish()
    }
}

impl Default for MarkdownUrlProvider {
    fn default() -> Self {
        MarkdownUrlProvider::new(vec![Box::new(MicrosoftDocsUrlProvider)])
    }
}

impl MarkdownUrlProvider {
    /// Page file name
    pub const README_FILE_NAME: &'static str = "README.md";

    /// Creates a provider with the given external providers
    #[must_use]
    pub fn new(external_providers: Vec<Box<dyn ExternalUrlProvider>>) -> Self {
        MarkdownUrlProvider { external_providers }
    }
}

impl DocumentationUrlProvider for MarkdownUrlProvider {
    fn get_file_name(&self, _kind: DocumentationFileKind) -> &str {
        Self::README_FILE_NAME
    }

    fn external_providers(&self) -> &[Box<dyn ExternalUrlProvider>] {
        &self.external_providers
    }
}

/// Joins `folders` and `file_name` with `separator`
#[must_use]
pub fn join_path(file_name: &str, folders: &[String], separator: char) -> String {
    let mut path = String::new();
    for folder in folders {
        path.push_str(folder);
        path.push(separator);
    }
    path.push_str(file_name);
    path
}

/// Returns the folders of `symbol`, outermost first
///
/// See the module documentation for the naming rules.
#[must_use]
pub fn get_folders(registry: &SymbolRegistry, symbol: SymbolId) -> Option<Vec<String>> {
    let data = registry.get(symbol);
    match data.kind() {
        SymbolKind::Namespace => {
            if data.is_global_namespace() {
                return Some(vec![GLOBAL_NAMESPACE_FOLDER.to_string()]);
            }
            Some(
                registry
                    .namespace_names(symbol)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )
        }
        SymbolKind::NamedType => {
            let mut folders = namespace_folders(registry, symbol);
            for ty in registry
                .containing_types(symbol)
                .into_iter()
                .chain(std::iter::once(symbol))
            {
                folders.push(type_folder(registry, ty));
            }
            Some(folders)
        }
        SymbolKind::Method => {
            let kind = data.method_kind()?;
            if matches!(
                kind,
                MethodKind::PropertyGet
                    | MethodKind::PropertySet
                    | MethodKind::EventAdd
                    | MethodKind::EventRemove
                    | MethodKind::DelegateInvoke
            ) {
                return None;
            }
            member_folders(registry, symbol)
        }
        SymbolKind::Property | SymbolKind::Field | SymbolKind::Event => member_folders(registry, symbol),
        SymbolKind::Assembly | SymbolKind::Parameter | SymbolKind::TypeParameter => None,
    }
}

fn namespace_folders(registry: &SymbolRegistry, symbol: SymbolId) -> Vec<String> {
    let names = registry
        .containing_namespace(symbol)
        .map(|namespace| registry.namespace_names(namespace))
        .unwrap_or_default();

    if names.is_empty() {
        vec![GLOBAL_NAMESPACE_FOLDER.to_string()]
    } else {
        names.into_iter().map(str::to_string).collect()
    }
}

fn type_folder(registry: &SymbolRegistry, ty: SymbolId) -> String {
    let symbol = registry.get(ty);
    match symbol.arity() {
        0 => symbol.name.clone(),
        arity => format!("{}-{arity}", symbol.name),
    }
}

fn member_folders(registry: &SymbolRegistry, member: SymbolId) -> Option<Vec<String>> {
    let ty = registry.containing_type(member)?;
    let mut folders = get_folders(registry, ty)?;
    folders.push(member_folder(registry, member));
    Some(folders)
}

fn member_folder(registry: &SymbolRegistry, member: SymbolId) -> String {
    let symbol = registry.get(member);

    if symbol.method_kind() == Some(MethodKind::Constructor) {
        return CONSTRUCTOR_FOLDER.to_string();
    }

    if symbol.first_explicit_interface_implementation().is_some() {
        return transliterate(&symbol.name);
    }

    symbol.metadata_name().into_owned()
}

/// Replaces every run of characters other than letters, digits and `_` by one `-`
fn transliterate(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut pending_separator = false;

    for c in name.chars() {
        if c.is_alphanumeric() || c == '_' {
            if pending_separator && !result.is_empty() {
                result.push('-');
            }
            pending_separator = false;
            result.push(c);
        } else {
            pending_separator = true;
        }
    }

    result
}

/// Anchor of one symbol: its comment ID without the kind prefix, non-word characters as `_`
#[must_use]
pub fn get_fragment(registry: &SymbolRegistry, symbol: SymbolId) -> Option<String> {
    let id = documentation_comment_id(registry, symbol)?;
    Some(fragment_of(&id))
}

/// Anchor shared by all overloads of a member name on a member page
///
/// It is the anchor of the comment ID without its parameter list.
#[must_use]
pub fn get_overloads_fragment(registry: &SymbolRegistry, symbol: SymbolId) -> Option<String> {
    let id = documentation_comment_id(registry, symbol)?;
    let without_parameters = id.split_once('(').map_or(id.as_str(), |(head, _)| head);
    Some(fragment_of(without_parameters))
}

fn fragment_of(comment_id: &str) -> String {
    let id = comment_id
        .split_once(':')
        .map_or(comment_id, |(_, rest)| rest);

    id.chars()
        .map(|c| if c.is_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}

/// Anchor of a heading as rendered by GitHub-flavored Markdown
///
/// `Derived (All)` becomes `derived-all`.
#[must_use]
pub fn get_heading_fragment(heading: &str) -> String {
    heading
        .trim()
        .to_lowercase()
        .chars()
        .filter_map(|c| match c {
            ' ' => Some('-'),
            c if c.is_alphanumeric() || c == '-' || c == '_' => Some(c),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        symbols::{TypeBuilder, TypeParameterBuilder},
        test::factories::fixture,
    };

    fn strings(folders: &[&str]) -> Vec<String> {
        folders.iter().map(|folder| folder.to_string()).collect()
    }

    #[test]
    fn every_symbol_has_clean_folders_and_fragment() {
        let fixture = fixture();
        let registry = &fixture.registry;

        for symbol in (0..registry.len()).map(SymbolId::new) {
            let Some(folders) = get_folders(registry, symbol) else {
                continue;
            };
            let name = &registry.get(symbol).name;

            assert!(!folders.is_empty(), "{name}");
            for folder in &folders {
                assert!(!folder.is_empty(), "{name}: {folders:?}");
                assert!(!folder.contains(['/', '\\']), "{name}: {folders:?}");
            }

            if let Some(fragment) = get_fragment(registry, symbol) {
                assert!(!fragment.is_empty(), "{name}");
                assert!(
                    fragment.chars().all(|c| c.is_alphanumeric() || c == '_'),
                    "{name}: {fragment}"
                );
            }
        }
    }

    #[test]
    fn folders() {
        let fixture = fixture();
        let registry = &fixture.registry;

        assert_eq!(get_folders(registry, fixture.namespace).unwrap(), strings(&["Acme", "Data"]));
        assert_eq!(
            get_folders(registry, fixture.repository).unwrap(),
            strings(&["Acme", "Data", "Repository-1"])
        );
        assert_eq!(
            get_folders(registry, fixture.constructor).unwrap(),
            strings(&["Acme", "Data", "Repository-1", "-ctor"])
        );
        assert_eq!(get_folders(registry, fixture.indexer).unwrap().last().unwrap(), "Item");
        assert_eq!(
            get_folders(registry, fixture.explicit_read).unwrap().last().unwrap(),
            "Acme-Data-IReader-T-Read"
        );
        assert_eq!(get_folders(registry, fixture.addition).unwrap().last().unwrap(), "op_Addition");
        assert!(get_folders(registry, fixture.assembly).is_none());

        let parameter = registry.get(fixture.find).parameters()[0];
        assert!(get_folders(registry, parameter).is_none());
    }

    #[test]
    fn nested_generic_type() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let outer = TypeBuilder::class("Outer")
            .public()
            .build(registry, fixture.namespace)
            .unwrap();
        let inner = TypeBuilder::class("Inner")
            .public()
            .type_parameter(TypeParameterBuilder::new("T"))
            .build(registry, outer)
            .unwrap();

        assert_eq!(
            get_folders(registry, inner).unwrap(),
            strings(&["Acme", "Data", "Outer", "Inner-1"])
        );
    }

    #[test]
    fn global_namespace() {
        let mut fixture = fixture();
        let registry = &mut fixture.registry;
        let global = registry.global_namespace(fixture.assembly).unwrap();
        let loose = TypeBuilder::class("Loose").public().build(registry, global).unwrap();

        assert_eq!(get_folders(registry, global).unwrap(), strings(&["_Global"]));
        assert_eq!(get_folders(registry, loose).unwrap(), strings(&["_Global", "Loose"]));
    }

    #[test]
    fn fragments() {
        let fixture = fixture();
        let registry = &fixture.registry;

        let fragment = get_fragment(registry, fixture.save_overwrite).unwrap();
        assert!(fragment.chars().all(|c| c.is_alphanumeric() || c == '_'));
        assert!(fragment.starts_with("Acme_Data_Repository_1_Save_"));
        assert_eq!(
            get_overloads_fragment(registry, fixture.save_overwrite).unwrap(),
            "Acme_Data_Repository_1_Save"
        );
        assert_eq!(
            get_overloads_fragment(registry, fixture.save).unwrap(),
            get_overloads_fragment(registry, fixture.save_overwrite).unwrap()
        );
        assert_eq!(get_heading_fragment("Derived (All)"), "derived-all");
    }

    #[test]
    fn local_urls() {
        let provider = MarkdownUrlProvider::default();
        let ty = strings(&["Acme", "Data", "Widget"]);
        let member = strings(&["Acme", "Data", "Widget", "Run"]);
        let other = strings(&["Acme", "Core", "Gadget"]);

        assert_eq!(provider.get_local_url(&ty, None, None), "Acme/Data/Widget/README.md");
        assert_eq!(provider.get_local_url(&ty, Some(&ty), None), "./README.md");
        assert_eq!(provider.get_local_url(&ty, Some(&ty), Some("#x")), "#x");
        assert_eq!(provider.get_local_url(&member, Some(&ty), None), "./Run/README.md");
        assert_eq!(provider.get_local_url(&ty, Some(&member), None), "../README.md");
        assert_eq!(
            provider.get_local_url(&other, Some(&ty), Some("#top")),
            "../../Core/Gadget/README.md#top"
        );
        assert_eq!(provider.get_url_to_root(0, '/', false), "./README.md");
        assert_eq!(provider.get_url_to_root(2, '/', true), "../../README.md#top");
    }

    #[test]
    fn external_urls() {
        let provider = MarkdownUrlProvider::default();
        assert_eq!(
            provider.get_external_url(&strings(&["System", "Collections", "Generic", "List-1"])),
            Some("https://docs.microsoft.com/en-us/dotnet/api/system.collections.generic.list-1".to_string())
        );
        assert_eq!(provider.get_external_url(&strings(&["Acme", "Widget"])), None);

        let fixture = fixture();
        let disposable = fixture.registry.find_type("System.IDisposable").unwrap();
        assert!(provider.has_external_url(&fixture.registry, disposable));
        assert!(!provider.has_external_url(&fixture.registry, fixture.widget));
    }
}
