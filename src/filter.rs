//! Selection of the symbols and attributes that appear in generated output.
//!
//! Every traversal in the crate (documentation model, definition writer, declaration list) asks
//! one [`SymbolFilterOptions`] whether a symbol is documented. The decision is a pure function of
//! the symbol and the configured tables and is reported as a [`FilterResult`], so callers can
//! tell "excluded by configuration" apart from "never documented at all".
//!
//! # Decision order
//!
//! 1. Implicitly declared members (accessors, static constructors, finalizers, delegate
//!    `Invoke`/`BeginInvoke`/`EndInvoke`, enum `value__`, names starting with `<`, and anything
//!    the host marked as implicit) are [`FilterResult::NotApplicable`].
//! 2. Parameters and type parameters are [`FilterResult::UnsupportedSymbolGroup`].
//! 3. A symbol whose group is not in [`SymbolFilterOptions::symbol_groups`] is
//!    [`FilterResult::SymbolGroup`].
//! 4. A symbol whose effective accessibility is below [`SymbolFilterOptions::visibility`] is
//!    [`FilterResult::Visibility`].
//! 5. The first applicable [`SymbolFilterRule`] that rejects the symbol yields
//!    [`FilterResult::Ignored`].
//!
//! # Example
//!
//! ```rust
//! use cildoc::filter::{FilterResult, SymbolFilterOptions, Visibility};
//! use cildoc::symbols::{FieldBuilder, SpecialType, SymbolRegistry, TypeBuilder};
//!
//! let mut registry = SymbolRegistry::new();
//! let assembly = registry.add_assembly("Acme", "1.0.0.0");
//! let namespace = registry.namespace(assembly, "Acme")?;
//! let widget = TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
//! let int = registry.special(SpecialType::Int32);
//! let size = FieldBuilder::new("size", int).private().build(&mut registry, widget)?;
//!
//! let filter = SymbolFilterOptions::default();
//! assert!(filter.is_match(&registry, widget));
//! assert_eq!(filter.get_reason(&registry, size), FilterResult::Visibility);
//!
//! let filter = SymbolFilterOptions::default().with_visibility(Visibility::Private);
//! assert!(filter.is_match(&registry, size));
//! # Ok::<(), cildoc::Error>(())
//! ```

use std::{fmt, sync::Arc};

use bitflags::bitflags;
use strum::{Display, EnumIter, EnumString};

use crate::symbols::{
    Accessibility, AttributeData, MethodKind, SymbolId, SymbolKind, SymbolRegistry, TypeKind,
};

/// Lowest accessibility a symbol needs to be documented
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum Visibility {
    /// Everything, including private members
    Private,
    /// `internal` and more accessible
    Internal,
    /// Only symbols reachable from other assemblies
    Public,
}

impl Visibility {
    /// Maps a declared accessibility onto the visibility level it satisfies
    ///
    /// `protected` and `protected internal` members can be reached from derived types in other
    /// assemblies and count as public. `private protected` counts as internal.
    #[must_use]
    pub fn of(accessibility: Accessibility) -> Visibility {
        match accessibility {
            Accessibility::Public
            | Accessibility::Protected
            | Accessibility::ProtectedOrInternal
            | Accessibility::NotApplicable => Visibility::Public,
            Accessibility::Internal | Accessibility::ProtectedAndInternal => Visibility::Internal,
            Accessibility::Private => Visibility::Private,
        }
    }
}

bitflags! {
    /// Groups of symbols that can be excluded as a whole
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct SymbolGroupFilter: u16 {
        /// Namespaces
        const NAMESPACE = 0x0001;
        /// Classes
        const CLASS = 0x0002;
        /// Structs
        const STRUCT = 0x0004;
        /// Interfaces
        const INTERFACE = 0x0008;
        /// Enums
        const ENUM = 0x0010;
        /// Delegates
        const DELEGATE = 0x0020;
        /// Constants outside of enums
        const CONST = 0x0040;
        /// Fields
        const FIELD = 0x0080;
        /// Properties
        const PROPERTY = 0x0100;
        /// Indexers
        const INDEXER = 0x0200;
        /// Methods, constructors, operators and conversions
        const METHOD = 0x0400;
        /// Events
        const EVENT = 0x0800;
        /// Enum members
        const ENUM_FIELD = 0x1000;

        /// Every kind of named type
        const TYPE = Self::CLASS.bits()
            | Self::STRUCT.bits()
            | Self::INTERFACE.bits()
            | Self::ENUM.bits()
            | Self::DELEGATE.bits();
        /// Every kind of type member
        const MEMBER = Self::CONST.bits()
            | Self::FIELD.bits()
            | Self::PROPERTY.bits()
            | Self::INDEXER.bits()
            | Self::METHOD.bits()
            | Self::EVENT.bits();
        /// Everything
        const ALL = Self::NAMESPACE.bits()
            | Self::TYPE.bits()
            | Self::MEMBER.bits()
            | Self::ENUM_FIELD.bits();
    }
}

impl SymbolGroupFilter {
    /// Returns the group `id` belongs to, or `None` for symbols that are never documented on
    /// their own
    #[must_use]
    pub fn of(registry: &SymbolRegistry, id: SymbolId) -> Option<SymbolGroupFilter> {
        let symbol = registry.get(id);
        match symbol.kind() {
            SymbolKind::Namespace => Some(SymbolGroupFilter::NAMESPACE),
            SymbolKind::NamedType => symbol.type_kind().map(|kind| match kind {
                TypeKind::Class => SymbolGroupFilter::CLASS,
                TypeKind::Struct => SymbolGroupFilter::STRUCT,
                TypeKind::Interface => SymbolGroupFilter::INTERFACE,
                TypeKind::Enum => SymbolGroupFilter::ENUM,
                TypeKind::Delegate => SymbolGroupFilter::DELEGATE,
            }),
            SymbolKind::Field => {
                let in_enum = registry
                    .containing_type(id)
                    .is_some_and(|ty| registry.get(ty).is_type_kind(TypeKind::Enum));
                if in_enum {
                    Some(SymbolGroupFilter::ENUM_FIELD)
                } else if symbol.is_const() {
                    Some(SymbolGroupFilter::CONST)
                } else {
                    Some(SymbolGroupFilter::FIELD)
                }
            }
            SymbolKind::Property if symbol.is_indexer() => Some(SymbolGroupFilter::INDEXER),
            SymbolKind::Property => Some(SymbolGroupFilter::PROPERTY),
            SymbolKind::Method => Some(SymbolGroupFilter::METHOD),
            SymbolKind::Event => Some(SymbolGroupFilter::EVENT),
            SymbolKind::Assembly | SymbolKind::Parameter | SymbolKind::TypeParameter => None,
        }
    }
}

/// Outcome of a filter decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum FilterResult {
    /// The symbol is documented
    Success,
    /// The symbol is never documented on its own (accessors, implicit members)
    NotApplicable,
    /// The symbol is less accessible than the configured visibility
    Visibility,
    /// The symbol's group is excluded
    SymbolGroup,
    /// A rule rejected the symbol
    Ignored,
    /// The symbol kind has no group (parameters, type parameters)
    UnsupportedSymbolGroup,
}

/// A configurable inclusion rule
///
/// Rules are consulted after the visibility and group checks. A rule first decides whether it
/// has an opinion about a symbol at all ([`SymbolFilterRule::is_applicable`]); if it does,
/// [`SymbolFilterRule::is_match`] returning `false` excludes the symbol.
///
/// # Implementing Custom Rules
///
/// ```rust
/// use cildoc::filter::SymbolFilterRule;
/// use cildoc::symbols::{SymbolId, SymbolRegistry};
///
/// struct NoUnderscores;
///
/// impl SymbolFilterRule for NoUnderscores {
///     fn is_applicable(&self, _registry: &SymbolRegistry, _symbol: SymbolId) -> bool {
///         true
///     }
///
///     fn is_match(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool {
///         !registry.get(symbol).name.starts_with('_')
///     }
///
///     fn description(&self) -> String {
///         "names without leading underscore".to_string()
///     }
/// }
/// ```
pub trait SymbolFilterRule: Send + Sync {
    /// Returns `true` if this rule decides about `symbol`
    fn is_applicable(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool;

    /// Returns `true` if `symbol` passes this rule
    fn is_match(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool;

    /// Returns a short description for diagnostics
    fn description(&self) -> String;
}

/// A dotted metadata name such as `Acme.Data.Repository`1` or `Acme.Internal`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MetadataName(String);

impl MetadataName {
    /// Creates a metadata name, trimming surrounding whitespace and dots
    #[must_use]
    pub fn new(name: &str) -> Self {
        MetadataName(name.trim().trim_matches('.').to_string())
    }

    /// Returns the dotted name
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if `qualified` equals this name or lies below it
    #[must_use]
    pub fn covers(&self, qualified: &str) -> bool {
        qualified == self.0
            || (qualified.len() > self.0.len()
                && qualified.starts_with(self.0.as_str())
                && qualified.as_bytes()[self.0.len()] == b'.')
    }
}

impl fmt::Display for MetadataName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Rejects symbols by type name or namespace prefix
///
/// A name matches a type with that fully qualified metadata name, every member and nested type
/// of it, a namespace with that name and everything below it.
#[derive(Debug, Clone, Default)]
pub struct MetadataNameFilterRule {
    names: Vec<MetadataName>,
}

impl MetadataNameFilterRule {
    /// Creates a rule from dotted names
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        MetadataNameFilterRule {
            names: names
                .into_iter()
                .map(|name| MetadataName::new(name.as_ref()))
                .filter(|name| !name.as_str().is_empty())
                .collect(),
        }
    }

    /// Returns the configured names
    #[must_use]
    pub fn names(&self) -> &[MetadataName] {
        &self.names
    }

    fn qualified_name(registry: &SymbolRegistry, id: SymbolId) -> Option<String> {
        match registry.get(id).kind() {
            SymbolKind::Namespace => Some(registry.namespace_name(id)),
            SymbolKind::NamedType => Some(registry.qualified_metadata_name(id)),
            _ => None,
        }
    }
}

impl SymbolFilterRule for MetadataNameFilterRule {
    fn is_applicable(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool {
        !self.names.is_empty() && registry.get(symbol).kind() != SymbolKind::Assembly
    }

    fn is_match(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool {
        let mut current = Some(symbol);
        while let Some(id) = current {
            if let Some(qualified) = Self::qualified_name(registry, id) {
                if self.names.iter().any(|name| name.covers(&qualified)) {
                    return false;
                }
                if registry.get(id).kind() == SymbolKind::Namespace {
                    return true;
                }
            }
            current = registry.get(id).containing;
        }
        true
    }

    fn description(&self) -> String {
        let names: Vec<&str> = self.names.iter().map(MetadataName::as_str).collect();
        format!("ignored names: {}", names.join(", "))
    }
}

/// Rejects applied attributes by the metadata name of their class
#[derive(Debug, Clone, Default)]
pub struct AttributeFilterRule {
    names: Vec<MetadataName>,
}

impl AttributeFilterRule {
    /// Creates a rule from fully qualified attribute class names
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        AttributeFilterRule {
            names: names
                .into_iter()
                .map(|name| MetadataName::new(name.as_ref()))
                .collect(),
        }
    }

    /// Returns the configured names
    #[must_use]
    pub fn names(&self) -> &[MetadataName] {
        &self.names
    }

    /// Returns `true` if `attribute` passes this rule
    #[must_use]
    pub fn is_match(&self, registry: &SymbolRegistry, attribute: &AttributeData) -> bool {
        let qualified = registry.qualified_metadata_name(attribute.attribute_class);
        !self.names.iter().any(|name| name.as_str() == qualified)
    }
}

/// Filter configuration shared by every traversal
///
/// The options are immutable once constructed; the `with_*` methods return modified copies.
#[derive(Clone)]
pub struct SymbolFilterOptions {
    /// Minimum visibility of documented symbols
    pub visibility: Visibility,
    /// Symbol groups that are documented
    pub symbol_groups: SymbolGroupFilter,
    rules: Vec<Arc<dyn SymbolFilterRule>>,
    attribute_rule: AttributeFilterRule,
}

impl fmt::Debug for SymbolFilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rules: Vec<String> = self.rules.iter().map(|rule| rule.description()).collect();
        f.debug_struct("SymbolFilterOptions")
            .field("visibility", &self.visibility)
            .field("symbol_groups", &self.symbol_groups)
            .field("rules", &rules)
            .field("attribute_rule", &self.attribute_rule)
            .finish()
    }
}

impl Default for SymbolFilterOptions {
    fn default() -> Self {
        SymbolFilterOptions {
            visibility: Visibility::Public,
            symbol_groups: SymbolGroupFilter::ALL,
            rules: Vec::new(),
            attribute_rule: AttributeFilterRule::new(Self::default_ignored_attributes()),
        }
    }
}

impl SymbolFilterOptions {
    /// Attribute classes that are never shown in declarations by default
    #[must_use]
    pub fn default_ignored_attributes() -> &'static [&'static str] {
        &[
            "System.Diagnostics.CodeAnalysis.SuppressMessageAttribute",
            "System.Diagnostics.ConditionalAttribute",
            "System.Diagnostics.DebuggableAttribute",
            "System.Diagnostics.DebuggerBrowsableAttribute",
            "System.Diagnostics.DebuggerDisplayAttribute",
            "System.Diagnostics.DebuggerHiddenAttribute",
            "System.Diagnostics.DebuggerNonUserCodeAttribute",
            "System.Diagnostics.DebuggerStepperBoundaryAttribute",
            "System.Diagnostics.DebuggerStepThroughAttribute",
            "System.Diagnostics.DebuggerTypeProxyAttribute",
            "System.Diagnostics.DebuggerVisualizerAttribute",
            "System.Reflection.AssemblyConfigurationAttribute",
            "System.Reflection.AssemblyCultureAttribute",
            "System.Reflection.AssemblyVersionAttribute",
            "System.Reflection.DefaultMemberAttribute",
            "System.Runtime.CompilerServices.AsyncIteratorStateMachineAttribute",
            "System.Runtime.CompilerServices.AsyncStateMachineAttribute",
            "System.Runtime.CompilerServices.CompilationRelaxationsAttribute",
            "System.Runtime.CompilerServices.CompilerGeneratedAttribute",
            "System.Runtime.CompilerServices.ExtensionAttribute",
            "System.Runtime.CompilerServices.InternalsVisibleToAttribute",
            "System.Runtime.CompilerServices.IsByRefLikeAttribute",
            "System.Runtime.CompilerServices.IsReadOnlyAttribute",
            "System.Runtime.CompilerServices.IteratorStateMachineAttribute",
            "System.Runtime.CompilerServices.MethodImplAttribute",
            "System.Runtime.CompilerServices.NullableAttribute",
            "System.Runtime.CompilerServices.NullableContextAttribute",
            "System.Runtime.CompilerServices.RuntimeCompatibilityAttribute",
            "System.Runtime.CompilerServices.TypeForwardedFromAttribute",
            "System.Runtime.CompilerServices.TypeForwardedToAttribute",
            "System.Runtime.Versioning.TargetFrameworkAttribute",
        ]
    }

    /// Returns a copy with a different visibility
    #[must_use]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Returns a copy documenting only `groups`
    #[must_use]
    pub fn with_symbol_groups(mut self, groups: SymbolGroupFilter) -> Self {
        self.symbol_groups = groups;
        self
    }

    /// Returns a copy with an additional rule
    #[must_use]
    pub fn with_rule(mut self, rule: impl SymbolFilterRule + 'static) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Returns a copy ignoring types and namespaces by dotted name
    #[must_use]
    pub fn with_ignored_names<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.with_rule(MetadataNameFilterRule::new(names))
    }

    /// Returns a copy with a replaced ignored-attribute list
    #[must_use]
    pub fn with_ignored_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.attribute_rule = AttributeFilterRule::new(names);
        self
    }

    /// Returns the configured rules
    #[must_use]
    pub fn rules(&self) -> &[Arc<dyn SymbolFilterRule>] {
        &self.rules
    }

    /// Returns the rule applied to attributes
    #[must_use]
    pub fn attribute_rule(&self) -> &AttributeFilterRule {
        &self.attribute_rule
    }

    /// Returns `true` if `symbol` is documented
    #[must_use]
    pub fn is_match(&self, registry: &SymbolRegistry, symbol: SymbolId) -> bool {
        self.get_reason(registry, symbol) == FilterResult::Success
    }

    /// Explains why `symbol` is or is not documented
    #[must_use]
    pub fn get_reason(&self, registry: &SymbolRegistry, symbol: SymbolId) -> FilterResult {
        let data = registry.get(symbol);
        if data.kind() == SymbolKind::Assembly {
            return FilterResult::Success;
        }
        if is_implicit_member(registry, symbol) {
            return FilterResult::NotApplicable;
        }

        let Some(group) = SymbolGroupFilter::of(registry, symbol) else {
            return FilterResult::UnsupportedSymbolGroup;
        };
        if !self.symbol_groups.contains(group) {
            return FilterResult::SymbolGroup;
        }

        if data.kind() != SymbolKind::Namespace
            && Visibility::of(registry.effective_accessibility(symbol)) < self.visibility
        {
            return FilterResult::Visibility;
        }

        let rejected = self
            .rules
            .iter()
            .any(|rule| rule.is_applicable(registry, symbol) && !rule.is_match(registry, symbol));
        if rejected {
            return FilterResult::Ignored;
        }

        FilterResult::Success
    }

    /// Returns `true` if `attribute` applied to `symbol` is shown
    #[must_use]
    pub fn is_attribute_match(
        &self,
        registry: &SymbolRegistry,
        symbol: SymbolId,
        attribute: &AttributeData,
    ) -> bool {
        self.get_attribute_reason(registry, symbol, attribute) == FilterResult::Success
    }

    /// Explains why `attribute` applied to `symbol` is or is not shown
    ///
    /// Attributes whose class is less visible than the configured level are hidden along with
    /// the attribute classes on the ignore list.
    #[must_use]
    pub fn get_attribute_reason(
        &self,
        registry: &SymbolRegistry,
        _symbol: SymbolId,
        attribute: &AttributeData,
    ) -> FilterResult {
        let class = attribute.attribute_class;
        if Visibility::of(registry.effective_accessibility(class)) < self.visibility {
            return FilterResult::Visibility;
        }
        if !self.attribute_rule.is_match(registry, attribute) {
            return FilterResult::Ignored;
        }
        FilterResult::Success
    }
}

/// Returns `true` for members that are never documented on their own
#[must_use]
pub fn is_implicit_member(registry: &SymbolRegistry, id: SymbolId) -> bool {
    let symbol = registry.get(id);
    if symbol.is_implicit || symbol.name.starts_with('<') {
        return true;
    }

    match symbol.kind() {
        SymbolKind::Method => {
            let is_delegate_member = registry
                .containing_type(id)
                .is_some_and(|ty| registry.get(ty).is_type_kind(TypeKind::Delegate));
            match symbol.method_kind() {
                Some(
                    MethodKind::PropertyGet
                    | MethodKind::PropertySet
                    | MethodKind::EventAdd
                    | MethodKind::EventRemove
                    | MethodKind::StaticConstructor
                    | MethodKind::Destructor
                    | MethodKind::DelegateInvoke,
                ) => true,
                _ => is_delegate_member && matches!(symbol.name.as_str(), "BeginInvoke" | "EndInvoke"),
            }
        }
        SymbolKind::Field => symbol.name == "value__",
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::fixture;

    #[test]
    fn visibility_levels() {
        assert_eq!(Visibility::of(Accessibility::Protected), Visibility::Public);
        assert_eq!(Visibility::of(Accessibility::ProtectedAndInternal), Visibility::Internal);
        assert_eq!("internal".parse::<Visibility>().unwrap(), Visibility::Internal);
        assert!(Visibility::Private < Visibility::Public);
    }

    #[test]
    fn public_filter() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let filter = SymbolFilterOptions::default();

        assert_eq!(filter.get_reason(registry, fixture.secret), FilterResult::Visibility);
        assert!(filter.is_match(registry, fixture.count));
        assert!(filter.is_match(registry, fixture.indexer));
        assert_eq!(filter.get_reason(registry, fixture.explicit_read), FilterResult::Visibility);

        let getter = registry.get(fixture.count).as_property().unwrap().getter.unwrap();
        assert_eq!(filter.get_reason(registry, getter), FilterResult::NotApplicable);

        let parameter = registry.get(fixture.find).parameters()[0];
        assert_eq!(
            filter.get_reason(registry, parameter),
            FilterResult::UnsupportedSymbolGroup
        );
    }

    #[test]
    fn groups_and_rules() {
        let fixture = fixture();
        let registry = &fixture.registry;

        let filter = SymbolFilterOptions::default()
            .with_symbol_groups(SymbolGroupFilter::ALL.difference(SymbolGroupFilter::EVENT));
        assert_eq!(filter.get_reason(registry, fixture.changed), FilterResult::SymbolGroup);
        assert_eq!(filter.get_reason(registry, fixture.red), FilterResult::Success);

        let filter = SymbolFilterOptions::default().with_ignored_names(["Acme.Data.Repository`1"]);
        assert_eq!(filter.get_reason(registry, fixture.repository), FilterResult::Ignored);
        assert_eq!(filter.get_reason(registry, fixture.find), FilterResult::Ignored);
        assert!(filter.is_match(registry, fixture.widget));

        let filter = SymbolFilterOptions::default().with_ignored_names(["Acme"]);
        assert_eq!(filter.get_reason(registry, fixture.namespace), FilterResult::Ignored);
        assert_eq!(filter.get_reason(registry, fixture.widget), FilterResult::Ignored);
    }

    #[test]
    fn metadata_names() {
        let name = MetadataName::new(" Acme.Data. ");
        assert!(name.covers("Acme.Data"));
        assert!(name.covers("Acme.Data.Widget"));
        assert!(!name.covers("Acme.DataStore"));
        assert!(!name.covers("Acme"));
    }

    #[test]
    fn attributes() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let filter = SymbolFilterOptions::default();

        let flags = &registry.get(fixture.color).attributes[0];
        assert!(filter.is_attribute_match(registry, fixture.color, flags));

        let getter = registry.get(fixture.count).as_property().unwrap().getter.unwrap();
        let step_through = &registry.get(getter).attributes[0];
        assert_eq!(
            filter.get_attribute_reason(registry, getter, step_through),
            FilterResult::Ignored
        );

        let filter = filter.with_ignored_attributes(Vec::<String>::new());
        assert!(filter.is_attribute_match(registry, getter, step_through));
    }
}
