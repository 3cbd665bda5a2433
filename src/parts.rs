//! Sections of the generated documentation pages.
//!
//! Every page level (root, namespace, type, member) has a bitflags set naming its sections.
//! [`crate::DocumentationOptions`] carries one "ignored" mask per level; the generator asks for
//! the enabled sections once and writes them in the fixed order returned by `enabled_and_sorted`.

use bitflags::bitflags;

bitflags! {
    /// Sections of the root page
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RootDocumentationParts: u16 {
        /// Table of contents
        const CONTENT = 0x0001;
        /// List of namespaces
        const NAMESPACES = 0x0002;
        /// Classes, as a list or as a class hierarchy
        const CLASSES = 0x0004;
        /// Static classes (only written next to a class hierarchy)
        const STATIC_CLASSES = 0x0008;
        /// Structs
        const STRUCTS = 0x0010;
        /// Interfaces
        const INTERFACES = 0x0020;
        /// Enums
        const ENUMS = 0x0040;
        /// Delegates
        const DELEGATES = 0x0080;
        /// Link to the extensions of external types
        const OTHER = 0x0100;
        /// Render classes as an inheritance tree rooted at `System.Object`
        const CLASS_HIERARCHY = 0x0200;
        /// Every type list
        const TYPES = Self::CLASSES.bits()
            | Self::STATIC_CLASSES.bits()
            | Self::STRUCTS.bits()
            | Self::INTERFACES.bits()
            | Self::ENUMS.bits()
            | Self::DELEGATES.bits();
        /// Every section
        const ALL = 0x03FF;
    }
}

bitflags! {
    /// Sections of a namespace page
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NamespaceDocumentationParts: u16 {
        /// Table of contents
        const CONTENT = 0x0001;
        /// Link to the parent namespace
        const CONTAINING_NAMESPACE = 0x0002;
        /// `<summary>`
        const SUMMARY = 0x0004;
        /// `<example>`
        const EXAMPLES = 0x0008;
        /// `<remarks>`
        const REMARKS = 0x0010;
        /// Classes table
        const CLASSES = 0x0020;
        /// Structs table
        const STRUCTS = 0x0040;
        /// Interfaces table
        const INTERFACES = 0x0080;
        /// Enums table
        const ENUMS = 0x0100;
        /// Delegates table
        const DELEGATES = 0x0200;
        /// `<seealso>`
        const SEE_ALSO = 0x0400;
        /// Every section
        const ALL = 0x07FF;
    }
}

bitflags! {
    /// Sections of a type page
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeDocumentationParts: u32 {
        /// Table of contents
        const CONTENT = 0x0000_0001;
        /// Containing namespace
        const CONTAINING_NAMESPACE = 0x0000_0002;
        /// Containing assembly
        const CONTAINING_ASSEMBLY = 0x0000_0004;
        /// Obsolete warning
        const OBSOLETE_MESSAGE = 0x0000_0008;
        /// `<summary>`
        const SUMMARY = 0x0000_0010;
        /// Declaration code block
        const DECLARATION = 0x0000_0020;
        /// Type parameters
        const TYPE_PARAMETERS = 0x0000_0040;
        /// Delegate parameters
        const PARAMETERS = 0x0000_0080;
        /// Delegate return value
        const RETURN_VALUE = 0x0000_0100;
        /// Inheritance chain
        const INHERITANCE = 0x0000_0200;
        /// Applied attributes
        const ATTRIBUTES = 0x0000_0400;
        /// Derived types
        const DERIVED = 0x0000_0800;
        /// Implemented interfaces
        const IMPLEMENTS = 0x0000_1000;
        /// `<example>`
        const EXAMPLES = 0x0000_2000;
        /// `<remarks>`
        const REMARKS = 0x0000_4000;
        /// Constructors table
        const CONSTRUCTORS = 0x0000_8000;
        /// Fields table (enum values for enums)
        const FIELDS = 0x0001_0000;
        /// Indexers table
        const INDEXERS = 0x0002_0000;
        /// Properties table
        const PROPERTIES = 0x0004_0000;
        /// Methods table
        const METHODS = 0x0008_0000;
        /// Operators table
        const OPERATORS = 0x0010_0000;
        /// Events table
        const EVENTS = 0x0020_0000;
        /// Explicit interface implementations table
        const EXPLICIT_INTERFACE_IMPLEMENTATIONS = 0x0040_0000;
        /// Extension methods table
        const EXTENSION_METHODS = 0x0080_0000;
        /// Nested classes
        const CLASSES = 0x0100_0000;
        /// Nested structs
        const STRUCTS = 0x0200_0000;
        /// Nested interfaces
        const INTERFACES = 0x0400_0000;
        /// Nested enums
        const ENUMS = 0x0800_0000;
        /// Nested delegates
        const DELEGATES = 0x1000_0000;
        /// `<seealso>`
        const SEE_ALSO = 0x2000_0000;
        /// Every nested type table
        const NESTED_TYPES = Self::CLASSES.bits()
            | Self::STRUCTS.bits()
            | Self::INTERFACES.bits()
            | Self::ENUMS.bits()
            | Self::DELEGATES.bits();
        /// Every section
        const ALL = 0x3FFF_FFFF;
        /// Every section except the nested type tables
        const ALL_EXCEPT_NESTED_TYPES = Self::ALL.bits() & !Self::NESTED_TYPES.bits();
    }
}

bitflags! {
    /// Sections of a member page
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberDocumentationParts: u16 {
        /// Obsolete warning
        const OBSOLETE_MESSAGE = 0x0001;
        /// `<summary>`
        const SUMMARY = 0x0002;
        /// Declaration code block
        const DECLARATION = 0x0004;
        /// Type parameters
        const TYPE_PARAMETERS = 0x0008;
        /// Parameters
        const PARAMETERS = 0x0010;
        /// Return, property or field value
        const RETURN_VALUE = 0x0020;
        /// Implemented interface members
        const IMPLEMENTS = 0x0040;
        /// Applied attributes
        const ATTRIBUTES = 0x0080;
        /// `<exception>`
        const EXCEPTIONS = 0x0100;
        /// `<example>`
        const EXAMPLES = 0x0200;
        /// `<remarks>`
        const REMARKS = 0x0400;
        /// `<seealso>`
        const SEE_ALSO = 0x0800;
        /// Link to the containing type
        const CONTAINING_TYPE = 0x1000;
        /// Containing assembly
        const CONTAINING_ASSEMBLY = 0x2000;
        /// Source code links
        const SOURCE_REFERENCES = 0x4000;
        /// Every section
        const ALL = 0x7FFF;
    }
}

const ROOT_ORDER: [RootDocumentationParts; 9] = [
    RootDocumentationParts::CONTENT,
    RootDocumentationParts::NAMESPACES,
    RootDocumentationParts::CLASSES,
    RootDocumentationParts::STATIC_CLASSES,
    RootDocumentationParts::STRUCTS,
    RootDocumentationParts::INTERFACES,
    RootDocumentationParts::ENUMS,
    RootDocumentationParts::DELEGATES,
    RootDocumentationParts::OTHER,
];

const NAMESPACE_ORDER: [NamespaceDocumentationParts; 11] = [
    NamespaceDocumentationParts::CONTENT,
    NamespaceDocumentationParts::CONTAINING_NAMESPACE,
    NamespaceDocumentationParts::SUMMARY,
    NamespaceDocumentationParts::EXAMPLES,
    NamespaceDocumentationParts::REMARKS,
    NamespaceDocumentationParts::CLASSES,
    NamespaceDocumentationParts::STRUCTS,
    NamespaceDocumentationParts::INTERFACES,
    NamespaceDocumentationParts::ENUMS,
    NamespaceDocumentationParts::DELEGATES,
    NamespaceDocumentationParts::SEE_ALSO,
];

const TYPE_ORDER: [TypeDocumentationParts; 30] = [
    TypeDocumentationParts::CONTENT,
    TypeDocumentationParts::CONTAINING_NAMESPACE,
    TypeDocumentationParts::CONTAINING_ASSEMBLY,
    TypeDocumentationParts::OBSOLETE_MESSAGE,
    TypeDocumentationParts::SUMMARY,
    TypeDocumentationParts::DECLARATION,
    TypeDocumentationParts::TYPE_PARAMETERS,
    TypeDocumentationParts::PARAMETERS,
    TypeDocumentationParts::RETURN_VALUE,
    TypeDocumentationParts::INHERITANCE,
    TypeDocumentationParts::ATTRIBUTES,
    TypeDocumentationParts::DERIVED,
    TypeDocumentationParts::IMPLEMENTS,
    TypeDocumentationParts::EXAMPLES,
    TypeDocumentationParts::REMARKS,
    TypeDocumentationParts::CONSTRUCTORS,
    TypeDocumentationParts::FIELDS,
    TypeDocumentationParts::INDEXERS,
    TypeDocumentationParts::PROPERTIES,
    TypeDocumentationParts::METHODS,
    TypeDocumentationParts::OPERATORS,
    TypeDocumentationParts::EVENTS,
    TypeDocumentationParts::EXPLICIT_INTERFACE_IMPLEMENTATIONS,
    TypeDocumentationParts::EXTENSION_METHODS,
    TypeDocumentationParts::CLASSES,
    TypeDocumentationParts::STRUCTS,
    TypeDocumentationParts::INTERFACES,
    TypeDocumentationParts::ENUMS,
    TypeDocumentationParts::DELEGATES,
    TypeDocumentationParts::SEE_ALSO,
];

const MEMBER_ORDER: [MemberDocumentationParts; 13] = [
    MemberDocumentationParts::OBSOLETE_MESSAGE,
    MemberDocumentationParts::SUMMARY,
    MemberDocumentationParts::DECLARATION,
    MemberDocumentationParts::TYPE_PARAMETERS,
    MemberDocumentationParts::PARAMETERS,
    MemberDocumentationParts::RETURN_VALUE,
    MemberDocumentationParts::IMPLEMENTS,
    MemberDocumentationParts::ATTRIBUTES,
    MemberDocumentationParts::EXCEPTIONS,
    MemberDocumentationParts::EXAMPLES,
    MemberDocumentationParts::REMARKS,
    MemberDocumentationParts::SEE_ALSO,
    MemberDocumentationParts::SOURCE_REFERENCES,
];

macro_rules! impl_parts {
    ($parts:ty, $order:expr) => {
        impl $parts {
            /// Returns the single sections not in `ignored`, in page order
            ///
            /// Composite flags never appear in the result.
            #[must_use]
            pub fn enabled_and_sorted(ignored: Self) -> Vec<Self> {
                $order
                    .iter()
                    .copied()
                    .filter(|part| !ignored.intersects(*part))
                    .collect()
            }

            /// Returns the page position of a single section
            ///
            /// # Panics
            /// Panics if `self` is not exactly one section.
            #[must_use]
            pub fn priority(self) -> usize {
                $order
                    .iter()
                    .position(|part| *part == self)
                    .unwrap_or_else(|| panic!("{self:?} is not a single section"))
            }
        }
    };
}

impl_parts!(RootDocumentationParts, ROOT_ORDER);
impl_parts!(NamespaceDocumentationParts, NAMESPACE_ORDER);
impl_parts!(TypeDocumentationParts, TYPE_ORDER);
impl_parts!(MemberDocumentationParts, MEMBER_ORDER);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_parts_in_page_order() {
        let parts = TypeDocumentationParts::enabled_and_sorted(
            TypeDocumentationParts::NESTED_TYPES | TypeDocumentationParts::CONTENT,
        );

        assert_eq!(parts.len(), 24);
        assert_eq!(parts[0], TypeDocumentationParts::CONTAINING_NAMESPACE);
        assert_eq!(parts[23], TypeDocumentationParts::SEE_ALSO);
        assert!(!parts.contains(&TypeDocumentationParts::CLASSES));
        assert!(parts
            .windows(2)
            .all(|pair| pair[0].priority() < pair[1].priority()));
    }

    #[test]
    fn composites_are_never_listed() {
        let all = RootDocumentationParts::enabled_and_sorted(RootDocumentationParts::empty());
        assert_eq!(all.len(), 9);
        assert!(!all.contains(&RootDocumentationParts::TYPES));
        assert!(!all.contains(&RootDocumentationParts::CLASS_HIERARCHY));
        assert_eq!(
            TypeDocumentationParts::ALL,
            TypeDocumentationParts::ALL_EXCEPT_NESTED_TYPES | TypeDocumentationParts::NESTED_TYPES
        );
        assert!(MemberDocumentationParts::enabled_and_sorted(MemberDocumentationParts::ALL).is_empty());
    }

    #[test]
    #[should_panic(expected = "not a single section")]
    fn composite_has_no_priority() {
        let _ = NamespaceDocumentationParts::ALL.priority();
    }
}
