//! Display format descriptors and presets.

use bitflags::bitflags;

/// How much of a type's qualification is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeQualification {
    /// `Inner`
    NameOnly,
    /// `Outer.Inner`
    NameAndContainingTypes,
    /// `Namespace.Outer.Inner`
    NameAndContainingTypesAndNamespaces,
}

/// How the global namespace is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GlobalNamespaceStyle {
    /// Never rendered
    Omitted,
    /// Rendered only when the global namespace itself is displayed
    OmittedAsContaining,
    /// Always rendered as `global::`
    Included,
}

/// How delegates are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DelegateStyle {
    /// `Callback`
    NameOnly,
    /// `Callback(string)`
    NameAndParameters,
    /// `delegate void Callback(string message)`
    NameAndSignature,
}

/// How properties are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyStyle {
    /// `Name`
    NameOnly,
    /// `Name { get; set; }`
    ShowReadWriteDescriptor,
}

bitflags! {
    /// Generic parts to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct GenericsOptions: u8 {
        /// `<T>`
        const TYPE_PARAMETERS = 0x01;
        /// `where T : class`
        const TYPE_CONSTRAINTS = 0x02;
        /// `in` / `out`
        const VARIANCE = 0x04;
    }
}

bitflags! {
    /// Member parts to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MemberOptions: u16 {
        /// Return, property, field or event type
        const TYPE = 0x0001;
        /// `static`, `abstract`, ...
        const MODIFIERS = 0x0002;
        /// `public`, `protected`, ...
        const ACCESSIBILITY = 0x0004;
        /// `IFoo.` before explicitly implemented members
        const EXPLICIT_INTERFACE = 0x0008;
        /// Parameter lists
        const PARAMETERS = 0x0010;
        /// `Type.` before the member name
        const CONTAINING_TYPE = 0x0020;
        /// ` = value` of constants and enum members
        const CONSTANT_VALUE = 0x0040;
        /// `ref` returns
        const REF = 0x0080;
    }
}

bitflags! {
    /// Parameter parts to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ParameterOptions: u8 {
        /// `this` of extension methods
        const EXTENSION_THIS = 0x01;
        /// `params`, `ref`, `out`, `in`
        const PARAMS_REF_OUT = 0x02;
        /// Parameter type
        const TYPE = 0x04;
        /// Parameter name
        const NAME = 0x08;
        /// ` = value`
        const DEFAULT_VALUE = 0x10;
    }
}

bitflags! {
    /// Declaration keywords to render
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct KindOptions: u8 {
        /// `namespace`
        const NAMESPACE_KEYWORD = 0x01;
        /// `class`, `struct`, ...
        const TYPE_KEYWORD = 0x02;
        /// `event`
        const MEMBER_KEYWORD = 0x04;
    }
}

bitflags! {
    /// Miscellaneous rendering switches
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MiscellaneousOptions: u8 {
        /// `int` instead of `Int32`
        const USE_SPECIAL_TYPES = 0x01;
        /// `@class` for identifiers that are keywords
        const ESCAPE_KEYWORD_IDENTIFIERS = 0x02;
        /// `Obsolete` instead of `ObsoleteAttribute`
        const REMOVE_ATTRIBUTE_SUFFIX = 0x04;
        /// `Nullable<int>` instead of `int?`
        const EXPAND_NULLABLE = 0x08;
    }
}

bitflags! {
    /// Member naming alternatives
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdditionalMemberOptions: u8 {
        /// Indexers render as `Item` instead of `this`
        const USE_ITEM_PROPERTY_NAME = 0x01;
        /// Operators render as `op_Addition` instead of `operator +`
        const USE_OPERATOR_NAME = 0x02;
    }
}

/// Describes how a symbol is turned into display parts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DisplayFormat {
    /// Global namespace rendering
    pub global_namespace: GlobalNamespaceStyle,
    /// Type qualification
    pub qualification: TypeQualification,
    /// Generic parts
    pub generics: GenericsOptions,
    /// Member parts
    pub members: MemberOptions,
    /// Delegate rendering
    pub delegate_style: DelegateStyle,
    /// Parameter parts
    pub parameters: ParameterOptions,
    /// Property rendering
    pub property_style: PropertyStyle,
    /// Declaration keywords
    pub kinds: KindOptions,
    /// Miscellaneous switches
    pub miscellaneous: MiscellaneousOptions,
    /// Member naming alternatives
    pub additional: AdditionalMemberOptions,
}

impl DisplayFormat {
    /// Bare names with type parameters
    pub const DEFAULT: DisplayFormat = DisplayFormat {
        global_namespace: GlobalNamespaceStyle::Omitted,
        qualification: TypeQualification::NameOnly,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::empty(),
        delegate_style: DelegateStyle::NameOnly,
        parameters: ParameterOptions::empty(),
        property_style: PropertyStyle::NameOnly,
        kinds: KindOptions::empty(),
        miscellaneous: MiscellaneousOptions::empty(),
        additional: AdditionalMemberOptions::empty(),
    };

    /// `Inner`
    pub const TYPE_NAME: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameOnly,
        generics: GenericsOptions::empty(),
        members: MemberOptions::CONTAINING_TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// `Inner<T>`
    pub const TYPE_NAME_AND_TYPE_PARAMETERS: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameOnly,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::CONTAINING_TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// `Outer.Inner`
    pub const TYPE_NAME_AND_CONTAINING_TYPES: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::empty(),
        members: MemberOptions::CONTAINING_TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// `Outer<T>.Inner<U>`
    pub const TYPE_NAME_AND_CONTAINING_TYPES_AND_TYPE_PARAMETERS: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::CONTAINING_TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// `Namespace.Outer.Inner`
    pub const TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES: DisplayFormat = DisplayFormat {
        global_namespace: GlobalNamespaceStyle::OmittedAsContaining,
        qualification: TypeQualification::NameAndContainingTypesAndNamespaces,
        generics: GenericsOptions::empty(),
        members: MemberOptions::CONTAINING_TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// `Namespace.Outer<T>.Inner<U>`
    pub const TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES_AND_TYPE_PARAMETERS: DisplayFormat =
        DisplayFormat {
            global_namespace: GlobalNamespaceStyle::OmittedAsContaining,
            qualification: TypeQualification::NameAndContainingTypesAndNamespaces,
            generics: GenericsOptions::TYPE_PARAMETERS,
            members: MemberOptions::CONTAINING_TYPE,
            ..DisplayFormat::DEFAULT
        };

    /// `namespace Acme.Widgets`
    pub const NAMESPACE_DECLARATION: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypesAndNamespaces,
        kinds: KindOptions::NAMESPACE_KEYWORD,
        ..DisplayFormat::DEFAULT
    };

    /// Complete declaration: `public static int Parse(string s, int radix = 10)`
    pub const FULL_DECLARATION: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::TYPE_PARAMETERS
            .union(GenericsOptions::TYPE_CONSTRAINTS)
            .union(GenericsOptions::VARIANCE),
        members: MemberOptions::TYPE
            .union(MemberOptions::MODIFIERS)
            .union(MemberOptions::ACCESSIBILITY)
            .union(MemberOptions::EXPLICIT_INTERFACE)
            .union(MemberOptions::PARAMETERS)
            .union(MemberOptions::CONSTANT_VALUE)
            .union(MemberOptions::REF),
        delegate_style: DelegateStyle::NameAndSignature,
        parameters: ParameterOptions::EXTENSION_THIS
            .union(ParameterOptions::PARAMS_REF_OUT)
            .union(ParameterOptions::TYPE)
            .union(ParameterOptions::NAME)
            .union(ParameterOptions::DEFAULT_VALUE),
        property_style: PropertyStyle::ShowReadWriteDescriptor,
        kinds: KindOptions::NAMESPACE_KEYWORD
            .union(KindOptions::TYPE_KEYWORD)
            .union(KindOptions::MEMBER_KEYWORD),
        miscellaneous: MiscellaneousOptions::USE_SPECIAL_TYPES
            .union(MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS),
        ..DisplayFormat::DEFAULT
    };

    /// Short signature: `Parse(string, int)`
    pub const SIMPLE_DECLARATION: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameOnly,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::EXPLICIT_INTERFACE.union(MemberOptions::PARAMETERS),
        delegate_style: DelegateStyle::NameAndParameters,
        parameters: ParameterOptions::TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// Signature text used as the last tie-break when sorting declarations
    pub const SORT_DECLARATION_LIST: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::TYPE_PARAMETERS
            .union(GenericsOptions::TYPE_CONSTRAINTS)
            .union(GenericsOptions::VARIANCE),
        members: MemberOptions::PARAMETERS
            .union(MemberOptions::CONSTANT_VALUE)
            .union(MemberOptions::REF),
        delegate_style: DelegateStyle::NameAndParameters,
        parameters: ParameterOptions::EXTENSION_THIS
            .union(ParameterOptions::PARAMS_REF_OUT)
            .union(ParameterOptions::TYPE)
            .union(ParameterOptions::NAME)
            .union(ParameterOptions::DEFAULT_VALUE),
        property_style: PropertyStyle::NameOnly,
        miscellaneous: MiscellaneousOptions::USE_SPECIAL_TYPES,
        ..DisplayFormat::DEFAULT
    };

    /// `Acme.Widget.System.IDisposable.Dispose`
    pub const EXPLICIT_IMPLEMENTATION_FULL_NAME: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypesAndNamespaces,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::EXPLICIT_INTERFACE.union(MemberOptions::CONTAINING_TYPE),
        ..DisplayFormat::DEFAULT
    };

    /// Member page title: `Widget.Resize(Int32, Int32)`
    pub const MEMBER_TITLE: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::TYPE_PARAMETERS,
        members: MemberOptions::EXPLICIT_INTERFACE
            .union(MemberOptions::PARAMETERS)
            .union(MemberOptions::CONTAINING_TYPE),
        delegate_style: DelegateStyle::NameAndParameters,
        parameters: ParameterOptions::TYPE,
        ..DisplayFormat::DEFAULT
    };

    /// Title of a page that lists several overloads: `Widget.Resize`
    pub const OVERLOADED_MEMBER_TITLE: DisplayFormat = DisplayFormat {
        qualification: TypeQualification::NameAndContainingTypes,
        generics: GenericsOptions::empty(),
        members: MemberOptions::EXPLICIT_INTERFACE.union(MemberOptions::CONTAINING_TYPE),
        ..DisplayFormat::DEFAULT
    };

    /// Returns a copy with a different qualification
    #[must_use]
    pub const fn with_qualification(mut self, qualification: TypeQualification) -> Self {
        self.qualification = qualification;
        self
    }

    /// Returns a copy with different generics options
    #[must_use]
    pub const fn with_generics(mut self, generics: GenericsOptions) -> Self {
        self.generics = generics;
        self
    }

    /// Returns a copy with different member options
    #[must_use]
    pub const fn with_members(mut self, members: MemberOptions) -> Self {
        self.members = members;
        self
    }

    /// Returns a copy with additional member naming options
    #[must_use]
    pub const fn with_additional(mut self, additional: AdditionalMemberOptions) -> Self {
        self.additional = self.additional.union(additional);
        self
    }

    /// Returns a copy with additional miscellaneous options
    #[must_use]
    pub const fn with_miscellaneous(mut self, miscellaneous: MiscellaneousOptions) -> Self {
        self.miscellaneous = self.miscellaneous.union(miscellaneous);
        self
    }
}

impl Default for DisplayFormat {
    fn default() -> Self {
        DisplayFormat::DEFAULT
    }
}
