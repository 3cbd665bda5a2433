//! C#-style rendering of symbols and type references.

use std::borrow::Cow;

use crate::{
    display::{
        AdditionalMemberOptions, DelegateStyle, DisplayFormat, DisplayPartKind, DisplayParts,
        GenericsOptions, GlobalNamespaceStyle, KindOptions, MemberOptions, MiscellaneousOptions,
        ParameterOptions, PropertyStyle, TypeQualification,
    },
    symbols::{
        Accessibility, MethodKind, Modifiers, RefKind, SpecialType, SymbolData, SymbolId,
        SymbolKind, SymbolRegistry, TypeKind, TypeParameterConstraints, TypeRef, Variance,
    },
};

/// Reserved C# keywords that need `@` when used as identifiers
const CSHARP_KEYWORDS: &[&str] = &[
    "abstract", "as", "base", "bool", "break", "byte", "case", "catch", "char", "checked",
    "class", "const", "continue", "decimal", "default", "delegate", "do", "double", "else",
    "enum", "event", "explicit", "extern", "false", "finally", "fixed", "float", "for",
    "foreach", "goto", "if", "implicit", "in", "int", "interface", "internal", "is", "lock",
    "long", "namespace", "new", "null", "object", "operator", "out", "override", "params",
    "private", "protected", "public", "readonly", "ref", "return", "sbyte", "sealed", "short",
    "sizeof", "stackalloc", "static", "string", "struct", "switch", "this", "throw", "true",
    "try", "typeof", "uint", "ulong", "unchecked", "unsafe", "ushort", "using", "virtual",
    "void", "volatile", "while",
];

/// Returns the C# token of an operator method name such as `op_Addition`
#[must_use]
pub fn operator_token(metadata_name: &str) -> Option<&'static str> {
    Some(match metadata_name {
        "op_Addition" | "op_UnaryPlus" => "+",
        "op_Subtraction" | "op_UnaryNegation" => "-",
        "op_Multiply" => "*",
        "op_Division" => "/",
        "op_Modulus" => "%",
        "op_BitwiseAnd" => "&",
        "op_BitwiseOr" => "|",
        "op_ExclusiveOr" => "^",
        "op_LeftShift" => "<<",
        "op_RightShift" => ">>",
        "op_UnsignedRightShift" => ">>>",
        "op_Equality" => "==",
        "op_Inequality" => "!=",
        "op_GreaterThan" => ">",
        "op_LessThan" => "<",
        "op_GreaterThanOrEqual" => ">=",
        "op_LessThanOrEqual" => "<=",
        "op_LogicalNot" => "!",
        "op_OnesComplement" => "~",
        "op_Increment" => "++",
        "op_Decrement" => "--",
        "op_True" => "true",
        "op_False" => "false",
        _ => return None,
    })
}

/// Renders a symbol with the given format
///
/// # Example
///
/// ```rust
/// use cildoc::display::{symbol_display_parts, DisplayFormat};
/// use cildoc::symbols::{MethodBuilder, SpecialType, SymbolRegistry, TypeBuilder};
///
/// let mut registry = SymbolRegistry::new();
/// let assembly = registry.add_assembly("Acme", "1.0.0.0");
/// let namespace = registry.namespace(assembly, "Acme")?;
/// let widget = TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
/// let int = registry.special(SpecialType::Int32);
/// let resize = MethodBuilder::new("Resize")
///     .public()
///     .parameter("width", int)
///     .build(&mut registry, widget)?;
///
/// let parts = symbol_display_parts(&registry, resize, &DisplayFormat::FULL_DECLARATION);
/// assert_eq!(parts.to_string(), "public void Resize(int width)");
/// # Ok::<(), cildoc::Error>(())
/// ```
#[must_use]
pub fn symbol_display_parts(
    registry: &SymbolRegistry,
    symbol: SymbolId,
    format: &DisplayFormat,
) -> DisplayParts {
    Renderer::new(registry, *format).symbol(symbol)
}

/// Renders a symbol with the given format into a string
#[must_use]
pub fn to_display_string(registry: &SymbolRegistry, symbol: SymbolId, format: &DisplayFormat) -> String {
    symbol_display_parts(registry, symbol, format).to_string()
}

/// Renders a type reference with the given format
#[must_use]
pub fn type_display_parts(registry: &SymbolRegistry, ty: &TypeRef, format: &DisplayFormat) -> DisplayParts {
    let mut parts = DisplayParts::new();
    Renderer::new(registry, *format).type_ref(&mut parts, ty);
    parts
}

/// One accessor of a `{ get; set; }` descriptor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct AccessorDisplay {
    /// The accessor method
    pub symbol: SymbolId,
    /// Accessibility rendered before the keyword when it differs from the property's
    pub accessibility: Option<Accessibility>,
    /// `get`, `set`, `add` or `remove`
    pub keyword: &'static str,
}

/// Stateless renderer bound to a registry and a format
#[derive(Clone, Copy)]
pub(crate) struct Renderer<'a> {
    pub registry: &'a SymbolRegistry,
    pub format: DisplayFormat,
    pub prefer_default_literal: bool,
}

impl<'a> Renderer<'a> {
    pub fn new(registry: &'a SymbolRegistry, format: DisplayFormat) -> Self {
        Renderer {
            registry,
            format,
            prefer_default_literal: false,
        }
    }

    pub fn with_format(&self, format: DisplayFormat) -> Self {
        Renderer { format, ..*self }
    }

    fn members(&self, option: MemberOptions) -> bool {
        self.format.members.contains(option)
    }

    fn parameters(&self, option: ParameterOptions) -> bool {
        self.format.parameters.contains(option)
    }

    fn generics(&self, option: GenericsOptions) -> bool {
        self.format.generics.contains(option)
    }

    fn misc(&self, option: MiscellaneousOptions) -> bool {
        self.format.miscellaneous.contains(option)
    }

    pub fn escape<'n>(&self, name: &'n str) -> Cow<'n, str> {
        if self.misc(MiscellaneousOptions::ESCAPE_KEYWORD_IDENTIFIERS) && CSHARP_KEYWORDS.contains(&name) {
            Cow::Owned(format!("@{name}"))
        } else {
            Cow::Borrowed(name)
        }
    }

    /// The complete rendering of `id`
    pub fn symbol(&self, id: SymbolId) -> DisplayParts {
        let registry = self.registry;
        let symbol = registry.get(id);
        let mut parts = self.head(id);

        match symbol.kind() {
            SymbolKind::NamedType => {
                if symbol.is_type_kind(TypeKind::Delegate)
                    && self.format.delegate_style != DelegateStyle::NameOnly
                {
                    self.parameter_list(&mut parts, id);
                }
            }
            SymbolKind::Method => {
                if self.members(MemberOptions::PARAMETERS) {
                    self.parameter_list(&mut parts, id);
                }
            }
            SymbolKind::Property => {
                if symbol.is_indexer() && self.members(MemberOptions::PARAMETERS) {
                    self.parameter_list(&mut parts, id);
                }
            }
            _ => {}
        }

        parts.append(self.tail(id));

        if let Some(accessors) = self.accessors(id) {
            parts.space();
            self.accessor_list(&mut parts, &accessors, |_| DisplayParts::new());
        }

        for clause in self.constraint_clauses(id) {
            parts.space();
            parts.append(clause);
        }

        parts
    }

    /// Everything before the parameter list: modifiers, type, name and type parameters
    pub fn head(&self, id: SymbolId) -> DisplayParts {
        let mut parts = DisplayParts::new();
        let symbol = self.registry.get(id);

        match &symbol.data {
            SymbolData::Assembly(data) => {
                let identity = format!(
                    "{}, Version={}, Culture=neutral, PublicKeyToken=null",
                    symbol.name, data.version
                );
                parts.symbol(DisplayPartKind::AssemblyName, id, &identity);
            }
            SymbolData::Namespace(_) => self.namespace_head(&mut parts, id),
            SymbolData::NamedType(_) => self.type_head(&mut parts, id),
            SymbolData::Method(_) => self.method_head(&mut parts, id),
            SymbolData::Property(_) => self.property_head(&mut parts, id),
            SymbolData::Field(_) => self.field_head(&mut parts, id),
            SymbolData::Event(_) => self.event_head(&mut parts, id),
            SymbolData::Parameter(_) => self.parameter(&mut parts, id),
            SymbolData::TypeParameter(_) => {
                parts.symbol(DisplayPartKind::TypeParameterName, id, &symbol.name);
            }
        }

        parts
    }

    fn namespace_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        if self.format.kinds.contains(KindOptions::NAMESPACE_KEYWORD) {
            parts.keyword_space("namespace");
        }

        let symbol = self.registry.get(id);
        if symbol.is_global_namespace() {
            match self.format.global_namespace {
                GlobalNamespaceStyle::Included => parts.keyword("global"),
                _ => parts.text("<global namespace>"),
            }
            return;
        }

        if self.format.qualification == TypeQualification::NameAndContainingTypesAndNamespaces {
            let chain = self.namespace_chain(id);
            for (index, namespace) in chain.iter().enumerate() {
                if index > 0 {
                    parts.punctuation(".");
                }
                let name = self.escape(&self.registry.get(*namespace).name);
                parts.symbol(DisplayPartKind::NamespaceName, *namespace, &name);
            }
        } else {
            let name = self.escape(&symbol.name);
            parts.symbol(DisplayPartKind::NamespaceName, id, &name);
        }
    }

    /// Non-global namespaces from the outermost to `namespace`
    fn namespace_chain(&self, namespace: SymbolId) -> Vec<SymbolId> {
        let mut chain = Vec::new();
        let mut current = Some(namespace);

        while let Some(id) = current {
            let symbol = self.registry.get(id);
            if symbol.kind() != SymbolKind::Namespace || symbol.is_global_namespace() {
                break;
            }
            chain.push(id);
            current = symbol.containing;
        }

        chain.reverse();
        chain
    }

    fn is_interface_member(&self, id: SymbolId) -> bool {
        self.registry
            .containing_type(id)
            .is_some_and(|ty| self.registry.get(ty).is_type_kind(TypeKind::Interface))
    }

    pub fn is_enum_member(&self, id: SymbolId) -> bool {
        self.registry.get(id).kind() == SymbolKind::Field
            && self
                .registry
                .containing_type(id)
                .is_some_and(|ty| self.registry.get(ty).is_type_kind(TypeKind::Enum))
    }

    fn accessibility(&self, parts: &mut DisplayParts, id: SymbolId) {
        if !self.members(MemberOptions::ACCESSIBILITY) {
            return;
        }

        let symbol = self.registry.get(id);
        if self.is_interface_member(id)
            || self.is_enum_member(id)
            || !symbol.explicit_interface_implementations().is_empty()
        {
            return;
        }

        for keyword in symbol.accessibility.keywords() {
            parts.keyword_space(keyword);
        }
    }

    fn member_modifiers(&self, parts: &mut DisplayParts, id: SymbolId) {
        if !self.members(MemberOptions::MODIFIERS)
            || self.is_interface_member(id)
            || self.is_enum_member(id)
        {
            return;
        }

        let symbol = self.registry.get(id);
        let modifiers = symbol.modifiers;

        if modifiers.contains(Modifiers::STATIC) && !modifiers.contains(Modifiers::CONST) {
            parts.keyword_space("static");
        }
        for (flag, keyword) in [
            (Modifiers::OVERRIDE, "override"),
            (Modifiers::ABSTRACT, "abstract"),
            (Modifiers::SEALED, "sealed"),
            (Modifiers::EXTERN, "extern"),
            (Modifiers::VIRTUAL, "virtual"),
        ] {
            if modifiers.contains(flag) {
                parts.keyword_space(keyword);
            }
        }

        if symbol.kind() == SymbolKind::Field {
            for (flag, keyword) in [
                (Modifiers::CONST, "const"),
                (Modifiers::READONLY, "readonly"),
                (Modifiers::VOLATILE, "volatile"),
            ] {
                if modifiers.contains(flag) {
                    parts.keyword_space(keyword);
                }
            }
        }
    }

    fn type_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        let registry = self.registry;
        let symbol = registry.get(id);
        let Some(type_kind) = symbol.type_kind() else {
            return;
        };

        self.accessibility(parts, id);

        if self.members(MemberOptions::MODIFIERS) {
            let modifiers = symbol.modifiers;
            if type_kind == TypeKind::Class {
                if modifiers.contains(Modifiers::STATIC) {
                    parts.keyword_space("static");
                } else if modifiers.contains(Modifiers::ABSTRACT) {
                    parts.keyword_space("abstract");
                } else if modifiers.contains(Modifiers::SEALED) {
                    parts.keyword_space("sealed");
                }
            }
            if type_kind == TypeKind::Struct {
                if modifiers.contains(Modifiers::READONLY) {
                    parts.keyword_space("readonly");
                }
                if modifiers.contains(Modifiers::REF) {
                    parts.keyword_space("ref");
                }
            }
        }

        if type_kind == TypeKind::Delegate && self.format.delegate_style == DelegateStyle::NameAndSignature {
            parts.keyword_space("delegate");
            if let Some(invoke) = symbol.as_type().and_then(|data| data.delegate_invoke) {
                if let Some(data) = registry.get(invoke).as_method() {
                    self.ref_kind(parts, data.ref_kind);
                    self.type_ref(parts, &data.return_type);
                    parts.space();
                }
            }
        } else if self.format.kinds.contains(KindOptions::TYPE_KEYWORD) {
            parts.keyword_space(match type_kind {
                TypeKind::Class => "class",
                TypeKind::Struct => "struct",
                TypeKind::Interface => "interface",
                TypeKind::Enum => "enum",
                TypeKind::Delegate => "delegate",
            });
        }

        self.named_type(parts, id, None, true);
    }

    /// Renders a named type with the format's qualification
    ///
    /// `type_arguments` of a constructed type replace the type parameter names. A declaration
    /// renders variance and never substitutes keyword aliases.
    pub fn named_type(
        &self,
        parts: &mut DisplayParts,
        id: SymbolId,
        type_arguments: Option<&[TypeRef]>,
        is_declaration: bool,
    ) {
        let registry = self.registry;
        let symbol = registry.get(id);

        if !is_declaration && self.misc(MiscellaneousOptions::USE_SPECIAL_TYPES) {
            if let Some(keyword) = symbol.as_type().and_then(|data| data.special_type.keyword()) {
                parts.symbol(DisplayPartKind::Keyword, id, keyword);
                return;
            }
        }

        if self.format.qualification == TypeQualification::NameAndContainingTypesAndNamespaces {
            if self.format.global_namespace == GlobalNamespaceStyle::Included {
                parts.keyword("global");
                parts.punctuation("::");
            }
            if let Some(namespace) = registry.containing_namespace(id) {
                for namespace in self.namespace_chain(namespace) {
                    let name = self.escape(&registry.get(namespace).name);
                    parts.symbol(DisplayPartKind::NamespaceName, namespace, &name);
                    parts.punctuation(".");
                }
            }
        }

        if self.format.qualification != TypeQualification::NameOnly {
            for outer in registry.containing_types(id) {
                self.simple_type_name(parts, outer, None, false);
                parts.punctuation(".");
            }
        }

        self.simple_type_name(parts, id, type_arguments, is_declaration);
    }

    fn simple_type_name(
        &self,
        parts: &mut DisplayParts,
        id: SymbolId,
        type_arguments: Option<&[TypeRef]>,
        is_declaration: bool,
    ) {
        let registry = self.registry;
        let symbol = registry.get(id);
        let kind = symbol
            .type_kind()
            .map_or(DisplayPartKind::ClassName, DisplayPartKind::for_type);

        let mut name = self.escape(&symbol.name).into_owned();
        if self.misc(MiscellaneousOptions::REMOVE_ATTRIBUTE_SUFFIX)
            && kind == DisplayPartKind::ClassName
            && name.len() > "Attribute".len()
            && name.ends_with("Attribute")
        {
            name.truncate(name.len() - "Attribute".len());
        }
        parts.symbol(kind, id, &name);

        if !self.generics(GenericsOptions::TYPE_PARAMETERS) {
            return;
        }

        match type_arguments.filter(|arguments| !arguments.is_empty()) {
            Some(arguments) => {
                parts.punctuation("<");
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        parts.comma_space();
                    }
                    self.type_ref(parts, argument);
                }
                parts.punctuation(">");
            }
            None => self.type_parameter_list(parts, symbol.type_parameters(), is_declaration),
        }
    }

    fn type_parameter_list(&self, parts: &mut DisplayParts, type_parameters: &[SymbolId], is_declaration: bool) {
        if type_parameters.is_empty() {
            return;
        }

        parts.punctuation("<");
        for (index, parameter) in type_parameters.iter().enumerate() {
            if index > 0 {
                parts.comma_space();
            }
            let symbol = self.registry.get(*parameter);
            if is_declaration && self.generics(GenericsOptions::VARIANCE) {
                match symbol.as_type_parameter().map(|data| data.variance) {
                    Some(Variance::In) => parts.keyword_space("in"),
                    Some(Variance::Out) => parts.keyword_space("out"),
                    _ => {}
                }
            }
            parts.symbol(DisplayPartKind::TypeParameterName, *parameter, &symbol.name);
        }
        parts.punctuation(">");
    }

    /// Renders a type as used in a signature
    pub fn type_ref(&self, parts: &mut DisplayParts, ty: &TypeRef) {
        match ty {
            TypeRef::Named {
                definition,
                type_arguments,
            } => {
                if self.registry.special_type_of(ty) == SpecialType::Nullable
                    && type_arguments.len() == 1
                    && !self.misc(MiscellaneousOptions::EXPAND_NULLABLE)
                {
                    self.type_ref(parts, &type_arguments[0]);
                    parts.punctuation("?");
                    return;
                }

                self.named_type(parts, *definition, Some(type_arguments), false);
            }
            TypeRef::TypeParameter(id) => {
                let name = self.escape(&self.registry.get(*id).name);
                parts.symbol(DisplayPartKind::TypeParameterName, *id, &name);
            }
            TypeRef::Array { element, rank } => {
                self.type_ref(parts, element);
                parts.punctuation("[");
                for _ in 1..*rank {
                    parts.punctuation(",");
                }
                parts.punctuation("]");
            }
            TypeRef::Pointer(element) => {
                self.type_ref(parts, element);
                parts.punctuation("*");
            }
        }
    }

    fn ref_kind(&self, parts: &mut DisplayParts, ref_kind: RefKind) {
        if !self.members(MemberOptions::REF) {
            return;
        }

        match ref_kind {
            RefKind::Ref => parts.keyword_space("ref"),
            RefKind::RefReadOnly => {
                parts.keyword_space("ref");
                parts.keyword_space("readonly");
            }
            _ => {}
        }
    }

    fn containing_type_prefix(&self, parts: &mut DisplayParts, id: SymbolId) {
        if !self.members(MemberOptions::CONTAINING_TYPE) {
            return;
        }

        if let Some(ty) = self.registry.containing_type(id) {
            self.named_type(parts, ty, None, false);
            parts.punctuation(".");
        }
    }

    /// `IFoo.` prefix and the implemented member for explicit implementations
    fn explicit_interface(&self, parts: &mut DisplayParts, id: SymbolId) -> Option<SymbolId> {
        let implemented = self.registry.get(id).first_explicit_interface_implementation()?;

        if self.members(MemberOptions::EXPLICIT_INTERFACE) {
            if let Some(interface) = self.registry.containing_type(implemented) {
                self.named_type(parts, interface, None, false);
                parts.punctuation(".");
            }
        }

        Some(implemented)
    }

    fn method_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        let registry = self.registry;
        let symbol = registry.get(id);
        let Some(data) = symbol.as_method() else {
            return;
        };

        self.accessibility(parts, id);
        self.member_modifiers(parts, id);

        let use_operator_name = self
            .format
            .additional
            .contains(AdditionalMemberOptions::USE_OPERATOR_NAME);

        let shows_return_type = !matches!(
            data.method_kind,
            MethodKind::Constructor
                | MethodKind::StaticConstructor
                | MethodKind::Destructor
                | MethodKind::Conversion
        );

        if self.members(MemberOptions::TYPE) && shows_return_type {
            self.ref_kind(parts, data.ref_kind);
            self.type_ref(parts, &data.return_type);
            parts.space();
        }

        if data.method_kind == MethodKind::Conversion && !use_operator_name {
            parts.keyword_space(if symbol.name == "op_Implicit" {
                "implicit"
            } else {
                "explicit"
            });
            parts.keyword_space("operator");
            self.type_ref(parts, &data.return_type);
            return;
        }

        self.containing_type_prefix(parts, id);

        let name_source = self.explicit_interface(parts, id).unwrap_or(id);
        let name = &registry.get(name_source).name;

        match data.method_kind {
            MethodKind::Constructor | MethodKind::StaticConstructor | MethodKind::Destructor => {
                if let Some(ty) = registry.containing_type(id) {
                    if data.method_kind == MethodKind::Destructor {
                        parts.punctuation("~");
                    }
                    let type_name = self.escape(&registry.get(ty).name);
                    parts.symbol(DisplayPartKind::ClassName, id, &type_name);
                }
            }
            MethodKind::UserDefinedOperator if !use_operator_name => {
                parts.keyword_space("operator");
                match operator_token(name) {
                    Some(token @ ("true" | "false")) => parts.keyword(token),
                    Some(token) => parts.operator(token),
                    None => parts.symbol(DisplayPartKind::MethodName, id, name),
                }
            }
            _ => {
                let kind = if data.is_extension {
                    DisplayPartKind::ExtensionMethodName
                } else {
                    DisplayPartKind::MethodName
                };
                let name = self.escape(name);
                parts.symbol(kind, id, &name);
            }
        }

        if self.generics(GenericsOptions::TYPE_PARAMETERS) {
            self.type_parameter_list(parts, &data.type_parameters, true);
        }
    }

    fn property_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        let registry = self.registry;
        let symbol = registry.get(id);
        let Some(data) = symbol.as_property() else {
            return;
        };

        self.accessibility(parts, id);
        self.member_modifiers(parts, id);

        if self.members(MemberOptions::TYPE) {
            self.ref_kind(parts, data.ref_kind);
            self.type_ref(parts, &data.ty);
            parts.space();
        }

        self.containing_type_prefix(parts, id);
        let name_source = self.explicit_interface(parts, id).unwrap_or(id);
        let target = registry.get(name_source);

        if target.is_indexer() {
            if self
                .format
                .additional
                .contains(AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME)
            {
                parts.symbol(DisplayPartKind::PropertyName, id, "Item");
            } else {
                parts.symbol(DisplayPartKind::Keyword, id, "this");
            }
        } else {
            let name = self.escape(&target.name);
            parts.symbol(DisplayPartKind::PropertyName, id, &name);
        }
    }

    fn field_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        let symbol = self.registry.get(id);
        let Some(data) = symbol.as_field() else {
            return;
        };

        self.accessibility(parts, id);
        self.member_modifiers(parts, id);

        let is_enum_member = self.is_enum_member(id);
        if self.members(MemberOptions::TYPE) && !is_enum_member {
            self.type_ref(parts, &data.ty);
            parts.space();
        }

        self.containing_type_prefix(parts, id);

        let kind = if is_enum_member {
            DisplayPartKind::EnumMemberName
        } else if symbol.is_const() {
            DisplayPartKind::ConstantName
        } else {
            DisplayPartKind::FieldName
        };
        let name = self.escape(&symbol.name);
        parts.symbol(kind, id, &name);
    }

    fn event_head(&self, parts: &mut DisplayParts, id: SymbolId) {
        let symbol = self.registry.get(id);
        let Some(data) = symbol.as_event() else {
            return;
        };

        self.accessibility(parts, id);
        self.member_modifiers(parts, id);

        if self.format.kinds.contains(KindOptions::MEMBER_KEYWORD) {
            parts.keyword_space("event");
        }

        if self.members(MemberOptions::TYPE) {
            self.type_ref(parts, &data.ty);
            parts.space();
        }

        self.containing_type_prefix(parts, id);
        let name_source = self.explicit_interface(parts, id).unwrap_or(id);
        let name = self.escape(&self.registry.get(name_source).name);
        parts.symbol(DisplayPartKind::EventName, id, &name);
    }

    /// Renders one parameter without its attributes
    pub fn parameter(&self, parts: &mut DisplayParts, id: SymbolId) {
        let symbol = self.registry.get(id);
        let Some(data) = symbol.as_parameter() else {
            return;
        };

        if data.is_this && self.parameters(ParameterOptions::EXTENSION_THIS) {
            parts.keyword_space("this");
        }

        if self.parameters(ParameterOptions::PARAMS_REF_OUT) {
            if data.is_params {
                parts.keyword_space("params");
            }
            match data.ref_kind {
                RefKind::None => {}
                RefKind::Ref => parts.keyword_space("ref"),
                RefKind::Out => parts.keyword_space("out"),
                RefKind::In => parts.keyword_space("in"),
                RefKind::RefReadOnly => {
                    parts.keyword_space("ref");
                    parts.keyword_space("readonly");
                }
            }
        }

        let include_type = self.parameters(ParameterOptions::TYPE);
        if include_type {
            self.type_ref(parts, &data.ty);
        }

        if self.parameters(ParameterOptions::NAME) {
            if include_type {
                parts.space();
            }
            let name = self.escape(&symbol.name);
            parts.symbol(DisplayPartKind::ParameterName, id, &name);
        }

        if self.parameters(ParameterOptions::DEFAULT_VALUE) {
            if let Some(value) = &data.default_value {
                parts.space();
                parts.punctuation("=");
                parts.space();
                self.default_value(parts, value, &data.ty);
            }
        }
    }

    /// Returns the parameter list delimiters of `id`
    pub fn parameter_delimiters(&self, id: SymbolId) -> (&'static str, &'static str) {
        if self.registry.get(id).is_indexer() {
            ("[", "]")
        } else {
            ("(", ")")
        }
    }

    fn parameter_list(&self, parts: &mut DisplayParts, id: SymbolId) {
        let (open, close) = self.parameter_delimiters(id);

        parts.punctuation(open);
        for (index, parameter) in self.registry.parameters(id).iter().enumerate() {
            if index > 0 {
                parts.comma_space();
            }
            self.parameter(parts, *parameter);
        }
        parts.punctuation(close);
    }

    /// ` = value` of constants and enum members
    pub fn tail(&self, id: SymbolId) -> DisplayParts {
        let mut parts = DisplayParts::new();
        if !self.members(MemberOptions::CONSTANT_VALUE) {
            return parts;
        }

        let Some(data) = self.registry.get(id).as_field() else {
            return parts;
        };
        let Some(value) = &data.constant else {
            return parts;
        };

        parts.space();
        parts.punctuation("=");
        parts.space();

        if self.is_enum_member(id) {
            self.primitive(&mut parts, value);
        } else {
            self.default_value(&mut parts, value, &data.ty);
        }

        parts
    }

    /// Accessors shown in a `{ get; set; }` descriptor
    pub fn accessors(&self, id: SymbolId) -> Option<Vec<AccessorDisplay>> {
        if self.format.property_style != PropertyStyle::ShowReadWriteDescriptor {
            return None;
        }

        let symbol = self.registry.get(id);
        let data = symbol.as_property()?;
        let show_accessibility =
            self.members(MemberOptions::ACCESSIBILITY) && !self.is_interface_member(id);

        let accessors = [(data.getter, "get"), (data.setter, "set")]
            .into_iter()
            .filter_map(|(accessor, keyword)| {
                let accessor = accessor?;
                let accessibility = self.registry.get(accessor).accessibility;
                Some(AccessorDisplay {
                    symbol: accessor,
                    accessibility: (show_accessibility
                        && symbol.explicit_interface_implementations().is_empty()
                        && accessibility != symbol.accessibility)
                        .then_some(accessibility),
                    keyword,
                })
            })
            .collect();

        Some(accessors)
    }

    /// Renders `{ get; set; }`, inserting the parts returned by `attributes` before each keyword
    pub fn accessor_list(
        &self,
        parts: &mut DisplayParts,
        accessors: &[AccessorDisplay],
        attributes: impl Fn(SymbolId) -> DisplayParts,
    ) {
        parts.punctuation("{");
        parts.space();
        for accessor in accessors {
            let accessor_attributes = attributes(accessor.symbol);
            if !accessor_attributes.is_empty() {
                parts.append(accessor_attributes);
                parts.space();
            }
            if let Some(accessibility) = accessor.accessibility {
                for keyword in accessibility.keywords() {
                    parts.keyword_space(keyword);
                }
            }
            parts.keyword(accessor.keyword);
            parts.punctuation(";");
            parts.space();
        }
        parts.punctuation("}");
    }

    /// `where T : class, new()` clauses of a generic type or method
    pub fn constraint_clauses(&self, id: SymbolId) -> Vec<DisplayParts> {
        if !self.generics(GenericsOptions::TYPE_CONSTRAINTS) {
            return Vec::new();
        }

        let symbol = self.registry.get(id);
        let type_parameters = match symbol.kind() {
            SymbolKind::NamedType | SymbolKind::Method => symbol.type_parameters(),
            _ => return Vec::new(),
        };

        let mut clauses = Vec::new();
        for parameter in type_parameters {
            let parameter_symbol = self.registry.get(*parameter);
            let Some(data) = parameter_symbol.as_type_parameter() else {
                continue;
            };

            let mut items: Vec<DisplayParts> = Vec::new();
            let constraints = data.constraints;

            let keyword_item = |keyword: &str| {
                let mut item = DisplayParts::new();
                item.keyword(keyword);
                item
            };

            if constraints.contains(TypeParameterConstraints::REFERENCE_TYPE) {
                items.push(keyword_item("class"));
            }
            if constraints.contains(TypeParameterConstraints::UNMANAGED) {
                items.push(keyword_item("unmanaged"));
            } else if constraints.contains(TypeParameterConstraints::VALUE_TYPE) {
                items.push(keyword_item("struct"));
            }
            if constraints.contains(TypeParameterConstraints::NOT_NULL) {
                items.push(keyword_item("notnull"));
            }
            for constraint in &data.constraint_types {
                let mut item = DisplayParts::new();
                self.type_ref(&mut item, constraint);
                items.push(item);
            }
            if constraints.contains(TypeParameterConstraints::CONSTRUCTOR) {
                let mut item = keyword_item("new");
                item.punctuation("(");
                item.punctuation(")");
                items.push(item);
            }

            if items.is_empty() {
                continue;
            }

            let mut clause = DisplayParts::new();
            clause.keyword_space("where");
            clause.symbol(DisplayPartKind::TypeParameterName, *parameter, &parameter_symbol.name);
            clause.space();
            clause.punctuation(":");
            clause.space();
            for (index, item) in items.into_iter().enumerate() {
                if index > 0 {
                    clause.comma_space();
                }
                clause.append(item);
            }
            clauses.push(clause);
        }

        clauses
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test::factories::{fixture, Fixture};

    fn full(fixture: &Fixture, id: SymbolId) -> String {
        to_display_string(&fixture.registry, id, &DisplayFormat::FULL_DECLARATION)
    }

    #[test]
    fn type_declarations() {
        let fixture = fixture();

        assert_eq!(
            full(&fixture, fixture.repository),
            "public class Repository<T> where T : class, new()"
        );
        assert_eq!(full(&fixture, fixture.color), "public enum Color");
        assert_eq!(
            full(&fixture, fixture.callback),
            "public delegate void Callback(string message)"
        );
        assert_eq!(full(&fixture, fixture.reader), "public interface IReader<out T>");
    }

    #[test]
    fn member_declarations() {
        let fixture = fixture();

        assert_eq!(
            full(&fixture, fixture.find),
            "public T Find(int id, string name = null)"
        );
        assert_eq!(full(&fixture, fixture.count), "public int Count { get; private set; }");
        assert_eq!(full(&fixture, fixture.indexer), "public T this[int index] { get; }");
        assert_eq!(full(&fixture, fixture.max_size), "public const int MaxSize = 100");
        assert_eq!(full(&fixture, fixture.red), "Red = 1");
        assert_eq!(full(&fixture, fixture.changed), "public event EventHandler Changed");
        assert_eq!(
            full(&fixture, fixture.explicit_read),
            "T IReader<T>.Read()"
        );
        assert_eq!(
            full(&fixture, fixture.addition),
            "public static Money operator +(Money left, Money right)"
        );
    }

    #[test]
    fn titles_and_names() {
        let fixture = fixture();
        let registry = &fixture.registry;

        assert_eq!(
            to_display_string(registry, fixture.find, &DisplayFormat::MEMBER_TITLE),
            "Repository<T>.Find(Int32, String)"
        );
        assert_eq!(
            to_display_string(registry, fixture.find, &DisplayFormat::OVERLOADED_MEMBER_TITLE),
            "Repository.Find"
        );
        assert_eq!(
            to_display_string(
                registry,
                fixture.repository,
                &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES
            ),
            "Acme.Data.Repository"
        );
        assert_eq!(
            to_display_string(
                registry,
                fixture.indexer,
                &DisplayFormat::SIMPLE_DECLARATION.with_additional(AdditionalMemberOptions::USE_ITEM_PROPERTY_NAME)
            ),
            "Item[Int32]"
        );
    }

    #[test]
    fn type_references() {
        let fixture = fixture();
        let registry = &fixture.registry;
        let int = registry.special(SpecialType::Int32);
        let nullable = TypeRef::generic(registry.special_type(SpecialType::Nullable), vec![int.clone()]);

        let format = DisplayFormat::FULL_DECLARATION;
        assert_eq!(type_display_parts(registry, &nullable, &format).to_string(), "int?");
        assert_eq!(
            type_display_parts(registry, &int.clone().array(), &format).to_string(),
            "int[]"
        );
        assert_eq!(
            type_display_parts(registry, &int.pointer(), &DisplayFormat::TYPE_NAME_AND_CONTAINING_TYPES_AND_NAMESPACES)
                .to_string(),
            "System.Int32*"
        );
    }
}
