//! Documentation comment IDs.
//!
//! Every documentable symbol has a string identity that compilers emit into the `name`
//! attribute of `<member>` elements of XML documentation files, e.g.
//! `M:Acme.Widget.Resize(System.Int32,System.Int32)`. The same string links `cref` attributes to
//! symbols and is the source of URL fragments.

use super::{RefKind, SymbolData, SymbolId, SymbolKind, SymbolRegistry, TypeRef};

/// Returns the documentation comment ID of a symbol
///
/// Assemblies, parameters and type parameters have no ID and return `None`.
///
/// # Example
///
/// ```rust
/// use cildoc::symbols::{documentation_comment_id, SpecialType, SymbolRegistry};
///
/// let registry = SymbolRegistry::new();
/// let int = registry.special_type(SpecialType::Int32);
/// assert_eq!(documentation_comment_id(&registry, int).as_deref(), Some("T:System.Int32"));
/// ```
#[must_use]
pub fn documentation_comment_id(registry: &SymbolRegistry, id: SymbolId) -> Option<String> {
    let symbol = registry.get(id);

    let prefix = match symbol.kind() {
        SymbolKind::Namespace => return Some(format!("N:{}", registry.namespace_name(id))),
        SymbolKind::NamedType => return Some(format!("T:{}", type_name(registry, id))),
        SymbolKind::Method => "M:",
        SymbolKind::Property => "P:",
        SymbolKind::Field => "F:",
        SymbolKind::Event => "E:",
        SymbolKind::Assembly | SymbolKind::Parameter | SymbolKind::TypeParameter => return None,
    };

    let mut result = String::from(prefix);
    if let Some(ty) = registry.containing_type(id) {
        result.push_str(&type_name(registry, ty));
        result.push('.');
    }
    result.push_str(&member_name(&symbol.metadata_name()));

    if let SymbolData::Method(data) = &symbol.data {
        if !data.type_parameters.is_empty() {
            result.push_str("``");
            result.push_str(&data.type_parameters.len().to_string());
        }
    }

    let parameters = symbol.parameters();
    if !parameters.is_empty() {
        result.push('(');
        for (index, parameter) in parameters.iter().enumerate() {
            if index > 0 {
                result.push(',');
            }
            if let Some(data) = registry.get(*parameter).as_parameter() {
                write_type(registry, &data.ty, &mut result);
                if data.ref_kind != RefKind::None {
                    result.push('@');
                }
            }
        }
        result.push(')');
    }

    if let SymbolData::Method(data) = &symbol.data {
        if data.method_kind == super::MethodKind::Conversion {
            result.push('~');
            write_type(registry, &data.return_type, &mut result);
        }
    }

    Some(result)
}

fn member_name(name: &str) -> String {
    match name {
        ".ctor" => "#ctor".to_string(),
        ".cctor" => "#cctor".to_string(),
        _ => name
            .chars()
            .filter(|c| *c != ' ')
            .map(|c| match c {
                '.' => '#',
                '<' => '{',
                '>' => '}',
                other => other,
            })
            .collect(),
    }
}

/// `Namespace.Outer`1.Inner` with arity markers on every generic level
fn type_name(registry: &SymbolRegistry, ty: SymbolId) -> String {
    let mut name = registry.containing_namespace_name(ty);

    for outer in registry
        .containing_types(ty)
        .into_iter()
        .chain(std::iter::once(ty))
    {
        if !name.is_empty() {
            name.push('.');
        }
        name.push_str(&registry.get(outer).metadata_name());
    }

    name
}

fn write_type(registry: &SymbolRegistry, ty: &TypeRef, out: &mut String) {
    match ty {
        TypeRef::Named {
            definition,
            type_arguments,
        } => {
            if type_arguments.is_empty() {
                out.push_str(&type_name(registry, *definition));
                return;
            }

            let mut name = registry.containing_namespace_name(*definition);
            for outer in registry.containing_types(*definition) {
                if !name.is_empty() {
                    name.push('.');
                }
                name.push_str(&registry.get(outer).metadata_name());
            }
            if !name.is_empty() {
                name.push('.');
            }
            name.push_str(&registry.get(*definition).name);
            out.push_str(&name);
            out.push('{');
            for (index, argument) in type_arguments.iter().enumerate() {
                if index > 0 {
                    out.push(',');
                }
                write_type(registry, argument, out);
            }
            out.push('}');
        }
        TypeRef::TypeParameter(id) => {
            let Some(data) = registry.get(*id).as_type_parameter() else {
                return;
            };

            if data.is_method_type_parameter {
                out.push_str("``");
                out.push_str(&data.ordinal.to_string());
            } else {
                let owner = registry.get(*id).containing;
                let outer_count: usize = owner
                    .map(|owner| {
                        registry
                            .containing_types(owner)
                            .iter()
                            .map(|outer| registry.get(*outer).arity())
                            .sum()
                    })
                    .unwrap_or(0);
                out.push('`');
                out.push_str(&(outer_count + data.ordinal).to_string());
            }
        }
        TypeRef::Array { element, rank } => {
            write_type(registry, element, out);
            if *rank <= 1 {
                out.push_str("[]");
            } else {
                out.push('[');
                for dimension in 0..*rank {
                    if dimension > 0 {
                        out.push(',');
                    }
                    out.push_str("0:");
                }
                out.push(']');
            }
        }
        TypeRef::Pointer(element) => {
            write_type(registry, element, out);
            out.push('*');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{
        MethodBuilder, ParameterBuilder, PropertyBuilder, SpecialType, TypeBuilder,
    };

    #[test]
    fn member_ids() {
        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let namespace = registry.namespace(assembly, "Acme").unwrap();
        let int = registry.special(SpecialType::Int32);
        let string = registry.special(SpecialType::String);

        let outer = TypeBuilder::class("Outer")
            .type_parameter("T")
            .public()
            .build(&mut registry, namespace)
            .unwrap();
        let inner = TypeBuilder::class("Inner")
            .public()
            .type_parameter("U")
            .build(&mut registry, outer)
            .unwrap();
        let t = TypeRef::TypeParameter(registry.get(outer).type_parameters()[0]);
        let u = TypeRef::TypeParameter(registry.get(inner).type_parameters()[0]);

        let constructor = MethodBuilder::constructor()
            .public()
            .parameter("value", int.clone())
            .build(&mut registry, inner)
            .unwrap();
        let method = MethodBuilder::new("Map")
            .public()
            .type_parameter("V")
            .parameter("first", t)
            .parameter("second", u.array())
            .parameter_with(ParameterBuilder::new("text", string).ref_kind(RefKind::Out))
            .build(&mut registry, inner)
            .unwrap();
        let v = registry.get(method).type_parameters()[0];
        ParameterBuilder::new("last", TypeRef::TypeParameter(v))
            .build(&mut registry, method)
            .unwrap();
        let indexer = PropertyBuilder::indexer(int.clone())
            .public()
            .getter()
            .parameter("index", int)
            .build(&mut registry, inner)
            .unwrap();

        assert_eq!(
            documentation_comment_id(&registry, inner).unwrap(),
            "T:Acme.Outer`1.Inner`1"
        );
        assert_eq!(
            documentation_comment_id(&registry, constructor).unwrap(),
            "M:Acme.Outer`1.Inner`1.#ctor(System.Int32)"
        );
        assert_eq!(
            documentation_comment_id(&registry, method).unwrap(),
            "M:Acme.Outer`1.Inner`1.Map``1(`0,`1[],System.String@,``0)"
        );
        assert_eq!(
            documentation_comment_id(&registry, indexer).unwrap(),
            "P:Acme.Outer`1.Inner`1.Item(System.Int32)"
        );
        assert_eq!(
            documentation_comment_id(&registry, namespace).unwrap(),
            "N:Acme"
        );
        assert_eq!(documentation_comment_id(&registry, assembly), None);
    }

    #[test]
    fn conversion_and_constructed_types() {
        let mut registry = SymbolRegistry::new();
        let assembly = registry.add_assembly("Acme", "1.0.0.0");
        let namespace = registry.namespace(assembly, "Acme").unwrap();
        let int = registry.special(SpecialType::Int32);
        let enumerable = registry.special_type(SpecialType::IEnumerableT);

        let money = TypeBuilder::structure("Money")
            .public()
            .build(&mut registry, namespace)
            .unwrap();
        let conversion = MethodBuilder::conversion(true)
            .parameter("value", TypeRef::named(money))
            .returns(int.clone())
            .build(&mut registry, money)
            .unwrap();
        let sum = MethodBuilder::new("Sum")
            .public()
            .modifiers(crate::symbols::Modifiers::STATIC)
            .parameter("values", TypeRef::generic(enumerable, vec![int]))
            .build(&mut registry, money)
            .unwrap();

        assert_eq!(
            documentation_comment_id(&registry, conversion).unwrap(),
            "M:Acme.Money.op_Implicit(Acme.Money)~System.Int32"
        );
        assert_eq!(
            documentation_comment_id(&registry, sum).unwrap(),
            "M:Acme.Money.Sum(System.Collections.Generic.IEnumerable{System.Int32})"
        );
    }
}
