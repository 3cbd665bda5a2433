//! Factory for a representative symbol graph.
//!
//! The fixture covers every symbol kind the renderer, the comparers and the documentation model
//! distinguish: a `[Flags]` enum, an attribute with enum arguments, a delegate, a covariant
//! interface, a generic class with constraints, explicit implementation, indexer, constant,
//! event and overloads, structs with an operator, and a collection class with a constructed
//! interface.

use crate::symbols::{
    Accessibility, AttributeData, ConstantValue, EventBuilder, FieldBuilder, MethodBuilder, Modifiers,
    ParameterBuilder, PropertyBuilder, SpecialType, SymbolData, SymbolId, SymbolRegistry,
    TypeBuilder, TypeParameterBuilder, TypeRef, TypedConstant,
};

/// Symbols of the representative graph
pub struct Fixture {
    pub registry: SymbolRegistry,
    pub assembly: SymbolId,
    pub namespace: SymbolId,
    pub color: SymbolId,
    pub red: SymbolId,
    pub palette: SymbolId,
    pub painter: SymbolId,
    pub resize: SymbolId,
    pub callback: SymbolId,
    pub reader: SymbolId,
    pub read: SymbolId,
    pub repository: SymbolId,
    pub constructor: SymbolId,
    pub max_size: SymbolId,
    pub count: SymbolId,
    pub indexer: SymbolId,
    pub find: SymbolId,
    pub save: SymbolId,
    pub save_overwrite: SymbolId,
    pub explicit_read: SymbolId,
    pub changed: SymbolId,
    pub dispose: SymbolId,
    pub secret: SymbolId,
    pub money: SymbolId,
    pub addition: SymbolId,
    pub size: SymbolId,
    pub widget: SymbolId,
    pub collection: SymbolId,
}

fn core_type(registry: &SymbolRegistry, metadata_name: &str) -> SymbolId {
    registry
        .find_type(metadata_name)
        .unwrap_or_else(|| panic!("core library lacks {metadata_name}"))
}

/// Builds the representative graph in namespace `Acme.Data` of assembly `Acme`
pub fn fixture() -> Fixture {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("Acme", "1.2.0.0");
    let namespace = registry.namespace(assembly, "Acme.Data").unwrap();

    let int = registry.special(SpecialType::Int32);
    let string = registry.special(SpecialType::String);
    let boolean = registry.special(SpecialType::Boolean);
    let flags = core_type(&registry, "System.FlagsAttribute");
    let obsolete = core_type(&registry, "System.ObsoleteAttribute");
    let attribute = core_type(&registry, "System.Attribute");
    let disposable = core_type(&registry, "System.IDisposable");
    let event_handler = core_type(&registry, "System.EventHandler");
    let step_through = core_type(&registry, "System.Diagnostics.DebuggerStepThroughAttribute");

    let color = TypeBuilder::enumeration("Color")
        .public()
        .attribute(AttributeData::new(flags))
        .documentation("<summary>Primary colors.</summary>")
        .enum_field("None", 0)
        .enum_field("Red", 1)
        .enum_field("Green", 2)
        .enum_field("Blue", 4)
        .build(&mut registry, namespace)
        .unwrap();
    let red = registry.members(color)[1];

    let palette = TypeBuilder::class("PaletteAttribute")
        .public()
        .modifiers(Modifiers::SEALED)
        .base_type(TypeRef::named(attribute))
        .build(&mut registry, namespace)
        .unwrap();

    let size = TypeBuilder::structure("Size")
        .public()
        .build(&mut registry, namespace)
        .unwrap();

    let painter = TypeBuilder::class("Painter")
        .public()
        .attribute(
            AttributeData::new(palette)
                .argument(TypedConstant::Enum {
                    enum_type: color,
                    value: ConstantValue::Int32(5),
                })
                .named_argument(
                    "Mode",
                    TypedConstant::Enum {
                        enum_type: color,
                        value: ConstantValue::Int32(64),
                    },
                ),
        )
        .build(&mut registry, namespace)
        .unwrap();
    let nullable_int = TypeRef::generic(
        registry.special_type(SpecialType::Nullable),
        vec![int.clone()],
    );
    let resize = MethodBuilder::new("Resize")
        .public()
        .parameter_with(ParameterBuilder::new("size", TypeRef::named(size)).default_value(ConstantValue::Null))
        .parameter_with(ParameterBuilder::new("limit", nullable_int).default_value(ConstantValue::Null))
        .build(&mut registry, painter)
        .unwrap();

    let callback = TypeBuilder::delegate("Callback")
        .public()
        .parameter("message", string.clone())
        .build(&mut registry, namespace)
        .unwrap();

    let reader = TypeBuilder::interface("IReader")
        .public()
        .type_parameter(TypeParameterBuilder::new("T").covariant())
        .documentation("<summary>Reads values.</summary>")
        .build(&mut registry, namespace)
        .unwrap();
    let reader_t = TypeRef::TypeParameter(registry.get(reader).type_parameters()[0]);
    let read = MethodBuilder::new("Read")
        .returns(reader_t)
        .documentation("<summary>Reads the next value.</summary><returns>The value.</returns>")
        .build(&mut registry, reader)
        .unwrap();

    let repository = TypeBuilder::class("Repository")
        .public()
        .type_parameter(
            TypeParameterBuilder::new("T")
                .class_constraint()
                .constructor_constraint(),
        )
        .implements(TypeRef::named(disposable))
        .attribute(
            AttributeData::new(obsolete)
                .argument(TypedConstant::Primitive(ConstantValue::String("Use Store".into())))
                .argument(TypedConstant::Primitive(ConstantValue::Bool(false))),
        )
        .documentation("<summary>Stores <typeparamref name=\"T\"/> items.</summary>")
        .build(&mut registry, namespace)
        .unwrap();
    let t = TypeRef::TypeParameter(registry.get(repository).type_parameters()[0]);
    if let SymbolData::NamedType(data) = &mut registry.get_mut(repository).data {
        data.interfaces.push(TypeRef::generic(reader, vec![t.clone()]));
    }

    let constructor = MethodBuilder::constructor()
        .public()
        .build(&mut registry, repository)
        .unwrap();
    let max_size = FieldBuilder::new("MaxSize", int.clone())
        .public()
        .constant(ConstantValue::Int32(100))
        .build(&mut registry, repository)
        .unwrap();
    let count = PropertyBuilder::new("Count", int.clone())
        .public()
        .getter()
        .setter_with(Accessibility::Private)
        .getter_attribute(AttributeData::new(step_through))
        .documentation("<summary>Number of stored items.</summary><value>A non-negative count.</value>")
        .build(&mut registry, repository)
        .unwrap();
    let indexer = PropertyBuilder::indexer(t.clone())
        .public()
        .getter()
        .parameter("index", int.clone())
        .build(&mut registry, repository)
        .unwrap();
    let find = MethodBuilder::new("Find")
        .public()
        .parameter("id", int)
        .parameter_with(ParameterBuilder::new("name", string).default_value(ConstantValue::Null))
        .returns(t.clone())
        .documentation(
            "<summary>Finds an item.</summary>\
             <param name=\"id\">The identifier.</param>\
             <param name=\"name\">An optional name.</param>\
             <returns>The item, or <see langword=\"null\"/>.</returns>\
             <exception cref=\"T:System.ArgumentException\">The id is negative.</exception>",
        )
        .build(&mut registry, repository)
        .unwrap();
    let save = MethodBuilder::new("Save")
        .public()
        .parameter("item", t.clone())
        .documentation("<summary>Saves an item.</summary>")
        .build(&mut registry, repository)
        .unwrap();
    let save_overwrite = MethodBuilder::new("Save")
        .public()
        .parameter("item", t.clone())
        .parameter("overwrite", boolean)
        .documentation("<inheritdoc/>")
        .build(&mut registry, repository)
        .unwrap();
    let explicit_read = MethodBuilder::new("Read")
        .implements(read)
        .returns(t)
        .build(&mut registry, repository)
        .unwrap();
    let changed = EventBuilder::new("Changed", TypeRef::named(event_handler))
        .public()
        .build(&mut registry, repository)
        .unwrap();
    let dispose = MethodBuilder::new("Dispose")
        .public()
        .build(&mut registry, repository)
        .unwrap();
    let secret = FieldBuilder::new("secret", registry.special(SpecialType::Object))
        .private()
        .build(&mut registry, repository)
        .unwrap();

    let money = TypeBuilder::structure("Money")
        .public()
        .build(&mut registry, namespace)
        .unwrap();
    let addition = MethodBuilder::operator("op_Addition")
        .parameter("left", TypeRef::named(money))
        .parameter("right", TypeRef::named(money))
        .returns(TypeRef::named(money))
        .build(&mut registry, money)
        .unwrap();

    let widget = TypeBuilder::class("Widget")
        .public()
        .build(&mut registry, namespace)
        .unwrap();
    let enumerable = registry.special_type(SpecialType::IEnumerableT);
    let collection = TypeBuilder::class("WidgetCollection")
        .public()
        .implements(TypeRef::generic(enumerable, vec![TypeRef::named(widget)]))
        .implements(TypeRef::named(disposable))
        .build(&mut registry, namespace)
        .unwrap();

    Fixture {
        registry,
        assembly,
        namespace,
        color,
        red,
        palette,
        painter,
        resize,
        callback,
        reader,
        read,
        repository,
        constructor,
        max_size,
        count,
        indexer,
        find,
        save,
        save_overwrite,
        explicit_read,
        changed,
        dispose,
        secret,
        money,
        addition,
        size,
        widget,
        collection,
    }
}
