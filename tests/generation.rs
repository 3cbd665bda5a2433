use cildoc::{
    enums::{get_constituent_fields, get_minimal_constituent_fields, OneOrMany},
    filter::{SymbolFilterOptions, Visibility},
    generator::{CancellationToken, DocumentationFileKind, DocumentationGenerator},
    model::DocumentationModel,
    prelude::*,
    urls::{get_folders, get_fragment, get_overloads_fragment},
    writer::PageWriter,
    DocumentationDepth,
};
use pretty_assertions::assert_eq;

fn model_of(registry: &SymbolRegistry, assembly: SymbolId) -> DocumentationModel<'_> {
    DocumentationModel::new(registry, [assembly], SymbolFilterOptions::default(), Vec::<&str>::new())
}

#[test]
fn nested_generic_type_folders() -> cildoc::Result<()> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("N", "1.0.0.0");
    let namespace = registry.namespace(assembly, "N")?;
    let outer = TypeBuilder::class("Outer").public().build(&mut registry, namespace)?;
    let inner = TypeBuilder::class("Inner")
        .public()
        .type_parameter("T")
        .build(&mut registry, outer)?;

    assert_eq!(
        get_folders(&registry, inner),
        Some(vec!["N".to_string(), "Outer".to_string(), "Inner-1".to_string()])
    );

    let fragment = get_fragment(&registry, inner).unwrap();
    assert!(fragment.chars().all(|c| c.is_alphanumeric() || c == '_'));
    Ok(())
}

#[test]
fn overloads_share_one_anchor() -> cildoc::Result<()> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("N", "1.0.0.0");
    let namespace = registry.namespace(assembly, "N")?;
    let widget = TypeBuilder::class("Widget").public().build(&mut registry, namespace)?;
    let int = registry.special(SpecialType::Int32);
    let first = MethodBuilder::new("Foo").public().build(&mut registry, widget)?;
    let second = MethodBuilder::new("Foo")
        .public()
        .parameter("count", int)
        .build(&mut registry, widget)?;
    let single = MethodBuilder::new("Bar").public().build(&mut registry, widget)?;

    let model = model_of(&registry, assembly);
    let options = DocumentationOptions::default();
    let resources = DocumentationResources::default();
    let provider = MarkdownUrlProvider::default();
    let mut page = PageWriter::new(MarkdownWriter::new(), &model, &options, &resources, &provider);
    page.set_current_symbol(Some(widget));

    let expected = format!(
        "./Foo/README.md#{}",
        get_overloads_fragment(&registry, first).unwrap()
    );
    assert_eq!(page.get_url(first), Some(expected.clone()));
    assert_eq!(page.get_url(second), Some(expected));
    assert_eq!(page.get_url(single), Some("./Bar/README.md".to_string()));
    assert_ne!(get_fragment(&registry, first), get_fragment(&registry, second));
    Ok(())
}

#[test]
fn flag_decomposition() -> cildoc::Result<()> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("N", "1.0.0.0");
    let namespace = registry.namespace(assembly, "N")?;
    let flags = registry.find_type("System.FlagsAttribute").unwrap();
    let letters = TypeBuilder::enumeration("Letters")
        .public()
        .attribute(AttributeData::new(flags))
        .enum_field("None", 0)
        .enum_field("A", 1)
        .enum_field("B", 2)
        .enum_field("C", 4)
        .enum_field("AB", 3)
        .build(&mut registry, namespace)?;

    let field = |name: &str| {
        registry
            .members(letters)
            .iter()
            .copied()
            .find(|member| registry.get(*member).name == name)
            .unwrap()
    };

    let symbols = |result: OneOrMany<cildoc::enums::EnumFieldInfo>| -> Vec<SymbolId> {
        result.into_iter().map(|info| info.symbol).collect()
    };

    assert_eq!(symbols(get_constituent_fields(&registry, 3, letters)), vec![field("AB")]);
    assert_eq!(symbols(get_constituent_fields(&registry, 5, letters)), vec![field("A"), field("C")]);
    assert_eq!(symbols(get_constituent_fields(&registry, 0, letters)), vec![field("None")]);
    assert!(get_constituent_fields(&registry, 8, letters).is_empty());
    assert_eq!(
        symbols(get_minimal_constituent_fields(&registry, 3, letters)),
        vec![field("A"), field("B")]
    );
    Ok(())
}

#[test]
fn public_filter() -> cildoc::Result<()> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("N", "1.0.0.0");
    let namespace = registry.namespace(assembly, "N")?;
    let int = registry.special(SpecialType::Int32);

    let values = TypeBuilder::interface("IValues").public().build(&mut registry, namespace)?;
    let interface_value = PropertyBuilder::new("Value", int.clone())
        .getter()
        .build(&mut registry, values)?;

    let store = TypeBuilder::class("Store")
        .public()
        .implements(TypeRef::named(values))
        .build(&mut registry, namespace)?;
    let hidden = FieldBuilder::new("hidden", int.clone()).private().build(&mut registry, store)?;
    let count = PropertyBuilder::new("Count", int.clone())
        .public()
        .getter()
        .setter()
        .build(&mut registry, store)?;
    let indexer = PropertyBuilder::indexer(int.clone())
        .public()
        .getter()
        .parameter("index", int.clone())
        .build(&mut registry, store)?;
    let explicit = PropertyBuilder::new("Value", int)
        .getter()
        .implements(interface_value)
        .build(&mut registry, store)?;

    let filter = SymbolFilterOptions::default().with_visibility(Visibility::Public);
    assert!(!filter.is_match(&registry, hidden));
    assert!(filter.is_match(&registry, count));
    assert!(filter.is_match(&registry, indexer));
    assert!(!filter.is_match(&registry, explicit));

    let accessors: Vec<SymbolId> = registry
        .members(store)
        .iter()
        .copied()
        .filter(|member| registry.get(*member).kind() == SymbolKind::Method)
        .collect();
    assert!(!accessors.is_empty());
    assert!(accessors.iter().all(|accessor| !filter.is_match(&registry, *accessor)));
    Ok(())
}

#[test]
fn traversal_and_cancellation() -> cildoc::Result<()> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("Acme", "1.0.0.0");
    let core = registry.namespace(assembly, "Acme")?;
    let widget = TypeBuilder::class("Widget").public().build(&mut registry, core)?;
    MethodBuilder::new("Run").public().build(&mut registry, widget)?;
    let io = registry.namespace(assembly, "Acme.IO")?;
    TypeBuilder::class("Reader").public().build(&mut registry, io)?;

    let model = model_of(&registry, assembly);
    let provider = MarkdownUrlProvider::default();
    let generator = DocumentationGenerator::new(
        &model,
        &provider,
        DocumentationOptions::default(),
        DocumentationResources::default(),
    );

    let pages = generator
        .generate("Acme", &CancellationToken::new())
        .collect::<cildoc::Result<Vec<_>>>()?;
    let paths: Vec<&str> = pages.iter().map(|page| page.file_path.as_str()).collect();
    assert_eq!(
        paths,
        [
            "README.md",
            "Acme/README.md",
            "Acme/IO/README.md",
            "Acme/Widget/README.md",
            "Acme/Widget/Run/README.md",
            "Acme/IO/Reader/README.md",
        ]
    );
    assert_eq!(pages[4].kind, DocumentationFileKind::Member);
    assert!(pages.iter().all(|page| !page.content.is_empty()));

    let token = CancellationToken::new();
    let mut iter = generator.generate("Acme", &token);
    assert!(iter.next().is_some());
    token.cancel();
    assert!(iter.next().is_none());

    let options = DocumentationOptions::builder().depth(DocumentationDepth::Type).build()?;
    let generator = DocumentationGenerator::new(&model, &provider, options, DocumentationResources::default());
    let count = generator.generate("Acme", &CancellationToken::new()).count();
    assert_eq!(count, 5);
    Ok(())
}
