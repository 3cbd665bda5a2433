use cildoc::{definitions::declaration_list, prelude::*};

struct Api {
    registry: SymbolRegistry,
    assembly: SymbolId,
}

fn api() -> cildoc::Result<Api> {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("Shapes", "2.1.0.0");
    let root = registry.namespace(assembly, "Shapes")?;
    let int = registry.special(SpecialType::Int32);
    let string = registry.special(SpecialType::String);
    let void = registry.special(SpecialType::Void);

    let shape = TypeBuilder::interface("IShape").public().build(&mut registry, root)?;
    PropertyBuilder::new("Area", int.clone())
        .getter()
        .build(&mut registry, shape)?;

    let square = TypeBuilder::class("Square")
        .public()
        .implements(TypeRef::named(shape))
        .build(&mut registry, root)?;
    MethodBuilder::constructor()
        .public()
        .parameter("side", int.clone())
        .build(&mut registry, square)?;
    PropertyBuilder::new("Area", int.clone())
        .public()
        .getter()
        .build(&mut registry, square)?;
    MethodBuilder::new("Describe")
        .public()
        .returns(string.clone())
        .build(&mut registry, square)?;

    TypeBuilder::enumeration("Corner")
        .public()
        .enum_field("TopLeft", 0)
        .enum_field("TopRight", 1)
        .build(&mut registry, root)?;

    let drawing = registry.namespace(assembly, "Shapes.Drawing")?;
    TypeBuilder::delegate("Painter")
        .public()
        .returns(void)
        .parameter("name", string)
        .build(&mut registry, drawing)?;

    Ok(Api { registry, assembly })
}

#[test]
fn namespace_list_text() -> cildoc::Result<()> {
    let api = api()?;
    let model = DocumentationModel::new(&api.registry, [api.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
    let text = write_definitions(&model, &DefinitionListFormat::default());

    assert!(text.starts_with("assembly Shapes, Version=2.1.0.0"));
    assert!(text.contains("\nnamespace Shapes\n"));
    assert!(text.contains("\nnamespace Shapes.Drawing\n"));
    assert!(text.contains("\n  public delegate void Painter(string name);\n"));
    assert!(text.contains("\n    TopLeft = 0,\n    TopRight = 1,\n"));
    assert!(text.contains("\n    public Square(int side);\n"));
    assert!(text.ends_with('\n'));
    assert!(!text.ends_with("\n\n"));
    Ok(())
}

#[test]
fn hierarchy_layouts() -> cildoc::Result<()> {
    let api = api()?;
    let model = DocumentationModel::new(&api.registry, [api.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());

    let nested = write_definitions(
        &model,
        &DefinitionListFormat::default().with_layout(DefinitionListLayout::NamespaceHierarchy),
    );
    assert!(nested.contains("\nnamespace Shapes\n"));
    assert!(nested.contains("\n  namespace Drawing\n"));
    assert!(nested.contains("\n    public delegate void Painter(string name);\n"));

    let types = write_definitions(
        &model,
        &DefinitionListFormat::default().with_layout(DefinitionListLayout::TypeHierarchy),
    );
    assert!(!types.contains("\nnamespace "));
    assert!(types.contains("Shapes.Square"));
    assert!(types.contains("Shapes.IShape"));
    Ok(())
}

#[test]
fn parts_are_optional() -> cildoc::Result<()> {
    let api = api()?;
    let model = DocumentationModel::new(&api.registry, [api.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());

    let full = write_definitions(&model, &DefinitionListFormat::default());
    assert!(full.contains("\n  public class Square : "));
    assert!(full.contains("IShape\n"));

    let bare = write_definitions(
        &model,
        &DefinitionListFormat::default()
            .with_parts(DefinitionParts::all() - DefinitionParts::BASE_INTERFACES - DefinitionParts::TRAILING_COMMA),
    );
    assert!(bare.contains("\n  public class Square\n"));
    assert!(bare.contains("\n    TopLeft = 0\n"));
    Ok(())
}

#[test]
fn declaration_list_reads_like_source() -> cildoc::Result<()> {
    let api = api()?;
    let text = declaration_list(&api.registry, &[api.assembly], &DeclarationListOptions::default());

    assert!(text.starts_with("namespace Shapes\n{\n"));
    assert!(text.contains("    public enum Corner\n    {\n        TopLeft = 0,\n        TopRight = 1,\n    }\n"));
    assert!(text.contains("    public delegate void Painter(string name);\n"));
    assert!(text.contains("        public Square(int side);\n"));
    assert!(text.contains("        public string Describe();\n"));

    let mut builder = DeclarationListBuilder::new(&api.registry, DeclarationListOptions::default());
    builder.append_assemblies(&[api.assembly]);
    assert_eq!(builder.as_str(), text);
    Ok(())
}

#[test]
fn markdown_list_links_types() -> cildoc::Result<()> {
    let api = api()?;
    let model = DocumentationModel::new(&api.registry, [api.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
    let provider = MarkdownUrlProvider::default();
    let text = write_markdown_definitions(&model, &DefinitionListFormat::default(), &provider);

    assert!(text.starts_with("* assembly "));
    assert!(text.contains("\n* namespace Shapes\n"));
    assert!(text.contains("interface **IShape**<a id=\"__cildoc-Shapes_IShape\"></a>\n"));
    assert!(text.contains("[IShape](#__cildoc-Shapes_IShape)"));
    assert!(text.contains("\n* &emsp; | &emsp; **TopLeft** = 0,\n"));
    assert!(text.contains("[string](https://docs.microsoft.com/en-us/dotnet/api/system.string)"));
    assert!(text.ends_with('\n'));
    Ok(())
}

#[test]
fn xml_document_nests_definitions() -> cildoc::Result<()> {
    let api = api()?;
    let model = DocumentationModel::new(&api.registry, [api.assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
    let xml = write_xml_definitions(&model, &DefinitionListFormat::default())?;

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<root>"));
    assert!(xml.contains("<assembly name=\"Shapes, Version=2.1.0.0"));
    assert!(xml.contains("<namespace name=\"Shapes.Drawing\">"));
    assert!(xml.contains("<member def=\"TopLeft = 0\">"));
    assert!(xml.contains("<member def=\"public Square(int side);\">"));
    assert!(xml.ends_with("</root>"));
    assert_eq!(xml.matches("<type ").count(), xml.matches("</type>").count());
    Ok(())
}
