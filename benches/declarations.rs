//! Benchmarks for rendering declarations and whole documentation runs.
//!
//! The symbol graph is generated: a few namespaces with classes carrying generic parameters,
//! properties, overloaded methods and an enum each.

extern crate cildoc;

use cildoc::{definitions::declaration_list, prelude::*};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn build_registry(namespaces: usize, types: usize) -> (SymbolRegistry, SymbolId) {
    let mut registry = SymbolRegistry::new();
    let assembly = registry.add_assembly("Bench", "1.0.0.0");
    let int = registry.special(SpecialType::Int32);
    let string = registry.special(SpecialType::String);

    for n in 0..namespaces {
        let namespace = registry.namespace(assembly, &format!("Bench.Area{n}")).unwrap();
        for t in 0..types {
            let ty = TypeBuilder::class(&format!("Service{t}"))
                .public()
                .type_parameter("T")
                .documentation("<summary>A service.</summary>")
                .build(&mut registry, namespace)
                .unwrap();
            PropertyBuilder::new("Name", string.clone())
                .public()
                .getter()
                .setter()
                .build(&mut registry, ty)
                .unwrap();
            for overload in 0..3 {
                let mut method = MethodBuilder::new("Run").public().returns(int.clone());
                for p in 0..overload {
                    method = method.parameter(&format!("arg{p}"), int.clone());
                }
                method.build(&mut registry, ty).unwrap();
            }
        }
        TypeBuilder::enumeration("Mode")
            .public()
            .enum_field("Off", 0)
            .enum_field("On", 1)
            .build(&mut registry, namespace)
            .unwrap();
    }

    (registry, assembly)
}

fn bench_definition_list(c: &mut Criterion) {
    let (registry, assembly) = build_registry(4, 25);
    let model = DocumentationModel::new(&registry, [assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
    let format = DefinitionListFormat::default();

    c.bench_function("definition_list_namespace_list", |b| {
        b.iter(|| black_box(write_definitions(black_box(&model), &format)));
    });
}

fn bench_declaration_list(c: &mut Criterion) {
    let (registry, assembly) = build_registry(4, 25);
    let options = DeclarationListOptions::default();

    c.bench_function("declaration_list", |b| {
        b.iter(|| black_box(declaration_list(black_box(&registry), &[assembly], &options)));
    });
}

fn bench_generate_pages(c: &mut Criterion) {
    let (registry, assembly) = build_registry(2, 10);
    let model = DocumentationModel::new(&registry, [assembly], SymbolFilterOptions::default(), Vec::<&str>::new());
    let provider = MarkdownUrlProvider::default();
    let generator = DocumentationGenerator::new(
        &model,
        &provider,
        DocumentationOptions::default(),
        DocumentationResources::default(),
    );

    c.bench_function("generate_pages", |b| {
        b.iter(|| {
            let pages = generator
                .generate("Bench", &CancellationToken::new())
                .collect::<cildoc::Result<Vec<_>>>()
                .unwrap();
            black_box(pages)
        });
    });
}

criterion_group!(
    benches,
    bench_definition_list,
    bench_declaration_list,
    bench_generate_pages
);
criterion_main!(benches);
