use crate::{display::DisplayParts, symbols::SymbolId};

/// Receiver of the events of a [`super::SymbolDefinitionWriter`]
///
/// Every `start_*` call is matched by the corresponding `end_*` call. Separators are only sent
/// between two siblings, never before the first or after the last one. Definitions arrive fully
/// rendered; wrapped definitions contain line breaks and indentation parts relative to their
/// first line.
///
/// Only the definitions and the depth changes must be handled; every other event defaults to
/// doing nothing.
pub trait DefinitionSink {
    /// Begins the list
    fn write_start_document(&mut self) {}

    /// Ends the list
    fn write_end_document(&mut self) {}

    /// Begins the assembly block
    fn write_start_assemblies(&mut self) {}

    /// Ends the assembly block
    fn write_end_assemblies(&mut self) {}

    /// Begins one assembly
    fn write_start_assembly(&mut self, _assembly: SymbolId) {}

    /// Writes the identity of an assembly
    fn write_assembly_definition(&mut self, assembly: SymbolId, definition: &DisplayParts);

    /// Ends one assembly
    fn write_end_assembly(&mut self, _assembly: SymbolId) {}

    /// Separates two assemblies
    fn write_assembly_separator(&mut self) {}

    /// Begins a namespace block
    fn write_start_namespaces(&mut self) {}

    /// Ends a namespace block
    fn write_end_namespaces(&mut self) {}

    /// Begins one namespace
    fn write_start_namespace(&mut self, _namespace: SymbolId) {}

    /// Writes a `namespace` line
    fn write_namespace_definition(&mut self, namespace: SymbolId, definition: &DisplayParts);

    /// Ends one namespace
    fn write_end_namespace(&mut self, _namespace: SymbolId) {}

    /// Separates two namespaces
    fn write_namespace_separator(&mut self) {}

    /// Begins a type block
    fn write_start_types(&mut self) {}

    /// Ends a type block
    fn write_end_types(&mut self) {}

    /// Begins one type
    fn write_start_type(&mut self, _ty: SymbolId) {}

    /// Writes the declaration of a type
    fn write_type_definition(&mut self, ty: SymbolId, definition: &DisplayParts);

    /// Ends one type
    fn write_end_type(&mut self, _ty: SymbolId) {}

    /// Separates two types
    fn write_type_separator(&mut self) {}

    /// Begins the members of a type
    fn write_start_members(&mut self) {}

    /// Ends the members of a type
    fn write_end_members(&mut self) {}

    /// Begins one member
    fn write_start_member(&mut self, _member: SymbolId) {}

    /// Writes the declaration of a member
    fn write_member_definition(&mut self, member: SymbolId, definition: &DisplayParts);

    /// Ends one member
    fn write_end_member(&mut self, _member: SymbolId) {}

    /// Separates two members
    fn write_member_separator(&mut self) {}

    /// Begins the fields of an enum
    fn write_start_enum_members(&mut self) {}

    /// Ends the fields of an enum
    fn write_end_enum_members(&mut self) {}

    /// Begins one enum field
    fn write_start_enum_member(&mut self, _member: SymbolId) {}

    /// Writes the declaration of an enum field
    fn write_enum_member_definition(&mut self, member: SymbolId, definition: &DisplayParts);

    /// Ends one enum field
    fn write_end_enum_member(&mut self, _member: SymbolId) {}

    /// Separates two enum fields
    fn write_enum_member_separator(&mut self) {}

    /// Begins the attributes written on their own for `symbol`
    fn write_start_attributes(&mut self, _symbol: SymbolId) {}

    /// Writes one attribute of `symbol`, without brackets
    fn write_attribute(&mut self, symbol: SymbolId, attribute: &DisplayParts);

    /// Ends the attributes of `symbol`
    fn write_end_attributes(&mut self, _symbol: SymbolId) {}

    /// Separates two attributes
    fn write_attribute_separator(&mut self, _symbol: SymbolId) {}

    /// Moves the following definitions one level in
    fn increase_depth(&mut self);

    /// Moves the following definitions one level out
    fn decrease_depth(&mut self);
}
