pub use super::ast_conversion::*;
pub use crate::error::Location;
pub use crate::lexer::FloatFormat;
use crate::error::{Error, ErrorType, Result};
use bumpalo::collections::Vec;
use hashbrown::{hash_map::DefaultHashBuilder, HashMap};

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, traversing, and printing an AST its performant and
/// convenient to allocate memory in one chunk for the AST's operations. This context represents
/// the lifetime of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a request and the documents parsed from it
/// take up. Once you're done with the request this entire allocated memory can be dropped all at
/// once. Hence however, it's inadvisable to reuse the AST Context across multiple incoming GraphQL
/// requests, unless the documents are meant to be cached for the context's lifetime.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Map of AST Values for GraphQL Variables
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Coercing-Variable-Values)
pub type Variables<'a> = HashMap<&'a str, Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump>;

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BooleanValue {
    pub value: bool,
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Variable<'a> {
    pub name: &'a str,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct EnumValue<'a> {
    pub value: &'a str,
}

/// AST Node of an integer value.
///
/// The value is kept as its source text, since GraphQL doesn't bound integer literals and a
/// consumer decides how to interpret them.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct IntValue<'a> {
    pub value: &'a str,
}

/// AST Node of a floating point value.
///
/// Floats in GraphQL are signed, double precision values as defined by [IEEE 754](https://en.wikipedia.org/wiki/IEEE_754).
/// The value is kept as its source text together with the notation it was written in.
/// [Reference](https://spec.graphql.org/October2021/#sec-Float)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct FloatValue<'a> {
    pub value: &'a str,
    pub format: FloatFormat,
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters. Block strings are stored
/// with their indentation already removed.
/// [Reference](https://spec.graphql.org/October2021/#sec-String)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct StringValue<'a> {
    pub value: &'a str,
}

impl<'a> StringValue<'a> {
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            value: ctx.alloc_str(str.as_ref()),
        }
    }

    /// Determines whether a string should be printed as a block string
    /// rather than a regular single-line string.
    ///
    /// This only holds for multi-line strings that parse back to exactly the same value when
    /// they're printed as block strings.
    pub fn is_block(&self) -> bool {
        if !self.value.contains('\n') {
            return false;
        }
        if self
            .value
            .chars()
            .any(|c| c == '\r' || (c != '\n' && c != '\t' && (c < '\u{0020}' || c == '\u{007F}')))
        {
            return false;
        }
        let is_blank = |line: &str| line.trim_start_matches([' ', '\t']).is_empty();
        let mut lines = self.value.split('\n');
        let first = lines.next().unwrap_or_default();
        let last = self.value.rsplit('\n').next().unwrap_or_default();
        if is_blank(first) || is_blank(last) {
            return false;
        }
        // At least one line mustn't be indented, or the indentation would be removed on parsing
        self.value
            .split('\n')
            .any(|line| !is_blank(line) && !line.starts_with([' ', '\t']))
    }
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
    /// Representing JSON-like `null` values or the absence of a value
    Null,
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays. Its
/// contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a> {
    pub children: Vec<'a, Value<'a>>,
}

impl<'a> ListValue<'a> {
    /// Checks whether this List contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}

/// AST Node for a field of an Object value.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
/// An Object literal's contents may be any arbitrary value literal or variable.
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a> {
    pub children: Vec<'a, ObjectField<'a>>,
}

impl<'a> ObjectValue<'a> {
    /// Checks whether this Object contains any fields.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all object field's names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&'a str, &'a Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for field in self.children.iter() {
            map.insert(field.name, &field.value);
        }
        map
    }
}

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#Argument)
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a> {
    pub name: &'a str,
    pub value: Value<'a>,
}

/// AST Node for a list of Arguments, which are similar to parameterized inputs to a function.
///
/// Arguments in GraphQL are unordered lists of inputs to a field's or directive's arguments.
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[derive(Debug, PartialEq, Clone)]
pub struct Arguments<'a> {
    pub children: Vec<'a, Argument<'a>>,
}

impl<'a> Arguments<'a> {
    /// Checks whether this list of Arguments contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all arguments' names mapped to their values.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&'a str, &'a Value<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for argument in self.children.iter() {
            map.insert(argument.name, &argument.value);
        }
        map
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// Typical directives that occur in queries are for example `@skip`, `@include`, and `@defer`.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a> {
    pub name: &'a str,
    pub arguments: Arguments<'a>,
    pub location: Option<Location>,
}

/// AST Node for lists of GraphQL Directives.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct Directives<'a> {
    pub children: Vec<'a, Directive<'a>>,
}

impl<'a> Directives<'a> {
    /// Checks whether this list of Directives contains any values.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Finds the first directive with the given name.
    pub fn get(&self, name: &str) -> Option<&Directive<'a>> {
        self.children.iter().find(|directive| directive.name == name)
    }
}

/// AST Node for Selection Sets, which provide a way to select more information on a given parent.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub selections: Vec<'a, Selection<'a>>,
}

impl<'a> SelectionSet<'a> {
    /// Checks whether this Selection Set contains any selections.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }
}

/// AST Node for Fields, which can be likened to functions or properties on a parent object.
///
/// In JSON this would represent a property in a JSON object.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    /// A Field's `alias`, which is used to request information under a different name than the
    /// Field's `name`.
    /// [Reference](https://spec.graphql.org/October2021/#sec-Field-Alias)
    pub alias: Option<&'a str>,
    /// A Field's `name`, which represents a resolver on a GraphQL schema's object type.
    pub name: &'a str,
    /// Arguments that are passed to a Field.
    ///
    /// When no Arguments are passed, this will be an empty
    /// list, as can be checked using `Arguments::is_empty`.
    /// See: [Arguments]
    pub arguments: Arguments<'a>,
    /// Directives that are annotating this Field.
    ///
    /// When no Directives are present, this will be an empty
    /// list, as can be checked using `Directives::is_empty`.
    /// See: [Directives]
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is passed below this field to add selections to this field's
    /// returned GraphQL object type.
    ///
    /// When no selections are present, this will be an empty
    /// list, as can be checked using `SelectionSet::is_empty`.
    /// See: [SelectionSet]
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name)
    }

    /// Creates a new leaf field with the given `name`.
    ///
    /// All sub-lists, like `arguments`, `directives` and `selection_set` will be created as empty
    /// defaults.
    #[inline]
    pub fn new_leaf(ctx: &'a ASTContext, name: &'a str) -> Self {
        Field {
            alias: None,
            name,
            arguments: Arguments::default_in(&ctx.arena),
            directives: Directives::default_in(&ctx.arena),
            selection_set: SelectionSet::default_in(&ctx.arena),
            location: None,
        }
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] with an additional
/// [`SelectionSet`].
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    /// A given name of the [FragmentDefinition] that must be spread in place of this Fragment
    /// Spread on a GraphQL API.
    pub name: NamedType<'a>,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

/// AST Node for an inline Fragment definition with an additional [`SelectionSet`].
/// This may only be applied when the type condition matches or when no type condition is present.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API. On inline fragments this is optional and no type condition has to be passed.
    pub type_condition: Option<NamedType<'a>>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location>,
}

/// AST Node of a selection as contained inside a [`SelectionSet`].
///
/// Any given Selection Set may contain fields, fragment spread, and inline fragments.
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

impl<'a> Selection<'a> {
    /// Helper method to return the [`Field`] if the Selection is a `Field`.
    #[inline]
    pub fn field(&'a self) -> Option<&'a Field<'a>> {
        match self {
            Selection::Field(field) => Some(field),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentSpread`] if the Selection is a `FragmentSpread`.
    #[inline]
    pub fn fragment_spread(&'a self) -> Option<&'a FragmentSpread<'a>> {
        match self {
            Selection::FragmentSpread(spread) => Some(spread),
            _ => None,
        }
    }

    /// Helper method to return the [`InlineFragment`] if the Selection is an `InlineFragment`.
    #[inline]
    pub fn inline_fragment(&'a self) -> Option<&'a InlineFragment<'a>> {
        match self {
            Selection::InlineFragment(fragment) => Some(fragment),
            _ => None,
        }
    }
}

/// AST Node for a type name.
///
/// This AST uses this reference instead of a raw `&str` slice whenever the AST refers to a
/// concrete object type, input type, fragment name, or operation name.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct NamedType<'a> {
    pub name: &'a str,
}

/// AST Node for a type reference.
///
/// [`VariableDefinitions`] and field or argument definitions describe their types using type
/// references, including whether they expect lists or non-null values.
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Type<'a> {
    /// A reference to a named input type, which is a leaf node of a [Type].
    NamedType(NamedType<'a>),
    /// A list node wrapper for a Type, which indicates that a GraphQL API will always pass a list of the
    /// contained type in place.
    ListType(&'a Type<'a>),
    /// A non-null node wrapper for a Type, which indicates that a GraphQL API may not pass `null` instead
    /// of the contained type.
    NonNullType(&'a Type<'a>),
}

impl<'a> Type<'a> {
    /// Wraps this type in a list, indicating that it expects the current Type to be a list of
    /// itself instead.
    #[inline]
    pub fn into_list(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::ListType(ctx.alloc(self))
    }

    /// Wraps this type in a non-null wrapper.
    #[inline]
    pub fn into_nonnull(self, ctx: &'a ASTContext) -> Type<'a> {
        Type::NonNullType(ctx.alloc(self))
    }

    /// Unwraps a Type recursively and returns the `NamedType` that is contained within its
    /// wrappers.
    #[inline]
    pub fn of_type(&self) -> &NamedType<'a> {
        match self {
            Type::NamedType(of_type) => of_type,
            Type::ListType(inner) | Type::NonNullType(inner) => inner.of_type(),
        }
    }
}

/// AST Node for a variable definition.
///
/// A variable definition defines a [Variable] identifier that can be used in place of any other
/// non-static [Value] throughout the operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    /// The variable's name, as in, its identifier, which is prefixed with a `$` sign in the
    /// document.
    pub variable: Variable<'a>,
    /// Annotation of the type of a given variable, which ultimately leads to a type reference of
    /// an input type, as defined on a GraphQL schema.
    pub of_type: Type<'a>,
    /// A GraphQL variable may be replaced by a default value, when it's not passed or `null`
    /// is passed for a non-null variable. When this definition doesn't contain any default value
    /// this property is set to `Value::Null`.
    pub default_value: Value<'a>,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitions<'a> {
    pub children: Vec<'a, VariableDefinition<'a>>,
}

impl<'a> VariableDefinitions<'a> {
    /// Checks whether the list of Variable Definitions is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns a `Map` keyed by all variable names mapped to their definitions.
    pub fn as_map(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&'a str, &'a VariableDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for var_def in self.children.iter() {
            map.insert(var_def.variable.name, var_def);
        }
        map
    }
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// Fragment definitions may only declare variables of their own when the parser allows fragment
/// variables, otherwise `variable_definitions` is always empty.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    /// A given name of the Fragment Definition that is used by [FragmentSpread] selections to
    /// refer to this definition.
    pub name: NamedType<'a>,
    pub variable_definitions: VariableDefinitions<'a>,
    /// A given type condition's type name that must match before this fragment is applied on a
    /// GraphQL API.
    pub type_condition: NamedType<'a>,
    pub directives: Directives<'a>,
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location>,
}

/// AST Node for a kind of operation, as referred to by an [`OperationDefinition`].
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    /// An optional name, as given to the operation definition.
    ///
    /// A [Document] may contain multiple Operation Definitions from which a single one can be
    /// selected during execution. When a Document contains only a single operation, it doesn't
    /// have to have a name.
    pub name: Option<NamedType<'a>>,
    /// A list of variables that the operation defines and accepts during execution.
    pub variable_definitions: VariableDefinitions<'a>,
    pub directives: Directives<'a>,
    /// A sub-Selection Set that is applied when this Operation Definition is executed to the root
    /// type of the specified kind of operation.
    pub selection_set: SelectionSet<'a>,
    pub location: Option<Location>,
}

/// AST Node for the definition of a schema's root operation types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for an extension of the schema definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Extension)
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaExtension<'a> {
    pub directives: Directives<'a>,
    pub operation_types: Vec<'a, OperationTypeDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for a single root operation type, e.g. `query: Query`.
#[derive(Debug, PartialEq, Clone)]
pub struct OperationTypeDefinition<'a> {
    pub operation: OperationKind,
    pub named_type: NamedType<'a>,
    pub location: Option<Location>,
}

/// AST Node for a custom scalar type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

/// AST Node for an object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for an interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeExtension<'a> {
    pub name: &'a str,
    pub interfaces: Vec<'a, NamedType<'a>>,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, FieldDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for a union type and its member types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: Vec<'a, NamedType<'a>>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub types: Vec<'a, NamedType<'a>>,
    pub location: Option<Location>,
}

/// AST Node for an enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: Vec<'a, EnumValueDefinition<'a>>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub values: Vec<'a, EnumValueDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for a single value of an enum type.
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

/// AST Node for an input object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, InputValueDefinition<'a>>,
    pub location: Option<Location>,
}

#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeExtension<'a> {
    pub name: &'a str,
    pub directives: Directives<'a>,
    pub fields: Vec<'a, InputValueDefinition<'a>>,
    pub location: Option<Location>,
}

/// AST Node for a field of an object or interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub of_type: Type<'a>,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

/// AST Node for an argument definition or an input object's field.
///
/// When no default value is given `default_value` is `None`, which is distinct from an explicit
/// `null` default.
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub of_type: Type<'a>,
    pub default_value: Option<Value<'a>>,
    pub directives: Directives<'a>,
    pub location: Option<Location>,
}

/// Locations at which a directive may be applied.
///
/// [Reference](https://spec.graphql.org/October2021/#DirectiveLocations)
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum DirectiveLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl DirectiveLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Query => "QUERY",
            DirectiveLocation::Mutation => "MUTATION",
            DirectiveLocation::Subscription => "SUBSCRIPTION",
            DirectiveLocation::Field => "FIELD",
            DirectiveLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            DirectiveLocation::FragmentSpread => "FRAGMENT_SPREAD",
            DirectiveLocation::InlineFragment => "INLINE_FRAGMENT",
            DirectiveLocation::VariableDefinition => "VARIABLE_DEFINITION",
            DirectiveLocation::Schema => "SCHEMA",
            DirectiveLocation::Scalar => "SCALAR",
            DirectiveLocation::Object => "OBJECT",
            DirectiveLocation::FieldDefinition => "FIELD_DEFINITION",
            DirectiveLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            DirectiveLocation::Interface => "INTERFACE",
            DirectiveLocation::Union => "UNION",
            DirectiveLocation::Enum => "ENUM",
            DirectiveLocation::EnumValue => "ENUM_VALUE",
            DirectiveLocation::InputObject => "INPUT_OBJECT",
            DirectiveLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }

    /// Matches a directive location name as it's written in a directive definition.
    pub fn from_bytes(name: &[u8]) -> Option<Self> {
        match name {
            b"QUERY" => Some(DirectiveLocation::Query),
            b"MUTATION" => Some(DirectiveLocation::Mutation),
            b"SUBSCRIPTION" => Some(DirectiveLocation::Subscription),
            b"FIELD" => Some(DirectiveLocation::Field),
            b"FRAGMENT_DEFINITION" => Some(DirectiveLocation::FragmentDefinition),
            b"FRAGMENT_SPREAD" => Some(DirectiveLocation::FragmentSpread),
            b"INLINE_FRAGMENT" => Some(DirectiveLocation::InlineFragment),
            b"VARIABLE_DEFINITION" => Some(DirectiveLocation::VariableDefinition),
            b"SCHEMA" => Some(DirectiveLocation::Schema),
            b"SCALAR" => Some(DirectiveLocation::Scalar),
            b"OBJECT" => Some(DirectiveLocation::Object),
            b"FIELD_DEFINITION" => Some(DirectiveLocation::FieldDefinition),
            b"ARGUMENT_DEFINITION" => Some(DirectiveLocation::ArgumentDefinition),
            b"INTERFACE" => Some(DirectiveLocation::Interface),
            b"UNION" => Some(DirectiveLocation::Union),
            b"ENUM" => Some(DirectiveLocation::Enum),
            b"ENUM_VALUE" => Some(DirectiveLocation::EnumValue),
            b"INPUT_OBJECT" => Some(DirectiveLocation::InputObject),
            b"INPUT_FIELD_DEFINITION" => Some(DirectiveLocation::InputFieldDefinition),
            _ => None,
        }
    }

    /// Whether this location refers to a part of an executable document.
    pub fn is_executable(&self) -> bool {
        matches!(
            self,
            DirectiveLocation::Query
                | DirectiveLocation::Mutation
                | DirectiveLocation::Subscription
                | DirectiveLocation::Field
                | DirectiveLocation::FragmentDefinition
                | DirectiveLocation::FragmentSpread
                | DirectiveLocation::InlineFragment
                | DirectiveLocation::VariableDefinition
        )
    }
}

/// AST Node for a directive definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub description: Option<StringValue<'a>>,
    pub name: &'a str,
    pub arguments: Vec<'a, InputValueDefinition<'a>>,
    pub is_repeatable: bool,
    pub locations: Vec<'a, DirectiveLocation>,
    pub location: Option<Location>,
}

/// AST Node for a schema coordinate, which points at a type, a field, an argument, or a
/// directive, e.g. `Type.field(argument:)` or `@directive(argument:)`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct SchemaCoordinate<'a> {
    /// Whether the coordinate refers to a directive, written with a leading `@`.
    pub of_directive: bool,
    /// The name of the type or directive.
    pub name: &'a str,
    /// The name of a field, input field or enum value on the type.
    pub member_name: Option<&'a str>,
    /// The name of an argument on the field or directive.
    pub argument_name: Option<&'a str>,
    pub location: Option<Location>,
}

/// AST Root Node for a GraphQL document. This contains one or more definitions of operations,
/// fragments, or type system definitions and extensions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: Vec<'a, Definition<'a>>,
    /// A hint on how large the source text was from which this Document was parsed.
    ///
    /// This gives an initial indication of the starting capacity of a `String` that will hold the stringified
    /// document.
    pub size_hint: usize,
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Checks whether this document only contains operations and fragments.
    pub fn is_executable(&self) -> bool {
        self.definitions
            .iter()
            .all(|definition| definition.is_executable())
    }

    /// Returns a `Map` keyed by all fragment names mapped to their fragment definitions.
    /// This is useful for manually traversing the document and resolving [`FragmentSpread`] nodes to
    /// their definitions.
    pub fn fragments(
        &'a self,
        ctx: &'a ASTContext,
    ) -> HashMap<&'a str, &'a FragmentDefinition<'a>, DefaultHashBuilder, &'a bumpalo::Bump> {
        let mut map = HashMap::new_in(&ctx.arena);
        for fragment in self.definitions.iter().filter_map(Definition::fragment) {
            map.insert(fragment.name.name, fragment);
        }
        map
    }

    /// Finds an operation definition by name or the single operation contained in the document
    /// when `None` is passed.
    ///
    /// [Reference](https://spec.graphql.org/October2021/#GetOperation())
    pub fn operation(&'a self, by_name: Option<&str>) -> Result<&'a OperationDefinition<'a>> {
        let mut operations = self.definitions.iter().filter_map(Definition::operation);
        if let Some(by_name) = by_name {
            operations
                .find(|operation| matches!(operation.name, Some(NamedType { name }) if name == by_name))
                .ok_or_else(|| {
                    Error::new(
                        format!("Operation with name {by_name} does not exist"),
                        Some(ErrorType::GraphQL),
                    )
                })
        } else {
            match (operations.next(), operations.next()) {
                (Some(operation), None) => Ok(operation),
                (None, _) => Err(Error::new(
                    "Document does not contain any operations",
                    Some(ErrorType::GraphQL),
                )),
                (Some(_), Some(_)) => Err(Error::new(
                    "Document contains more than one operation, missing operation name",
                    Some(ErrorType::GraphQL),
                )),
            }
        }
    }
}

/// AST Node for a Definition inside a GraphQL document.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
    Schema(SchemaDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    Scalar(ScalarTypeDefinition<'a>),
    ScalarExtension(ScalarTypeExtension<'a>),
    Object(ObjectTypeDefinition<'a>),
    ObjectExtension(ObjectTypeExtension<'a>),
    Interface(InterfaceTypeDefinition<'a>),
    InterfaceExtension(InterfaceTypeExtension<'a>),
    Union(UnionTypeDefinition<'a>),
    UnionExtension(UnionTypeExtension<'a>),
    Enum(EnumTypeDefinition<'a>),
    EnumExtension(EnumTypeExtension<'a>),
    InputObject(InputObjectTypeDefinition<'a>),
    InputObjectExtension(InputObjectTypeExtension<'a>),
    Directive(DirectiveDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Whether this Definition is an operation or a fragment rather than a type system definition.
    #[inline]
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }

    /// The name of the defined operation, fragment, type or directive, if it has one.
    pub fn name(&self) -> Option<&'a str> {
        match self {
            Definition::Operation(operation) => operation.name.map(|name| name.name),
            Definition::Fragment(fragment) => Some(fragment.name.name),
            Definition::Schema(_) | Definition::SchemaExtension(_) => None,
            Definition::Scalar(scalar) => Some(scalar.name),
            Definition::ScalarExtension(scalar) => Some(scalar.name),
            Definition::Object(object) => Some(object.name),
            Definition::ObjectExtension(object) => Some(object.name),
            Definition::Interface(interface) => Some(interface.name),
            Definition::InterfaceExtension(interface) => Some(interface.name),
            Definition::Union(union) => Some(union.name),
            Definition::UnionExtension(union) => Some(union.name),
            Definition::Enum(enum_type) => Some(enum_type.name),
            Definition::EnumExtension(enum_type) => Some(enum_type.name),
            Definition::InputObject(input) => Some(input.name),
            Definition::InputObjectExtension(input) => Some(input.name),
            Definition::Directive(directive) => Some(directive.name),
        }
    }

    /// The location of this Definition in its source, unless locations were disabled.
    pub fn location(&self) -> Option<Location> {
        match self {
            Definition::Operation(node) => node.location,
            Definition::Fragment(node) => node.location,
            Definition::Schema(node) => node.location,
            Definition::SchemaExtension(node) => node.location,
            Definition::Scalar(node) => node.location,
            Definition::ScalarExtension(node) => node.location,
            Definition::Object(node) => node.location,
            Definition::ObjectExtension(node) => node.location,
            Definition::Interface(node) => node.location,
            Definition::InterfaceExtension(node) => node.location,
            Definition::Union(node) => node.location,
            Definition::UnionExtension(node) => node.location,
            Definition::Enum(node) => node.location,
            Definition::EnumExtension(node) => node.location,
            Definition::InputObject(node) => node.location,
            Definition::InputObjectExtension(node) => node.location,
            Definition::Directive(node) => node.location,
        }
    }
}
