use super::ast::*;
use bumpalo::collections::{vec::IntoIter, Vec};

/// Trait for creating empty AST Nodes whose children are allocated in an arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

impl<'a, T> DefaultIn<'a> for T
where
    T: Default,
{
    fn default_in(_arena: &'a bumpalo::Bump) -> Self {
        Self::default()
    }
}

macro_rules! list_node {
    ($node:ident, $field:ident, $item:ident) => {
        impl<'a> IntoIterator for $node<'a> {
            type Item = $item<'a>;
            type IntoIter = IntoIter<'a, $item<'a>>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.$field.into_iter()
            }
        }

        impl<'a, 'b> IntoIterator for &'b $node<'a> {
            type Item = &'b $item<'a>;
            type IntoIter = std::slice::Iter<'b, $item<'a>>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.$field.iter()
            }
        }

        impl<'a> DefaultIn<'a> for $node<'a> {
            #[inline]
            fn default_in(arena: &'a bumpalo::Bump) -> Self {
                $node {
                    $field: Vec::new_in(arena),
                }
            }
        }
    };
}

list_node!(ListValue, children, Value);
list_node!(ObjectValue, children, ObjectField);
list_node!(Arguments, children, Argument);
list_node!(Directives, children, Directive);
list_node!(VariableDefinitions, children, VariableDefinition);
list_node!(SelectionSet, selections, Selection);

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(arena),
            size_hint: 0,
        }
    }
}

impl<'a> From<&'a str> for NamedType<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        NamedType { name }
    }
}

impl<'a> From<&'a str> for Variable<'a> {
    #[inline]
    fn from(name: &'a str) -> Variable<'a> {
        Variable { name }
    }
}

impl From<bool> for BooleanValue {
    #[inline]
    fn from(value: bool) -> Self {
        BooleanValue { value }
    }
}

impl<'a> From<&'a str> for StringValue<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        StringValue { value }
    }
}

impl<'a> From<NamedType<'a>> for Type<'a> {
    #[inline]
    fn from(x: NamedType<'a>) -> Self {
        Type::NamedType(x)
    }
}

macro_rules! variant_from {
    ($target:ident, $($variant:ident($node:ty)),+ $(,)?) => {
        $(
            impl<'a> From<$node> for $target<'a> {
                #[inline]
                fn from(x: $node) -> Self {
                    $target::$variant(x)
                }
            }
        )+
    };
}

variant_from!(
    Value,
    Variable(Variable<'a>),
    String(StringValue<'a>),
    Float(FloatValue<'a>),
    Int(IntValue<'a>),
    Boolean(BooleanValue),
    Enum(EnumValue<'a>),
    List(ListValue<'a>),
    Object(ObjectValue<'a>),
);

variant_from!(
    Selection,
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
);

variant_from!(
    Definition,
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
);
