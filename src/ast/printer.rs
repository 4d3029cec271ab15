use super::ast::*;
use std::{fmt, fmt::Write};

/// Trait for printing AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and can hence be used to granularly print GraphQL language.
/// However, mostly this will be used via `Document::print`.
///
/// Printed documents parse back to the same AST, apart from source locations.
///
/// This typically is the last operation that's done in a given AST context and is hence outside
/// of its lifetime and arena.
pub trait PrintNode {
    /// Write an AST node to a buffer implementing the [Write] trait.
    ///
    /// The `level` indicates the level of nesting, which increases with each [`SelectionSet`]
    /// or block of definitions and is typically initialized as zero (`0`).
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result;

    /// Print an AST Node to source text as a String allocated on the heap.
    fn print(&self) -> String {
        let mut buf = String::new();
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}

impl fmt::Display for dyn PrintNode + '_ {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_to_buffer(0, f)
    }
}

#[inline(always)]
fn write_indent(level: usize, buffer: &mut dyn Write) -> fmt::Result {
    for _ in 0..level {
        buffer.write_str("  ")?
    }
    Ok(())
}

/// Writes `items` separated by `separator`.
#[inline]
fn write_joined<T: PrintNode>(
    items: &[T],
    separator: &str,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            buffer.write_str(separator)?;
        }
        item.write_to_buffer(level, buffer)?;
    }
    Ok(())
}

/// Writes a description on its own line, followed by the indentation of the described node.
#[inline]
fn write_description(
    description: &Option<StringValue>,
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    if let Some(description) = description {
        description.write_to_buffer(level, buffer)?;
        buffer.write_char('\n')?;
        write_indent(level, buffer)?;
    }
    Ok(())
}

/// Writes a `{ ... }` block with one item per line, nothing if there are no items.
fn write_block<T: PrintNode>(items: &[T], level: usize, buffer: &mut dyn Write) -> fmt::Result {
    if items.is_empty() {
        return Ok(());
    }
    buffer.write_str(" {")?;
    for item in items.iter() {
        buffer.write_char('\n')?;
        write_indent(level + 1, buffer)?;
        item.write_to_buffer(level + 1, buffer)?;
    }
    buffer.write_char('\n')?;
    write_indent(level, buffer)?;
    buffer.write_char('}')
}

fn write_implements(interfaces: &[NamedType], buffer: &mut dyn Write) -> fmt::Result {
    if !interfaces.is_empty() {
        buffer.write_str(" implements ")?;
        write_joined(interfaces, " & ", 0, buffer)?;
    }
    Ok(())
}

fn write_union_types(types: &[NamedType], buffer: &mut dyn Write) -> fmt::Result {
    if !types.is_empty() {
        buffer.write_str(" = ")?;
        write_joined(types, " | ", 0, buffer)?;
    }
    Ok(())
}

/// Writes argument definitions inline, or one per line when any of them has a description.
fn write_arguments_definition(
    arguments: &[InputValueDefinition],
    level: usize,
    buffer: &mut dyn Write,
) -> fmt::Result {
    if arguments.is_empty() {
        Ok(())
    } else if arguments.iter().all(|argument| argument.description.is_none()) {
        buffer.write_char('(')?;
        write_joined(arguments, ", ", level, buffer)?;
        buffer.write_char(')')
    } else {
        buffer.write_char('(')?;
        for argument in arguments.iter() {
            buffer.write_char('\n')?;
            write_indent(level + 1, buffer)?;
            argument.write_to_buffer(level + 1, buffer)?;
        }
        buffer.write_char('\n')?;
        write_indent(level, buffer)?;
        buffer.write_char(')')
    }
}

impl<'a> PrintNode for NamedType<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.name)
    }
}

impl<'a> PrintNode for Variable<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "${}", self.name)
    }
}

impl PrintNode for BooleanValue {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self.value {
            true => buffer.write_str("true"),
            false => buffer.write_str("false"),
        }
    }
}

impl<'a> PrintNode for EnumValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for FloatValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for IntValue<'a> {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.value)
    }
}

impl<'a> PrintNode for StringValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        use lexical_core::*;
        const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
        const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();

        if !self.is_block() {
            let mut digits = [b'0'; u32::FORMATTED_SIZE];
            buffer.write_char('"')?;
            for c in self.value.chars() {
                match c {
                    '\r' => buffer.write_str(r"\r")?,
                    '\n' => buffer.write_str(r"\n")?,
                    '\t' => buffer.write_str(r"\t")?,
                    '"' => buffer.write_str("\\\"")?,
                    '\\' => buffer.write_str(r"\\")?,
                    '\u{0000}'..='\u{001F}' | '\u{007F}' => {
                        let hex = write_with_options::<_, FORMAT>(c as u32, &mut digits, &OPTIONS);
                        let hex = std::str::from_utf8(hex).map_err(|_| fmt::Error)?;
                        write!(buffer, "\\u{:0>4}", hex)?;
                    }
                    _ => buffer.write_char(c)?,
                };
            }
            buffer.write_char('"')
        } else {
            buffer.write_str("\"\"\"\n")?;
            for line in self.value.split('\n') {
                if !line.is_empty() {
                    write_indent(level, buffer)?;
                    buffer.write_str(&line.replace(r#"""""#, r#"\""""#))?;
                }
                buffer.write_char('\n')?;
            }
            write_indent(level, buffer)?;
            buffer.write_str("\"\"\"")
        }
    }
}

impl<'a> PrintNode for Value<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Value::Boolean(value) => value.write_to_buffer(level, buffer),
            Value::Enum(value) => value.write_to_buffer(level, buffer),
            Value::Float(value) => value.write_to_buffer(level, buffer),
            Value::Int(value) => value.write_to_buffer(level, buffer),
            Value::String(value) => value.write_to_buffer(level, buffer),
            Value::Variable(value) => value.write_to_buffer(level, buffer),
            Value::Object(value) => value.write_to_buffer(level, buffer),
            Value::List(value) => value.write_to_buffer(level, buffer),
            Value::Null => buffer.write_str("null"),
        }
    }
}

impl<'a> PrintNode for ObjectField<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('{')?;
        write_joined(&self.children, ", ", level, buffer)?;
        buffer.write_char('}')
    }
}

impl<'a> PrintNode for ListValue<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_char('[')?;
        write_joined(&self.children, ", ", level, buffer)?;
        buffer.write_char(']')
    }
}

impl<'a> PrintNode for Argument<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "{}: ", self.name)?;
        self.value.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Arguments<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_char('(')?;
            write_joined(&self.children, ", ", level, buffer)?;
            buffer.write_char(')')
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Directive<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "@{}", self.name)?;
        self.arguments.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Directives<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        for directive in self.children.iter() {
            buffer.write_char(' ')?;
            directive.write_to_buffer(level, buffer)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for SelectionSet<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            let level = level + 1;
            buffer.write_char('{')?;
            for selection in self.selections.iter() {
                buffer.write_char('\n')?;
                write_indent(level, buffer)?;
                selection.write_to_buffer(level, buffer)?;
            }
            buffer.write_char('\n')?;
            write_indent(level - 1, buffer)?;
            buffer.write_char('}')
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for Selection<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Selection::Field(field) => field.write_to_buffer(level, buffer),
            Selection::FragmentSpread(spread) => spread.write_to_buffer(level, buffer),
            Selection::InlineFragment(inline) => inline.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Field<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if let Some(alias) = self.alias {
            write!(buffer, "{}: {}", alias, self.name)?;
        } else {
            buffer.write_str(self.name)?;
        };
        self.arguments.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        if !self.selection_set.is_empty() {
            buffer.write_char(' ')?;
        };
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for FragmentSpread<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        self.name.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InlineFragment<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("...")?;
        if let Some(name) = &self.type_condition {
            buffer.write_str(" on ")?;
            name.write_to_buffer(level, buffer)?;
        };
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for Type<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Type::NamedType(name) => name.write_to_buffer(level, buffer),
            Type::ListType(inner) => {
                buffer.write_char('[')?;
                inner.write_to_buffer(level, buffer)?;
                buffer.write_char(']')
            }
            Type::NonNullType(inner) => {
                inner.write_to_buffer(level, buffer)?;
                buffer.write_char('!')
            }
        }
    }
}

impl<'a> PrintNode for VariableDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.variable.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        if self.default_value != Value::Null {
            buffer.write_str(" = ")?;
            self.default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for VariableDefinitions<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if !self.is_empty() {
            buffer.write_char('(')?;
            write_joined(&self.children, ", ", level, buffer)?;
            buffer.write_char(')')
        } else {
            Ok(())
        }
    }
}

impl<'a> PrintNode for FragmentDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("fragment ")?;
        self.name.write_to_buffer(level, buffer)?;
        self.variable_definitions.write_to_buffer(level, buffer)?;
        buffer.write_str(" on ")?;
        self.type_condition.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        buffer.write_char(' ')?;
        self.selection_set.write_to_buffer(level, buffer)
    }
}

impl PrintNode for OperationKind {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for OperationDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_empty()
            && self.directives.is_empty()
        {
            self.selection_set.write_to_buffer(level, buffer)
        } else {
            self.operation.write_to_buffer(level, buffer)?;
            if let Some(name) = &self.name {
                buffer.write_char(' ')?;
                name.write_to_buffer(level, buffer)?;
            };
            if self.name.is_none() && !self.variable_definitions.is_empty() {
                buffer.write_char(' ')?;
            }
            self.variable_definitions.write_to_buffer(level, buffer)?;
            self.directives.write_to_buffer(level, buffer)?;
            buffer.write_char(' ')?;
            self.selection_set.write_to_buffer(level, buffer)
        }
    }
}

impl<'a> PrintNode for OperationTypeDefinition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        self.operation.write_to_buffer(level, buffer)?;
        buffer.write_str(": ")?;
        self.named_type.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for SchemaDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str("schema")?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.operation_types, level, buffer)
    }
}

impl<'a> PrintNode for SchemaExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str("extend schema")?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.operation_types, level, buffer)
    }
}

impl<'a> PrintNode for ScalarTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "scalar {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ScalarTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend scalar {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for ObjectTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "type {}", self.name)?;
        write_implements(&self.interfaces, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for ObjectTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend type {}", self.name)?;
        write_implements(&self.interfaces, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for InterfaceTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "interface {}", self.name)?;
        write_implements(&self.interfaces, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for InterfaceTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend interface {}", self.name)?;
        write_implements(&self.interfaces, buffer)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for UnionTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "union {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_union_types(&self.types, buffer)
    }
}

impl<'a> PrintNode for UnionTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend union {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_union_types(&self.types, buffer)
    }
}

impl<'a> PrintNode for EnumValueDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for EnumTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "enum {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.values, level, buffer)
    }
}

impl<'a> PrintNode for EnumTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend enum {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.values, level, buffer)
    }
}

impl<'a> PrintNode for InputObjectTypeDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "input {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for InputObjectTypeExtension<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write!(buffer, "extend input {}", self.name)?;
        self.directives.write_to_buffer(level, buffer)?;
        write_block(&self.fields, level, buffer)
    }
}

impl<'a> PrintNode for FieldDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        buffer.write_str(self.name)?;
        write_arguments_definition(&self.arguments, level, buffer)?;
        buffer.write_str(": ")?;
        self.of_type.write_to_buffer(level, buffer)?;
        self.directives.write_to_buffer(level, buffer)
    }
}

impl<'a> PrintNode for InputValueDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "{}: ", self.name)?;
        self.of_type.write_to_buffer(level, buffer)?;
        if let Some(default_value) = &self.default_value {
            buffer.write_str(" = ")?;
            default_value.write_to_buffer(level, buffer)?;
        }
        self.directives.write_to_buffer(level, buffer)
    }
}

impl PrintNode for DirectiveLocation {
    #[inline]
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        buffer.write_str(self.as_str())
    }
}

impl<'a> PrintNode for DirectiveDefinition<'a> {
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_description(&self.description, level, buffer)?;
        write!(buffer, "directive @{}", self.name)?;
        write_arguments_definition(&self.arguments, level, buffer)?;
        if self.is_repeatable {
            buffer.write_str(" repeatable")?;
        }
        buffer.write_str(" on ")?;
        write_joined(&self.locations, " | ", level, buffer)
    }
}

impl<'a> PrintNode for SchemaCoordinate<'a> {
    fn write_to_buffer(&self, _level: usize, buffer: &mut dyn Write) -> fmt::Result {
        if self.of_directive {
            buffer.write_char('@')?;
        }
        buffer.write_str(self.name)?;
        if let Some(member_name) = self.member_name {
            write!(buffer, ".{}", member_name)?;
        }
        if let Some(argument_name) = self.argument_name {
            write!(buffer, "({}:)", argument_name)?;
        }
        Ok(())
    }
}

impl<'a> PrintNode for Definition<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        match self {
            Definition::Operation(node) => node.write_to_buffer(level, buffer),
            Definition::Fragment(node) => node.write_to_buffer(level, buffer),
            Definition::Schema(node) => node.write_to_buffer(level, buffer),
            Definition::SchemaExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Scalar(node) => node.write_to_buffer(level, buffer),
            Definition::ScalarExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Object(node) => node.write_to_buffer(level, buffer),
            Definition::ObjectExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Interface(node) => node.write_to_buffer(level, buffer),
            Definition::InterfaceExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Union(node) => node.write_to_buffer(level, buffer),
            Definition::UnionExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Enum(node) => node.write_to_buffer(level, buffer),
            Definition::EnumExtension(node) => node.write_to_buffer(level, buffer),
            Definition::InputObject(node) => node.write_to_buffer(level, buffer),
            Definition::InputObjectExtension(node) => node.write_to_buffer(level, buffer),
            Definition::Directive(node) => node.write_to_buffer(level, buffer),
        }
    }
}

impl<'a> PrintNode for Document<'a> {
    #[inline]
    fn write_to_buffer(&self, level: usize, buffer: &mut dyn Write) -> fmt::Result {
        write_joined(&self.definitions, "\n\n", level, buffer)
    }

    #[inline]
    fn print(&self) -> String {
        let mut buf = String::with_capacity(self.size_hint);
        match self.write_to_buffer(0, &mut buf) {
            Ok(()) => buf,
            _ => "".to_string(),
        }
    }
}
