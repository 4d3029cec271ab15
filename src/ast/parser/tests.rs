use crate::ast::*;
use crate::error::{ErrorType, Location};
use bumpalo::collections::Vec;
use indoc::indoc;

const NO_LOCATIONS: ParserOptions = ParserOptions {
    no_locations: true,
    ..ParserOptions::DEFAULT
};

fn assert_parse<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, expected: T)
where
    T: ParseNode<'a> + std::fmt::Debug + PartialEq,
{
    assert_eq!(
        *T::parse_with_options(ctx, source, NO_LOCATIONS).unwrap(),
        expected
    );
}

fn parse_error<'a, T: ParseNode<'a> + std::fmt::Debug + 'a>(
    ctx: &'a ASTContext,
    source: &'a str,
) -> crate::error::Error {
    T::parse(ctx, source).unwrap_err()
}

fn empty_arguments(ctx: &ASTContext) -> Arguments<'_> {
    Arguments::default_in(&ctx.arena)
}

fn empty_directives(ctx: &ASTContext) -> Directives<'_> {
    Directives::default_in(&ctx.arena)
}

fn empty_selection_set(ctx: &ASTContext) -> SelectionSet<'_> {
    SelectionSet::default_in(&ctx.arena)
}

#[test]
fn error() {
    let ctx = ASTContext::new();
    let error = parse_error::<Document>(&ctx, "query { document { $ }}");
    assert_eq!(error.error_type(), ErrorType::Syntax);
    assert_eq!(
        error.message(),
        "Invalid Selection: expected a field or fragment, found `$`"
    );
    assert_eq!(
        error.location,
        Some(Location {
            start: 19,
            end: 20,
            line: 1,
            column: 20
        })
    );

    let error = parse_error::<Document>(
        &ctx,
        "query {
            document {
                $
            }
        }",
    );
    assert_eq!(
        error.location,
        Some(Location {
            start: 47,
            end: 48,
            line: 3,
            column: 17
        })
    );
    assert!(error.context().unwrap().contains("^"));
}

#[test]
fn lexical_errors_propagate() {
    let ctx = ASTContext::new();
    let error = parse_error::<Document>(&ctx, "{ field(arg: \"open) }");
    assert_eq!(error.error_type(), ErrorType::Lexical);
    assert_eq!(error.message(), "Unterminated string");

    let error = parse_error::<Value>(&ctx, "\"\\uD83D\\uDE00\"");
    assert_eq!(error.error_type(), ErrorType::Lexical);
    assert_eq!(
        error.location.unwrap().start,
        1,
        "decoding errors point into the string"
    );
}

#[test]
fn trailing_input() {
    let ctx = ASTContext::new();
    let error = parse_error::<Field>(&ctx, "field other");
    assert_eq!(
        error.message(),
        "Unexpected Name `other`, expected <end of file>"
    );
    assert!(Value::parse(&ctx, "1 2").is_err());
}

#[test]
fn named_type() {
    let ctx = ASTContext::new();
    assert_parse(&ctx, "TypeName", NamedType { name: "TypeName" });
}

#[test]
fn variable() {
    let ctx = ASTContext::new();
    assert_parse(&ctx, "$test", Variable { name: "test" });
    assert_parse(&ctx, "$ spaced", Variable { name: "spaced" });
}

#[test]
fn lists() {
    let ctx = ASTContext::new();
    assert_parse(
        &ctx,
        "[]",
        ListValue {
            children: Vec::new_in(&ctx.arena),
        },
    );

    let list_children = Vec::from_iter_in([Value::Null, Value::Null], &ctx.arena);
    assert_parse(
        &ctx,
        "[null, null]",
        ListValue {
            children: list_children,
        },
    );
    assert!(ListValue::parse(&ctx, "[null").is_err());
}

#[test]
fn objects() {
    let ctx = ASTContext::new();
    assert_parse(
        &ctx,
        "{}",
        ObjectValue {
            children: Vec::new_in(&ctx.arena),
        },
    );
    assert_parse(
        &ctx,
        "{ test: true }",
        ObjectValue {
            children: Vec::from_iter_in(
                [ObjectField {
                    name: "test",
                    value: Value::Boolean(BooleanValue { value: true }),
                }],
                &ctx.arena,
            ),
        },
    );
    assert!(ObjectValue::parse(&ctx, "{ test true }").is_err());
}

#[test]
fn values() {
    let ctx = ASTContext::new();
    assert_parse(&ctx, "true", Value::Boolean(BooleanValue { value: true }));
    assert_parse(&ctx, "false", Value::Boolean(BooleanValue { value: false }));
    assert_parse(&ctx, "$var", Value::Variable(Variable { name: "var" }));
    assert_parse(&ctx, "Opt", Value::Enum(EnumValue { value: "Opt" }));
    assert_parse(&ctx, "123", Value::Int(IntValue { value: "123" }));
    assert_parse(&ctx, "-7", Value::Int(IntValue { value: "-7" }));
    assert_parse(
        &ctx,
        "0.0",
        Value::Float(FloatValue {
            value: "0.0",
            format: FloatFormat::FixedPoint,
        }),
    );
    assert_parse(
        &ctx,
        "1.5e-3",
        Value::Float(FloatValue {
            value: "1.5e-3",
            format: FloatFormat::Exponential,
        }),
    );
    assert_parse(&ctx, "null", Value::Null);

    assert_parse(
        &ctx,
        "\"hello world\"",
        Value::String(StringValue::new(&ctx, "hello world")),
    );
    assert_parse(
        &ctx,
        r#""caf\u00e9 \u0041\n""#,
        Value::String(StringValue::new(&ctx, "caf\u{e9} A\n")),
    );
    assert_parse(
        &ctx,
        "\"\"\"\n    Hello,\n      World!\n\n    Yours,\n      GraphQL.\n\"\"\"",
        Value::String(StringValue::new(
            &ctx,
            "Hello,\n  World!\n\nYours,\n  GraphQL.",
        )),
    );

    assert_parse(
        &ctx,
        "[1 two { three: 3.0 }]",
        Value::List(ListValue {
            children: Vec::from_iter_in(
                [
                    Value::Int(IntValue { value: "1" }),
                    Value::Enum(EnumValue { value: "two" }),
                    Value::Object(ObjectValue {
                        children: Vec::from_iter_in(
                            [ObjectField {
                                name: "three",
                                value: Value::Float(FloatValue {
                                    value: "3.0",
                                    format: FloatFormat::FixedPoint,
                                }),
                            }],
                            &ctx.arena,
                        ),
                    }),
                ],
                &ctx.arena,
            ),
        }),
    );

    assert!(Value::parse(&ctx, ")").is_err());
    assert!(EnumValue::parse(&ctx, "true").is_err());
    assert!(BooleanValue::parse(&ctx, "TRUE").is_err());
}

#[test]
fn arguments() {
    let ctx = ASTContext::new();
    assert_parse(&ctx, "()", empty_arguments(&ctx));
    assert_parse(
        &ctx,
        "(a: 1, b: 2)",
        Arguments {
            children: Vec::from_iter_in(
                [
                    Argument {
                        name: "a",
                        value: Value::Int(IntValue { value: "1" }),
                    },
                    Argument {
                        name: "b",
                        value: Value::Int(IntValue { value: "2" }),
                    },
                ],
                &ctx.arena,
            ),
        },
    );
    assert!(Arguments::parse(&ctx, "(a: 1").is_err());
}

#[test]
fn directives() {
    let ctx = ASTContext::new();

    assert_parse(&ctx, "# nothing", empty_directives(&ctx));

    let defer = Directive {
        name: "defer",
        arguments: empty_arguments(&ctx),
        location: None,
    };
    assert_parse(
        &ctx,
        "@defer @defer",
        Directives {
            children: Vec::from_iter_in([defer.clone(), defer], &ctx.arena),
        },
    );

    assert_parse(
        &ctx,
        "@include(if: $hi)",
        Directive {
            name: "include",
            arguments: Arguments {
                children: Vec::from_iter_in(
                    [Argument {
                        name: "if",
                        value: Value::Variable(Variable { name: "hi" }),
                    }],
                    &ctx.arena,
                ),
            },
            location: None,
        },
    );
}

#[test]
fn fields() {
    let ctx = ASTContext::new();

    assert_parse(&ctx, "name", Field::new_leaf(&ctx, "name"));

    assert_parse(
        &ctx,
        "alias: name(x: null) @skip(if: true)",
        Field {
            alias: Some("alias"),
            name: "name",
            arguments: Arguments {
                children: Vec::from_iter_in(
                    [Argument {
                        name: "x",
                        value: Value::Null,
                    }],
                    &ctx.arena,
                ),
            },
            directives: Directives {
                children: Vec::from_iter_in(
                    [Directive {
                        name: "skip",
                        arguments: Arguments {
                            children: Vec::from_iter_in(
                                [Argument {
                                    name: "if",
                                    value: Value::Boolean(BooleanValue { value: true }),
                                }],
                                &ctx.arena,
                            ),
                        },
                        location: None,
                    }],
                    &ctx.arena,
                ),
            },
            selection_set: empty_selection_set(&ctx),
            location: None,
        },
    );

    assert_parse(
        &ctx,
        "parent { child }",
        Field {
            selection_set: SelectionSet {
                selections: Vec::from_iter_in(
                    [Selection::Field(Field::new_leaf(&ctx, "child"))],
                    &ctx.arena,
                ),
            },
            ..Field::new_leaf(&ctx, "parent")
        },
    );

    assert!(Field::parse(&ctx, "alias:").is_err());
    assert!(Field::parse(&ctx, "parent {}").is_err());
}

#[test]
fn field_locations() {
    let ctx = ASTContext::new();
    let field = Field::parse(&ctx, "alias: name(x: 1) { child }").unwrap();
    assert_eq!(
        field.location,
        Some(Location {
            start: 0,
            end: 27,
            line: 1,
            column: 1
        })
    );
    let child = field.selection_set.selections[0].field().unwrap();
    assert_eq!(
        child.location,
        Some(Location {
            start: 20,
            end: 25,
            line: 1,
            column: 21
        })
    );
}

#[test]
fn fragment_spread() {
    let ctx = ASTContext::new();
    assert_parse(
        &ctx,
        "...FragName @skip(if: false)",
        FragmentSpread {
            name: NamedType { name: "FragName" },
            directives: Directives {
                children: Vec::from_iter_in(
                    [Directive {
                        name: "skip",
                        arguments: Arguments {
                            children: Vec::from_iter_in(
                                [Argument {
                                    name: "if",
                                    value: Value::Boolean(BooleanValue { value: false }),
                                }],
                                &ctx.arena,
                            ),
                        },
                        location: None,
                    }],
                    &ctx.arena,
                ),
            },
            location: None,
        },
    );
    assert!(FragmentSpread::parse(&ctx, "...on").is_err());
}

#[test]
fn inline_fragment() {
    let ctx = ASTContext::new();
    let selection_set = SelectionSet {
        selections: Vec::from_iter_in(
            [Selection::Field(Field::new_leaf(&ctx, "field"))],
            &ctx.arena,
        ),
    };

    assert_parse(
        &ctx,
        "... on Frag { field }",
        InlineFragment {
            type_condition: Some(NamedType { name: "Frag" }),
            directives: empty_directives(&ctx),
            selection_set: selection_set.clone(),
            location: None,
        },
    );
    assert_parse(
        &ctx,
        "... { field }",
        InlineFragment {
            type_condition: None,
            directives: empty_directives(&ctx),
            selection_set: selection_set.clone(),
            location: None,
        },
    );
    assert_parse(
        &ctx,
        "... @defer { field }",
        Selection::InlineFragment(InlineFragment {
            type_condition: None,
            directives: Directives {
                children: Vec::from_iter_in(
                    [Directive {
                        name: "defer",
                        arguments: empty_arguments(&ctx),
                        location: None,
                    }],
                    &ctx.arena,
                ),
            },
            selection_set,
            location: None,
        }),
    );
    assert!(InlineFragment::parse(&ctx, "... on Frag").is_err());
    assert!(Selection::parse(&ctx, "... 1").is_err());
}

#[test]
fn types() {
    let ctx = ASTContext::new();
    let string = Type::NamedType(NamedType { name: "String" });
    assert_parse(&ctx, "String", string);
    assert_parse(&ctx, "String!", Type::NonNullType(&string));
    let list = Type::ListType(ctx.alloc(Type::NonNullType(&string)));
    assert_parse(&ctx, "[String!]!", Type::NonNullType(&list));
    assert_eq!(Type::parse(&ctx, "[[Int!]]!").unwrap().of_type().name, "Int");

    let error = parse_error::<Type>(&ctx, "String!!");
    assert_eq!(
        error.message(),
        "Invalid Non-null Type: expected a nullable type before `!`, found `!`"
    );
    assert!(Type::parse(&ctx, "[String").is_err());
    assert!(Type::parse(&ctx, "!").is_err());
}

#[test]
fn variable_definitions() {
    let ctx = ASTContext::new();
    assert_parse(
        &ctx,
        "($var: Boolean = false @deprecated)",
        VariableDefinitions {
            children: Vec::from_iter_in(
                [VariableDefinition {
                    variable: Variable { name: "var" },
                    of_type: Type::NamedType(NamedType { name: "Boolean" }),
                    default_value: Value::Boolean(BooleanValue { value: false }),
                    directives: Directives {
                        children: Vec::from_iter_in(
                            [Directive {
                                name: "deprecated",
                                arguments: empty_arguments(&ctx),
                                location: None,
                            }],
                            &ctx.arena,
                        ),
                    },
                    location: None,
                }],
                &ctx.arena,
            ),
        },
    );

    let error = parse_error::<VariableDefinition>(&ctx, "$var: Int = $other");
    assert_eq!(
        error.message(),
        "Invalid Value: expected a constant value, found `$`"
    );
    assert!(VariableDefinition::parse(&ctx, "$var: Int = [{ a: $other }]").is_err());
    assert!(VariableDefinitions::parse(&ctx, "()").is_err());
}

#[test]
fn operation_definitions() {
    let ctx = ASTContext::new();
    let selection_set = SelectionSet {
        selections: Vec::from_iter_in(
            [Selection::Field(Field::new_leaf(&ctx, "field"))],
            &ctx.arena,
        ),
    };

    assert_parse(
        &ctx,
        "{ field }",
        OperationDefinition {
            operation: OperationKind::Query,
            name: None,
            variable_definitions: VariableDefinitions::default_in(&ctx.arena),
            directives: empty_directives(&ctx),
            selection_set: selection_set.clone(),
            location: None,
        },
    );
    assert_parse(
        &ctx,
        "mutation Name { field }",
        OperationDefinition {
            operation: OperationKind::Mutation,
            name: Some(NamedType { name: "Name" }),
            variable_definitions: VariableDefinitions::default_in(&ctx.arena),
            directives: empty_directives(&ctx),
            selection_set: selection_set.clone(),
            location: None,
        },
    );
    assert_parse(
        &ctx,
        "subscription ($x: ID) { field }",
        OperationDefinition {
            operation: OperationKind::Subscription,
            name: None,
            variable_definitions: VariableDefinitions {
                children: Vec::from_iter_in(
                    [VariableDefinition {
                        variable: Variable { name: "x" },
                        of_type: Type::NamedType(NamedType { name: "ID" }),
                        default_value: Value::Null,
                        directives: empty_directives(&ctx),
                        location: None,
                    }],
                    &ctx.arena,
                ),
            },
            directives: empty_directives(&ctx),
            selection_set,
            location: None,
        },
    );

    assert!(OperationDefinition::parse(&ctx, "query").is_err());
    assert!(OperationDefinition::parse(&ctx, "query Name").is_err());
}

#[test]
fn fragment_definitions() {
    let ctx = ASTContext::new();
    let fragment = FragmentDefinition::parse_with_options(
        &ctx,
        "fragment Frag on Type @skip(if: true) { field }",
        NO_LOCATIONS,
    )
    .unwrap();
    assert_eq!(fragment.name.name, "Frag");
    assert_eq!(fragment.type_condition.name, "Type");
    assert_eq!(fragment.directives.children.len(), 1);
    assert!(fragment.variable_definitions.is_empty());

    assert!(FragmentDefinition::parse(&ctx, "fragment on on Type { field }").is_err());
    assert!(FragmentDefinition::parse(&ctx, "fragment Frag on Type").is_err());
    assert!(FragmentDefinition::parse(&ctx, "fragment Frag($a: Int) on Type { a }").is_err());

    let options = ParserOptions {
        allow_fragment_variables: true,
        ..ParserOptions::DEFAULT
    };
    let fragment = FragmentDefinition::parse_with_options(
        &ctx,
        "fragment Frag($a: Int = 1) on Type { a(value: $a) }",
        options,
    )
    .unwrap();
    assert_eq!(fragment.variable_definitions.children.len(), 1);
}

#[test]
fn documents() {
    let ctx = ASTContext::new();
    let document = Document::parse(
        &ctx,
        indoc! {"
            # leading comment
            query Named($id: ID!) { node(id: $id) { ...Frag } }
            fragment Frag on Node { id }
            { shorthand }
        "},
    )
    .unwrap();
    assert_eq!(document.definitions.len(), 3);
    assert!(document.is_executable());
    assert_eq!(document.definitions[0].name(), Some("Named"));
    assert_eq!(document.definitions[2].name(), None);

    assert!(Document::parse(&ctx, "").unwrap().is_empty());
    assert!(Document::parse(&ctx, "unknown { field }").is_err());
    assert!(Document::parse(&ctx, "{ field ").is_err());
}

#[test]
fn byte_order_mark() {
    let ctx = ASTContext::new();
    let source = b"\xEF\xBB\xBF{ field }";
    let document = Document::parse(&ctx, source).unwrap();
    let operation = document.definitions[0].operation().unwrap();
    assert_eq!(operation.location.unwrap().start, 3);
    assert_eq!(operation.location.unwrap().column, 1);
}

#[test]
fn object_type_definition() {
    let ctx = ASTContext::new();
    let document = Document::parse(&ctx, "type Foo { bar: String! }").unwrap();
    match &document.definitions[0] {
        Definition::Object(object) => {
            assert_eq!(object.name, "Foo");
            assert_eq!(object.fields.len(), 1);
            assert_eq!(object.fields[0].name, "bar");
            assert_eq!(
                object.fields[0].of_type,
                Type::NonNullType(&Type::NamedType(NamedType { name: "String" }))
            );
        }
        definition => panic!("expected an object type, got {:?}", definition),
    }

    let error = Document::parse(&ctx, "type Foo { bar: String!! }").unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Syntax);
    assert!(Document::parse(&ctx, "type Foo {}").is_err());
}

#[test]
fn type_system_definitions() {
    let ctx = ASTContext::new();
    let document = Document::parse_with_options(
        &ctx,
        indoc! {r#"
            "The schema"
            schema @link(url: "https://example.com") {
              query: Query
              mutation: Mutation
            }

            """
            A date
            """
            scalar Date @specifiedBy(url: "https://example.com/date")

            type Query implements & Node & Entity @key(fields: "id") {
              "The id"
              id: ID!
              search(term: String = "*", first: Int! = 10 @deprecated): [Result!]
            }

            interface Node implements Entity {
              id: ID!
            }

            union Result = | Query | Node

            enum Color {
              "Red"
              RED @deprecated(reason: "no")
              GREEN
            }

            input Filter {
              color: Color = RED
              nested: [Filter!]
            }

            directive @auth(role: String) repeatable on | FIELD_DEFINITION | OBJECT
        "#},
        NO_LOCATIONS,
    )
    .unwrap();
    assert_eq!(document.definitions.len(), 8);

    match &document.definitions[0] {
        Definition::Schema(schema) => {
            assert_eq!(schema.description, Some(StringValue { value: "The schema" }));
            assert_eq!(schema.operation_types.len(), 2);
            assert_eq!(schema.operation_types[1].operation, OperationKind::Mutation);
            assert_eq!(schema.operation_types[1].named_type.name, "Mutation");
        }
        definition => panic!("expected a schema, got {:?}", definition),
    }
    match &document.definitions[1] {
        Definition::Scalar(scalar) => {
            assert_eq!(scalar.description, Some(StringValue { value: "A date" }));
            assert_eq!(scalar.directives.children[0].name, "specifiedBy");
        }
        definition => panic!("expected a scalar, got {:?}", definition),
    }
    match &document.definitions[2] {
        Definition::Object(object) => {
            let interfaces: std::vec::Vec<_> = object.interfaces.iter().map(|i| i.name).collect();
            assert_eq!(interfaces, vec!["Node", "Entity"]);
            assert_eq!(object.fields[0].description, Some(StringValue { value: "The id" }));
            let search = &object.fields[1];
            assert_eq!(search.arguments.len(), 2);
            assert_eq!(
                search.arguments[0].default_value,
                Some(Value::String(StringValue { value: "*" }))
            );
            assert_eq!(search.arguments[1].directives.children.len(), 1);
        }
        definition => panic!("expected an object type, got {:?}", definition),
    }
    match &document.definitions[4] {
        Definition::Union(union) => {
            let types: std::vec::Vec<_> = union.types.iter().map(|t| t.name).collect();
            assert_eq!(types, vec!["Query", "Node"]);
        }
        definition => panic!("expected a union, got {:?}", definition),
    }
    match &document.definitions[5] {
        Definition::Enum(enum_type) => {
            assert_eq!(enum_type.values.len(), 2);
            assert_eq!(enum_type.values[0].description, Some(StringValue { value: "Red" }));
            assert_eq!(enum_type.values[1].name, "GREEN");
        }
        definition => panic!("expected an enum, got {:?}", definition),
    }
    match &document.definitions[6] {
        Definition::InputObject(input) => {
            assert_eq!(input.fields.len(), 2);
            assert_eq!(
                input.fields[0].default_value,
                Some(Value::Enum(EnumValue { value: "RED" }))
            );
            assert_eq!(input.fields[1].default_value, None);
        }
        definition => panic!("expected an input object, got {:?}", definition),
    }
    match &document.definitions[7] {
        Definition::Directive(directive) => {
            assert_eq!(directive.name, "auth");
            assert!(directive.is_repeatable);
            assert_eq!(
                &directive.locations[..],
                &[DirectiveLocation::FieldDefinition, DirectiveLocation::Object]
            );
        }
        definition => panic!("expected a directive, got {:?}", definition),
    }
}

#[test]
fn type_system_errors() {
    let ctx = ASTContext::new();
    assert!(Document::parse(&ctx, "\"description\" query { a }").is_err());
    assert!(Document::parse(&ctx, "\"description\" extend type A @a").is_err());
    assert!(Document::parse(&ctx, "enum E { true }").is_err());
    assert!(Document::parse(&ctx, "enum E {}").is_err());
    assert!(Document::parse(&ctx, "directive @a on UNKNOWN").is_err());
    assert!(Document::parse(&ctx, "directive @a(b: Int = $c) on FIELD").is_err());
    assert!(Document::parse(&ctx, "type A @key(fields: $f) { a: Int }").is_err());
    assert!(Document::parse(&ctx, "schema { query Query }").is_err());
    assert!(Document::parse(&ctx, "type A { a(): Int }").is_err());
    let error = Document::parse(&ctx, "directive @a on FIELD | Query").unwrap_err();
    assert_eq!(
        error.message(),
        "Invalid Directive Location: expected a directive location, found Name `Query`"
    );
}

#[test]
fn type_system_extensions() {
    let ctx = ASTContext::new();
    let document = Document::parse_with_options(
        &ctx,
        indoc! {"
            extend schema @tag { subscription: Subscription }
            extend scalar Date @tag
            extend type Query implements Node { extra: Int }
            extend interface Node @tag
            extend union Result = Other
            extend enum Color { BLUE }
            extend input Filter { limit: Int }
        "},
        NO_LOCATIONS,
    )
    .unwrap();
    assert_eq!(document.definitions.len(), 7);
    assert!(matches!(document.definitions[0], Definition::SchemaExtension(_)));
    assert!(matches!(document.definitions[1], Definition::ScalarExtension(_)));
    assert!(matches!(document.definitions[2], Definition::ObjectExtension(_)));
    assert!(matches!(document.definitions[3], Definition::InterfaceExtension(_)));
    assert!(matches!(document.definitions[4], Definition::UnionExtension(_)));
    assert!(matches!(document.definitions[5], Definition::EnumExtension(_)));
    assert!(matches!(document.definitions[6], Definition::InputObjectExtension(_)));
    assert_eq!(document.definitions[2].name(), Some("Query"));

    let error = Document::parse(&ctx, "extend type Query").unwrap_err();
    assert_eq!(
        error.message(),
        "Invalid Type Extension: expected interfaces, directives or fields, found <end of file>"
    );
    assert!(Document::parse(&ctx, "extend scalar Date").is_err());
    assert!(Document::parse(&ctx, "extend schema").is_err());
    assert!(Document::parse(&ctx, "extend union U").is_err());
    assert!(Document::parse(&ctx, "extend enum E").is_err());
    assert!(Document::parse(&ctx, "extend input I").is_err());
    assert!(Document::parse(&ctx, "extend directive @a on FIELD").is_err());
}

#[test]
fn schema_coordinates() {
    let ctx = ASTContext::new();
    let coordinate =
        |source: &'static str| *SchemaCoordinate::parse_with_options(&ctx, source, NO_LOCATIONS).unwrap();

    assert_eq!(
        coordinate("Type"),
        SchemaCoordinate {
            of_directive: false,
            name: "Type",
            member_name: None,
            argument_name: None,
            location: None,
        }
    );
    assert_eq!(coordinate("Type.field").member_name, Some("field"));
    let argument = coordinate("Type.field(arg:)");
    assert_eq!(argument.member_name, Some("field"));
    assert_eq!(argument.argument_name, Some("arg"));
    let directive = coordinate("@skip(if:)");
    assert!(directive.of_directive);
    assert_eq!(directive.name, "skip");
    assert_eq!(directive.argument_name, Some("if"));

    assert!(parse_schema_coordinate(&ctx, "Type(arg:)").is_err());
    assert!(parse_schema_coordinate(&ctx, "@skip.field").is_err());
    assert!(parse_schema_coordinate(&ctx, "Type.field(arg)").is_err());
    assert!(parse_schema_coordinate(&ctx, "Type..field").is_err());
    assert!(parse_schema_coordinate(&ctx, "Type.").is_err());
}

#[test]
fn entry_points() {
    let ctx = ASTContext::new();
    assert_eq!(parse_document(&ctx, "{ a }").unwrap().definitions.len(), 1);
    assert_eq!(
        *parse_value(&ctx, "[1]").unwrap(),
        Value::List(ListValue {
            children: Vec::from_iter_in([Value::Int(IntValue { value: "1" })], &ctx.arena),
        })
    );
    assert_eq!(parse_type(&ctx, "Int!").unwrap().of_type().name, "Int");
    assert_eq!(parse_field(&ctx, "a: b").unwrap().alias_or_name(), "a");
}

#[test]
fn field_limit() {
    let ctx = ASTContext::new();
    let options = ParserOptions {
        max_allowed_fields: 2,
        ..ParserOptions::DEFAULT
    };
    assert!(Document::parse_with_options(&ctx, "{ a b }", options).is_ok());
    let error = Document::parse_with_options(&ctx, "{ a b c }", options).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Limit);
    assert_eq!(
        error.message(),
        "Document contains more than 2 fields. Parsing aborted."
    );
}

#[test]
fn token_and_node_limits() {
    let ctx = ASTContext::new();
    let tokens = ParserOptions {
        max_allowed_tokens: 4,
        ..ParserOptions::DEFAULT
    };
    // `{`, `a`, `b`, `}` with comments not being counted
    assert!(Document::parse_with_options(&ctx, "{ a # comment\n b }", tokens).is_ok());
    let error = Document::parse_with_options(&ctx, "{ a b c }", tokens).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Limit);

    let nodes = ParserOptions {
        max_allowed_nodes: 3,
        ..ParserOptions::DEFAULT
    };
    assert!(Document::parse_with_options(&ctx, "{ a b }", nodes).is_ok());
    let error = Document::parse_with_options(&ctx, "{ a(x: 1) }", nodes).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Limit);
}

#[test]
fn depth_limit() {
    let ctx = ASTContext::new();
    let options = ParserOptions {
        max_allowed_depth: 3,
        ..ParserOptions::DEFAULT
    };
    assert!(Document::parse_with_options(&ctx, "{ a { b { c } } }", options).is_ok());
    let error =
        Document::parse_with_options(&ctx, "{ a { b { c { d } } } }", options).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Limit);
    assert!(Value::parse_with_options(&ctx, "[[[]]]", options).is_ok());
    assert!(Value::parse_with_options(&ctx, "[[[{}]]]", options).is_err());

    let deep = "[".repeat(10_000);
    let error = Value::parse(&ctx, deep.as_str()).unwrap_err();
    assert_eq!(error.error_type(), ErrorType::Limit);
}
