use std::collections::BTreeMap;

use deflemma_diagnostics::SymbolPosition;
use deflemma_grammar::{
    Expression, ExpressionCategory, Function, FunctionDefinition, ImportModulePart, Input, Module,
    ModulePart, Position, Struct,
};
use serde::Serialize;

use crate::{
    DefinitionMonad, ImportName, IrError, IrExpression, Reference, ReferenceInput, Type,
    UniqueIdGenerator,
};

/// The position of every lowered declaration, keyed by the identifier of the declaration.
pub type SymbolPositions = BTreeMap<u64, SymbolPosition>;

/// Everything produced by lowering a module.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoweredModule {
    pub imports: Vec<ImportName>,
    pub references: Vec<Reference>,
    pub symbols: SymbolPositions,
}

/// Lower a module into its imports and its declarations.
///
/// The module parts are visited in source order, and so are the declarations inside each part:
/// every struct and function gets the next identifier from `ids`, and its position is inserted
/// in `symbols` under that identifier. Imports are kept in source order, duplicates included.
///
/// The first malformed node aborts the lowering: in that case nothing is returned and `symbols`
/// is left untouched.
pub fn get_ir(
    file_name: &str,
    module: &Module,
    ids: &mut UniqueIdGenerator,
    symbols: &mut SymbolPositions,
) -> Result<(Vec<ImportName>, Vec<Reference>), IrError> {
    let mut imports = Vec::new();
    let mut references = Vec::new();
    let mut positions = SymbolPositions::new();

    for part in &module.parts {
        match part {
            ModulePart::Import(part) => lower_imports(part, &mut imports)?,
            ModulePart::Struct(part) => {
                for declaration in &part.structs {
                    let reference = lower_struct(declaration, ids)?;
                    positions.insert(
                        reference.unique_id,
                        symbol_position(file_name, &declaration.position),
                    );
                    references.push(reference);
                }
            }
            ModulePart::Function(part) => {
                for declaration in &part.functions {
                    let reference = lower_function(declaration, ids)?;
                    positions.insert(
                        reference.unique_id,
                        symbol_position(file_name, &declaration.position),
                    );
                    references.push(reference);
                }
            }
        }
    }

    debug!(
        "Lowered {}: {} imports, {} declarations",
        file_name,
        imports.len(),
        references.len()
    );
    symbols.extend(positions);
    Ok((imports, references))
}

/// Lower a module into a [`LoweredModule`], with a symbol table of its own.
pub fn lower_module(
    file_name: &str,
    module: &Module,
    ids: &mut UniqueIdGenerator,
) -> Result<LoweredModule, IrError> {
    let mut symbols = SymbolPositions::new();
    let (imports, references) = get_ir(file_name, module, ids, &mut symbols)?;
    Ok(LoweredModule {
        imports,
        references,
        symbols,
    })
}

/// Lower the body of a function.
///
/// The instruction set of the lowered bodies is not defined yet, so the result is always empty.
// TODO: produce the `IrExpression` tree of each expression chain once the `OpCode`s are settled.
pub fn lower_expressions(_definition: &FunctionDefinition) -> Vec<IrExpression> {
    Vec::new()
}

fn symbol_position(file_name: &str, position: &Position) -> SymbolPosition {
    SymbolPosition::new(file_name, position.line, position.column)
}

fn lower_imports(part: &ImportModulePart, imports: &mut Vec<ImportName>) -> Result<(), IrError> {
    for import in &part.imports {
        let names = import.names();
        if names.is_empty() {
            return Err(IrError::malformed(
                "import",
                import.pos(),
                "the list of imported names is empty",
            ));
        }
        for name in names {
            if name.is_empty() {
                return Err(IrError::malformed(
                    "import",
                    import.pos(),
                    "the imported name is empty",
                ));
            }
            trace!("Import {}", name);
            imports.push(ImportName(name.clone()));
        }
    }
    Ok(())
}

fn lower_struct(declaration: &Struct, ids: &mut UniqueIdGenerator) -> Result<Reference, IrError> {
    if declaration.name.is_empty() {
        return Err(IrError::malformed(
            "struct",
            &declaration.position,
            "the struct has no name",
        ));
    }
    let inputs = lower_inputs(&declaration.fields)?;
    let unique_id = ids.next_id();
    debug!("Struct {} has id {}", declaration.name, unique_id);

    Ok(Reference {
        unique_id,
        name: declaration.name.clone(),
        inputs,
        return_type: Some(Type::new(declaration.name.clone(), vec![])),
        definition: DefinitionMonad {
            is_struct: true,
            ..Default::default()
        },
    })
}

fn lower_function(
    declaration: &Function,
    ids: &mut UniqueIdGenerator,
) -> Result<Reference, IrError> {
    if declaration.name.name.is_empty() {
        return Err(IrError::malformed(
            "function",
            &declaration.position,
            "the function has no name",
        ));
    }
    let inputs = lower_inputs(&declaration.inputs)?;
    let return_type = declaration
        .return_type
        .as_ref()
        .map(|ty| lower_type(ty, &declaration.position))
        .transpose()?;
    validate_definition(&declaration.definition)?;
    let unique_id = ids.next_id();
    debug!(
        "Function {} has id {}",
        declaration.name.name, unique_id
    );

    Ok(Reference {
        unique_id,
        name: declaration.name.name.clone(),
        inputs,
        return_type,
        definition: DefinitionMonad {
            is_struct: false,
            is_function: true,
            is_operator: declaration.name.is_operator,
            annotation: declaration.annotation.clone().unwrap_or_default(),
            expressions: lower_expressions(&declaration.definition),
        },
    })
}

fn lower_inputs(inputs: &[Input]) -> Result<Vec<ReferenceInput>, IrError> {
    inputs
        .iter()
        .map(|input| {
            if input.name.is_empty() {
                return Err(IrError::malformed(
                    "input",
                    &input.position,
                    "the input has no name",
                ));
            }
            Ok(ReferenceInput {
                name: input.name.clone(),
                ty: lower_type(&input.ty, &input.position)?,
            })
        })
        .collect()
}

fn lower_type(ty: &deflemma_grammar::Type, position: &Position) -> Result<Type, IrError> {
    if ty.name.is_empty() {
        return Err(IrError::malformed("type", position, "the type has no name"));
    }
    let generics = ty
        .generics
        .iter()
        .map(|generic| lower_type(generic, position))
        .collect::<Result<Vec<_>, IrError>>()?;
    Ok(Type::new(ty.name.clone(), generics))
}

fn validate_definition(definition: &FunctionDefinition) -> Result<(), IrError> {
    match definition {
        FunctionDefinition::Constexpr { expressions, .. } => {
            for expression in expressions {
                validate_expression(expression, ExpressionCategory::Constexpr)?;
            }
        }
        FunctionDefinition::Block { instructions, .. } => {
            for instruction in instructions {
                validate_expression(instruction, ExpressionCategory::Block)?;
            }
        }
        FunctionDefinition::Pattern { patterns, .. } => {
            for pattern in patterns {
                if pattern.name.is_empty() {
                    return Err(IrError::malformed(
                        "pattern",
                        &pattern.position,
                        "the pattern has no name",
                    ));
                }
                validate_expression(&pattern.definition, ExpressionCategory::Inline)?;
            }
        }
    }
    Ok(())
}

/// Check that `expression` can appear in `category`, and so can all its sub-expressions. The
/// expressions nested in a block instruction, and the ones chained after it, are inline, except
/// for the condition of a block conditional which is a block expression.
fn validate_expression(
    expression: &Expression,
    category: ExpressionCategory,
) -> Result<(), IrError> {
    let nested = match category {
        ExpressionCategory::Block => ExpressionCategory::Inline,
        other => other,
    };
    for (index, link) in expression.chain().enumerate() {
        let expected = if index == 0 { category } else { nested };
        if !link.belongs_to(expected) {
            return Err(IrError::malformed(
                "expression",
                link.pos(),
                format!(
                    "the {} cannot be used as a {}",
                    link.kind(),
                    expected.description()
                ),
            ));
        }
        for (inner, inner_category) in inner_expressions(link, nested) {
            validate_expression(inner, inner_category)?;
        }
    }
    Ok(())
}

/// The expressions nested inside `expression`, not including the chained ones, with the
/// category each one must belong to.
fn inner_expressions(
    expression: &Expression,
    nested: ExpressionCategory,
) -> Vec<(&Expression, ExpressionCategory)> {
    match expression {
        Expression::BlockConditional(conditional) => {
            let mut inner = vec![(conditional.condition.as_ref(), ExpressionCategory::Block)];
            inner.extend(conditional.execution.iter().map(|e| (e, nested)));
            for sub in &conditional.sub_conditionals {
                inner.push((&sub.condition, nested));
                inner.extend(sub.execution.iter().map(|e| (e, nested)));
            }
            inner.extend(conditional.alternative.iter().map(|e| (e, nested)));
            inner
        }
        Expression::Label(label) => vec![(label.resolution.as_ref(), nested)],
        Expression::InlineConditional(conditional) => vec![
            (conditional.condition.as_ref(), nested),
            (conditional.execution.as_ref(), nested),
        ],
        Expression::Parenthetical(parenthetical) => {
            vec![(parenthetical.execution.as_ref(), nested)]
        }
        Expression::Capture(capture) => vec![(capture.execution.as_ref(), nested)],
        Expression::Reference(_) | Expression::Operator(_) | Expression::Literal(_) => vec![],
    }
}

#[cfg(test)]
mod tests {
    use deflemma_grammar::{
        BlockConditional, FunctionModulePart, FunctionName, Import, InlineConditional, Label,
        Literal, Operator, Pattern, StructModulePart, Value,
    };
    use pretty_assertions::assert_eq;
    use speculoos::prelude::*;

    use super::*;

    fn pos(line: usize, column: usize) -> Position {
        Position::new("main.dfl", 0, line, column)
    }

    fn ty(name: &str, generics: Vec<deflemma_grammar::Type>) -> deflemma_grammar::Type {
        deflemma_grammar::Type::new(name, generics)
    }

    fn input(ty: deflemma_grammar::Type, name: &str) -> Input {
        Input {
            position: Position::default(),
            ty,
            name: name.into(),
        }
    }

    fn reference(name: &str) -> Expression {
        Expression::Reference(deflemma_grammar::Reference {
            position: Position::default(),
            names: vec![name.into()],
            next: None,
        })
    }

    fn literal() -> Expression {
        Expression::Literal(Literal {
            position: pos(9, 12),
            value: Value::Int {
                position: pos(9, 12),
                value: "1".into(),
            },
        })
    }

    fn function(name: &str, definition: FunctionDefinition) -> Function {
        Function {
            position: pos(7, 1),
            annotation: None,
            return_type: None,
            name: FunctionName::capture(name),
            inputs: vec![],
            definition,
        }
    }

    fn constexpr(expressions: Vec<Expression>) -> FunctionDefinition {
        FunctionDefinition::Constexpr {
            position: Position::default(),
            expressions,
        }
    }

    fn module() -> Module {
        Module {
            position: Position::default(),
            parts: vec![
                ModulePart::Import(ImportModulePart {
                    position: pos(1, 1),
                    imports: vec![
                        Import::Single {
                            position: pos(1, 5),
                            name: "math".into(),
                        },
                        Import::List {
                            position: pos(2, 5),
                            names: vec!["io".into(), "math".into()],
                        },
                    ],
                }),
                ModulePart::Struct(StructModulePart {
                    position: pos(4, 1),
                    structs: vec![Struct {
                        position: pos(4, 1),
                        name: "Point".into(),
                        fields: vec![
                            input(ty("Int", vec![]), "x"),
                            input(ty("List", vec![ty("Int", vec![])]), "y"),
                        ],
                    }],
                }),
                ModulePart::Function(FunctionModulePart {
                    position: pos(7, 1),
                    functions: vec![
                        Function {
                            position: pos(7, 1),
                            annotation: Some("inline".into()),
                            return_type: Some(ty("Int", vec![])),
                            name: FunctionName::capture("+"),
                            inputs: vec![
                                input(ty("Int", vec![]), "a"),
                                input(ty("Int", vec![]), "b"),
                            ],
                            definition: constexpr(vec![reference("a")]),
                        },
                        function("origin", constexpr(vec![literal()])),
                    ],
                }),
                ModulePart::Struct(StructModulePart {
                    position: pos(12, 1),
                    structs: vec![Struct {
                        position: pos(12, 1),
                        name: "Empty".into(),
                        fields: vec![],
                    }],
                }),
            ],
        }
    }

    #[test]
    fn test_imports_keep_order_and_duplicates() {
        let mut symbols = SymbolPositions::new();
        let (imports, _) =
            get_ir("main.dfl", &module(), &mut UniqueIdGenerator::new(), &mut symbols).unwrap();
        let imports: Vec<_> = imports.iter().map(ToString::to_string).collect();
        assert_eq!(imports, vec!["math", "io", "math"]);
    }

    #[test]
    fn test_references() {
        let mut symbols = SymbolPositions::new();
        let (_, references) =
            get_ir("main.dfl", &module(), &mut UniqueIdGenerator::new(), &mut symbols).unwrap();

        assert_that!(references).has_length(4);
        let point = &references[0];
        assert!(point.definition.is_struct);
        assert!(!point.definition.is_function);
        assert_eq!(point.return_type, Some(Type::new("Point", vec![])));
        assert!(point.inputs[0].ty.generics.is_empty());
        assert_eq!(
            point.inputs[1].ty,
            Type::new("List", vec![Type::new("Int", vec![])])
        );

        let plus = &references[1];
        assert!(plus.definition.is_function);
        assert!(plus.definition.is_operator);
        assert_eq!(plus.definition.annotation, "inline");
        assert_that!(plus.definition.expressions).is_empty();

        let origin = &references[2];
        assert!(!origin.definition.is_operator);
        assert_eq!(origin.definition.annotation, "");
        assert_eq!(origin.return_type, None);
    }

    #[test]
    fn test_symbol_positions() {
        let mut symbols = SymbolPositions::new();
        let (_, references) =
            get_ir("main.dfl", &module(), &mut UniqueIdGenerator::new(), &mut symbols).unwrap();

        assert_eq!(symbols.len(), references.len());
        assert_eq!(
            symbols[&references[0].unique_id],
            SymbolPosition::new("main.dfl", 4, 1)
        );
        assert_eq!(
            symbols[&references[3].unique_id],
            SymbolPosition::new("main.dfl", 12, 1)
        );
    }

    #[test]
    fn test_ids_are_deterministic() {
        let mut ids = UniqueIdGenerator::new();
        let first = lower_module("main.dfl", &module(), &mut ids).unwrap();
        ids.reset();
        let second = lower_module("main.dfl", &module(), &mut ids).unwrap();

        let first_ids: Vec<_> = first.references.iter().map(|r| r.unique_id).collect();
        let second_ids: Vec<_> = second.references.iter().map(|r| r.unique_id).collect();
        assert_eq!(first_ids, vec![1, 2, 3, 4]);
        assert_eq!(first_ids, second_ids);
        assert_eq!(first, second);
    }

    #[test]
    fn test_ids_do_not_collide_without_reset() {
        let mut ids = UniqueIdGenerator::new();
        let first = lower_module("a.dfl", &module(), &mut ids).unwrap();
        let second = lower_module("b.dfl", &module(), &mut ids).unwrap();
        assert_eq!(first.references[3].unique_id, 4);
        assert_eq!(second.references[0].unique_id, 5);
    }

    #[test]
    fn test_empty_list_import() {
        let module = Module {
            position: Position::default(),
            parts: vec![ModulePart::Import(ImportModulePart {
                position: pos(1, 1),
                imports: vec![Import::List {
                    position: pos(1, 5),
                    names: vec![],
                }],
            })],
        };
        let error = lower_module("main.dfl", &module, &mut UniqueIdGenerator::new()).unwrap_err();
        assert!(matches!(error, IrError::MalformedAst { ref what, .. } if what == "import"));
    }

    #[test]
    fn test_error_aborts_without_partial_output() {
        let mut module = module();
        module.parts.push(ModulePart::Struct(StructModulePart {
            position: pos(20, 1),
            structs: vec![Struct {
                position: pos(20, 1),
                name: "Broken".into(),
                fields: vec![input(ty("", vec![]), "field")],
            }],
        }));

        let mut symbols = SymbolPositions::new();
        let result = get_ir("main.dfl", &module, &mut UniqueIdGenerator::new(), &mut symbols);
        assert!(matches!(result, Err(IrError::MalformedAst { ref what, .. }) if what == "type"));
        assert!(symbols.is_empty());
    }

    #[test]
    fn test_literal_is_not_a_block_instruction() {
        let definition = FunctionDefinition::Block {
            position: Position::default(),
            instructions: vec![literal()],
        };
        let module = Module {
            position: Position::default(),
            parts: vec![ModulePart::Function(FunctionModulePart {
                position: pos(7, 1),
                functions: vec![function("main", definition)],
            })],
        };
        let error = lower_module("main.dfl", &module, &mut UniqueIdGenerator::new()).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed expression at main.dfl:9:12: the literal cannot be used as a block instruction"
        );
    }

    #[test]
    fn test_block_instructions_chain_inline_expressions() {
        let chained = Expression::Reference(deflemma_grammar::Reference {
            position: Position::default(),
            names: vec!["print".into()],
            next: Some(Box::new(Expression::Operator(Operator {
                position: Position::default(),
                operator: "!".into(),
                next: Some(Box::new(reference("x"))),
            }))),
        });
        let label = Expression::Label(Label {
            position: Position::default(),
            label: "y".into(),
            resolution: Box::new(literal()),
        });
        let valid = FunctionDefinition::Block {
            position: Position::default(),
            instructions: vec![chained],
        };
        let invalid = FunctionDefinition::Block {
            position: Position::default(),
            instructions: vec![label],
        };

        assert!(validate_definition(&valid).is_ok());
        assert!(validate_definition(&invalid).is_err());
    }

    #[test]
    fn test_block_conditional_condition_is_a_block_expression() {
        let conditional = |condition: Expression| FunctionDefinition::Block {
            position: Position::default(),
            instructions: vec![Expression::BlockConditional(BlockConditional {
                position: pos(8, 3),
                condition: Box::new(condition),
                execution: vec![reference("x")],
                sub_conditionals: vec![],
                alternative: vec![],
            })],
        };
        let operator = Expression::Operator(Operator {
            position: pos(8, 7),
            operator: "!".into(),
            next: Some(Box::new(reference("x"))),
        });
        let label = Expression::Label(Label {
            position: pos(8, 7),
            label: "y".into(),
            resolution: Box::new(reference("x")),
        });
        let inline_conditional = Expression::InlineConditional(InlineConditional {
            position: pos(8, 7),
            condition: Box::new(reference("x")),
            execution: Box::new(reference("y")),
        });

        assert!(validate_definition(&conditional(label)).is_ok());
        assert!(validate_definition(&conditional(inline_conditional)).is_ok());
        let error = validate_definition(&conditional(operator)).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Malformed expression at main.dfl:8:7: the operator cannot be used as a block instruction"
        );
    }

    #[test]
    fn test_pattern_definition() {
        let definition = FunctionDefinition::Pattern {
            position: Position::default(),
            patterns: vec![Pattern {
                position: pos(8, 3),
                name: "fib".into(),
                params: vec!["n".into()],
                definition: reference("n"),
            }],
        };
        assert!(validate_definition(&definition).is_ok());
        assert_that!(lower_expressions(&definition)).is_empty();
    }
}
