use deflemma_container::{GraphTree, Tree};
use deflemma_grammar::{Char, Value};

use crate::{DataValue, IrError, TypeId};

/// Build the tree of a literal value.
///
/// A scalar is a single node holding its [`DataValue`]. A group is a node tagged `LIST` or
/// `STRUCT` with an empty text. Its scalar members become its children in source order, while
/// the members of a nested group are spliced in at the same level instead of adding a new one.
///
/// A malformed char literal aborts the build.
pub fn value_tree(value: &Value) -> Result<GraphTree<DataValue>, IrError> {
    let members = value.members();
    let mut tree = GraphTree::with_capacity(2, members.len().max(1));
    tree.set_value(data_value(value)?);
    splice_members(&mut tree, members)?;
    Ok(tree)
}

/// Append the scalar members to `tree`, descending into the nested groups.
fn splice_members(tree: &mut GraphTree<DataValue>, members: &[Value]) -> Result<(), IrError> {
    for member in members {
        if member.is_group() {
            trace!("Splicing the group at {}", member.pos());
            splice_members(tree, member.members())?;
        } else {
            tree.add_child(data_value(member)?);
        }
    }
    Ok(())
}

/// The [`DataValue`] of the node of `value` alone, without its members.
pub fn data_value(value: &Value) -> Result<DataValue, IrError> {
    let data = match value {
        Value::Bool { value, .. } => DataValue::new(TypeId::Boolean, value.clone()),
        Value::Float { value, .. } => DataValue::new(TypeId::Decimal, value.clone()),
        Value::Int { value, .. } => DataValue::new(TypeId::Integer, value.clone()),
        Value::String { value, .. } => DataValue::new(TypeId::Text, value.clone()),
        Value::Char { value, position } => {
            DataValue::new(TypeId::Char, Char::capture(value, position)?.to_string())
        }
        Value::List { .. } => DataValue::group(TypeId::List),
        Value::Struct { .. } => DataValue::group(TypeId::Struct),
    };
    trace!("Value {} at {}", data, value.pos());
    Ok(data)
}

#[cfg(test)]
mod tests {
    use deflemma_container::{left_depth_first, TreeNode};
    use deflemma_grammar::Position;
    use pretty_assertions::assert_eq;

    use super::*;

    fn int(value: &str) -> Value {
        Value::Int {
            position: Position::default(),
            value: value.into(),
        }
    }

    fn boolean(value: &str) -> Value {
        Value::Bool {
            position: Position::default(),
            value: value.into(),
        }
    }

    fn list(values: Vec<Value>) -> Value {
        Value::List {
            position: Position::default(),
            values,
        }
    }

    fn structure(fields: Vec<Value>) -> Value {
        Value::Struct {
            position: Position::default(),
            fields,
        }
    }

    #[test]
    fn test_scalar() {
        let tree = value_tree(&Value::Float {
            position: Position::default(),
            value: "3.14".into(),
        })
        .unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.value(), DataValue::new(TypeId::Decimal, "3.14"));
    }

    #[test]
    fn test_list_of_scalars() {
        let tree = value_tree(&list(vec![int("1"), int("2"), int("3")])).unwrap();
        assert_eq!(tree.value(), DataValue::group(TypeId::List));
        assert_eq!(
            tree.children(),
            vec![
                DataValue::new(TypeId::Integer, "1"),
                DataValue::new(TypeId::Integer, "2"),
                DataValue::new(TypeId::Integer, "3"),
            ]
        );
    }

    #[test]
    fn test_nested_group_is_spliced() {
        let tree = value_tree(&list(vec![boolean("true"), structure(vec![int("1"), int("2")])]))
            .unwrap();

        assert_eq!(tree.value(), DataValue::group(TypeId::List));
        assert_eq!(
            tree.children(),
            vec![
                DataValue::new(TypeId::Boolean, "true"),
                DataValue::new(TypeId::Integer, "1"),
                DataValue::new(TypeId::Integer, "2"),
            ]
        );
        let root = tree.as_node();
        assert_eq!(root.child_count(), 3);
        for i in 0..3 {
            assert!(root.child(i).unwrap().is_leaf());
        }
    }

    #[test]
    fn test_deeply_nested_groups() {
        let value = list(vec![list(vec![list(vec![int("7")])]), int("8")]);
        let tree = value_tree(&value).unwrap();

        let texts: Vec<_> = left_depth_first(&tree)
            .into_iter()
            .map(|data| data.to_string())
            .collect();
        assert_eq!(texts, vec!["LIST", "INTEGER(7)", "INTEGER(8)"]);
        assert_eq!(tree.children().len(), 2);
    }

    #[test]
    fn test_empty_nested_group_adds_nothing() {
        let tree = value_tree(&structure(vec![list(vec![]), int("3")])).unwrap();
        assert_eq!(tree.value(), DataValue::group(TypeId::Struct));
        assert_eq!(tree.children(), vec![DataValue::new(TypeId::Integer, "3")]);
    }

    #[test]
    fn test_empty_list() {
        let tree = value_tree(&list(vec![])).unwrap();
        assert!(tree.is_leaf());
        assert_eq!(tree.value(), DataValue::group(TypeId::List));
    }

    #[test]
    fn test_char() {
        let tree = value_tree(&Value::Char {
            position: Position::default(),
            value: r"'\n'".into(),
        })
        .unwrap();
        assert_eq!(tree.value(), DataValue::new(TypeId::Char, "\n"));
    }

    #[test]
    fn test_malformed_char_aborts() {
        let value = list(vec![
            int("1"),
            Value::Char {
                position: Position::new("data.ddat", 12, 1, 13),
                value: "'ab'".into(),
            },
        ]);
        let error = value_tree(&value).unwrap_err();
        assert!(matches!(error, IrError::LiteralFormat(_)));
        assert_eq!(error.position().map(|p| p.column), Some(13));
    }
}
