use deflemma_grammar::Assignment;

use crate::{value_tree, DataConfig, IrError};

/// Turn an assignment of a data file into a global constant.
///
/// `first.second = value` keeps both names, `name = value` is stored as the second name with an
/// empty first name.
pub fn data_config(assignment: &Assignment) -> Result<DataConfig, IrError> {
    let (first_name, second_name) = match &assignment.second_name {
        Some(second_name) => (assignment.first_name.clone(), second_name.clone()),
        None => (String::new(), assignment.first_name.clone()),
    };
    if second_name.is_empty() {
        return Err(IrError::malformed(
            "assignment",
            &assignment.position,
            "the assignment has no name",
        ));
    }
    let values = value_tree(&assignment.value)?;
    debug!("Data config {}.{}", first_name, second_name);
    Ok(DataConfig {
        first_name,
        second_name,
        values,
    })
}
