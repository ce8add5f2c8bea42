use crate::prelude::{Mask, NodeError, NodeResult};

/// Runtime value passed positionally across the node boundary.
#[derive(Debug, Clone)]
pub enum NodeValue {
    Float(f32),
    Mask(Mask),
}

impl NodeValue {
    pub fn as_float(&self) -> NodeResult<f32> {
        match self {
            NodeValue::Float(value) => Ok(*value),
            NodeValue::Mask(_) => Err(NodeError::TypeMismatch(
                "expected a float, found a mask".into(),
            )),
        }
    }

    pub fn as_mask(&self) -> NodeResult<&Mask> {
        match self {
            NodeValue::Mask(mask) => Ok(mask),
            NodeValue::Float(_) => Err(NodeError::TypeMismatch(
                "expected a mask, found a float".into(),
            )),
        }
    }

    pub fn into_mask(self) -> NodeResult<Mask> {
        match self {
            NodeValue::Mask(mask) => Ok(mask),
            NodeValue::Float(_) => Err(NodeError::TypeMismatch(
                "expected a mask, found a float".into(),
            )),
        }
    }
}

/// Rejects calls whose positional input count does not match the declaration.
pub fn check_arity(node: &str, inputs: &[NodeValue], expected: usize) -> NodeResult<()> {
    if inputs.len() != expected {
        return Err(NodeError::InvalidInput(format!(
            "{} takes {} inputs, got {}",
            node,
            expected,
            inputs.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array2;

    #[test]
    fn accessors_reject_wrong_kind() {
        let float = NodeValue::Float(0.5);
        let mask = NodeValue::Mask(Array2::zeros((2, 2)));

        assert_eq!(float.as_float().unwrap(), 0.5);
        assert!(float.as_mask().is_err());
        assert!(mask.as_float().is_err());
        assert_eq!(mask.into_mask().unwrap().dim(), (2, 2));
    }

    #[test]
    fn arity_check_names_the_node() {
        let err = check_arity("ExcludeFromMask", &[NodeValue::Float(0.0)], 2).unwrap_err();
        assert!(err.to_string().contains("ExcludeFromMask"));
    }
}
