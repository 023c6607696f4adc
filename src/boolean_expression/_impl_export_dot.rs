use super::BooleanExpression;
use super::BooleanExpression::*;
use std::io::Write;

/// `.dot` export procedure for `BooleanExpression`s.
impl BooleanExpression {
    /// Output this expression tree as a `.dot` graph into the given `output` writer.
    ///
    /// Nodes are numbered `n0`, `n1`, ... in the pre-order of the tree. Every node is
    /// declared before the nodes of its sub-trees, and the edges of a node follow
    /// after all of its sub-trees.
    pub fn write_as_dot(&self, output: &mut dyn Write) -> Result<(), std::io::Error> {
        writeln!(output, "digraph LogicTree {{")?;
        let mut next_id = 0;
        write_node(output, self, &mut next_id)?;
        write!(output, "}}")?;
        Ok(())
    }

    /// Convert this expression tree to a `.dot` string.
    pub fn to_dot_string(&self) -> String {
        let mut buffer: Vec<u8> = Vec::new();
        self.write_as_dot(&mut buffer)
            .expect("Cannot write expression to .dot string.");
        String::from_utf8(buffer).expect("Invalid UTF formatting in .dot string.")
    }
}

/// Convert the given expression tree to a `.dot` graph string.
///
/// See also: [BooleanExpression::write_as_dot](enum.BooleanExpression.html#method.write_as_dot)
pub fn to_graph(expression: &BooleanExpression) -> String {
    expression.to_dot_string()
}

/// **(internal)** The label of a single node in the `.dot` graph.
fn node_label(expression: &BooleanExpression) -> String {
    match expression {
        Const(true) => "True".to_string(),
        Const(false) => "False".to_string(),
        Variable(name) => name.clone(),
        Not(_) => "NOT".to_string(),
        And(_, _) => "AND".to_string(),
        Or(_, _) => "OR".to_string(),
        Xor(_, _) => "XOR".to_string(),
    }
}

/// **(internal)** Write the sub-tree rooted in `expression`, allocating node ids from `next_id`.
/// Returns the id of the `expression` node.
fn write_node(
    output: &mut dyn Write,
    expression: &BooleanExpression,
    next_id: &mut usize,
) -> Result<usize, std::io::Error> {
    let id = *next_id;
    *next_id += 1;
    writeln!(output, "n{} [label=\"{}\"];", id, node_label(expression))?;
    match expression {
        Const(_) | Variable(_) => {}
        Not(inner) => {
            let inner_id = write_node(output, inner, next_id)?;
            writeln!(output, "n{} -> n{};", id, inner_id)?;
        }
        And(l, r) | Or(l, r) | Xor(l, r) => {
            let left_id = write_node(output, l, next_id)?;
            let right_id = write_node(output, r, next_id)?;
            writeln!(output, "n{} -> n{};", id, left_id)?;
            writeln!(output, "n{} -> n{};", id, right_id)?;
        }
    }
    Ok(id)
}
