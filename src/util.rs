/// Numeric parsing and formatting helpers.
///
/// Number tokens carry their raw source text; this module turns that text
/// into a finite `f64` or reports why it cannot, and formats values back for
/// display.
pub mod num;
/// A growable LIFO container.
///
/// Both the operator stack of the converter and the value stack of the
/// evaluator are instances of [`stack::Stack`].
pub mod stack;
