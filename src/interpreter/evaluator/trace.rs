use crate::{interpreter::lexer::Token, operator::Operator};

/// What the evaluator did with one postfix token.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A number was parsed and pushed.
    PushOperand {
        /// The parsed value.
        value: f64,
    },
    /// Two values were popped, combined and the result pushed.
    ApplyOperator {
        /// The operator applied.
        operator: Operator,
        /// Left operand, popped second.
        left:     f64,
        /// Right operand, popped first.
        right:    f64,
        /// Value pushed back.
        result:   f64,
    },
}

/// One evaluator transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    /// 1-based position of the token in the postfix sequence.
    pub index:  usize,
    /// The token processed.
    pub token:  Token,
    /// What was done with it.
    pub action: Action,
    /// The value stack right after the step, bottom-to-top.
    pub stack:  Vec<f64>,
}

/// Ordered log of every step of one evaluation.
///
/// The log is complete: every stack state the evaluator passed through can
/// be rebuilt from the actions alone (see [`Trace::replay`]).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    #[must_use]
    pub const fn new() -> Self {
        Self { steps: Vec::new() }
    }

    pub(crate) fn record(&mut self, step: Step) {
        self.steps.push(step);
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of operand pushes.
    #[must_use]
    pub fn operand_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.action, Action::PushOperand { .. }))
            .count()
    }

    /// Number of operator applications.
    #[must_use]
    pub fn operator_count(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| matches!(s.action, Action::ApplyOperator { .. }))
            .count()
    }

    /// Rebuilds the stack after each step using only the recorded actions.
    ///
    /// Returns `None` if an action pops more values than the replayed stack
    /// holds, or if the values it pops differ from its recorded operands.
    /// Neither can happen for a trace produced by the evaluator.
    ///
    /// # Example
    /// ```
    /// use rpntrace::compile;
    ///
    /// let compiled = compile("(1 + 2) * 4").unwrap();
    /// let replayed = compiled.trace.replay().unwrap();
    /// let recorded: Vec<Vec<f64>> =
    ///     compiled.trace.steps().iter().map(|s| s.stack.clone()).collect();
    ///
    /// assert_eq!(replayed, recorded);
    /// ```
    #[must_use]
    pub fn replay(&self) -> Option<Vec<Vec<f64>>> {
        let mut stack = Vec::new();
        let mut states = Vec::with_capacity(self.steps.len());

        for step in &self.steps {
            match step.action {
                Action::PushOperand { value } => stack.push(value),
                Action::ApplyOperator { left,
                                        right,
                                        result,
                                        .. } => {
                    if stack.pop()? != right || stack.pop()? != left {
                        return None;
                    }
                    stack.push(result);
                },
            }
            states.push(stack.clone());
        }

        Some(states)
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a Step;
    type IntoIter = std::slice::Iter<'a, Step>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
