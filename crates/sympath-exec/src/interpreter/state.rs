//! Symbolic states and the executor that forks them.

use std::collections::BTreeMap;
use std::rc::Rc;

use smallvec::SmallVec;

use sympath_core::{Expr, Function, Stmt};

use super::eval::eval_expr;

/// One control-flow path's symbolic state.
///
/// States are forked by value at every branch; the only sharing between
/// siblings is through immutable `Rc<Expr>` subtrees, so a fork is a map
/// clone plus reference-count bumps.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Variable name to current residual expression. Every key is a
    /// function parameter or the target of an assignment executed on this
    /// path; parameters start bound to themselves as free variables.
    pub memory: BTreeMap<String, Rc<Expr>>,
    /// Branch conditions in the order they were taken, read as a
    /// conjunction. Duplicates are kept.
    pub path_condition: SmallVec<[Rc<Expr>; 4]>,
    /// Return value, once some `return` has been evaluated on this path.
    pub result: Option<Rc<Expr>>,
}

impl State {
    /// The entry state of a function: each parameter maps to itself as a
    /// free variable, the path condition is empty, no result.
    pub fn initial(func: &Function) -> State {
        State {
            memory: func
                .params
                .iter()
                .map(|p| (p.name.clone(), Expr::var(p.name.clone())))
                .collect(),
            path_condition: SmallVec::new(),
            result: None,
        }
    }

    /// A copy of this state with `cond` appended to the path condition.
    fn assuming(&self, cond: Rc<Expr>) -> State {
        let mut forked = self.clone();
        forked.path_condition.push(cond);
        forked
    }
}

/// Interpreter behaviour switches.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExecConfig {
    /// When `false` (the default), a `return` statement records its value
    /// but the path keeps executing, and the function's trailing return
    /// expression overwrites the result of every final state. When `true`,
    /// a path stops at its first `return` and keeps that result.
    pub stop_after_return: bool,
}

/// Symbolic executor for a single function.
pub struct Executor<'f> {
    func: &'f Function,
    config: ExecConfig,
}

impl<'f> Executor<'f> {
    pub fn new(func: &'f Function, config: ExecConfig) -> Self {
        Executor { func, config }
    }

    /// Executes the function body, returning one final state per path in
    /// depth-first order (then-branch before else-branch at each `if`).
    pub fn run(&self) -> Vec<State> {
        let mut states = self.execute_block(&self.func.body, State::initial(self.func));
        for state in &mut states {
            if self.config.stop_after_return && state.result.is_some() {
                continue;
            }
            let result = eval_expr(&self.func.ret_expr, state);
            state.result = Some(result);
        }
        states
    }

    fn execute_block(&self, stmts: &[Stmt], initial: State) -> Vec<State> {
        let mut states = vec![initial];
        for stmt in stmts {
            let mut next = Vec::with_capacity(states.len());
            for state in states {
                if self.config.stop_after_return && state.result.is_some() {
                    next.push(state);
                } else {
                    next.extend(self.execute_statement(stmt, state));
                }
            }
            states = next;
        }
        states
    }

    fn execute_statement(&self, stmt: &Stmt, state: State) -> Vec<State> {
        match stmt {
            Stmt::Assign { target, value } => {
                let value = eval_expr(value, &state);
                let mut state = state;
                state.memory.insert(target.clone(), value);
                vec![state]
            }
            Stmt::If {
                cond,
                then_block,
                else_block,
            } => {
                // The condition is evaluated once in the pre-branch state
                // and shared by both arms; the else arm gets a structural
                // negation that the simplifier collapses at output time.
                let cond = eval_expr(cond, &state);
                let mut states =
                    self.execute_block(then_block, state.assuming(Rc::clone(&cond)));
                states.extend(self.execute_block(else_block, state.assuming(Expr::not(cond))));
                states
            }
            Stmt::Return { value } => {
                let value = eval_expr(value, &state);
                let mut state = state;
                state.result = Some(value);
                vec![state]
            }
        }
    }
}

/// Runs a function under the default configuration.
pub fn symbolic_execute(func: &Function) -> Vec<State> {
    Executor::new(func, ExecConfig::default()).run()
}
