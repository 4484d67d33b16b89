//! Final-state rendering.
//!
//! Every expression is pushed through the simplifier here, and only here:
//! the interpreter hands over raw residual trees.
//!
//! The text format is fixed and consumed downstream:
//!
//! ```text
//! {
//! \t{
//! \t\t<var> = <expr>
//! \t\tpc = <c1> & <c2> | true
//! \t\tresult = <expr> | undefined
//! \t}
//! }
//! ```
//!
//! Memory entries appear in ascending key order, the path condition in
//! insertion order.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde::Serialize;

use crate::interpreter::State;
use crate::simplify::simplify;

/// Renders the state list into the output text format.
pub fn render_states(states: &[State]) -> String {
    let mut out = String::from("{\n");
    for state in states {
        out.push_str("\t{\n");
        for (name, expr) in &state.memory {
            let _ = writeln!(out, "\t\t{name} = {}", simplify(expr));
        }
        out.push_str("\t\tpc = ");
        if state.path_condition.is_empty() {
            out.push_str("true");
        } else {
            let conjuncts: Vec<String> = state
                .path_condition
                .iter()
                .map(|cond| simplify(cond).to_string())
                .collect();
            out.push_str(&conjuncts.join(" & "));
        }
        out.push('\n');
        match &state.result {
            Some(expr) => {
                let _ = writeln!(out, "\t\tresult = {}", simplify(expr));
            }
            None => out.push_str("\t\tresult = undefined\n"),
        }
        out.push_str("\t}\n");
    }
    out.push_str("}\n");
    out
}

/// One state rendered to strings, for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct StateReport {
    pub memory: BTreeMap<String, String>,
    pub path_condition: Vec<String>,
    pub result: Option<String>,
}

/// Simplifies and renders every state into a serializable report.
pub fn state_reports(states: &[State]) -> Vec<StateReport> {
    states
        .iter()
        .map(|state| StateReport {
            memory: state
                .memory
                .iter()
                .map(|(name, expr)| (name.clone(), simplify(expr).to_string()))
                .collect(),
            path_condition: state
                .path_condition
                .iter()
                .map(|cond| simplify(cond).to_string())
                .collect(),
            result: state.result.as_ref().map(|expr| simplify(expr).to_string()),
        })
        .collect()
}
