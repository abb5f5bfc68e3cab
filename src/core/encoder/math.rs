//! Equation conversion
//!
//! Handles equations, symbols, functions and argument separators. Function
//! and separator markup is looked up in [`crate::data::equations`].

use super::context::{EncodeState, NodeCx};
use super::markup::encode_children;
use crate::data::equations::{
    argument_separator, function_handler, FunctionHandler, BOUNDED_OPERATOR_SUFFIX,
};
use crate::model::{Equation, EquationFunction, EquationSymbol, Node};
use crate::utils::error::ConversionResult;

/// Encode an EQUATION node. An equation with no siblings occupies its own
/// paragraph and is set in display mode.
pub fn encode_equation<'a>(
    equation: &'a Equation,
    node: &'a Node,
    cx: NodeCx<'a>,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let was_in_math = state.enter_math();
    let body = encode_children(&equation.children, Some(node), state);
    state.restore_math(was_in_math);
    let body = body?;

    let delimiter = if cx.is_alone() { "$$" } else { "$" };
    Ok(format!("{}{}{}", delimiter, body, delimiter))
}

/// Encode an EQUATION_SYMBOL node. The empty group stops the symbol from
/// swallowing the following letters.
pub fn encode_symbol(symbol: &EquationSymbol) -> String {
    format!("{}{{}}", symbol.code)
}

/// Encode an EQUATION_FUNCTION node as `prefix{args}suffix`.
pub fn encode_function<'a>(
    function: &'a EquationFunction,
    node: &'a Node,
    state: &mut EncodeState<'a>,
) -> ConversionResult<String> {
    let code = function.code.as_str();
    let (prefix, suffix) = match function_handler(code) {
        Some(FunctionHandler::Superscript) | Some(FunctionHandler::Subscript) => {
            (String::new(), "")
        }
        Some(FunctionHandler::BoundedOperator) => {
            let operator = code.strip_suffix(BOUNDED_OPERATOR_SUFFIX).unwrap_or(code);
            (format!("{}_", operator), "")
        }
        Some(FunctionHandler::Delimited { left, right }) => (left.to_string(), right),
        None => (code.to_string(), ""),
    };

    let args = encode_children(&function.children, Some(node), state)?;
    Ok(format!("{}{{{}}}{}", prefix, args, suffix))
}

/// Encode an EQUATION_FUNCTION_ARGUMENT_SEPARATOR from its parent's code.
pub fn encode_separator(cx: NodeCx<'_>) -> &'static str {
    match cx.parent_function_code() {
        Some(code) => argument_separator(code),
        None => "}{",
    }
}
