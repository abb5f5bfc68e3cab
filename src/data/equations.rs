//! Equation function mappings
//!
//! The host editor names equation functions with opaque codes such as
//! `\sumab` or `\rbracelr`. This table maps the recognised codes to the
//! LaTeX they wrap around their arguments.

use phf::phf_map;

/// How an equation function renders around its arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionHandler {
    /// `x^{..}`: no prefix, the separator opens the superscript group
    Superscript,
    /// `x_{..}`: no prefix, the separator opens the subscript group
    Subscript,
    /// `\sum_{..}^{..}`: the code minus its `ab` suffix, plus `_`
    BoundedOperator,
    /// Delimiters sized to their content
    Delimited {
        left: &'static str,
        right: &'static str,
    },
}

/// Mapping from equation function codes to handlers.
/// Codes not listed here are emitted verbatim as the prefix.
pub static EQUATION_FUNCTIONS: phf::Map<&'static str, FunctionHandler> = phf_map! {
    "\\superscript" => FunctionHandler::Superscript,
    "\\subscript" => FunctionHandler::Subscript,

    "\\sumab" => FunctionHandler::BoundedOperator,
    "\\prodab" => FunctionHandler::BoundedOperator,
    "\\intab" => FunctionHandler::BoundedOperator,

    "\\bracelr" => FunctionHandler::Delimited { left: "\\left\\{", right: "\\right\\}" },
    "\\sbracelr" => FunctionHandler::Delimited { left: "\\left[", right: "\\right]" },
    "\\rbracelr" => FunctionHandler::Delimited { left: "\\left(", right: "\\right)" },
};

/// Suffix stripped from bounded-operator codes (`\sumab` -> `\sum`).
pub const BOUNDED_OPERATOR_SUFFIX: &str = "ab";

/// Look up the handler of an equation function code.
pub fn function_handler(code: &str) -> Option<FunctionHandler> {
    EQUATION_FUNCTIONS.get(code).copied()
}

/// Separator emitted between two arguments of the function `code`.
///
/// Every separator inside a bounded operator opens a superscript group, even
/// when the operator has more than two arguments.
pub fn argument_separator(code: &str) -> &'static str {
    match function_handler(code) {
        Some(FunctionHandler::Superscript) => "}^{",
        Some(FunctionHandler::Subscript) => "}_{",
        Some(FunctionHandler::BoundedOperator) => "}^{",
        _ => "}{",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(function_handler("\\sumab"), Some(FunctionHandler::BoundedOperator));
        assert_eq!(function_handler("\\superscript"), Some(FunctionHandler::Superscript));
        assert!(matches!(
            function_handler("\\rbracelr"),
            Some(FunctionHandler::Delimited { left: "\\left(", .. })
        ));
        assert_eq!(function_handler("\\frac"), None);
    }

    #[test]
    fn test_separators() {
        assert_eq!(argument_separator("\\superscript"), "}^{");
        assert_eq!(argument_separator("\\subscript"), "}_{");
        assert_eq!(argument_separator("\\intab"), "}^{");
        assert_eq!(argument_separator("\\frac"), "}{");
        assert_eq!(argument_separator("\\bracelr"), "}{");
    }
}
