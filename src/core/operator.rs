//! Operator and function tags for the keypad.
//!
//! Each tag is a closed enum with its own evaluation function, so adding a
//! key means adding a variant and the compiler points at every match that
//! needs to learn about it.

use serde::{Deserialize, Serialize};

crate::token_enum! {
    /// Binary operator awaiting its second operand.
    pub enum BinaryOperator {
        Add => "add",
        Subtract => "subtract",
        Multiply => "multiply",
        Divide => "divide",
        Power => "pow",
    }
}

impl BinaryOperator {
    /// Apply the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields `±Infinity` or `NaN` rather than an error.
    pub fn apply(&self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Subtract => lhs - rhs,
            Self::Multiply => lhs * rhs,
            Self::Divide => lhs / rhs,
            Self::Power => lhs.powf(rhs),
        }
    }

    /// Symbol used in history records.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "−",
            Self::Multiply => "×",
            Self::Divide => "÷",
            Self::Power => "^",
        }
    }
}

crate::token_enum! {
    /// Single-operand scientific function.
    pub enum UnaryFunction {
        Sin => "sin",
        Cos => "cos",
        Tan => "tan",
        Log10 => "log",
        Ln => "ln",
        Sqrt => "sqrt",
        Factorial => "fact",
    }
}

/// Unit the trigonometric functions read their argument in.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    fn to_radians(self, angle: f64) -> f64 {
        match self {
            Self::Degrees => angle * std::f64::consts::PI / 180.0,
            Self::Radians => angle,
        }
    }
}

impl UnaryFunction {
    /// Apply the function to `n`.
    ///
    /// Out-of-domain input yields `NaN` or `-Infinity`; nothing panics.
    pub fn apply(&self, n: f64, unit: AngleUnit) -> f64 {
        match self {
            Self::Sin => unit.to_radians(n).sin(),
            Self::Cos => unit.to_radians(n).cos(),
            Self::Tan => unit.to_radians(n).tan(),
            Self::Log10 => n.log10(),
            Self::Ln => n.ln(),
            Self::Sqrt => n.sqrt(),
            Self::Factorial => factorial(n),
        }
    }
}

/// Factorial as a running float product.
///
/// Negative input gives `NaN`; `0` and `1` give `1`. Otherwise the product
/// `2 * 3 * ... * i` is taken for every integer `i <= n`, so `2.5` gives `2`
/// and `NaN` gives `1`.
pub fn factorial(n: f64) -> f64 {
    if n < 0.0 {
        return f64::NAN;
    }
    if n == 0.0 || n == 1.0 {
        return 1.0;
    }
    let mut result = 1.0_f64;
    let mut i = 2.0_f64;
    while i <= n {
        result *= i;
        // Infinity times any further factor stays Infinity.
        if result.is_infinite() {
            break;
        }
        i += 1.0;
    }
    result
}

/// Key on the scientific pad.
///
/// `pow` sits on the scientific pad but is a binary operator, so it is kept
/// apart from the unary functions.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum ScientificKey {
    Unary(UnaryFunction),
    Power,
}

impl ScientificKey {
    pub fn token(&self) -> &'static str {
        match self {
            Self::Unary(func) => func.token(),
            Self::Power => BinaryOperator::Power.token(),
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        if token == BinaryOperator::Power.token() {
            return Some(Self::Power);
        }
        UnaryFunction::from_token(token).map(Self::Unary)
    }
}

impl From<UnaryFunction> for ScientificKey {
    fn from(func: UnaryFunction) -> Self {
        Self::Unary(func)
    }
}
