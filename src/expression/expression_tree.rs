//! # Expression Tree Module
//!
//! This module provides the core expression type of the RustedExpr kernel:
//! an immutable tree over numbers, single-character variables, the constant
//! e and a closed set of elementary functions (powers, logarithms, the six
//! trigonometric and the four principal inverse trigonometric functions).
//!
//! ## Purpose
//!
//! The expression tree allows users to:
//! - Build symbolic mathematical expressions from leaves and combinators
//! - Render expressions to canonical text with priority-aware brackets
//! - Compare trees structurally and use them as hash-map keys
//! - Normalize logarithms and powers through the factory constructors
//!
//! ## Main Structures and Methods
//!
//! ### `Expr` Enum
//! The core symbolic expression type supporting:
//! - **Leaves**: `Const(f64)`, `Var(char)`, the constant `E`
//! - **Combinators**: `Add`, `Sub`, `Mul`, `Div`, `Neg`, `Pow`
//! - **Functions**: `Log`, `Ln`, `sin`, `cos`, `tan`, `cot`, `sec`, `csc`,
//!   `arcsin`, `arccos`, `arctan`, `arccot`
//!
//! ### Key Methods
//! - `Symbols(symbols: &str)` - Create multiple variables from comma-separated string
//! - `determinate_log(base, arg)` - Logarithm factory collapsing base e to ln
//! - `determinate_pow(base, exp)` - Power factory collapsing literal exponents 1 and 0
//! - `priority()` - Bracket-placement rank consulted by the Display impl
//!
//! ## Interesting Code Features
//!
//! 1. **Recursive Expression Tree**: Uses Box<Expr> for nested expressions,
//!    enabling arbitrarily deep mathematical structures
//!
//! 2. **Operator Overloading**: Implements std::ops traits (Add, Sub, Mul,
//!    Div, Neg and the assign forms) for natural mathematical syntax:
//!    `x + y * z`
//!
//! 3. **Priority-Driven Rendering**: No global bracket table; every operator
//!    decides per child whether brackets are needed by comparing its own
//!    priority against the child's
//!
//! 4. **Construction-Time Normalization**: `determinate_log` guarantees that
//!    a logarithm built with the syntactic base e always comes out as an
//!    `Ln` node; trees built around the factory are never rewritten later
//!
//! 5. **Structural Identity**: equality and hashing look at variants and
//!    operands only, never at mathematical equivalence

#![allow(non_camel_case_types)]

use std::fmt;
use std::hash::{Hash, Hasher};

/// Core symbolic expression enum representing mathematical expressions as an
/// immutable tree.
///
/// Each variant carries its operands as `Box<Expr>`; leaves carry a payload
/// or nothing. Every operation over the tree (differentiation, evaluation,
/// rendering) is a pure read that constructs new nodes, so finished trees may
/// be shared freely between threads.
///
/// # Examples
/// ```rust, ignore
/// use RustedExpr::expression::expression_tree::Expr;
/// let x = Expr::Var('x');
/// let expr = Expr::Add(Box::new(x), Box::new(Expr::Const(2.0)));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// Numerical constant value
    Const(f64),
    /// Symbolic variable with a single-character name (e.g. 'x', 'y')
    Var(char),
    /// Euler's number
    E,
    /// Addition operation: left + right
    Add(Box<Expr>, Box<Expr>),
    /// Subtraction operation: left - right
    Sub(Box<Expr>, Box<Expr>),
    /// Multiplication operation: left * right
    Mul(Box<Expr>, Box<Expr>),
    /// Division operation: left / right
    Div(Box<Expr>, Box<Expr>),
    /// Unary negation: -value
    Neg(Box<Expr>),
    /// Power operation: base ^ exponent
    Pow(Box<Expr>, Box<Expr>),
    /// Logarithm with an explicit base: log(base)(argument)
    Log(Box<Expr>, Box<Expr>),
    /// Natural logarithm: ln(x), a logarithm whose base is pinned to e
    Ln(Box<Expr>),
    /// Sine function: sin(x)
    sin(Box<Expr>),
    /// Cosine function: cos(x)
    cos(Box<Expr>),
    /// Tangent function: tan(x)
    tan(Box<Expr>),
    /// Cotangent function: cot(x)
    cot(Box<Expr>),
    /// Secant function: sec(x)
    sec(Box<Expr>),
    /// Cosecant function: csc(x)
    csc(Box<Expr>),
    /// Arcsine function: arcsin(x)
    arcsin(Box<Expr>),
    /// Arccosine function: arccos(x)
    arccos(Box<Expr>),
    /// Arctangent function: arctan(x)
    arctan(Box<Expr>),
    /// Arccotangent function: arccot(x)
    arccot(Box<Expr>),
}

impl Expr {
    /// Rendering priority of this node, consulted only when deciding whether
    /// a sub-expression needs brackets in the printed form.
    ///
    /// The ladder runs from loosely binding sums up to leaves:
    /// Add/Sub 1, Mul/Div/Neg 2, Pow 3, Log/Ln 4, function nodes 5, leaves 6.
    pub fn priority(&self) -> i32 {
        match self {
            Expr::Add(_, _) | Expr::Sub(_, _) => 1,
            Expr::Mul(_, _) | Expr::Div(_, _) | Expr::Neg(_) => 2,
            Expr::Pow(_, _) => 3,
            Expr::Log(_, _) | Expr::Ln(_) => 4,
            Expr::sin(_)
            | Expr::cos(_)
            | Expr::tan(_)
            | Expr::cot(_)
            | Expr::sec(_)
            | Expr::csc(_)
            | Expr::arcsin(_)
            | Expr::arccos(_)
            | Expr::arctan(_)
            | Expr::arccot(_) => 5,
            Expr::Const(_) | Expr::Var(_) | Expr::E => 6,
        }
    }

    /// Renders a child, bracketing it when its priority loses against this
    /// node's. `wrap_equal` also brackets on a tie; the right operand of
    /// `-` and `/`, the base of `^` and the operand of unary minus need that
    /// to keep the printed form unambiguous.
    fn wrap_child(&self, child: &Expr, wrap_equal: bool) -> String {
        let needs_brackets = if wrap_equal {
            child.priority() <= self.priority()
        } else {
            child.priority() < self.priority()
        };
        if needs_brackets {
            format!("({})", child)
        } else {
            format!("{}", child)
        }
    }
}

/// Display implementation producing the single canonical text form.
///
/// Function nodes print as `name(argument)`; a logarithm prints as
/// `log(base)(argument)` and collapses to `0` whenever its argument renders
/// as the literal string `1`, as does `ln`. The argument text is built once
/// and reused for the collapse check and the output. Operators consult
/// `priority` per child instead of bracketing everything.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Const(val) => write!(f, "{}", val),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::E => write!(f, "e"),
            Expr::Add(lhs, rhs) => write!(
                f,
                "{} + {}",
                self.wrap_child(lhs, false),
                self.wrap_child(rhs, false)
            ),
            Expr::Sub(lhs, rhs) => write!(
                f,
                "{} - {}",
                self.wrap_child(lhs, false),
                self.wrap_child(rhs, true)
            ),
            Expr::Mul(lhs, rhs) => write!(
                f,
                "{} * {}",
                self.wrap_child(lhs, false),
                self.wrap_child(rhs, false)
            ),
            Expr::Div(lhs, rhs) => write!(
                f,
                "{} / {}",
                self.wrap_child(lhs, false),
                self.wrap_child(rhs, true)
            ),
            Expr::Neg(value) => write!(f, "-{}", self.wrap_child(value, true)),
            Expr::Pow(base, exp) => write!(
                f,
                "{}^{}",
                self.wrap_child(base, true),
                self.wrap_child(exp, false)
            ),
            Expr::Log(base, arg) => {
                let arg_text = arg.to_string();
                if arg_text == "1" {
                    write!(f, "0")
                } else {
                    write!(f, "log({})({})", base, arg_text)
                }
            }
            Expr::Ln(arg) => {
                let arg_text = arg.to_string();
                if arg_text == "1" {
                    write!(f, "0")
                } else {
                    write!(f, "ln({})", arg_text)
                }
            }
            Expr::sin(expr) => write!(f, "sin({})", expr),
            Expr::cos(expr) => write!(f, "cos({})", expr),
            Expr::tan(expr) => write!(f, "tan({})", expr),
            Expr::cot(expr) => write!(f, "cot({})", expr),
            Expr::sec(expr) => write!(f, "sec({})", expr),
            Expr::csc(expr) => write!(f, "csc({})", expr),
            Expr::arcsin(expr) => write!(f, "arcsin({})", expr),
            Expr::arccos(expr) => write!(f, "arccos({})", expr),
            Expr::arctan(expr) => write!(f, "arctan({})", expr),
            Expr::arccot(expr) => write!(f, "arccot({})", expr),
        }
    }
}

impl std::ops::Add for Expr {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Expr::Add(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Sub for Expr {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Expr::Sub(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Mul for Expr {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Expr::Mul(self.boxed(), rhs.boxed())
    }
}

impl std::ops::Div for Expr {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        Expr::Div(self.boxed(), rhs.boxed())
    }
}

impl std::ops::AddAssign for Expr {
    fn add_assign(&mut self, rhs: Self) {
        *self = Expr::Add(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::SubAssign for Expr {
    fn sub_assign(&mut self, rhs: Self) {
        *self = Expr::Sub(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::MulAssign for Expr {
    fn mul_assign(&mut self, rhs: Self) {
        *self = Expr::Mul(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::DivAssign for Expr {
    fn div_assign(&mut self, rhs: Self) {
        *self = Expr::Div(Box::new(self.clone()), Box::new(rhs));
    }
}

impl std::ops::Neg for Expr {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Expr::Neg(Box::new(self))
    }
}

impl Expr {
    /// BASIC FEATURES

    /// Creates multiple symbolic variables from a comma-separated string.
    ///
    /// Parses a string containing single-character variable names separated
    /// by commas and returns a vector of Expr::Var instances. Whitespace is
    /// automatically trimmed; a multi-character name is caller misuse and
    /// fails fast.
    ///
    /// # Arguments
    /// * `symbols` - Comma-separated string of variable names (e.g., "x, y, z")
    ///
    /// # Returns
    /// Vector of Expr::Var instances for each variable name
    ///
    /// # Examples
    /// ```rust, ignore
    /// let vars = Expr::Symbols("x, y, z");
    /// assert_eq!(vars.len(), 3);
    /// ```
    pub fn Symbols(symbols: &str) -> Vec<Expr> {
        let symbols = symbols.to_string();
        let vec_trimmed: Vec<String> = symbols.split(',').map(|s| s.trim().to_string()).collect();
        let vector_of_symbolic_vars: Vec<Expr> = vec_trimmed
            .iter()
            .filter(|s| !s.is_empty())
            .map(|s| {
                assert_eq!(
                    s.chars().count(),
                    1,
                    "variable names are single characters, got '{}'",
                    s
                );
                Expr::Var(s.chars().next().unwrap())
            })
            .collect();
        vector_of_symbolic_vars
    }

    /// Convenience method to wrap expression in Box for recursive structures.
    ///
    /// Essential for creating nested expressions since Expr variants use Box<Expr>.
    pub fn boxed(self) -> Box<Self> {
        Box::new(self)
    }

    /// Creates natural logarithm ln(self).
    ///
    /// # Returns
    /// New Expr::Ln containing this expression
    pub fn ln(mut self) -> Expr {
        self = Expr::Ln(self.boxed());
        self
    }

    /// Creates the logarithm of self in the given base, routed through
    /// `determinate_log` so a syntactic base of e comes out as ln.
    ///
    /// # Arguments
    /// * `base` - Base expression of the logarithm
    pub fn log(self, base: Expr) -> Expr {
        Expr::determinate_log(base, self)
    }

    /// Creates power expression self^rhs.
    ///
    /// # Arguments
    /// * `rhs` - Exponent expression
    ///
    /// # Returns
    /// New Expr::Pow with self as base and rhs as exponent
    pub fn pow(mut self, rhs: Expr) -> Expr {
        self = Expr::Pow(self.boxed(), rhs.boxed());
        self
    }

    /// Logarithm factory: a logarithm whose base is syntactically the
    /// constant e is always built as an `Ln` node, any other base keeps the
    /// two-operand `Log` form.
    ///
    /// Every internal call site that assembles a logarithm from two
    /// arbitrary subtrees goes through here. A `Log(E, x)` built directly
    /// from the variant stays a `Log` and is never rewritten afterwards.
    ///
    /// # Arguments
    /// * `left` - Base of the logarithm
    /// * `right` - Argument of the logarithm
    pub fn determinate_log(left: Expr, right: Expr) -> Expr {
        match left {
            Expr::E => Expr::Ln(right.boxed()),
            _ => Expr::Log(left.boxed(), right.boxed()),
        }
    }

    /// Power factory: collapses the literal exponents so `base^1` comes back
    /// as `base` and `base^0` as the constant 1; any other exponent builds a
    /// `Pow` node unchanged.
    ///
    /// # Arguments
    /// * `base` - Base of the power
    /// * `exponent` - Exponent of the power
    pub fn determinate_pow(base: Expr, exponent: Expr) -> Expr {
        match exponent {
            Expr::Const(val) if val == 1.0 => base,
            Expr::Const(val) if val == 0.0 => Expr::Const(1.0),
            _ => Expr::Pow(base.boxed(), exponent.boxed()),
        }
    }
}

// Structural equality: same variant and recursively equal operands. The
// derived PartialEq treats 0.0 and -0.0 as equal, so the hash below folds
// both to the same bit pattern. NaN payloads would break reflexivity, but no
// construction path in the kernel produces a NaN literal.
impl Eq for Expr {}

/// Variant-tagged structural hash: each node writes a tag byte distinct per
/// variant and then hashes its operands, so equal trees hash equal while
/// sibling variants sharing an operand stay apart.
impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Expr::Const(val) => {
                state.write_u8(0);
                let bits = if *val == 0.0 { 0u64 } else { val.to_bits() };
                state.write_u64(bits);
            }
            Expr::Var(name) => {
                state.write_u8(1);
                name.hash(state);
            }
            Expr::E => state.write_u8(2),
            Expr::Add(lhs, rhs) => {
                state.write_u8(3);
                lhs.hash(state);
                rhs.hash(state);
            }
            Expr::Sub(lhs, rhs) => {
                state.write_u8(4);
                lhs.hash(state);
                rhs.hash(state);
            }
            Expr::Mul(lhs, rhs) => {
                state.write_u8(5);
                lhs.hash(state);
                rhs.hash(state);
            }
            Expr::Div(lhs, rhs) => {
                state.write_u8(6);
                lhs.hash(state);
                rhs.hash(state);
            }
            Expr::Neg(value) => {
                state.write_u8(7);
                value.hash(state);
            }
            Expr::Pow(base, exp) => {
                state.write_u8(8);
                base.hash(state);
                exp.hash(state);
            }
            Expr::Log(base, arg) => {
                state.write_u8(9);
                base.hash(state);
                arg.hash(state);
            }
            Expr::Ln(arg) => {
                state.write_u8(10);
                arg.hash(state);
            }
            Expr::sin(expr) => {
                state.write_u8(11);
                expr.hash(state);
            }
            Expr::cos(expr) => {
                state.write_u8(12);
                expr.hash(state);
            }
            Expr::tan(expr) => {
                state.write_u8(13);
                expr.hash(state);
            }
            Expr::cot(expr) => {
                state.write_u8(14);
                expr.hash(state);
            }
            Expr::sec(expr) => {
                state.write_u8(15);
                expr.hash(state);
            }
            Expr::csc(expr) => {
                state.write_u8(16);
                expr.hash(state);
            }
            Expr::arcsin(expr) => {
                state.write_u8(17);
                expr.hash(state);
            }
            Expr::arccos(expr) => {
                state.write_u8(18);
                expr.hash(state);
            }
            Expr::arctan(expr) => {
                state.write_u8(19);
                expr.hash(state);
            }
            Expr::arccot(expr) => {
                state.write_u8(20);
                expr.hash(state);
            }
        }
    }
}

//___________________________________MACROS____________________________________

/// Macro to create symbolic variables from a comma-separated list
/// Usage: symbols!(x, y, z) -> creates variables x, y, z
#[macro_export]
macro_rules! symbols {
    ($($var:ident),+ $(,)?) => {
        {
            let var_names = stringify!($($var),+);
            let vars = Expr::Symbols(var_names);
            let mut iter = vars.into_iter();
            ($(
                {
                    let $var = iter.next().unwrap();
                    $var
                }
            ),+)
        }
    };
}
