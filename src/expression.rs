#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
/// a module for building immutable symbolic expression trees: numbers,
/// single-character variables, the constant e, arithmetic combinators,
/// powers, logarithms and the trigonometric family. Construction goes
/// through variants, operator overloading or the symbols! macro; the
/// determinate_log and determinate_pow factories normalize logarithms with
/// base e and powers with literal exponents 1 and 0 at build time.
/// # Examples
/// ```
/// use RustedExpr::expression::expression_tree::Expr;
/// use RustedExpr::symbols;
/// let (x, y) = symbols!(x, y);
/// let f = x.clone() * y + Expr::sin(x.boxed());
/// assert_eq!(f.to_string(), "x * y + sin(x)");
/// let natural = Expr::determinate_log(Expr::E, Expr::Var('x'));
/// assert_eq!(natural.to_string(), "ln(x)");
/// ```
pub mod expression_tree;

/// differentiation, evaluation under variable bindings, substitution,
/// closure compilation and the finite-difference check of a symbolic
/// derivative over an interval
/// # Examples
/// ```
/// use RustedExpr::expression::expression_tree::Expr;
/// use std::collections::HashMap;
/// let x = Expr::Var('x');
/// let f = x.pow(Expr::Const(2.0));
/// let df_dx = f.diff('x');
/// let mut bindings = HashMap::new();
/// bindings.insert('x', 3.0);
/// assert_eq!(df_dx.eval_expression(&bindings), 6.0);
/// let (mismatch, ok) = f.compare_num1D('x', 0.0, 2.0, 100, 1e-6);
/// assert!(ok, "mismatch norm {}", mismatch);
/// ```
pub mod expression_derivatives;


/// numeric helpers: uniform grids, central finite differences and the
/// mismatch norm used by the derivative validation
/// # Examples
/// ```
/// use RustedExpr::expression::utils::linspace;
/// let grid = linspace(0.0, 1.0, 5);
/// assert_eq!(grid, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
/// ```
pub mod utils;
