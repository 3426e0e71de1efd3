//! # Expression Derivatives Module
//!
//! ## Purpose
//!
//! Analytical differentiation, numerical evaluation and closure compilation
//! for the expression tree, plus a finite-difference check that validates a
//! symbolic derivative against the numerical one over an interval.
//!
//! ## Main Methods
//!
//! - `diff(var)` - Analytical derivative with respect to one variable; every
//!   rule multiplies by the derivative of its operand, so composed arguments
//!   come out chain-ruled
//! - `eval_expression(bindings)` - Recursive numerical evaluation under a
//!   map of variable bindings
//! - `set_variable`, `set_variable_from_map` - Substitution of constants for
//!   variables, rebuilding the tree
//! - `contains_variable`, `all_arguments_are_variables` - Variable discovery
//! - `lambdify1D` - Compiles a single-variable tree into a `Fn(f64) -> f64`
//!   closure
//! - `compare_num1D` - Norm of the difference between the analytical and the
//!   numerical derivative over a uniform grid
//! - `diff_multi` - All partial derivatives at once, computed in parallel
//!
//! ## Interesting Code Features
//!
//! - The derivative is itself an expression tree, so it can be rendered,
//!   evaluated, differentiated again or compiled to a closure
//! - A power with the variable in its exponent is differentiated through
//!   logarithms, while a constant exponent keeps the plain power rule
//! - `lambdify1D` builds nested closures bottom-up, one per node, avoiding
//!   any re-walk of the tree per evaluation point

use crate::expression::expression_tree::Expr;
use crate::expression::utils::{linspace, norm, numerical_derivative};
use log::debug;
use rayon::prelude::*;
use std::collections::HashMap;
use std::f64::consts::PI;

impl Expr {
    /// DIFFERENTIATION

    /// Computes the analytical derivative of the expression with respect to
    /// one variable.
    ///
    /// Derivatives of constants and of e are zero; the matched variable
    /// differentiates to 1, any other variable to 0. Every function rule
    /// multiplies by the derivative of its operand. No simplification is
    /// performed on the result.
    ///
    /// # Arguments
    /// * `var` - Variable to differentiate with respect to
    ///
    /// # Returns
    /// New expression tree representing the derivative
    pub fn diff(&self, var: char) -> Expr {
        match self {
            Expr::Const(_) => Expr::Const(0.0),
            Expr::E => Expr::Const(0.0),
            Expr::Var(name) => {
                if *name == var {
                    Expr::Const(1.0)
                } else {
                    Expr::Const(0.0)
                }
            }
            Expr::Add(lhs, rhs) => Expr::Add(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Sub(lhs, rhs) => Expr::Sub(Box::new(lhs.diff(var)), Box::new(rhs.diff(var))),
            Expr::Mul(lhs, rhs) => Expr::Add(
                Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                Box::new(Expr::Mul(lhs.clone(), Box::new(rhs.diff(var)))),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(Expr::Sub(
                    Box::new(Expr::Mul(Box::new(lhs.diff(var)), rhs.clone())),
                    Box::new(Expr::Mul(Box::new(rhs.diff(var)), lhs.clone())),
                )),
                Box::new(Expr::Mul(rhs.clone(), rhs.clone())),
            ),
            Expr::Neg(value) => Expr::Neg(Box::new(value.diff(var))),
            Expr::Pow(base, exp) => {
                if exp.contains_variable(var) {
                    // exponent depends on var: d(b^e) = b^e * d(e * ln b)
                    Expr::Mul(
                        Box::new(Expr::Pow(base.clone(), exp.clone())),
                        Box::new(
                            Expr::Mul(exp.clone(), Box::new(Expr::Ln(base.clone()))).diff(var),
                        ),
                    )
                } else {
                    // constant exponent: e * b^(e - 1) * b'
                    Expr::Mul(
                        Box::new(Expr::Mul(
                            exp.clone(),
                            Box::new(Expr::determinate_pow(
                                *base.clone(),
                                Expr::Sub(exp.clone(), Box::new(Expr::Const(1.0))),
                            )),
                        )),
                        Box::new(base.diff(var)),
                    )
                }
            }
            Expr::Log(base, arg) => {
                // change of base first: log(b)(x) = ln(x) / ln(b)
                Expr::Div(
                    Box::new(Expr::Ln(arg.clone())),
                    Box::new(Expr::Ln(base.clone())),
                )
                .diff(var)
            }
            Expr::Ln(value) => Expr::Mul(
                Box::new(Expr::Div(Box::new(Expr::Const(1.0)), value.clone())),
                Box::new(value.diff(var)),
            ),
            Expr::sin(value) => Expr::Mul(
                Box::new(Expr::cos(value.clone())),
                Box::new(value.diff(var)),
            ),
            Expr::cos(value) => Expr::Mul(
                Box::new(Expr::Neg(Box::new(Expr::sin(value.clone())))),
                Box::new(value.diff(var)),
            ),
            Expr::tan(value) => Expr::Mul(
                Box::new(Expr::determinate_pow(
                    Expr::sec(value.clone()),
                    Expr::Const(2.0),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::cot(value) => Expr::Mul(
                Box::new(Expr::Neg(Box::new(Expr::determinate_pow(
                    Expr::csc(value.clone()),
                    Expr::Const(2.0),
                )))),
                Box::new(value.diff(var)),
            ),
            Expr::sec(value) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::sec(value.clone())),
                    Box::new(Expr::tan(value.clone())),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::csc(value) => Expr::Mul(
                Box::new(Expr::Mul(
                    Box::new(Expr::Neg(Box::new(Expr::csc(value.clone())))),
                    Box::new(Expr::cot(value.clone())),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::arcsin(value) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::determinate_pow(
                        Expr::Sub(
                            Box::new(Expr::Const(1.0)),
                            Box::new(Expr::determinate_pow(*value.clone(), Expr::Const(2.0))),
                        ),
                        Expr::Const(0.5),
                    )),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::arccos(value) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Neg(Box::new(Expr::Const(1.0)))),
                    Box::new(Expr::determinate_pow(
                        Expr::Sub(
                            Box::new(Expr::Const(1.0)),
                            Box::new(Expr::determinate_pow(*value.clone(), Expr::Const(2.0))),
                        ),
                        Expr::Const(0.5),
                    )),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::arctan(value) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Const(1.0)),
                    Box::new(Expr::Add(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::determinate_pow(*value.clone(), Expr::Const(2.0))),
                    )),
                )),
                Box::new(value.diff(var)),
            ),
            Expr::arccot(value) => Expr::Mul(
                Box::new(Expr::Div(
                    Box::new(Expr::Neg(Box::new(Expr::Const(1.0)))),
                    Box::new(Expr::Add(
                        Box::new(Expr::Const(1.0)),
                        Box::new(Expr::determinate_pow(*value.clone(), Expr::Const(2.0))),
                    )),
                )),
                Box::new(value.diff(var)),
            ),
        } // end of diff
    }

    /// DIRECT EXPRESSION EVALUATION

    /// Evaluates the expression tree to a number under the given variable
    /// bindings.
    ///
    /// Domain violations (an arcsine outside [-1, 1], the poles of tan, cot,
    /// sec, csc, a zero denominator) follow IEEE float semantics and come
    /// back as NaN or an infinity. An unbound variable is caller misuse and
    /// panics.
    ///
    /// # Arguments
    /// * `bindings` - Map from variable name to its numerical value
    pub fn eval_expression(&self, bindings: &HashMap<char, f64>) -> f64 {
        match self {
            Expr::Const(val) => *val,
            Expr::Var(name) => match bindings.get(name) {
                Some(value) => *value,
                None => panic!("no value bound for variable '{}'", name),
            },
            Expr::E => std::f64::consts::E,
            Expr::Add(lhs, rhs) => {
                let lhs_val = lhs.eval_expression(bindings);
                let rhs_val = rhs.eval_expression(bindings);
                lhs_val + rhs_val
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_val = lhs.eval_expression(bindings);
                let rhs_val = rhs.eval_expression(bindings);
                lhs_val - rhs_val
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_val = lhs.eval_expression(bindings);
                let rhs_val = rhs.eval_expression(bindings);
                lhs_val * rhs_val
            }
            Expr::Div(lhs, rhs) => {
                let lhs_val = lhs.eval_expression(bindings);
                let rhs_val = rhs.eval_expression(bindings);
                lhs_val / rhs_val
            }
            Expr::Neg(value) => -value.eval_expression(bindings),
            Expr::Pow(base, exp) => {
                let base_val = base.eval_expression(bindings);
                let exp_val = exp.eval_expression(bindings);
                base_val.powf(exp_val)
            }
            Expr::Log(base, arg) => {
                let base_val = base.eval_expression(bindings);
                let arg_val = arg.eval_expression(bindings);
                arg_val.log(base_val)
            }
            Expr::Ln(value) => value.eval_expression(bindings).ln(),
            Expr::sin(expr) => expr.eval_expression(bindings).sin(),
            Expr::cos(expr) => expr.eval_expression(bindings).cos(),
            Expr::tan(expr) => {
                let value = expr.eval_expression(bindings);
                value.sin() / value.cos()
            }
            Expr::cot(expr) => {
                let value = expr.eval_expression(bindings);
                value.cos() / value.sin()
            }
            Expr::sec(expr) => {
                let value = expr.eval_expression(bindings);
                1.0 / value.cos()
            }
            Expr::csc(expr) => {
                let value = expr.eval_expression(bindings);
                1.0 / value.sin()
            }
            Expr::arcsin(expr) => expr.eval_expression(bindings).asin(),
            Expr::arccos(expr) => expr.eval_expression(bindings).acos(),
            Expr::arctan(expr) => expr.eval_expression(bindings).atan(),
            Expr::arccot(expr) => PI / 2.0 - expr.eval_expression(bindings).atan(),
        }
    }

    /// SUBSTITUTION

    /// Substitutes a numerical constant for every occurrence of a variable,
    /// rebuilding the tree. Other variables stay untouched.
    ///
    /// # Arguments
    /// * `var` - Variable name to replace
    /// * `value` - Value to substitute
    pub fn set_variable(&self, var: char, value: f64) -> Expr {
        match self {
            Expr::Var(name) if *name == var => Expr::Const(value),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable(var, value)),
                Box::new(rhs.set_variable(var, value)),
            ),
            Expr::Neg(expr) => Expr::Neg(Box::new(expr.set_variable(var, value))),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable(var, value)),
                Box::new(exp.set_variable(var, value)),
            ),
            Expr::Log(base, arg) => Expr::Log(
                Box::new(base.set_variable(var, value)),
                Box::new(arg.set_variable(var, value)),
            ),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.set_variable(var, value))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.set_variable(var, value))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.set_variable(var, value))),
            Expr::tan(expr) => Expr::tan(Box::new(expr.set_variable(var, value))),
            Expr::cot(expr) => Expr::cot(Box::new(expr.set_variable(var, value))),
            Expr::sec(expr) => Expr::sec(Box::new(expr.set_variable(var, value))),
            Expr::csc(expr) => Expr::csc(Box::new(expr.set_variable(var, value))),
            Expr::arcsin(expr) => Expr::arcsin(Box::new(expr.set_variable(var, value))),
            Expr::arccos(expr) => Expr::arccos(Box::new(expr.set_variable(var, value))),
            Expr::arctan(expr) => Expr::arctan(Box::new(expr.set_variable(var, value))),
            Expr::arccot(expr) => Expr::arccot(Box::new(expr.set_variable(var, value))),
            _ => self.clone(),
        }
    }

    /// Substitutes constants for all variables found in the map at once.
    ///
    /// # Arguments
    /// * `var_map` - Map from variable name to substituted value
    pub fn set_variable_from_map(&self, var_map: &HashMap<char, f64>) -> Expr {
        match self {
            Expr::Var(name) if var_map.contains_key(name) => Expr::Const(var_map[name]),
            Expr::Add(lhs, rhs) => Expr::Add(
                Box::new(lhs.set_variable_from_map(var_map)),
                Box::new(rhs.set_variable_from_map(var_map)),
            ),
            Expr::Sub(lhs, rhs) => Expr::Sub(
                Box::new(lhs.set_variable_from_map(var_map)),
                Box::new(rhs.set_variable_from_map(var_map)),
            ),
            Expr::Mul(lhs, rhs) => Expr::Mul(
                Box::new(lhs.set_variable_from_map(var_map)),
                Box::new(rhs.set_variable_from_map(var_map)),
            ),
            Expr::Div(lhs, rhs) => Expr::Div(
                Box::new(lhs.set_variable_from_map(var_map)),
                Box::new(rhs.set_variable_from_map(var_map)),
            ),
            Expr::Neg(expr) => Expr::Neg(Box::new(expr.set_variable_from_map(var_map))),
            Expr::Pow(base, exp) => Expr::Pow(
                Box::new(base.set_variable_from_map(var_map)),
                Box::new(exp.set_variable_from_map(var_map)),
            ),
            Expr::Log(base, arg) => Expr::Log(
                Box::new(base.set_variable_from_map(var_map)),
                Box::new(arg.set_variable_from_map(var_map)),
            ),
            Expr::Ln(expr) => Expr::Ln(Box::new(expr.set_variable_from_map(var_map))),
            Expr::sin(expr) => Expr::sin(Box::new(expr.set_variable_from_map(var_map))),
            Expr::cos(expr) => Expr::cos(Box::new(expr.set_variable_from_map(var_map))),
            Expr::tan(expr) => Expr::tan(Box::new(expr.set_variable_from_map(var_map))),
            Expr::cot(expr) => Expr::cot(Box::new(expr.set_variable_from_map(var_map))),
            Expr::sec(expr) => Expr::sec(Box::new(expr.set_variable_from_map(var_map))),
            Expr::csc(expr) => Expr::csc(Box::new(expr.set_variable_from_map(var_map))),
            Expr::arcsin(expr) => Expr::arcsin(Box::new(expr.set_variable_from_map(var_map))),
            Expr::arccos(expr) => Expr::arccos(Box::new(expr.set_variable_from_map(var_map))),
            Expr::arctan(expr) => Expr::arctan(Box::new(expr.set_variable_from_map(var_map))),
            Expr::arccot(expr) => Expr::arccot(Box::new(expr.set_variable_from_map(var_map))),
            _ => self.clone(),
        }
    }

    /// VARIABLE DISCOVERY

    /// Returns true when the given variable occurs anywhere in the tree,
    /// exponents and logarithm bases included.
    pub fn contains_variable(&self, var: char) -> bool {
        match self {
            Expr::Var(name) => *name == var,
            Expr::Const(_) | Expr::E => false,
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::Log(lhs, rhs) => lhs.contains_variable(var) || rhs.contains_variable(var),
            Expr::Neg(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tan(expr)
            | Expr::cot(expr)
            | Expr::sec(expr)
            | Expr::csc(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctan(expr)
            | Expr::arccot(expr) => expr.contains_variable(var),
        }
    }

    /// Collects every variable name occurring in the tree, sorted and
    /// deduplicated.
    pub fn all_arguments_are_variables(&self) -> Vec<char> {
        let mut vars = Vec::new();
        match self {
            Expr::Var(name) => vars.push(*name),
            Expr::Const(_) | Expr::E => {}
            Expr::Add(lhs, rhs)
            | Expr::Sub(lhs, rhs)
            | Expr::Mul(lhs, rhs)
            | Expr::Div(lhs, rhs)
            | Expr::Pow(lhs, rhs)
            | Expr::Log(lhs, rhs) => {
                vars.extend(lhs.all_arguments_are_variables());
                vars.extend(rhs.all_arguments_are_variables());
            }
            Expr::Neg(expr)
            | Expr::Ln(expr)
            | Expr::sin(expr)
            | Expr::cos(expr)
            | Expr::tan(expr)
            | Expr::cot(expr)
            | Expr::sec(expr)
            | Expr::csc(expr)
            | Expr::arcsin(expr)
            | Expr::arccos(expr)
            | Expr::arctan(expr)
            | Expr::arccot(expr) => {
                vars.extend(expr.all_arguments_are_variables());
            }
        }
        vars.sort();
        vars.dedup();
        vars
    }

    /// LAMBDIFICATION

    /// Converts an expression of at most one variable into an executable
    /// closure. A tree with two or more variables is caller misuse and
    /// panics.
    ///
    /// # Returns
    /// Boxed closure computing the expression at a given point
    ///
    /// # Examples
    /// ```rust, ignore
    /// let f = Expr::Var('x').pow(Expr::Const(2.0)).lambdify1D();
    /// assert_eq!(f(3.0), 9.0);
    /// ```
    pub fn lambdify1D(&self) -> Box<dyn Fn(f64) -> f64> {
        let vars = self.all_arguments_are_variables();
        if vars.len() > 1 {
            panic!(
                "lambdify1D can only be used with expressions containing at most one variable, found: {:?}",
                vars
            );
        }
        self.closure1D()
    }

    fn closure1D(&self) -> Box<dyn Fn(f64) -> f64> {
        match self {
            Expr::Const(val) => {
                let value = *val;
                Box::new(move |_| value)
            }
            Expr::Var(_) => Box::new(|x| x),
            Expr::E => Box::new(|_| std::f64::consts::E),
            Expr::Add(lhs, rhs) => {
                let lhs_fn = lhs.closure1D();
                let rhs_fn = rhs.closure1D();
                Box::new(move |x| lhs_fn(x) + rhs_fn(x))
            }
            Expr::Sub(lhs, rhs) => {
                let lhs_fn = lhs.closure1D();
                let rhs_fn = rhs.closure1D();
                Box::new(move |x| lhs_fn(x) - rhs_fn(x))
            }
            Expr::Mul(lhs, rhs) => {
                let lhs_fn = lhs.closure1D();
                let rhs_fn = rhs.closure1D();
                Box::new(move |x| lhs_fn(x) * rhs_fn(x))
            }
            Expr::Div(lhs, rhs) => {
                let lhs_fn = lhs.closure1D();
                let rhs_fn = rhs.closure1D();
                Box::new(move |x| lhs_fn(x) / rhs_fn(x))
            }
            Expr::Neg(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| -expr_fn(x))
            }
            Expr::Pow(base, exp) => {
                let base_fn = base.closure1D();
                let exp_fn = exp.closure1D();
                Box::new(move |x| base_fn(x).powf(exp_fn(x)))
            }
            Expr::Log(base, arg) => {
                let base_fn = base.closure1D();
                let arg_fn = arg.closure1D();
                Box::new(move |x| arg_fn(x).log(base_fn(x)))
            }
            Expr::Ln(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).ln())
            }
            Expr::sin(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).sin())
            }
            Expr::cos(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).cos())
            }
            Expr::tan(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| {
                    let value = expr_fn(x);
                    value.sin() / value.cos()
                })
            }
            Expr::cot(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| {
                    let value = expr_fn(x);
                    value.cos() / value.sin()
                })
            }
            Expr::sec(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| 1.0 / expr_fn(x).cos())
            }
            Expr::csc(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| 1.0 / expr_fn(x).sin())
            }
            Expr::arcsin(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).asin())
            }
            Expr::arccos(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).acos())
            }
            Expr::arctan(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| expr_fn(x).atan())
            }
            Expr::arccot(expr) => {
                let expr_fn = expr.closure1D();
                Box::new(move |x| PI / 2.0 - expr_fn(x).atan())
            }
        }
    }

    /// Evaluates a single-variable expression over a vector of points.
    ///
    /// # Arguments
    /// * `x` - Points to evaluate at
    pub fn calc_vector_lambdified1D(&self, x: &Vec<f64>) -> Vec<f64> {
        let function = self.lambdify1D();
        let mut result = Vec::with_capacity(x.len());
        for xi in x {
            result.push(function(*xi));
        }
        result
    }

    /// Evaluates a single-variable expression over a uniform grid.
    ///
    /// # Arguments
    /// * `start` - Start of the interval
    /// * `end` - End of the interval
    /// * `num_values` - Number of grid points
    pub fn lambdify1D_from_linspace(&self, start: f64, end: f64, num_values: usize) -> Vec<f64> {
        let x = linspace(start, end, num_values);
        self.calc_vector_lambdified1D(&x)
    }

    /// DERIVATIVE VALIDATION

    /// Compares the analytical derivative with a central finite difference
    /// over a uniform grid and returns the norm of the mismatch together
    /// with a flag telling whether it stayed below `max_norm`.
    ///
    /// # Arguments
    /// * `var` - Variable to differentiate with respect to
    /// * `start`, `end` - Interval of comparison
    /// * `num_values` - Number of grid points
    /// * `max_norm` - Largest acceptable mismatch norm
    pub fn compare_num1D(
        &self,
        var: char,
        start: f64,
        end: f64,
        num_values: usize,
        max_norm: f64,
    ) -> (f64, bool) {
        let diff = &self.diff(var);
        let analytical_derivative = diff.lambdify1D_from_linspace(start, end, num_values);
        let analytical_function = &self.lambdify1D();
        let step = (1.0 / 1e4) * (end - start) / (num_values as f64 - 1.0);
        let domain = linspace(start, end, num_values);
        let numerical_derivative = numerical_derivative(analytical_function, domain, step);
        let norm_of_difference = norm(analytical_derivative, numerical_derivative);
        debug!(
            "derivative check for '{}': norm {} against allowed {}",
            var, norm_of_difference, max_norm
        );
        if max_norm > norm_of_difference {
            (norm_of_difference, true)
        } else {
            (norm_of_difference, false)
        }
    }

    /// GRADIENT

    /// Partial derivatives with respect to every variable in the tree, in
    /// sorted variable order, computed in parallel.
    pub fn diff_multi(&self) -> Vec<Expr> {
        let all_vars = self.all_arguments_are_variables();
        let vec_of_derivatives: Vec<Expr> =
            all_vars.par_iter().map(|var| self.diff(*var)).collect();
        vec_of_derivatives
    }
}
