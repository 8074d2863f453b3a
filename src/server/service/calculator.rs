//! Arithmetic calculator for the `calc` command.
//!
//! Expressions are normalized, restricted to digits, `.`, `+ - * / ( )` and evaluated
//! by a small recursive-descent parser:
//!
//! ```text
//! expr   := term (('+' | '-') term)*
//! term   := factor (('*' | '/') factor)*
//! factor := ('+' | '-') factor | '(' expr ')' | number
//! ```

use std::iter::Peekable;
use std::str::Chars;

use crate::server::error::calculator::CalculatorError;

/// Maps the multiplication and division signs people type to operators and drops
/// spaces and thousands separators.
pub fn normalize_expression(expression: &str) -> String {
    expression
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            'x' | 'X' | '×' => '*',
            '÷' => '/',
            other => other,
        })
        .collect()
}

/// Evaluates an arithmetic expression.
///
/// # Returns
/// - `Ok(f64)` - Finite result
/// - `Err(CalculatorError)` - Empty, invalid character, malformed or division by zero
pub fn evaluate(expression: &str) -> Result<f64, CalculatorError> {
    let normalized = normalize_expression(expression);
    if normalized.is_empty() {
        return Err(CalculatorError::Empty);
    }
    if let Some(invalid) = normalized
        .chars()
        .find(|c| !c.is_ascii_digit() && !matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')'))
    {
        return Err(CalculatorError::InvalidCharacter(invalid));
    }

    let mut parser = Parser {
        chars: normalized.chars().peekable(),
    };
    let result = parser.expr()?;
    if let Some(trailing) = parser.chars.next() {
        return Err(CalculatorError::Malformed(format!(
            "unexpected '{}'",
            trailing
        )));
    }
    if !result.is_finite() {
        return Err(CalculatorError::Malformed(
            "result is too large".to_string(),
        ));
    }

    Ok(result)
}

/// Formats a result: whole numbers without decimals, others to at most six.
pub fn format_result(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }

    let formatted = format!("{:.6}", value);
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

struct Parser<'a> {
    chars: Peekable<Chars<'a>>,
}

impl Parser<'_> {
    fn expr(&mut self) -> Result<f64, CalculatorError> {
        let mut value = self.term()?;
        while let Some(&op) = self.chars.peek() {
            match op {
                '+' => {
                    self.chars.next();
                    value += self.term()?;
                }
                '-' => {
                    self.chars.next();
                    value -= self.term()?;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, CalculatorError> {
        let mut value = self.factor()?;
        while let Some(&op) = self.chars.peek() {
            match op {
                '*' => {
                    self.chars.next();
                    value *= self.factor()?;
                }
                '/' => {
                    self.chars.next();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(CalculatorError::DivisionByZero);
                    }
                    value /= divisor;
                }
                _ => break,
            }
        }
        Ok(value)
    }

    fn factor(&mut self) -> Result<f64, CalculatorError> {
        match self.chars.peek() {
            Some('-') => {
                self.chars.next();
                Ok(-self.factor()?)
            }
            Some('+') => {
                self.chars.next();
                self.factor()
            }
            Some('(') => {
                self.chars.next();
                let value = self.expr()?;
                match self.chars.next() {
                    Some(')') => Ok(value),
                    _ => Err(CalculatorError::Malformed("missing ')'".to_string())),
                }
            }
            Some(c) if c.is_ascii_digit() || *c == '.' => self.number(),
            Some(c) => Err(CalculatorError::Malformed(format!("unexpected '{}'", c))),
            None => Err(CalculatorError::Malformed(
                "expression ends early".to_string(),
            )),
        }
    }

    fn number(&mut self) -> Result<f64, CalculatorError> {
        let mut literal = String::new();
        while let Some(&c) = self.chars.peek() {
            if !c.is_ascii_digit() && c != '.' {
                break;
            }
            literal.push(c);
            self.chars.next();
        }

        literal
            .parse::<f64>()
            .map_err(|_| CalculatorError::Malformed(format!("invalid number '{}'", literal)))
    }
}
