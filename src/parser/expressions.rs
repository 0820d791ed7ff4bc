/*
 * ==========================================================================
 * PYCRAFT - Slash Commands, Real Expressions
 * ==========================================================================
 *
 * Author:   Sam Wilcox
 *
 * License:
 * This file is part of the PYCRAFT scripting language project.
 *
 * PYCRAFT is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/*
 * --------------------------------------------------------------------------
 *  MODULE OVERVIEW
 * --------------------------------------------------------------------------
 * The PyCraft expression grammar, lowest precedence first:
 *
 *   or → and → not → bit_or → bit_xor → bit_and → equality → comparison
 *      → shift → term → factor → exponent → unary → postfix → call → primary
 *
 * Binary tiers are left-associative loops. `exponent` is the exception: it
 * takes at most one `**` and one right operand, so `a ** b ** c` stops after
 * the first power and leaves the second `**` unconsumed.
 * --------------------------------------------------------------------------
 */

use crate::ast::Expr;
use crate::error::ParseError;
use crate::lexer::token::{Token, TokenKind};
use crate::parser::parser::Parser;

impl Parser {
    /// expression → or
    pub fn expression(&mut self) -> Result<Expr, ParseError> {
        self.logical_or()
    }

    /// Shared loop for a left-associative binary tier.
    fn binary_tier(
        &mut self,
        ops: &[&str],
        next: fn(&mut Parser) -> Result<Expr, ParseError>,
    ) -> Result<Expr, ParseError> {
        let mut expr = next(self)?;

        while self.match_any(ops) {
            let operator = self.previous().clone();
            let right = next(self)?;
            expr = Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            };
        }

        Ok(expr)
    }

    /// or → and ( "or" and )*
    fn logical_or(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["or"], Parser::logical_and)
    }

    /// and → not ( "and" not )*
    fn logical_and(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["and"], Parser::logical_not)
    }

    /// not → "not" not | bit_or
    fn logical_not(&mut self) -> Result<Expr, ParseError> {
        if self.match_operator("not") {
            let operator = self.previous().clone();
            let right = self.logical_not()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.bit_or()
    }

    /// bit_or → bit_xor ( "|" bit_xor )*
    fn bit_or(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["|"], Parser::bit_xor)
    }

    /// bit_xor → bit_and ( "^" bit_and )*
    fn bit_xor(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["^"], Parser::bit_and)
    }

    /// bit_and → equality ( "&" equality )*
    fn bit_and(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["&"], Parser::equality)
    }

    /// equality → comparison ( ( "==" | "!=" | "===" ) comparison )*
    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["==", "!=", "==="], Parser::comparison)
    }

    /// comparison → shift ( ( "<" | "<=" | ">" | ">=" | "in" | "not in"
    ///                        | "is" | "is not" ) shift )*
    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(
            &["<", "<=", ">", ">=", "in", "not in", "is", "is not"],
            Parser::shift,
        )
    }

    /// shift → term ( ( "<<" | ">>" ) term )*
    fn shift(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["<<", ">>"], Parser::term)
    }

    /// term → factor ( ( "+" | "-" ) factor )*
    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["+", "-"], Parser::factor)
    }

    /// factor → exponent ( ( "*" | "$" | "$$" | "%" ) exponent )*
    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_tier(&["*", "$", "$$", "%"], Parser::exponent)
    }

    /// exponent → unary ( "**" unary )?
    fn exponent(&mut self) -> Result<Expr, ParseError> {
        let expr = self.unary()?;

        if self.match_operator("**") {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Binary {
                left: Box::new(expr),
                operator,
                right: Box::new(right),
            });
        }

        Ok(expr)
    }

    /// unary → ( "+" | "-" | "~" | "!" | "not" ) unary | postfix
    fn unary(&mut self) -> Result<Expr, ParseError> {
        if self.match_any(&["+", "-", "~", "!", "not"]) {
            let operator = self.previous().clone();
            let right = self.unary()?;
            return Ok(Expr::Unary {
                operator,
                right: Box::new(right),
            });
        }

        self.postfix()
    }

    /// postfix → call ( "++" | "--" )?
    fn postfix(&mut self) -> Result<Expr, ParseError> {
        let expr = self.call()?;

        if self.match_any(&["++", "--"]) {
            let operator = self.previous().clone();
            return Ok(Expr::Postfix {
                operand: Box::new(expr),
                operator,
            });
        }

        Ok(expr)
    }

    /// call → primary ( "(" arguments? ")" | wrapped-number )*
    ///
    /// `f(2)` lexes as `f` followed by the wrapped number `(2)`; directly
    /// after a callee on the same line that reads as a one-argument call.
    fn call(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.primary()?;

        loop {
            if self.match_operator("(") {
                let paren = self.previous().clone();
                expr = self.finish_call(expr, paren)?;
            } else if self.is_wrapped_number_argument(&expr) {
                let number = self.advance();
                let paren = Token::new(TokenKind::Symbol, "(", number.line);
                expr = Expr::Call {
                    callee: Box::new(expr),
                    paren,
                    arguments: vec![Expr::Literal(number)],
                };
            } else {
                break;
            }
        }

        Ok(expr)
    }

    fn finish_call(&mut self, callee: Expr, paren: Token) -> Result<Expr, ParseError> {
        let mut arguments = Vec::new();

        if !self.check_symbol(")") {
            loop {
                arguments.push(self.expression()?);
                if !self.match_operator(",") {
                    break;
                }
            }
        }

        self.consume_symbol(")", "Expected ')' after arguments.")?;

        Ok(Expr::Call {
            callee: Box::new(callee),
            paren,
            arguments,
        })
    }

    fn is_wrapped_number_argument(&self, callee: &Expr) -> bool {
        let token = self.peek();

        token.kind == TokenKind::Number
            && token.lexeme.starts_with('(')
            && token.line == callee.line()
            && matches!(callee, Expr::Call { .. } | Expr::Literal(Token { kind: TokenKind::Word | TokenKind::Identifier, .. }))
    }

    /// primary → NUMBER | STRING | "true" | "false" | "nil" | @IDENT | WORD
    ///         | "(" expression ")"
    fn primary(&mut self) -> Result<Expr, ParseError> {
        let kind = self.peek().kind;

        match kind {
            TokenKind::Number
            | TokenKind::String
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Nil
            | TokenKind::Identifier
            | TokenKind::Word => Ok(Expr::Literal(self.advance())),

            _ if self.match_operator("(") => {
                let expr = self.expression()?;
                self.consume_symbol(")", "Expected ')' after expression.")?;
                Ok(Expr::Grouping(Box::new(expr)))
            }

            _ => Err(self.error_at_current("Expected expression.")),
        }
    }
}
