//! Parser for netlists.

use std::collections::HashSet;

use super::ast::*;
use super::lexer::{parse_node, parse_value, Lexer, Token, TokenKind};
use super::MAX_NODES;
use crate::error::{NetworkError, Result};

/// Parser for netlists.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current: Token,
}

impl<'a> Parser<'a> {
    /// Create a new parser with the given lexer.
    pub fn new(mut lexer: Lexer<'a>) -> Result<Self> {
        let current = lexer.next_token()?;
        Ok(Self { lexer, current })
    }

    /// Parse the entire netlist.
    pub fn parse(&mut self) -> Result<NetlistAst> {
        let mut ast = NetlistAst::new();
        let mut names = HashSet::new();
        let mut nodes_line = None;

        while self.current.kind != TokenKind::Eof {
            match self.current.kind {
                TokenKind::Newline => {
                    self.advance()?;
                    continue;
                }
                TokenKind::Directive => {
                    nodes_line = Some(self.current.line);
                    self.parse_directive(&mut ast)?;
                }
                TokenKind::Identifier => {
                    let resistor = self.parse_resistor()?;
                    if !names.insert(resistor.name.clone()) {
                        return Err(NetworkError::DuplicateComponent {
                            name: resistor.name,
                        });
                    }
                    ast.resistors.push(resistor);
                }
                _ => {
                    return Err(NetworkError::parse(
                        self.current.line,
                        format!("unexpected token: {:?}", self.current.text),
                    ));
                }
            }

            self.expect_line_end()?;
        }

        if let (Some(declared), Some(line)) = (ast.declared_nodes, nodes_line) {
            let referenced = ast.referenced_nodes();
            if declared < referenced {
                return Err(NetworkError::parse(
                    line,
                    format!(
                        ".nodes {} is too small, resistors reference node {}",
                        declared,
                        referenced - 1
                    ),
                ));
            }
        }

        Ok(ast)
    }

    fn advance(&mut self) -> Result<()> {
        self.current = self.lexer.next_token()?;
        Ok(())
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        if self.current.kind == kind {
            let tok = self.current.clone();
            self.advance()?;
            Ok(tok)
        } else {
            Err(NetworkError::parse(
                self.current.line,
                format!("expected {:?}, got {:?}", kind, self.current.kind),
            ))
        }
    }

    fn expect_line_end(&mut self) -> Result<()> {
        match self.current.kind {
            TokenKind::Newline => self.advance(),
            TokenKind::Eof => Ok(()),
            _ => Err(NetworkError::parse(
                self.current.line,
                format!("unexpected trailing token: {:?}", self.current.text),
            )),
        }
    }

    fn parse_directive(&mut self, ast: &mut NetlistAst) -> Result<()> {
        let directive = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        match directive.to_lowercase().as_str() {
            ".nodes" => {
                if ast.declared_nodes.is_some() {
                    return Err(NetworkError::parse(line, "duplicate .nodes directive"));
                }
                let count = self.expect(TokenKind::Number)?;
                let count = parse_node(&count.text).ok_or_else(|| {
                    NetworkError::parse(line, format!("invalid node count: {}", count.text))
                })?;
                if count > MAX_NODES {
                    return Err(NetworkError::parse(
                        line,
                        format!("node count {} exceeds the limit of {}", count, MAX_NODES),
                    ));
                }
                ast.declared_nodes = Some(count);
            }
            _ => {
                return Err(NetworkError::parse(
                    line,
                    format!("unknown directive: {}", directive),
                ));
            }
        }

        Ok(())
    }

    fn parse_resistor(&mut self) -> Result<ResistorDef> {
        let name = self.current.text.clone();
        let line = self.current.line;
        self.advance()?;

        if !name.starts_with(['R', 'r']) {
            return Err(NetworkError::invalid_component(
                &name,
                line,
                "only resistors ('R' prefix) are supported",
            ));
        }

        let mut fields = Vec::with_capacity(3);
        while self.current.kind == TokenKind::Number {
            fields.push(self.current.text.clone());
            self.advance()?;
        }

        let [source, target, value] = match <[String; 3]>::try_from(fields) {
            Ok(fields) => fields,
            Err(fields) => {
                return Err(NetworkError::invalid_component(
                    &name,
                    line,
                    format!(
                        "expected <source> <target> <value>, got {} fields",
                        fields.len()
                    ),
                ));
            }
        };

        let node = |text: &str| {
            let index = parse_node(text).ok_or_else(|| {
                NetworkError::invalid_component(
                    &name,
                    line,
                    format!("invalid node index '{}'", text),
                )
            })?;
            if index >= MAX_NODES {
                return Err(NetworkError::invalid_component(
                    &name,
                    line,
                    format!("node index {} exceeds the limit of {}", index, MAX_NODES - 1),
                ));
            }
            Ok(index)
        };
        let source = node(&source)?;
        let target = node(&target)?;

        let resistance = parse_value(&value).ok_or_else(|| {
            NetworkError::invalid_component(&name, line, format!("invalid resistance '{}'", value))
        })?;

        Ok(ResistorDef {
            name,
            source,
            target,
            resistance,
            line,
        })
    }
}
