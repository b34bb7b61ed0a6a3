mod builder;
pub mod error;
mod lexer;
mod parsed_expr;
pub mod parser;
mod syntax;

pub use builder::{Insertion, NodeId, TreeBuilder};
pub use lexer::{Lexeme, Scanner, Token, UnexpectedChar};
pub use parser::{ParserOptions, parse, parse_with_options};

pub use error::{ParseError, ParseErrorKind};
pub use parsed_expr::{Expr, Literal, ParsedExpr};
pub use syntax::{Operator, Span};
