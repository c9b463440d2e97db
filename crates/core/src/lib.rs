// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! hubq-core: the issue filter query language.
//!
//! Filter text is lexed into [`Token`]s, parsed into an [`Expr`] tree, and
//! evaluated against anything implementing [`Queryable`]:
//!
//! ```
//! use hubq_core::{evaluate, parse, Issue};
//!
//! let expr = parse("crash -label:wontfix").unwrap();
//! let issue = Issue::new(1, "Crash on startup");
//! assert!(evaluate(&expr, &issue));
//! ```

pub mod error;
pub mod eval;
pub mod expr;
pub mod issue;
pub mod label;
pub mod lexer;
pub mod parser;
pub mod qualifier;
pub mod token;

pub use error::{Error, Result, SyntaxError};
pub use eval::{evaluate, EvalContext, Filter, KeywordScope};
pub use expr::{CompareOp, Content, Expr, Operand, Qualifier, SortKey};
pub use issue::{Issue, Queryable, State};
pub use lexer::{tokenize, Lexer};
pub use parser::{check, check_with, parse, parse_with, Parser, Validity, MAX_DEPTH};
pub use qualifier::{QualifierKind, Registry, ValueShape, BUILTIN_NAMES};
pub use token::{Token, TokenType};
