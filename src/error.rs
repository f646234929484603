//! Error types for generation and guard parsing

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::guard::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Errors that can occur while generating an instance
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The agent count is missing, not an integer, or not positive
    #[error("invalid argument '{value}': {reason}")]
    InvalidArgument { value: String, reason: String },

    #[error("failed to serialize instance: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("serialized instance is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

impl GenerateError {
    pub fn invalid_argument(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            value: value.into(),
            reason: reason.into(),
        }
    }
}

/// Syntax error in a guard formula
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },
}

impl ParseError {
    pub fn span(&self) -> &Span {
        match self {
            ParseError::Syntax { span, .. } => span,
        }
    }

    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let ParseError::Syntax {
            span,
            message,
            expected,
        } = self;

        let expected_str = if expected.is_empty() {
            String::new()
        } else {
            format!("\nExpected: {}", expected.join(", "))
        };

        let mut buf = Vec::new();
        let written = Report::build(ReportKind::Error, filename, span.start)
            .with_message(message)
            .with_label(
                Label::new((filename, span.clone()))
                    .with_message(format!("{}{}", message, expected_str))
                    .with_color(Color::Red),
            )
            .finish()
            .write((filename, Source::from(source)), &mut buf);

        match written {
            Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
            Err(_) => self.to_string(),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParseError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of guard".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of guard".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("identifier '{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ParseError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("proposition '{}'", s),
        Token::True => "'true'".to_string(),
        Token::False => "'false'".to_string(),
        Token::Not => "'!'".to_string(),
        Token::And => "'&'".to_string(),
        Token::Or => "'|'".to_string(),
        Token::Xor => "'^'".to_string(),
        Token::Implies => "'->'".to_string(),
        Token::Iff => "'<->'".to_string(),
        Token::ParenOpen => "'('".to_string(),
        Token::ParenClose => "')'".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = GenerateError::invalid_argument("abc", "expected a positive integer");
        assert_eq!(
            err.to_string(),
            "invalid argument 'abc': expected a positive integer"
        );
    }

    #[test]
    fn test_format_includes_source_and_name() {
        let err = ParseError::Syntax {
            span: 3..4,
            message: "Unexpected ')'".to_string(),
            expected: vec!["proposition".to_string()],
        };
        let report = err.format("g1 ) g2", "A1/s2/w#0");
        assert!(report.contains("A1/s2/w#0"));
        assert!(report.contains("Unexpected"));
    }
}
