mod tcx;

use crate::error::ParseError;
use crate::types::document::SourceDocument;

pub use tcx::TcxParser;

pub trait Parser {
    fn parse(&self, bytes: &[u8]) -> Result<SourceDocument, ParseError>;
}

pub fn parse(bytes: &[u8]) -> Result<SourceDocument, ParseError> {
    TcxParser.parse(bytes)
}
