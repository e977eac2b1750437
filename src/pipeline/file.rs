use crate::error::{FileError, ParseError};
use crate::pipeline::{activity, parse};
use crate::types::document::SourceDocument;
use crate::types::record::Record;

/// All records of a document, stamped with `source_file` as given.
pub fn process_document(doc: &SourceDocument, source_file: &str) -> Vec<Record> {
    doc.activities()
        .into_iter()
        .flat_map(|node| activity::walk(node, source_file))
        .collect()
}

pub fn process_bytes(bytes: &[u8], source_file: &str) -> Result<Vec<Record>, FileError> {
    let doc = parse::parse(bytes).map_err(|source: ParseError| FileError::Parse {
        path: source_file.to_string(),
        source,
    })?;
    Ok(process_document(&doc, source_file))
}

pub fn process_file(path: &str) -> Result<Vec<Record>, FileError> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_string(),
        source,
    })?;
    process_bytes(&bytes, path)
}
