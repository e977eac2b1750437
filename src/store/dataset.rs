use crate::error::StoreError;
use crate::types::record::{Dataset, Record, COLUMNS};
use std::io::{Read, Write};
use std::path::Path;

pub fn read_dataset(path: &Path) -> Result<Dataset, StoreError> {
    if !path.exists() {
        return Err(StoreError::MissingDataset(path.to_path_buf()));
    }
    let file = std::fs::File::open(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file).map_err(|source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<(), StoreError> {
    let file = std::fs::File::create(path).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_records(file, dataset).map_err(|source| StoreError::Csv {
        path: path.to_path_buf(),
        source,
    })
}

pub fn read_records<R: Read>(reader: R) -> Result<Dataset, csv::Error> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);
    let records = reader
        .deserialize::<Record>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Dataset::from_records(records))
}

/// Writes the header unconditionally so an empty dataset still reads back.
pub fn write_records<W: Write>(writer: W, dataset: &Dataset) -> Result<(), csv::Error> {
    let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(COLUMNS)?;
    for record in dataset.records() {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
