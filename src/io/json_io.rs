//! JSON serialization of datasets.
//!
//! A dependency-free alternative to NetCDF: the whole [`Dataset`] (index
//! coordinates, variables, attributes) is written as one self-describing
//! JSON document and read back losslessly.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::dataset::{Dataset, DatasetError};

/// Write a dataset as JSON.
pub fn write_json(dataset: &Dataset, path: impl AsRef<Path>) -> Result<(), DatasetError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer(&mut writer, dataset)?;
    writer.flush()?;

    info!(
        "Wrote {} variables on {:?} grid to {}",
        dataset.variables().len(),
        dataset.shape(),
        path.display()
    );
    Ok(())
}

/// Read a dataset written by [`write_json`].
pub fn read_json(path: impl AsRef<Path>) -> Result<Dataset, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}
