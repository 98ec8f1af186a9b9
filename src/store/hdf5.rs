//! HDF5 backend (feature `hdf5`).
//!
//! Maps groups, datasets, and attributes of an HDF5 catalogue onto the
//! `KeyedStore` contract. Numeric data is read through HDF5's own type
//! conversion into `f64`.

use crate::error::StoreError;
use crate::store::{
    AttrValue, Attributes, DType, DatasetInfo, KeyedStore, Member, MemberKind, RawArray,
    StoreOpener,
};
use hdf5::types::{FloatSize, IntSize, TypeDescriptor, VarLenAscii, VarLenUnicode};
use hdf5::{File, Location};
use std::path::Path;

pub struct Hdf5Store {
    file: File,
}

fn location_path(path: &str) -> &str {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() { "/" } else { trimmed }
}

fn read_attrs(location: &Location) -> Result<Attributes, StoreError> {
    let mut attrs = Attributes::new();
    for name in location.attr_names()? {
        let attr = location.attr(&name)?;
        let value = if let Ok(text) = attr.read_scalar::<VarLenUnicode>() {
            AttrValue::Text(text.to_string())
        } else if let Ok(text) = attr.read_scalar::<VarLenAscii>() {
            AttrValue::Text(text.to_string())
        } else if let Ok(values) = attr.read_raw::<f64>() {
            AttrValue::Array(values)
        } else {
            continue;
        };
        attrs.insert(name, value);
    }
    Ok(attrs)
}

fn dtype_of(descriptor: &TypeDescriptor) -> DType {
    match descriptor {
        TypeDescriptor::Float(FloatSize::U4) => DType::Float32,
        TypeDescriptor::Integer(IntSize::U1 | IntSize::U2 | IntSize::U4) => DType::Int32,
        TypeDescriptor::Integer(IntSize::U8) => DType::Int64,
        TypeDescriptor::Unsigned(IntSize::U1 | IntSize::U2 | IntSize::U4) => DType::Uint32,
        TypeDescriptor::Unsigned(IntSize::U8) => DType::Uint64,
        TypeDescriptor::Boolean => DType::Bool,
        _ => DType::Float64,
    }
}

impl KeyedStore for Hdf5Store {
    fn attrs(&self, path: &str) -> Result<Option<Attributes>, StoreError> {
        let key = location_path(path);
        if let Ok(group) = self.file.group(key) {
            return Ok(Some(read_attrs(&group)?));
        }
        match self.file.dataset(key) {
            Ok(dataset) => Ok(Some(read_attrs(&dataset)?)),
            Err(_) => Ok(None),
        }
    }

    fn members(&self, path: &str) -> Result<Option<Vec<Member>>, StoreError> {
        let Ok(group) = self.file.group(location_path(path)) else {
            return Ok(None);
        };
        let mut members = Vec::new();
        for name in group.member_names()? {
            let kind = if group.group(&name).is_ok() {
                MemberKind::Group
            } else {
                MemberKind::Dataset
            };
            members.push(Member { name, kind });
        }
        members.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(Some(members))
    }

    fn info(&self, path: &str) -> Result<Option<DatasetInfo>, StoreError> {
        let Ok(dataset) = self.file.dataset(location_path(path)) else {
            return Ok(None);
        };
        let descriptor = dataset.dtype()?.to_descriptor()?;
        Ok(Some(DatasetInfo {
            dtype: dtype_of(&descriptor),
            shape: dataset.shape(),
        }))
    }

    fn read(&self, path: &str) -> Result<Option<RawArray>, StoreError> {
        let Ok(dataset) = self.file.dataset(location_path(path)) else {
            return Ok(None);
        };
        let descriptor = dataset.dtype()?.to_descriptor()?;
        let values = dataset.read_dyn::<f64>()?;
        Ok(Some(RawArray {
            dtype: dtype_of(&descriptor),
            values,
        }))
    }
}

/// Opens HDF5 catalogue files read-only.
#[derive(Clone, Debug, Default)]
pub struct Hdf5StoreOpener;

impl StoreOpener for Hdf5StoreOpener {
    fn open(&self, path: &Path) -> Result<Box<dyn KeyedStore>, StoreError> {
        let file = File::open(path)?;
        Ok(Box::new(Hdf5Store { file }))
    }
}
