// BJData for Rust
// SPDX-License-Identifier: MPL-2.0

//! Contains [`Tensor`] and [`StructuredArray`], the adapter types through
//! which array libraries hand N-D data to the encoder: an element kind, a
//! shape, and a contiguous row-major payload, plus a field schema for
//! record arrays. The encoder never interprets the payload bytes beyond
//! copying them out.

use log::error;
use thiserror::Error;

use crate::markers;

/// Element type of a [`Tensor`] or of a [`StructuredArray`] field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Boolean, one byte per element.
    Bool,
    /// Signed 8-bit integer.
    Int8,
    /// Signed 16-bit integer.
    Int16,
    /// Signed 32-bit integer.
    Int32,
    /// Signed 64-bit integer.
    Int64,
    /// Unsigned 8-bit integer.
    UInt8,
    /// Unsigned 16-bit integer.
    UInt16,
    /// Unsigned 32-bit integer.
    UInt32,
    /// Unsigned 64-bit integer.
    UInt64,
    /// IEEE-754 half precision float.
    Float16,
    /// IEEE-754 single precision float.
    Float32,
    /// IEEE-754 double precision float.
    Float64,
    /// Complex number as a pair of single precision floats.
    Complex64,
    /// Complex number as a pair of double precision floats.
    Complex128,
    /// Fixed-width byte string.
    Bytes,
    /// Fixed-width Unicode text, 4-byte code units.
    Unicode,
}

impl ElementKind {
    /// The BJData scalar marker this element kind maps to. Complex kinds
    /// map to the real float marker of the same width; text kinds map to
    /// `STRING`.
    pub fn marker(&self) -> u8 {
        match self {
            ElementKind::Bool | ElementKind::UInt8 => markers::UINT8,
            ElementKind::Int8 => markers::INT8,
            ElementKind::Int16 => markers::INT16,
            ElementKind::Int32 => markers::INT32,
            ElementKind::Int64 => markers::INT64,
            ElementKind::UInt16 => markers::UINT16,
            ElementKind::UInt32 => markers::UINT32,
            ElementKind::UInt64 => markers::UINT64,
            ElementKind::Float16 => markers::FLOAT16,
            ElementKind::Float32 | ElementKind::Complex64 => markers::FLOAT32,
            ElementKind::Float64 | ElementKind::Complex128 => markers::FLOAT64,
            ElementKind::Bytes | ElementKind::Unicode => markers::STRING,
        }
    }

    /// The fixed per-element byte width, or `None` for text kinds whose
    /// width is a property of the array.
    pub fn fixed_item_size(&self) -> Option<usize> {
        match self {
            ElementKind::Bool
            | ElementKind::Int8
            | ElementKind::UInt8 => Some(1),
            ElementKind::Int16 | ElementKind::UInt16 | ElementKind::Float16 => Some(2),
            ElementKind::Int32
            | ElementKind::UInt32
            | ElementKind::Float32 => Some(4),
            ElementKind::Int64
            | ElementKind::UInt64
            | ElementKind::Float64
            | ElementKind::Complex64 => Some(8),
            ElementKind::Complex128 => Some(16),
            ElementKind::Bytes | ElementKind::Unicode => None,
        }
    }

    /// The marker written in a structured-array schema for a field of this
    /// kind, or `None` when the kind cannot be a record field. Booleans use
    /// the `TRUE` marker; per-value payload bytes then carry `T`/`F`.
    pub fn field_marker(&self) -> Option<u8> {
        match self {
            ElementKind::Bool => Some(markers::BOOL_TRUE),
            ElementKind::Complex64
            | ElementKind::Complex128
            | ElementKind::Bytes
            | ElementKind::Unicode => None,
            _ => Some(self.marker()),
        }
    }

    /// Whether this is a fixed-width text kind.
    pub fn is_text(&self) -> bool {
        matches!(self, ElementKind::Bytes | ElementKind::Unicode)
    }
}

/// Error returned when constructing tensors or structured arrays.
#[derive(Debug, Error)]
pub enum TensorError {
    /// The declared item size does not match the element kind.
    #[error("Element kind {kind:?} has item size {expected}, got {got}")]
    ItemSizeMismatch {
        /// The element kind in question.
        kind: ElementKind,
        /// The width the kind requires.
        expected: usize,
        /// The width that was supplied.
        got: usize,
    },
    /// The item size was zero.
    #[error("Item size must be non-zero")]
    ZeroItemSize,
    /// The payload does not contain exactly shape x item size bytes.
    #[error("Payload is {got} bytes, shape and item size require {expected}")]
    LengthMismatch {
        /// Expected payload size in bytes.
        expected: usize,
        /// Supplied payload size in bytes.
        got: usize,
    },
    /// The dimensions multiplied together overflow.
    #[error("Array dimensions overflow")]
    DimensionOverflow,
    /// A structured array was declared without fields.
    #[error("Structured array must have at least one field")]
    NoFields,
    /// A field does not fit inside the record.
    #[error("Field {name} extends past the end of the record")]
    FieldOutOfBounds {
        /// Name of the offending field.
        name: String,
    },
}

fn element_count(shape: &[usize]) -> Result<usize, TensorError> {
    let mut count = 1usize;
    for d in shape {
        count = count
            .checked_mul(*d)
            .ok_or(TensorError::DimensionOverflow)?;
    }
    Ok(count)
}

/// A homogeneous N-D numeric array: an element kind, a shape and a
/// contiguous row-major payload in native element byte order.
///
/// Rank 0 is a scalar belonging to an array library; it encodes as a bare
/// typed scalar rather than a container.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    kind: ElementKind,
    shape: Vec<usize>,
    item_size: usize,
    data: Vec<u8>,
}

impl Tensor {
    /// Construct a tensor, validating that `item_size` matches the element
    /// kind and that `data` holds exactly one item per shape element.
    pub fn new(
        kind: ElementKind,
        shape: Vec<usize>,
        item_size: usize,
        data: Vec<u8>,
    ) -> Result<Tensor, TensorError> {
        if item_size == 0 {
            return Err(TensorError::ZeroItemSize);
        }
        if let Some(expected) = kind.fixed_item_size() {
            if item_size != expected {
                error!(
                    "Tensor of {:?} declared with item size {} instead of {}",
                    kind, item_size, expected
                );
                return Err(TensorError::ItemSizeMismatch {
                    kind,
                    expected,
                    got: item_size,
                });
            }
        }
        let expected = element_count(&shape)?
            .checked_mul(item_size)
            .ok_or(TensorError::DimensionOverflow)?;
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(Tensor {
            kind,
            shape,
            item_size,
            data,
        })
    }

    /// Construct a rank-0 tensor holding a single element.
    pub fn scalar(kind: ElementKind, item_size: usize, data: Vec<u8>) -> Result<Tensor, TensorError> {
        Self::new(kind, Vec::new(), item_size, data)
    }

    /// Element kind.
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// Shape, one entry per dimension. Empty for scalars.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Per-element byte width.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// The contiguous row-major payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

/// One named scalar field of a [`StructuredArray`] record.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    /// Field name, written into the embedded schema.
    pub name: String,
    /// Element kind of the field.
    pub kind: ElementKind,
    /// Byte offset of the field within each record.
    pub offset: usize,
}

impl FieldSpec {
    /// Create a field spec.
    pub fn new(name: impl Into<String>, kind: ElementKind, offset: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            offset,
        }
    }
}

/// An N-D array whose element is a record of named scalar fields at fixed
/// byte offsets, always encoded with an embedded schema in either row or
/// column layout.
#[derive(Debug, Clone, PartialEq)]
pub struct StructuredArray {
    shape: Vec<usize>,
    item_size: usize,
    fields: Vec<FieldSpec>,
    data: Vec<u8>,
}

impl StructuredArray {
    /// Construct a structured array. `item_size` is the record stride;
    /// every fixed-width field must fit inside it, and `data` must hold
    /// exactly one record per shape element. Whether each field *kind* is
    /// expressible in a schema is checked at encode time.
    pub fn new(
        shape: Vec<usize>,
        item_size: usize,
        fields: Vec<FieldSpec>,
        data: Vec<u8>,
    ) -> Result<StructuredArray, TensorError> {
        if fields.is_empty() {
            return Err(TensorError::NoFields);
        }
        if item_size == 0 {
            return Err(TensorError::ZeroItemSize);
        }
        for field in &fields {
            if let Some(width) = field.kind.fixed_item_size() {
                if field.offset + width > item_size {
                    error!(
                        "Structured array field {} at offset {} does not fit in a {} byte record",
                        field.name, field.offset, item_size
                    );
                    return Err(TensorError::FieldOutOfBounds {
                        name: field.name.clone(),
                    });
                }
            }
        }
        let expected = element_count(&shape)?
            .checked_mul(item_size)
            .ok_or(TensorError::DimensionOverflow)?;
        if data.len() != expected {
            return Err(TensorError::LengthMismatch {
                expected,
                got: data.len(),
            });
        }
        Ok(StructuredArray {
            shape,
            item_size,
            fields,
            data,
        })
    }

    /// Shape, one entry per dimension.
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Record stride in bytes.
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// The field schema, in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// The contiguous row-major payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Total number of records across all dimensions.
    pub fn record_count(&self) -> usize {
        // Validated against overflow at construction.
        self.shape.iter().product()
    }
}
