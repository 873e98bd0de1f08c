//! Serialization boundary.
//!
//! A matrix goes over the wire as `(rows: i32, columns: i32, data: [f64])`,
//! `data` row-major. [`Matrix`] implements `Serialize` and `Deserialize`
//! through this shape, so any serde format works.
//!
//! ```
//! use densemat::Matrix;
//! use densemat::matrix::codec::{decode, encode};
//!
//! let a = Matrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3)?;
//! let encoded = encode(&a)?;
//! assert_eq!((encoded.rows, encoded.columns), (2, 3));
//! assert_eq!(decode(encoded)?, a);
//! # Ok::<(), densemat::MatrixError>(())
//! ```

use log::debug;
use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Matrix, Storage};
use crate::error::{FormatError, Result};

/// Wire form of a matrix. Field order is the encoding order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Encoded {
    pub rows: i32,
    pub columns: i32,
    pub data: Vec<f64>,
}

pub fn encode(m: &Matrix<'_>) -> Result<Encoded> {
    let too_large = || FormatError::TooLarge { rows: m.rows, columns: m.columns };
    let rows = i32::try_from(m.rows).map_err(|_| too_large())?;
    let columns = i32::try_from(m.columns).map_err(|_| too_large())?;
    Ok(Encoded { rows, columns, data: m.to_vec() })
}

/// Inverse of [`encode`]. The decoded buffer belongs to the new matrix.
pub fn decode(encoded: Encoded) -> Result<Matrix<'static>> {
    let Encoded { rows, columns, data } = encoded;
    if rows <= 0 || columns <= 0 {
        debug!("rejecting encoded matrix with shape {}x{}", rows, columns);
        return Err(FormatError::NonPositive { rows, columns }.into());
    }
    let (r, c) = (rows as usize, columns as usize);
    if r.checked_mul(c) != Some(data.len()) {
        debug!("rejecting encoded {}x{} matrix carrying {} values", rows, columns, data.len());
        return Err(FormatError::LengthMismatch { rows, columns, got: data.len() }.into());
    }
    Ok(Matrix::from_parts(r, c, Storage::Copied(data)))
}

impl Serialize for Matrix<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        encode(self).map_err(S::Error::custom)?.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Matrix<'static> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        decode(Encoded::deserialize(deserializer)?).map_err(D::Error::custom)
    }
}
