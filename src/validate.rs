//! Pre-flight parameter validation.
//!
//! Each endpoint documents a size bound on its identifier collections
//! ("enter up to 20 serial numbers", "a maximum of five bug IDs").
//! Adapters check the bound before building the request, so a
//! violation never reaches the network.

use crate::error::{Result, SupportError};

/// Fail unless `values` holds at most `limit` elements.
pub(crate) fn at_most<T>(param: &'static str, values: &[T], limit: usize) -> Result<()> {
    if values.len() > limit {
        return Err(SupportError::Validation {
            param,
            reason: format!("{} values passed, at most {limit} allowed", values.len()),
        });
    }
    Ok(())
}

/// Fail unless `values` holds at least `limit` elements.
#[allow(dead_code)]
pub(crate) fn at_least<T>(param: &'static str, values: &[T], limit: usize) -> Result<()> {
    if values.len() < limit {
        return Err(SupportError::Validation {
            param,
            reason: format!("{} values passed, at least {limit} required", values.len()),
        });
    }
    Ok(())
}
