//! Record lookups over PDAs that may not exist yet.
//!
//! Write paths turn a missing record into a stable "not found" error.
//! Read paths return the zero-valued record instead of failing.

use anchor_lang::prelude::*;

use crate::error::RegistryError;

fn is_initialized(info: &AccountInfo) -> bool {
    info.owner == &crate::ID && !info.data_is_empty()
}

/// Load a program record, mapping an absent account to `missing`
pub fn load_record<T: AccountDeserialize>(info: &AccountInfo, missing: RegistryError) -> Result<T> {
    if !is_initialized(info) {
        return Err(missing.into());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}

/// Write a record loaded with `load_record` back to its account
pub fn store_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)
}

/// Read a program record, or its default value if the account is absent
pub fn read_or_default<T: AccountDeserialize + Default>(info: &AccountInfo) -> Result<T> {
    if !is_initialized(info) {
        return Ok(T::default());
    }
    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..])
}
