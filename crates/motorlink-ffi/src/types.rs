/// Status codes returned by every exported function.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MlResult {
    Ok = 0,
    InvalidArgument = 1,
    Transaction = 2,
    Internal = 99,
}

#[allow(dead_code)]
pub const ML_OK: MlResult = MlResult::Ok;
#[allow(dead_code)]
pub const ML_ERR_INVALID_ARGUMENT: MlResult = MlResult::InvalidArgument;
#[allow(dead_code)]
pub const ML_ERR_TRANSACTION: MlResult = MlResult::Transaction;
#[allow(dead_code)]
pub const ML_ERR_INTERNAL: MlResult = MlResult::Internal;
