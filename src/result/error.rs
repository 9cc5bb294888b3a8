use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("called `unwrap` on an `Err` value")]
pub struct UnwrapOnErr;

#[derive(Debug, Display, Error)]
#[display("called `unwrap_err` on an `Ok` value")]
pub struct UnwrapErrOnOk;
