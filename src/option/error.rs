use derive_more::{Display, Error};

#[derive(Debug, Display, Error)]
#[display("called `unwrap` on a `None` value")]
pub struct UnwrapOnNone;
