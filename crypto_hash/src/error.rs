use std::fmt::{Display, Formatter};
use thiserror::Error;

/// `t`不合法的具体原因
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamReason {
    /// `t < 0`或`t >= 512`
    OutOfRange,
    /// `t`不是8的整数倍
    NotByteAligned,
    /// `t == 384`, 应使用SHA-384
    ReservedForSha384,
}

impl Display for ParamReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ParamReason::OutOfRange => f.write_str("out of range [0, 512)"),
            ParamReason::NotByteAligned => f.write_str("not a multiple of 8"),
            ParamReason::ReservedForSha384 => f.write_str("reserved, use SHA-384 instead"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HashError {
    #[error("invalid SHA-512/t parameter t={t}: {reason}")]
    InvalidParameter { t: isize, reason: ParamReason },

    /// 实际字节长度`real`和目标字节长度`target`不匹配
    #[error("real byte length `{real}` not match to target byte length `{target}`")]
    MismatchingByteLen { target: usize, real: usize },
}
