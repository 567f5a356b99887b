use crate::HashError;
use num_bigint::BigUint;
use std::fmt::{Display, LowerHex, UpperHex};
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// 消息哈希摘要输出。 按书写顺序存储, 即大端序.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Output {
    // Output是由哈希算法生成, 由实现算法保证长度等于摘要的字节长度
    data: Vec<u8>,
}

impl Output {
    pub fn iter(&self) -> std::slice::Iter<'_, u8> {
        self.data.iter()
    }

    pub(crate) const fn from_vec(digest: Vec<u8>) -> Self {
        Self { data: digest }
    }

    /// 字节长度
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// `t == 0`时摘要为空
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `Output`字节长度超过`N`会截断输出低`N`字节, `Output`字节长度小于`N`高字节会补0.
    /// 大端序
    pub fn to_array<const N: usize>(&self) -> [u8; N] {
        let mut arr = [0u8; N];

        match self.len().cmp(&N) {
            std::cmp::Ordering::Less => arr[(N - self.len())..].copy_from_slice(self.as_ref()),
            std::cmp::Ordering::Equal => arr.copy_from_slice(self.as_ref()),
            std::cmp::Ordering::Greater => arr.copy_from_slice(&self.as_ref()[(self.len() - N)..]),
        }

        arr
    }
}

#[cfg(feature = "sec-zeroize")]
impl Zeroize for Output {
    fn zeroize(&mut self) {
        self.data.zeroize();
    }
}

impl AsRef<[u8]> for Output {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

/// `N`必须和`Output.len()`匹配, 否则会返回`HashError`.
impl<const N: usize> TryFrom<Output> for [u8; N] {
    type Error = HashError;

    fn try_from(value: Output) -> Result<Self, Self::Error> {
        <[u8; N]>::try_from(value.data.as_slice()).map_err(|_| HashError::MismatchingByteLen {
            target: N,
            real: value.len(),
        })
    }
}

impl From<Output> for Vec<u8> {
    fn from(value: Output) -> Self {
        value.data
    }
}

/// 按大端序无符号整数输出十进制
impl Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let n = BigUint::from_bytes_be(self.as_ref());
        f.write_fmt(format_args!("{}", n))
    }
}

/// 逐字节输出, 保留前导0
impl LowerHex for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02x}", b))?;
        }

        Ok(())
    }
}

impl UpperHex for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if f.alternate() {
            f.write_str("0X")?;
        }
        for &b in self.as_ref() {
            f.write_fmt(format_args!("{:02X}", b))?;
        }

        Ok(())
    }
}
