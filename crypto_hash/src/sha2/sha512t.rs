use crate::sha2::SHA512;
use crate::{Digest, HashError, Output, ParamReason};
use std::io::Write;
#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// SHA-512/t, 参考FIPS 180-4 5.3.6节. <br>
///
/// `t`为摘要的位长度, 需满足`0 <= t < 512`, `t % 8 == 0`且`t != 384`(SHA-384是另外定义的算法).
/// 初始值由`t`派生: 将SHA-512的初始值与`0xa5a5a5a5a5a5a5a5`异或后计算字符串`"SHA-512/t"`的SHA-512值,
/// 得到的8个字作为该`t`的初始值.
///
/// 同一实例不能被多个线程同时写入, 调用者需自行保证.
#[derive(Clone)]
pub struct SHA512t {
    sha: SHA512,
    init: [u64; SHA512::DIGEST_WSIZE],
    bits: usize,
}

impl SHA512t {
    /// 块的字节长度
    pub const BLOCK_SIZE: usize = SHA512::BLOCK_SIZE;

    /// 指定输出摘要的位长度`t`
    pub fn new(t: isize) -> Result<Self, HashError> {
        let bits = Self::check_param(t)?;
        let init = Self::derive_init(bits);

        Ok(Self {
            sha: SHA512::new_with_init(init),
            init,
            bits,
        })
    }

    /// 生成消息`msg`的SHA-512/t摘要
    pub fn digest(t: isize, msg: &[u8]) -> Result<Output, HashError> {
        let mut sha = Self::new(t)?;
        sha.update(msg);
        Ok(Digest::finalize(&sha))
    }

    fn check_param(t: isize) -> Result<usize, HashError> {
        let reason = if !(0..512).contains(&t) {
            ParamReason::OutOfRange
        } else if t % 8 != 0 {
            ParamReason::NotByteAligned
        } else if t == 384 {
            ParamReason::ReservedForSha384
        } else {
            return Ok(t as usize);
        };

        Err(HashError::InvalidParameter { t, reason })
    }

    fn derive_init(bits: usize) -> [u64; SHA512::DIGEST_WSIZE] {
        let mut init = SHA512::INIT;
        init.iter_mut().for_each(|d| {
            *d ^= 0xa5a5a5a5a5a5a5a5u64;
        });

        let mut sha = SHA512::new_with_init(init);
        sha.write_data(format!("SHA-512/{}", bits).as_bytes());
        sha.write_padding();
        sha.state()
    }

    /// 写入消息数据, 可分多次写入任意长度
    pub fn update(&mut self, data: &[u8]) {
        self.sha.write_data(data);
    }

    /// 将当前摘要追加到`out`之后, `self`不变
    pub fn finalize_into(&self, out: &mut Vec<u8>) {
        out.extend_from_slice(&self.sha.sum()[..self.digest_len()]);
    }

    /// 摘要的字节长度, 即`t / 8`
    pub const fn digest_len(&self) -> usize {
        self.bits >> 3
    }

    /// 由`t`派生的初始值
    pub const fn initial_state(&self) -> [u64; 8] {
        self.init
    }
}

#[cfg(feature = "sec-zeroize")]
impl Zeroize for SHA512t {
    fn zeroize(&mut self) {
        self.sha.zeroize();
        self.init.zeroize();
        self.bits = 0;
    }
}

impl Write for SHA512t {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl Digest for SHA512t {
    const BLOCK_BITS: usize = SHA512::BLOCK_SIZE * 8;
    const WORD_BITS: usize = 64;

    fn digest_bits(&self) -> usize {
        self.bits
    }

    fn finalize(&self) -> Output {
        let mut digest = Vec::with_capacity(self.digest_len());
        self.finalize_into(&mut digest);
        Output::from_vec(digest)
    }

    fn reset(&mut self) {
        self.sha = SHA512::new_with_init(self.init);
    }
}
