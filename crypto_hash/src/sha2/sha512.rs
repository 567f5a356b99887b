#[cfg(feature = "sec-zeroize")]
use zeroize::Zeroize;

/// SHA-512的核心状态: 链接值, 未满一块的缓存数据以及已写入数据的总长度.
///
/// 初始值由调用者给出, SHA-512/t在此之上派生自己的初始值.
#[derive(Clone)]
pub(in crate::sha2) struct SHA512 {
    digest: [u64; Self::DIGEST_WSIZE],
    buf: [u8; Self::BLOCK_SIZE],
    // 记录buf下一个可写入位置的索引, 两次写入之间始终小于BLOCK_SIZE
    idx: usize,
    // 记录已写入数据的总长度(不含填充), 模2^64
    len: u64,
}

impl SHA512 {
    pub(in crate::sha2) const BLOCK_SIZE: usize = 128;
    pub(in crate::sha2) const WORD_NUMS: usize = 16;
    pub(in crate::sha2) const DIGEST_WSIZE: usize = 8;
    pub(in crate::sha2) const DIGEST_SIZE: usize = Self::DIGEST_WSIZE * 8;
    pub(in crate::sha2) const ROUNDS: usize = 80;
    // 数据长度填充到模BLOCK_SIZE余该值, 剩余16字节存放数据的位长度
    const DATA_PADDING_BYTES: usize = 112;

    pub(in crate::sha2) const INIT: [u64; Self::DIGEST_WSIZE] = [
        0x6a09e667f3bcc908,
        0xbb67ae8584caa73b,
        0x3c6ef372fe94f82b,
        0xa54ff53a5f1d36f1,
        0x510e527fade682d1,
        0x9b05688c2b3e6c1f,
        0x1f83d9abfb41bd6b,
        0x5be0cd19137e2179,
    ];

    pub(in crate::sha2) const K: [u64; Self::ROUNDS] = [
        0x428a2f98d728ae22,
        0x7137449123ef65cd,
        0xb5c0fbcfec4d3b2f,
        0xe9b5dba58189dbbc,
        0x3956c25bf348b538,
        0x59f111f1b605d019,
        0x923f82a4af194f9b,
        0xab1c5ed5da6d8118,
        0xd807aa98a3030242,
        0x12835b0145706fbe,
        0x243185be4ee4b28c,
        0x550c7dc3d5ffb4e2,
        0x72be5d74f27b896f,
        0x80deb1fe3b1696b1,
        0x9bdc06a725c71235,
        0xc19bf174cf692694,
        0xe49b69c19ef14ad2,
        0xefbe4786384f25e3,
        0x0fc19dc68b8cd5b5,
        0x240ca1cc77ac9c65,
        0x2de92c6f592b0275,
        0x4a7484aa6ea6e483,
        0x5cb0a9dcbd41fbd4,
        0x76f988da831153b5,
        0x983e5152ee66dfab,
        0xa831c66d2db43210,
        0xb00327c898fb213f,
        0xbf597fc7beef0ee4,
        0xc6e00bf33da88fc2,
        0xd5a79147930aa725,
        0x06ca6351e003826f,
        0x142929670a0e6e70,
        0x27b70a8546d22ffc,
        0x2e1b21385c26c926,
        0x4d2c6dfc5ac42aed,
        0x53380d139d95b3df,
        0x650a73548baf63de,
        0x766a0abb3c77b2a8,
        0x81c2c92e47edaee6,
        0x92722c851482353b,
        0xa2bfe8a14cf10364,
        0xa81a664bbc423001,
        0xc24b8b70d0f89791,
        0xc76c51a30654be30,
        0xd192e819d6ef5218,
        0xd69906245565a910,
        0xf40e35855771202a,
        0x106aa07032bbd1b8,
        0x19a4c116b8d2d0c8,
        0x1e376c085141ab53,
        0x2748774cdf8eeb99,
        0x34b0bcb5e19b48a8,
        0x391c0cb3c5c95a63,
        0x4ed8aa4ae3418acb,
        0x5b9cca4f7763e373,
        0x682e6ff3d6b2b8a3,
        0x748f82ee5defb2fc,
        0x78a5636f43172f60,
        0x84c87814a1f0ab72,
        0x8cc702081a6439ec,
        0x90befffa23631e28,
        0xa4506cebde82bde9,
        0xbef9a3f7b2c67915,
        0xc67178f2e372532b,
        0xca273eceea26619c,
        0xd186b8c721c0c207,
        0xeada7dd6cde0eb1e,
        0xf57d4f7fee6ed178,
        0x06f067aa72176fba,
        0x0a637dc5a2c898a6,
        0x113f9804bef90dae,
        0x1b710b35131c471b,
        0x28db77f523047d84,
        0x32caab7b40c72493,
        0x3c9ebe0a15c9bebc,
        0x431d67c49c100d4c,
        0x4cc5d4becb3e42b6,
        0x597f299cfc657e2a,
        0x5fcb6fab3ad6faec,
        0x6c44198c4a475817,
    ];

    pub(in crate::sha2) const fn new_with_init(init: [u64; Self::DIGEST_WSIZE]) -> Self {
        Self {
            digest: init,
            buf: [0; Self::BLOCK_SIZE],
            idx: 0,
            len: 0,
        }
    }

    /// 当前链接值
    pub(in crate::sha2) const fn state(&self) -> [u64; Self::DIGEST_WSIZE] {
        self.digest
    }

    /// 写入任意长度的数据, 满一块即压缩.
    pub(in crate::sha2) fn write_data(&mut self, mut data: &[u8]) {
        self.len = self.len.wrapping_add(data.len() as u64);

        if self.idx > 0 {
            let ava_len = data.len().min(Self::BLOCK_SIZE - self.idx);
            self.buf[self.idx..(self.idx + ava_len)].copy_from_slice(&data[0..ava_len]);
            self.idx += ava_len;

            if self.idx == Self::BLOCK_SIZE {
                Self::update(&mut self.digest, self.buf.as_ref());
                self.idx = 0;
            }

            data = &data[ava_len..];
        }

        // 整块数据直接压缩, 不经过buf
        if data.len() >= Self::BLOCK_SIZE {
            let n = data.len() & (!(Self::BLOCK_SIZE - 1));
            Self::update(&mut self.digest, &data[0..n]);
            data = &data[n..];
        }

        if !data.is_empty() {
            self.buf[0..data.len()].copy_from_slice(data);
            self.idx = data.len();
        }
    }

    /// 填充`0x80 || 0x00... || 位长度`, 填充后buf必须为空.
    pub(in crate::sha2) fn write_padding(&mut self) {
        let mut padding = [0u8; Self::BLOCK_SIZE];
        padding[0] = 0x80;

        // 注意是实际数据的长度
        let real_len = self.len;
        let len = (real_len % Self::BLOCK_SIZE as u64) as usize;
        if len < Self::DATA_PADDING_BYTES {
            self.write_data(&padding[0..(Self::DATA_PADDING_BYTES - len)]);
        } else {
            self.write_data(&padding[0..(Self::BLOCK_SIZE + Self::DATA_PADDING_BYTES - len)]);
        }

        self.write_data(((real_len as u128) << 3).to_be_bytes().as_ref());

        assert_eq!(self.idx, 0, "sha512: buffer not drained after padding");
    }

    /// 在副本上填充并输出完整的64字节链接值, `self`不变.
    pub(in crate::sha2) fn sum(&self) -> [u8; Self::DIGEST_SIZE] {
        let mut sha = self.clone();
        sha.write_padding();

        let mut digest = [0u8; Self::DIGEST_SIZE];
        for (chunk, word) in digest.chunks_exact_mut(8).zip(sha.digest) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        digest
    }
}

#[cfg(feature = "sec-zeroize")]
impl Zeroize for SHA512 {
    fn zeroize(&mut self) {
        self.digest.zeroize();
        self.buf.zeroize();
        self.idx = 0;
        self.len = 0;
    }
}

#[cfg(feature = "sec-zeroize-drop")]
impl Drop for SHA512 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use crate::sha2::SHA512;

    fn hex_digest(msg: &[u8]) -> String {
        let mut sha = SHA512::new_with_init(SHA512::INIT);
        sha.write_data(msg);
        sha.sum().iter().map(|b| format!("{b:02x}")).collect()
    }

    #[test]
    fn sha512() {
        let cases = [
            (
                "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e",
                "",
            ),
            (
                "1f40fc92da241694750979ee6cf582f2d5d7d28e18335de05abc54d0560e0f5302860c652bf08d560252aa5e74210546f369fbbbce8c12cfc7957b2652fe9a75",
                "a",
            ),
            (
                "2d408a0717ec188158278a796c689044361dc6fdde28d6f04973b80896e1823975cdbf12eb63f9e0591328ee235d80e9b5bf1aa6a44f4617ff3caf6400eb172d",
                "ab",
            ),
            (
                "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
                "abc",
            ),
            (
                "d8022f2060ad6efd297ab73dcc5355c9b214054b0d1776a136a669d26a7d3b14f73aa0d0ebff19ee333368f0164b6419a96da49e3e481753e7e96b716bdccb6f",
                "abcd",
            ),
            (
                "878ae65a92e86cac011a570d4c30a7eaec442b85ce8eca0c2952b5e3cc0628c2e79d889ad4d5c7c626986d452dd86374b6ffaa7cd8b67665bef2289a5c70b0a1",
                "abcde",
            ),
            (
                "e32ef19623e8ed9d267f657a81944b3d07adbb768518068e88435745564e8d4150a0a703be2a7d88b61e3d390c2bb97e2d4c311fdc69d6b1267f05f59aa920e7",
                "abcdef",
            ),
        ];

        for (tgt, msg) in cases {
            assert_eq!(hex_digest(msg.as_bytes()), tgt, "case=>{msg}");
        }
    }

    #[test]
    fn buffer_never_full_between_writes() {
        let mut sha = SHA512::new_with_init(SHA512::INIT);
        for n in [1usize, 127, 128, 129, 255, 256, 300] {
            sha.write_data(&vec![0x61u8; n]);
            assert!(sha.idx < SHA512::BLOCK_SIZE);
        }
        assert_eq!(sha.len, 1 + 127 + 128 + 129 + 255 + 256 + 300);
        assert_eq!(sha.idx as u64, sha.len % SHA512::BLOCK_SIZE as u64);
    }

    #[test]
    fn against_sha2_crate() {
        use ::sha2::Digest as _;
        use rand::{rngs::StdRng, Rng, SeedableRng};

        let mut rng = StdRng::seed_from_u64(512);
        for len in [0usize, 112, 128, 129, 255, 256, 1000, 3000] {
            let mut msg = vec![0u8; len];
            rng.fill(msg.as_mut_slice());

            let mut sha = SHA512::new_with_init(SHA512::INIT);
            sha.write_data(&msg);
            assert_eq!(
                sha.sum().as_slice(),
                ::sha2::Sha512::digest(&msg).as_slice(),
                "len=>{len}"
            );
        }
    }

    #[test]
    fn sum_keeps_state() {
        let mut sha = SHA512::new_with_init(SHA512::INIT);
        sha.write_data(b"ab");
        let (digest, idx, len) = (sha.state(), sha.idx, sha.len);
        let _ = sha.sum();
        assert_eq!((sha.state(), sha.idx, sha.len), (digest, idx, len));

        sha.write_data(b"c");
        assert_eq!(sha.sum(), {
            let mut abc = SHA512::new_with_init(SHA512::INIT);
            abc.write_data(b"abc");
            abc.sum()
        });
    }

    #[test]
    fn padding_lengths() {
        // 补齐后剩余长度落在112附近时需要额外的一块
        for n in [0usize, 1, 110, 111, 112, 113, 127, 128, 239, 240] {
            let mut sha = SHA512::new_with_init(SHA512::INIT);
            sha.write_data(&vec![0u8; n]);
            sha.write_padding();
            assert_eq!(sha.idx, 0, "n={n}");
            let padded = sha.len as usize;
            assert_eq!(padded % SHA512::BLOCK_SIZE, 0, "n={n}");
            assert!(padded - n > 16 && padded - n <= SHA512::BLOCK_SIZE + 16, "n={n}");
        }
    }
}
