use crate::sha2::{f_ch, f_maj, SHA512};

impl SHA512 {
    #[inline]
    const fn rotate_s0(x: u64) -> u64 {
        x.rotate_right(28) ^ x.rotate_right(34) ^ x.rotate_right(39)
    }

    #[inline]
    const fn rotate_s1(x: u64) -> u64 {
        x.rotate_right(14) ^ x.rotate_right(18) ^ x.rotate_right(41)
    }

    #[inline]
    const fn rotate_d0(x: u64) -> u64 {
        x.rotate_right(1) ^ x.rotate_right(8) ^ (x >> 7)
    }

    #[inline]
    const fn rotate_d1(x: u64) -> u64 {
        x.rotate_right(19) ^ x.rotate_right(61) ^ (x >> 6)
    }

    /// 压缩函数. `blocks`的长度需是`BLOCK_SIZE`的整数倍, 按顺序逐块折叠进`digest`.
    pub(in crate::sha2) fn update(digest: &mut [u64; SHA512::DIGEST_WSIZE], blocks: &[u8]) {
        debug_assert_eq!(blocks.len() % SHA512::BLOCK_SIZE, 0);

        for chunk in blocks.chunks_exact(SHA512::BLOCK_SIZE) {
            let mut words = [0u64; SHA512::ROUNDS];
            for (word, bytes) in words.iter_mut().zip(chunk.chunks_exact(8)) {
                let mut be = [0u8; 8];
                be.copy_from_slice(bytes);
                *word = u64::from_be_bytes(be);
            }

            (SHA512::WORD_NUMS..words.len()).for_each(|j| {
                words[j] = Self::rotate_d1(words[j - 2])
                    .wrapping_add(words[j - 7])
                    .wrapping_add(Self::rotate_d0(words[j - 15]))
                    .wrapping_add(words[j - 16]);
            });

            let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *digest;

            words.into_iter().enumerate().for_each(|(j, word)| {
                let t1 = h
                    .wrapping_add(Self::rotate_s1(e))
                    .wrapping_add(f_ch(e, f, g))
                    .wrapping_add(SHA512::K[j])
                    .wrapping_add(word);
                let t2 = Self::rotate_s0(a).wrapping_add(f_maj(a, b, c));

                h = g;
                g = f;
                f = e;
                e = d.wrapping_add(t1);
                d = c;
                c = b;
                b = a;
                a = t1.wrapping_add(t2);
            });

            for (x, y) in digest.iter_mut().zip([a, b, c, d, e, f, g, h]) {
                *x = x.wrapping_add(y);
            }
        }
    }
}
