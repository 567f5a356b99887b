//! 实现标准: [FIPS 180-4](https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf)<br>
//!
//! SHA-512/t: 以SHA-512的压缩函数为核心, 使用由`t`派生的初始值, 输出截断为`t`位的摘要.

use std::ops::{BitAnd, BitXor, Not};

#[inline]
fn f_ch<T>(x: T, y: T, z: T) -> T
where
    T: Not<Output = T> + BitXor<Output = T> + BitAnd<Output = T> + Copy,
{
    (x & y) ^ ((!x) & z)
}

#[inline]
fn f_maj<T>(x: T, y: T, z: T) -> T
where
    T: Not<Output = T> + BitXor<Output = T> + BitAnd<Output = T> + Copy,
{
    (x & y) ^ (x & z) ^ (y & z)
}

mod generic;

mod sha512;
use sha512::SHA512;

mod sha512t;
pub use sha512t::SHA512t;
