use std::io::Write;

mod output;
pub use output::Output;

mod error;
pub use error::{HashError, ParamReason};

pub mod sha2;

/// 哈希算法实现该trait, 计算消息的摘要. 通过`Write` trait将数据更新到`self`中后使用`self.finalize()`生成消息摘要.
///
/// 摘要长度在运行时确定(如SHA-512/t的`t`), 所以以方法而不是常量给出.
///
/// 可用于如下安全应用中:
/// - 数据一致性验证;
/// - 参与数字签名的生成和验证;
/// - 密钥派生;
pub trait Digest: Write {
    /// 哈希算法每次按块处理消息的块的位长度
    const BLOCK_BITS: usize;
    /// 哈希算法将每个块按该位长度划分为若干个单词
    const WORD_BITS: usize;

    /// 哈希算法生成的摘要的位长度
    fn digest_bits(&self) -> usize;

    /// 生成当前已写入消息的摘要. 不改变`self`, 之后可以继续写入数据.
    fn finalize(&self) -> Output;

    /// 重置哈希算法到初始化状态
    fn reset(&mut self);
}
