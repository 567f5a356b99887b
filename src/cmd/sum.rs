use crate::cmd::Cmd;
use crate::error::ShatSumError;
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use crypto_hash::{sha2::SHA512t, Digest, Output};
use std::io::{Read, Write};

/// 从标准输入读取全部数据, 以小写十六进制输出其SHA-512/t摘要
#[derive(Clone, Copy, Default)]
pub struct SumCmd;

impl SumCmd {
    pub const DEFAULT_BITS: isize = 256;

    fn bits(m: &ArgMatches) -> isize {
        m.get_one::<isize>("t")
            .copied()
            .unwrap_or(Self::DEFAULT_BITS)
    }

    /// `t`不合法时不会读取`input`
    pub fn digest_reader<R: Read>(t: isize, mut input: R) -> Result<Output, ShatSumError> {
        let mut sha = SHA512t::new(t)?;
        let n = std::io::copy(&mut input, &mut sha)?;
        log::debug!("SHA-512/{t}: absorbed {n} bytes");

        Ok(sha.finalize())
    }

    pub fn print_digest<W: Write>(digest: &Output, mut output: W) -> std::io::Result<()> {
        writeln!(output, "{:x}", digest)?;
        output.flush()
    }

    pub fn run_with<R: Read, W: Write>(
        &self,
        m: &ArgMatches,
        input: R,
        output: W,
    ) -> Result<(), ShatSumError> {
        let t = Self::bits(m);
        let digest = Self::digest_reader(t, input)?;
        Self::print_digest(&digest, output)?;
        Ok(())
    }
}

impl Cmd for SumCmd {
    const NAME: &'static str = "shatsum";

    fn cmd() -> Command {
        Command::new(Self::NAME)
            .about(clap::crate_description!())
            .arg(
                Arg::new("t")
                    .long("t")
                    .short('t')
                    .value_name("T")
                    .action(ArgAction::Set)
                    .value_parser(value_parser!(isize))
                    .allow_negative_numbers(true)
                    .default_value(Self::DEFAULT_BITS.to_string())
                    .help("digest bits length"),
            )
    }

    fn run(&self, m: &ArgMatches) -> anyhow::Result<()> {
        self.run_with(m, std::io::stdin().lock(), std::io::stdout().lock())
            .context("sha512/t sum failed")
    }
}
