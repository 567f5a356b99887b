pub mod cmd;
pub mod error;

/// 记录错误并丢弃, 返回`None`表示出错
pub fn log_error<T>(x: Result<T, anyhow::Error>) -> Option<T> {
    x.map_err(|e| {
        log::error!("{e:#}");
    })
    .ok()
}
