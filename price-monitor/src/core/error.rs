use thiserror::Error;

/// 服务启动/运行错误
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("无法绑定端口 {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("HTTP 服务异常: {0}")]
    Serve(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
